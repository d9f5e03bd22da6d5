use clap::Parser;
use sisense_client::application::{config::Args, startup};
use tracing::error;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(error) = startup::run(args).await {
        error!("request failed: {error}");
        std::process::exit(1);
    }
}
