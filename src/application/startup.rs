use std::sync::Arc;

use serde_json::Value;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{
    application::config::{Args, CliConfig},
    domain::error::ClientError,
    interfaces::transport::HttpTransport,
    protocol::RequestOptions,
    rpc::{dispatcher::Client, registry},
};

pub async fn run(args: Args) -> Result<(), ClientError> {
    init_logging(&args.log_filter, args.json_logs)?;
    let config = CliConfig::from_args(args).map_err(ClientError::Config)?;

    if config.list_operations {
        print_operations();
        return Ok(());
    }

    let payload = execute(config).await?;
    let rendered = serde_json::to_string_pretty(&payload)?;
    println!("{rendered}");
    Ok(())
}

pub async fn execute(config: CliConfig) -> Result<Value, ClientError> {
    let transport = HttpTransport::with_timeout(config.timeout)?;
    let has_credentials = config.has_credentials();
    let mut client = Client::with_transport(config.base_url, config.client, Arc::new(transport));

    if client.access_token().is_empty() && has_credentials {
        client.authenticate("", "").await?;
        info!("authenticated against {}", client.base_url());
    }

    let mut options = RequestOptions::new().query_pairs(config.query);
    if let Some(data) = config.data {
        options = options.json(data);
    }

    client
        .run_request(&config.path, config.method, options)
        .await
}

fn print_operations() {
    for version in registry::versions() {
        let Some(table) = registry::operations(version) else {
            continue;
        };
        for (name, kind) in table {
            println!("{version}\t{name}\t{}", kind.type_name());
        }
    }
}

fn init_logging(filter: &str, json_logs: bool) -> Result<(), ClientError> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json_logs {
        builder.json().try_init().map_err(|error| {
            ClientError::Config(format!("failed to initialize logger: {error}"))
        })?;
    } else {
        builder.compact().try_init().map_err(|error| {
            ClientError::Config(format!("failed to initialize logger: {error}"))
        })?;
    }

    Ok(())
}
