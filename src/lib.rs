pub mod application;
pub mod domain;
pub mod interfaces;
pub mod protocol;
pub mod rpc;
pub mod security;

pub use application::config::ClientConfig;
pub use domain::error::ClientError;
pub use interfaces::{
    gateway::Gateway,
    transport::{HttpTransport, Transport, TransportError},
};
pub use protocol::{HttpMethod, HttpRequest, RequestOptions};
pub use rpc::{
    dispatcher::Client,
    handler::{ApiHandler, Handler},
    methods::{v1, v09},
    registry::{HandlerKind, V0_9, V1_0},
};
