use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    rpc::methods::{V09_PREFIX, join_path, json_options},
};

#[derive(Debug)]
pub struct Reporting {
    gateway: Gateway,
}

impl Reporting {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn send(&self, body: Value) -> Result<Value, ClientError> {
        self.gateway
            .post(&join_path(V09_PREFIX, &["reporting"])?, json_options(body))
            .await
    }
}
