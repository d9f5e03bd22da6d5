use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    protocol::RequestOptions,
    rpc::methods::{V1_PREFIX, join_path, query_options},
};

#[derive(Debug)]
pub struct Admin {
    gateway: Gateway,
}

impl Admin {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn system_info(&self) -> Result<Value, ClientError> {
        self.gateway
            .get(
                &join_path(V1_PREFIX, &["admin", "system_info"])?,
                RequestOptions::new(),
            )
            .await
    }

    pub async fn logs(&self, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        self.gateway
            .get(&join_path(V1_PREFIX, &["admin", "logs"])?, query_options(query))
            .await
    }
}
