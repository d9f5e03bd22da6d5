use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    protocol::RequestOptions,
    rpc::methods::{V1_PREFIX, join_path},
};

#[derive(Debug)]
pub struct Application {
    gateway: Gateway,
}

impl Application {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn status(&self) -> Result<Value, ClientError> {
        self.gateway
            .get(
                &join_path(V1_PREFIX, &["application", "status"])?,
                RequestOptions::new(),
            )
            .await
    }

    pub async fn version(&self) -> Result<Value, ClientError> {
        self.gateway
            .get(
                &join_path(V1_PREFIX, &["application", "version"])?,
                RequestOptions::new(),
            )
            .await
    }
}
