use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    protocol::RequestOptions,
    rpc::methods::{V09_PREFIX, join_path, json_options},
};

#[derive(Debug)]
pub struct Branding {
    gateway: Gateway,
}

impl Branding {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get(&self) -> Result<Value, ClientError> {
        self.gateway
            .get(&join_path(V09_PREFIX, &["branding"])?, RequestOptions::new())
            .await
    }

    pub async fn update(&self, body: Value) -> Result<Value, ClientError> {
        self.gateway
            .post(&join_path(V09_PREFIX, &["branding"])?, json_options(body))
            .await
    }
}
