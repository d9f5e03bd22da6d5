use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    protocol::RequestOptions,
    rpc::methods::{V09_PREFIX, join_path, json_options},
};

#[derive(Debug)]
pub struct Settings {
    gateway: Gateway,
}

impl Settings {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get(&self, section: &str) -> Result<Value, ClientError> {
        self.gateway
            .get(&join_path(V09_PREFIX, &["settings", section])?, RequestOptions::new())
            .await
    }

    pub async fn update(&self, section: &str, body: Value) -> Result<Value, ClientError> {
        self.gateway
            .put(&join_path(V09_PREFIX, &["settings", section])?, json_options(body))
            .await
    }
}
