use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    protocol::RequestOptions,
    rpc::methods::{V09_PREFIX, join_path},
};

#[derive(Debug)]
pub struct Roles {
    gateway: Gateway,
}

impl Roles {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn all(&self) -> Result<Value, ClientError> {
        self.gateway
            .get(&join_path(V09_PREFIX, &["roles"])?, RequestOptions::new())
            .await
    }

    pub async fn get(&self, id_or_name: &str) -> Result<Value, ClientError> {
        self.gateway
            .get(&join_path(V09_PREFIX, &["roles", id_or_name])?, RequestOptions::new())
            .await
    }
}
