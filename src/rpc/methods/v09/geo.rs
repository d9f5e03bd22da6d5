use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    rpc::methods::{V09_PREFIX, join_path, query_options},
};

#[derive(Debug)]
pub struct Geo {
    gateway: Gateway,
}

impl Geo {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn locations(&self, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        self.gateway
            .get(&join_path(V09_PREFIX, &["geo", "locations"])?, query_options(query))
            .await
    }
}
