use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    rpc::methods::{V09_PREFIX, join_path, query_options},
};

#[derive(Debug)]
pub struct Authorization {
    gateway: Gateway,
}

impl Authorization {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn permissions(&self, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        self.gateway
            .get(
                &join_path(V09_PREFIX, &["authorization", "permissions"])?,
                query_options(query),
            )
            .await
    }
}
