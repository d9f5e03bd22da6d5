use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    rpc::methods::{V09_PREFIX, join_path, json_options, query_options},
};

#[derive(Debug)]
pub struct DataSources {
    gateway: Gateway,
}

impl DataSources {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn all(&self, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        self.gateway
            .get(&join_path(V09_PREFIX, &["datasources"])?, query_options(query))
            .await
    }

    pub async fn fields(&self, data_source: &str, body: Value) -> Result<Value, ClientError> {
        self.gateway
            .post(
                &join_path(V09_PREFIX, &["datasources", data_source, "fields", "search"])?,
                json_options(body),
            )
            .await
    }
}
