use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    protocol::RequestOptions,
    rpc::methods::{V09_PREFIX, join_path, query_options},
};

#[derive(Debug)]
pub struct ElastiCubes {
    gateway: Gateway,
}

impl ElastiCubes {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn all(&self, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        self.gateway
            .get(
                &join_path(V09_PREFIX, &["elasticubes", "getElasticubes"])?,
                query_options(query),
            )
            .await
    }

    pub async fn servers(&self) -> Result<Value, ClientError> {
        self.gateway
            .get(
                &join_path(V09_PREFIX, &["elasticubes", "servers"])?,
                RequestOptions::new(),
            )
            .await
    }

    pub async fn metadata(&self, server: &str, title: &str) -> Result<Value, ClientError> {
        self.gateway
            .get(&cube_path(server, title, "metadata")?, RequestOptions::new())
            .await
    }

    pub async fn start(&self, server: &str, title: &str) -> Result<Value, ClientError> {
        self.gateway
            .post(&cube_path(server, title, "start")?, RequestOptions::new())
            .await
    }

    pub async fn stop(&self, server: &str, title: &str) -> Result<Value, ClientError> {
        self.gateway
            .post(&cube_path(server, title, "stop")?, RequestOptions::new())
            .await
    }
}

fn cube_path(server: &str, title: &str, action: &str) -> Result<String, ClientError> {
    join_path(V09_PREFIX, &["elasticubes", server, title, action])
}
