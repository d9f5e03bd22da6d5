pub mod v09;
pub mod v1;

use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    protocol::{HttpMethod, RequestOptions},
};

pub(crate) const V1_PREFIX: &str = "/api/v1";
pub(crate) const V09_PREFIX: &str = "/api";

/// Each segment is percent-encoded, so `/`, `?` and `#` stay inside it.
/// Empty and dot segments are rejected since URL parsing would collapse them.
pub(crate) fn join_path(prefix: &str, segments: &[&str]) -> Result<String, ClientError> {
    let mut path = prefix.to_owned();
    for segment in segments {
        if matches!(*segment, "" | "." | "..") {
            return Err(ClientError::InvalidPath(format!(
                "invalid path segment `{segment}` under {prefix}"
            )));
        }
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    Ok(path)
}

pub(crate) fn query_options(query: &[(&str, &str)]) -> RequestOptions {
    RequestOptions::new().query_pairs(query.iter().copied())
}

pub(crate) fn json_options(body: Value) -> RequestOptions {
    RequestOptions::new().json(body)
}

#[derive(Debug, Clone)]
pub(crate) struct Collection {
    gateway: Gateway,
    path: String,
    update_method: HttpMethod,
}

impl Collection {
    pub(crate) fn new(
        gateway: Gateway,
        prefix: &str,
        resource: &str,
        update_method: HttpMethod,
    ) -> Self {
        Self {
            gateway,
            path: format!("{prefix}/{resource}"),
            update_method,
        }
    }

    pub(crate) fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub(crate) fn item_path(&self, id: &str) -> Result<String, ClientError> {
        join_path(&self.path, &[id])
    }

    pub(crate) async fn all(&self, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        self.gateway.get(&self.path, query_options(query)).await
    }

    pub(crate) async fn get(&self, id: &str) -> Result<Value, ClientError> {
        self.gateway
            .get(&self.item_path(id)?, RequestOptions::new())
            .await
    }

    pub(crate) async fn create(&self, body: Value) -> Result<Value, ClientError> {
        self.gateway.post(&self.path, json_options(body)).await
    }

    pub(crate) async fn update(&self, id: &str, body: Value) -> Result<Value, ClientError> {
        self.gateway
            .run_request(&self.item_path(id)?, self.update_method, json_options(body))
            .await
    }

    pub(crate) async fn delete(&self, id: &str) -> Result<Value, ClientError> {
        self.gateway
            .delete(&self.item_path(id)?, RequestOptions::new())
            .await
    }
}
