use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    protocol::HttpMethod,
    rpc::methods::{Collection, V09_PREFIX},
};

#[derive(Debug)]
pub struct Palettes {
    collection: Collection,
}

impl Palettes {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self {
            collection: Collection::new(gateway, V09_PREFIX, "palettes", HttpMethod::Put),
        }
    }

    pub async fn all(&self) -> Result<Value, ClientError> {
        self.collection.all(&[]).await
    }

    pub async fn get(&self, name: &str) -> Result<Value, ClientError> {
        self.collection.get(name).await
    }

    pub async fn create(&self, body: Value) -> Result<Value, ClientError> {
        self.collection.create(body).await
    }

    pub async fn update(&self, name: &str, body: Value) -> Result<Value, ClientError> {
        self.collection.update(name, body).await
    }

    pub async fn delete(&self, name: &str) -> Result<Value, ClientError> {
        self.collection.delete(name).await
    }
}
