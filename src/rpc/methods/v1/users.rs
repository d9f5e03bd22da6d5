use serde_json::Value;

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    protocol::{HttpMethod, RequestOptions},
    rpc::methods::{Collection, V1_PREFIX},
};

#[derive(Debug)]
pub struct Users {
    collection: Collection,
}

impl Users {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self {
            collection: Collection::new(gateway, V1_PREFIX, "users", HttpMethod::Patch),
        }
    }

    pub async fn all(&self, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        self.collection.all(query).await
    }

    pub async fn get(&self, id: &str) -> Result<Value, ClientError> {
        self.collection.get(id).await
    }

    pub async fn create(&self, body: Value) -> Result<Value, ClientError> {
        self.collection.create(body).await
    }

    pub async fn update(&self, id: &str, body: Value) -> Result<Value, ClientError> {
        self.collection.update(id, body).await
    }

    pub async fn delete(&self, id: &str) -> Result<Value, ClientError> {
        self.collection.delete(id).await
    }

    pub async fn logged_in(&self) -> Result<Value, ClientError> {
        self.collection
            .gateway()
            .get(&self.collection.item_path("loggedin")?, RequestOptions::new())
            .await
    }
}
