use serde_json::{Value, json};

use crate::{
    domain::error::ClientError,
    interfaces::gateway::Gateway,
    rpc::methods::{V1_PREFIX, join_path, json_options},
};

#[derive(Debug)]
pub struct Account {
    gateway: Gateway,
}

impl Account {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn begin_reset_password(&self, email: &str) -> Result<Value, ClientError> {
        self.gateway
            .post(
                &join_path(V1_PREFIX, &["account", "begin_reset_password"])?,
                json_options(json!({ "email": email })),
            )
            .await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<Value, ClientError> {
        self.gateway
            .post(
                &join_path(V1_PREFIX, &["account", "reset_password", token])?,
                json_options(json!({ "newPassword": new_password })),
            )
            .await
    }

    pub async fn change_password(&self, user_id: &str, body: Value) -> Result<Value, ClientError> {
        self.gateway
            .put(
                &join_path(V1_PREFIX, &["account", "change_password", user_id])?,
                json_options(body),
            )
            .await
    }
}
