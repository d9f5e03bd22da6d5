use serde_json::Value;

use crate::{
    domain::{error::ClientError, models::LoginResponse},
    interfaces::gateway::Gateway,
    protocol::RequestOptions,
    rpc::methods::{V1_PREFIX, join_path},
};

#[derive(Debug)]
pub struct Authentication {
    gateway: Gateway,
}

impl Authentication {
    pub(crate) fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Value, ClientError> {
        let options = RequestOptions::new()
            .form("username", username)
            .form("password", password);
        self.gateway
            .post(&join_path(V1_PREFIX, &["authentication", "login"])?, options)
            .await
    }

    pub async fn login_typed(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ClientError> {
        let payload = self.login(username, password).await?;
        serde_json::from_value(payload).map_err(|error| {
            ClientError::InvalidResponse(format!("unexpected login response: {error}"))
        })
    }

    pub async fn logout(&self) -> Result<Value, ClientError> {
        self.gateway
            .get(
                &join_path(V1_PREFIX, &["authentication", "logout"])?,
                RequestOptions::new(),
            )
            .await
    }

    pub async fn is_auth(&self) -> Result<Value, ClientError> {
        self.gateway
            .get(
                &join_path(V1_PREFIX, &["authentication", "isauth"])?,
                RequestOptions::new(),
            )
            .await
    }
}
