use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;
use tracing::debug;

use crate::{
    domain::error::ClientError,
    interfaces::transport::Transport,
    protocol::{HttpMethod, HttpRequest, RequestOptions, absolute_url},
    security::auth::apply_bearer_token,
};

/// Clones share the access token, so a token set after a handler was built
/// is still picked up by that handler.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    base_url: String,
    transport: Arc<dyn Transport>,
    access_token: RwLock<String>,
}

impl Gateway {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                base_url: base_url.into(),
                transport,
                access_token: RwLock::new(access_token.into()),
            }),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    #[must_use]
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.inner.transport)
    }

    #[must_use]
    pub fn access_token(&self) -> String {
        self.inner
            .access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_access_token(&self, token: impl Into<String>) {
        *self
            .inner
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = token.into();
    }

    pub async fn run_request(
        &self,
        path: &str,
        method: HttpMethod,
        mut options: RequestOptions,
    ) -> Result<Value, ClientError> {
        let authorized = apply_bearer_token(&mut options, &self.access_token());
        let url = absolute_url(self.base_url(), path);
        debug!("request method={method} url={url} bearer={authorized}");

        let body = self
            .inner
            .transport
            .send(HttpRequest {
                method,
                url,
                options,
            })
            .await?;

        decode_body(&body)
    }

    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.run_request(path, HttpMethod::Get, options).await
    }

    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.run_request(path, HttpMethod::Post, options).await
    }

    pub async fn put(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.run_request(path, HttpMethod::Put, options).await
    }

    pub async fn patch(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.run_request(path, HttpMethod::Patch, options).await
    }

    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.run_request(path, HttpMethod::Delete, options).await
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

/// Empty bodies (e.g. `204 No Content`) decode to `null`.
pub(crate) fn decode_body(body: &str) -> Result<Value, ClientError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}
