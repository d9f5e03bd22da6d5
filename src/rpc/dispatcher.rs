use std::{collections::HashMap, sync::Arc};

use serde_json::Value;
use tracing::debug;

use crate::{
    application::config::ClientConfig,
    domain::error::ClientError,
    interfaces::{
        gateway::Gateway,
        transport::{HttpTransport, Transport},
    },
    protocol::{HttpMethod, RequestOptions},
    rpc::{
        handler::{ApiHandler, Handler},
        methods::v1,
        registry::{self, V1_0},
    },
    security::auth::resolve_credentials,
};

pub struct Client {
    gateway: Gateway,
    session: ClientConfig,
    cache: HashMap<(String, String), Handler>,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_config(base_url, ClientConfig::default())
    }

    pub fn with_config(
        base_url: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, ClientError> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(base_url, config, Arc::new(transport)))
    }

    #[must_use]
    pub fn with_transport(
        base_url: impl Into<String>,
        mut config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let access_token = std::mem::take(&mut config.access_token);
        Self {
            gateway: Gateway::new(base_url, transport, access_token),
            session: config,
            cache: HashMap::new(),
        }
    }

    /// The one-call version is consumed once the version is known to be
    /// supported, even if `name` then turns out to be unknown.
    pub fn resolve(&mut self, name: &str) -> Result<Handler, ClientError> {
        let version = self.active_version().to_owned();
        let Some(table) = registry::operations(&version) else {
            return Err(ClientError::UnsupportedVersion(version));
        };

        self.session.v.clear();

        let Some(kind) = registry::find_operation(table, name) else {
            return Err(ClientError::UnknownOperation {
                version,
                available: registry::operation_names(table),
            });
        };

        let key = (version, name.to_owned());
        if let Some(handler) = self.cache.get(&key) {
            return Ok(handler.clone());
        }

        debug!(
            "building handler version={} name={} kind={}",
            key.0,
            key.1,
            kind.type_name()
        );
        let handler = kind.build(self.gateway.clone());
        self.cache.insert(key, handler.clone());
        Ok(handler)
    }

    pub fn resolve_as<T: ApiHandler>(&mut self, name: &str) -> Result<Arc<T>, ClientError> {
        let handler = self.resolve(name)?;
        handler
            .downcast::<T>()
            .ok_or_else(|| ClientError::HandlerMismatch {
                name: name.to_owned(),
                expected: T::KIND.type_name(),
                found: handler.type_name(),
            })
    }

    pub fn use_version(&mut self, version: impl Into<String>, set_as_default: bool) -> &mut Self {
        let version = version.into();
        if set_as_default {
            self.session.default_version.clone_from(&version);
        }
        self.session.v = version;
        self
    }

    pub fn v(&mut self, version: impl Into<String>, set_as_default: bool) -> &mut Self {
        self.use_version(version, set_as_default)
    }

    pub fn use_access_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.gateway.set_access_token(token);
        self
    }

    pub async fn authenticate(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        if !username.is_empty() {
            self.session.username = username.to_owned();
        }
        if !password.is_empty() {
            self.session.password = password.to_owned();
        }

        let credentials = resolve_credentials(&self.session.username, &self.session.password)?;

        let authentication = self
            .use_version(V1_0, false)
            .resolve_as::<v1::Authentication>("authentication")?;
        let response = authentication
            .login_typed(&credentials.username, &credentials.password)
            .await?;
        let Some(token) = response.token() else {
            return Err(ClientError::InvalidResponse(
                "login response has no access_token".to_owned(),
            ));
        };

        debug!("authenticated user={}", credentials.username);
        self.use_access_token(token);
        Ok(())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.gateway.base_url()
    }

    #[must_use]
    pub fn http(&self) -> Arc<dyn Transport> {
        self.gateway.transport()
    }

    #[must_use]
    pub fn access_token(&self) -> String {
        self.gateway.access_token()
    }

    #[must_use]
    pub fn default_version(&self) -> &str {
        &self.session.default_version
    }

    #[must_use]
    pub fn pending_version(&self) -> &str {
        &self.session.v
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.session
    }

    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    fn active_version(&self) -> &str {
        if self.session.v.is_empty() {
            &self.session.default_version
        } else {
            &self.session.v
        }
    }

    pub async fn run_request(
        &self,
        path: &str,
        method: HttpMethod,
        options: RequestOptions,
    ) -> Result<Value, ClientError> {
        self.gateway.run_request(path, method, options).await
    }

    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.gateway.get(path, options).await
    }

    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.gateway.post(path, options).await
    }

    pub async fn put(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.gateway.put(path, options).await
    }

    pub async fn patch(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.gateway.patch(path, options).await
    }

    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<Value, ClientError> {
        self.gateway.delete(path, options).await
    }

    pub fn users(&mut self) -> Result<Handler, ClientError> {
        self.resolve("users")
    }

    pub fn groups(&mut self) -> Result<Handler, ClientError> {
        self.resolve("groups")
    }

    pub fn application(&mut self) -> Result<Handler, ClientError> {
        self.resolve("application")
    }

    pub fn authentication(&mut self) -> Result<Handler, ClientError> {
        self.resolve("authentication")
    }

    pub fn account(&mut self) -> Result<Handler, ClientError> {
        self.resolve("account")
    }

    pub fn admin(&mut self) -> Result<Handler, ClientError> {
        self.resolve("admin")
    }

    pub fn authorization(&mut self) -> Result<Handler, ClientError> {
        self.resolve("authorization")
    }

    pub fn elasti_cubes(&mut self) -> Result<Handler, ClientError> {
        self.resolve("elastiCubes")
    }

    pub fn branding(&mut self) -> Result<Handler, ClientError> {
        self.resolve("branding")
    }

    pub fn reporting(&mut self) -> Result<Handler, ClientError> {
        self.resolve("reporting")
    }

    pub fn palettes(&mut self) -> Result<Handler, ClientError> {
        self.resolve("palettes")
    }

    pub fn settings(&mut self) -> Result<Handler, ClientError> {
        self.resolve("settings")
    }

    pub fn roles(&mut self) -> Result<Handler, ClientError> {
        self.resolve("roles")
    }

    pub fn data_sources(&mut self) -> Result<Handler, ClientError> {
        self.resolve("dataSources")
    }

    pub fn geo(&mut self) -> Result<Handler, ClientError> {
        self.resolve("geo")
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.gateway.base_url())
            .field("default_version", &self.session.default_version)
            .field("pending_version", &self.session.v)
            .field("cached_handlers", &self.cache.len())
            .finish_non_exhaustive()
    }
}
