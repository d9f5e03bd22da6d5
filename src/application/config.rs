use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{domain::error::ClientError, protocol::HttpMethod, rpc::registry::DEFAULT_VERSION};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// One-call version override, consumed by the next resolution.
    pub v: String,
    pub access_token: String,
    pub default_version: String,
    pub username: String,
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            v: String::new(),
            access_token: String::new(),
            default_version: DEFAULT_VERSION.to_owned(),
            username: String::new(),
            password: String::new(),
            extra: Map::new(),
        }
    }
}

impl ClientConfig {
    pub fn from_map(map: Map<String, Value>) -> Result<Self, ClientError> {
        serde_json::from_value(Value::Object(map))
            .map_err(|error| ClientError::Config(format!("invalid client config: {error}")))
    }

    pub fn load_file(path: &Path) -> Result<Self, ClientError> {
        let raw = fs::read_to_string(path).map_err(|error| {
            ClientError::Config(format!("failed to read {}: {error}", path.display()))
        })?;
        toml::from_str(&raw).map_err(|error| {
            ClientError::Config(format!("failed to parse {}: {error}", path.display()))
        })
    }

    #[must_use]
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    #[must_use]
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "sisense",
    version,
    about = "Sisense REST client: issue one authenticated API call and print the JSON result"
)]
pub struct Args {
    #[arg(long, env = "SISENSE_BASE_URL")]
    pub base_url: Option<String>,

    /// TOML file with client config keys (and optionally `base_url`).
    #[arg(long, env = "SISENSE_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "SISENSE_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "SISENSE_PASSWORD")]
    pub password: Option<String>,

    #[arg(long, env = "SISENSE_ACCESS_TOKEN")]
    pub access_token: Option<String>,

    #[arg(long, env = "SISENSE_API_VERSION")]
    pub api_version: Option<String>,

    #[arg(long, env = "SISENSE_TIMEOUT_MS", default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Query parameter as `key=value`; repeatable.
    #[arg(long = "query", value_parser = parse_key_value)]
    pub query: Vec<(String, String)>,

    /// JSON request body.
    #[arg(long)]
    pub data: Option<String>,

    #[arg(long, default_value_t = false)]
    pub list_operations: bool,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "SISENSE_JSON_LOGS", default_value_t = false)]
    pub json_logs: bool,

    #[arg(default_value = "GET")]
    pub method: String,

    pub path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub base_url: String,
    pub client: ClientConfig,
    pub timeout: Duration,
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub data: Option<Value>,
    pub list_operations: bool,
    pub log_filter: String,
    pub json_logs: bool,
}

impl CliConfig {
    pub fn from_args(args: Args) -> Result<Self, String> {
        let mut client = match &args.config {
            Some(path) => ClientConfig::load_file(path).map_err(|error| error.to_string())?,
            None => ClientConfig::default(),
        };

        if let Some(username) = normalize_secret(args.username) {
            client.username = username;
        }
        if let Some(password) = normalize_secret(args.password) {
            client.password = password;
        }
        if let Some(token) = normalize_secret(args.access_token) {
            client.access_token = token;
        }
        if let Some(version) = normalize_secret(args.api_version) {
            client.default_version = version;
        }

        let base_url = normalize_secret(args.base_url)
            .or_else(|| client.extra_str("base_url").map(str::to_owned))
            .unwrap_or_default();

        if args.timeout_ms == 0 {
            return Err("timeout_ms must be greater than 0".to_owned());
        }

        let method = HttpMethod::parse(&args.method)
            .ok_or_else(|| format!("unsupported http method: {}", args.method))?;

        let data = args
            .data
            .as_deref()
            .map(serde_json::from_str::<Value>)
            .transpose()
            .map_err(|error| format!("--data must be valid JSON: {error}"))?;

        let path = args.path.unwrap_or_default();
        if !args.list_operations {
            if base_url.is_empty() {
                return Err("base url is required (--base-url or SISENSE_BASE_URL)".to_owned());
            }
            if path.is_empty() {
                return Err("request path is required".to_owned());
            }
        }

        Ok(Self {
            base_url,
            client,
            timeout: Duration::from_millis(args.timeout_ms),
            method,
            path,
            query: args.query,
            data,
            list_operations: args.list_operations,
            log_filter: args.log_filter,
            json_logs: args.json_logs,
        })
    }

    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.client.username.is_empty() && !self.client.password.is_empty()
    }
}

fn normalize_secret(input: Option<String>) -> Option<String> {
    input.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(format!("expected key=value, got `{raw}`"));
    };
    if key.is_empty() {
        return Err(format!("empty query key in `{raw}`"));
    }
    Ok((key.to_owned(), value.to_owned()))
}
