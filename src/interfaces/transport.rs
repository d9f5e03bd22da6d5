use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;

use crate::protocol::{HttpMethod, HttpRequest};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("http request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<String, TransportError>>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::from_builder(reqwest::Client::builder())
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        Self::from_builder(reqwest::Client::builder().timeout(timeout))
    }

    pub fn from_builder(builder: reqwest::ClientBuilder) -> Result<Self, TransportError> {
        let client = builder.build()?;
        Ok(Self { client })
    }

    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn execute(&self, request: HttpRequest) -> Result<String, TransportError> {
        let HttpRequest {
            method,
            url,
            options,
        } = request;

        let mut builder = self
            .client
            .request(reqwest_method(method), url)
            .headers(header_map(&options.headers)?);

        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(form) = &options.form {
            builder = builder.form(form);
        }
        if let Some(json) = &options.json {
            builder = builder.json(json);
        }
        if let Some(body) = options.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<String, TransportError>> {
        Box::pin(self.execute(request))
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|error| {
            TransportError::InvalidRequest(format!("invalid header name {name}: {error}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|error| {
            TransportError::InvalidRequest(format!("invalid value for header {name}: {error}"))
        })?;
        map.append(header_name, header_value);
    }
    Ok(map)
}
