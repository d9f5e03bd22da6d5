mod request;

pub use request::{HttpMethod, HttpRequest, RequestOptions};

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

#[must_use]
pub fn absolute_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}
