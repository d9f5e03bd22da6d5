use crate::{
    domain::error::ClientError,
    protocol::{AUTHORIZATION_HEADER, BEARER_PREFIX, RequestOptions},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Adds `Authorization: Bearer <token>` unless the token is empty or the
/// caller already supplied a non-empty `Authorization` header.
pub fn apply_bearer_token(options: &mut RequestOptions, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let caller_set = options
        .headers
        .iter()
        .any(|(name, value)| {
            name.eq_ignore_ascii_case(AUTHORIZATION_HEADER) && !value.is_empty()
        });
    if caller_set {
        return false;
    }

    options
        .headers
        .retain(|(name, _)| !name.eq_ignore_ascii_case(AUTHORIZATION_HEADER));
    options
        .headers
        .push((AUTHORIZATION_HEADER.to_owned(), bearer_value(token)));
    true
}

#[must_use]
pub fn bearer_value(token: &str) -> String {
    format!("{BEARER_PREFIX}{token}")
}

pub fn resolve_credentials(username: &str, password: &str) -> Result<Credentials, ClientError> {
    if username.is_empty() || password.is_empty() {
        return Err(ClientError::MissingCredentials);
    }

    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}
