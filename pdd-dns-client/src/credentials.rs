//! Access-token resolution.

use std::env;

use crate::error::{PddError, Result};

/// Environment variable consulted when no explicit token is given.
pub const TOKEN_ENV_VAR: &str = "YANDEX_PDD_TOKEN";

/// Resolves the access token from an explicit value or the environment.
///
/// An explicit value always takes precedence over [`TOKEN_ENV_VAR`]. The
/// environment is read here, once, by the call site that owns configuration
/// — never implicitly inside [`PddClient`](crate::PddClient). A token that
/// resolves to nothing, or to an empty string, is a
/// [`PddError::Configuration`].
pub fn resolve_token(explicit: Option<String>) -> Result<String> {
    resolve_token_from(explicit, env::var(TOKEN_ENV_VAR).ok())
}

fn resolve_token_from(explicit: Option<String>, from_env: Option<String>) -> Result<String> {
    explicit
        .or(from_env)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| PddError::Configuration {
            detail: format!(
                "no access token: pass one explicitly or set {TOKEN_ENV_VAR}"
            ),
        })
}
