//! Role-based access: one shared password per role
//!
//! The bearer token is the role password itself; there are no user
//! accounts. The DM sees and edits everything, players everything except
//! DM-only fields.

use axum::http::{header, HeaderMap};
use serde::Serialize;

use crate::error::{ApiError, Result};

const DEFAULT_DM_PASSWORD: &str = "dm456";
const DEFAULT_PLAYER_PASSWORD: &str = "player123";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Dm,
    Player,
}

impl Role {
    pub fn is_dm(self) -> bool {
        self == Role::Dm
    }
}

/// Shared passwords for the two roles
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub dm_password: String,
    pub player_password: String,
}

impl AuthConfig {
    /// Read passwords from `DM_PASSWORD` / `PLAYER_PASSWORD`, with the
    /// development defaults as fallback.
    pub fn from_env() -> Self {
        Self {
            dm_password: std::env::var("DM_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_DM_PASSWORD.to_string()),
            player_password: std::env::var("PLAYER_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_PLAYER_PASSWORD.to_string()),
        }
    }

    pub fn role_for(&self, token: &str) -> Option<Role> {
        if token == self.dm_password {
            Some(Role::Dm)
        } else if token == self.player_password {
            Some(Role::Player)
        } else {
            None
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Role of the caller, if any
pub fn role_from_headers(auth: &AuthConfig, headers: &HeaderMap) -> Option<Role> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value);
    auth.role_for(token)
}

pub fn require_auth(auth: &AuthConfig, headers: &HeaderMap) -> Result<Role> {
    role_from_headers(auth, headers).ok_or(ApiError::Unauthorized)
}

pub fn require_dm(auth: &AuthConfig, headers: &HeaderMap) -> Result<Role> {
    match require_auth(auth, headers)? {
        Role::Dm => Ok(Role::Dm),
        Role::Player => Err(ApiError::DmOnly),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn config() -> AuthConfig {
        AuthConfig {
            dm_password: "gm-secret".to_string(),
            player_password: "table-secret".to_string(),
        }
    }

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_role_for_password() {
        let auth = config();
        assert_eq!(auth.role_for("gm-secret"), Some(Role::Dm));
        assert_eq!(auth.role_for("table-secret"), Some(Role::Player));
        assert_eq!(auth.role_for("wrong"), None);
    }

    #[test]
    fn test_bearer_extraction() {
        let auth = config();
        assert_eq!(
            role_from_headers(&auth, &headers_with("gm-secret")),
            Some(Role::Dm)
        );
        assert_eq!(role_from_headers(&auth, &HeaderMap::new()), None);
    }

    #[test]
    fn test_require_dm_rejects_player() {
        let auth = config();
        assert!(require_dm(&auth, &headers_with("table-secret")).is_err());
        assert!(require_dm(&auth, &headers_with("gm-secret")).is_ok());
    }
}
