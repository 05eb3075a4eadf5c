use constant_time_eq::constant_time_eq;
use tracing::debug;

use crate::api::error::ApiError;

/// Privilege a route demands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTier {
    /// Submitting and reading scores
    Public,
    /// Destructive operations
    Protected,
}

/// Configured shared secrets.
///
/// The access secret satisfies every tier. The public secret, when configured,
/// satisfies only [`AccessTier::Public`]; without it the deployment runs on
/// the single access secret.
#[derive(Clone)]
pub struct AccessTokens {
    access_secret: String,
    public_secret: Option<String>,
}

impl std::fmt::Debug for AccessTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokens")
            .field("public_secret_set", &self.public_secret.is_some())
            .finish_non_exhaustive()
    }
}

impl AccessTokens {
    pub fn new(access_secret: impl Into<String>, public_secret: Option<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            public_secret,
        }
    }

    /// Check an `Authorization` header value against the tier
    pub fn authorize(&self, auth_header: Option<&str>, tier: AccessTier) -> Result<(), ApiError> {
        let token = extract_bearer_token(auth_header).ok_or_else(|| {
            ApiError::Unauthorized("Missing or malformed bearer token".to_string())
        })?;

        if matches_secret(token, &self.access_secret) {
            return Ok(());
        }

        if tier == AccessTier::Public {
            if let Some(public_secret) = &self.public_secret {
                if matches_secret(token, public_secret) {
                    return Ok(());
                }
            }
        }

        debug!(tier = ?tier, "Rejected bearer token");
        Err(ApiError::Unauthorized("Invalid token".to_string()))
    }
}

/// Pull the token out of `Bearer <token>`
pub fn extract_bearer_token(auth_header: Option<&str>) -> Option<&str> {
    let header = auth_header?.trim();
    let (scheme, token) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

fn matches_secret(token: &str, secret: &str) -> bool {
    constant_time_eq(token.as_bytes(), secret.as_bytes())
}
