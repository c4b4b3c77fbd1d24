use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use shared_types::{AppError, Claims, Role};
use tracing::{debug, warn};

/// Environment variable holding the member's access token.
pub const ACCESS_TOKEN_ENV: &str = "ACCESS_TOKEN";
/// Environment variable holding the HS256 signing key.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verify an HS256 access token and return its claims. Expired tokens are rejected.
pub fn decode_claims(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::unauthorized(format!("invalid access token: {e}")))
}

/// Role carried by `token`, or `fallback` when there is no usable token.
pub fn resolve_role(token: Option<&str>, secret: Option<&str>, fallback: &Role) -> Role {
    let (Some(token), Some(secret)) = (token, secret) else {
        debug!(role = %fallback, "no access token configured");
        return fallback.clone();
    };

    match decode_claims(token, secret) {
        Ok(claims) => {
            debug!(
                member = %claims.sub,
                role = %claims.role,
                has_phone = claims.has_phone_number(),
                "resolved session role"
            );
            claims.role
        }
        Err(e) => {
            warn!(error = %e, role = %fallback, "falling back to configured role");
            fallback.clone()
        }
    }
}

/// Resolve the viewer role from `ACCESS_TOKEN` and `JWT_SECRET`, reading a
/// `.env` file first if one exists.
pub fn session_role(fallback: &Role) -> Role {
    let _ = dotenvy::dotenv();

    let raw = std::env::var(ACCESS_TOKEN_ENV).ok();
    let token = raw
        .as_deref()
        .map(|value| bearer_token(value).unwrap_or(value.trim()))
        .filter(|token| !token.is_empty());
    let secret = std::env::var(JWT_SECRET_ENV).ok();

    resolve_role(token, secret.as_deref(), fallback)
}
