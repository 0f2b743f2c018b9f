//! JWT bearer-token generation and validation.
//!
//! Tokens are HS256-signed JWTs containing a [`Claims`] payload with the
//! user's id, email, and role. Tokens are time-unbounded by default; an
//! expiry is added only when `JWT_EXPIRY_HOURS` is configured.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use planhub_core::types::Id;
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal id.
    pub sub: Id,
    /// The user's email at issue time.
    pub email: String,
    /// The user's role name (e.g. `"project_manager"`).
    pub role: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp). Absent unless an expiry is
    /// configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours. `None` issues tokens without expiry.
    pub expiry_hours: Option<i64>,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var            | Required | Default         |
    /// |--------------------|----------|-----------------|
    /// | `JWT_SECRET`       | **yes**  | --              |
    /// | `JWT_EXPIRY_HOURS` | no       | none (unbounded)|
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_hours = std::env::var("JWT_EXPIRY_HOURS").ok().map(|v| {
            v.parse::<i64>()
                .expect("JWT_EXPIRY_HOURS must be a valid i64")
        });

        Self {
            secret,
            expiry_hours,
        }
    }
}

/// Generate an HS256 bearer token for the given user.
pub fn generate_token(
    user_id: Id,
    email: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = config.expiry_hours.map(|hours| now + hours * 3600);

    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        iat: now,
        exp,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a bearer token, returning the embedded [`Claims`].
///
/// Fails on a bad signature or malformed structure. Expiry is checked when
/// the token carries an `exp` claim; tokens without one never expire.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256
    validation.required_spec_claims.clear();

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
