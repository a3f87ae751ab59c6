//! Access-token signing and refresh-token hashing.
//!
//! Access tokens are HS256 JWTs carrying [`Claims`]. Refresh tokens are
//! opaque UUIDs handed to the client once; the server keeps only a SHA-256
//! digest in `user_sessions`.

use coursehub_core::types::DbId;
use coursehub_core::visibility::Requester;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

/// Payload of every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    /// Role name at the time the token was issued.
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    /// Token id (UUID v4).
    pub jti: String,
}

impl Claims {
    /// The requester these claims identify.
    pub fn requester(&self) -> Requester {
        Requester::from_role(self.sub, &self.role)
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret for signing and verifying.
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Self {
            secret,
            access_token_expiry_mins: env_i64("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_EXPIRY_MINS),
            refresh_token_expiry_days: env_i64(
                "JWT_REFRESH_EXPIRY_DAYS",
                DEFAULT_REFRESH_EXPIRY_DAYS,
            ),
        }
    }

    /// Access token lifetime in seconds, as reported to clients.
    pub fn access_token_ttl_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{key} must be a valid i64")),
        Err(_) => default,
    }
}

/// Sign an access token for `user_id` with the given role.
pub fn generate_access_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: iat + config.access_token_ttl_secs(),
        iat,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify signature and expiry, returning the decoded claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// Returns `(plaintext, sha256_hex)`. Only the digest is persisted.
pub fn generate_refresh_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let digest = hash_refresh_token(&plaintext);
    (plaintext, digest)
}

pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use coursehub_core::roles::{ROLE_STAFF, ROLE_STUDENT};

    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        }
    }

    #[test]
    fn token_round_trip_carries_requester() {
        let cfg = config("course-secret-for-tests");
        let token = generate_access_token(42, ROLE_STAFF, &cfg).unwrap();

        let claims = validate_token(&token, &cfg).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert_eq!(
            claims.requester(),
            Requester::User {
                user_id: 42,
                is_staff: true
            }
        );
    }

    #[test]
    fn expired_token_rejected() {
        let cfg = config("course-secret-for-tests");
        // Well past the default 60 second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            role: ROLE_STUDENT.to_string(),
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(cfg.secret.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token, &cfg).is_err());
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = generate_access_token(1, ROLE_STUDENT, &config("alpha")).unwrap();
        assert!(validate_token(&token, &config("bravo")).is_err());
    }

    #[test]
    fn refresh_token_digest_is_stable_hex() {
        let (plaintext, digest) = generate_refresh_token();
        assert_eq!(hash_refresh_token(&plaintext), digest);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
