use crate::auth::jwt::JwtConfig;

/// Default minimum password length for self-registration.
const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on draining in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Minimum accepted password length on registration (default: `8`).
    pub password_min_length: usize,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Payment collaborator selection.
    pub payment: PaymentConfig,
}

/// Which payment gateway to use for paid enrollments.
#[derive(Debug, Clone, Default)]
pub struct PaymentConfig {
    /// Base URL of the payment service. `None` selects the auto-approving gateway.
    pub gateway_url: Option<String>,
    /// Timeout for a single confirmation request in seconds (default: `10`).
    pub timeout_secs: u64,
}

impl PaymentConfig {
    /// | Env Var                        | Default |
    /// |--------------------------------|---------|
    /// | `PAYMENT_GATEWAY_URL`          | unset   |
    /// | `PAYMENT_GATEWAY_TIMEOUT_SECS` | `10`    |
    pub fn from_env() -> Self {
        let gateway_url = std::env::var("PAYMENT_GATEWAY_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let timeout_secs: u64 = std::env::var("PAYMENT_GATEWAY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("PAYMENT_GATEWAY_TIMEOUT_SECS must be a valid u64");

        Self {
            gateway_url,
            timeout_secs,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `PASSWORD_MIN_LENGTH`  | `8`                        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let password_min_length: usize = std::env::var("PASSWORD_MIN_LENGTH")
            .unwrap_or_else(|_| DEFAULT_PASSWORD_MIN_LENGTH.to_string())
            .parse()
            .expect("PASSWORD_MIN_LENGTH must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            password_min_length,
            jwt: JwtConfig::from_env(),
            payment: PaymentConfig::from_env(),
        }
    }
}
