//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env`).

use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

/// Startup configuration for the API server
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:31113")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if database_max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be a positive integer");
        }

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let production = lookup("APP_ENV").is_some_and(|env| env.eq_ignore_ascii_case("production"));
        let mut auth = if production {
            AuthConfig::default()
        } else {
            AuthConfig::development()
        };
        if let Some(username) = lookup("ADMIN_DEFAULT_USERNAME") {
            auth.default_admin_username = username;
        }
        if let Some(password) = lookup("ADMIN_DEFAULT_PASSWORD") {
            auth.default_admin_password = password;
        }
        auth.password_pepper = lookup("ADMIN_PASSWORD_PEPPER")
            .filter(|pepper| !pepper.is_empty())
            .map(String::into_bytes);

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("DATABASE_URL", "postgres://localhost/cms")]).unwrap();
        assert_eq!(config.bind_addr.port(), 31113);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.frontend_origins.len(), 2);
        assert!(!config.auth.cookie_secure);
        assert_eq!(config.auth.default_admin_username, "admin");
        assert!(config.auth.password_pepper.is_none());
    }

    #[test]
    fn test_database_url_required() {
        assert!(config(&[]).is_err());
    }

    #[test]
    fn test_production_uses_secure_cookie() {
        let config = config(&[
            ("DATABASE_URL", "postgres://db/cms"),
            ("APP_ENV", "production"),
            ("ADMIN_DEFAULT_PASSWORD", "a-much-longer-secret"),
            ("ADMIN_PASSWORD_PEPPER", "pepper"),
            ("FRONTEND_ORIGINS", "https://example.com, ,https://www.example.com"),
        ])
        .unwrap();
        assert!(config.auth.cookie_secure);
        assert_eq!(config.auth.default_admin_password, "a-much-longer-secret");
        assert_eq!(config.auth.password_pepper.as_deref(), Some(&b"pepper"[..]));
        assert_eq!(
            config.frontend_origins,
            ["https://example.com", "https://www.example.com"]
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(config(&[("DATABASE_URL", "x"), ("BIND_ADDR", "nowhere")]).is_err());
        assert!(config(&[("DATABASE_URL", "x"), ("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
    }
}
