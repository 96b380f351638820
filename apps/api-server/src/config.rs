//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = Self::database_url().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(3000),
            database,
        }
    }

    /// `DATABASE_URL`, or a URL assembled from the `DB_*` variables when
    /// at least `DB_HOST` and `DB_NAME` are set.
    fn database_url() -> Option<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Some(url);
        }

        let host = env::var("DB_HOST").ok()?;
        let name = env::var("DB_NAME").ok()?;
        let port = parse_var("DB_PORT").unwrap_or(5432);
        let user = env::var("DB_USER").unwrap_or_default();
        let password = env::var("DB_PASSWORD").unwrap_or_default();

        Some(DatabaseConfig::from_parts(&host, port, &user, &password, &name))
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
