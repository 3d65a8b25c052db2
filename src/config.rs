use std::env;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DOMAIN: &str = "localhost";

/// Runtime settings read from the process environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Secret used to sign session cookies. `None` means a random key is
    /// generated at startup and sessions do not survive a restart.
    pub secret: Option<String>,
    pub domain: String,
}

impl ServerConfig {
    /// Read the configuration from environment variables, falling back to
    /// defaults for anything missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Invalid PORT value `{raw}`, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            address: lookup("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            port,
            secret: lookup("SECRET_KEY").filter(|secret| !secret.is_empty()),
            domain: lookup("DOMAIN").unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
        }
    }
}
