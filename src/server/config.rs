use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub ip_hash_salt: String,

    pub bind_address: SocketAddr,
    pub session_secure: bool,
    pub comments_require_approval: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?,
            ip_hash_salt: required("IP_HASH_SALT")?,
            bind_address: optional("BIND_ADDRESS")?
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDRESS".to_string(),
                    reason: "expected host:port".to_string(),
                })?,
            session_secure: parse_bool("SESSION_SECURE")?,
            comments_require_approval: parse_bool("COMMENTS_REQUIRE_APPROVAL")?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "not valid unicode".to_string(),
        }),
    }
}

/// Reads a boolean flag, defaulting to `false` when unset.
fn parse_bool(name: &str) -> Result<bool, ConfigError> {
    let Some(value) = optional(name)? else {
        return Ok(false);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", value),
        }),
    }
}
