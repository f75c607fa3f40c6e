//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI arguments and `MENU_*` environment variables.

use std::net::SocketAddr;
use std::num::NonZeroU32;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_ALLOCATION_ATTEMPTS;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address `{value}`: {message}")]
    BindAddr { value: String, message: String },
    #[error("allocation attempts must be at least 1")]
    ZeroAllocationAttempts,
    #[error("database pool needs at least one connection")]
    ZeroDbConnections,
}

/// Runtime settings for the tenant service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MENU")]
pub struct AppSettings {
    /// Socket address for the HTTP listener.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without it tenants live in memory.
    pub database_url: Option<String>,
    /// Upper bound for pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Suffix draws per registration before giving up.
    pub allocation_attempts: Option<u32>,
}

impl AppSettings {
    /// Parsed listener address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, defaulting to 10.
    ///
    /// # Errors
    /// Rejects zero.
    pub fn db_max_connections(&self) -> Result<u32, SettingsError> {
        match self.db_max_connections {
            Some(0) => Err(SettingsError::ZeroDbConnections),
            Some(size) => Ok(size),
            None => Ok(DEFAULT_DB_MAX_CONNECTIONS),
        }
    }

    /// Allocation attempt bound, defaulting to 5.
    ///
    /// # Errors
    /// Rejects zero.
    pub fn allocation_attempts(&self) -> Result<NonZeroU32, SettingsError> {
        match self.allocation_attempts {
            Some(attempts) => {
                NonZeroU32::new(attempts).ok_or(SettingsError::ZeroAllocationAttempts)
            }
            None => Ok(DEFAULT_ALLOCATION_ATTEMPTS),
        }
    }
}
