//! Configuration for dashctl.
//!
//! Resolution order (lowest to highest priority):
//! 1. Built-in defaults
//! 2. TOML file (`--config PATH`, else `~/.dashctl/config.toml` if present)
//! 3. Environment variables (`DATABASE_URL`, `DASHCTL_*`)
//! 4. CLI flags (applied by the binary)
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:3030"
//! cors_permissive = false
//!
//! [database]
//! host = "localhost"
//! port = 5432
//! user = "dashboard"
//! password = "..."
//! database = "dashboard"
//! max_connections = 5
//! ```

use std::fmt;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Top-level config file model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub server: ServerSection,
    pub database: DatabaseConfig,
}

/// `[server]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address to bind to
    pub bind: SocketAddr,
    /// Allow any origin (default: localhost only)
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
        }
    }
}

/// `[database]` table.
///
/// When `url` is set it wins over the discrete connection fields.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "dashboard".to_string(),
            password: String::new(),
            database: "dashboard".to_string(),
            max_connections: 5,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DashboardConfig {
    /// Load config from an explicit path, or the default path if it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file silently falls back to built-in defaults. Environment overrides
    /// are applied afterwards.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CoreError::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::from_file(path)?
            }
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let config = toml::from_str(&content).map_err(|source| CoreError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Get config file path: ~/.dashctl/config.toml
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Apply environment overrides using the given lookup.
    ///
    /// Takes a lookup function instead of reading the process environment
    /// directly so callers (and tests) control the source.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            self.database.url = Some(url);
        }
        if let Some(host) = lookup("DASHCTL_DB_HOST") {
            self.database.host = host;
        }
        if let Some(port) = lookup("DASHCTL_DB_PORT") {
            self.database.port = port
                .parse()
                .map_err(|_| CoreError::config(format!("DASHCTL_DB_PORT is not a port: '{port}'")))?;
        }
        if let Some(user) = lookup("DASHCTL_DB_USER") {
            self.database.user = user;
        }
        if let Some(password) = lookup("DASHCTL_DB_PASSWORD") {
            self.database.password = password;
        }
        if let Some(name) = lookup("DASHCTL_DB_NAME") {
            self.database.database = name;
        }
        if let Some(bind) = lookup("DASHCTL_BIND") {
            self.server.bind = bind
                .parse()
                .map_err(|_| CoreError::config(format!("DASHCTL_BIND is not an address: '{bind}'")))?;
        }
        Ok(())
    }
}

/// Get the dashctl config directory path (~/.dashctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".dashctl"))
}
