use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use yieldlab_domain::shared::DomainError;

const APP_DIR_NAME: &str = "yieldlab";
const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_CONFIG_PATH: &str = "YIELDLAB_CONFIG";
pub const ENV_HOST: &str = "YIELDLAB_HOST";
pub const ENV_PORT: &str = "YIELDLAB_PORT";
pub const ENV_STORAGE: &str = "YIELDLAB_STORAGE";
pub const ENV_DATABASE_PATH: &str = "YIELDLAB_DATABASE_PATH";
pub const ENV_LOG_DIR: &str = "YIELDLAB_LOG_DIR";

/// Where saved scenarios live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Sqlite,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Sqlite => "sqlite",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "sqlite" => Ok(StorageBackend::Sqlite),
            _ => Err(DomainError::Configuration(format!(
                "Invalid storage backend: {s}. Must be 'memory' or 'sqlite'"
            ))),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    /// SQLite file, only used with the sqlite backend
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            storage: StorageBackend::Memory,
            database_path: data_dir.join("yieldlab.db"),
            log_dir: data_dir.join("logs"),
        }
    }
}

impl ServerConfig {
    /// Defaults, then the optional JSON file, then `YIELDLAB_*` environment overrides
    pub fn load() -> Result<Self, DomainError> {
        let env: HashMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("YIELDLAB_"))
            .collect();
        Self::load_from(&env)
    }

    /// Same as [`ServerConfig::load`] with an explicit environment
    pub fn load_from(env: &HashMap<String, String>) -> Result<Self, DomainError> {
        let explicit_path = env.get(ENV_CONFIG_PATH).map(PathBuf::from);

        let mut config = match explicit_path {
            // An explicitly named file must exist
            Some(path) => Self::from_file(&path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env(env)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            DomainError::Configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    fn apply_env(&mut self, env: &HashMap<String, String>) -> Result<(), DomainError> {
        if let Some(host) = env.get(ENV_HOST) {
            self.host = host.trim().to_string();
        }
        if let Some(port) = env.get(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| {
                DomainError::Configuration(format!("Invalid {ENV_PORT}: {port}"))
            })?;
        }
        if let Some(storage) = env.get(ENV_STORAGE) {
            self.storage = StorageBackend::from_str(storage.trim())?;
        }
        if let Some(path) = env.get(ENV_DATABASE_PATH) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(dir) = env.get(ENV_LOG_DIR) {
            self.log_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, DomainError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                DomainError::Configuration(format!(
                    "Invalid listen address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.log_dir.ends_with("logs"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ServerConfig::default();
        config
            .apply_env(&env(&[
                (ENV_HOST, "0.0.0.0"),
                (ENV_PORT, "8080"),
                (ENV_STORAGE, "SQLite"),
                (ENV_DATABASE_PATH, "/tmp/scenarios.db"),
            ]))
            .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage, StorageBackend::Sqlite);
        assert_eq!(config.database_path, PathBuf::from("/tmp/scenarios.db"));
        assert_eq!(
            config.socket_addr().unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = ServerConfig::default();
        assert!(config.apply_env(&env(&[(ENV_PORT, "eighty")])).is_err());
        assert!(config.apply_env(&env(&[(ENV_STORAGE, "redis")])).is_err());
    }

    #[test]
    fn test_load_from_file_then_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "port": 7000, "storage": "sqlite", "databasePath": "/var/lib/yieldlab/db.sqlite" }}"#
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config =
            ServerConfig::load_from(&env(&[(ENV_CONFIG_PATH, &path), (ENV_PORT, "7100")]))
                .unwrap();

        // file values fill in, env wins, missing keys keep defaults
        assert_eq!(config.port, 7100);
        assert_eq!(config.storage, StorageBackend::Sqlite);
        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/yieldlab/db.sqlite")
        );
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = ServerConfig::load_from(&env(&[(
            ENV_CONFIG_PATH,
            "/definitely/not/here/config.json",
        )]));
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(ServerConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_invalid_host_fails_socket_addr() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }
}
