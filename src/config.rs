use std::env;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::InvalidStorageBackend(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub stage: String,
    pub base_url: String,
    pub notification_topic: String,
    pub notification_webhook_url: Option<String>,
    pub storage_backend: StorageBackend,
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub callback_timeout_secs: u64,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let stage = var("STAGE").unwrap_or_else(|| "dev".to_string());

        let base_url = var("BASE_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let notification_topic =
            var("NOTIFICATION_TOPIC").unwrap_or_else(|| format!("interview-assignments-{}", stage));

        let notification_webhook_url = var("NOTIFICATION_WEBHOOK_URL");

        let storage_backend = var("STORAGE_BACKEND")
            .map(|value| value.parse())
            .transpose()?
            .unwrap_or(StorageBackend::Sqlite);

        let database_url = var("DATABASE_URL")
            .unwrap_or_else(|| format!("sqlite://interviews-{}.db?mode=rwc", stage));

        let server_host = var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = var("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let callback_timeout_secs = var("CALLBACK_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidCallbackTimeout)?;

        let otel_exporter_endpoint = var("OTEL_EXPORTER_OTLP_ENDPOINT");

        let service_name = var("SERVICE_NAME").unwrap_or_else(|| "interview-review".to_string());

        let metrics_port = var("METRICS_PORT")
            .unwrap_or_else(|| "9000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        Ok(Config {
            stage,
            base_url,
            notification_topic,
            notification_webhook_url,
            storage_backend,
            database_url,
            server_host,
            server_port,
            callback_timeout_secs,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("CALLBACK_TIMEOUT_SECS must be a positive number of seconds")]
    InvalidCallbackTimeout,

    #[error("Unknown storage backend '{0}' (expected 'sqlite' or 'memory')")]
    InvalidStorageBackend(String),
}
