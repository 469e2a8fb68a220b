//! Layered server configuration.
//!
//! Precedence, lowest first: built-in defaults, the YAML file given with
//! `--config`, `ECOLETA__*` environment variables (nested keys separated by
//! `__`, e.g. `ECOLETA__SERVER__BIND_ADDR`), then CLI overrides.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use collection_points::CollectionPointsConfig;
use ecoleta_db::DbConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "ECOLETA__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DbConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub collection_points: CollectionPointsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// `host:port` to listen on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cors: CorsConfig::default(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:3333".to_owned()
}

/// Cross-origin policy for the browser front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    #[serde(default = "wildcard")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "wildcard")]
    pub allowed_headers: Vec<String>,
    #[serde(default = "default_max_age")]
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: wildcard(),
            allowed_methods: default_methods(),
            allowed_headers: wildcard(),
            max_age_seconds: default_max_age(),
        }
    }
}

fn wildcard() -> Vec<String> {
    vec!["*".to_owned()]
}

fn default_methods() -> Vec<String> {
    ["GET", "POST", "OPTIONS"].map(str::to_owned).to_vec()
}

fn default_max_age() -> u64 {
    3600
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `collection_points=debug,info`
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_owned()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub mock: bool,
}

impl AppConfig {
    /// Build the effective configuration from defaults, the optional YAML
    /// file and the environment.
    ///
    /// # Errors
    /// Fails on unreadable YAML, unknown keys or mistyped values.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)
            .extract()
            .context("invalid configuration")
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            let host = self
                .server
                .bind_addr
                .rsplit_once(':')
                .map_or(self.server.bind_addr.as_str(), |(host, _)| host);
            self.server.bind_addr = format!("{host}:{port}");
        }
        if overrides.mock {
            self.database = DbConfig::in_memory();
        }
    }

    /// Checks serde cannot express.
    ///
    /// # Errors
    /// Names the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        let addr = &self.server.bind_addr;
        addr.parse::<SocketAddr>()
            .with_context(|| format!("server.bind_addr '{addr}' is not host:port"))?;

        anyhow::ensure!(
            self.collection_points.max_image_size_mb > 0,
            "collection_points.max_image_size_mb must be positive"
        );
        anyhow::ensure!(
            !self.collection_points.public_base_url.trim().is_empty(),
            "collection_points.public_base_url must not be empty"
        );
        Ok(())
    }

    /// # Errors
    /// Fails if the configuration cannot be serialized.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| anyhow::anyhow!("cannot render configuration: {e}"))
    }
}
