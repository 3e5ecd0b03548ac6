use crate::error::{RestaurantError, Result};
use crate::model::{IdMode, SeedRevision};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".restaurants.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantsConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_endpoint() -> String {
    "/graphql".to_string()
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            endpoint: default_endpoint(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    /// `host:port`, resolved when the listener binds.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn url(&self) -> String {
        format!("http://{}{}", self.bind_addr(), self.endpoint)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub seed: SeedRevision,

    /// Replaces the built-in seed when set. Relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    #[serde(default)]
    pub id_mode: IdMode,
}

impl RestaurantsConfig {
    /// Search upward from `start_path` for a config file.
    ///
    /// Returns defaults rooted at `start_path` when none is found.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => Self::load_from(&config_path),
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok((Self::default(), start_path.to_path_buf()))
            }
        }
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: RestaurantsConfig = serde_yaml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| {
                RestaurantError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
