use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::assets::{default_config_path, get_default_config};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File system error: {0}")]
    IO(#[from] std::io::Error),
    #[error("YAML parsing error: {0}")]
    YAMLError(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Base URLs of the services under test. Omitted entries keep their
/// public defaults.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServiceUrls {
    pub objects: String,
    pub character: String,
    pub basic_auth: String,
    pub books: String,
    pub number_conversion: String,
}

impl Default for ServiceUrls {
    fn default() -> Self {
        Self {
            objects: "https://api.restful-api.dev".to_string(),
            character: "https://rickandmortyapi.com/api".to_string(),
            basic_auth: "https://postman-echo.com/basic-auth".to_string(),
            books: "https://simple-books-api.click".to_string(),
            number_conversion:
                "https://www.dataaccess.com/webservicesserver/NumberConversion.wso".to_string(),
        }
    }
}

impl ServiceUrls {
    /// Points every service at one host, each under the path it uses on a
    /// local stub server.
    pub fn single_host(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            objects: base.to_string(),
            character: format!("{base}/api"),
            basic_auth: format!("{base}/basic-auth"),
            books: base.to_string(),
            number_conversion: format!("{base}/NumberConversion.wso"),
        }
    }

    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("objects", self.objects.as_str()),
            ("character", self.character.as_str()),
            ("basic_auth", self.basic_auth.as_str()),
            ("books", self.books.as_str()),
            ("number_conversion", self.number_conversion.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BasicAuthConfig {
    pub username: String,
    pub password: String,
}

impl Default for BasicAuthConfig {
    fn default() -> Self {
        Self {
            username: "postman".to_string(),
            password: "password".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub services: ServiceUrls,
    #[serde(default)]
    pub basic_auth: BasicAuthConfig,
    #[serde(default = "default_client_name")]
    pub client_name: String,
    #[serde(default = "default_response_time_limit_ms")]
    pub response_time_limit_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            services: ServiceUrls::default(),
            basic_auth: BasicAuthConfig::default(),
            client_name: default_client_name(),
            response_time_limit_ms: default_response_time_limit_ms(),
        }
    }
}

fn default_client_name() -> String {
    "Postman".to_string()
}

fn default_response_time_limit_ms() -> u64 {
    2000
}

impl Config {
    pub fn response_time_limit(&self) -> Duration {
        Duration::from_millis(self.response_time_limit_ms)
    }

    /// Parses a YAML document and validates it.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let raw: Config = serde_yaml::from_str(content)?;
        raw.resolve()
    }

    #[instrument(skip(self))]
    fn resolve(mut self) -> Result<Self, ConfigError> {
        for (name, value) in self.services.entries() {
            Url::parse(value).map_err(|e| {
                ConfigError::Config(format!("Invalid URL for service '{name}': {value} ({e})"))
            })?;
        }

        if self.client_name.trim().is_empty() {
            return Err(ConfigError::Config(
                "client_name must not be empty".to_string(),
            ));
        }

        // A password of the form `env:NAME` is read from the environment
        if let Some(env_key) = self.basic_auth.password.strip_prefix("env:") {
            let env_key = env_key.trim().to_string();
            self.basic_auth.password = std::env::var(&env_key).map_err(|_| {
                ConfigError::Config(format!("Environment variable {env_key} not found"))
            })?;
        }

        Ok(self)
    }
}

#[instrument(skip(config_path))]
pub fn create_or_get_config_file(
    config_path: Option<PathBuf>,
) -> Result<(bool, PathBuf), ConfigError> {
    let actual_path = config_path.unwrap_or_else(default_config_path);

    let parent_dir = actual_path.parent().ok_or_else(|| {
        ConfigError::IO(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Config path has no parent directory",
        ))
    })?;

    if !parent_dir.exists() {
        fs::create_dir_all(parent_dir)?;
    }

    if actual_path.exists() {
        Ok((true, actual_path))
    } else {
        File::create(&actual_path)?.write_all(get_default_config().as_bytes())?;
        Ok((false, actual_path))
    }
}

#[instrument(skip(config_path))]
pub fn get_config(config_path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let (_, config_file) = create_or_get_config_file(config_path)?;
    let content = fs::read_to_string(&config_file)?;
    Config::from_yaml(&content)
}
