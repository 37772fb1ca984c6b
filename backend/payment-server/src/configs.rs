use std::path::PathBuf;

use common_utils::{consts, PeekInterface, Secret};
use domain_types::{router_data::ConnectorAuthType, types::Connectors};

use crate::{error::ConfigurationError, logger, logger::config::Log};

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    pub common: Common,
    pub server: Server,
    pub log: Log,
    pub connectors: Connectors,
    pub vnpay: VnpayMerchant,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Common {
    pub environment: consts::Env,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

/// Merchant-level gateway credentials and defaults, static for the process
/// lifetime. There are deliberately no fallback values: a deployment without
/// real credentials must not boot.
#[derive(Clone, serde::Deserialize, Debug)]
pub struct VnpayMerchant {
    pub tmn_code: Secret<String>,
    pub hash_secret: Secret<String>,
    /// Return URL used when the caller does not supply one.
    pub return_url: String,
}

impl VnpayMerchant {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.tmn_code.peek().is_empty() {
            return Err(config::ConfigError::Message(
                "vnpay.tmn_code must not be empty".into(),
            ));
        }
        if self.hash_secret.peek().is_empty() {
            return Err(config::ConfigError::Message(
                "vnpay.hash_secret must not be empty".into(),
            ));
        }
        if self.return_url.is_empty() {
            return Err(config::ConfigError::Message(
                "vnpay.return_url must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Auth material in the shape the connector expects.
    pub fn connector_auth_type(&self) -> ConnectorAuthType {
        ConnectorAuthType::BodyKey {
            api_key: self.tmn_code.clone(),
            key1: self.hash_secret.clone(),
        }
    }
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Function to build the configuration by picking it from default locations
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let env = consts::Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);

        let config = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Fail fast on configuration a running service cannot work with.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        self.vnpay.validate()?;
        if self.connectors.vnpay.base_url.is_empty() {
            return Err(config::ConfigError::Message(
                "connectors.vnpay.base_url must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Config path.
    pub fn config_path(
        environment: &consts::Env,
        explicit_config_path: Option<PathBuf>,
    ) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            let config_directory: String = "config".into();
            let config_file_name = environment.config_path();

            config_path.push(workspace_path());
            config_path.push(config_directory);
            config_path.push(config_file_name);
        }
        config_path
    }
}

impl Server {
    pub async fn tcp_listener(&self) -> Result<tokio::net::TcpListener, ConfigurationError> {
        let loc = format!("{}:{}", self.host, self.port);

        logger::info!(loc = %loc, "binding the server");

        Ok(tokio::net::TcpListener::bind(loc).await?)
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merchant(tmn_code: &str, hash_secret: &str) -> VnpayMerchant {
        VnpayMerchant {
            tmn_code: Secret::new(tmn_code.to_string()),
            hash_secret: Secret::new(hash_secret.to_string()),
            return_url: "https://shop.example.com/payment/return".to_string(),
        }
    }

    #[test]
    fn empty_credentials_fail_validation() {
        assert!(merchant("", "secret").validate().is_err());
        assert!(merchant("TESTTMN1", "").validate().is_err());
        assert!(merchant("TESTTMN1", "secret").validate().is_ok());
    }

    #[test]
    fn development_config_file_parses_and_validates() {
        let mut path = workspace_path();
        path.push("config");
        path.push("development.toml");
        #[allow(clippy::expect_used)]
        Config::new_with_config_path(Some(path))
            .expect("development.toml must hold a valid default config");
    }
}
