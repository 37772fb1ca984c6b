/// Characters to use for generating numeric references
pub(crate) const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Prefix for environment-variable configuration overrides
pub const ENV_PREFIX: &str = "PAYMENT_SERVER";

/// Environment variable selecting the runtime environment
pub const RUN_ENV: &str = "RUN_ENV";

/// Runtime environment of the service, selects the config file to load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    #[default]
    Development,
    Sandbox,
    Production,
}

impl Env {
    /// Environment for the current process, from `RUN_ENV`.
    pub fn current_env() -> Self {
        match std::env::var(RUN_ENV).as_deref() {
            Ok("production") => Self::Production,
            Ok("sandbox") => Self::Sandbox,
            _ => Self::Development,
        }
    }

    /// Name of the config file for this environment.
    pub fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Sandbox => "sandbox.toml",
            Self::Production => "production.toml",
        }
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Sandbox => f.write_str("sandbox"),
            Self::Production => f.write_str("production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_maps_to_config_file() {
        assert_eq!(Env::Development.config_path(), "development.toml");
        assert_eq!(Env::Sandbox.config_path(), "sandbox.toml");
        assert_eq!(Env::Production.config_path(), "production.toml");
    }
}
