use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

// Default value functions
fn default_provider_timeout() -> u64 {
  10
}

fn default_profiles_table() -> String {
  "profiles".to_string()
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub provider: ProviderConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// Hosted auth + database service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
  /// Base URL of the hosted service (auth and table APIs share it)
  pub base_url: String,
  /// Service-role key sent as both apikey and bearer token
  pub service_key: String,
  /// Request timeout applied to every call to the hosted service
  #[serde(default = "default_provider_timeout")]
  pub timeout_seconds: u64,
  /// Table holding user profile rows
  #[serde(default = "default_profiles_table")]
  pub profiles_table: String,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override
  /// earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with ONBOARD_ prefix
  ///
  /// Environment variables use double underscores as section separators:
  /// - `ONBOARD_SERVER__HOST=0.0.0.0`
  /// - `ONBOARD_SERVER__PORT=8080`
  /// - `ONBOARD_PROVIDER__BASE_URL=https://project.supabase.co`
  /// - `ONBOARD_PROVIDER__SERVICE_KEY=...`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if required files or values are missing, or if
  /// values have invalid types.
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      // Start with default configuration
      .add_source(File::with_name("config/default").required(true))
      // Add optional local configuration (for local development overrides)
      .add_source(File::with_name("config/local").required(false))
      // Add optional environment-specific configuration
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      // Add environment variables with ONBOARD_ prefix
      .add_source(
        Environment::with_prefix("ONBOARD")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_structure() {
    let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [provider]
            base_url = "http://localhost:54321"
            service_key = "dev-key"
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.provider.base_url, "http://localhost:54321");
    assert_eq!(config.provider.service_key, "dev-key");
    assert_eq!(config.provider.timeout_seconds, 10); // default
    assert_eq!(config.provider.profiles_table, "profiles"); // default
  }

  #[test]
  fn test_config_overrides_defaults() {
    let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [provider]
            base_url = "https://project.supabase.co"
            service_key = "key"
            timeout_seconds = 30
            profiles_table = "user_profiles"
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.provider.timeout_seconds, 30);
    assert_eq!(config.provider.profiles_table, "user_profiles");
  }
}
