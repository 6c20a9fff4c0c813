//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// ROI calculator configuration.
    #[serde(default)]
    pub calculator: CalculatorConfig,
    /// Listing display configuration.
    #[serde(default)]
    pub listing: ListingConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// ROI calculator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CalculatorConfig {
    /// Holding period a freshly opened calculator starts with.
    #[serde(default = "default_holding_period_years")]
    pub default_holding_period_years: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_holding_period_years: default_holding_period_years(),
        }
    }
}

fn default_holding_period_years() -> u32 {
    5
}

/// Listing display configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ListingConfig {
    /// Calendar year lease figures are reported against. Unset means the
    /// current year at startup.
    #[serde(default)]
    pub as_of_year: Option<i32>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "safal=debug,tower_http=debug".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a source cannot be read or parsed.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SAFAL").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Returns the `host:port` address the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.calculator.default_holding_period_years, 5);
        assert_eq!(config.log.filter, "safal=debug,tower_http=debug");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "SAFAL__SERVER__PORT",
                "SAFAL__CALCULATOR__DEFAULT_HOLDING_PERIOD_YEARS",
                "SAFAL__LISTING__AS_OF_YEAR",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.calculator.default_holding_period_years, 5);
                assert_eq!(config.listing.as_of_year, None);
            },
        );
    }

    #[test]
    fn test_load_env_overrides() {
        temp_env::with_vars(
            [
                ("SAFAL__SERVER__PORT", Some("9090")),
                ("SAFAL__CALCULATOR__DEFAULT_HOLDING_PERIOD_YEARS", Some("10")),
                ("SAFAL__LISTING__AS_OF_YEAR", Some("2024")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.calculator.default_holding_period_years, 10);
                assert_eq!(config.listing.as_of_year, Some(2024));
                assert_eq!(config.server.host, "0.0.0.0");
            },
        );
    }

    #[test]
    fn test_load_invalid_value_is_config_error() {
        temp_env::with_var("SAFAL__SERVER__PORT", Some("not-a-port"), || {
            let err = AppConfig::load().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
            assert_eq!(err.error_code(), "CONFIG_ERROR");
        });
    }

    #[test]
    fn test_deserialize_partial_section() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server": {"port": 3000}, "log": {"filter": "info"}}"#)
                .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.calculator, CalculatorConfig::default());
        assert_eq!(config.listing, ListingConfig::default());
    }
}
