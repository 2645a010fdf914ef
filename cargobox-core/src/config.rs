//! Configuration for cargo boxes.
//!
//! Maps directly to a `cargobox.toml` file. Every section and field is
//! optional; missing values fall back to the defaults below.
//!
//! ```toml
//! [general]
//! log_level = "debug"
//!
//! [capacity]
//! max_items = 12
//! max_total_weight_grammes = 20000
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CargoConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Limits enforced by [`CargoBox::try_add`](crate::CargoBox::try_add).
    #[serde(default)]
    pub capacity: CapacityConfig,
}

impl CargoConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `CargoError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::CargoError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level the embedding application should install: trace, debug,
    /// info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Optional limits on what a single box may hold. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityConfig {
    /// Hard cap on the number of items per box.
    #[serde(default)]
    pub max_items: Option<usize>,
    /// Hard cap on the total weight per box, in grammes.
    #[serde(default)]
    pub max_total_weight_grammes: Option<i64>,
}

impl CapacityConfig {
    /// No limits at all.
    pub const UNLIMITED: Self = Self {
        max_items: None,
        max_total_weight_grammes: None,
    };
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = CargoConfig::from_toml("").expect("empty config parses");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.capacity, CapacityConfig::UNLIMITED);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = CargoConfig::from_toml(
            r#"
            [capacity]
            max_items = 3
            "#,
        )
        .expect("valid config");
        assert_eq!(config.capacity.max_items, Some(3));
        assert_eq!(config.capacity.max_total_weight_grammes, None);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = CargoConfig::from_toml("[capacity]\nmax_items = \"lots\"")
            .expect_err("string is not a count");
        assert!(matches!(err, crate::CargoError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CargoConfig::from_file(std::path::Path::new("/nonexistent/cargobox.toml"))
            .expect_err("file does not exist");
        assert!(matches!(err, crate::CargoError::Io(_)));
    }
}
