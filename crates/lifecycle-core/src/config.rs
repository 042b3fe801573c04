//! TOML configuration for a carbon assessment session
//!
//! Every table is optional; an empty document gives the defaults.
//!
//! ```toml
//! [project]
//! project_type = "commercial"
//! size_sqm = 1000.0
//! ncc_compliance_level = "class5"
//!
//! [end_of_life]
//! default_area_sqm = 1000.0
//! default_transport_km = 50.0
//!
//! [storage]
//! whole_life_key = "wholeLifeCarbonTotals"
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared_types::BuildingProfile;
use tracing::info;

use crate::end_of_life::{EndOfLifeCalculator, DEFAULT_AREA_SQM, DEFAULT_TRANSPORT_KM};
use crate::error::CarbonError;

pub const END_OF_LIFE_KEY: &str = "endOfLifeCalculatorData";
pub const MODULE_D_KEY: &str = "moduleDCalculatorData";
pub const WHOLE_LIFE_KEY: &str = "wholeLifeCarbonTotals";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarbonConfig {
    /// Building metadata handed to the compliance engine
    #[serde(default)]
    pub project: BuildingProfile,
    #[serde(default)]
    pub end_of_life: EndOfLifeDefaults,
    #[serde(default)]
    pub storage: StorageKeys,
}

impl CarbonConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed or
    /// the values fail validation
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        info!(
            path = %path.display(),
            project_type = %config.project.project_type,
            "Loaded carbon configuration"
        );
        Ok(config)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CarbonError> {
        self.storage.validate()?;
        for (name, value) in [
            ("end_of_life.default_area_sqm", self.end_of_life.default_area_sqm),
            ("end_of_life.default_transport_km", self.end_of_life.default_transport_km),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CarbonError::Config(format!(
                    "{} must be positive (found: {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Fallbacks used by the end-of-life calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndOfLifeDefaults {
    pub default_area_sqm: f64,
    pub default_transport_km: f64,
}

impl Default for EndOfLifeDefaults {
    fn default() -> Self {
        Self {
            default_area_sqm: DEFAULT_AREA_SQM,
            default_transport_km: DEFAULT_TRANSPORT_KM,
        }
    }
}

impl EndOfLifeDefaults {
    pub fn calculator(&self) -> EndOfLifeCalculator {
        EndOfLifeCalculator::with_defaults(self.default_area_sqm, self.default_transport_km)
    }
}

/// Store keys, one per persisted component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub end_of_life_key: String,
    pub module_d_key: String,
    pub whole_life_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            end_of_life_key: END_OF_LIFE_KEY.to_string(),
            module_d_key: MODULE_D_KEY.to_string(),
            whole_life_key: WHOLE_LIFE_KEY.to_string(),
        }
    }
}

impl StorageKeys {
    pub fn validate(&self) -> Result<(), CarbonError> {
        let keys = [&self.end_of_life_key, &self.module_d_key, &self.whole_life_key];
        if keys.iter().any(|k| k.trim().is_empty()) {
            return Err(CarbonError::Config("storage keys must not be empty".to_string()));
        }
        if keys[0] == keys[1] || keys[0] == keys[2] || keys[1] == keys[2] {
            return Err(CarbonError::Config("storage keys must be distinct".to_string()));
        }
        Ok(())
    }
}
