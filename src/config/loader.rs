//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rate
//! configurations from a YAML file and serving them as a
//! [`RateProvider`].

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{HomeChargeRate, RateCategory, TransportationRate};
use crate::rates::RateProvider;

use super::types::RatesConfig;

/// Loads and provides access to the rate configuration.
///
/// The `ConfigLoader` reads a YAML rate file, validates its invariants and
/// serves lookups through the [`RateProvider`] trait. Rates are read-only
/// for the lifetime of the loader; each settlement invocation constructs a
/// fresh loader, so configuration edits take effect on the next call.
///
/// # Example
///
/// ```no_run
/// use seisan_engine::config::ConfigLoader;
/// use seisan_engine::rates::RateProvider;
///
/// let loader = ConfigLoader::load("./config/seisan/rates.yaml").unwrap();
/// let default_rate = loader.default_company_rate().unwrap();
/// println!("Commute fare: {}", default_rate.amount);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RatesConfig,
}

impl ConfigLoader {
    /// Loads the rate configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rate file (e.g., "./config/seisan/rates.yaml")
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the file is missing and
    /// `ConfigParseError` when the YAML is invalid or a configuration
    /// invariant is violated: duplicate location names within a category,
    /// or more than one default rate per category. A *missing* default is
    /// not a load error; it surfaces as `RateNotFound` when the lookup
    /// runs.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses the rate configuration from a YAML string.
    ///
    /// Applies the same validation as [`ConfigLoader::load`].
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: RatesConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::validate_category(&config.company, RateCategory::Company, path)?;
        Self::validate_category(&config.customer, RateCategory::Customer, path)?;

        Ok(Self { config })
    }

    /// Checks the per-category invariants of the rate table.
    fn validate_category(
        rates: &[TransportationRate],
        category: RateCategory,
        path: &str,
    ) -> EngineResult<()> {
        let mut locations: HashSet<&str> = HashSet::new();
        for rate in rates {
            if !locations.insert(rate.location.as_str()) {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!(
                        "duplicate {} location '{}'",
                        category, rate.location
                    ),
                });
            }
        }

        let defaults = rates.iter().filter(|rate| rate.is_default).count();
        if defaults > 1 {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!("{} rates declare {} defaults, at most one is allowed", category, defaults),
            });
        }

        Ok(())
    }

    fn default_rate(
        rates: &[TransportationRate],
        category: RateCategory,
    ) -> EngineResult<TransportationRate> {
        rates
            .iter()
            .find(|rate| rate.is_default)
            .cloned()
            .ok_or(EngineError::RateNotFound { category })
    }
}

impl RateProvider for ConfigLoader {
    fn default_company_rate(&self) -> EngineResult<TransportationRate> {
        Self::default_rate(&self.config.company, RateCategory::Company)
    }

    fn company_rates(&self) -> EngineResult<Vec<TransportationRate>> {
        Ok(self.config.company.clone())
    }

    fn default_customer_rate(&self) -> EngineResult<TransportationRate> {
        Self::default_rate(&self.config.customer, RateCategory::Customer)
    }

    fn customer_rates(&self) -> EngineResult<Vec<TransportationRate>> {
        Ok(self.config.customer.clone())
    }

    fn home_charge(&self) -> EngineResult<HomeChargeRate> {
        self.config
            .home_charge
            .clone()
            .ok_or(EngineError::HomeChargeNotFound)
    }
}
