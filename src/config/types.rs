//! Configuration types for expense settlement.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML rate configuration file.

use serde::Deserialize;

use crate::models::{HomeChargeRate, TransportationRate};

/// The complete rate configuration loaded from `rates.yaml`.
///
/// # File structure
///
/// ```yaml
/// company:
///   - location: 本社
///     departure: 自宅
///     destination: 本社
///     amount: 500
///     is_default: true
/// customer:
///   - location: 東京
///     departure: 自宅
///     destination: 東京
///     amount: 800
///     is_default: true
/// home_charge:
///   location: 在宅チャージ
///   amount: 300
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Company commute rates, one per company location.
    #[serde(default)]
    pub company: Vec<TransportationRate>,
    /// Customer-site rates, one per customer location.
    #[serde(default)]
    pub customer: Vec<TransportationRate>,
    /// The home-office charge record, if configured.
    #[serde(default)]
    pub home_charge: Option<HomeChargeRate>,
}
