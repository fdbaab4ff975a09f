//! Rate models for transportation fares and the home-office charge.
//!
//! This module defines the rate records handed to the settlement pipeline
//! by a rate provider.

use serde::{Deserialize, Serialize};

/// The category a transportation rate belongs to.
///
/// Company rates cover the commute to the employer's own locations; customer
/// rates cover travel to client sites. Each category has its own candidate
/// set and its own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateCategory {
    /// Commute to a company location.
    Company,
    /// Travel to a customer location.
    Customer,
}

impl std::fmt::Display for RateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateCategory::Company => write!(f, "company"),
            RateCategory::Customer => write!(f, "customer"),
        }
    }
}

/// A configured transportation fare for one named location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportationRate {
    /// Unique location identifier, matched against attendance memos.
    pub location: String,
    /// Departure station or place.
    pub departure: String,
    /// Destination station or place.
    pub destination: String,
    /// Round-trip fare in whole currency units.
    pub amount: i64,
    /// Whether this record is the category's fallback rate.
    #[serde(default)]
    pub is_default: bool,
}

/// The flat daily charge for a home-office day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeChargeRate {
    /// Label of the charge record.
    pub location: String,
    /// Charge per home-office day in whole currency units.
    pub amount: i64,
}
