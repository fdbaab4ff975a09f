//! The rate-provider capability consumed by the settlement pipeline.
//!
//! The transformation core never talks to a storage backend directly; it is
//! handed a [`RateProvider`] and reads rates through it. One implementation
//! exists per storage backend ([`crate::config::ConfigLoader`] for YAML
//! configuration); the core is unchanged whichever one is injected.

use crate::error::EngineResult;
use crate::models::{HomeChargeRate, TransportationRate};

/// Read-only access to transportation rates and the home-office charge.
///
/// Every accessor may fail with a not-found condition when the backing
/// store is empty or misconfigured; the settlement core propagates such
/// failures instead of substituting synthetic values, so a broken rate
/// store fails the whole transformation atomically.
pub trait RateProvider {
    /// Returns the default company commute rate.
    ///
    /// # Errors
    ///
    /// [`crate::error::EngineError::RateNotFound`] when no company rate is
    /// flagged as the default.
    fn default_company_rate(&self) -> EngineResult<TransportationRate>;

    /// Returns all configured company rates, in configuration order.
    fn company_rates(&self) -> EngineResult<Vec<TransportationRate>>;

    /// Returns the default customer-site rate.
    ///
    /// # Errors
    ///
    /// [`crate::error::EngineError::RateNotFound`] when no customer rate is
    /// flagged as the default.
    fn default_customer_rate(&self) -> EngineResult<TransportationRate>;

    /// Returns all configured customer rates, in configuration order.
    fn customer_rates(&self) -> EngineResult<Vec<TransportationRate>>;

    /// Returns the home-office charge record.
    ///
    /// # Errors
    ///
    /// [`crate::error::EngineError::HomeChargeNotFound`] when the record is
    /// missing.
    fn home_charge(&self) -> EngineResult<HomeChargeRate>;
}
