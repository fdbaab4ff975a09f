//! Error types for the Expense Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during expense settlement.

use thiserror::Error;

use crate::models::RateCategory;

/// The main error type for the Expense Settlement Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use seisan_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or violates a config invariant.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The attendance input could not be parsed.
    #[error("Failed to parse attendance input at line {line}: {message}")]
    AttendanceParse {
        /// The 1-based line number of the offending record (0 when unknown).
        line: u64,
        /// A description of the parse error.
        message: String,
    },

    /// No default transportation rate is configured for the category.
    #[error("No default {category} transportation rate is configured")]
    RateNotFound {
        /// The rate category the lookup ran against.
        category: RateCategory,
    },

    /// The home-charge record is missing from the rate configuration.
    #[error("No home-charge record is configured")]
    HomeChargeNotFound,

    /// A work type reached a generator it was not filtered for.
    ///
    /// This is a programming-contract violation of the caller, never a
    /// data error.
    #[error("Work type '{work_type}' reached the on-site expense generator")]
    UnexpectedWorkType {
        /// The offending work type code.
        work_type: String,
    },

    /// The expense ledger could not be serialized to CSV.
    #[error("Failed to serialize expense ledger: {message}")]
    LedgerSerialize {
        /// A description of the serialization error.
        message: String,
    },

    /// The report template could not be parsed.
    #[error("Failed to parse report template: {message}")]
    TemplateParse {
        /// A description of the template error.
        message: String,
    },

    /// The report template failed to render.
    #[error("Failed to render report template: {message}")]
    TemplateRender {
        /// A description of the render error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
