//! Application state for the Expense Settlement Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

/// Shared application state.
///
/// Holds the default configuration and template paths used when a request
/// does not override them. Configuration itself is loaded per invocation,
/// so every call sees fresh rate data.
#[derive(Clone)]
pub struct AppState {
    /// Default path of the rate configuration file.
    config_path: Arc<str>,
    /// Default path of the report template file.
    template_path: Arc<str>,
}

impl AppState {
    /// Creates a new application state with the given default paths.
    pub fn new(config_path: impl Into<String>, template_path: impl Into<String>) -> Self {
        Self {
            config_path: config_path.into().into(),
            template_path: template_path.into().into(),
        }
    }

    /// Returns the default rate configuration path.
    pub fn config_path(&self) -> &str {
        &self.config_path
    }

    /// Returns the default report template path.
    pub fn template_path(&self) -> &str {
        &self.template_path
    }
}
