//! Request types for the Expense Settlement Engine API.
//!
//! This module defines the JSON request structure for the `/seisan` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for the `/seisan` endpoint.
///
/// Carries the raw attendance text and optional overrides for the rate
/// configuration and report template; omitted paths fall back to the
/// defaults held in the application state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// The tab-separated attendance log, including its header row.
    pub attendance_text: String,
    /// Optional path of the rate configuration file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    /// Optional path of the report template file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<String>,
}
