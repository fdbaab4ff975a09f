//! Expense Settlement Engine
//!
//! This crate turns a tab-separated attendance log into a transportation
//! reimbursement ledger: days are grouped by date, classified as on-site,
//! home-office or non-billable, and the matching fare or flat-charge rows
//! are generated from configured rates.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rates;
pub mod settlement;
pub mod template;
