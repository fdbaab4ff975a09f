//! Configuration loading and management for the Expense Settlement Engine.
//!
//! This module provides functionality to load the rate configuration from a
//! YAML file: company and customer transportation rates plus the home-office
//! charge. The loaded configuration implements
//! [`crate::rates::RateProvider`] and is what the settlement pipeline is
//! handed in this repository.
//!
//! # Example
//!
//! ```no_run
//! use seisan_engine::config::ConfigLoader;
//! use seisan_engine::rates::RateProvider;
//!
//! let config = ConfigLoader::load("./config/seisan/rates.yaml").unwrap();
//! println!("Home charge: {}", config.home_charge().unwrap().amount);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::RatesConfig;
