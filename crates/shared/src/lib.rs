//! Shared errors and configuration for Fincalc.
//!
//! This crate provides what every other crate needs at the boundary:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, CalculatorConfig};
pub use error::{AppError, AppResult};
