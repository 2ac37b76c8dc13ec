//! Core financial calculations for Fincalc.
//!
//! This crate contains pure calculation logic with ZERO I/O dependencies.
//! Validation rules, rounding and the static rate table live here.
//!
//! # Modules
//!
//! - `calculator` - Compound interest, ROI and currency conversion estimates

pub mod calculator;

pub use calculator::{CalculatorError, CalculatorResult, ConversionEstimate, FinancialCalculator};
