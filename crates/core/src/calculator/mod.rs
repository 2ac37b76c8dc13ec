//! Compound interest, ROI and static currency conversion.

pub mod conversion;
pub mod error;
pub mod rates;
pub mod rounding;
pub mod service;

#[cfg(test)]
mod props;

pub use conversion::ConversionEstimate;
pub use error::{CalculatorError, CalculatorResult};
pub use rates::RateTable;
pub use service::{DEFAULT_BASE_CURRENCY, FinancialCalculator};
