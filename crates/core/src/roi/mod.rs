//! ROI projection for a single property investment.
//!
//! Three bounded controls (investment amount, expected ROI, holding period)
//! feed a pure projection of rental income and straight-line appreciation.
//! The expected ROI control is displayed and adjustable but does not feed
//! any projected figure.

pub mod calculator;
pub mod control;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use calculator::{APPRECIATION_RATE, MONTHS_PER_YEAR, RoiCalculator, project};
pub use control::{
    BoundedControl, Control, EXPECTED_ROI_CONTROL, HOLDING_PERIOD_CONTROL, INVESTMENT_CONTROL,
    RawControls,
};
pub use error::RoiError;
pub use types::{CalculatorInput, FormattedProjection, ProjectionResult, PropertyFinancials};
