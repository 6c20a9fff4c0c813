//! ROI calculator data types.

use rust_decimal::Decimal;
use safal_shared::types::Rupees;
use serde::{Deserialize, Serialize};

/// Financial figures of a listing that seed the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFinancials {
    /// Rent the tenant pays each month.
    pub monthly_rent: Rupees,
    /// Asking price.
    pub price: Rupees,
    /// Advertised annual ROI in percentage points.
    pub roi: Decimal,
}

/// The three user-adjustable calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Amount invested, in whole rupees.
    pub investment_amount: Rupees,
    /// Expected ROI in percentage points (one fractional digit).
    pub expected_roi: Decimal,
    /// Years the investment is held.
    pub holding_period_years: u32,
}

/// Projected returns derived from a `CalculatorInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Twelve months of rent.
    pub annual_rent: Rupees,
    /// Rent collected over the holding period.
    pub total_rental_income: Rupees,
    /// Straight-line appreciation of the investment.
    pub estimated_appreciation: Rupees,
    /// Rental income plus appreciation.
    pub total_returns: Rupees,
    /// Investment plus total returns.
    pub final_value: Rupees,
}

/// Display strings for the calculator panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedProjection {
    /// Investment amount, e.g. `₹4.10 Cr`.
    pub investment_amount: String,
    /// Expected ROI, e.g. `8.2%`.
    pub expected_roi: String,
    /// Holding period, e.g. `5 Years`.
    pub holding_period: String,
    /// Annual rent.
    pub annual_rent: String,
    /// Rental income over the holding period.
    pub total_rental_income: String,
    /// Estimated appreciation.
    pub estimated_appreciation: String,
    /// Total returns.
    pub total_returns: String,
    /// Final value.
    pub final_value: String,
}
