//! Bounded input controls for the ROI calculator.
//!
//! Each control behaves like a range slider: values snap to the nearest
//! step counted from `min` and are clamped into `[min, max]`. Clamping lives
//! here and never in the projection.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use safal_shared::types::Rupees;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::calculator::RoiCalculator;
use super::error::RoiError;

/// Identifies one of the calculator's three controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Investment amount in rupees.
    InvestmentAmount,
    /// Expected ROI in percentage points.
    ExpectedRoi,
    /// Holding period in whole years.
    HoldingPeriodYears,
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvestmentAmount => write!(f, "investment_amount"),
            Self::ExpectedRoi => write!(f, "expected_roi"),
            Self::HoldingPeriodYears => write!(f, "holding_period_years"),
        }
    }
}

/// A value a control can snap to its step grid.
pub trait Steppable: Copy + PartialOrd {
    /// Snaps `value` to the nearest `min + k * step`, halves rounding up.
    fn snap(value: Self, min: Self, step: Self) -> Self;
}

impl Steppable for Decimal {
    fn snap(value: Self, min: Self, step: Self) -> Self {
        if step <= Decimal::ZERO {
            return value.max(min);
        }
        let steps = ((value - min) / step).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        min + steps * step
    }
}

impl Steppable for u32 {
    fn snap(value: Self, min: Self, step: Self) -> Self {
        if step == 0 {
            return value.max(min);
        }
        let offset = value.saturating_sub(min);
        let steps = offset.saturating_add(step / 2) / step;
        min.saturating_add(steps.saturating_mul(step))
    }
}

/// A range control with inclusive bounds and a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundedControl<T> {
    /// Smallest accepted value.
    pub min: T,
    /// Largest accepted value.
    pub max: T,
    /// Distance between adjacent accepted values.
    pub step: T,
}

impl<T: Steppable> BoundedControl<T> {
    /// Returns the accepted value closest to `value`.
    pub fn clamp(&self, value: T) -> T {
        if value <= self.min {
            return self.min;
        }
        if value >= self.max {
            return self.max;
        }
        let snapped = T::snap(value, self.min, self.step);
        if snapped > self.max { self.max } else { snapped }
    }
}

/// Investment amount: ₹1 Cr to ₹10 Cr in ₹10 L steps.
pub const INVESTMENT_CONTROL: BoundedControl<Decimal> = BoundedControl {
    min: dec!(10000000),
    max: dec!(100000000),
    step: dec!(1000000),
};

/// Expected ROI: 5.0% to 12.0% in 0.1 point steps.
pub const EXPECTED_ROI_CONTROL: BoundedControl<Decimal> = BoundedControl {
    min: dec!(5.0),
    max: dec!(12.0),
    step: dec!(0.1),
};

/// Holding period: 1 to 15 whole years.
pub const HOLDING_PERIOD_CONTROL: BoundedControl<u32> = BoundedControl {
    min: 1,
    max: 15,
    step: 1,
};

/// Clamps an investment amount through its control.
#[must_use]
pub fn clamp_investment(amount: Rupees) -> Rupees {
    Rupees::new(INVESTMENT_CONTROL.clamp(amount.amount()))
}

/// Unparsed control values, as they arrive from a form or query string.
///
/// Absent values leave the corresponding control untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawControls {
    /// Investment amount in rupees.
    pub investment_amount: Option<String>,
    /// Expected ROI in percentage points.
    pub expected_roi: Option<String>,
    /// Holding period in whole years.
    pub holding_period_years: Option<String>,
}

impl RawControls {
    /// Returns true if no control value was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.investment_amount.is_none()
            && self.expected_roi.is_none()
            && self.holding_period_years.is_none()
    }

    /// Parses every supplied value and applies it to `calculator`.
    ///
    /// Nothing is applied unless all supplied values parse.
    pub fn apply_to(&self, calculator: &mut RoiCalculator) -> Result<(), RoiError> {
        let investment = self
            .investment_amount
            .as_deref()
            .map(|raw| parse_decimal(Control::InvestmentAmount, raw))
            .transpose()?;
        let roi = self
            .expected_roi
            .as_deref()
            .map(|raw| parse_decimal(Control::ExpectedRoi, raw))
            .transpose()?;
        let years = self
            .holding_period_years
            .as_deref()
            .map(parse_years)
            .transpose()?;

        if let Some(amount) = investment {
            calculator.set_investment_amount(Rupees::new(amount));
        }
        if let Some(roi) = roi {
            calculator.set_expected_roi(roi);
        }
        if let Some(years) = years {
            calculator.set_holding_period_years(years);
        }
        Ok(())
    }
}

fn parse_decimal(control: Control, raw: &str) -> Result<Decimal, RoiError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| RoiError::InvalidNumber {
            control,
            value: raw.to_string(),
        })
}

fn parse_years(raw: &str) -> Result<u32, RoiError> {
    let years = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| RoiError::InvalidNumber {
            control: Control::HoldingPeriodYears,
            value: raw.to_string(),
        })?;
    // Negative and oversized values still go through the control.
    let years = if years < 0 {
        0
    } else {
        u32::try_from(years).unwrap_or(u32::MAX)
    };
    debug!(raw, years, "parsed holding period");
    Ok(years)
}
