//! ROI projection and the stateful calculator around it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use safal_shared::format::{format_inr, format_percent};
use safal_shared::types::Rupees;
use tracing::debug;

use super::control::{EXPECTED_ROI_CONTROL, HOLDING_PERIOD_CONTROL, clamp_investment};
use super::types::{CalculatorInput, FormattedProjection, ProjectionResult, PropertyFinancials};

/// Fixed straight-line appreciation per year (5%).
///
/// Independent of the expected ROI control.
pub const APPRECIATION_RATE: Decimal = dec!(0.05);

/// Months of rent collected per year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Projects returns for `input` on a property renting at `monthly_rent`.
///
/// Pure and total: no clamping, rounding, or failure. `input.expected_roi`
/// is not read.
#[must_use]
pub fn project(input: &CalculatorInput, monthly_rent: Rupees) -> ProjectionResult {
    let years = input.holding_period_years;

    let annual_rent = monthly_rent * MONTHS_PER_YEAR;
    let total_rental_income = annual_rent * years;
    let estimated_appreciation = input.investment_amount * APPRECIATION_RATE * years;
    let total_returns = total_rental_income + estimated_appreciation;
    let final_value = input.investment_amount + total_returns;

    ProjectionResult {
        annual_rent,
        total_rental_income,
        estimated_appreciation,
        total_returns,
        final_value,
    }
}

/// Calculator state for one property detail view.
///
/// Inputs change only through the bounded setters; the projection is
/// recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiCalculator {
    financials: PropertyFinancials,
    input: CalculatorInput,
}

impl RoiCalculator {
    /// Seeds a calculator from a listing's price and advertised ROI.
    #[must_use]
    pub fn from_financials(financials: PropertyFinancials, default_holding_period_years: u32) -> Self {
        let input = CalculatorInput {
            investment_amount: clamp_investment(financials.price),
            expected_roi: EXPECTED_ROI_CONTROL.clamp(financials.roi),
            holding_period_years: HOLDING_PERIOD_CONTROL.clamp(default_holding_period_years),
        };
        debug!(
            price = %financials.price.amount(),
            investment = %input.investment_amount.amount(),
            roi = %input.expected_roi,
            years = input.holding_period_years,
            "seeded ROI calculator"
        );
        Self { financials, input }
    }

    /// Current inputs.
    #[must_use]
    pub const fn input(&self) -> &CalculatorInput {
        &self.input
    }

    /// Financials the calculator was seeded with.
    #[must_use]
    pub const fn financials(&self) -> &PropertyFinancials {
        &self.financials
    }

    /// Sets the investment amount, returning the value the control accepted.
    pub fn set_investment_amount(&mut self, amount: Rupees) -> Rupees {
        let accepted = clamp_investment(amount);
        if accepted != amount {
            debug!(requested = %amount.amount(), accepted = %accepted.amount(), "investment amount clamped");
        }
        self.input.investment_amount = accepted;
        accepted
    }

    /// Sets the expected ROI, returning the value the control accepted.
    pub fn set_expected_roi(&mut self, roi: Decimal) -> Decimal {
        let accepted = EXPECTED_ROI_CONTROL.clamp(roi);
        if accepted != roi {
            debug!(requested = %roi, accepted = %accepted, "expected ROI clamped");
        }
        self.input.expected_roi = accepted;
        accepted
    }

    /// Sets the holding period, returning the value the control accepted.
    pub fn set_holding_period_years(&mut self, years: u32) -> u32 {
        let accepted = HOLDING_PERIOD_CONTROL.clamp(years);
        if accepted != years {
            debug!(requested = years, accepted, "holding period clamped");
        }
        self.input.holding_period_years = accepted;
        accepted
    }

    /// Projected returns for the current inputs.
    #[must_use]
    pub fn projection(&self) -> ProjectionResult {
        project(&self.input, self.financials.monthly_rent)
    }

    /// Display strings for the current inputs and projection.
    #[must_use]
    pub fn formatted(&self) -> FormattedProjection {
        let projection = self.projection();
        let years = self.input.holding_period_years;

        FormattedProjection {
            investment_amount: format_inr(self.input.investment_amount.amount()),
            expected_roi: format_percent(self.input.expected_roi),
            holding_period: if years == 1 {
                "1 Year".to_string()
            } else {
                format!("{years} Years")
            },
            annual_rent: projection.annual_rent.formatted(),
            total_rental_income: projection.total_rental_income.formatted(),
            estimated_appreciation: projection.estimated_appreciation.formatted(),
            total_returns: projection.total_returns.formatted(),
            final_value: projection.final_value.formatted(),
        }
    }
}
