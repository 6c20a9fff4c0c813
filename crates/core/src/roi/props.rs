//! Property-based tests for the ROI projection.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use safal_shared::types::Rupees;

use super::calculator::{RoiCalculator, project};
use super::control::{EXPECTED_ROI_CONTROL, HOLDING_PERIOD_CONTROL, INVESTMENT_CONTROL};
use super::types::{CalculatorInput, PropertyFinancials};

/// Investment amounts on the control's grid (₹1 Cr to ₹10 Cr, ₹10 L steps).
fn investment_amount() -> impl Strategy<Value = Rupees> {
    (10i64..=100).prop_map(|steps| Rupees::from_whole(steps * 1_000_000))
}

/// Any whole-rupee investment, including off-grid values.
fn any_investment_amount() -> impl Strategy<Value = Rupees> {
    (10_000_000i64..=100_000_000).prop_map(Rupees::from_whole)
}

/// Expected ROI on the control's grid (5.0 to 12.0).
fn expected_roi() -> impl Strategy<Value = Decimal> {
    (50i64..=120).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn holding_period() -> impl Strategy<Value = u32> {
    1u32..=15
}

/// Monthly rents from ₹10,000 to ₹10 L.
fn monthly_rent() -> impl Strategy<Value = Rupees> {
    (10_000i64..=1_000_000).prop_map(Rupees::from_whole)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Appreciation is a fixed 5% of the investment per held year.
    #[test]
    fn prop_appreciation_is_straight_line(
        investment in any_investment_amount(),
        years in holding_period(),
        roi in expected_roi(),
        rent in monthly_rent(),
    ) {
        let input = CalculatorInput {
            investment_amount: investment,
            expected_roi: roi,
            holding_period_years: years,
        };

        let result = project(&input, rent);

        let expected = investment.amount() * dec!(0.05) * Decimal::from(years);
        prop_assert_eq!(result.estimated_appreciation.amount(), expected);
    }

    /// Rental income is twelve months of rent per held year.
    #[test]
    fn prop_rental_income_is_rent_times_months(
        investment in investment_amount(),
        years in holding_period(),
        rent in monthly_rent(),
    ) {
        let input = CalculatorInput {
            investment_amount: investment,
            expected_roi: dec!(8.0),
            holding_period_years: years,
        };

        let result = project(&input, rent);

        prop_assert_eq!(result.annual_rent.amount(), rent.amount() * dec!(12));
        prop_assert_eq!(
            result.total_rental_income.amount(),
            rent.amount() * dec!(12) * Decimal::from(years)
        );
    }

    /// Final value is investment plus rental income plus appreciation.
    #[test]
    fn prop_final_value_sums_components(
        investment in investment_amount(),
        roi in expected_roi(),
        years in holding_period(),
        rent in monthly_rent(),
    ) {
        let input = CalculatorInput {
            investment_amount: investment,
            expected_roi: roi,
            holding_period_years: years,
        };

        let result = project(&input, rent);

        prop_assert_eq!(
            result.total_returns,
            result.total_rental_income + result.estimated_appreciation
        );
        prop_assert_eq!(
            result.final_value,
            investment + result.total_rental_income + result.estimated_appreciation
        );
    }

    /// Moving only the expected ROI control leaves every output unchanged.
    #[test]
    fn prop_expected_roi_does_not_affect_projection(
        price in investment_amount(),
        rent in monthly_rent(),
        years in holding_period(),
        first_roi in expected_roi(),
        second_roi in expected_roi(),
    ) {
        let financials = PropertyFinancials { monthly_rent: rent, price, roi: first_roi };
        let mut calc = RoiCalculator::from_financials(financials, years);
        let before = calc.projection();

        calc.set_expected_roi(second_roi);
        let after = calc.projection();

        prop_assert_eq!(before.annual_rent, after.annual_rent);
        prop_assert_eq!(before.total_rental_income, after.total_rental_income);
        prop_assert_eq!(before.estimated_appreciation, after.estimated_appreciation);
        prop_assert_eq!(before.total_returns, after.total_returns);
        prop_assert_eq!(before.final_value, after.final_value);
    }

    /// Minimum investment for one year gives the smallest returns and
    /// maximum investment for fifteen years the largest.
    #[test]
    fn prop_returns_bounded_by_extreme_inputs(
        investment in investment_amount(),
        years in holding_period(),
        rent in monthly_rent(),
    ) {
        let input_for = |amount: Decimal, years: u32| CalculatorInput {
            investment_amount: Rupees::new(amount),
            expected_roi: dec!(8.0),
            holding_period_years: years,
        };

        let smallest = project(
            &input_for(INVESTMENT_CONTROL.min, HOLDING_PERIOD_CONTROL.min),
            rent,
        );
        let largest = project(
            &input_for(INVESTMENT_CONTROL.max, HOLDING_PERIOD_CONTROL.max),
            rent,
        );
        let result = project(&input_for(investment.amount(), years), rent);

        prop_assert!(smallest.total_returns <= result.total_returns);
        prop_assert!(result.total_returns <= largest.total_returns);
    }

    /// Projection is referentially transparent.
    #[test]
    fn prop_projection_is_deterministic(
        investment in investment_amount(),
        roi in expected_roi(),
        years in holding_period(),
        rent in monthly_rent(),
    ) {
        let input = CalculatorInput {
            investment_amount: investment,
            expected_roi: roi,
            holding_period_years: years,
        };

        prop_assert_eq!(project(&input, rent), project(&input, rent));
    }

    /// Controls always land inside their bounds.
    #[test]
    fn prop_controls_clamp_into_bounds(
        amount in -1_000_000_000i64..1_000_000_000,
        roi_hundredths in -5_000i64..5_000,
        years in 0u32..100,
    ) {
        let accepted = INVESTMENT_CONTROL.clamp(Decimal::from(amount));
        prop_assert!(accepted >= INVESTMENT_CONTROL.min && accepted <= INVESTMENT_CONTROL.max);
        prop_assert_eq!(INVESTMENT_CONTROL.clamp(accepted), accepted);

        let roi = EXPECTED_ROI_CONTROL.clamp(Decimal::new(roi_hundredths, 2));
        prop_assert!(roi >= EXPECTED_ROI_CONTROL.min && roi <= EXPECTED_ROI_CONTROL.max);
        prop_assert_eq!(EXPECTED_ROI_CONTROL.clamp(roi), roi);

        let years = HOLDING_PERIOD_CONTROL.clamp(years);
        prop_assert!((1..=15).contains(&years));
    }
}
