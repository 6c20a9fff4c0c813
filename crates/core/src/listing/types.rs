//! Listing domain types.

use rust_decimal::{Decimal, RoundingStrategy};
use safal_shared::types::{PropertyId, Rupees};
use serde::{Deserialize, Serialize};

use crate::roi::{MONTHS_PER_YEAR, PropertyFinancials};

/// Kind of tenant occupying a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenantType {
    /// Bank branch.
    Bank,
    /// IT or corporate office.
    #[serde(rename = "IT")]
    It,
    /// Retail showroom.
    Retail,
}

impl std::fmt::Display for TenantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bank => write!(f, "Bank"),
            Self::It => write!(f, "IT"),
            Self::Retail => write!(f, "Retail"),
        }
    }
}

impl std::str::FromStr for TenantType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bank" => Ok(Self::Bank),
            "it" => Ok(Self::It),
            "retail" => Ok(Self::Retail),
            _ => Err(format!("Unknown tenant type: {s}")),
        }
    }
}

/// A pre-leased commercial property offered for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Listing ID.
    pub id: PropertyId,
    /// Listing title.
    pub name: String,
    /// Locality and city.
    pub location: String,
    /// Full postal address.
    pub full_address: String,
    /// Tenant name.
    pub tenant: String,
    /// Tenant category.
    pub tenant_type: TenantType,
    /// Carpet area in square feet.
    pub carpet_area_sqft: u32,
    /// Built-up area in square feet.
    pub built_up_area_sqft: u32,
    /// Year the current lease started.
    pub lease_start_year: i32,
    /// Year the current lease ends.
    pub lease_end_year: i32,
    /// Rent per month.
    pub monthly_rent: Rupees,
    /// Contracted yearly rent escalation in percentage points.
    pub annual_escalation_percent: Decimal,
    /// Advertised annual ROI in percentage points.
    pub roi: Decimal,
    /// Asking price.
    pub price: Rupees,
    /// Security deposit, in months of rent.
    pub security_deposit_months: u32,
    /// Lock-in period in years.
    pub lock_in_years: u32,
    /// Gallery image URLs.
    pub images: Vec<String>,
    /// Marketing description.
    pub description: String,
    /// Highlight bullet points.
    pub highlights: Vec<String>,
    /// Amenities on site.
    pub amenities: Vec<String>,
}

impl Property {
    /// Figures that seed the ROI calculator.
    #[must_use]
    pub const fn financials(&self) -> PropertyFinancials {
        PropertyFinancials {
            monthly_rent: self.monthly_rent,
            price: self.price,
            roi: self.roi,
        }
    }

    /// Twelve months of rent.
    #[must_use]
    pub fn annual_rent(&self) -> Rupees {
        self.monthly_rent * MONTHS_PER_YEAR
    }

    /// Security deposit in rupees.
    #[must_use]
    pub fn security_deposit(&self) -> Rupees {
        self.monthly_rent * self.security_deposit_months
    }

    /// Gross rental yield: annual rent over price, in percent (2 dp).
    #[must_use]
    pub fn gross_yield_percent(&self) -> Decimal {
        if self.price.is_zero() {
            return Decimal::ZERO;
        }
        (self.annual_rent().amount() / self.price.amount() * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Total length of the lease in years.
    #[must_use]
    pub fn lease_term_years(&self) -> u32 {
        u32::try_from(self.lease_end_year - self.lease_start_year).unwrap_or(0)
    }

    /// Whole years left on the lease as of `year`.
    #[must_use]
    pub fn lease_remaining_years(&self, year: i32) -> u32 {
        u32::try_from(self.lease_end_year - year).unwrap_or(0)
    }

    /// Share of the lease elapsed as of `year`, in percent (0 to 100, 2 dp).
    #[must_use]
    pub fn lease_progress_percent(&self, year: i32) -> Decimal {
        let term = self.lease_term_years();
        if term == 0 {
            return Decimal::ONE_HUNDRED;
        }
        let elapsed = (year - self.lease_start_year).clamp(0, self.lease_end_year - self.lease_start_year);
        (Decimal::from(elapsed) / Decimal::from(term) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::catalog;
    use rust_decimal_macros::dec;

    fn hdfc() -> Property {
        catalog::properties()
            .into_iter()
            .find(|p| p.id.as_str() == "1")
            .unwrap()
    }

    #[test]
    fn test_tenant_type_round_trip() {
        assert_eq!("IT".parse::<TenantType>().unwrap(), TenantType::It);
        assert_eq!("bank".parse::<TenantType>().unwrap(), TenantType::Bank);
        assert_eq!(TenantType::Retail.to_string(), "Retail");
        assert!("Warehouse".parse::<TenantType>().is_err());
        assert_eq!(serde_json::to_string(&TenantType::It).unwrap(), "\"IT\"");
    }

    #[test]
    fn test_financials() {
        let financials = hdfc().financials();
        assert_eq!(financials.monthly_rent, Rupees::from_whole(280_000));
        assert_eq!(financials.price, Rupees::from_whole(41_000_000));
        assert_eq!(financials.roi, dec!(8.2));
    }

    #[test]
    fn test_annual_rent_and_deposit() {
        let property = hdfc();
        assert_eq!(property.annual_rent(), Rupees::from_whole(3_360_000));
        assert_eq!(property.security_deposit(), Rupees::from_whole(3_360_000));
    }

    #[test]
    fn test_gross_yield() {
        // 33.6 L / 4.1 Cr
        assert_eq!(hdfc().gross_yield_percent(), dec!(8.20));
    }

    #[test]
    fn test_gross_yield_zero_price() {
        let mut property = hdfc();
        property.price = Rupees::ZERO;
        assert_eq!(property.gross_yield_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_lease_timeline() {
        let property = hdfc();
        assert_eq!(property.lease_term_years(), 12);
        assert_eq!(property.lease_remaining_years(2024), 8);
        assert_eq!(property.lease_remaining_years(2040), 0);
        assert_eq!(property.lease_progress_percent(2024), dec!(33.33));
        assert_eq!(property.lease_progress_percent(2010), Decimal::ZERO);
        assert_eq!(property.lease_progress_percent(2050), Decimal::ONE_HUNDRED);
    }
}
