//! View models assembled from repositories and session flags.

use safal_shared::types::PropertyId;
use serde::Serialize;

use crate::listing::{Property, PropertyRepository, TenantType};
use crate::roi::RoiCalculator;
use crate::session::SessionFlags;

/// Landing page contents.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    /// Whether to play the intro splash.
    pub show_splash: bool,
    /// Listings shown in the properties section.
    pub properties: Vec<Property>,
}

impl HomeView {
    /// Builds the landing page, optionally filtered to one tenant type.
    #[must_use]
    pub fn build(
        flags: SessionFlags,
        properties: &dyn PropertyRepository,
        filter: Option<TenantType>,
    ) -> Self {
        let properties = match filter {
            Some(tenant_type) => properties.list_by_tenant_type(tenant_type),
            None => properties.list(),
        };
        Self {
            show_splash: !flags.splash_seen,
            properties,
        }
    }
}

/// Property detail page with its seeded calculator.
#[derive(Debug, Clone)]
pub struct PropertyDetailView {
    /// The listing.
    pub property: Property,
    /// Calculator seeded from the listing's financials.
    pub calculator: RoiCalculator,
}

impl PropertyDetailView {
    /// Builds the detail page for `id`, or `None` if no such listing exists.
    #[must_use]
    pub fn build(
        id: &PropertyId,
        properties: &dyn PropertyRepository,
        default_holding_period_years: u32,
    ) -> Option<Self> {
        let property = properties.get_by_id(id)?;
        let calculator =
            RoiCalculator::from_financials(property.financials(), default_holding_period_years);
        Some(Self {
            property,
            calculator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::InMemoryPropertyRepository;
    use rust_decimal_macros::dec;
    use safal_shared::types::Rupees;

    #[test]
    fn test_home_view_splash_follows_flag() {
        let repo = InMemoryPropertyRepository::with_catalog();

        let first = HomeView::build(SessionFlags::default(), &repo, None);
        assert!(first.show_splash);
        assert_eq!(first.properties.len(), 6);

        let returning = HomeView::build(SessionFlags::returning(), &repo, None);
        assert!(!returning.show_splash);
    }

    #[test]
    fn test_home_view_filter() {
        let repo = InMemoryPropertyRepository::with_catalog();
        let view = HomeView::build(SessionFlags::default(), &repo, Some(TenantType::It));
        assert!(view.properties.iter().all(|p| p.tenant_type == TenantType::It));
        assert_eq!(view.properties.len(), 2);
    }

    #[test]
    fn test_detail_view_seeds_calculator() {
        let repo = InMemoryPropertyRepository::with_catalog();

        let view = PropertyDetailView::build(&PropertyId::from("2"), &repo, 5).unwrap();

        assert_eq!(view.property.name, "Corporate Office Space");
        assert_eq!(
            view.calculator.input().investment_amount,
            Rupees::from_whole(60_000_000)
        );
        assert_eq!(view.calculator.input().expected_roi, dec!(7.8));
        assert_eq!(
            view.calculator.projection().annual_rent,
            Rupees::from_whole(4_680_000)
        );
    }

    #[test]
    fn test_detail_view_missing_property() {
        let repo = InMemoryPropertyRepository::with_catalog();
        assert!(PropertyDetailView::build(&PropertyId::from("42"), &repo, 5).is_none());
    }
}
