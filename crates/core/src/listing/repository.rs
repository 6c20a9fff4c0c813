//! Property lookups.

use safal_shared::types::PropertyId;

use super::catalog;
use super::types::{Property, TenantType};

/// Read-only source of property listings.
pub trait PropertyRepository: Send + Sync {
    /// Returns the listing with `id`, if any.
    fn get_by_id(&self, id: &PropertyId) -> Option<Property>;

    /// Returns every listing in display order.
    fn list(&self) -> Vec<Property>;

    /// Returns listings whose tenant is of `tenant_type`, in display order.
    fn list_by_tenant_type(&self, tenant_type: TenantType) -> Vec<Property> {
        self.list()
            .into_iter()
            .filter(|p| p.tenant_type == tenant_type)
            .collect()
    }
}

/// Repository over a fixed, in-memory set of listings.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPropertyRepository {
    properties: Vec<Property>,
}

impl InMemoryPropertyRepository {
    /// Creates a repository over `properties`.
    #[must_use]
    pub const fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Creates a repository holding the site's current listings.
    #[must_use]
    pub fn with_catalog() -> Self {
        Self::new(catalog::properties())
    }
}

impl PropertyRepository for InMemoryPropertyRepository {
    fn get_by_id(&self, id: &PropertyId) -> Option<Property> {
        self.properties.iter().find(|p| &p.id == id).cloned()
    }

    fn list(&self) -> Vec<Property> {
        self.properties.clone()
    }
}
