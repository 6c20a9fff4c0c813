//! Pre-leased property listings.

pub mod catalog;
pub mod repository;
pub mod types;

pub use repository::{InMemoryPropertyRepository, PropertyRepository};
pub use types::{Property, TenantType};
