//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::{PostSlug, PropertyId};
pub use money::Rupees;
