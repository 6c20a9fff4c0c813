//! Typed IDs for property and blog lookups.
//!
//! Listings are keyed by short numeric strings (`"1"`) and posts by URL
//! slugs (`"roi-calculation-guide"`). Wrapping both keeps a slug from being
//! passed where a property id is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed string ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

typed_id!(PropertyId, "Unique identifier for a property listing.");
typed_id!(PostSlug, "URL slug identifying a blog post.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_id_display_and_parse() {
        let id: PropertyId = "1".parse().unwrap();
        assert_eq!(id.to_string(), "1");
        assert_eq!(id.as_str(), "1");
        assert_eq!(id, PropertyId::from("1"));
    }

    #[test]
    fn test_slug_into_inner() {
        let slug = PostSlug::new("roi-calculation-guide");
        assert_eq!(slug.into_inner(), "roi-calculation-guide");
    }

    #[test]
    fn test_serde_transparent() {
        let id = PropertyId::new("6");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6\"");

        let back: PropertyId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
