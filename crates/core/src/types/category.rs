//! Product category enumeration.

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid category: {0}")]
pub struct CategoryError(String);

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Gold,
    Silver,
    Diamond,
    Artificial,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Self; 4] = [Self::Gold, Self::Silver, Self::Diamond, Self::Artificial];

    /// The category name as stored and displayed.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Diamond => "Diamond",
            Self::Artificial => "Artificial",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("diamond".parse::<Category>(), Ok(Category::Diamond));
        assert!("Platinum".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_with_variant_name() {
        let json = serde_json::to_string(&Category::Artificial).expect("serialize");
        assert_eq!(json, "\"Artificial\"");
    }
}
