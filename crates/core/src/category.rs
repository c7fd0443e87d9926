//! Expense categories.
//!
//! One enum serves both validation of incoming writes and the display list
//! handed to forms and charts.

use serde::{Deserialize, Serialize};

/// A fixed spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries, restaurants, coffee.
    Food,
    /// Fuel, fares, parking.
    Transport,
    /// Power, water, internet, phone.
    Utilities,
    /// Streaming, events, hobbies.
    Entertainment,
    /// Clothing and general purchases.
    Shopping,
    /// Medical and pharmacy.
    Health,
    /// Trips and lodging.
    Travel,
    /// Anything else.
    Other,
}

/// An `{id, name}` pair for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Stable identifier stored with each record.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
}

/// Sentinel id that budget forms send for "every category".
pub const ALL_CATEGORIES_ID: &str = "all";

impl Category {
    /// Every category in canonical display order.
    pub const ALL: [Self; 8] = [
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Entertainment,
        Self::Shopping,
        Self::Health,
        Self::Travel,
        Self::Other,
    ];

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Other => "other",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Transport => "Transportation",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Healthcare",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }

    /// The `{id, name}` pair for this category.
    #[must_use]
    pub const fn info(self) -> CategoryInfo {
        CategoryInfo {
            id: self.id(),
            name: self.display_name(),
        }
    }

    /// The full display list.
    #[must_use]
    pub fn catalog() -> Vec<CategoryInfo> {
        Self::ALL.iter().map(|c| c.info()).collect()
    }

    /// Parses an optional budget scope: `None`, empty, or `all` mean every category.
    ///
    /// # Errors
    ///
    /// Returns the unrecognized id.
    pub fn parse_scope(raw: Option<&str>) -> Result<Option<Self>, String> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(id) if id.eq_ignore_ascii_case(ALL_CATEGORIES_ID) => Ok(None),
            Some(id) => id.parse().map(Some),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("food", Category::Food)]
    #[case("FOOD", Category::Food)]
    #[case(" transport ", Category::Transport)]
    #[case("health", Category::Health)]
    #[case("other", Category::Other)]
    fn test_from_str(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(Category::from_str(raw).unwrap(), expected);
    }

    #[test]
    fn test_from_str_unknown() {
        assert!(Category::from_str("groceries").is_err());
        assert!(Category::from_str("").is_err());
        assert!(Category::from_str("all").is_err());
    }

    #[test]
    fn test_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.id()).unwrap(), category);
            assert_eq!(category.to_string(), category.id());
        }
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");
        let back: Category = serde_json::from_str("\"travel\"").unwrap();
        assert_eq!(back, Category::Travel);
    }

    #[test]
    fn test_catalog_order_and_names() {
        let catalog = Category::catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].id, "food");
        assert_eq!(catalog[0].name, "Food & Dining");
        assert_eq!(catalog[5].name, "Healthcare");
        assert_eq!(catalog[7].id, "other");
    }

    #[test]
    fn test_parse_scope() {
        assert_eq!(Category::parse_scope(None).unwrap(), None);
        assert_eq!(Category::parse_scope(Some("")).unwrap(), None);
        assert_eq!(Category::parse_scope(Some("All")).unwrap(), None);
        assert_eq!(
            Category::parse_scope(Some("food")).unwrap(),
            Some(Category::Food)
        );
        assert!(Category::parse_scope(Some("pets")).is_err());
    }
}
