//! # Project Filtering
//!
//! The projects page shows a row of filter buttons, each carrying a
//! `data-filter` value, and a grid of cards carrying `data-category`.
//! A card is visible when the active filter is `all` or names its category.

use serde::{Deserialize, Serialize};

const ALL: &str = "all";

/// The active project filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    /// Interpret a button's `data-filter` value.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// Whether a card with the given `data-category` is shown.
    ///
    /// Cards without a category are shown only under `All`. Matching is exact.
    pub fn shows(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category == Some(wanted.as_str()),
        }
    }

    /// Visibility of each card, in card order.
    pub fn visibility<'a, I>(&self, categories: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        categories.into_iter().map(|c| self.shows(c)).collect()
    }
}

impl std::fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Category(c) => f.write_str(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_everything() {
        let f = ProjectFilter::parse("all");
        assert_eq!(f, ProjectFilter::All);
        assert_eq!(
            f.visibility([Some("kitchen"), None, Some("roof")]),
            vec![true, true, true]
        );
    }

    #[test]
    fn category_shows_exact_matches_only() {
        let f = ProjectFilter::parse("kitchen");
        assert_eq!(
            f.visibility([Some("kitchen"), Some("Kitchen"), None, Some("bathroom")]),
            vec![true, false, false, false]
        );
    }

    #[test]
    fn display_round_trips() {
        for raw in ["all", "terrace"] {
            assert_eq!(ProjectFilter::parse(raw).to_string(), raw);
        }
    }
}
