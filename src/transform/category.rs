//! Category lookup: raw `MTA Mode` labels to canonical ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transit systems the stylesheets cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Subway,
    Lirr,
    MetroNorth,
}

const CATEGORIES: [(&str, Category); 3] = [
    ("NYCT Subway", Category::Subway),
    ("LIRR", Category::Lirr),
    ("Metro-North", Category::MetroNorth),
];

impl Category {
    /// Exact, case-sensitive match on the upstream label.
    ///
    /// `None` is not an error: the sheet carries banner rows and modes
    /// (buses, bridges) we don't style, and those rows are simply skipped.
    pub fn from_label(label: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, category)| *category)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Category::Subway => "subway",
            Category::Lirr => "lirr",
            Category::MetroNorth => "metro-north",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Subway => "NYC Subway Lines",
            Category::Lirr => "Long Island Rail Road Branches",
            Category::MetroNorth => "Metro-North Railroad Lines",
        }
    }

    /// Branch-style categories use one slug per row instead of split codes.
    pub fn is_branch_style(&self) -> bool {
        !matches!(self, Category::Subway)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Tuple form of the lookup: `(canonical id, display name)`.
pub fn translate_category(label: &str) -> Option<(&'static str, &'static str)> {
    Category::from_label(label).map(|c| (c.id(), c.display_name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(
            translate_category("NYCT Subway"),
            Some(("subway", "NYC Subway Lines"))
        );
        assert_eq!(
            translate_category("LIRR"),
            Some(("lirr", "Long Island Rail Road Branches"))
        );
        assert_eq!(
            translate_category("Metro-North"),
            Some(("metro-north", "Metro-North Railroad Lines"))
        );
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(translate_category("Bogus"), None);
        assert_eq!(translate_category("nyct subway"), None);
        assert_eq!(translate_category(""), None);
    }

    #[test]
    fn test_branch_style() {
        assert!(!Category::Subway.is_branch_style());
        assert!(Category::Lirr.is_branch_style());
        assert!(Category::MetroNorth.is_branch_style());
    }
}
