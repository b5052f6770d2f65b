//! Line/branch descriptor splitting.

use crate::transform::category::Category;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NOISE_WORDS: Regex = Regex::new(r"(?i)branch|zone|line").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Codes and display label produced from one `Line/Branch` cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet {
    /// Lowercase line codes in source order
    pub codes: Vec<String>,
    /// Comma-joined uppercase codes for the subway, raw descriptor otherwise
    pub display: String,
}

/// Split a descriptor according to its category's rules.
///
/// Subway cells list several services (`N/Q/R` or `A C E`), each becoming
/// its own code. Railroad cells name a single branch and turn into one slug.
pub fn translate_lines(descriptor: &str, category: Category) -> LineSet {
    if category.is_branch_style() {
        branch_line_set(descriptor)
    } else {
        subway_line_set(descriptor)
    }
}

fn subway_line_set(descriptor: &str) -> LineSet {
    let tokens: Vec<&str> = if descriptor.contains('/') {
        descriptor.split('/').collect()
    } else {
        descriptor.split_whitespace().collect()
    };

    LineSet {
        codes: tokens.iter().map(|t| t.to_lowercase()).collect(),
        display: tokens.iter().map(|t| t.to_uppercase()).join(","),
    }
}

fn branch_line_set(descriptor: &str) -> LineSet {
    let lowered = descriptor.to_lowercase();
    let stripped = NOISE_WORDS.replace_all(&lowered, "");
    let slug = WHITESPACE_RUN.replace_all(stripped.trim(), "-").into_owned();

    LineSet {
        codes: vec![slug],
        display: descriptor.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subway_slash_separated() {
        let set = translate_lines("N/Q/R", Category::Subway);
        assert_eq!(set.codes, vec!["n", "q", "r"]);
        assert_eq!(set.display, "N,Q,R");
    }

    #[test]
    fn test_subway_space_separated() {
        let set = translate_lines("A C E", Category::Subway);
        assert_eq!(set.codes, vec!["a", "c", "e"]);
        assert_eq!(set.display, "A,C,E");
    }

    #[test]
    fn test_subway_display_is_uppercased() {
        // Lowercase input still renders uppercase labels
        let set = translate_lines("s", Category::Subway);
        assert_eq!(set.codes, vec!["s"]);
        assert_eq!(set.display, "S");
    }

    #[test]
    fn test_empty_subway_descriptor_has_no_codes() {
        let set = translate_lines("", Category::Subway);
        assert!(set.codes.is_empty());
        assert_eq!(set.display, "");

        let set = translate_lines("   ", Category::Subway);
        assert!(set.codes.is_empty());
    }

    #[test]
    fn test_branch_slug() {
        let set = translate_lines("Port Washington Branch", Category::Lirr);
        assert_eq!(set.codes, vec!["port-washington"]);
        assert_eq!(set.display, "Port Washington Branch");
    }

    #[test]
    fn test_branch_noise_words_removed_anywhere() {
        let set = translate_lines("City Terminal Zone", Category::Lirr);
        assert_eq!(set.codes, vec!["city-terminal"]);

        let set = translate_lines("New Haven Line", Category::MetroNorth);
        assert_eq!(set.codes, vec!["new-haven"]);

        // Matches inside words too
        let set = translate_lines("Mainline Branch", Category::Lirr);
        assert_eq!(set.codes, vec!["main"]);
    }

    #[test]
    fn test_branch_whitespace_runs_collapse() {
        let set = translate_lines("Far  Rockaway   Branch", Category::Lirr);
        assert_eq!(set.codes, vec!["far-rockaway"]);
    }

    #[test]
    fn test_branch_of_only_noise_words_gives_empty_code() {
        // Degenerate rows are kept with an empty code rather than rejected
        let set = translate_lines("Branch Line", Category::Lirr);
        assert_eq!(set.codes, vec![""]);
        assert_eq!(set.display, "Branch Line");
    }
}
