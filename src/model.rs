//! Canonical line model shared by the JSON and stylesheet outputs.

use crate::transform::category::Category;
use crate::transform::lines::LineSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One parsed row of the upstream sheet, keyed by header name.
pub type RawRecord = HashMap<String, String>;

/// Separator between category id and line code in composite ids.
pub const COMPOSITE_ID_SEPARATOR: &str = "-";

/// A styled line (or group of subway services sharing one color).
///
/// Field names in JSON follow the published `mta-styles.json` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitLine {
    #[serde(rename = "mode")]
    category: Category,
    #[serde(rename = "modeName")]
    category_name: String,
    #[serde(rename = "lines")]
    line_codes: Vec<String>,
    #[serde(rename = "linesName")]
    line_names: String,
    #[serde(rename = "linesIds")]
    composite_ids: Vec<String>,
    hex: String,
}

impl TransitLine {
    /// Build an entity from already-translated parts. `hex` must carry its `#`.
    pub fn new(category: Category, lines: LineSet, hex: String) -> Self {
        let composite_ids = lines
            .codes
            .iter()
            .map(|code| composite_id(category, code))
            .collect();

        Self {
            category,
            category_name: category.display_name().to_string(),
            line_codes: lines.codes,
            line_names: lines.display,
            composite_ids,
            hex,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    pub fn line_codes(&self) -> &[String] {
        &self.line_codes
    }

    pub fn line_names(&self) -> &str {
        &self.line_names
    }

    pub fn composite_ids(&self) -> &[String] {
        &self.composite_ids
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Key used to order the collection: category id followed by line names.
    pub fn sort_key(&self) -> String {
        format!("{}{}", self.category.id(), self.line_names)
    }

    /// `(composite id, line code)` pairs in order.
    pub fn sub_lines(&self) -> impl Iterator<Item = (&str, &str)> {
        self.composite_ids
            .iter()
            .map(String::as_str)
            .zip(self.line_codes.iter().map(String::as_str))
    }
}

pub fn composite_id(category: Category, code: &str) -> String {
    format!("{}{}{}", category.id(), COMPOSITE_ID_SEPARATOR, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::lines::translate_lines;

    #[test]
    fn test_composite_ids_follow_codes() {
        let line = TransitLine::new(
            Category::Subway,
            translate_lines("N/Q/R", Category::Subway),
            "#FED82A".to_string(),
        );
        assert_eq!(line.composite_ids(), ["subway-n", "subway-q", "subway-r"]);
        assert_eq!(line.line_codes().len(), line.composite_ids().len());
        assert_eq!(line.sort_key(), "subwayN,Q,R");
    }

    #[test]
    fn test_json_field_names() {
        let line = TransitLine::new(
            Category::MetroNorth,
            translate_lines("Harlem Line", Category::MetroNorth),
            "#0039A6".to_string(),
        );
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["mode"], "metro-north");
        assert_eq!(value["modeName"], "Metro-North Railroad Lines");
        assert_eq!(value["lines"][0], "harlem");
        assert_eq!(value["linesName"], "Harlem Line");
        assert_eq!(value["linesIds"][0], "metro-north-harlem");
        assert_eq!(value["hex"], "#0039A6");
    }
}
