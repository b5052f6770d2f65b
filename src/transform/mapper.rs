//! Row-to-entity mapping.

use crate::config::ColumnNames;
use crate::model::{RawRecord, TransitLine};
use crate::transform::category::Category;
use crate::transform::hex::css_hex;
use crate::transform::lines::translate_lines;
use tracing::{debug, warn};

/// Map one sheet row to a line, or `None` when the row isn't a styled mode.
pub fn map_record(record: &RawRecord, columns: &ColumnNames) -> Option<TransitLine> {
    let label = record.get(&columns.category).map(String::as_str).unwrap_or("");
    if label.is_empty() {
        return None;
    }

    let Some(category) = Category::from_label(label) else {
        debug!(label, "Skipping row with unrecognized mode");
        return None;
    };

    let descriptor = field(record, &columns.line);
    let lines = translate_lines(descriptor, category);
    if lines.codes.iter().any(String::is_empty) {
        warn!(descriptor, category = %category, "Line descriptor produced an empty code");
    }

    Some(TransitLine::new(category, lines, css_hex(field(record, &columns.hex))))
}

fn field<'a>(record: &'a RawRecord, column: &str) -> &'a str {
    record.get(column).map(String::as_str).unwrap_or("")
}
