//! Manual corrections applied to the upstream sheet before mapping.
//!
//! These cover gaps in the published data that are expected to be fixed
//! upstream eventually. Keep them as data so removing one is a config edit.

use crate::model::RawRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Patch {
    /// Replace `column` with `to` on every record where it equals `from`.
    Rewrite {
        column: String,
        from: String,
        to: String,
    },
    /// Add a record that upstream does not publish yet.
    Append { record: RawRecord },
}

/// Patches applied on every run unless the config replaces them.
pub fn default_patches() -> Vec<Patch> {
    vec![
        // The W runs with N/Q/R but the sheet hasn't listed it yet
        Patch::Rewrite {
            column: "Line/Branch".to_string(),
            from: "N/Q/R".to_string(),
            to: "N/Q/R/W".to_string(),
        },
        // T (Second Avenue) isn't in the sheet; the color is unofficial
        Patch::Append {
            record: [
                ("MTA Mode", "NYCT Subway"),
                ("Line/Branch", "T"),
                ("RGB Hex", "1E9DBF"),
                ("Pantone CVC", ""),
                ("CMYK", ""),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        },
    ]
}

/// Apply `patches` in order to `records`.
pub fn apply_patches(records: &mut Vec<RawRecord>, patches: &[Patch]) {
    for patch in patches {
        match patch {
            Patch::Rewrite { column, from, to } => {
                let mut rewritten = 0;
                for record in records.iter_mut() {
                    if let Some(value) = record.get_mut(column) {
                        if value == from {
                            *value = to.clone();
                            rewritten += 1;
                        }
                    }
                }
                debug!(column = %column, from = %from, to = %to, rewritten, "Applied rewrite patch");
            }
            Patch::Append { record } => {
                records.push(record.clone());
                debug!("Appended synthetic record");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mode: &str, line: &str, hex: &str) -> RawRecord {
        [("MTA Mode", mode), ("Line/Branch", line), ("RGB Hex", hex)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_patches_extend_nqr_and_add_t() {
        let mut records = vec![record("NYCT Subway", "N/Q/R", "FED82A")];
        apply_patches(&mut records, &default_patches());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["Line/Branch"], "N/Q/R/W");
        assert_eq!(records[1]["Line/Branch"], "T");
        assert_eq!(records[1]["RGB Hex"], "1E9DBF");
    }

    #[test]
    fn test_rewrite_requires_exact_match() {
        let mut records = vec![record("NYCT Subway", "N/Q", "FED82A")];
        let patches = vec![Patch::Rewrite {
            column: "Line/Branch".to_string(),
            from: "N/Q/R".to_string(),
            to: "N/Q/R/W".to_string(),
        }];
        apply_patches(&mut records, &patches);
        assert_eq!(records[0]["Line/Branch"], "N/Q");
    }

    #[test]
    fn test_patches_deserialize_from_json() {
        let json = r#"[
            {"kind": "rewrite", "column": "Line/Branch", "from": "A", "to": "A/H"},
            {"kind": "append", "record": {"MTA Mode": "NYCT Subway", "Line/Branch": "X", "RGB Hex": "123456"}}
        ]"#;
        let patches: Vec<Patch> = serde_json::from_str(json).unwrap();
        assert_eq!(patches.len(), 2);
        assert!(matches!(&patches[0], Patch::Rewrite { to, .. } if to == "A/H"));
    }
}
