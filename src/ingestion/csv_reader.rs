//! CSV parsing of the upstream sheet into raw records.

use crate::error::{BuildError, Result};
use crate::model::RawRecord;
use csv::ReaderBuilder;

/// Number of banner lines above the header row in the published sheet.
pub const BANNER_LINES: usize = 2;

/// Drop the banner lines, then parse the rest with the first row as headers.
///
/// Header names and cell values are kept verbatim so that column lookups
/// stay exact. Rows shorter than the header get empty strings.
pub fn parse_records(raw: &str) -> Result<Vec<RawRecord>> {
    let body: String = raw
        .split('\n')
        .skip(BANNER_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| BuildError::Parse(format!("Failed to read CSV headers: {}", e)))?
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(BuildError::Parse("Missing header row".to_string()));
    }

    let mut out = Vec::new();
    for result in rdr.records() {
        let record =
            result.map_err(|e| BuildError::Parse(format!("Failed to read CSV record: {}", e)))?;

        let row: RawRecord = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.clone(), record.get(idx).unwrap_or("").to_string()))
            .collect();
        out.push(row);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "MTA Colors\r\nUpdated 2016\r\nMTA Mode,Line/Branch,RGB Hex\r\nNYCT Subway,N/Q/R,FED82A\r\nLIRR,Port Washington Branch,0A4DA7\r\n";

    #[test]
    fn test_banner_lines_are_skipped() {
        let records = parse_records(SHEET).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["MTA Mode"], "NYCT Subway");
        assert_eq!(records[1]["Line/Branch"], "Port Washington Branch");
        assert_eq!(records[1]["RGB Hex"], "0A4DA7");
    }

    #[test]
    fn test_quoted_cells_and_short_rows() {
        let sheet = "x\ny\nMTA Mode,Line/Branch,RGB Hex\n\"Metro-North\",\"Harlem, Upper\"\n";
        let records = parse_records(sheet).unwrap();
        assert_eq!(records[0]["Line/Branch"], "Harlem, Upper");
        assert_eq!(records[0]["RGB Hex"], "");
    }

    #[test]
    fn test_last_row_without_newline_is_kept() {
        let sheet = "x\ny\nMTA Mode,Line/Branch,RGB Hex\nLIRR,Babylon Branch,00985F";
        assert_eq!(parse_records(sheet).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        assert!(matches!(parse_records("only\nbanner\n"), Err(BuildError::Parse(_))));
    }
}
