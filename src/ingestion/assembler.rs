//! Dataset Assembler - fetch, parse, patch, map and order the sheet

use crate::config::{BuildConfig, ColumnNames};
use crate::error::{BuildError, Result};
use crate::ingestion::csv_reader::parse_records;
use crate::ingestion::fetcher::SourceFetcher;
use crate::model::{RawRecord, TransitLine};
use crate::transform::mapper::map_record;
use crate::transform::patches::{apply_patches, Patch};
use lexical_sort::lexical_cmp;
use std::collections::HashSet;
use tracing::{info, warn};

pub struct Assembler {
    fetcher: Box<dyn SourceFetcher>,
    source_url: String,
    columns: ColumnNames,
    patches: Vec<Patch>,
}

impl Assembler {
    pub fn new(fetcher: Box<dyn SourceFetcher>, config: &BuildConfig) -> Self {
        Self {
            fetcher,
            source_url: config.source_url.clone(),
            columns: config.columns.clone(),
            patches: config.patches.clone(),
        }
    }

    /// Fetch the configured source and build the ordered line collection.
    ///
    /// Any fetch or parse failure aborts the whole assembly.
    pub async fn assemble(&self) -> Result<Vec<TransitLine>> {
        let raw = self.fetcher.fetch(&self.source_url).await?;
        self.assemble_from_text(&raw)
    }

    /// Everything after the fetch, on text already in hand.
    pub fn assemble_from_text(&self, raw: &str) -> Result<Vec<TransitLine>> {
        let mut records = parse_records(raw)?;
        info!("Parsed {} rows", records.len());

        apply_patches(&mut records, &self.patches);
        build_lines(&records, &self.columns)
    }
}

/// Map records to lines, check id uniqueness and sort.
pub fn build_lines(records: &[RawRecord], columns: &ColumnNames) -> Result<Vec<TransitLine>> {
    let lines: Vec<TransitLine> = records
        .iter()
        .filter_map(|record| map_record(record, columns))
        .collect();

    info!(
        "Mapped {} lines ({} rows skipped)",
        lines.len(),
        records.len() - lines.len()
    );

    let mut lines = ensure_unique_ids(lines)?;
    sort_lines(&mut lines);
    Ok(lines)
}

/// Stable, locale-style ordering on category id followed by line names.
pub fn sort_lines(lines: &mut [TransitLine]) {
    lines.sort_by(|a, b| lexical_cmp(&a.sort_key(), &b.sort_key()));
}

/// Keep composite ids unique across the collection.
///
/// A collision on an empty line code comes from degenerate descriptors; the
/// later line is dropped and the run continues. Any other collision is fatal.
fn ensure_unique_ids(lines: Vec<TransitLine>) -> Result<Vec<TransitLine>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(lines.len());

    for line in lines {
        let collision = line
            .sub_lines()
            .find(|(id, _)| seen.contains(*id))
            .map(|(id, code)| (id.to_string(), code.is_empty()));

        match collision {
            Some((id, true)) => {
                warn!(id = %id, line_names = line.line_names(), "Dropping degenerate line with duplicate id");
            }
            Some((id, false)) => return Err(BuildError::DuplicateCompositeId(id)),
            None => {
                seen.extend(line.composite_ids().iter().cloned());
                kept.push(line);
            }
        }
    }
    Ok(kept)
}
