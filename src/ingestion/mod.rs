//! Ingestion Module
//!
//! Turns the published color sheet into the ordered `TransitLine`
//! collection:
//! - Source fetch (HTTP or fixed text)
//! - CSV parsing with banner skipping
//! - Manual patches, row mapping, id checks and ordering

pub mod assembler;
pub mod csv_reader;
pub mod fetcher;

pub use assembler::{build_lines, sort_lines, Assembler};
pub use csv_reader::parse_records;
pub use fetcher::{HttpFetcher, SourceFetcher, StaticFetcher};
