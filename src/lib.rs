pub mod config;
pub mod error;
pub mod ingestion;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod styles;
pub mod transform;

pub use config::BuildConfig;
pub use error::{BuildError, Result};
pub use model::TransitLine;
pub use pipeline::{BuildReport, Pipeline};
