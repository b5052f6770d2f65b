//! Row-level translation from the upstream sheet to `TransitLine`s.

pub mod category;
pub mod hex;
pub mod lines;
pub mod mapper;
pub mod patches;

pub use category::{translate_category, Category};
pub use hex::{css_hex, normalize_hex};
pub use lines::{translate_lines, LineSet};
pub use mapper::map_record;
pub use patches::{apply_patches, default_patches, Patch};
