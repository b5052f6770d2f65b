//! Stylesheet generation and compilation.

pub mod compiler;
pub mod dialect;
pub mod generator;

pub use compiler::{NestedStyleCompiler, StyleCompiler};
pub use dialect::Dialect;
pub use generator::{render, StyleOptions};
