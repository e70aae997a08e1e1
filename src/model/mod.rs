//src/model/mod.rs
pub mod element;
pub mod dataset;
pub mod display;

// Re-exports for cleaner imports
pub use element::{Category, ElementRecord};
pub use dataset::{DatasetError, ElementSet, IntegrityIssue};
pub use display::{CellGlyph, DetailPanel, Language};
