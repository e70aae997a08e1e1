// src/layout/mod.rs
pub mod placement;
pub mod tooltip;

pub use placement::{CellKind, FBlockSeries, TableLayout};
pub use tooltip::{CellGeometry, HorizontalAnchor, TooltipAnchor, TooltipMetrics, VerticalAnchor};
