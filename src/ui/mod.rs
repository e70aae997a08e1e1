pub mod element_cell;
pub mod resize;
pub mod table_view;
pub mod tooltip_panel;

// Re-exports
pub use table_view::populate as populate_table;
