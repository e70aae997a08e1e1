pub mod painter;
pub mod palette;

// Re-export specific functions to keep the API clean for the rest of the app
pub use painter::{draw_element_cell, draw_placeholder_cell, CELL_SIZE};
