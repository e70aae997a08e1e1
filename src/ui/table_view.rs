// src/ui/table_view.rs
use super::{element_cell, resize};
use crate::layout::{CellKind, FBlockSeries, TableLayout, TooltipMetrics};
use crate::model::{ElementSet, Language};
use crate::rendering::{self, CELL_SIZE};
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{Align, Box, DrawingArea, Grid, Label, Orientation, Widget};

const CELL_SPACING: i32 = 2;
const MARKER_WIDTH: i32 = 18;
/// Gap between the main grid and the f-block rows.
const SERIES_GAP: i32 = 32;

/// Grid column for a group; column 0 carries the `*` / `**` markers.
fn column_for(group: u8) -> i32 {
    group as i32
}

/// Grid row for a main-grid period or an f-block row.
fn row_for_period(period: u8) -> i32 {
    match period {
        1..=7 => period as i32 - 1,
        // row 7 is the spacer
        _ => period as i32,
    }
}

pub fn build(set: &ElementSet, language: Language, metrics: TooltipMetrics) -> Grid {
    let grid = Grid::new();
    grid.set_row_spacing(CELL_SPACING as u32);
    grid.set_column_spacing(CELL_SPACING as u32);
    grid.set_margin_top(16);
    grid.set_margin_bottom(16);
    grid.set_margin_start(16);
    grid.set_margin_end(16);
    grid.set_halign(Align::Center);

    let layout = TableLayout::arrange(set);
    log::debug!("Placed {} elements in the main grid.", layout.occupied_count());

    // 1. Main grid
    for row in layout.rows() {
        for cell in row {
            let widget: Widget = match cell.kind {
                CellKind::Occupied(rec) => element_cell::build(rec, language, metrics).upcast(),
                CellKind::Placeholder(series) => placeholder(series).upcast(),
                CellKind::Empty | CellKind::Blank => blank().upcast(),
            };
            grid.attach(&widget, column_for(cell.group), row_for_period(cell.period), 1, 1);
        }
    }

    // 2. Row markers for the periods the f-block is pulled out of
    for series in FBlockSeries::ALL {
        let marker = Label::new(Some(series.marker()));
        marker.set_size_request(MARKER_WIDTH, CELL_SIZE as i32);
        marker.add_css_class("dim-label");
        grid.attach(&marker, 0, row_for_period(series.main_period()), 1, 1);
    }

    // 3. Spacer, then lanthanides and actinides starting under group 3
    let spacer = Box::new(Orientation::Horizontal, 0);
    spacer.set_size_request(-1, SERIES_GAP);
    grid.attach(&spacer, 0, row_for_period(7) + 1, 1, 1);

    for series in FBlockSeries::ALL {
        let row = row_for_period(series.row_period());
        for (i, rec) in layout.series_row(series).iter().enumerate() {
            let cell = element_cell::build(rec, language, metrics);
            grid.attach(&cell, column_for(3) + i as i32, row, 1, 1);
        }
    }

    grid
}

/// Replaces whatever `holder` shows with a freshly arranged table.
pub fn populate(holder: &Box, state: &AppState) {
    let attached = resize::live_subscriptions();
    while let Some(child) = holder.first_child() {
        holder.remove(&child);
    }
    let released = attached.saturating_sub(resize::live_subscriptions());
    if released > 0 {
        log::debug!("Cleared table, released {} resize listeners.", released);
    }

    match &state.elements {
        Some(set) => {
            let grid = build(set, state.language(), state.config.tooltip);
            holder.append(&grid);
        }
        None => {
            let label = Label::new(Some(state.language().no_data()));
            label.set_margin_top(40);
            label.add_css_class("dim-label");
            holder.append(&label);
        }
    }
}

fn placeholder(series: FBlockSeries) -> DrawingArea {
    let area = DrawingArea::new();
    area.set_content_width(CELL_SIZE as i32);
    area.set_content_height(CELL_SIZE as i32);
    area.set_draw_func(move |_, cr, w, h| {
        if let Err(e) = rendering::draw_placeholder_cell(cr, series, w as f64, h as f64) {
            log::debug!("Drawing {} placeholder failed: {}", series.span_label(), e);
        }
    });
    area
}

fn blank() -> Box {
    let b = Box::new(Orientation::Horizontal, 0);
    b.set_size_request(CELL_SIZE as i32, CELL_SIZE as i32);
    b
}
