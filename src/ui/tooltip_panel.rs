// src/ui/tooltip_panel.rs
use crate::model::display::{DetailField, DetailPanel};
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Align, Box, Grid, Label, Orientation, Separator};

/// Builds the widget tree shown inside an element's hover popover.
pub fn build(panel: &DetailPanel, width: f64) -> Box {
    let container = Box::new(Orientation::Vertical, 12);
    container.set_size_request(width.round() as i32, -1);
    container.set_margin_top(12);
    container.set_margin_bottom(12);
    container.set_margin_start(12);
    container.set_margin_end(12);

    // --- Header: "Iron (Fe)" ... "铁" ---
    let header = Box::new(Orientation::Horizontal, 10);
    let title = Label::new(None);
    title.set_markup(&format!(
        "<span size='large' weight='bold'>{}</span>",
        glib::markup_escape_text(&panel.title)
    ));
    title.set_halign(Align::Start);
    title.set_hexpand(true);

    let native = Label::new(None);
    native.set_markup(&format!(
        "<span size='large' foreground='#2563eb'>{}</span>",
        glib::markup_escape_text(&panel.chinese_name)
    ));
    native.set_halign(Align::End);

    header.append(&title);
    header.append(&native);
    container.append(&header);
    container.append(&Separator::new(Orientation::Horizontal));

    container.append(&field_grid(&panel.basics));

    let heading = Label::new(None);
    heading.set_markup(&format!("<b>{}</b>", glib::markup_escape_text(panel.properties_heading)));
    heading.set_halign(Align::Start);
    container.append(&heading);
    container.append(&Separator::new(Orientation::Horizontal));

    container.append(&field_grid(&panel.properties));

    container
}

fn field_label(field: &DetailField) -> Label {
    let label = Label::new(None);
    label.set_markup(&format!(
        "<b>{}</b>{}",
        glib::markup_escape_text(field.label),
        glib::markup_escape_text(&field.value)
    ));
    label.set_xalign(0.0);
    label.set_wrap(true);
    label
}

fn field_grid(fields: &[DetailField]) -> Grid {
    let grid = Grid::builder()
        .column_spacing(12)
        .row_spacing(6)
        .column_homogeneous(true)
        .build();

    for (field, (col, row, span)) in fields.iter().zip(grid_slots(fields)) {
        grid.attach(&field_label(field), col, row, span, 1);
    }
    grid
}

/// (column, row, column span) for each field in a two-column layout.
/// Wide fields always start a fresh row and take both columns.
fn grid_slots(fields: &[DetailField]) -> Vec<(i32, i32, i32)> {
    let mut slots = Vec::with_capacity(fields.len());
    let (mut col, mut row) = (0, 0);

    for field in fields {
        if field.wide {
            if col != 0 {
                row += 1;
                col = 0;
            }
            slots.push((0, row, 2));
            row += 1;
        } else {
            slots.push((col, row, 1));
            col += 1;
            if col == 2 {
                col = 0;
                row += 1;
            }
        }
    }
    slots
}
