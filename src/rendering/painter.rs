// src/rendering/painter.rs
// Cairo painting for the table cells.

use super::palette::{self, Rgb};
use crate::layout::FBlockSeries;
use crate::model::{Category, CellGlyph};
use cairo::{Context, FontSlant, FontWeight};
use std::f64::consts::PI;

/// Edge length of one table cell.
pub const CELL_SIZE: f64 = 72.0;

const CORNER_RADIUS: f64 = 6.0;
const HOVER_SCALE: f64 = 1.05;

// ============================================================================
// HELPERS
// ============================================================================

fn rounded_rect(cr: &Context, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0);
    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 1.5 * PI);
    cr.close_path();
}

fn set_rgb(cr: &Context, (r, g, b): Rgb) {
    cr.set_source_rgb(r, g, b);
}

#[derive(Clone, Copy)]
enum Align {
    Center,
    Right,
}

/// Draws `text` with its baseline at `y`, aligned against `x`.
fn draw_text(
    cr: &Context,
    text: &str,
    x: f64,
    y: f64,
    size: f64,
    bold: bool,
    align: Align,
) -> Result<(), cairo::Error> {
    let weight = if bold { FontWeight::Bold } else { FontWeight::Normal };
    cr.select_font_face("Sans", FontSlant::Normal, weight);
    cr.set_font_size(size);

    let ext = cr.text_extents(text)?;
    let start = match align {
        Align::Center => x - ext.width() / 2.0 - ext.x_bearing(),
        Align::Right => x - ext.width() - ext.x_bearing(),
    };
    cr.move_to(start, y);
    cr.show_text(text)
}

/// Shrinks long names so they stay inside the cell.
fn fitted_size(cr: &Context, text: &str, size: f64, max_width: f64) -> Result<f64, cairo::Error> {
    cr.set_font_size(size);
    let ext = cr.text_extents(text)?;
    if ext.width() <= max_width || ext.width() <= 0.0 {
        Ok(size)
    } else {
        Ok(size * max_width / ext.width())
    }
}

// ============================================================================
// CELLS
// ============================================================================

pub fn draw_element_cell(
    cr: &Context,
    glyph: &CellGlyph,
    category: Category,
    hovered: bool,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let (rest, hover) = palette::category_fill(category);

    cr.save()?;
    if hovered {
        cr.translate(width / 2.0, height / 2.0);
        cr.scale(HOVER_SCALE, HOVER_SCALE);
        cr.translate(-width / 2.0, -height / 2.0);
    }

    rounded_rect(cr, 1.0, 1.0, width - 2.0, height - 2.0, CORNER_RADIUS);
    set_rgb(cr, if hovered { hover } else { rest });
    cr.fill_preserve()?;
    set_rgb(cr, palette::BORDER);
    cr.set_line_width(1.0);
    cr.stroke()?;

    set_rgb(cr, palette::TEXT);
    let cx = width / 2.0;

    draw_text(cr, &glyph.atomic_number, width - 6.0, height * 0.20, 10.0, false, Align::Right)?;
    draw_text(cr, &glyph.symbol, cx, height * 0.52, 20.0, true, Align::Center)?;

    cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
    let name_size = fitted_size(cr, &glyph.name, 9.0, width - 8.0)?;
    draw_text(cr, &glyph.name, cx, height * 0.72, name_size, false, Align::Center)?;
    draw_text(cr, &glyph.mass, cx, height * 0.88, 9.0, false, Align::Center)?;

    cr.restore()
}

pub fn draw_placeholder_cell(
    cr: &Context,
    series: FBlockSeries,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    cr.rectangle(0.5, 0.5, width - 1.0, height - 1.0);
    set_rgb(cr, palette::PLACEHOLDER_FILL);
    cr.fill_preserve()?;
    set_rgb(cr, palette::BORDER);
    cr.set_line_width(1.0);
    cr.stroke()?;

    set_rgb(cr, palette::PLACEHOLDER_TEXT);
    let cx = width / 2.0;
    draw_text(cr, series.span_label(), cx, height * 0.48, 11.0, false, Align::Center)?;
    draw_text(cr, series.marker(), cx, height * 0.70, 11.0, false, Align::Center)
}
