// src/ui/element_cell.rs
//
// One element on the table: the painted cell face plus its hover popover.

use super::resize::ResizeSubscription;
use super::tooltip_panel;
use crate::layout::{CellGeometry, HorizontalAnchor, TooltipAnchor, TooltipMetrics, VerticalAnchor};
use crate::model::{CellGlyph, DetailPanel, ElementRecord, Language};
use crate::rendering::{self, CELL_SIZE};
use gtk4::prelude::*;
use gtk4::{glib, DrawingArea, EventControllerMotion, Popover, PositionType};
use std::cell::RefCell;
use std::rc::Rc;

/// Per-cell UI state. Owned by the cell, rebuilt from measurements.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellState {
    pub hovered: bool,
    pub geometry: Option<CellGeometry>,
    pub anchor: TooltipAnchor,
}

impl CellState {
    /// Stores a fresh measurement. Returns `false` when neither the
    /// geometry nor the anchor moved, so the popover can be left alone.
    pub fn update_placement(&mut self, geometry: CellGeometry, anchor: TooltipAnchor) -> bool {
        if self.geometry == Some(geometry) && self.anchor == anchor {
            return false;
        }
        self.geometry = Some(geometry);
        self.anchor = anchor;
        true
    }
}

struct CellContext {
    period: u8,
    metrics: TooltipMetrics,
    state: RefCell<CellState>,
    subscription: RefCell<Option<ResizeSubscription>>,
}

pub fn build(record: &ElementRecord, language: Language, metrics: TooltipMetrics) -> DrawingArea {
    let area = DrawingArea::new();
    area.set_content_width(CELL_SIZE as i32);
    area.set_content_height(CELL_SIZE as i32);

    let ctx = Rc::new(CellContext {
        period: record.period,
        metrics,
        state: RefCell::new(CellState::default()),
        subscription: RefCell::new(None),
    });

    // 1. Cell face
    let glyph = CellGlyph::of(record);
    let category = record.category;
    let c = ctx.clone();
    area.set_draw_func(move |_, cr, w, h| {
        let hovered = c.state.borrow().hovered;
        if let Err(e) = rendering::draw_element_cell(cr, &glyph, category, hovered, w as f64, h as f64) {
            log::debug!("Drawing {} failed: {}", glyph.symbol, e);
        }
    });

    // 2. Tooltip
    let panel = DetailPanel::build(record, language);
    let popover = Popover::new();
    popover.set_child(Some(&tooltip_panel::build(&panel, metrics.width)));
    popover.set_autohide(false);
    popover.set_can_target(false);
    popover.set_parent(&area);

    // 3. Hover
    let motion = EventControllerMotion::new();

    let c = ctx.clone();
    let pop = popover.downgrade();
    let da = area.downgrade();
    motion.connect_enter(move |_, _, _| {
        c.state.borrow_mut().hovered = true;
        if let Some(da) = da.upgrade() {
            da.queue_draw();
        }
        if let Some(p) = pop.upgrade() {
            p.popup();
        }
    });

    let c = ctx.clone();
    let pop = popover.downgrade();
    let da = area.downgrade();
    motion.connect_leave(move |_| {
        c.state.borrow_mut().hovered = false;
        if let Some(da) = da.upgrade() {
            da.queue_draw();
        }
        if let Some(p) = pop.upgrade() {
            p.popdown();
        }
    });
    area.add_controller(motion);

    // 4. Mount: measure now, then again on every window resize
    let c = ctx.clone();
    let pop = popover.downgrade();
    area.connect_map(move |da| {
        if let Some(p) = pop.upgrade() {
            refresh_anchor(da, &p, &c);
        }

        let Some(window) = da.root().and_then(|r| r.downcast::<gtk4::Window>().ok()) else {
            return;
        };

        let da_weak = da.downgrade();
        let pop_weak = pop.clone();
        let ctx_resize = c.clone();
        let sub = ResizeSubscription::attach(&window, move || {
            let da_weak = da_weak.clone();
            let pop_weak = pop_weak.clone();
            let ctx_idle = ctx_resize.clone();
            // Run after the resize has been allocated.
            glib::idle_add_local_once(move || {
                if let (Some(da), Some(p)) = (da_weak.upgrade(), pop_weak.upgrade()) {
                    refresh_anchor(&da, &p, &ctx_idle);
                }
            });
        });
        c.subscription.replace(Some(sub));
    });

    // 5. Unmount: release the resize listener
    let c = ctx.clone();
    let pop = popover.downgrade();
    area.connect_unmap(move |_| {
        c.subscription.replace(None);
        c.state.borrow_mut().hovered = false;
        if let Some(p) = pop.upgrade() {
            p.popdown();
        }
    });

    let pop = popover.downgrade();
    area.connect_destroy(move |_| {
        if let Some(p) = pop.upgrade() {
            p.unparent();
        }
    });

    area
}

/// Bounding box of `area` in window coordinates, plus the window width.
fn measure(area: &DrawingArea) -> Option<(CellGeometry, f64)> {
    let root = area.root()?;
    let bounds = area.compute_bounds(&root)?;
    let geometry = CellGeometry {
        left: bounds.x() as f64,
        top: bounds.y() as f64,
        width: bounds.width() as f64,
        height: bounds.height() as f64,
    };
    Some((geometry, root.width() as f64))
}

fn refresh_anchor(area: &DrawingArea, popover: &Popover, ctx: &CellContext) {
    let Some((geometry, viewport_width)) = measure(area) else {
        return;
    };

    let anchor = ctx.metrics.anchor(ctx.period, &geometry, viewport_width);
    if !ctx.state.borrow_mut().update_placement(geometry, anchor) {
        return;
    }
    apply_anchor(popover, anchor, &ctx.metrics, &geometry);
}

fn apply_anchor(popover: &Popover, anchor: TooltipAnchor, metrics: &TooltipMetrics, cell: &CellGeometry) {
    popover.set_position(match anchor.vertical {
        VerticalAnchor::Above => PositionType::Top,
        VerticalAnchor::Below => PositionType::Bottom,
    });
    popover.set_has_arrow(anchor.horizontal == HorizontalAnchor::Center);

    let x = metrics.attach_x(anchor.horizontal, cell.width).round() as i32;
    let target = gdk4::Rectangle::new(x, 0, 1, cell.height.round() as i32);
    popover.set_pointing_to(Some(&target));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(left: f64) -> CellGeometry {
        CellGeometry {
            left,
            top: 300.0,
            width: 72.0,
            height: 72.0,
        }
    }

    #[test]
    fn test_first_measurement_is_applied() {
        let mut st = CellState::default();
        assert!(st.update_placement(geometry(0.0), TooltipAnchor::default()));
        assert_eq!(st.geometry, Some(geometry(0.0)));
    }

    #[test]
    fn test_unchanged_measurement_is_skipped() {
        let mut st = CellState::default();
        let anchor = TooltipAnchor {
            horizontal: HorizontalAnchor::Left,
            vertical: VerticalAnchor::Above,
        };
        assert!(st.update_placement(geometry(0.0), anchor));
        assert!(!st.update_placement(geometry(0.0), anchor));

        assert!(st.update_placement(geometry(400.0), anchor));
        assert!(st.update_placement(geometry(400.0), TooltipAnchor::default()));
        assert_eq!(st.anchor, TooltipAnchor::default());
    }
}
