// src/layout/tooltip.rs
//
// Picks where a cell's tooltip attaches so it stays inside the window.

use serde::{Deserialize, Serialize};

/// Size of the tooltip card and the gap it keeps from the window edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipMetrics {
    pub width: f64,
    /// Approximate; only used to decide whether the card fits above.
    pub height: f64,
    pub edge_buffer: f64,
}

impl Default for TooltipMetrics {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 200.0,
            edge_buffer: 10.0,
        }
    }
}

/// On-screen bounding box of a cell, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CellGeometry {
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAnchor {
    /// Card centred on the cell.
    #[default]
    Center,
    /// Card's left edge on the cell's left edge.
    Left,
    /// Card's right edge on the cell's right edge.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    Above,
    #[default]
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipAnchor {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

/// Lower rows (periods 6 and 7, and the f-block rows) open upwards.
pub fn prefers_above(period: u8) -> bool {
    period > 5
}

impl TooltipMetrics {
    pub fn horizontal_anchor(&self, cell: &CellGeometry, viewport_width: f64) -> HorizontalAnchor {
        let center = cell.center_x();
        let half = self.width / 2.0;

        if center - half < self.edge_buffer {
            HorizontalAnchor::Left
        } else if center + half > viewport_width - self.edge_buffer {
            HorizontalAnchor::Right
        } else {
            HorizontalAnchor::Center
        }
    }

    pub fn vertical_anchor(&self, period: u8, cell_top: f64) -> VerticalAnchor {
        if prefers_above(period) && cell_top - self.height >= 0.0 {
            VerticalAnchor::Above
        } else {
            VerticalAnchor::Below
        }
    }

    pub fn anchor(&self, period: u8, cell: &CellGeometry, viewport_width: f64) -> TooltipAnchor {
        TooltipAnchor {
            horizontal: self.horizontal_anchor(cell, viewport_width),
            vertical: self.vertical_anchor(period, cell.top),
        }
    }

    /// X coordinate, relative to the cell's left edge, that a centred
    /// popover must point at to realise `anchor`.
    pub fn attach_x(&self, anchor: HorizontalAnchor, cell_width: f64) -> f64 {
        match anchor {
            HorizontalAnchor::Center => cell_width / 2.0,
            HorizontalAnchor::Left => self.width / 2.0,
            HorizontalAnchor::Right => cell_width - self.width / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(left: f64, top: f64) -> CellGeometry {
        CellGeometry {
            left,
            top,
            width: 72.0,
            height: 72.0,
        }
    }

    #[test]
    fn test_left_edge_flips_to_left() {
        // centre 36, 36 - 160 = -124 < 10
        let m = TooltipMetrics::default();
        assert_eq!(m.horizontal_anchor(&cell(0.0, 0.0), 400.0), HorizontalAnchor::Left);
    }

    #[test]
    fn test_right_edge_flips_to_right() {
        let m = TooltipMetrics::default();
        // centre 1364, 1364 + 160 = 1524 > 1430
        assert_eq!(m.horizontal_anchor(&cell(1328.0, 0.0), 1440.0), HorizontalAnchor::Right);
    }

    #[test]
    fn test_middle_stays_centered() {
        let m = TooltipMetrics::default();
        assert_eq!(m.horizontal_anchor(&cell(600.0, 0.0), 1440.0), HorizontalAnchor::Center);
    }

    #[test]
    fn test_horizontal_boundaries() {
        let m = TooltipMetrics::default();
        // centre exactly at 170: 170 - 160 = 10, not < 10
        assert_eq!(m.horizontal_anchor(&cell(134.0, 0.0), 1000.0), HorizontalAnchor::Center);
        assert_eq!(m.horizontal_anchor(&cell(133.0, 0.0), 1000.0), HorizontalAnchor::Left);
        // centre at 830: 830 + 160 = 990 == 1000 - 10, not >
        assert_eq!(m.horizontal_anchor(&cell(794.0, 0.0), 1000.0), HorizontalAnchor::Center);
        assert_eq!(m.horizontal_anchor(&cell(795.0, 0.0), 1000.0), HorizontalAnchor::Right);
    }

    #[test]
    fn test_narrow_viewport_prefers_left() {
        // Neither side fits; the left check wins.
        let m = TooltipMetrics::default();
        assert_eq!(m.horizontal_anchor(&cell(100.0, 0.0), 200.0), HorizontalAnchor::Left);
    }

    #[test]
    fn test_upper_rows_open_below() {
        let m = TooltipMetrics::default();
        for period in 1..=5 {
            assert_eq!(m.vertical_anchor(period, 800.0), VerticalAnchor::Below);
        }
    }

    #[test]
    fn test_lower_rows_open_above_when_room() {
        let m = TooltipMetrics::default();
        for period in [6, 7, 8, 9] {
            assert_eq!(m.vertical_anchor(period, 500.0), VerticalAnchor::Above);
        }
        // exactly enough room
        assert_eq!(m.vertical_anchor(6, 200.0), VerticalAnchor::Above);
    }

    #[test]
    fn test_lower_rows_fall_back_below_near_top() {
        // 50 - 200 = -150 < 0
        let m = TooltipMetrics::default();
        assert_eq!(m.vertical_anchor(6, 50.0), VerticalAnchor::Below);
        assert_eq!(m.vertical_anchor(9, 199.0), VerticalAnchor::Below);
    }

    #[test]
    fn test_combined_anchor() {
        let m = TooltipMetrics::default();
        let a = m.anchor(7, &cell(0.0, 600.0), 1440.0);
        assert_eq!(
            a,
            TooltipAnchor {
                horizontal: HorizontalAnchor::Left,
                vertical: VerticalAnchor::Above
            }
        );
    }

    #[test]
    fn test_attach_x() {
        let m = TooltipMetrics::default();
        assert_eq!(m.attach_x(HorizontalAnchor::Center, 72.0), 36.0);
        assert_eq!(m.attach_x(HorizontalAnchor::Left, 72.0), 160.0);
        assert_eq!(m.attach_x(HorizontalAnchor::Right, 72.0), -88.0);
    }

    #[test]
    fn test_custom_metrics() {
        let m = TooltipMetrics {
            width: 100.0,
            height: 50.0,
            edge_buffer: 0.0,
        };
        assert_eq!(m.horizontal_anchor(&cell(100.0, 0.0), 400.0), HorizontalAnchor::Center);
        assert_eq!(m.vertical_anchor(6, 60.0), VerticalAnchor::Above);
    }
}
