// src/layout/placement.rs
//
// Maps the element set onto the 7x18 main grid plus the two f-block rows.

use crate::model::{ElementRecord, ElementSet};

pub const GROUPS: u8 = 18;
pub const PERIODS: u8 = 7;

/// The two series drawn detached below the main grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FBlockSeries {
    Lanthanide,
    Actinide,
}

impl FBlockSeries {
    pub const ALL: [FBlockSeries; 2] = [FBlockSeries::Lanthanide, FBlockSeries::Actinide];

    /// Main-grid period whose group 3 cell stands in for the series.
    pub fn main_period(self) -> u8 {
        match self {
            FBlockSeries::Lanthanide => 6,
            FBlockSeries::Actinide => 7,
        }
    }

    /// Out-of-band period value carried by the series' records.
    pub fn row_period(self) -> u8 {
        match self {
            FBlockSeries::Lanthanide => 8,
            FBlockSeries::Actinide => 9,
        }
    }

    pub fn span_label(self) -> &'static str {
        match self {
            FBlockSeries::Lanthanide => "57-71",
            FBlockSeries::Actinide => "89-103",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            FBlockSeries::Lanthanide => "*",
            FBlockSeries::Actinide => "**",
        }
    }

    pub fn for_main_period(period: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.main_period() == period)
    }
}

/// What the fixed shape of the table says about a cell, before any data
/// is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRule {
    /// Never holds an element (e.g. period 1, groups 2..=17).
    Empty,
    /// Summary cell for an f-block series.
    Placeholder(FBlockSeries),
    /// Filled from the dataset when a record matches.
    Lookup,
}

pub fn cell_rule(group: u8, period: u8) -> CellRule {
    match (period, group) {
        (1, 2..=17) => CellRule::Empty,
        (2 | 3, 3..=12) => CellRule::Empty,
        (6 | 7, 3) => match FBlockSeries::for_main_period(period) {
            Some(series) => CellRule::Placeholder(series),
            None => CellRule::Empty,
        },
        _ => CellRule::Lookup,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellKind<'a> {
    Occupied(&'a ElementRecord),
    /// Structural gap in the table's shape.
    Empty,
    Placeholder(FBlockSeries),
    /// Looked up, nothing there. Drawn as a blank cell.
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell<'a> {
    pub group: u8,
    pub period: u8,
    pub kind: CellKind<'a>,
}

/// One full placement pass over an element set.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout<'a> {
    cells: Vec<GridCell<'a>>,
    lanthanides: Vec<&'a ElementRecord>,
    actinides: Vec<&'a ElementRecord>,
}

impl<'a> TableLayout<'a> {
    pub fn arrange(set: &'a ElementSet) -> Self {
        let mut cells = Vec::with_capacity(GROUPS as usize * PERIODS as usize);

        for period in 1..=PERIODS {
            for group in 1..=GROUPS {
                let kind = match cell_rule(group, period) {
                    CellRule::Empty => CellKind::Empty,
                    CellRule::Placeholder(series) => CellKind::Placeholder(series),
                    CellRule::Lookup => match set.at(group, period) {
                        Some(rec) => CellKind::Occupied(rec),
                        None => CellKind::Blank,
                    },
                };
                cells.push(GridCell { group, period, kind });
            }
        }

        Self {
            cells,
            lanthanides: set.in_period(FBlockSeries::Lanthanide.row_period()),
            actinides: set.in_period(FBlockSeries::Actinide.row_period()),
        }
    }

    pub fn cell(&self, group: u8, period: u8) -> Option<&GridCell<'a>> {
        if !(1..=GROUPS).contains(&group) || !(1..=PERIODS).contains(&period) {
            return None;
        }
        let idx = (period - 1) as usize * GROUPS as usize + (group - 1) as usize;
        self.cells.get(idx)
    }

    /// Main-grid rows, period 1 first, each ordered by group.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell<'a>]> {
        self.cells.chunks(GROUPS as usize)
    }

    pub fn series_row(&self, series: FBlockSeries) -> &[&'a ElementRecord] {
        match series {
            FBlockSeries::Lanthanide => &self.lanthanides,
            FBlockSeries::Actinide => &self.actinides,
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c.kind, CellKind::Occupied(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::tests::record;

    fn embedded() -> ElementSet {
        ElementSet::embedded().unwrap()
    }

    #[test]
    fn test_period_one_gap() {
        for group in 2..=17 {
            assert_eq!(cell_rule(group, 1), CellRule::Empty);
        }
        assert_eq!(cell_rule(1, 1), CellRule::Lookup);
        assert_eq!(cell_rule(18, 1), CellRule::Lookup);
    }

    #[test]
    fn test_periods_two_and_three_gap() {
        for period in [2, 3] {
            for group in 1..=18 {
                let expected = if (3..=12).contains(&group) {
                    CellRule::Empty
                } else {
                    CellRule::Lookup
                };
                assert_eq!(cell_rule(group, period), expected, "p{} g{}", period, group);
            }
        }
    }

    #[test]
    fn test_periods_four_and_five_are_full() {
        for period in [4, 5] {
            for group in 1..=18 {
                assert_eq!(cell_rule(group, period), CellRule::Lookup);
            }
        }
    }

    #[test]
    fn test_f_block_placeholders() {
        assert_eq!(cell_rule(3, 6), CellRule::Placeholder(FBlockSeries::Lanthanide));
        assert_eq!(cell_rule(3, 7), CellRule::Placeholder(FBlockSeries::Actinide));
        assert_eq!(FBlockSeries::Lanthanide.span_label(), "57-71");
        assert_eq!(FBlockSeries::Actinide.span_label(), "89-103");
        assert_eq!(FBlockSeries::Lanthanide.marker(), "*");
        assert_eq!(FBlockSeries::Actinide.marker(), "**");
    }

    #[test]
    fn test_structural_gap_ignores_data() {
        // Even a record authored at period 1, group 10 never shows up there.
        let set = ElementSet::from_records(vec![record(99, "Xx", 10, 1)]).unwrap();
        let layout = TableLayout::arrange(&set);
        assert_eq!(layout.cell(10, 1).unwrap().kind, CellKind::Empty);
    }

    #[test]
    fn test_placeholder_ignores_data() {
        let set = ElementSet::from_records(vec![record(57, "La", 3, 6)]).unwrap();
        let layout = TableLayout::arrange(&set);
        assert_eq!(
            layout.cell(3, 6).unwrap().kind,
            CellKind::Placeholder(FBlockSeries::Lanthanide)
        );
    }

    #[test]
    fn test_missing_record_is_blank() {
        let set = ElementSet::from_records(vec![record(1, "H", 1, 1)]).unwrap();
        let layout = TableLayout::arrange(&set);
        assert_eq!(layout.cell(18, 1).unwrap().kind, CellKind::Blank);
        assert_eq!(layout.cell(10, 6).unwrap().kind, CellKind::Blank);
        assert!(matches!(layout.cell(1, 1).unwrap().kind, CellKind::Occupied(_)));
    }

    #[test]
    fn test_classification_is_total() {
        let set = embedded();
        let layout = TableLayout::arrange(&set);
        assert_eq!(layout.rows().count(), PERIODS as usize);
        for (p, row) in layout.rows().enumerate() {
            assert_eq!(row.len(), GROUPS as usize);
            for (g, cell) in row.iter().enumerate() {
                assert_eq!(cell.period as usize, p + 1);
                assert_eq!(cell.group as usize, g + 1);
            }
        }
        assert!(layout.cell(0, 1).is_none());
        assert!(layout.cell(1, 8).is_none());
    }

    #[test]
    fn test_every_main_grid_record_is_placed_once() {
        let set = embedded();
        let layout = TableLayout::arrange(&set);

        for rec in set.iter().filter(|r| r.in_main_grid()) {
            let hits: Vec<&GridCell> = layout
                .rows()
                .flatten()
                .filter(|c| matches!(c.kind, CellKind::Occupied(r) if r.atomic_number == rec.atomic_number))
                .collect();
            assert_eq!(hits.len(), 1, "{} placed {} times", rec.symbol, hits.len());
            assert_eq!((hits[0].group, hits[0].period), (rec.group, rec.period));
        }
        assert_eq!(layout.occupied_count(), 118 - 30);
    }

    #[test]
    fn test_series_rows_are_sorted_and_exact() {
        let set = embedded();
        let layout = TableLayout::arrange(&set);

        for series in FBlockSeries::ALL {
            let row = layout.series_row(series);
            let expected = set.iter().filter(|r| r.period == series.row_period()).count();
            assert_eq!(row.len(), expected);
            assert!(row.iter().all(|r| r.period == series.row_period()));
            assert!(row.windows(2).all(|w| w[0].atomic_number < w[1].atomic_number));
        }

        let la = layout.series_row(FBlockSeries::Lanthanide);
        assert_eq!(la.first().map(|r| r.symbol.as_str()), Some("La"));
        assert_eq!(la.last().map(|r| r.symbol.as_str()), Some("Lu"));
        let ac = layout.series_row(FBlockSeries::Actinide);
        assert_eq!(ac.first().map(|r| r.symbol.as_str()), Some("Ac"));
        assert_eq!(ac.last().map(|r| r.symbol.as_str()), Some("Lr"));
    }

    #[test]
    fn test_series_rows_follow_atomic_number_not_dataset_order() {
        let recs = vec![
            record(92, "U", 3, 9),
            record(89, "Ac", 3, 9),
            record(90, "Th", 3, 9),
        ];
        let set = ElementSet::from_records(recs).unwrap();
        let layout = TableLayout::arrange(&set);
        let order: Vec<&str> = layout
            .series_row(FBlockSeries::Actinide)
            .iter()
            .map(|r| r.symbol.as_str())
            .collect();
        assert_eq!(order, vec!["Ac", "Th", "U"]);
        assert!(layout.series_row(FBlockSeries::Lanthanide).is_empty());
    }

    #[test]
    fn test_arrangement_is_deterministic() {
        let set = embedded();
        let first = TableLayout::arrange(&set);
        let second = TableLayout::arrange(&set);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sixth_period_transition_metals_are_placed() {
        let set = embedded();
        let layout = TableLayout::arrange(&set);
        match layout.cell(4, 6).unwrap().kind {
            CellKind::Occupied(rec) => assert_eq!(rec.symbol, "Hf"),
            other => panic!("expected Hf, got {:?}", other),
        }
    }
}
