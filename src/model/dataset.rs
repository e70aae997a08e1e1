// src/model/dataset.rs

use super::element::ElementRecord;
use crate::layout::placement::{cell_rule, CellRule};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Embed the element table at compile time.
const EMBEDDED_ELEMENTS_JSON: &str = include_str!("../../data/elements.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not parse element data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate atomic number {0}")]
    DuplicateAtomicNumber(u32),
}

/// Why a single record was left out of the table.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordDefect {
    ZeroAtomicNumber,
    Group(u8),
    Period(u8),
    Mass(f64),
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDefect::ZeroAtomicNumber => write!(f, "atomic number must be positive"),
            RecordDefect::Group(g) => write!(f, "group {} is outside 1..=18", g),
            RecordDefect::Period(p) => write!(f, "period {} is outside 1..=9", p),
            RecordDefect::Mass(m) => write!(f, "atomic mass {} is not a positive number", m),
        }
    }
}

/// Authoring defects that do not stop the table from being drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrityIssue {
    /// The record cannot be placed anywhere and is skipped.
    InvalidRecord { symbol: String, defect: RecordDefect },
    /// Two main-grid records claim the same cell. The first one in
    /// dataset order is shown.
    DuplicatePosition {
        group: u8,
        period: u8,
        shown: u32,
        shadowed: u32,
    },
    /// A main-grid record sits on a cell that is never looked up.
    HiddenRecord {
        atomic_number: u32,
        group: u8,
        period: u8,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::InvalidRecord { symbol, defect } => {
                write!(f, "{} skipped: {}", symbol, defect)
            }
            IntegrityIssue::DuplicatePosition { group, period, shown, shadowed } => write!(
                f,
                "elements {} and {} share period {}, group {}; only {} is shown",
                shown, shadowed, period, group, shown
            ),
            IntegrityIssue::HiddenRecord { atomic_number, group, period } => write!(
                f,
                "element {} at period {}, group {} falls on a cell that is never filled",
                atomic_number, period, group
            ),
        }
    }
}

/// The loaded, immutable element table with its lookup indices.
#[derive(Debug)]
pub struct ElementSet {
    records: Vec<ElementRecord>,
    by_number: HashMap<u32, usize>,
    by_position: HashMap<(u8, u8), usize>,
    issues: Vec<IntegrityIssue>,
}

impl ElementSet {
    /// Load the table shipped with the application.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED_ELEMENTS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<ElementRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Builds the indices. Records that cannot be placed are skipped and
    /// reported through [`ElementSet::integrity_issues`].
    pub fn from_records(records: Vec<ElementRecord>) -> Result<Self, DatasetError> {
        let mut issues = Vec::new();
        let records: Vec<ElementRecord> = records
            .into_iter()
            .filter(|rec| match defect_of(rec) {
                Some(defect) => {
                    issues.push(IntegrityIssue::InvalidRecord {
                        symbol: rec.symbol.clone(),
                        defect,
                    });
                    false
                }
                None => true,
            })
            .collect();

        let mut by_number = HashMap::with_capacity(records.len());
        let mut by_position = HashMap::new();

        for (idx, rec) in records.iter().enumerate() {
            if by_number.insert(rec.atomic_number, idx).is_some() {
                return Err(DatasetError::DuplicateAtomicNumber(rec.atomic_number));
            }

            if !rec.in_main_grid() {
                continue;
            }

            if cell_rule(rec.group, rec.period) != CellRule::Lookup {
                issues.push(IntegrityIssue::HiddenRecord {
                    atomic_number: rec.atomic_number,
                    group: rec.group,
                    period: rec.period,
                });
            }

            let key = (rec.group, rec.period);
            match by_position.get(&key) {
                Some(&first) => {
                    let shown: &ElementRecord = &records[first];
                    issues.push(IntegrityIssue::DuplicatePosition {
                        group: rec.group,
                        period: rec.period,
                        shown: shown.atomic_number,
                        shadowed: rec.atomic_number,
                    });
                }
                None => {
                    by_position.insert(key, idx);
                }
            }
        }

        Ok(Self {
            records,
            by_number,
            by_position,
            issues,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementRecord> {
        self.records.iter()
    }

    pub fn get(&self, atomic_number: u32) -> Option<&ElementRecord> {
        self.by_number.get(&atomic_number).map(|&i| &self.records[i])
    }

    /// Main-grid record at (group, period), if any.
    pub fn at(&self, group: u8, period: u8) -> Option<&ElementRecord> {
        self.by_position.get(&(group, period)).map(|&i| &self.records[i])
    }

    /// All records tagged with `period`, ascending by atomic number.
    pub fn in_period(&self, period: u8) -> Vec<&ElementRecord> {
        let mut row: Vec<&ElementRecord> =
            self.records.iter().filter(|r| r.period == period).collect();
        row.sort_by_key(|r| r.atomic_number);
        row
    }

    pub fn integrity_issues(&self) -> &[IntegrityIssue] {
        &self.issues
    }
}

fn defect_of(rec: &ElementRecord) -> Option<RecordDefect> {
    if rec.atomic_number == 0 {
        Some(RecordDefect::ZeroAtomicNumber)
    } else if !(1..=18).contains(&rec.group) {
        Some(RecordDefect::Group(rec.group))
    } else if !(1..=9).contains(&rec.period) {
        Some(RecordDefect::Period(rec.period))
    } else if !rec.atomic_mass.is_finite() || rec.atomic_mass <= 0.0 {
        Some(RecordDefect::Mass(rec.atomic_mass))
    } else {
        None
    }
}
