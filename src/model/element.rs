// src/model/element.rs

use serde::Deserialize;

/// The ten element families used to colour and label cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl Category {
    #[cfg(test)]
    pub const ALL: [Category; 10] = [
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::TransitionMetal,
        Category::PostTransitionMetal,
        Category::Metalloid,
        Category::Nonmetal,
        Category::Halogen,
        Category::NobleGas,
        Category::Lanthanide,
        Category::Actinide,
    ];

    /// Kebab-case tag as it appears in the dataset.
    #[cfg(test)]
    pub fn tag(self) -> &'static str {
        match self {
            Category::AlkaliMetal => "alkali-metal",
            Category::AlkalineEarthMetal => "alkaline-earth-metal",
            Category::TransitionMetal => "transition-metal",
            Category::PostTransitionMetal => "post-transition-metal",
            Category::Metalloid => "metalloid",
            Category::Nonmetal => "nonmetal",
            Category::Halogen => "halogen",
            Category::NobleGas => "noble-gas",
            Category::Lanthanide => "lanthanide",
            Category::Actinide => "actinide",
        }
    }
}

/// One element as authored in `data/elements.json`.
///
/// `period` 8 and 9 are not real periods: they place the record in the
/// lanthanide and actinide rows drawn under the main table.
/// Optional properties are `None` when unknown, never zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub chinese_name: String,
    pub atomic_mass: f64,
    pub category: Category,
    pub group: u8,
    pub period: u8,

    #[serde(default)]
    pub electron_configuration: Option<String>,
    #[serde(default)]
    pub electronegativity: Option<f64>,
    #[serde(default)]
    pub atomic_radius: Option<f64>,       // pm
    #[serde(default)]
    pub ionization_energy: Option<f64>,   // kJ/mol
    #[serde(default)]
    pub density: Option<f64>,             // g/cm³
    #[serde(default)]
    pub melting_point: Option<f64>,       // K
    #[serde(default)]
    pub boiling_point: Option<f64>,       // K
    #[serde(default)]
    pub discovery_year: Option<i32>,
}

impl ElementRecord {
    /// True for records that belong to the 7x18 main grid.
    pub fn in_main_grid(&self) -> bool {
        (1..=7).contains(&self.period)
    }
}
