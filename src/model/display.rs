// src/model/display.rs
//
// Text shown on a cell face and in its tooltip.

use super::element::{Category, ElementRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "en")]
    English,
}

/// Fixed strings for one language.
struct Labels {
    title: &'static str,
    no_data: &'static str,
    atomic_number: &'static str,
    atomic_mass: &'static str,
    period: &'static str,
    group: &'static str,
    category: &'static str,
    properties: &'static str,
    electron_configuration: &'static str,
    electronegativity: &'static str,
    atomic_radius: &'static str,
    ionization_energy: &'static str,
    density: &'static str,
    melting_point: &'static str,
    boiling_point: &'static str,
    discovery_year: &'static str,
}

static ZH: Labels = Labels {
    title: "元素周期表",
    no_data: "暂无数据",
    atomic_number: "原子序数：",
    atomic_mass: "原子质量：",
    period: "周期：",
    group: "族：",
    category: "类别：",
    properties: "物理化学性质",
    electron_configuration: "电子构型：",
    electronegativity: "电负性：",
    atomic_radius: "原子半径：",
    ionization_energy: "第一电离能：",
    density: "密度：",
    melting_point: "熔点：",
    boiling_point: "沸点：",
    discovery_year: "发现年份：",
};

static EN: Labels = Labels {
    title: "Periodic Table",
    no_data: "No data",
    atomic_number: "Atomic number: ",
    atomic_mass: "Atomic mass: ",
    period: "Period: ",
    group: "Group: ",
    category: "Category: ",
    properties: "Physical & chemical properties",
    electron_configuration: "Electron configuration: ",
    electronegativity: "Electronegativity: ",
    atomic_radius: "Atomic radius: ",
    ionization_energy: "First ionisation energy: ",
    density: "Density: ",
    melting_point: "Melting point: ",
    boiling_point: "Boiling point: ",
    discovery_year: "Discovered: ",
};

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zh" => Some(Language::Chinese),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    fn labels(self) -> &'static Labels {
        match self {
            Language::Chinese => &ZH,
            Language::English => &EN,
        }
    }

    pub fn title(self) -> &'static str {
        self.labels().title
    }

    pub fn no_data(self) -> &'static str {
        self.labels().no_data
    }

    pub fn category_name(self, category: Category) -> &'static str {
        match self {
            Language::Chinese => match category {
                Category::AlkaliMetal => "碱金属",
                Category::AlkalineEarthMetal => "碱土金属",
                Category::TransitionMetal => "过渡金属",
                Category::PostTransitionMetal => "后过渡金属",
                Category::Metalloid => "类金属",
                Category::Nonmetal => "非金属",
                Category::Halogen => "卤素",
                Category::NobleGas => "稀有气体",
                Category::Lanthanide => "镧系元素",
                Category::Actinide => "锕系元素",
            },
            Language::English => match category {
                Category::AlkaliMetal => "Alkali metal",
                Category::AlkalineEarthMetal => "Alkaline earth metal",
                Category::TransitionMetal => "Transition metal",
                Category::PostTransitionMetal => "Post-transition metal",
                Category::Metalloid => "Metalloid",
                Category::Nonmetal => "Nonmetal",
                Category::Halogen => "Halogen",
                Category::NobleGas => "Noble gas",
                Category::Lanthanide => "Lanthanide",
                Category::Actinide => "Actinide",
            },
        }
    }
}

/// `value` followed by `unit`, or the no-data placeholder.
pub fn format_value(value: Option<f64>, unit: &str, language: Language) -> String {
    match value {
        Some(v) => format!("{}{}", v, unit),
        None => language.no_data().to_string(),
    }
}

/// `value` with `digits` decimals. An exact half rounds away from zero
/// (`157.25` -> `157.3`); anything else rounds to nearest.
pub fn fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    // `{:.N}` breaks exact ties to even. The product is exact iff the fma residue is zero.
    if scaled.fract().abs() == 0.5 && value.mul_add(scale, -scaled) == 0.0 {
        return format!("{:.*}", digits, scaled.round() / scale);
    }
    format!("{:.*}", digits, value)
}

/// Summary printed on the cell face.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGlyph {
    pub atomic_number: String,
    pub symbol: String,
    pub name: String,
    pub mass: String,
}

impl CellGlyph {
    pub fn of(rec: &ElementRecord) -> Self {
        Self {
            atomic_number: rec.atomic_number.to_string(),
            symbol: rec.symbol.clone(),
            name: rec.name.clone(),
            mass: fixed(rec.atomic_mass, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    /// Spans both columns of the panel.
    pub wide: bool,
}

impl DetailField {
    fn new(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            wide: false,
        }
    }
}

/// Everything the hover tooltip shows for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub title: String,
    pub chinese_name: String,
    pub basics: Vec<DetailField>,
    pub properties_heading: &'static str,
    pub properties: Vec<DetailField>,
}

impl DetailPanel {
    pub fn build(rec: &ElementRecord, language: Language) -> Self {
        let l = language.labels();

        let basics = vec![
            DetailField::new(l.atomic_number, rec.atomic_number.to_string()),
            DetailField::new(l.atomic_mass, fixed(rec.atomic_mass, 3)),
            DetailField::new(l.period, rec.period.to_string()),
            DetailField::new(l.group, rec.group.to_string()),
            DetailField {
                label: l.category,
                value: language.category_name(rec.category).to_string(),
                wide: true,
            },
        ];

        let configuration = rec
            .electron_configuration
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(l.no_data)
            .to_string();

        let mut properties = vec![
            DetailField::new(l.electron_configuration, configuration),
            DetailField::new(l.electronegativity, format_value(rec.electronegativity, "", language)),
            DetailField::new(l.atomic_radius, format_value(rec.atomic_radius, " pm", language)),
            DetailField::new(
                l.ionization_energy,
                format_value(rec.ionization_energy, " kJ/mol", language),
            ),
            DetailField::new(l.density, format_value(rec.density, " g/cm³", language)),
            DetailField::new(l.melting_point, format_value(rec.melting_point, " K", language)),
            DetailField::new(l.boiling_point, format_value(rec.boiling_point, " K", language)),
        ];

        if let Some(year) = rec.discovery_year {
            properties.push(DetailField::new(l.discovery_year, year.to_string()));
        }

        Self {
            title: format!("{} ({})", rec.name, rec.symbol),
            chinese_name: rec.chinese_name.clone(),
            basics,
            properties_heading: l.properties,
            properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementSet;

    fn iron() -> ElementRecord {
        ElementSet::embedded().unwrap().get(26).unwrap().clone()
    }

    fn value_of<'a>(fields: &'a [DetailField], label: &str) -> Option<&'a str> {
        fields.iter().find(|f| f.label == label).map(|f| f.value.as_str())
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(1811.0), " K", Language::Chinese), "1811 K");
        assert_eq!(format_value(Some(2.2), "", Language::Chinese), "2.2");
        assert_eq!(format_value(None, " K", Language::Chinese), "暂无数据");
        assert_eq!(format_value(None, " K", Language::English), "No data");
    }

    #[test]
    fn test_glyph_rounds_mass_to_one_decimal() {
        let g = CellGlyph::of(&iron());
        assert_eq!(g.atomic_number, "26");
        assert_eq!(g.symbol, "Fe");
        assert_eq!(g.name, "Iron");
        assert_eq!(g.mass, "55.8");
    }

    #[test]
    fn test_glyph_rounds_half_up() {
        let set = ElementSet::embedded().unwrap();
        // 157.25 is exact in binary
        assert_eq!(CellGlyph::of(set.get(64).unwrap()).mass, "157.3");
        // 180.95 is stored just below the half
        assert_eq!(CellGlyph::of(set.get(73).unwrap()).mass, "180.9");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(0.125, 2), "0.13");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(-1.25, 1), "-1.3");
        assert_eq!(fixed(55.845, 3), "55.845");
        assert_eq!(fixed(1.005, 2), "1.00");
        assert_eq!(fixed(4.0026, 1), "4.0");
    }

    #[test]
    fn test_panel_basics() {
        let p = DetailPanel::build(&iron(), Language::Chinese);
        assert_eq!(p.title, "Iron (Fe)");
        assert_eq!(p.chinese_name, "铁");
        assert_eq!(value_of(&p.basics, "原子质量："), Some("55.845"));
        assert_eq!(value_of(&p.basics, "类别："), Some("过渡金属"));
        assert!(p.basics.iter().find(|f| f.label == "类别：").unwrap().wide);
    }

    #[test]
    fn test_panel_units() {
        let p = DetailPanel::build(&iron(), Language::English);
        assert_eq!(value_of(&p.properties, "Electronegativity: "), Some("1.83"));
        assert_eq!(value_of(&p.properties, "Atomic radius: "), Some("140 pm"));
        assert_eq!(value_of(&p.properties, "First ionisation energy: "), Some("763 kJ/mol"));
        assert_eq!(value_of(&p.properties, "Density: "), Some("7.874 g/cm³"));
        assert_eq!(value_of(&p.properties, "Melting point: "), Some("1811 K"));
    }

    #[test]
    fn test_missing_fields_use_placeholder() {
        let mut rec = iron();
        rec.electronegativity = None;
        rec.electron_configuration = Some("  ".to_string());
        rec.discovery_year = None;

        let p = DetailPanel::build(&rec, Language::Chinese);
        assert_eq!(value_of(&p.properties, "电负性："), Some("暂无数据"));
        assert_eq!(value_of(&p.properties, "电子构型："), Some("暂无数据"));
        assert!(value_of(&p.properties, "发现年份：").is_none());
    }

    #[test]
    fn test_discovery_year_shown_when_present() {
        let set = ElementSet::embedded().unwrap();
        let helium = set.get(2).unwrap();
        let p = DetailPanel::build(helium, Language::English);
        assert_eq!(value_of(&p.properties, "Discovered: "), Some("1868"));
        assert_eq!(value_of(&p.properties, "Electronegativity: "), Some("No data"));
    }

    #[test]
    fn test_language_codes() {
        for lang in [Language::Chinese, Language::English] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::Chinese);
    }
}
