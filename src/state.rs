// src/state.rs
use crate::config::Config;
use crate::model::{ElementSet, Language};
use std::rc::Rc;

pub struct AppState {
    pub config: Config,
    /// `None` when the element data failed to load.
    pub elements: Option<Rc<ElementSet>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            elements: None,
        }
    }

    /// Reads settings from disk, falling back to defaults.
    pub fn load_config(&mut self) {
        let (config, msg) = Config::load();
        self.config = config;
        log::info!("{}", msg);
    }

    pub fn save_config(&self) {
        match self.config.save() {
            Ok(path) => log::info!("Config saved to {:?}", path),
            Err(e) => log::warn!("Failed to save config: {}", e),
        }
    }

    /// Loads the embedded element table and reports any authoring defects.
    pub fn load_elements(&mut self) {
        match ElementSet::embedded() {
            Ok(set) => {
                if set.is_empty() {
                    log::warn!("Element data contains no usable records.");
                } else {
                    log::info!("Loaded {} elements.", set.len());
                }
                for issue in set.integrity_issues() {
                    log::warn!("Element data: {}", issue);
                }
                self.elements = Some(Rc::new(set));
            }
            Err(e) => {
                log::error!("Could not load element data: {}", e);
                self.elements = None;
            }
        }
    }

    pub fn language(&self) -> Language {
        self.config.language
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
