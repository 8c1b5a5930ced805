use serde::{Deserialize, Serialize};

use crate::style::StyleState;

/// Settings restored between runs.
///
/// Only the paint settings survive a restart. Drawings are never saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppSettings {
    pub style: StyleState,
}

impl AppSettings {
    /// Load from eframe storage, falling back to defaults
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        match storage.and_then(|s| eframe::get_value::<Self>(s, eframe::APP_KEY)) {
            Some(settings) => {
                log::debug!("restored settings: {:?}", settings);
                settings
            }
            None => Self::default(),
        }
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
