use std::collections::BTreeMap;
use std::sync::Arc;

use log::{info, warn};
use rand::rngs::StdRng;

use crate::config::{Settings, MODEL_FILES};
use crate::data::loader::load_or_empty;
use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything a request handler needs, independent of the boundary.
pub struct AppState {
    pub settings: Settings,

    /// Loaded once; handlers only read it.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Load the catalog named by `settings`, falling back to an empty one.
    pub fn load(settings: Settings) -> Self {
        let catalog = load_or_empty(&settings.catalog);
        Self::with_catalog(settings, catalog)
    }

    pub fn with_catalog(settings: Settings, catalog: Catalog) -> Self {
        Self {
            settings,
            catalog: Arc::new(catalog),
        }
    }

    pub fn rng(&self) -> StdRng {
        self.settings.rng()
    }

    /// Presence of each model artifact, keyed by relative path.
    pub fn model_files(&self) -> BTreeMap<String, bool> {
        let status: BTreeMap<String, bool> = MODEL_FILES
            .iter()
            .map(|rel| (rel.to_string(), self.settings.model_dir.join(rel).exists()))
            .collect();

        let missing = status.values().filter(|found| !**found).count();
        for (rel, found) in &status {
            if *found {
                info!("Model file found: {rel}");
            } else {
                warn!("Model file missing: {rel}");
            }
        }
        if missing > 0 {
            warn!("{missing}/{} model files are missing. Using fallbacks.", status.len());
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_reads_the_configured_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        fs::write(&path, "id,gender\n1,male\n2,female\n").unwrap();

        let state = AppState::load(Settings {
            catalog: path,
            ..Default::default()
        });
        assert_eq!(state.catalog.len(), 2);
    }

    #[test]
    fn test_load_without_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::load(Settings {
            catalog: dir.path().join("absent.csv"),
            ..Default::default()
        });
        assert!(state.catalog.is_empty());
    }
}
