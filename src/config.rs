use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Products returned per recommendation page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Products returned by a plain listing when no limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Model artifacts probed by the health report, relative to the model dir.
pub const MODEL_FILES: [&str; 2] = [
    "face_shape_Ml/face_shape_model.h5",
    "body-shape-api/body_shape_model.pkl",
];

// ---------------------------------------------------------------------------
// Settings – resolved from flags, then environment, then defaults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Product catalog file (.csv or .json).
    #[arg(long, env = "AURASYNC_CATALOG", default_value = "products.csv", global = true)]
    pub catalog: PathBuf,

    /// Directory searched for model artifacts.
    #[arg(long, env = "AURASYNC_MODEL_DIR", default_value = ".", global = true)]
    pub model_dir: PathBuf,

    /// Fixed seed for reproducible estimates and product order.
    #[arg(long, env = "AURASYNC_SEED", global = true)]
    pub seed: Option<u64>,

    #[arg(long, env = "AURASYNC_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE, global = true)]
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("products.csv"),
            model_dir: PathBuf::from("."),
            seed: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Settings {
    /// A fresh generator for one request.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_settings_replay() {
        let settings = Settings {
            seed: Some(99),
            ..Default::default()
        };
        let a: u64 = settings.rng().gen();
        let b: u64 = settings.rng().gen();
        assert_eq!(a, b);
    }
}
