//! Attribute estimation: face shape, body shape and skin tone.
//!
//! Architecture:
//! ```text
//!   tables (weights, ranges)
//!        │
//!        ▼
//!   ┌──────────┐     ┌──────────┐
//!   │ sampling  │ ──▶ │ provider │  face / body / skin fallback
//!   └──────────┘     └──────────┘
//!                         │  skin only
//!                         ▼
//!                    ┌──────────┐
//!                    │  color    │  tone + undertone → RgbColor
//!                    └──────────┘
//!                         │
//!                         ▼
//!               AttributeEstimate → FaceAnalysis / BodyAnalysis / SkinAnalysis
//! ```

pub mod body;
pub mod face;
pub mod skin;

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::error::InvalidWeightsError;
use crate::tables::MeasurementRange;

pub use body::{BodyAnalysis, BodyFallback};
pub use face::{FaceAnalysis, FaceFallback};
pub use skin::{SkinAnalysis, SkinFallback};

// ---------------------------------------------------------------------------
// AttributeEstimate – the common result shape
// ---------------------------------------------------------------------------

/// One estimated attribute. Built fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeEstimate {
    pub primary_label: String,
    /// Lies within the provider's confidence range.
    pub confidence: f64,
    pub secondary_features: BTreeMap<String, f64>,
    /// `true` when produced by the stochastic path rather than an image model.
    pub using_fallback: bool,
}

// ---------------------------------------------------------------------------
// Provider seam
// ---------------------------------------------------------------------------

/// A source of attribute estimates that does not look at the image.
///
/// Implementations only read the fixed tables; randomness comes from the
/// caller's generator so tests can replay exact sequences.
pub trait FallbackProvider {
    type Output;

    fn estimate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Output, InvalidWeightsError>;
}

/// Draw every named measurement independently and uniformly.
fn draw_measurements<R: Rng + ?Sized>(
    ranges: &[MeasurementRange],
    rng: &mut R,
) -> BTreeMap<String, f64> {
    ranges
        .iter()
        .map(|m| (m.name.to_string(), rng.gen_range(m.min..=m.max)))
        .collect()
}
