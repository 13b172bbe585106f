use std::collections::BTreeMap;

use log::info;
use rand::Rng;
use serde::Serialize;

use super::{draw_measurements, AttributeEstimate, FallbackProvider};
use crate::error::InvalidWeightsError;
use crate::sampling::{sample, WeightedCategory};
use crate::tables::{
    BODY_CONFIDENCE, BODY_MEASUREMENT_RANGES, FEMALE_BODY_SHAPES, MALE_BODY_SHAPES, MALE_ALIASES,
};

// ---------------------------------------------------------------------------
// BodyProfile – which shape table applies
// ---------------------------------------------------------------------------

/// Shape table selector. Anything that is not a recognised male alias,
/// including a missing gender, selects [`BodyProfile::Female`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyProfile {
    Male,
    #[default]
    Female,
}

impl BodyProfile {
    pub fn from_gender(gender: Option<&str>) -> Self {
        match gender {
            Some(g) if MALE_ALIASES.iter().any(|alias| g.eq_ignore_ascii_case(alias)) => {
                BodyProfile::Male
            }
            _ => BodyProfile::Female,
        }
    }

    pub fn shapes(&self) -> &'static [WeightedCategory] {
        match self {
            BodyProfile::Male => &MALE_BODY_SHAPES,
            BodyProfile::Female => &FEMALE_BODY_SHAPES,
        }
    }
}

// ---------------------------------------------------------------------------
// BodyFallback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct BodyFallback {
    pub profile: BodyProfile,
}

impl BodyFallback {
    pub fn for_gender(gender: Option<&str>) -> Self {
        BodyFallback {
            profile: BodyProfile::from_gender(gender),
        }
    }
}

impl FallbackProvider for BodyFallback {
    type Output = AttributeEstimate;

    fn estimate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<AttributeEstimate, InvalidWeightsError> {
        let shape = *sample(self.profile.shapes(), rng)?;
        let confidence = rng.gen_range(BODY_CONFIDENCE);
        let measurements = draw_measurements(&BODY_MEASUREMENT_RANGES, rng);

        info!("Using fallback body analysis: {shape} with {confidence:.2} confidence");

        Ok(AttributeEstimate {
            primary_label: shape.to_string(),
            confidence,
            secondary_features: measurements,
            using_fallback: true,
        })
    }
}

/// Wire shape of a body analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyAnalysis {
    pub body_type: String,
    pub confidence: f64,
    pub measurements: BTreeMap<String, f64>,
    pub using_fallback: bool,
}

impl From<AttributeEstimate> for BodyAnalysis {
    fn from(e: AttributeEstimate) -> Self {
        BodyAnalysis {
            body_type: e.primary_label,
            confidence: e.confidence,
            measurements: e.secondary_features,
            using_fallback: e.using_fallback,
        }
    }
}
