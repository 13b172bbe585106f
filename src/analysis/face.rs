use std::collections::BTreeMap;

use log::info;
use rand::Rng;
use serde::Serialize;

use super::{draw_measurements, AttributeEstimate, FallbackProvider};
use crate::error::InvalidWeightsError;
use crate::sampling::sample;
use crate::tables::{FACE_CONFIDENCE, FACE_FEATURE_RANGES, FACE_SHAPES};

/// Face-shape estimate from the weighted shape table.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceFallback;

impl FallbackProvider for FaceFallback {
    type Output = AttributeEstimate;

    fn estimate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<AttributeEstimate, InvalidWeightsError> {
        let shape = *sample(&FACE_SHAPES, rng)?;
        let confidence = rng.gen_range(FACE_CONFIDENCE);
        let features = draw_measurements(&FACE_FEATURE_RANGES, rng);

        info!("Using fallback face analysis: {shape} with {confidence:.2} confidence");

        Ok(AttributeEstimate {
            primary_label: shape.to_string(),
            confidence,
            secondary_features: features,
            using_fallback: true,
        })
    }
}

/// Wire shape of a face analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceAnalysis {
    pub face_shape: String,
    pub confidence: f64,
    /// face_width, face_height, jaw_width, forehead_width, chin_prominence, cheekbone_width
    pub features: BTreeMap<String, f64>,
    pub using_fallback: bool,
}

impl From<AttributeEstimate> for FaceAnalysis {
    fn from(e: AttributeEstimate) -> Self {
        FaceAnalysis {
            face_shape: e.primary_label,
            confidence: e.confidence,
            features: e.secondary_features,
            using_fallback: e.using_fallback,
        }
    }
}
