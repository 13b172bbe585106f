use std::collections::BTreeMap;

use log::info;
use rand::Rng;
use serde::Serialize;

use super::{AttributeEstimate, FallbackProvider};
use crate::color::{synthesize, RgbColor, SkinTone, Undertone};
use crate::error::InvalidWeightsError;
use crate::sampling::sample;
use crate::tables::{SKIN_CONFIDENCE, SKIN_TONES, UNDERTONES};

/// Skin-tone estimate: independent tone and undertone draws plus a
/// synthesised representative colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkinFallback;

#[derive(Debug, Clone, PartialEq)]
pub struct SkinEstimate {
    /// `primary_label` carries the tone label; no secondary features.
    pub estimate: AttributeEstimate,
    pub tone: SkinTone,
    pub undertone: Undertone,
    pub rgb: RgbColor,
}

impl FallbackProvider for SkinFallback {
    type Output = SkinEstimate;

    fn estimate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SkinEstimate, InvalidWeightsError> {
        let tone = *sample(&SKIN_TONES, rng)?;
        let undertone = *sample(&UNDERTONES, rng)?;
        let confidence = rng.gen_range(SKIN_CONFIDENCE);
        let rgb = synthesize(tone, undertone, rng);

        info!(
            "Using fallback skin analysis: {tone} with {undertone} undertone ({})",
            rgb.hex()
        );

        Ok(SkinEstimate {
            estimate: AttributeEstimate {
                primary_label: tone.label().to_string(),
                confidence,
                secondary_features: BTreeMap::new(),
                using_fallback: true,
            },
            tone,
            undertone,
            rgb,
        })
    }
}

/// Wire shape of a skin analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkinAnalysis {
    pub skin_tone: SkinTone,
    pub undertone: Undertone,
    pub confidence: f64,
    pub rgb_value: RgbColor,
    pub using_fallback: bool,
}

impl From<SkinEstimate> for SkinAnalysis {
    fn from(e: SkinEstimate) -> Self {
        SkinAnalysis {
            skin_tone: e.tone,
            undertone: e.undertone,
            confidence: e.estimate.confidence,
            rgb_value: e.rgb,
            using_fallback: e.estimate.using_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_skin_estimate_is_consistent() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..200 {
            let e = SkinFallback.estimate(&mut rng).unwrap();
            assert_eq!(e.estimate.primary_label, e.tone.label());
            assert!(SKIN_CONFIDENCE.contains(&e.estimate.confidence));
            assert!(e.estimate.using_fallback);
        }
    }

    #[test]
    fn test_tone_and_undertone_both_vary() {
        let mut rng = StdRng::seed_from_u64(32);
        let draws: Vec<SkinEstimate> = (0..300).map(|_| SkinFallback.estimate(&mut rng).unwrap()).collect();
        for undertone in Undertone::ALL {
            assert!(draws.iter().any(|d| d.undertone == undertone), "{undertone}");
        }
        assert!(draws.iter().any(|d| d.tone == SkinTone::TypeIII));
    }

    #[test]
    fn test_skin_analysis_json_layout() {
        let mut rng = StdRng::seed_from_u64(33);
        let analysis = SkinAnalysis::from(SkinFallback.estimate(&mut rng).unwrap());
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json["skin_tone"].as_str().unwrap().starts_with("Type "));
        assert!(["Cool", "Neutral", "Warm"].contains(&json["undertone"].as_str().unwrap()));
        for channel in ["r", "g", "b"] {
            assert!(json["rgb_value"][channel].is_u64(), "{channel}");
        }
        assert_eq!(json["using_fallback"], true);
    }
}
