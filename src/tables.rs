//! Every fixed table the estimators and the recommendation text draw from.
//!
//! Keeping them here, and nowhere else, makes the defaults auditable: an
//! unrecognised gender picks [`FEMALE_BODY_SHAPES`], an unknown body or face
//! label gets [`GENERIC_BODY_ADVICE`] / [`GENERIC_FACE_ADVICE`], and an unknown
//! personality code contributes nothing.

use std::ops::RangeInclusive;

use crate::color::{SkinTone, Undertone};
use crate::sampling::WeightedCategory;

// ---------------------------------------------------------------------------
// Category weights
// ---------------------------------------------------------------------------

pub const FACE_SHAPES: [WeightedCategory; 7] = [
    WeightedCategory::new("Oval", 0.25),
    WeightedCategory::new("Round", 0.20),
    WeightedCategory::new("Square", 0.15),
    WeightedCategory::new("Heart", 0.15),
    WeightedCategory::new("Diamond", 0.10),
    WeightedCategory::new("Rectangle", 0.10),
    WeightedCategory::new("Triangle", 0.05),
];

pub const MALE_BODY_SHAPES: [WeightedCategory; 5] = [
    WeightedCategory::new("Trapezoid", 0.30),
    WeightedCategory::new("Rectangle", 0.25),
    WeightedCategory::new("Triangle", 0.20),
    WeightedCategory::new("Oval", 0.15),
    WeightedCategory::new("Inverted Triangle", 0.10),
];

pub const FEMALE_BODY_SHAPES: [WeightedCategory; 5] = [
    WeightedCategory::new("Hourglass", 0.25),
    WeightedCategory::new("Rectangle", 0.25),
    WeightedCategory::new("Pear", 0.20),
    WeightedCategory::new("Apple", 0.15),
    WeightedCategory::new("Inverted Triangle", 0.15),
];

/// Gender strings (compared case-insensitively) that select [`MALE_BODY_SHAPES`].
pub const MALE_ALIASES: [&str; 2] = ["male", "m"];

pub const SKIN_TONES: [WeightedCategory<SkinTone>; 6] = [
    WeightedCategory::new(SkinTone::TypeI, 0.10),
    WeightedCategory::new(SkinTone::TypeII, 0.20),
    WeightedCategory::new(SkinTone::TypeIII, 0.30),
    WeightedCategory::new(SkinTone::TypeIV, 0.20),
    WeightedCategory::new(SkinTone::TypeV, 0.15),
    WeightedCategory::new(SkinTone::TypeVI, 0.05),
];

pub const UNDERTONES: [WeightedCategory<Undertone>; 3] = [
    WeightedCategory::new(Undertone::Cool, 0.30),
    WeightedCategory::new(Undertone::Neutral, 0.40),
    WeightedCategory::new(Undertone::Warm, 0.30),
];

// ---------------------------------------------------------------------------
// Confidence and secondary measurement ranges
// ---------------------------------------------------------------------------

pub const FACE_CONFIDENCE: RangeInclusive<f64> = 0.75..=0.95;
pub const BODY_CONFIDENCE: RangeInclusive<f64> = 0.80..=0.95;
pub const SKIN_CONFIDENCE: RangeInclusive<f64> = 0.75..=0.95;

/// A named secondary feature drawn uniformly from `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

const fn measurement(name: &'static str, min: f64, max: f64) -> MeasurementRange {
    MeasurementRange { name, min, max }
}

pub const FACE_FEATURE_RANGES: [MeasurementRange; 6] = [
    measurement("face_width", 120.0, 160.0),
    measurement("face_height", 180.0, 220.0),
    measurement("jaw_width", 110.0, 150.0),
    measurement("forehead_width", 115.0, 155.0),
    measurement("chin_prominence", 0.1, 0.5),
    measurement("cheekbone_width", 120.0, 165.0),
];

pub const BODY_MEASUREMENT_RANGES: [MeasurementRange; 5] = [
    measurement("shoulder_to_waist_ratio", 0.8, 1.4),
    measurement("waist_to_hip_ratio", 0.7, 1.1),
    measurement("inseam_to_height_ratio", 0.4, 0.5),
    measurement("shoulder_width", 36.0, 50.0),
    measurement("hip_width", 34.0, 48.0),
];

// ---------------------------------------------------------------------------
// Colour synthesis
// ---------------------------------------------------------------------------

/// Inclusive per-channel `(min, max)` ranges for R, G and B.
pub const fn tone_channel_ranges(tone: SkinTone) -> [(i32, i32); 3] {
    match tone {
        SkinTone::TypeI => [(240, 255), (220, 240), (200, 225)],
        SkinTone::TypeII => [(225, 245), (200, 220), (175, 200)],
        SkinTone::TypeIII => [(200, 225), (170, 200), (140, 170)],
        SkinTone::TypeIV => [(180, 200), (150, 180), (120, 150)],
        SkinTone::TypeV => [(150, 180), (120, 150), (90, 120)],
        SkinTone::TypeVI => [(90, 120), (70, 90), (60, 80)],
    }
}

/// Additive R, G, B shift applied after the tone draw.
pub const fn undertone_adjustment(undertone: Undertone) -> [i32; 3] {
    match undertone {
        Undertone::Cool => [-10, 0, 10],
        Undertone::Neutral => [0, 0, 0],
        Undertone::Warm => [10, 5, -10],
    }
}

// ---------------------------------------------------------------------------
// Recommendation text
// ---------------------------------------------------------------------------

/// Keyed by lowercase body type.
pub const BODY_ADVICE: [(&str, &str); 5] = [
    ("hourglass", "Embrace fitted styles that highlight your balanced proportions. Wrap dresses and belted jackets work especially well for your figure."),
    ("rectangle", "Create curves with peplum tops, layered outfits, and statement belts to define your waist."),
    ("triangle", "Balance your proportions with structured tops, wider necklines, and A-line skirts or dresses."),
    ("inverted triangle", "Balance your broader shoulders with full skirts, wide-leg pants, and details at the hip area."),
    ("oval", "Define your waistline with empire waists and vertical patterns. V-necks and A-line silhouettes are particularly flattering."),
];

pub const GENERIC_BODY_ADVICE: &str = "Choose styles that enhance your unique body shape.";

/// Keyed by lowercase face shape.
pub const FACE_ADVICE: [(&str, &str); 6] = [
    ("oval", "You can wear most styles. Experiment with different necklines and accessories."),
    ("round", "Create length with V-necks, long earrings, and hairstyles with height."),
    ("square", "Soften your angles with round necklines and curved accessories."),
    ("heart", "Balance your wider forehead with wider bottoms and choker necklaces."),
    ("diamond", "Highlight your cheekbones with earrings and avoid oversized eyewear."),
    ("rectangle", "Soften your jawline with round necklines and curved accessories."),
];

pub const GENERIC_FACE_ADVICE: &str = "Select necklines and accessories that complement your face shape.";

pub const FAIR_SKIN_ADVICE: &str = "With your fair skin, jewel tones like emerald, sapphire, and ruby will create stunning contrast. Soft pastels also complement your complexion beautifully.";
pub const MEDIUM_SKIN_ADVICE: &str = "Your medium skin tone works well with both warm and cool colors. Rich hues like olive green, teal, and coral pink are particularly flattering.";
pub const OLIVE_SKIN_ADVICE: &str = "Your olive skin tone is complemented by earthy colors like terracotta, mustard, and olive green, as well as vibrant jewel tones.";
pub const DEEP_SKIN_ADVICE: &str = "Your deep skin tone is enhanced by bright, vibrant colors and rich jewel tones. White and cream create beautiful contrast.";

pub const GENERIC_RECOMMENDATION: &str = "Based on your unique characteristics, we recommend exploring styles that express your individuality while enhancing your natural features. Consider consulting with a personal stylist for more tailored advice.";

/// Keyed by uppercase four-letter MBTI code.
pub const PERSONALITY_STYLES: [(&str, &str); 16] = [
    ("ISTJ", "Classic and traditional styles with high-quality fabrics and timeless designs."),
    ("ISFJ", "Comfortable, practical clothing with soft fabrics and subtle patterns."),
    ("INFJ", "Minimalist designs with artistic touches and unique accessories."),
    ("INTJ", "Sophisticated, sleek styles with clean lines and intellectual appeal."),
    ("ISTP", "Functional, durable clothes with a casual edge and practical features."),
    ("ISFP", "Artistic, bohemian looks with unique textures and experimental combinations."),
    ("INFP", "Romantic, whimsical styles with soft layers and personal meaning."),
    ("INTP", "Unconventional, comfortable clothing with intellectual or nerdy references."),
    ("ESTP", "Bold, trendy pieces that make a statement and show confidence."),
    ("ESFP", "Fun, vibrant outfits with attention-grabbing colors and playful accessories."),
    ("ENFP", "Eclectic, creative ensembles with mixed patterns and expressive elements."),
    ("ENTP", "Smart-casual looks with unexpected twists and conversation starters."),
    ("ESTJ", "Professional, structured outfits with perfect coordination and attention to detail."),
    ("ESFJ", "Polished, put-together ensembles that follow current trends appropriately."),
    ("ENFJ", "Warm, approachable styles with harmonious colors and elegant touches."),
    ("ENTJ", "Power dressing with sharp tailoring and status-signaling elements."),
];

/// Exact-match lookup over a `(key, text)` table.
pub fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, text)| *text)
}
