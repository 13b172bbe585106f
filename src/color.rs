use std::fmt;

use palette::Srgb;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tables::{tone_channel_ranges, undertone_adjustment};

// ---------------------------------------------------------------------------
// Skin tone and undertone categories
// ---------------------------------------------------------------------------

/// Fitzpatrick-scale category, used purely as a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinTone {
    #[serde(rename = "Type I - Very fair")]
    TypeI,
    #[serde(rename = "Type II - Fair")]
    TypeII,
    #[serde(rename = "Type III - Medium")]
    TypeIII,
    #[serde(rename = "Type IV - Olive")]
    TypeIV,
    #[serde(rename = "Type V - Brown")]
    TypeV,
    #[serde(rename = "Type VI - Dark brown to black")]
    TypeVI,
}

impl SkinTone {
    #[cfg(test)]
    pub const ALL: [SkinTone; 6] = [
        SkinTone::TypeI,
        SkinTone::TypeII,
        SkinTone::TypeIII,
        SkinTone::TypeIV,
        SkinTone::TypeV,
        SkinTone::TypeVI,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkinTone::TypeI => "Type I - Very fair",
            SkinTone::TypeII => "Type II - Fair",
            SkinTone::TypeIII => "Type III - Medium",
            SkinTone::TypeIV => "Type IV - Olive",
            SkinTone::TypeV => "Type V - Brown",
            SkinTone::TypeVI => "Type VI - Dark brown to black",
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Undertone {
    Cool,
    Neutral,
    Warm,
}

impl Undertone {
    #[cfg(test)]
    pub const ALL: [Undertone; 3] = [Undertone::Cool, Undertone::Neutral, Undertone::Warm];

    pub fn label(&self) -> &'static str {
        match self {
            Undertone::Cool => "Cool",
            Undertone::Neutral => "Neutral",
            Undertone::Warm => "Warm",
        }
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// RgbColor
// ---------------------------------------------------------------------------

/// An 8-bit sRGB colour, serialised as `{ "r": .., "g": .., "b": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// `#rrggbb` form, handy for logs and swatches.
    pub fn hex(&self) -> String {
        let srgb: Srgb<u8> = Srgb::new(self.r, self.g, self.b);
        format!("#{srgb:x}")
    }
}

// ---------------------------------------------------------------------------
// Tone → colour synthesis
// ---------------------------------------------------------------------------

/// Draw a representative colour for a tone/undertone pair.
///
/// Each channel is drawn independently from the tone's range, shifted by
/// the undertone, then clamped to `0..=255`. Nothing is cached, so repeated
/// calls with the same pair usually differ.
pub fn synthesize<R: Rng + ?Sized>(tone: SkinTone, undertone: Undertone, rng: &mut R) -> RgbColor {
    let ranges = tone_channel_ranges(tone);
    let shift = undertone_adjustment(undertone);
    let mut channels = [0u8; 3];
    for (slot, ((min, max), adj)) in channels.iter_mut().zip(ranges.into_iter().zip(shift)) {
        let value = rng.gen_range(min..=max) + adj;
        *slot = value.clamp(0, 255) as u8;
    }
    let [r, g, b] = channels;
    RgbColor { r, g, b }
}
