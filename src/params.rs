use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Inclusive ranges the editor controls enforce.
pub mod bounds {
    use std::ops::RangeInclusive;

    pub const OFFSET: RangeInclusive<u32> = 2..=30;
    pub const BLUR: RangeInclusive<u32> = 4..=40;
    pub const RADIUS: RangeInclusive<u32> = 4..=40;
}

pub const DEFAULT_BASE: Color = Color::rgb(0xe0, 0xe5, 0xec);
pub const DEFAULT_OFFSET: u32 = 10;
pub const DEFAULT_BLUR: u32 = 20;
pub const DEFAULT_RADIUS: u32 = 16;

/// Everything needed to render one neumorphic surface.
///
/// Built fresh from the current control values on every change and dropped
/// once the output has been produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectParams {
    pub base: Color,
    #[serde(rename = "offset")]
    pub offset_px: u32,
    #[serde(rename = "blur")]
    pub blur_px: u32,
    #[serde(rename = "radius")]
    pub radius_px: u32,
    pub inset: bool,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            offset_px: DEFAULT_OFFSET,
            blur_px: DEFAULT_BLUR,
            radius_px: DEFAULT_RADIUS,
            inset: false,
        }
    }
}

impl EffectParams {
    /// Copy of `self` with every numeric value forced into its control range.
    pub fn clamped(self) -> Self {
        Self {
            offset_px: clamp_to(self.offset_px, &bounds::OFFSET),
            blur_px: clamp_to(self.blur_px, &bounds::BLUR),
            radius_px: clamp_to(self.radius_px, &bounds::RADIUS),
            ..self
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        bounds::OFFSET.contains(&self.offset_px)
            && bounds::BLUR.contains(&self.blur_px)
            && bounds::RADIUS.contains(&self.radius_px)
    }
}

pub(crate) fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_bounds() {
        assert!(EffectParams::default().is_within_bounds());
    }

    #[test]
    fn clamped_pulls_values_into_range() {
        let p = EffectParams {
            offset_px: 0,
            blur_px: 99,
            radius_px: 4,
            ..EffectParams::default()
        }
        .clamped();
        assert_eq!(p.offset_px, 2);
        assert_eq!(p.blur_px, 40);
        assert_eq!(p.radius_px, 4);
        assert!(p.is_within_bounds());
    }

    #[test]
    fn json_uses_short_names_and_fills_defaults() {
        let p: EffectParams =
            serde_json::from_str(r##"{"base":"#abc","offset":6,"inset":true}"##).unwrap();
        assert_eq!(p.base, Color::rgb(0xaa, 0xbb, 0xcc));
        assert_eq!(p.offset_px, 6);
        assert_eq!(p.blur_px, DEFAULT_BLUR);
        assert_eq!(p.radius_px, DEFAULT_RADIUS);
        assert!(p.inset);

        let json = serde_json::to_value(EffectParams::default()).unwrap();
        assert_eq!(json["base"], "#e0e5ec");
        assert_eq!(json["offset"], 10);
        assert_eq!(json["radius"], 16);
    }
}
