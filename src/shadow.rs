use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Added to every channel of the base color to get the highlight tone.
pub const LIGHT_SHIFT: i16 = 18;
/// Added to every channel of the base color to get the shadow tone.
///
/// Larger in magnitude than [`LIGHT_SHIFT`]; the imbalance is what reads as a
/// light source from the top-left.
pub const DARK_SHIFT: i16 = -26;

/// The highlight and shadow tones for one base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowPair {
    pub light: Color,
    pub dark: Color,
}

/// Derive the two shadow tones from `base`, clamping each channel to `0..=255`.
pub fn derive_shadows(base: Color) -> ShadowPair {
    ShadowPair {
        light: base.shift(LIGHT_SHIFT),
        dark: base.shift(DARK_SHIFT),
    }
}
