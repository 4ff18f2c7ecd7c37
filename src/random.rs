//! "Surprise me": random parameters that still look good.

use rand::Rng;

use crate::color::{hsl_to_color, Color};
use crate::params::{bounds, clamp_to, EffectParams};

/// Probability that a randomized surface comes out inset.
pub const INSET_PROBABILITY: f64 = 0.3;

/// Draw a light, cool pastel: hue 200-259, saturation 12-21%, lightness 90-95%.
pub fn random_pastel<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let h = rng.random_range(200..260u32);
    let s = rng.random_range(12..22u32);
    let l = rng.random_range(90..96u32);
    hsl_to_color(f64::from(h), f64::from(s), f64::from(l))
}

/// Draw a full parameter set.
///
/// Blur is always drawn relative to the offset so the shadow stays soft. All
/// values are clamped to the control bounds afterwards.
pub fn randomize<R: Rng + ?Sized>(rng: &mut R) -> EffectParams {
    let base = random_pastel(rng);

    let offset = rng.random_range(6..24u32);
    let blur = offset + rng.random_range(6..18u32);
    let radius = rng.random_range(8..32u32);
    let inset = rng.random_bool(INSET_PROBABILITY);

    tracing::debug!(%base, offset, blur, radius, inset, "randomized effect");

    EffectParams {
        base,
        offset_px: clamp_to(offset, &bounds::OFFSET),
        blur_px: clamp_to(blur, &bounds::BLUR),
        radius_px: clamp_to(radius, &bounds::RADIUS),
        inset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn always_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = randomize(&mut rng);
            assert!(bounds::OFFSET.contains(&p.offset_px), "offset {}", p.offset_px);
            assert!(bounds::BLUR.contains(&p.blur_px), "blur {}", p.blur_px);
            assert!(bounds::RADIUS.contains(&p.radius_px), "radius {}", p.radius_px);
        }
    }

    #[test]
    fn blur_tracks_offset() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let p = randomize(&mut rng);
            assert!((6..24).contains(&p.offset_px));
            assert!(p.blur_px >= p.offset_px + 6);
            assert!((8..32).contains(&p.radius_px));
        }
    }

    #[test]
    fn pastels_are_light() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let c = random_pastel(&mut rng);
            // lightness >= 90% keeps every channel well above mid grey
            assert!(c.r >= 200 && c.g >= 200 && c.b >= 200, "{c}");
            // cool hues: blue is the dominant channel
            assert!(c.b >= c.r, "{c}");
        }
    }

    #[test]
    fn inset_rate_is_roughly_thirty_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let insets = (0..2000).filter(|_| randomize(&mut rng).inset).count();
        assert!((450..750).contains(&insets), "{insets} insets of 2000");
    }

    #[test]
    fn same_seed_same_params() {
        let a = randomize(&mut StdRng::seed_from_u64(99));
        let b = randomize(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
