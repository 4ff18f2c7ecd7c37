pub mod color;
pub mod editor;
pub mod error;
pub mod params;
pub mod random;
pub mod shadow;
pub mod snippet;

#[cfg(not(target_arch = "wasm32"))]
pub mod clipboard;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use color::{color_to_hex, hex_to_color, hsl_to_color, Color};
pub use editor::{Editor, Input, Rendered};
pub use params::EffectParams;
pub use shadow::{derive_shadows, ShadowPair};
pub use snippet::{generate_snippet, generate_snippet_with, SnippetOptions};

use error::Result;

/// Derive the shadow tones for `params` and render everything the editor
/// shows: snippet, preview declarations and the tones themselves.
pub fn render(params: &EffectParams) -> Rendered {
    editor::render_with(params, &SnippetOptions::default())
}

/// One-shot snippet from a hex base color and the three sizes.
///
/// Sizes are clamped to the editor's control bounds.
pub fn css_for(base: &str, offset_px: u32, blur_px: u32, radius_px: u32, inset: bool) -> Result<String> {
    let params = EffectParams {
        base: hex_to_color(base)?,
        offset_px,
        blur_px,
        radius_px,
        inset,
    }
    .clamped();
    Ok(generate_snippet(&params, &derive_shadows(params.base)))
}
