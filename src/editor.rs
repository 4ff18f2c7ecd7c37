//! Editor state: the current control values plus an explicit render step.
//!
//! A UI binding layer (the preview page, the CLI, a wasm host) owns one
//! [`Editor`], feeds it [`Input`] events and calls [`Editor::render`] after
//! each one.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{hex_to_color, Color};
use crate::error::ColorError;
use crate::params::{bounds, clamp_to, EffectParams};
use crate::random;
use crate::shadow::{derive_shadows, ShadowPair};
use crate::snippet::{generate_snippet_with, preview_style, PreviewStyle, SnippetOptions};

/// One change coming from a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Base(String),
    Offset(u32),
    Blur(u32),
    Radius(u32),
    Inset(bool),
}

/// Everything one render tick produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    pub params: EffectParams,
    pub shadows: ShadowPair,
    pub css: String,
    pub preview: PreviewStyle,
}

#[derive(Debug, Clone, Default)]
pub struct Editor {
    params: EffectParams,
    options: SnippetOptions,
}

impl Editor {
    pub fn new(params: EffectParams) -> Self {
        Self {
            params: params.clamped(),
            options: SnippetOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SnippetOptions) -> Self {
        self.options = options;
        self
    }

    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    pub fn options(&self) -> &SnippetOptions {
        &self.options
    }

    /// Set the base color from hex text.
    ///
    /// On a parse error the previous color is kept.
    pub fn set_base_hex(&mut self, hex: &str) -> Result<Color, ColorError> {
        let color = hex_to_color(hex)?;
        self.params.base = color;
        Ok(color)
    }

    pub fn set_base(&mut self, color: Color) {
        self.params.base = color;
    }

    pub fn set_offset(&mut self, px: u32) {
        self.params.offset_px = clamp_to(px, &bounds::OFFSET);
    }

    pub fn set_blur(&mut self, px: u32) {
        self.params.blur_px = clamp_to(px, &bounds::BLUR);
    }

    pub fn set_radius(&mut self, px: u32) {
        self.params.radius_px = clamp_to(px, &bounds::RADIUS);
    }

    pub fn set_inset(&mut self, inset: bool) {
        self.params.inset = inset;
    }

    /// Flip inset mode and return the new value.
    pub fn toggle_inset(&mut self) -> bool {
        self.params.inset = !self.params.inset;
        self.params.inset
    }

    /// Apply one control change. A malformed base color is logged and
    /// ignored so the render path always sees a valid color.
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Base(hex) => {
                if let Err(e) = self.set_base_hex(&hex) {
                    tracing::warn!(input = %hex, error = %e, "ignoring malformed base color");
                }
            }
            Input::Offset(px) => self.set_offset(px),
            Input::Blur(px) => self.set_blur(px),
            Input::Radius(px) => self.set_radius(px),
            Input::Inset(inset) => self.set_inset(inset),
        }
    }

    /// Replace every value with a random, good-looking set.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &EffectParams {
        self.params = random::randomize(rng);
        &self.params
    }

    /// Recompute shadows, snippet and preview from the current values.
    pub fn render(&self) -> Rendered {
        render_with(&self.params, &self.options)
    }
}

/// Run the derive + generate pipeline for one parameter set.
pub fn render_with(params: &EffectParams, options: &SnippetOptions) -> Rendered {
    let shadows = derive_shadows(params.base);
    Rendered {
        params: *params,
        shadows,
        css: generate_snippet_with(params, &shadows, options),
        preview: preview_style(params, &shadows),
    }
}
