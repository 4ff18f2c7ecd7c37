//! CSS output: the copy-paste snippet and the live preview declarations.

use serde::{Deserialize, Deserializer, Serialize};

use crate::params::EffectParams;
use crate::shadow::ShadowPair;

pub const DEFAULT_CLASS_NAME: &str = "my-neo";

/// Knobs for the generated snippet that are not part of the effect itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetOptions {
    /// Class the rule block targets, without the leading dot.
    #[serde(deserialize_with = "deserialize_class_name")]
    pub class_name: String,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl SnippetOptions {
    pub fn with_class_name(class_name: &str) -> Self {
        Self {
            class_name: normalize_class_name(class_name),
        }
    }

    /// `.my-neo` or `.my-neo.inset`.
    pub fn selector(&self, inset: bool) -> String {
        if inset {
            format!(".{}.inset", self.class_name)
        } else {
            format!(".{}", self.class_name)
        }
    }
}

/// Surrounding whitespace and leading dots are dropped; a blank name falls
/// back to [`DEFAULT_CLASS_NAME`].
fn normalize_class_name(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        DEFAULT_CLASS_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

fn deserialize_class_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_class_name(&raw))
}

/// How shadow tones are spelled inside a `box-shadow` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowColors {
    /// `#rrggbb` literals.
    Literal,
    /// `var(--shadow-dark)` / `var(--shadow-light)`.
    Variables,
}

/// Generate the snippet with the default class name.
pub fn generate_snippet(params: &EffectParams, shadows: &ShadowPair) -> String {
    generate_snippet_with(params, shadows, &SnippetOptions::default())
}

/// Generate the `:root` custom properties plus one rule block.
///
/// The dark tone always takes the positive offset and the light tone the
/// negative one; swapping them flips the apparent light source.
pub fn generate_snippet_with(
    params: &EffectParams,
    shadows: &ShadowPair,
    options: &SnippetOptions,
) -> String {
    let [first, second] = shadow_layers(params, shadows, ShadowColors::Literal);
    let selector = options.selector(params.inset);

    format!(
        ":root{{
  --base: {base};
  --shadow-dark: {dark};
  --shadow-light: {light};
}}

{selector}{{
  background: var(--base);
  border-radius: {radius}px;
  box-shadow:
    {first},
  {second};
}}",
        base = params.base,
        dark = shadows.dark,
        light = shadows.light,
        radius = params.radius_px,
    )
}

/// The two-layer shadow as a single `box-shadow` value.
pub fn box_shadow_value(params: &EffectParams, shadows: &ShadowPair, colors: ShadowColors) -> String {
    shadow_layers(params, shadows, colors).join(", ")
}

fn shadow_layers(params: &EffectParams, shadows: &ShadowPair, colors: ShadowColors) -> [String; 2] {
    let (dark, light) = match colors {
        ShadowColors::Literal => (shadows.dark.to_hex(), shadows.light.to_hex()),
        ShadowColors::Variables => (
            "var(--shadow-dark)".to_string(),
            "var(--shadow-light)".to_string(),
        ),
    };
    let prefix = if params.inset { "inset " } else { "" };
    let o = params.offset_px;
    let b = params.blur_px;

    [
        format!("{prefix}{o}px {o}px {b}px {dark}"),
        format!("{prefix}-{o}px -{o}px {b}px {light}"),
    ]
}

/// Declarations the preview surface mirrors.
///
/// `variables` go on the document root; the rest go on the preview element
/// and refer back to those variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewStyle {
    pub variables: Vec<(String, String)>,
    pub background: String,
    pub border_radius: String,
    pub box_shadow: String,
}

impl PreviewStyle {
    /// `--base: ...; --shadow-light: ...;` for a root `style` attribute.
    pub fn variables_inline(&self) -> String {
        self.variables
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Declarations for the preview element's `style` attribute.
    pub fn element_inline(&self) -> String {
        format!(
            "background: {}; border-radius: {}; box-shadow: {};",
            self.background, self.border_radius, self.box_shadow
        )
    }
}

pub fn preview_style(params: &EffectParams, shadows: &ShadowPair) -> PreviewStyle {
    let variables = vec![
        ("--base".to_string(), params.base.to_hex()),
        ("--shadow-light".to_string(), shadows.light.to_hex()),
        ("--shadow-dark".to_string(), shadows.dark.to_hex()),
        ("--radius".to_string(), format!("{}px", params.radius_px)),
        ("--offset".to_string(), format!("{}px", params.offset_px)),
        ("--blur".to_string(), format!("{}px", params.blur_px)),
    ];

    PreviewStyle {
        variables,
        background: "var(--base)".to_string(),
        border_radius: format!("{}px", params.radius_px),
        box_shadow: box_shadow_value(params, shadows, ShadowColors::Variables),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::shadow::derive_shadows;

    fn grey_params(inset: bool) -> EffectParams {
        EffectParams {
            base: Color::rgb(0xe0, 0xe0, 0xe0),
            offset_px: 10,
            blur_px: 20,
            radius_px: 16,
            inset,
        }
    }

    #[test]
    fn outset_snippet_layout() {
        let params = grey_params(false);
        let css = generate_snippet(&params, &derive_shadows(params.base));
        let expected = ":root{
  --base: #e0e0e0;
  --shadow-dark: #c6c6c6;
  --shadow-light: #f2f2f2;
}

.my-neo{
  background: var(--base);
  border-radius: 16px;
  box-shadow:
    10px 10px 20px #c6c6c6,
  -10px -10px 20px #f2f2f2;
}";
        assert_eq!(css, expected);
    }

    #[test]
    fn inset_prefixes_both_layers_only() {
        let outset = grey_params(false);
        let inset = grey_params(true);
        let shadows = derive_shadows(outset.base);

        let a = generate_snippet(&outset, &shadows);
        let b = generate_snippet(&inset, &shadows);

        assert!(b.contains(".my-neo.inset{"));
        assert!(b.contains("    inset 10px 10px 20px #c6c6c6,\n"));
        assert!(b.contains("  inset -10px -10px 20px #f2f2f2;\n"));
        assert_eq!(
            b.replace("inset ", "").replace(".my-neo.inset", ".my-neo"),
            a
        );
    }

    #[test]
    fn dark_takes_positive_offset() {
        let params = grey_params(false);
        let shadows = derive_shadows(params.base);
        let value = box_shadow_value(&params, &shadows, ShadowColors::Literal);
        assert_eq!(value, "10px 10px 20px #c6c6c6, -10px -10px 20px #f2f2f2");
    }

    #[test]
    fn custom_class_name() {
        let params = grey_params(true);
        let options = SnippetOptions::with_class_name(".card");
        let css = generate_snippet_with(&params, &derive_shadows(params.base), &options);
        assert!(css.contains("\n.card.inset{\n"));
        assert!(!css.contains("my-neo"));

        assert_eq!(SnippetOptions::with_class_name("  "), SnippetOptions::default());
    }

    #[test]
    fn preview_uses_variables() {
        let params = grey_params(true);
        let style = preview_style(&params, &derive_shadows(params.base));
        assert_eq!(style.background, "var(--base)");
        assert_eq!(style.border_radius, "16px");
        assert_eq!(
            style.box_shadow,
            "inset 10px 10px 20px var(--shadow-dark), inset -10px -10px 20px var(--shadow-light)"
        );
        assert!(style.variables_inline().starts_with("--base: #e0e0e0; --shadow-light: #f2f2f2;"));
        assert!(style.element_inline().contains("border-radius: 16px;"));
    }
}
