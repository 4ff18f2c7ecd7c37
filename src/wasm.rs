//! WASM bindings for the neumorph pipeline.
//!
//! Lets a browser page run the color math without the preview server.
//! Build with: `wasm-pack build --target web --features wasm`

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::editor::{render_with, Editor};
use crate::params::EffectParams;
use crate::snippet::SnippetOptions;

/// Generate the CSS snippet for one parameter set.
///
/// Throws a JS error if `base` is not a valid hex color.
#[wasm_bindgen]
pub fn render_css(base: &str, offset: u32, blur: u32, radius: u32, inset: bool) -> Result<String, JsError> {
    let mut editor = Editor::default();
    editor.set_base_hex(base).map_err(|e| JsError::new(&e.to_string()))?;
    editor.set_offset(offset);
    editor.set_blur(blur);
    editor.set_radius(radius);
    editor.set_inset(inset);
    Ok(editor.render().css)
}

/// Render a full `{ params, shadows, css, preview }` object.
///
/// `params` uses the JSON shape `{ base, offset, blur, radius, inset }`;
/// missing fields take their defaults. `class_name` may be empty.
#[wasm_bindgen]
pub fn render(params: JsValue, class_name: &str) -> Result<JsValue, JsError> {
    let params: EffectParams =
        serde_wasm_bindgen::from_value(params).map_err(|e| JsError::new(&e.to_string()))?;
    let options = SnippetOptions::with_class_name(class_name);
    let rendered = render_with(&params.clamped(), &options);
    serde_wasm_bindgen::to_value(&rendered).map_err(|e| JsError::new(&e.to_string()))
}

/// Random parameters. The caller supplies the seed (e.g. from
/// `crypto.getRandomValues`).
#[wasm_bindgen]
pub fn random_params(seed: u64) -> Result<JsValue, JsError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let params = crate::random::randomize(&mut rng);
    serde_wasm_bindgen::to_value(&params).map_err(|e| JsError::new(&e.to_string()))
}

/// Light and dark tones for `base` as `{ light, dark }` hex strings.
#[wasm_bindgen]
pub fn derive(base: &str) -> Result<JsValue, JsError> {
    let color = crate::color::hex_to_color(base).map_err(|e| JsError::new(&e.to_string()))?;
    let pair = crate::shadow::derive_shadows(color);
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&obj, &"light".into(), &JsValue::from_str(&pair.light.to_hex()));
    let _ = js_sys::Reflect::set(&obj, &"dark".into(), &JsValue::from_str(&pair.dark.to_hex()));
    Ok(obj.into())
}
