use crate::editor::Rendered;
use crate::params::bounds;

use super::css::PAGE_CSS;
use super::inline_js::{build_inline_js, copy_label};
use super::util::html_escape;

/// The editor: controls on the left, live preview and snippet on the right.
///
/// The first paint is rendered server-side from `initial` so the page looks
/// right before the script runs.
pub(super) fn build_editor_page(initial: &Rendered) -> String {
    let p = &initial.params;
    let root_style = html_escape(&initial.preview.variables_inline());
    let preview_style = html_escape(&initial.preview.element_inline());
    let css_text = html_escape(&initial.css);
    let inline_js = build_inline_js(initial);

    format!(
        r##"<!DOCTYPE html>
<html lang="en" style="{root_style}">
<head>
<meta charset="utf-8">
<title>neumorph</title>
<style>
{css}
</style>
</head>
<body>
<div class="app">
  <h1>neumorph</h1>
  <div class="controls">
    <div class="control">
      <label for="baseColor">Base color</label>
      <input type="color" id="baseColor" value="{base}">
    </div>
    <div class="control">
      <label for="offset">Offset (px)</label>
      <input type="number" id="offset" value="{offset}" min="{offset_min}" max="{offset_max}">
    </div>
    <div class="control">
      <label for="blur">Blur (px)</label>
      <input type="number" id="blur" value="{blur}" min="{blur_min}" max="{blur_max}">
    </div>
    <div class="control">
      <label for="radius">Radius (px)</label>
      <input type="number" id="radius" value="{radius}" min="{radius_min}" max="{radius_max}">
    </div>
    <div class="actions">
      <button id="copyBtn" type="button">{copy_label}</button>
      <button id="toggleInsetBtn" type="button" aria-pressed="{inset}">Inset: {inset_label}</button>
      <button id="randomBtn" type="button">Randomize</button>
    </div>
    <div class="status" id="status"></div>
  </div>
  <div class="stage">
    <div class="preview-wrap">
      <div id="previewBox" style="{preview_style}"></div>
    </div>
    <textarea id="output" readonly spellcheck="false">{css_text}</textarea>
  </div>
</div>
{inline_js}
</body>
</html>"##,
        root_style = root_style,
        css = PAGE_CSS,
        base = p.base,
        offset = p.offset_px,
        offset_min = bounds::OFFSET.start(),
        offset_max = bounds::OFFSET.end(),
        blur = p.blur_px,
        blur_min = bounds::BLUR.start(),
        blur_max = bounds::BLUR.end(),
        radius = p.radius_px,
        radius_min = bounds::RADIUS.start(),
        radius_max = bounds::RADIUS.end(),
        copy_label = copy_label(),
        inset = p.inset,
        inset_label = if p.inset { "ON" } else { "OFF" },
        preview_style = preview_style,
        css_text = css_text,
        inline_js = inline_js,
    )
}
