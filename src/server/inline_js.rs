use crate::editor::Rendered;

use super::util::script_json;

const COPY_LABEL: &str = "Copy CSS";
const COPIED_LABEL: &str = "Copied \u{2713}";
const COPIED_RESET_MS: u32 = 900;

/// Client script for the editor page.
///
/// All color math happens server-side through `/api/render` and
/// `/api/random`; the script only moves values between the controls and the
/// API and applies the returned styles.
pub(super) fn build_inline_js(initial: &Rendered) -> String {
    let state = script_json(initial);
    format!(
        r#"<script>
(function() {{
  const initial = {state};
  const COPY_LABEL = {copy_label};
  const COPIED_LABEL = {copied_label};

  const baseColor = document.getElementById('baseColor');
  const offsetEl  = document.getElementById('offset');
  const blurEl    = document.getElementById('blur');
  const radiusEl  = document.getElementById('radius');
  const preview   = document.getElementById('previewBox');
  const output    = document.getElementById('output');
  const status    = document.getElementById('status');
  const copyBtn   = document.getElementById('copyBtn');
  const insetBtn  = document.getElementById('toggleInsetBtn');
  const randomBtn = document.getElementById('randomBtn');

  let inset = initial.params.inset;
  let pending = 0;

  function showInset() {{
    insetBtn.setAttribute('aria-pressed', String(inset));
    insetBtn.textContent = 'Inset: ' + (inset ? 'ON' : 'OFF');
  }}

  function apply(rendered) {{
    const root = document.documentElement.style;
    for (const [name, value] of rendered.preview.variables) {{
      root.setProperty(name, value);
    }}
    preview.style.background = rendered.preview.background;
    preview.style.borderRadius = rendered.preview.border_radius;
    preview.style.boxShadow = rendered.preview.box_shadow;
    output.value = rendered.css;
    inset = rendered.params.inset;
    showInset();
  }}

  function showControls(params) {{
    baseColor.value = params.base;
    offsetEl.value = params.offset;
    blurEl.value = params.blur;
    radiusEl.value = params.radius;
  }}

  async function request(url, options) {{
    const res = await fetch(url, options);
    const body = await res.json();
    if (!res.ok) throw new Error(body.error || res.statusText);
    return body;
  }}

  async function update() {{
    const ticket = ++pending;
    const query = new URLSearchParams({{
      base: baseColor.value,
      offset: offsetEl.value,
      blur: blurEl.value,
      radius: radiusEl.value,
      inset: String(inset),
    }});
    try {{
      const rendered = await request('/api/render?' + query.toString());
      if (ticket !== pending) return;
      status.textContent = '';
      apply(rendered);
    }} catch (e) {{
      if (ticket === pending) status.textContent = e.message;
    }}
  }}

  function flashCopied() {{
    copyBtn.textContent = COPIED_LABEL;
    setTimeout(() => copyBtn.textContent = COPY_LABEL, {reset_ms});
  }}

  async function copyCss() {{
    const text = output.value || '';
    if (!text) return;
    try {{
      await navigator.clipboard.writeText(text);
      flashCopied();
    }} catch (_) {{
      output.select();
      if (document.execCommand('copy')) {{
        flashCopied();
      }} else {{
        console.warn('neumorph: copy failed');
      }}
    }}
  }}

  function toggleInset() {{
    inset = !inset;
    showInset();
    update();
  }}

  async function randomize() {{
    try {{
      const rendered = await request('/api/random');
      ++pending;
      showControls(rendered.params);
      apply(rendered);
    }} catch (e) {{
      status.textContent = e.message;
    }}
  }}

  [baseColor, offsetEl, blurEl, radiusEl].forEach(el => {{
    el.addEventListener('input', update);
    el.addEventListener('change', update);
  }});
  copyBtn.addEventListener('click', copyCss);
  insetBtn.addEventListener('click', toggleInset);
  randomBtn.addEventListener('click', randomize);

  showControls(initial.params);
  apply(initial);
}})();
</script>"#,
        state = state,
        copy_label = script_json(&COPY_LABEL),
        copied_label = script_json(&COPIED_LABEL),
        reset_ms = COPIED_RESET_MS,
    )
}

pub(super) fn copy_label() -> &'static str {
    COPY_LABEL
}
