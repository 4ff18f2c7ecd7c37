/// Stylesheet for the editor page. The page itself is drawn in the current
/// base color so the preview sits on a matching surface.
pub(super) const PAGE_CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { min-height: 100%; background: var(--base); color: #44505e;
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; font-size: 14px; }

/* ── Layout ──────────────────────────────────────── */
.app {
  max-width: 960px; margin: 0 auto; padding: 32px 20px;
  display: grid; grid-template-columns: 280px 1fr; gap: 32px;
}
h1 { grid-column: 1 / -1; font-size: 18px; font-weight: 600; letter-spacing: 0.02em; }

/* ── Controls ────────────────────────────────────── */
.controls { display: flex; flex-direction: column; gap: 16px; }
.control { display: flex; flex-direction: column; gap: 6px; }
.control label { font-size: 12px; text-transform: uppercase; letter-spacing: 0.06em; opacity: 0.7; }
.control input[type=number], .control input[type=color] {
  width: 100%; height: 36px; border: none; border-radius: 10px; padding: 0 10px;
  background: var(--base); color: inherit; font: inherit;
  box-shadow: inset 3px 3px 6px var(--shadow-dark), inset -3px -3px 6px var(--shadow-light);
}
.control input[type=color] { padding: 4px; cursor: pointer; }
.actions { display: flex; flex-wrap: wrap; gap: 10px; }
.actions button {
  border: none; border-radius: 10px; padding: 10px 14px; cursor: pointer;
  background: var(--base); color: inherit; font: inherit;
  box-shadow: 4px 4px 8px var(--shadow-dark), -4px -4px 8px var(--shadow-light);
}
.actions button:active, .actions button[aria-pressed=true] {
  box-shadow: inset 3px 3px 6px var(--shadow-dark), inset -3px -3px 6px var(--shadow-light);
}

/* ── Preview ─────────────────────────────────────── */
.stage { display: flex; flex-direction: column; gap: 24px; }
.preview-wrap { display: flex; align-items: center; justify-content: center; min-height: 260px; }
#previewBox { width: 180px; height: 180px; transition: box-shadow 0.15s, border-radius 0.15s; }
#output {
  width: 100%; min-height: 240px; resize: vertical; border: none; border-radius: 12px;
  padding: 14px; background: var(--base); color: inherit;
  font-family: 'JetBrains Mono', ui-monospace, monospace; font-size: 12px; line-height: 1.6;
  box-shadow: inset 3px 3px 6px var(--shadow-dark), inset -3px -3px 6px var(--shadow-light);
}
.status { font-size: 12px; min-height: 16px; color: #b45309; }
"#;
