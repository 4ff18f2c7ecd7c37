use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use notify::{Event, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use tower_livereload::LiveReloadLayer;

use crate::config::Config;
use crate::editor::{Editor, Rendered};

mod css;
mod inline_js;
mod page;
mod util;

struct PreviewState {
    config: Config,
}

type SharedState = Arc<Mutex<PreviewState>>;

/// Start the live-preview server.
///
/// When `config_path` is set the file is watched; edits are reloaded and
/// connected pages refresh.
pub async fn run_preview_server(config: Config, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let addr = config.server.addr();
    let state = Arc::new(Mutex::new(PreviewState { config }));

    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();

    let _watcher = match &config_path {
        Some(path) => {
            let path = path.canonicalize().unwrap_or_else(|_| path.clone());
            let watch_state = state.clone();
            let watch_path = path.clone();
            let mut watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
                let Ok(event) = res else { return };
                if !event.kind.is_modify() || !event.paths.iter().any(|p| p.ends_with(&watch_path)) {
                    return;
                }
                if reload_config(&watch_state, &watch_path) {
                    reloader.reload();
                }
            })
            .context("cannot create config watcher")?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            watcher
                .watch(dir, RecursiveMode::NonRecursive)
                .with_context(|| format!("cannot watch '{}'", dir.display()))?;
            Some(watcher)
        }
        None => None,
    };

    let app = build_router(state).layer(livereload);

    eprintln!("neumorph preview server");
    if let Some(path) = &config_path {
        eprintln!("  config:  {}", path.display());
    }
    eprintln!("  editor:  http://{addr}/");
    eprintln!("  api:     http://{addr}/api/render");
    eprintln!("  css:     http://{addr}/export/css");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Re-read the config file into `state`. On a load error the previous
/// config stays in place and `false` is returned.
fn reload_config(state: &SharedState, path: &Path) -> bool {
    match Config::load(path) {
        Ok(config) => {
            state.lock().unwrap_or_else(PoisonError::into_inner).config = config;
            tracing::info!(path = %path.display(), "config reloaded");
            true
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "keeping previous config");
            false
        }
    }
}

fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(serve_editor))
        .route("/api/render", get(serve_render_query).post(serve_render_json))
        .route("/api/random", get(serve_random))
        .route("/export/css", get(serve_export_css))
        .with_state(state)
}

// ── Render helper ─────────────────────────────────────────────────────

/// A fresh editor seeded from the current config.
fn editor_from_config(state: &SharedState) -> Result<Editor, ApiError> {
    let config = state.lock().unwrap_or_else(PoisonError::into_inner).config.clone();
    let params = config
        .effect_params()
        .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(Editor::new(params).with_options(config.snippet))
}

/// Partial parameter set; anything missing comes from the config defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderRequest {
    base: Option<String>,
    offset: Option<u32>,
    blur: Option<u32>,
    radius: Option<u32>,
    inset: Option<bool>,
}

fn render_request(state: &SharedState, req: RenderRequest) -> Result<Json<Rendered>, ApiError> {
    let mut editor = editor_from_config(state)?;
    if let Some(base) = &req.base {
        editor
            .set_base_hex(base)
            .map_err(|e| ApiError::bad_request(format!("invalid base color '{base}': {e}")))?;
    }
    if let Some(px) = req.offset {
        editor.set_offset(px);
    }
    if let Some(px) = req.blur {
        editor.set_blur(px);
    }
    if let Some(px) = req.radius {
        editor.set_radius(px);
    }
    if let Some(inset) = req.inset {
        editor.set_inset(inset);
    }
    Ok(Json(editor.render()))
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: String) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message }
    }

    fn internal(message: String) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if self.status.is_server_error() {
            tracing::error!(error = %self.message, "request failed");
        }
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

// ── Route handlers ────────────────────────────────────────────────────

async fn serve_editor(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    let editor = editor_from_config(&state)?;
    Ok(Html(page::build_editor_page(&editor.render())))
}

async fn serve_render_query(
    State(state): State<SharedState>,
    Query(req): Query<RenderRequest>,
) -> Result<Json<Rendered>, ApiError> {
    render_request(&state, req)
}

async fn serve_render_json(
    State(state): State<SharedState>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<Rendered>, ApiError> {
    render_request(&state, req)
}

async fn serve_random(State(state): State<SharedState>) -> Result<Json<Rendered>, ApiError> {
    let mut editor = editor_from_config(&state)?;
    editor.randomize(&mut rand::rng());
    Ok(Json(editor.render()))
}

async fn serve_export_css(
    State(state): State<SharedState>,
) -> Result<([(header::HeaderName, &'static str); 2], String), ApiError> {
    let editor = editor_from_config(&state)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"neumorph.css\""),
        ],
        editor.render().css,
    ))
}
