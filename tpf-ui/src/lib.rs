//! tpf-ui library - Portfolio submission service
//!
//! Serves the student submission form, handles the multipart form POST,
//! and serves the teacher-facing review views plus a small JSON API. All
//! state is in-memory and lives only for the process.

pub mod api;
pub mod error;
pub mod form;
pub mod upload;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tpf_common::{IdGenerator, MediaStore, MemberStore};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Submitted member records, insertion-ordered
    pub members: MemberStore,
    /// Uploaded image payloads behind opaque references
    pub media: MediaStore,
    /// Record identifier source
    pub ids: Arc<IdGenerator>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state around injected stores
    pub fn new(members: MemberStore, media: MediaStore) -> Self {
        Self {
            members,
            media,
            ids: Arc::new(IdGenerator::new()),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::extract::DefaultBodyLimit;
    use axum::routing::get;

    Router::new()
        // UI routes (HTML pages)
        .route("/", get(api::ui::root_page))
        .route(
            "/student/form",
            get(api::ui::form_page).post(api::submit::submit_form),
        )
        .route("/teacher/member", get(api::ui::member_list_page))
        .route("/teacher/member/:id", get(api::ui::member_detail_page))
        .route("/static/tpf-ui.css", get(api::ui::serve_ui_css))
        .route("/static/form-preview.js", get(api::ui::serve_form_preview_js))
        // Uploaded media payloads
        .route("/media/:id", get(api::media::serve_media))
        // JSON API
        .merge(api::members::member_routes())
        .merge(api::health::health_routes())
        // Image uploads exceed the 2 MB default body limit
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024))
        .with_state(state)
}
