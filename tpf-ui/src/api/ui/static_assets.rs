//! Static asset handlers
//!
//! Embeds and serves the stylesheet and the form preview script at
//! compile time.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const TPF_UI_CSS: &str = include_str!("../../../static/tpf-ui.css");
const FORM_PREVIEW_JS: &str = include_str!("../../../static/form-preview.js");

/// GET /static/tpf-ui.css
pub async fn serve_ui_css() -> Response {
    (
        StatusCode::OK,
        [("content-type", "text/css")],
        TPF_UI_CSS,
    )
        .into_response()
}

/// GET /static/form-preview.js
pub async fn serve_form_preview_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        FORM_PREVIEW_JS,
    )
        .into_response()
}
