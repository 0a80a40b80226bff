//! Uploaded media payload serving

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::AppState;

/// GET /media/{uuid}
///
/// Serves the payload behind one media reference with its stored content
/// type. Released or unknown handles yield 404.
pub async fn serve_media(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.media.get(id).await {
        Some(media) => (
            StatusCode::OK,
            [("content-type", media.content_type)],
            media.bytes,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
