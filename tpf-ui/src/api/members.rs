//! Teacher-facing JSON endpoints over the record store
//!
//! Read-only: the only write path in the service is the form POST.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use tpf_common::MemberRecord;

/// GET /api/members response
#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub total: usize,
    pub members: Vec<MemberRecord>,
}

/// GET /api/members
///
/// All submitted records in insertion order.
pub async fn list_members(State(state): State<AppState>) -> Json<MemberListResponse> {
    let members = state.members.get_all().await;
    Json(MemberListResponse {
        total: members.len(),
        members,
    })
}

/// GET /api/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MemberRecord>> {
    state
        .members
        .get_by_id(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Member not found: {}", id)))
}

/// Build member API routes
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/api/members", get(list_members))
        .route("/api/members/:id", get(get_member))
}
