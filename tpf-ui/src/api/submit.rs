//! Submission pipeline: multipart form POST to member record
//!
//! Validation, media resolution, record construction, store append and
//! the redirect all complete within the one request.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::api::ui::student_form::render_form_page;
use crate::error::ApiResult;
use crate::form;
use crate::upload::{read_submission, FileSelection, UploadedFile};
use crate::AppState;
use tpf_common::{MediaRef, MediaStore, MemberRecord};

/// POST /student/form
///
/// On validation failure the form page is re-rendered with field-level
/// messages and the entered text values; nothing is stored. On success a
/// fresh record is appended and the client is redirected to the member
/// list, unconditionally.
pub async fn submit_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Response> {
    let parts = read_submission(multipart).await?;

    let valid = match form::validate(&parts.input) {
        Ok(valid) => valid,
        Err(errors) => {
            tracing::debug!(
                fields = ?errors.keys().collect::<Vec<_>>(),
                "submission rejected by validation"
            );
            let page = render_form_page(&parts.input, &errors);
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    // Every selected file gets a fresh reference; groups with no
    // selection resolve to absent/empty (no edit path exists)
    let profile_photo = resolve_single(&state.media, parts.photo).await;
    let activities = resolve_group(&state.media, parts.activities).await;
    let awards = resolve_group(&state.media, parts.awards).await;
    let works = resolve_group(&state.media, parts.works).await;

    let record = MemberRecord {
        id: state.ids.next_id(),
        first_name: valid.first_name,
        last_name: valid.last_name,
        address: valid.address,
        phone: valid.phone,
        school: valid.school,
        gpa: valid.gpa,
        skills: valid.skills,
        reason: valid.reason,
        major: valid.major,
        university: valid.university,
        profile_photo,
        activities,
        awards,
        works,
        submitted_at: Utc::now(),
    };

    tracing::info!(
        member_id = %record.id,
        school = %record.school,
        activities = record.activities.len(),
        awards = record.awards.len(),
        works = record.works.len(),
        "portfolio submission stored"
    );
    state.members.append(record).await;

    Ok(Redirect::to("/teacher/member").into_response())
}

/// Resolve a single-valued media group: the first chosen file, if any
async fn resolve_single(media: &MediaStore, selection: FileSelection) -> Option<MediaRef> {
    match selection {
        FileSelection::None => None,
        FileSelection::Single(file) => Some(insert_file(media, file).await),
        FileSelection::Multiple(files) => match files.into_iter().next() {
            Some(file) => Some(insert_file(media, file).await),
            None => None,
        },
    }
}

/// Resolve a multi-valued media group, preserving selection order
async fn resolve_group(media: &MediaStore, selection: FileSelection) -> Vec<MediaRef> {
    match selection {
        FileSelection::None => Vec::new(),
        FileSelection::Single(file) => vec![insert_file(media, file).await],
        FileSelection::Multiple(files) => {
            let mut refs = Vec::with_capacity(files.len());
            for file in files {
                refs.push(insert_file(media, file).await);
            }
            refs
        }
    }
}

async fn insert_file(media: &MediaStore, file: UploadedFile) -> MediaRef {
    media
        .insert(file.filename, file.content_type, file.bytes)
        .await
}
