//! Teacher-facing member detail page

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::{html_escape, page, render_gallery};
use crate::AppState;
use tpf_common::MemberRecord;

const BACK_LINK: &str =
    r#"<a href="/teacher/member" class="back-link">&larr; กลับไปหน้ารายชื่อ</a>"#;

/// GET /teacher/member/{id}
///
/// Full record view, or a not-found page with a back link when the
/// identifier matches nothing.
pub async fn member_detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.members.get_by_id(&id).await {
        Some(member) => Html(page(&member.full_name(), &render_detail(&member))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html(page("ไม่พบข้อมูลผู้สมัคร", &render_not_found())),
        )
            .into_response(),
    }
}

fn render_not_found() -> String {
    format!(
        r#"    <div class="card">
        <p class="muted">ไม่พบข้อมูลผู้สมัคร</p>
        {BACK_LINK}
    </div>"#
    )
}

fn render_detail(member: &MemberRecord) -> String {
    let profile_photo = match &member.profile_photo {
        Some(reference) => format!(
            r#"<div class="profile-photo"><img src="{}" alt="รูปโปรไฟล์"></div>"#,
            html_escape(reference.as_str()),
        ),
        None => String::new(),
    };

    format!(
        r#"    <div class="card">
        {BACK_LINK}

        <div class="detail-layout">
            {profile_photo}
            <div class="detail-main">
                <h2>{name}</h2>

                <div class="grid-2">
                    {school}
                    {gpa}
                    {major}
                    {university}
                </div>

                {address}
                {phone}
                {skills}
                {reason}
                {submitted_at}
            </div>
        </div>

        {activities}
        {awards}
        {works}
    </div>"#,
        profile_photo = profile_photo,
        name = html_escape(&member.full_name()),
        school = detail_field("โรงเรียน", &member.school),
        gpa = detail_field("GPA", &member.gpa.to_string()),
        major = detail_field("สาขาที่เลือก", member.major.as_deref().unwrap_or("")),
        university = detail_field("มหาวิทยาลัย", member.university.as_deref().unwrap_or("")),
        address = detail_field("ที่อยู่", member.address.as_deref().unwrap_or("")),
        phone = detail_field("เบอร์โทรศัพท์", &member.phone),
        skills = detail_field("ความสามารถพิเศษ", member.skills.as_deref().unwrap_or("")),
        reason = detail_field("เหตุผลในการสมัคร", member.reason.as_deref().unwrap_or("")),
        submitted_at = detail_field(
            "วันที่ส่งข้อมูล",
            &member.submitted_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        ),
        activities = render_gallery("กิจกรรมที่เคยทำ", "Activity", &member.activities),
        awards = render_gallery("รางวัลที่เคยได้รับ", "Award", &member.awards),
        works = render_gallery("ผลงานอื่นๆ", "Work", &member.works),
    )
}

fn detail_field(label: &str, value: &str) -> String {
    format!(
        r#"<div class="detail-field">
                    <h3>{label}</h3>
                    <p>{value}</p>
                </div>"#,
        label = html_escape(label),
        value = html_escape(value),
    )
}
