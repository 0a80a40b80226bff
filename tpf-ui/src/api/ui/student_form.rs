//! Student submission form page
//!
//! One renderer serves both the blank GET and the validation-failure
//! re-render: the latter passes the entered values back together with the
//! field error map. File inputs cannot be pre-filled by the browser, so
//! only text values survive a re-render.

use axum::response::Html;

use super::{html_escape, page};
use crate::form::{FieldErrors, FormInput};

/// GET /student/form
pub async fn form_page() -> Html<String> {
    Html(render_form_page(&FormInput::default(), &FieldErrors::new()))
}

/// Render the form with the given values and error messages
pub fn render_form_page(input: &FormInput, errors: &FieldErrors) -> String {
    let body = format!(
        r#"    <div class="card">
        <h2>Portfolio สำหรับสมัคร TCAS69</h2>

        <form id="portfolio-form" method="post" action="/student/form" enctype="multipart/form-data" novalidate>
            <div class="grid-2">
                {first_name}
                {last_name}
            </div>

            {address}

            <div class="grid-3">
                {phone}
                {school}
                {gpa}
            </div>

            {skills}
            {reason}

            <div class="grid-2">
                {major}
                {university}
            </div>

            {photo}
            {activities}
            {awards}
            {works}

            <div class="form-actions">
                <button type="submit" class="button">บันทึก</button>
                <button type="reset" class="button-plain">ล้าง</button>
            </div>
        </form>
    </div>
    <script src="/static/form-preview.js"></script>"#,
        first_name = text_field("ชื่อ", "firstName", &input.first_name, errors),
        last_name = text_field("นามสกุล", "lastName", &input.last_name, errors),
        address = text_field("ที่อยู่", "address", &input.address, errors),
        phone = text_field("หมายเลขโทรศัพท์", "phone", &input.phone, errors),
        school = text_field("โรงเรียน", "school", &input.school, errors),
        gpa = gpa_field(&input.gpa, errors),
        skills = text_field("ความสามารถพิเศษ", "skills", &input.skills, errors),
        reason = textarea_field("เหตุผลในการสมัคร", "reason", &input.reason),
        major = text_field("สาขาที่เลือก", "major", &input.major, errors),
        university = text_field("มหาวิทยาลัย", "university", &input.university, errors),
        photo = file_field("รูปโปรไฟล์", "photo", false),
        activities = file_field("รูปภาพกิจกรรม", "activities", true),
        awards = file_field("รูปภาพรางวัล", "awards", true),
        works = file_field("รูปภาพผลงาน", "works", true),
    );

    page("Portfolio สำหรับสมัคร TCAS69", &body)
}

fn error_line(name: &str, errors: &FieldErrors) -> String {
    match errors.get(name) {
        Some(message) => format!(
            r#"<div class="field-error">{}</div>"#,
            html_escape(message)
        ),
        None => String::new(),
    }
}

fn text_field(label: &str, name: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="form-field">
                <label for="{name}">{label}</label>
                <input type="text" id="{name}" name="{name}" placeholder="{label}" value="{value}">
                {error}
            </div>"#,
        name = name,
        label = html_escape(label),
        value = html_escape(value),
        error = error_line(name, errors),
    )
}

fn gpa_field(value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="form-field">
                <label for="gpa">GPA</label>
                <input type="number" id="gpa" name="gpa" step="0.01" placeholder="GPA" value="{value}">
                {error}
            </div>"#,
        value = html_escape(value),
        error = error_line("gpa", errors),
    )
}

fn textarea_field(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<div class="form-field">
                <label for="{name}">{label}</label>
                <textarea id="{name}" name="{name}" placeholder="{label}">{value}</textarea>
            </div>"#,
        name = name,
        label = html_escape(label),
        value = html_escape(value),
    )
}

fn file_field(label: &str, name: &str, multiple: bool) -> String {
    format!(
        r#"<div class="form-field">
                <label for="{name}">{label}</label>
                <input type="file" id="{name}" name="{name}" accept="image/*"{multiple}>
                <div class="preview-grid" id="{name}-preview"></div>
            </div>"#,
        name = name,
        label = html_escape(label),
        multiple = if multiple { " multiple" } else { "" },
    )
}
