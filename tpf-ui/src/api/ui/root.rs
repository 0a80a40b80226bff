//! Root page handler - landing page

use axum::response::{Html, IntoResponse};

use super::page;

/// GET /
///
/// Landing page with links to the student form and the teacher views
pub async fn root_page() -> impl IntoResponse {
    let body = r#"    <div class="card">
        <p>ยื่น Portfolio ประกอบการสมัคร TCAS69 และตรวจสอบรายชื่อผู้สมัครที่ส่งข้อมูลแล้ว
        ข้อมูลทั้งหมดเก็บในหน่วยความจำของเซิร์ฟเวอร์เท่านั้นและหายไปเมื่อปิดโปรแกรม</p>

        <h2>เมนู</h2>
        <p>
            <a href="/student/form" class="button">ยื่น Portfolio</a>
            <a href="/teacher/member" class="button">รายชื่อผู้สมัคร</a>
        </p>
    </div>"#;

    Html(page("TCAS Portfolio", body))
}
