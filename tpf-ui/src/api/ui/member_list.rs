//! Teacher-facing member listing page

use axum::{extract::State, response::Html};

use super::{html_escape, page};
use crate::AppState;
use tpf_common::MemberRecord;

/// GET /teacher/member
///
/// All submitted records as a table in insertion order, each row linking
/// to the detail view.
pub async fn member_list_page(State(state): State<AppState>) -> Html<String> {
    let members = state.members.get_all().await;
    Html(page("รายชื่อผู้สมัคร TCAS69", &render_list(&members)))
}

fn render_list(members: &[MemberRecord]) -> String {
    if members.is_empty() {
        return r#"    <div class="card">
        <h2>รายชื่อผู้สมัคร TCAS69</h2>
        <p class="muted">ยังไม่มีผู้สมัคร</p>
    </div>"#
            .to_string();
    }

    let rows: String = members.iter().map(render_row).collect();

    format!(
        r#"    <div class="card">
        <h2>รายชื่อผู้สมัคร TCAS69</h2>
        <table>
            <thead>
                <tr>
                    <th>ชื่อ-นามสกุล</th>
                    <th>GPA</th>
                    <th>โรงเรียน</th>
                    <th>สาขา</th>
                    <th>มหาวิทยาลัย</th>
                    <th class="center">รายละเอียด</th>
                </tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>
    </div>"#,
        rows = rows,
    )
}

fn render_row(member: &MemberRecord) -> String {
    format!(
        r#"                <tr>
                    <td class="name">{name}</td>
                    <td>{gpa}</td>
                    <td>{school}</td>
                    <td>{major}</td>
                    <td>{university}</td>
                    <td class="center"><a href="/teacher/member/{id}" class="pill-link">ดูข้อมูล</a></td>
                </tr>
"#,
        name = html_escape(&member.full_name()),
        gpa = member.gpa,
        school = html_escape(&member.school),
        major = html_escape(member.major.as_deref().unwrap_or("")),
        university = html_escape(member.university.as_deref().unwrap_or("")),
        id = html_escape(&member.id),
    )
}
