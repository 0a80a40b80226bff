//! Server-rendered HTML pages
//!
//! Every page shares one layout with the service header and build
//! identification, and links the embedded stylesheet. User-supplied
//! strings are escaped before interpolation.

pub mod member_detail;
pub mod member_list;
pub mod root;
pub mod static_assets;
pub mod student_form;

pub use member_detail::member_detail_page;
pub use member_list::member_list_page;
pub use root::root_page;
pub use static_assets::{serve_form_preview_js, serve_ui_css};
pub use student_form::form_page;

use tpf_common::MediaRef;

/// Escape a string for interpolation into HTML text or attribute values
pub fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap page content in the shared chrome: header, navigation, build info
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="th">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/tpf-ui.css">
</head>
<body>
    <header>
        <div class="header-content">
            <div class="header-left">
                <h1>TCAS Portfolio</h1>
                <p class="subtitle">ระบบยื่น Portfolio สำหรับสมัคร TCAS69</p>
            </div>
            <div class="header-right">
                <div class="build-info-line">tpf-ui v{version}</div>
                <div class="build-info-line">{git_hash} ({profile})</div>
                <div class="build-info-line">{timestamp}</div>
            </div>
        </div>
        <nav>
            <a href="/">หน้าแรก</a>
            <a href="/student/form">ยื่น Portfolio</a>
            <a href="/teacher/member">รายชื่อผู้สมัคร</a>
        </nav>
    </header>
    <main class="container">
{body}
    </main>
</body>
</html>"#,
        title = html_escape(title),
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("GIT_HASH"),
        profile = env!("BUILD_PROFILE"),
        timestamp = env!("BUILD_TIMESTAMP"),
        body = body,
    )
}

/// Render one media group as an image gallery section.
///
/// The single rendering path for every gallery in the service; groups
/// with no references render nothing at all.
pub fn render_gallery(heading: &str, alt_prefix: &str, refs: &[MediaRef]) -> String {
    if refs.is_empty() {
        return String::new();
    }

    let images: String = refs
        .iter()
        .enumerate()
        .map(|(idx, reference)| {
            format!(
                r#"<img src="{src}" alt="{alt} {n}">"#,
                src = html_escape(reference.as_str()),
                alt = html_escape(alt_prefix),
                n = idx + 1,
            )
        })
        .collect();

    format!(
        r#"<section class="gallery-section">
    <h2>{heading}</h2>
    <div class="gallery">{images}</div>
</section>"#,
        heading = html_escape(heading),
        images = images,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_covers_markup_characters() {
        assert_eq!(
            html_escape(r#"<img src="x" onerror='alert(1)'> & more"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;alert(1)&#39;&gt; &amp; more"
        );
    }

    #[test]
    fn test_html_escape_leaves_thai_text_alone() {
        assert_eq!(html_escape("สมชาย ใจดี"), "สมชาย ใจดี");
    }

    #[test]
    fn test_empty_gallery_renders_nothing() {
        assert_eq!(render_gallery("กิจกรรมที่เคยทำ", "Activity", &[]), "");
    }

    #[test]
    fn test_page_includes_title_and_body() {
        let html = page("ทดสอบ", "<p>เนื้อหา</p>");
        assert!(html.contains("<title>ทดสอบ</title>"));
        assert!(html.contains("<p>เนื้อหา</p>"));
        assert!(html.contains("/static/tpf-ui.css"));
    }
}
