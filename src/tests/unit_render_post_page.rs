use crate::domain::{ContentSection, Post};
use crate::readtime::estimate_minutes;
use crate::render::{format_publication_date, loading_page, post_page};
use crate::richtext::RichTextBlock;
use crate::tests::integration_content_service::sample_post;

// the locale-formatted publication date, straight from the testable
// properties of the page: 2021-01-01T00:00:00Z renders as "01 jan 2021"
#[test]
fn test_publication_date_is_locale_formatted() {
    let date = chrono::DateTime::parse_from_rfc3339("2021-01-01T00:00:00Z").unwrap();
    assert_eq!(format_publication_date(&date), "01 jan 2021");

    let date = chrono::DateTime::parse_from_rfc3339("2021-03-15T18:30:00Z").unwrap();
    assert_eq!(format_publication_date(&date), "15 mar 2021");
}

#[test]
fn test_post_page_renders_all_metadata() {
    let post = sample_post("como-utilizar-hooks");
    let html = post_page(&post, estimate_minutes(&post.content)).into_string();

    assert!(html.contains("<h1>Como utilizar Hooks</h1>"));
    assert!(html.contains(r#"src="https://images.example.com/banner.png""#));
    assert!(html.contains("<time>01 jan 2021</time>"));
    assert!(html.contains("Joseph Oliveira"));
    assert!(html.contains("1 min"));
    assert!(html.contains("<h3>Proin et varius</h3>"));
    assert!(html.contains("<p>Nulla auctor sit amet quam vitae blandit.</p>"));
}

// section order on the page must follow the document's reading order
#[test]
fn test_sections_render_in_document_order() {
    let mut post = sample_post("ordenado");
    post.content = vec![
        ContentSection {
            heading: "Primeira".to_string(),
            body: vec![RichTextBlock::paragraph("a")],
        },
        ContentSection {
            heading: "Segunda".to_string(),
            body: vec![RichTextBlock::paragraph("b")],
        },
    ];

    let html = post_page(&post, 1).into_string();
    let first = html.find("<h3>Primeira</h3>").unwrap();
    let second = html.find("<h3>Segunda</h3>").unwrap();
    assert!(first < second);
}

// a post that was never published just omits the <time> element
#[test]
fn test_dateless_post_omits_time_element() {
    let mut post = sample_post("sem-data");
    post.first_publication_date = None;

    let html = post_page(&post, 1).into_string();
    assert!(!html.contains("<time>"));
    assert!(html.contains("<h1>Como utilizar Hooks</h1>"));
}

// titles are author-controlled CMS data and must not inject markup
#[test]
fn test_title_is_escaped() {
    let mut post = sample_post("injetado");
    post.title = "<script>alert(1)</script>".to_string();

    let html = post_page(&post, 1).into_string();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_loading_page_shows_indicator_and_refreshes() {
    let html = loading_page().into_string();

    assert!(html.contains("Carregando..."));
    assert!(html.contains(r#"http-equiv="refresh""#));
}
