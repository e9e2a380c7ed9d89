//! Tests for the data-to-markup transforms over the public API.

use gsrc_cli::alerts::{Alert, AlertLevel, AlertStack};
use gsrc_cli::models::Announcement;
use gsrc_cli::render;

fn announcement(url: Option<&str>) -> Announcement {
    Announcement {
        pblanc_nm: "2024년 청년창업 지원사업 공고".to_string(),
        bsns_sumry_cn: Some("창업 3년 이내 기업 대상 사업화 자금 지원".to_string()),
        jrsd_instt_nm: Some("중소벤처기업부".to_string()),
        reqst_begin_end_de: Some("20240201 ~ 20240228".to_string()),
        pblanc_url: url.map(|u| u.to_string()),
        created_at: Some("2024-01-20 09:00:00".to_string()),
        ..Default::default()
    }
}

#[test]
fn card_with_url_renders_linked_title() {
    let card = render::announcement_card(&announcement(Some("https://example.com/p/1")));
    assert!(card.contains(r#"<a href="https://example.com/p/1""#));
    assert!(card.contains("공고 보기"));
}

#[test]
fn card_without_url_renders_plain_title_and_no_view_link() {
    let card = render::announcement_card(&announcement(None));
    assert!(card.contains("2024년 청년창업 지원사업 공고"));
    assert!(!card.contains("<a href"));
    assert!(!card.contains("공고 보기"));
}

#[test]
fn card_unclassified_region_and_formatted_date() {
    let card = render::announcement_card(&announcement(None));
    assert!(card.contains("미분류"));
    assert!(card.contains("2024. 1. 20."));
}

#[test]
fn missing_institutions_fall_back_to_dash() {
    let mut ann = announcement(None);
    ann.jrsd_instt_nm = None;
    ann.exc_instt_nm = None;
    let card = render::announcement_card(&ann);
    assert!(card.contains("<strong>소관기관:</strong> -"));
    assert!(card.contains("<strong>수행기관:</strong> -"));
}

#[test]
fn fragment_composes_alerts_count_and_list() {
    let mut alerts = AlertStack::new();
    alerts.push(Alert::new(AlertLevel::Success, "분류가 완료되었습니다."));

    let body = render::announcement_list(&[announcement(None)]);
    let label = render::result_count_label(1);
    let fragment = render::list_fragment(&alerts, Some(&label), &body);

    assert!(fragment.contains(r#"id="alert-container""#));
    assert!(fragment.contains("alert-success"));
    assert!(fragment.contains(r#"<span id="resultCount">1개 결과</span>"#));
    assert!(fragment.contains("announcement-card"));
}

#[test]
fn error_block_escapes_message() {
    let html = render::error_block("<b>boom</b>");
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;b&gt;boom&lt;/b&gt;"));
}
