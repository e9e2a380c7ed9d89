use crate::alerts::{Alert, AlertStack};
use crate::constants::{SUMMARY_MAX_CHARS, UNCLASSIFIED_LABEL};
use crate::models::Announcement;
use crate::utils::{format_date, format_number, truncate_text};

/// Escapes the characters HTML treats specially. Applied to every
/// announcement field before interpolation; the backend data is untrusted.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders one announcement as a Bootstrap card.
///
/// The title becomes a link and the `공고 보기` button appears only when the
/// announcement has a publication URL; the category badge only when the
/// category field exists; the region badge falls back to `미분류`.
pub fn announcement_card(announcement: &Announcement) -> String {
    let region_name = escape_html(
        announcement
            .region_name
            .as_deref()
            .unwrap_or(UNCLASSIFIED_LABEL),
    );
    let created_date = format_date(announcement.created_at.as_deref());
    let summary = escape_html(&truncate_text(
        announcement.bsns_sumry_cn.as_deref().unwrap_or(""),
        SUMMARY_MAX_CHARS,
    ));
    let title = escape_html(&announcement.pblanc_nm);
    let jrsd = escape_html(announcement.jrsd_instt_nm.as_deref().unwrap_or("-"));
    let exc = escape_html(announcement.exc_instt_nm.as_deref().unwrap_or("-"));
    let period = escape_html(announcement.reqst_begin_end_de.as_deref().unwrap_or("-"));

    let title_html = match announcement.pblanc_url.as_deref() {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-decoration-none">{title}</a>"#,
            escape_html(url)
        ),
        None => title,
    };

    let category_badge = match announcement.pldir_sport_realm_lclas_code_nm.as_deref() {
        Some(category) => format!(
            r#"<span class="badge bg-secondary mb-2">{}</span><br>"#,
            escape_html(category)
        ),
        None => String::new(),
    };

    let view_button = match announcement.pblanc_url.as_deref() {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="btn btn-outline-primary btn-sm">공고 보기</a>"#,
            escape_html(url)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="card mb-3 announcement-card fade-in">
  <div class="card-body">
    <div class="row">
      <div class="col-md-8">
        <h5 class="card-title">{title_html}</h5>
        <p class="card-text text-muted small mb-2 text-truncate-2">{summary}</p>
        <div class="row small text-muted">
          <div class="col-sm-6"><strong>소관기관:</strong> {jrsd}</div>
          <div class="col-sm-6"><strong>수행기관:</strong> {exc}</div>
          <div class="col-sm-6 mt-1"><strong>신청기간:</strong> {period}</div>
          <div class="col-sm-6 mt-1"><strong>등록일:</strong> {created_date}</div>
        </div>
      </div>
      <div class="col-md-4 text-md-end">
        <span class="badge bg-primary mb-2">{region_name}</span><br>
        {category_badge}
        <div class="mt-2">{view_button}</div>
      </div>
    </div>
  </div>
</div>
"#
    )
}

/// Renders the announcement list, or the empty-state placeholder when no
/// announcement matched the filters.
pub fn announcement_list(announcements: &[Announcement]) -> String {
    if announcements.is_empty() {
        return r#"<div class="alert alert-warning">검색 조건에 맞는 지원사업이 없습니다.</div>
"#
        .to_string();
    }
    announcements.iter().map(announcement_card).collect()
}

/// Inline error notice that replaces the list content on a failed load.
pub fn error_block(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger">{}</div>
"#,
        escape_html(message)
    )
}

/// `"1,234개 결과"` label for the result-count element.
pub fn result_count_label(count: u64) -> String {
    format!("{}개 결과", format_number(count))
}

/// A single dismissible alert banner. Alert messages are assembled locally
/// (and may carry `<br>` markup, e.g. the collection summary), so they are
/// rendered verbatim.
pub fn alert_html(alert: &Alert) -> String {
    format!(
        r#"<div class="alert alert-{} alert-dismissible fade show" role="alert">{}<button type="button" class="btn-close" data-bs-dismiss="alert"></button></div>
"#,
        alert.level.css_class(),
        alert.message
    )
}

/// The `alert-container` region holding all current alerts.
pub fn alert_container(alerts: &AlertStack) -> String {
    let banners: String = alerts.iter().map(alert_html).collect();
    format!(
        r#"<div id="alert-container" class="container mt-3">
{banners}</div>
"#
    )
}

/// Assembles the full listing fragment: alerts, result count, and the list
/// body under the element ids the page templates expect.
pub fn list_fragment(alerts: &AlertStack, count_label: Option<&str>, body: &str) -> String {
    let count_html = match count_label {
        Some(label) => format!(r#"<span id="resultCount">{}</span>"#, escape_html(label)),
        None => r#"<span id="resultCount"></span>"#.to_string(),
    };
    format!(
        r#"{}{count_html}
<div id="announcementsList">
{body}</div>
"#,
        alert_container(alerts)
    )
}
