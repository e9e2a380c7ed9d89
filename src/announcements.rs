use crate::alerts::AlertStack;
use crate::api::ApiClient;
use crate::filters::Filters;
use crate::render;
use crate::ui;
use tracing::info;

/// Outcome of a listing load: the rendered fragment and the match count.
#[derive(Debug)]
pub struct LoadedPage {
    pub html: String,
    pub count: u64,
}

/// Loads the announcement listing and renders it.
///
/// Shows the loading spinner for the duration of the request and clears it
/// before any result handling. On success renders the card list and the
/// result-count label; on a backend failure (`success: false`) or transport
/// error pushes a danger alert and renders the inline error block instead.
/// Failures are fully absorbed into the rendered page, so this never
/// returns an error.
pub async fn load_announcements(
    api: &ApiClient,
    filters: &Filters,
    alerts: &mut AlertStack,
) -> LoadedPage {
    let spinner = ui::create_spinner("공고 목록을 불러오는 중...");
    let outcome = api.list_announcements(filters).await;
    ui::clear_spinner(spinner);

    match outcome {
        Ok(response) if response.success => {
            info!(count = response.count, filters = filters.len(), "Announcements loaded");
            let body = render::announcement_list(&response.data);
            let count_label = render::result_count_label(response.count);
            LoadedPage {
                html: render::list_fragment(alerts, Some(&count_label), &body),
                count: response.count,
            }
        }
        Ok(response) => {
            let message = response.error.unwrap_or_else(|| "데이터 로드 실패".to_string());
            render_failure(&message, alerts)
        }
        Err(e) => render_failure(&e.to_string(), alerts),
    }
}

fn render_failure(message: &str, alerts: &mut AlertStack) -> LoadedPage {
    alerts.danger(format!("데이터를 불러오는데 실패했습니다: {message}"));
    let body = render::error_block(message);
    LoadedPage {
        html: render::list_fragment(alerts, None, &body),
        count: 0,
    }
}
