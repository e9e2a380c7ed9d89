use crate::alerts::{Alert, AlertLevel, AlertStack};
use crate::announcements;
use crate::api::ApiClient;
use crate::constants::COLLECT_ALERT_DURATION_MS;
use crate::errors::AppResult;
use crate::filters::Filters;
use crate::models::CollectResult;
use crate::ui;
use crate::utils::format_number;
use std::path::Path;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Manually classifies one announcement into a region.
///
/// Returns whether the classification succeeded; either way the outcome is
/// surfaced as an alert.
pub async fn classify_announcement(
    api: &ApiClient,
    announcement_id: i64,
    region_code: &str,
    alerts: &mut AlertStack,
) -> bool {
    match api.classify(announcement_id, region_code).await {
        Ok(response) if response.success => {
            alerts.success("분류가 완료되었습니다.");
            true
        }
        Ok(response) => {
            let message = response.error.unwrap_or_else(|| "분류 실패".to_string());
            alerts.danger(format!("분류 중 오류가 발생했습니다: {message}"));
            false
        }
        Err(e) => {
            alerts.danger(format!("분류 중 오류가 발생했습니다: {e}"));
            false
        }
    }
}

/// Triggers a backend collection job for `search_cnt` announcements.
///
/// Returns the result counters exactly as received, or `None` on any
/// failure. A successful run posts a long-lived multi-line summary alert.
pub async fn collect_data(
    api: &ApiClient,
    search_cnt: usize,
    alerts: &mut AlertStack,
) -> Option<CollectResult> {
    alerts.info("데이터 수집을 시작합니다...");

    match api.collect(search_cnt).await {
        Ok(response) if response.success => match response.result {
            Some(result) => {
                alerts.push(
                    Alert::new(AlertLevel::Success, collect_summary(&result)).with_duration(Some(
                        Duration::from_millis(COLLECT_ALERT_DURATION_MS),
                    )),
                );
                Some(result)
            }
            None => {
                alerts.danger("데이터 수집 중 오류가 발생했습니다: 데이터 수집 실패");
                None
            }
        },
        Ok(response) => {
            let message = response
                .error
                .unwrap_or_else(|| "데이터 수집 실패".to_string());
            alerts.danger(format!("데이터 수집 중 오류가 발생했습니다: {message}"));
            None
        }
        Err(e) => {
            alerts.danger(format!("데이터 수집 중 오류가 발생했습니다: {e}"));
            None
        }
    }
}

/// Human-readable summary of a finished collection job.
pub fn collect_summary(result: &CollectResult) -> String {
    format!(
        "수집 완료!<br>• 총 수집: {}개<br>• 신규: {}개<br>• 키워드 분류: {}개<br>• AI 분류: {}개<br>• 분류 실패: {}개",
        format_number(result.total_fetched),
        format_number(result.new_announcements),
        format_number(result.keyword_classified),
        format_number(result.ai_classified),
        format_number(result.classification_failed),
    )
}

/// Periodic dashboard refresh: re-loads the listing on a fixed interval and
/// rewrites the output, the CLI analogue of the admin page auto-reload.
///
/// Missed ticks are delayed rather than bursted, so at most one request is
/// ever in flight. Ticks are skipped while `is_visible` reports false
/// (backgrounded output). Ctrl-C cancels the loop cleanly.
pub async fn run_auto_refresh(
    api: &ApiClient,
    filters: &Filters,
    refresh_interval: Duration,
    output: Option<&Path>,
    is_visible: impl Fn() -> bool,
) -> AppResult<()> {
    let mut ticker = tokio::time::interval(refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        interval_secs = refresh_interval.as_secs(),
        "Starting dashboard auto-refresh, Ctrl-C to stop"
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Auto-refresh stopped");
                return Ok(());
            }
            _ = ticker.tick() => {
                if !is_visible() {
                    info!("Output not visible, skipping refresh");
                    continue;
                }
                let mut alerts = AlertStack::new();
                let page = announcements::load_announcements(api, filters, &mut alerts).await;
                ui::write_fragment(output, &page.html)?;
            }
        }
    }
}
