use crate::config::ResolvedConfig;
use crate::constants::{ADMIN_CLASSIFY_ENDPOINT, ADMIN_COLLECT_ENDPOINT, ANNOUNCEMENTS_ENDPOINT};
use crate::errors::{AppError, AppResult};
use crate::filters::Filters;
use crate::models::{ClassifyResponse, CollectResponse, ListResponse};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Thin wrapper around `reqwest::Client` bound to the backend base URL.
///
/// Every request carries a JSON content-type header; any non-2xx response
/// fails with `HttpError` carrying the status code, and a 2xx body is parsed
/// into the caller's type. Callers surface failures as user alerts, never
/// silently.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ResolvedConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Resolves an endpoint path against the base URL and appends the filter
    /// map as query parameters.
    fn endpoint(&self, path: &str, query: &Filters) -> AppResult<Url> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET `path?query` and parse the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &Filters) -> AppResult<T> {
        let url = self.endpoint(path, query)?;
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// POST a JSON `body` to `path` and parse the JSON response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let url = self.endpoint(path, &Filters::new())?;
        debug!(url = %url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        Self::parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpError {
                status: status.as_u16(),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ParseError(format!("Invalid JSON response: {e}")))
    }

    /// `GET /api/announcements?<filters>`
    pub async fn list_announcements(&self, filters: &Filters) -> AppResult<ListResponse> {
        self.get_json(ANNOUNCEMENTS_ENDPOINT, filters).await
    }

    /// `POST /admin/classify` with `{announcement_id, region_code}`
    pub async fn classify(
        &self,
        announcement_id: i64,
        region_code: &str,
    ) -> AppResult<ClassifyResponse> {
        let body = serde_json::json!({
            "announcement_id": announcement_id,
            "region_code": region_code,
        });
        self.post_json(ADMIN_CLASSIFY_ENDPOINT, &body).await
    }

    /// `POST /admin/collect` with `{search_cnt}`
    pub async fn collect(&self, search_cnt: usize) -> AppResult<CollectResponse> {
        let body = serde_json::json!({ "search_cnt": search_cnt });
        self.post_json(ADMIN_COLLECT_ENDPOINT, &body).await
    }
}
