use serde::{Deserialize, Serialize};

/// A government support-program announcement as served by the backend.
///
/// The backend row carries the upstream Bizinfo column names (camel-cased
/// Korean-government API fields) plus the columns added by the region
/// classifier. Only the fields the cards render are modeled; anything else
/// the backend sends is ignored. The title is the one field a listing row
/// always has, everything else is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Announcement {
    #[serde(default)]
    pub id: Option<i64>,
    /// Upstream announcement identifier
    #[serde(rename = "pblancId", default)]
    pub pblanc_id: Option<String>,
    /// Announcement title
    #[serde(rename = "pblancNm")]
    pub pblanc_nm: String,
    /// Business summary text
    #[serde(rename = "bsnsSumryCn", default)]
    pub bsns_sumry_cn: Option<String>,
    /// Issuing institution
    #[serde(rename = "jrsdInsttNm", default)]
    pub jrsd_instt_nm: Option<String>,
    /// Executing institution
    #[serde(rename = "excInsttNm", default)]
    pub exc_instt_nm: Option<String>,
    /// Application period, preformatted by the upstream source
    #[serde(rename = "reqstBeginEndDe", default)]
    pub reqst_begin_end_de: Option<String>,
    /// Publication URL
    #[serde(rename = "pblancUrl", default)]
    pub pblanc_url: Option<String>,
    /// Support-realm category name
    #[serde(rename = "pldirSportRealmLclasCodeNm", default)]
    pub pldir_sport_realm_lclas_code_nm: Option<String>,
    #[serde(default)]
    pub region_code: Option<String>,
    /// Region name resolved by the backend join; `None` means unclassified
    #[serde(default)]
    pub region_name: Option<String>,
    /// Raw creation timestamp string, format varies by backend serializer
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Envelope for `GET /api/announcements`.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Announcement>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for `POST /admin/classify`.
#[derive(Debug, Deserialize)]
pub struct ClassifyResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for `POST /admin/collect`.
#[derive(Debug, Deserialize)]
pub struct CollectResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Option<CollectResult>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Counters reported by a finished collection job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CollectResult {
    pub total_fetched: u64,
    pub new_announcements: u64,
    pub keyword_classified: u64,
    pub ai_classified: u64,
    pub classification_failed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_deserializes_backend_row() {
        let json = r#"{
            "id": 42,
            "pblancId": "PBLN_000000000012345",
            "pblancNm": "2024년 중소기업 수출지원사업 공고",
            "bsnsSumryCn": "경남 소재 중소기업의 수출 판로 개척을 지원합니다.",
            "jrsdInsttNm": "중소벤처기업부",
            "excInsttNm": "경남테크노파크",
            "reqstBeginEndDe": "20240101 ~ 20240131",
            "pblancUrl": "https://www.bizinfo.go.kr/web/lay1/pblanc/12345",
            "pldirSportRealmLclasCodeNm": "수출",
            "region_code": "48000",
            "region_name": "경상남도",
            "created_at": "2024-01-15 10:30:00",
            "hashtags": "ignored,extra,column"
        }"#;

        let announcement: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(announcement.id, Some(42));
        assert_eq!(announcement.pblanc_nm, "2024년 중소기업 수출지원사업 공고");
        assert_eq!(announcement.region_name.as_deref(), Some("경상남도"));
        assert_eq!(
            announcement.pblanc_url.as_deref(),
            Some("https://www.bizinfo.go.kr/web/lay1/pblanc/12345")
        );
    }

    #[test]
    fn announcement_minimal_row_only_needs_title() {
        let announcement: Announcement =
            serde_json::from_str(r#"{"pblancNm": "제목"}"#).unwrap();
        assert_eq!(announcement.pblanc_nm, "제목");
        assert!(announcement.region_name.is_none());
        assert!(announcement.pblanc_url.is_none());
    }

    #[test]
    fn announcement_missing_title_is_rejected() {
        assert!(serde_json::from_str::<Announcement>(r#"{"pblancId": "x"}"#).is_err());
    }

    #[test]
    fn list_response_failure_shape() {
        let response: ListResponse =
            serde_json::from_str(r#"{"success": false, "error": "DB 연결 오류"}"#).unwrap();
        assert!(!response.success);
        assert!(response.data.is_empty());
        assert_eq!(response.count, 0);
        assert_eq!(response.error.as_deref(), Some("DB 연결 오류"));
    }

    #[test]
    fn collect_response_carries_result_counters() {
        let json = r#"{
            "success": true,
            "result": {
                "total_fetched": 50,
                "new_announcements": 12,
                "keyword_classified": 8,
                "ai_classified": 3,
                "classification_failed": 1
            }
        }"#;
        let response: CollectResponse = serde_json::from_str(json).unwrap();
        let result = response.result.unwrap();
        assert_eq!(result.total_fetched, 50);
        assert_eq!(result.new_announcements, 12);
        assert_eq!(result.classification_failed, 1);
    }
}
