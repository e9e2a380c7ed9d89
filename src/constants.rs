// Backend endpoints
pub const ANNOUNCEMENTS_ENDPOINT: &str = "/api/announcements";
pub const ADMIN_CLASSIFY_ENDPOINT: &str = "/admin/classify";
pub const ADMIN_COLLECT_ENDPOINT: &str = "/admin/collect";

// Client defaults
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_AUTO_REFRESH_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SEARCH_COUNT: usize = 20;

// Alert lifetimes (milliseconds)
pub const DEFAULT_ALERT_DURATION_MS: u64 = 5_000;
pub const COLLECT_ALERT_DURATION_MS: u64 = 10_000;

// Rendering
pub const SUMMARY_MAX_CHARS: usize = 150;
pub const UNCLASSIFIED_LABEL: &str = "미분류";

// Route literals
pub const INDEX_PATHS: &[&str] = &["/", "/index"];
pub const ADMIN_PATH_FRAGMENT: &str = "/admin";
