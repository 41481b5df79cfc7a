use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://apis.data.go.kr/4050000/ypay/getYpay";
pub const DEFAULT_USER_AGENT: &str = "ypay/0.1 (merchant-lookup)";

/// Process-wide settings, loaded once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppConfig {
    /// Portal service key. Only commands that call the API need it.
    pub api_key: Option<String>,
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Rows requested per page by the region scan.
    pub page_size: u32,
    /// Hard ceiling on pages fetched by a single region scan.
    pub max_pages: u32,
    pub user_agent: String,
    pub log_level: String,
    pub regions_path: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("page_size", &self.page_size)
            .field("max_pages", &self.max_pages)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .field("regions_path", &self.regions_path)
            .finish()
    }
}
