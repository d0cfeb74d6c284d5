use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct ShortenRequest {
    pub url: String,
    /// Optional time-to-live, as a fractional number of hours.
    pub ttl_hours: Option<f64>,
}

#[derive(Serialize, Debug)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub expires_at: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub clicks: u64,
    pub created_at: String,
    pub expires_at: Option<String>,
    pub is_active: bool,
}

#[derive(Serialize, Debug)]
pub struct UrlListEntry {
    pub short_code: String,
    pub short_url: String,
    pub clicks: u64,
}

#[derive(Serialize, Debug)]
pub struct UrlListResponse {
    pub count: usize,
    pub urls: Vec<UrlListEntry>,
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<T: Into<String>>(msg: T) -> Self {
        Self { error: msg.into() }
    }
}

#[derive(Serialize, Debug)]
pub struct ServiceHealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub uptime: String,
}

#[derive(Serialize, Debug)]
pub struct HealthStatistics {
    pub active_urls: usize,
    pub total_clicks: u64,
}

#[derive(Serialize, Debug)]
pub struct ApiHealthResponse {
    pub status: String,
    pub message: String,
    pub statistics: HealthStatistics,
}
