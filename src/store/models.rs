use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ShortLink {
    pub code: String,
    pub target_url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.is_expired(now)
    }
}

/// Read-only snapshot returned by `MappingStore::stats`.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub code: String,
    pub target_url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct LinkSummary {
    pub code: String,
    pub click_count: u64,
}

/// Aggregate view for the health endpoint.
#[derive(Debug, Clone, Copy)]
pub struct StoreSummary {
    pub active_urls: usize,
    pub total_clicks: u64,
}
