//! In-memory mapping store
//!
//! The single shared table mapping short codes to [`ShortLink`] records.
//! Every public operation takes the write lock once, runs the expiry sweep
//! under that guard, then does its own work under the same guard. Callers
//! therefore never observe an expired record as live, and insert / resolve /
//! sweep are atomic with respect to one another.
//!
//! The eager per-request sweep is a deliberate simplicity trade-off over a
//! background cleanup task; the table is expected to hold tens of thousands
//! of records at most.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::errors::{LinkletError, Result};
use crate::utils::generate_random_code;

pub mod models;

pub use models::{LinkStats, LinkSummary, ShortLink, StoreSummary};

/// Fixed length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Hard ceiling on collision retries during insert. With 62^6 possible codes
/// this is never reached in practice; exceeding it means the code space is
/// effectively full.
const MAX_CODE_ATTEMPTS: usize = 64;

#[derive(Default)]
pub struct MappingStore {
    links: RwLock<HashMap<String, ShortLink>>,
}

impl MappingStore {
    pub fn new() -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
        }
    }

    /// Create a record for `target_url` under a fresh unique code.
    ///
    /// The caller is responsible for URL validation. A zero or negative TTL
    /// yields a record that is already expired and disappears on the next
    /// sweep.
    pub fn insert(&self, target_url: &str, ttl: Option<Duration>) -> Result<ShortLink> {
        let now = Utc::now();
        let mut links = self.links.write();
        Self::sweep_table(&mut links, now);

        let mut code = generate_random_code(CODE_LENGTH);
        let mut attempts = 1;
        while links.contains_key(&code) {
            if attempts >= MAX_CODE_ATTEMPTS {
                return Err(LinkletError::code_space_exhausted(format!(
                    "no free short code after {} attempts",
                    attempts
                )));
            }
            code = generate_random_code(CODE_LENGTH);
            attempts += 1;
        }

        let link = ShortLink {
            code: code.clone(),
            target_url: target_url.to_string(),
            click_count: 0,
            created_at: now,
            // Saturate instead of overflowing on absurdly large TTLs, in
            // either direction
            expires_at: ttl.map(|ttl| {
                now.checked_add_signed(ttl).unwrap_or(if ttl < Duration::zero() {
                    DateTime::<Utc>::MIN_UTC
                } else {
                    DateTime::<Utc>::MAX_UTC
                })
            }),
        };

        links.insert(code, link.clone());
        debug!("Inserted short link: {} -> {}", link.code, link.target_url);

        Ok(link)
    }

    /// Look up `code` and increment its click counter.
    ///
    /// Returns the target URL, or `NotFound` if the code is unknown or
    /// expired. The increment happens under the same guard as the lookup, so
    /// N concurrent resolves add exactly N clicks.
    pub fn resolve(&self, code: &str) -> Result<String> {
        let now = Utc::now();
        let mut links = self.links.write();
        Self::sweep_table(&mut links, now);

        match links.get_mut(code) {
            Some(link) => {
                link.click_count += 1;
                trace!("Resolved {} (clicks: {})", code, link.click_count);
                Ok(link.target_url.clone())
            }
            None => Err(LinkletError::not_found(format!(
                "short code not found: {}",
                code
            ))),
        }
    }

    /// Read-only snapshot of a single record.
    pub fn stats(&self, code: &str) -> Result<LinkStats> {
        let now = Utc::now();
        let mut links = self.links.write();
        Self::sweep_table(&mut links, now);

        match links.get(code) {
            Some(link) => Ok(LinkStats {
                code: link.code.clone(),
                target_url: link.target_url.clone(),
                click_count: link.click_count,
                created_at: link.created_at,
                expires_at: link.expires_at,
                is_active: link.is_active(now),
            }),
            None => Err(LinkletError::not_found(format!(
                "short code not found: {}",
                code
            ))),
        }
    }

    /// Consistent snapshot of all live records. Order is not meaningful.
    pub fn list(&self) -> Vec<LinkSummary> {
        let now = Utc::now();
        let mut links = self.links.write();
        Self::sweep_table(&mut links, now);

        links
            .values()
            .map(|link| LinkSummary {
                code: link.code.clone(),
                click_count: link.click_count,
            })
            .collect()
    }

    /// Aggregate counts for the health endpoint.
    pub fn summary(&self) -> StoreSummary {
        let now = Utc::now();
        let mut links = self.links.write();
        Self::sweep_table(&mut links, now);

        StoreSummary {
            active_urls: links.len(),
            total_clicks: links.values().map(|link| link.click_count).sum(),
        }
    }

    /// Remove every record expired as of `now`; returns how many were removed.
    pub fn sweep(&self, now: DateTime<Utc>) -> usize {
        let mut links = self.links.write();
        Self::sweep_table(&mut links, now)
    }

    fn sweep_table(links: &mut HashMap<String, ShortLink>, now: DateTime<Utc>) -> usize {
        let before = links.len();
        links.retain(|_, link| !link.is_expired(now));
        let removed = before - links.len();

        if removed > 0 {
            debug!("Sweep removed {} expired link(s)", removed);
        }

        removed
    }
}
