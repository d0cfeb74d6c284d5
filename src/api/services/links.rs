//! Link management API: shorten, stats, listing.

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{debug, error, info, trace};

use crate::api::short_url_for;
use crate::api::types::{
    ErrorResponse, ShortenRequest, ShortenResponse, StatsResponse, UrlListEntry, UrlListResponse,
};
use crate::errors::LinkletError;
use crate::store::MappingStore;
use crate::utils::{validate_url, validation_error_message};

pub struct LinkService;

impl LinkService {
    /// POST `/api/shorten` - create a new short link.
    pub async fn shorten(
        req: HttpRequest,
        payload: web::Json<ShortenRequest>,
        store: web::Data<Arc<MappingStore>>,
    ) -> impl Responder {
        let original_url = payload.url.trim().to_string();

        if let Err(e) = validate_url(&original_url) {
            debug!("Rejected URL {:?}: {}", original_url, e);
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new(validation_error_message(&e)));
        }

        let ttl = payload.ttl_hours.map(hours_to_duration);

        match store.insert(&original_url, ttl) {
            Ok(link) => {
                info!("Created short link {} -> {}", link.code, link.target_url);

                HttpResponse::Created().json(ShortenResponse {
                    short_url: short_url_for(&req, &link.code),
                    short_code: link.code,
                    original_url: link.target_url,
                    expires_at: link.expires_at.map(|exp| exp.to_rfc3339()),
                })
            }
            Err(e) => {
                // Only CodeSpaceExhausted can come out of insert
                error!("Failed to create short link: {}", e);
                HttpResponse::InternalServerError().json(ErrorResponse::new(e.message()))
            }
        }
    }

    /// GET `/api/stats/{code}` - click statistics for one short link.
    pub async fn stats(
        path: web::Path<String>,
        store: web::Data<Arc<MappingStore>>,
    ) -> impl Responder {
        let code = path.into_inner();
        trace!("Stats requested for: {}", code);

        match store.stats(&code) {
            Ok(stats) => HttpResponse::Ok().json(StatsResponse {
                short_code: stats.code,
                original_url: stats.target_url,
                clicks: stats.click_count,
                created_at: stats.created_at.to_rfc3339(),
                expires_at: stats.expires_at.map(|exp| exp.to_rfc3339()),
                is_active: stats.is_active,
            }),
            Err(LinkletError::NotFound(_)) => {
                debug!("Stats for unknown short code: {}", code);
                HttpResponse::NotFound().json(ErrorResponse::new("Short code not found"))
            }
            Err(e) => {
                error!("Stats lookup failed for {}: {}", code, e);
                HttpResponse::InternalServerError().json(ErrorResponse::new(e.message()))
            }
        }
    }

    /// GET `/api/urls` - snapshot of all live short links.
    pub async fn list_urls(
        req: HttpRequest,
        store: web::Data<Arc<MappingStore>>,
    ) -> impl Responder {
        let links = store.list();
        trace!("Listing {} live links", links.len());

        let urls: Vec<UrlListEntry> = links
            .into_iter()
            .map(|link| UrlListEntry {
                short_url: short_url_for(&req, &link.code),
                short_code: link.code,
                clicks: link.click_count,
            })
            .collect();

        HttpResponse::Ok().json(UrlListResponse {
            count: urls.len(),
            urls,
        })
    }
}

/// Convert a fractional hour count into a signed duration. Millisecond
/// precision is plenty for TTLs; negative input stays negative so the record
/// is born expired. Values beyond the representable range clamp to the
/// duration bounds.
fn hours_to_duration(hours: f64) -> chrono::Duration {
    let millis = (hours * 3_600_000.0) as i64;
    chrono::Duration::try_milliseconds(millis).unwrap_or(if millis < 0 {
        chrono::Duration::MIN
    } else {
        chrono::Duration::MAX
    })
}

/// Link API 路由配置
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/health", web::get().to(super::HealthService::api_health))
        .route("/shorten", web::post().to(LinkService::shorten))
        .route("/stats/{code}", web::get().to(LinkService::stats))
        .route("/urls", web::get().to(LinkService::list_urls))
}
