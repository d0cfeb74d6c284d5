use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use tracing::trace;

use crate::api::types::{ApiHealthResponse, HealthStatistics, ServiceHealthResponse};
use crate::store::MappingStore;
use crate::utils::format_duration_human;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// Health Service
///
/// Calls the store's summary directly; health checks stay simple and fast,
/// with no business logic in between.
pub struct HealthService;

impl HealthService {
    /// GET `/` - liveness payload with service identity and uptime.
    pub async fn health_check(app_start_time: web::Data<AppStartTime>) -> impl Responder {
        trace!("Received health check request");

        let now = chrono::Utc::now();
        let uptime = format_duration_human(app_start_time.start_datetime, now);

        HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(ServiceHealthResponse {
                status: "healthy".to_string(),
                service: "URL Shortener API".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                uptime,
            })
    }

    /// GET `/api/health` - store statistics (live URL count, total clicks).
    pub async fn api_health(store: web::Data<Arc<MappingStore>>) -> impl Responder {
        trace!("Received API health check request");

        let summary = store.summary();

        HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(ApiHealthResponse {
                status: "ok".to_string(),
                message: "URL Shortener API is running".to_string(),
                statistics: HealthStatistics {
                    active_urls: summary.active_urls,
                    total_clicks: summary.total_clicks,
                },
            })
    }
}
