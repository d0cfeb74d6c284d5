use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{debug, trace};

use crate::api::types::ErrorResponse;
use crate::store::MappingStore;
use crate::utils::is_valid_short_code;

pub struct RedirectService;

impl RedirectService {
    /// GET `/{code}` - redirect to the target URL, counting the click.
    pub async fn handle_redirect(
        path: web::Path<String>,
        store: web::Data<Arc<MappingStore>>,
    ) -> impl Responder {
        let captured_path = path.into_inner();

        if !is_valid_short_code(&captured_path) {
            // 非法短码，直接 404，不进 store
            trace!("Invalid short code rejected: {}", &captured_path);
            return Self::not_found_response();
        }

        match store.resolve(&captured_path) {
            Ok(target_url) => {
                trace!("Redirecting {} -> {}", &captured_path, &target_url);
                HttpResponse::build(StatusCode::FOUND)
                    .insert_header(("Location", target_url))
                    .finish()
            }
            Err(_) => {
                debug!("Redirect link not found: {}", &captured_path);
                Self::not_found_response()
            }
        }
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::NotFound().json(ErrorResponse::new("Short code not found"))
    }
}

/// Redirect 路由配置
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/{code}", web::get().to(RedirectService::handle_redirect))
        .route("/{code}", web::head().to(RedirectService::handle_redirect))
}
