use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::info;

use linklet::api::services::health::{AppStartTime, HealthService};
use linklet::api::services::links::api_routes;
use linklet::api::services::redirect::redirect_routes;
use linklet::config::Config;
use linklet::store::MappingStore;
use linklet::system::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env();

    // One store instance per process, constructed here and handed to the
    // HTTP layer; no global state.
    let store = Arc::new(MappingStore::new());

    let bind_address = config.bind_address();
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .route("/", web::get().to(HealthService::health_check))
            .route("/", web::head().to(HealthService::health_check))
            .service(api_routes())
            .service(redirect_routes())
    })
    .bind(bind_address)?
    .run()
    .await
}
