pub mod services;
pub mod types;

use actix_web::HttpRequest;

/// Build the public short URL for a code from the inbound request's
/// connection info (scheme + host), mirroring whatever address the client
/// used to reach the service.
pub fn short_url_for(req: &HttpRequest, code: &str) -> String {
    let info = req.connection_info();
    format!("{}://{}/{}", info.scheme(), info.host(), code)
}
