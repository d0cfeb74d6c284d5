pub mod url_validator;

pub use url_validator::{validate_url, validation_error_message, UrlValidationError};

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

/// Shape check for inbound redirect paths. Codes the service hands out are
/// always fixed-length alphanumeric, so anything else can be rejected without
/// touching the store.
pub fn is_valid_short_code(code: &str) -> bool {
    code.len() == crate::store::CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Format the elapsed time between two instants for the health endpoint.
pub fn format_duration_human(from: chrono::DateTime<chrono::Utc>, to: chrono::DateTime<chrono::Utc>) -> String {
    let duration = to.signed_duration_since(from);

    if duration.num_seconds() < 0 {
        return "0s".to_string();
    }

    let days = duration.num_days();
    let hours = (duration.num_seconds() % 86400) / 3600;
    let minutes = (duration.num_seconds() % 3600) / 60;
    let seconds = duration.num_seconds() % 60;

    if days > 0 {
        format!("{}d{}h", days, hours)
    } else if hours > 0 {
        format!("{}h{}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
