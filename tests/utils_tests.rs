use std::collections::HashSet;

use chrono::{Duration, Utc};
use linklet::utils::{format_duration_human, generate_random_code, is_valid_short_code};

#[test]
fn test_generate_random_code_length() {
    assert_eq!(generate_random_code(6).len(), 6);
    assert_eq!(generate_random_code(10).len(), 10);
    assert_eq!(generate_random_code(1).len(), 1);
    assert_eq!(generate_random_code(0).len(), 0);
}

#[test]
fn test_generate_random_code_characters() {
    let code = generate_random_code(100);
    let valid_chars: HashSet<char> =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
            .chars()
            .collect();

    for ch in code.chars() {
        assert!(valid_chars.contains(&ch), "Invalid character: {}", ch);
    }
}

#[test]
fn test_generate_random_code_uniqueness() {
    let mut codes = HashSet::new();

    for _ in 0..1000 {
        codes.insert(generate_random_code(8));
    }

    assert!(
        codes.len() > 990,
        "Generated codes lack sufficient randomness"
    );
}

#[test]
fn test_is_valid_short_code() {
    assert!(is_valid_short_code("abc123"));
    assert!(is_valid_short_code("ABCxyz"));
    assert!(is_valid_short_code(&generate_random_code(6)));

    assert!(!is_valid_short_code(""));
    assert!(!is_valid_short_code("abc12"));
    assert!(!is_valid_short_code("abc1234"));
    assert!(!is_valid_short_code("abc-12"));
    assert!(!is_valid_short_code("favicon.ico"));
}

#[test]
fn test_format_duration_human() {
    let now = Utc::now();

    assert_eq!(format_duration_human(now, now + Duration::seconds(5)), "5s");
    assert_eq!(
        format_duration_human(now, now + Duration::minutes(2) + Duration::seconds(30)),
        "2m30s"
    );
    assert_eq!(
        format_duration_human(now, now + Duration::hours(3) + Duration::minutes(15)),
        "3h15m"
    );
    assert_eq!(
        format_duration_human(now, now + Duration::days(2) + Duration::hours(4)),
        "2d4h"
    );

    // Clock skew: never negative
    assert_eq!(format_duration_human(now, now - Duration::seconds(10)), "0s");
}
