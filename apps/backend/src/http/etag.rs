//! ETag helpers for the game state endpoint.

use actix_web::http::header::HeaderValue;

/// ETag for a game at a given version: `"game-{id}-v{version}"`, quoted as HTTP requires.
///
/// # Example
/// ```
/// # use river_backend::http::etag::game_etag;
/// assert_eq!(game_etag("abc", 5), r#""game-abc-v5""#);
/// ```
pub fn game_etag(game_id: &str, version: u64) -> String {
    format!(r#""game-{game_id}-v{version}""#)
}

/// Whether an `If-None-Match` header value matches `etag`.
///
/// Accepts the `*` wildcard and comma-separated lists. Weak validators
/// (`W/"..."`) compare by their opaque tag.
pub fn if_none_match_hits(header: &HeaderValue, etag: &str) -> bool {
    let Ok(value) = header.to_str() else {
        return false;
    };
    if value.trim() == "*" {
        return true;
    }
    value
        .split(',')
        .map(str::trim)
        .map(|tag| tag.strip_prefix("W/").unwrap_or(tag))
        .any(|tag| tag == etag)
}
