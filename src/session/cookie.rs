//! `Cookie` request header lookup.

use super::{resolve_session, SessionPayload};

const DEFAULT_COOKIE_NAME: &str = "session";

/// Value of cookie `name` in a raw `Cookie` header (`a=1; b=2`).
///
/// Surrounding double quotes are stripped. The first matching pair wins.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            let value = value.trim();
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value)
        })
}

/// Resolve the session carried by cookie `cookie_name`.
pub fn resolve_session_cookie(header: &str, cookie_name: &str) -> Option<SessionPayload> {
    resolve_session(cookie_value(header, cookie_name))
}

/// Resolve the session carried by the default `session` cookie.
pub fn session_from_cookie_header(header: &str) -> Option<SessionPayload> {
    resolve_session_cookie(header, DEFAULT_COOKIE_NAME)
}
