//! Session hydration from the `session` cookie.
//!
//! # Trust boundary
//!
//! The token's signature is **not** verified here. The backend validates the
//! token on every authenticated call; this module only reads the `sub` claim
//! so server-rendered pages can be pre-populated for the likely user. Adding
//! verification would mean handing the signing secret to the presentation
//! tier, so any caller that needs an authorization decision must ask the API.

mod cookie;

pub use cookie::{cookie_value, resolve_session_cookie, session_from_cookie_header};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::UserId;

/// Decoded JWT payload claims.
pub type Claims = Map<String, Value>;

/// What the presentation tier knows about the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub user_id: UserId,
}

/// Decode a base64url JWT payload segment into its claims.
///
/// Accepts segments with or without `=` padding. Returns `None` for invalid
/// base64, non-JSON content, or JSON that is not an object.
pub fn decode_payload(segment: &str) -> Option<Claims> {
    let mut encoded: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    while encoded.len() % 4 != 0 {
        encoded.push('=');
    }

    let bytes = STANDARD.decode(encoded.as_bytes()).ok()?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(claims) => Some(claims),
        _ => None,
    }
}

/// Read the user id out of a `header.payload.signature` token.
///
/// `None` when the token is absent, not three parts, undecodable, or has no
/// usable integer `sub` claim. A `sub` whose leading digits overflow `i64`
/// is not a usable id and is rejected.
pub fn resolve_session(token: Option<&str>) -> Option<SessionPayload> {
    let token = token.filter(|t| !t.is_empty())?;

    let parts: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = parts.as_slice() else {
        tracing::debug!(parts = parts.len(), "session_token_malformed");
        return None;
    };

    let claims = decode_payload(payload)?;
    let sub = claims.get("sub").filter(|v| is_truthy(v))?;
    let user_id = match sub {
        Value::String(s) => parse_leading_int(s),
        Value::Number(n) => parse_leading_int(&n.to_string()),
        _ => None,
    }?;

    Some(SessionPayload {
        user_id: UserId::new(user_id),
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Leading base-10 integer: optional whitespace and sign, then digits.
/// Anything after the digits is ignored (`"42abc"` is 42, `"4.9"` is 4).
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
