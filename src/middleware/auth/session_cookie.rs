//! `Set-Cookie` values for the session cookie.
//!
//! Always `HttpOnly; SameSite=Lax; Path=/`. `Secure` is added when the server
//! runs in production.

use axum::http::{HeaderMap, HeaderValue, header::SET_COOKIE};

pub fn create_session_cookie(name: &str, session_id: &str, secure: bool) -> String {
    let secure_flag = if secure { "; Secure" } else { "" };
    format!("{name}={session_id}; HttpOnly{secure_flag}; SameSite=Lax; Path=/")
}

pub fn clear_session_cookie(name: &str, secure: bool) -> String {
    let secure_flag = if secure { "; Secure" } else { "" };
    format!("{name}=; HttpOnly{secure_flag}; SameSite=Lax; Path=/; Max-Age=0")
}

/// Append a cookie to response headers. An unencodable value is dropped.
pub fn append_cookie(headers: &mut HeaderMap, cookie: &str) {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            headers.append(SET_COOKIE, value);
        }
        Err(err) => tracing::warn!(error = %err, "unencodable set-cookie value"),
    }
}
