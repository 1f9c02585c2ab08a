/*
 * Responsibility
 * - 認証判定に必要な request の最小インターフェース (path / header / cookie)
 * - services 側は axum の型に依存せず、この trait だけを見る
 * - http::Request / request::Parts / HeaderMap への実装はここに閉じ込める
 */
use axum::http::{HeaderMap, Request, header, request::Parts};

/// What the authentication layer needs to see of an incoming request.
///
/// `Sync` so that `&dyn AuthRequest` can be held across an `.await`
/// (user resolution is async).
pub trait AuthRequest: Sync {
    fn path(&self) -> Option<&str>;
    fn header(&self, name: &str) -> Option<&str>;
    fn cookie(&self, name: &str) -> Option<&str>;
}

impl AuthRequest for Parts {
    fn path(&self) -> Option<&str> {
        Some(self.uri.path())
    }

    fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        cookie_value(&self.headers, name)
    }
}

impl<B: Sync> AuthRequest for Request<B> {
    fn path(&self) -> Option<&str> {
        Some(self.uri().path())
    }

    fn header(&self, name: &str) -> Option<&str> {
        header_value(self.headers(), name)
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        cookie_value(self.headers(), name)
    }
}

// Headers only (e.g. a handler that extracted `HeaderMap`): there is no path.
impl AuthRequest for HeaderMap {
    fn path(&self) -> Option<&str> {
        None
    }

    fn header(&self, name: &str) -> Option<&str> {
        header_value(self, name)
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        cookie_value(self, name)
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Find `name` in the `Cookie` header(s).
///
/// Format: `name1=value1; name2=value2`. Several `Cookie` headers are allowed
/// (HTTP/2 splits them), the first match wins.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .find_map(|pair| {
            let (k, v) = pair.trim().split_once('=')?;
            (k.trim() == name).then(|| v.trim())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn request_with_cookie(raw: &'static str) -> Request<()> {
        Request::builder()
            .uri("/api/v1/users/me")
            .header(header::COOKIE, raw)
            .body(())
            .unwrap()
    }

    #[test]
    fn path_comes_from_uri_without_query() {
        let req = Request::builder()
            .uri("/api/v1/status?verbose=1")
            .body(())
            .unwrap();
        assert_eq!(req.path(), Some("/api/v1/status"));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = Request::builder()
            .uri("/")
            .header("Authorization", "Basic abc")
            .body(())
            .unwrap();
        assert_eq!(req.header("authorization"), Some("Basic abc"));
        assert_eq!(req.header("x-missing"), None);
    }

    #[test]
    fn cookie_found_among_several() {
        let req = request_with_cookie("theme=dark; _my_session_id=abc123; lang=en");
        assert_eq!(req.cookie("_my_session_id"), Some("abc123"));
        assert_eq!(req.cookie("lang"), Some("en"));
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        let req = request_with_cookie("x_my_session_id=nope; _my_session_idx=nope");
        assert_eq!(req.cookie("_my_session_id"), None);
    }

    #[test]
    fn cookie_across_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("a=1"));
        headers.append(header::COOKIE, HeaderValue::from_static("sid=xyz"));
        assert_eq!(headers.cookie("sid"), Some("xyz"));
        assert_eq!(headers.path(), None);
    }

    #[test]
    fn cookie_with_empty_value_is_returned_as_empty() {
        let req = request_with_cookie("sid=");
        assert_eq!(req.cookie("sid"), Some(""));
    }

    #[test]
    fn parts_expose_the_same_view() {
        let (parts, _) = request_with_cookie("sid=1").into_parts();
        assert_eq!(parts.path(), Some("/api/v1/users/me"));
        assert_eq!(parts.cookie("sid"), Some("1"));
    }
}
