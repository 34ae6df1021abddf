//! Permanent redirect responses.

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, StatusCode},
    response::Response,
};

/// Build a `301 Moved Permanently` response pointing at `target`.
///
/// `Location` carries the target, with any control character replaced by a
/// space so every target yields a valid header. GET and HEAD get an HTML
/// content type, and GET also gets a small body linking to the target for
/// clients that do not follow redirects.
pub fn redirect_response(method: &Method, target: &str) -> Response {
    let location = location_value(target);

    let body = if method == Method::GET {
        Body::from(format!(
            "<a href=\"{}\">Moved Permanently</a>.\n",
            html_escape(target)
        ))
    } else {
        Body::empty()
    };

    let mut response = Response::new(body);
    *response.status_mut() = StatusCode::MOVED_PERMANENTLY;
    response.headers_mut().insert(header::LOCATION, location);
    if method == Method::GET || method == Method::HEAD {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
    }
    response
}

fn location_value(target: &str) -> HeaderValue {
    if let Ok(v) = HeaderValue::from_str(target) {
        return v;
    }
    // Header values may carry obs-text (bytes >= 0x80) and tab, but no other controls.
    let cleaned: String = target
        .chars()
        .map(|c| if c.is_control() && c != '\t' { ' ' } else { c })
        .collect();
    match HeaderValue::from_bytes(cleaned.as_bytes()) {
        Ok(v) => v,
        Err(_) => HeaderValue::from_static("/"),
    }
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
