//! Default handler for paths without a redirect rule.

use axum::{http::StatusCode, routing::get, Router};

async fn hello() -> &'static str {
    "Hello, world!\n"
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "No redirect configured for this path\n")
}

/// Greets on `/` and answers 404 everywhere else.
pub fn fallback_router() -> Router {
    Router::new().route("/", get(hello)).fallback(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_greets() {
        let res = fallback_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Hello, world!\n");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let res = fallback_router()
            .oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
