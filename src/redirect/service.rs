//! The redirect service and its constructors.

use std::future::{ready, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{http::Request, response::Response};
use futures_util::future::Either;
use tower::{Layer, Service};

use crate::observability::metrics;
use crate::redirect::response::redirect_response;
use crate::rules::{parse_rules, ParseError, RedirectTable};

/// Redirects requests whose path is in the table and hands everything else
/// to `fallback`.
///
/// `poll_ready` drives the fallback to readiness even when the next request
/// turns out to be a redirect; that readiness is only spent on the next miss.
/// A fallback that reserves capacity in `poll_ready` (`Buffer`,
/// `ConcurrencyLimit`) keeps holding that slot until then.
#[derive(Debug, Clone)]
pub struct RedirectService<F> {
    table: Arc<RedirectTable>,
    fallback: F,
}

impl<F> RedirectService<F> {
    pub fn new(table: impl Into<Arc<RedirectTable>>, fallback: F) -> Self {
        Self {
            table: table.into(),
            fallback,
        }
    }

    pub fn table(&self) -> &RedirectTable {
        &self.table
    }
}

impl<F, B> Service<Request<B>> for RedirectService<F>
where
    F: Service<Request<B>, Response = Response> + Clone,
{
    type Response = Response;
    type Error = F::Error;
    type Future = Either<Ready<Result<Response, F::Error>>, F::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.fallback.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        match self.table.get(req.uri().path()) {
            Some(target) => {
                tracing::debug!(path = %req.uri().path(), target = %target, "Redirecting");
                metrics::record_redirect(metrics::Outcome::Redirect);
                Either::Left(ready(Ok(redirect_response(req.method(), target))))
            }
            None => {
                tracing::debug!(path = %req.uri().path(), "No redirect rule, using fallback");
                metrics::record_redirect(metrics::Outcome::Fallback);
                // The clone is the one that was not driven to readiness.
                let clone = self.fallback.clone();
                let mut fallback = std::mem::replace(&mut self.fallback, clone);
                Either::Right(fallback.call(req))
            }
        }
    }
}

/// Applies a shared [`RedirectTable`] in front of any inner service.
#[derive(Debug, Clone, Default)]
pub struct RedirectLayer {
    table: Arc<RedirectTable>,
}

impl RedirectLayer {
    pub fn new(table: impl Into<Arc<RedirectTable>>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl<S> Layer<S> for RedirectLayer {
    type Service = RedirectService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RedirectService {
            table: self.table.clone(),
            fallback: inner,
        }
    }
}

/// Wrap `fallback` so that paths in `table` are permanently redirected.
pub fn map_handler<F>(table: impl Into<RedirectTable>, fallback: F) -> RedirectService<F> {
    let table: RedirectTable = table.into();
    RedirectService::new(table, fallback)
}

/// Parse YAML rules and build a [`RedirectService`] over `fallback`.
///
/// ```yaml
/// - path: /some-path
///   url: https://www.some-url.com/demo
/// ```
///
/// The only error is a [`ParseError`] for input that is not a sequence of
/// `{path, url}` records.
pub fn yaml_handler<F>(yaml: &[u8], fallback: F) -> Result<RedirectService<F>, ParseError> {
    let rules = parse_rules(yaml)?;
    let table = RedirectTable::from_rules(rules);
    tracing::info!(redirects = table.len(), "Redirect table built");
    Ok(map_handler(table, fallback))
}
