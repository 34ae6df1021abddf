//! Exact-path permanent redirects in front of a fallback HTTP service.
//!
//! ```text
//! YAML bytes → rules::parse_rules → RedirectTable → redirect::map_handler(table, fallback)
//! ```
//!
//! The redirect service is a plain `tower::Service`, so any service with an
//! axum `Response` (an axum `Router`, a `ServeDir`, a handler) can be the
//! fallback.

// Core
pub mod redirect;
pub mod rules;

// Host application
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use redirect::{map_handler, yaml_handler, RedirectLayer, RedirectService};
pub use rules::{parse_rules, ParseError, RedirectTable, Rule};
