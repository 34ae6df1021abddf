//! Redirect resolution.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → service.rs (exact lookup in RedirectTable)
//!     → hit:  response.rs builds 301 + Location
//!     → miss: request handed to the fallback service untouched
//! ```
//!
//! # Design Decisions
//! - The fallback is any `tower::Service`, injected rather than inherited
//! - The hit path never touches the fallback and never awaits
//! - Exactly one of redirect / delegate happens per request

pub mod response;
pub mod service;

pub use response::redirect_response;
pub use service::{map_handler, yaml_handler, RedirectLayer, RedirectService};
