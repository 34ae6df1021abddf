//! HTTP host for the redirect service.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → RedirectService (exact-path lookup)
//!     → hit: 301 / miss: fallback.rs router
//!     → Send to client
//! ```

pub mod fallback;
pub mod server;

pub use fallback::fallback_router;
pub use server::HttpServer;
