//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! redirect service / host server produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (redirect / fallback counters)
//!
//! Consumers:
//!     → stdout via tracing-subscriber fmt layer
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - RUST_LOG always wins over the configured filter
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
