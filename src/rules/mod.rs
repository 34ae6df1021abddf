//! Redirect rule subsystem.
//!
//! # Data Flow
//! ```text
//! YAML bytes
//!     → parser.rs (decode into ordered Vec<Rule>)
//!     → [validation.rs (optional strict checks)]
//!     → table.rs (fold into RedirectTable, last write wins)
//!     → shared via Arc by the redirect service
//! ```
//!
//! # Design Decisions
//! - Decoding is the only fallible step; table construction is total
//! - The table is immutable once built, so readers need no locking
//! - Lookup is by exact path; no prefixes, patterns or normalization

pub mod parser;
pub mod table;
pub mod validation;

pub use parser::{parse_rules, ParseError, Rule};
pub use table::RedirectTable;
pub use validation::{validate_rules, RuleError};
