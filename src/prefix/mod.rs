//! Path-prefix derivation.
//!
//! # Data Flow
//! ```text
//! raw value (env or argument)
//!     → normalize.rs (pure string functions)
//!     → PrefixConfig (derived, immutable)
//!     → read by router mounting / API client / build tool
//!
//! lint.rs inspects the raw value separately and reports
//! suspicious shapes; it never affects the derivation.
//! ```
//!
//! # Design Decisions
//! - Derivation is an explicit constructor call, not import-time global state
//! - Both normalize functions are total: every string input has an output
//! - Malformed input degrades to "no prefix", never to an error

pub mod lint;
pub mod normalize;

mod config;

pub use config::{PrefixConfig, PREFIX_ENV};
pub use lint::{lint_prefix, PrefixLint};
pub use normalize::{normalize_request_prefix, normalize_router_base};
