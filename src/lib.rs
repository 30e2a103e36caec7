//! Base-path configuration for a sub-path-mounted web application.
//!
//! A deployment can mount the whole application under a path prefix (behind a
//! reverse proxy at `/easy-mcp/`, say). Three consumers need a normalized form
//! of that prefix, and each wants a different spelling:
//!
//! ```text
//!                        PROXY_PREFIX_PATH (env)
//!                                │
//!                                ▼
//!                      ┌──────────────────┐
//!                      │  prefix module   │
//!                      │  (normalize once │
//!                      │   at startup)    │
//!                      └────────┬─────────┘
//!               ┌───────────────┼────────────────┐
//!               ▼               ▼                ▼
//!        router mounting   API client      build tool
//!        "/app/"           "/app"          "/app/"
//!        (trailing slash   (no trailing    (same as router
//!         so sub-paths      slash so        base, via the
//!         compose)          "/x" appends    CLI `print`)
//!                           cleanly)
//! ```
//!
//! The asymmetry is deliberate: the router base is concatenated with relative
//! sub-paths, so it needs the trailing slash; the request prefix is
//! concatenated with paths that already start with `/`, so a trailing slash
//! would double up. `""` and `"/"` both mean "no prefix configured".
//!
//! All three spellings come from one derivation ([`PrefixConfig`]), computed
//! exactly once per process from the raw value. There is no reload: the value
//! is immutable for the process lifetime.

// Core derivation
pub mod prefix;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::Settings;
pub use prefix::{normalize_request_prefix, normalize_router_base, PrefixConfig, PREFIX_ENV};
