//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! PROXY_PREFIX_PATH (env, read once at startup)
//!     → loader.rs (source the raw value)
//!     → Settings (raw, as deployed)
//!     → resolve_prefix (derive + log lints)
//!     → PrefixConfig (derived, immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - The environment is read exactly once; there is no reload-on-change
//! - All fields default, so an empty environment is a valid (root-mounted)
//!   configuration
//! - Lints are logged at warn and never fail resolution

pub mod loader;
pub mod settings;

pub use loader::{load_from_env, resolve_prefix};
pub use settings::Settings;
