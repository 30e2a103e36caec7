//! Derived prefix configuration.
//!
//! # Responsibilities
//! - Hold the raw value plus both normalized spellings
//! - Source the raw value from the environment exactly once at startup
//! - Compose the spellings with consumer paths without doubling slashes
//!
//! # Design Decisions
//! - Immutable after construction; re-derive only by constructing again
//! - Serialize only (camelCase, for the JS-side build tooling); derived
//!   fields must never be supplied externally, so no Deserialize

use std::env;

use serde::Serialize;

use crate::prefix::normalize::{normalize_request_prefix, normalize_router_base};

/// Environment variable holding the raw prefix value.
pub const PREFIX_ENV: &str = "PROXY_PREFIX_PATH";

/// The prefix configuration derived from one raw value.
///
/// Invariants after construction:
/// - `router_base` starts and ends with `/` (`"/"` for the root mount);
/// - `request_prefix` is empty or starts with `/` and never ends with one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixConfig {
    /// The unprocessed input value.
    pub raw: String,

    /// Spelling for router mounting, e.g. `"/app/"`.
    pub router_base: String,

    /// Spelling for outgoing API paths, e.g. `"/app"`.
    pub request_prefix: String,
}

impl PrefixConfig {
    /// Derive the configuration from a raw value.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let router_base = normalize_router_base(&raw);
        let request_prefix = normalize_request_prefix(&raw);
        Self {
            raw,
            router_base,
            request_prefix,
        }
    }

    /// Derive the configuration from `PROXY_PREFIX_PATH`.
    ///
    /// An absent variable means no prefix. A non-unicode value is read
    /// lossily; the derivation stays total either way.
    pub fn from_env() -> Self {
        let raw = env::var_os(PREFIX_ENV)
            .map(|v| v.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(raw)
    }

    /// Whether the application is mounted at the root (no prefix configured).
    ///
    /// A raw value of `"/"` is indistinguishable from an unset one; both
    /// denote the root mount by convention.
    pub fn is_root(&self) -> bool {
        self.request_prefix.is_empty()
    }

    /// The base path for the build tool. Identical to the router base; one
    /// derivation serves both consumers.
    pub fn build_base(&self) -> &str {
        &self.router_base
    }

    /// Join the router base with a route sub-path.
    ///
    /// `sub` may or may not carry a leading slash; the result never
    /// contains `//` at the join point.
    pub fn route_path(&self, sub: &str) -> String {
        format!("{}{}", self.router_base, sub.trim_start_matches('/'))
    }

    /// Prepend the request prefix to an outgoing API path.
    ///
    /// The path is given leading-slash form first, so the result never
    /// contains `//` at the join point.
    pub fn request_path(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.request_prefix, path)
    }
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation() {
        let cfg = PrefixConfig::new("/easy-mcp/");
        assert_eq!(cfg.raw, "/easy-mcp/");
        assert_eq!(cfg.router_base, "/easy-mcp/");
        assert_eq!(cfg.request_prefix, "/easy-mcp");
        assert_eq!(cfg.build_base(), "/easy-mcp/");
        assert!(!cfg.is_root());
    }

    #[test]
    fn test_root_mount() {
        for raw in ["", "/", "///", "   "] {
            let cfg = PrefixConfig::new(raw);
            assert_eq!(cfg.router_base, "/", "raw={raw:?}");
            assert_eq!(cfg.request_prefix, "", "raw={raw:?}");
            assert!(cfg.is_root(), "raw={raw:?}");
        }
    }

    #[test]
    fn test_route_path_join() {
        let cfg = PrefixConfig::new("app");
        assert_eq!(cfg.route_path("assets/logo.svg"), "/app/assets/logo.svg");
        assert_eq!(cfg.route_path("/assets/logo.svg"), "/app/assets/logo.svg");

        let root = PrefixConfig::default();
        assert_eq!(root.route_path("/assets/logo.svg"), "/assets/logo.svg");
    }

    #[test]
    fn test_request_path_join() {
        let cfg = PrefixConfig::new("app");
        assert_eq!(cfg.request_path("/api/tools"), "/app/api/tools");
        assert_eq!(cfg.request_path("api/tools"), "/app/api/tools");

        let root = PrefixConfig::default();
        assert_eq!(root.request_path("/api/tools"), "/api/tools");
    }

    #[test]
    fn test_serializes_camel_case() {
        let cfg = PrefixConfig::new("app");
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["routerBase"], "/app/");
        assert_eq!(json["requestPrefix"], "/app");
        assert_eq!(json["raw"], "app");
    }
}
