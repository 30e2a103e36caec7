//! Pure normalization functions.
//!
//! # Responsibilities
//! - Extract the prefix core (trim whitespace, strip surrounding slashes)
//! - Produce the router-base spelling (surrounding slashes)
//! - Produce the request-prefix spelling (leading slash only)
//!
//! # Design Decisions
//! - Total over all string inputs; no error path, no panic
//! - Interior characters are preserved verbatim (multi-segment prefixes
//!   like `app/v2` are allowed; lint.rs flags the suspicious ones)
//! - `""` and `"/"` are the same configuration: no prefix

/// Strip surrounding whitespace and any run of leading/trailing slashes.
///
/// The result is the prefix "core": empty exactly when the input denotes
/// the root mount (`""`, whitespace, `"/"`, `"///"`, ...).
pub fn prefix_core(input: &str) -> &str {
    input.trim().trim_matches('/')
}

/// Normalize a raw prefix into the router-base form.
///
/// Always starts and ends with `/`. The root mount normalizes to `"/"`.
///
/// ```
/// use proxy_prefix::normalize_router_base;
///
/// assert_eq!(normalize_router_base("/easy-mcp/"), "/easy-mcp/");
/// assert_eq!(normalize_router_base("app"), "/app/");
/// assert_eq!(normalize_router_base("///"), "/");
/// ```
pub fn normalize_router_base(input: &str) -> String {
    let core = prefix_core(input);
    if core.is_empty() {
        "/".to_string()
    } else {
        format!("/{core}/")
    }
}

/// Normalize a raw prefix into the request-prefix form.
///
/// Empty for the root mount; otherwise starts with `/` and never ends
/// with one, so it can be prepended directly to paths that start with `/`.
///
/// ```
/// use proxy_prefix::normalize_request_prefix;
///
/// assert_eq!(normalize_request_prefix("/easy-mcp/"), "/easy-mcp");
/// assert_eq!(normalize_request_prefix("/"), "");
/// ```
pub fn normalize_request_prefix(input: &str) -> String {
    let core = prefix_core(input);
    if core.is_empty() {
        String::new()
    } else {
        format!("/{core}")
    }
}
