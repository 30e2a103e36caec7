//! Deployment-time prefix diagnostics.
//!
//! # Responsibilities
//! - Flag raw values that normalize fine but are unlikely to match any
//!   real deployment path
//! - Report every finding, not just the first
//!
//! # Design Decisions
//! - Lints are warnings: they never fail the derivation (normalization is
//!   total; a mismatched prefix is a deployment concern, not a runtime error)
//! - Pure function: raw value → Vec<PrefixLint>

use thiserror::Error;

use crate::prefix::normalize::prefix_core;

/// A suspicious shape in a raw prefix value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixLint {
    /// Whitespace inside the prefix core; URLs cannot contain it literally.
    #[error("prefix contains interior whitespace: {0:?}")]
    InteriorWhitespace(String),

    /// A `.` or `..` segment; proxies resolve these before matching.
    #[error("prefix contains a relative segment: {0:?}")]
    RelativeSegment(String),

    /// A backslash, usually a Windows path pasted into a URL setting.
    #[error("prefix contains a backslash: {0:?}")]
    Backslash(String),

    /// A doubled slash inside the core; it is preserved verbatim and will
    /// surface in every derived path.
    #[error("prefix contains a doubled interior slash: {0:?}")]
    DoubledSlash(String),
}

/// Inspect a raw prefix value for shapes that almost certainly do not match
/// the intended deployment path. Returns every finding.
pub fn lint_prefix(raw: &str) -> Vec<PrefixLint> {
    let core = prefix_core(raw);
    if core.is_empty() {
        return Vec::new();
    }

    let mut lints = Vec::new();

    if core.chars().any(char::is_whitespace) {
        lints.push(PrefixLint::InteriorWhitespace(core.to_string()));
    }

    if core.split('/').any(|seg| seg == "." || seg == "..") {
        lints.push(PrefixLint::RelativeSegment(core.to_string()));
    }

    if core.contains('\\') {
        lints.push(PrefixLint::Backslash(core.to_string()));
    }

    if core.contains("//") {
        lints.push(PrefixLint::DoubledSlash(core.to_string()));
    }

    lints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_values_are_clean() {
        assert!(lint_prefix("").is_empty());
        assert!(lint_prefix("/").is_empty());
        assert!(lint_prefix("/easy-mcp/").is_empty());
        assert!(lint_prefix("app/v2").is_empty());
        // Surrounding whitespace and slash runs are stripped, not linted.
        assert!(lint_prefix("  ///app///  ").is_empty());
    }

    #[test]
    fn test_interior_whitespace() {
        assert_eq!(
            lint_prefix("/my app/"),
            vec![PrefixLint::InteriorWhitespace("my app".into())]
        );
    }

    #[test]
    fn test_relative_segment() {
        assert_eq!(
            lint_prefix("/../admin"),
            vec![PrefixLint::RelativeSegment("../admin".into())]
        );
        assert_eq!(
            lint_prefix("a/./b"),
            vec![PrefixLint::RelativeSegment("a/./b".into())]
        );
    }

    #[test]
    fn test_backslash() {
        assert_eq!(
            lint_prefix("app\\v2"),
            vec![PrefixLint::Backslash("app\\v2".into())]
        );
    }

    #[test]
    fn test_doubled_slash() {
        assert_eq!(
            lint_prefix("a//b"),
            vec![PrefixLint::DoubledSlash("a//b".into())]
        );
    }

    #[test]
    fn test_reports_all_findings() {
        let lints = lint_prefix("bad seg//x");
        assert!(lints.contains(&PrefixLint::InteriorWhitespace("bad seg//x".into())));
        assert!(lints.contains(&PrefixLint::DoubledSlash("bad seg//x".into())));
        assert_eq!(lints.len(), 2);
    }
}
