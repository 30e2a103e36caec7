//! Configuration loading from the environment.

use std::env;

use crate::config::settings::Settings;
use crate::prefix::{lint_prefix, PrefixConfig, PREFIX_ENV};

/// Read settings from the environment.
///
/// `PROXY_PREFIX_PATH` is the only external input; absent means no prefix.
/// A non-unicode value is read lossily so loading cannot fail.
pub fn load_from_env() -> Settings {
    let prefix_path = env::var_os(PREFIX_ENV)
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_default();
    Settings { prefix_path }
}

/// Derive the prefix configuration and log the outcome.
///
/// Suspicious raw values are logged at warn but still resolve; a prefix
/// that does not match the deployment path is a deployment concern the
/// derivation cannot detect.
pub fn resolve_prefix(settings: &Settings) -> PrefixConfig {
    let prefix = settings.prefix();

    for lint in lint_prefix(&prefix.raw) {
        tracing::warn!(%lint, raw = %prefix.raw, "suspicious prefix value");
    }

    tracing::info!(
        router_base = %prefix.router_base,
        request_prefix = %prefix.request_prefix,
        root_mount = prefix.is_root(),
        "prefix configuration resolved"
    );

    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefix() {
        let settings = Settings {
            prefix_path: "  /v2/api/  ".into(),
        };
        let prefix = resolve_prefix(&settings);
        assert_eq!(prefix.router_base, "/v2/api/");
        assert_eq!(prefix.request_prefix, "/v2/api");
    }
}
