//! Settings schema.

use serde::{Deserialize, Serialize};

use crate::prefix::PrefixConfig;

/// Raw settings, as supplied by the deployment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Raw base-path prefix (e.g. `"/easy-mcp/"`). Empty means root mount.
    pub prefix_path: String,
}

impl Settings {
    /// Derive the normalized prefix configuration from these settings.
    pub fn prefix(&self) -> PrefixConfig {
        PrefixConfig::new(self.prefix_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_root_mount() {
        let settings = Settings::default();
        assert!(settings.prefix().is_root());
    }

    #[test]
    fn test_prefix_derivation() {
        let settings = Settings {
            prefix_path: "app".into(),
        };
        let prefix = settings.prefix();
        assert_eq!(prefix.router_base, "/app/");
        assert_eq!(prefix.request_prefix, "/app");
    }
}
