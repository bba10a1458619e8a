//! License configuration from TOML (`[license]` section)

use assistant_domain::{ConfigIssue, ConfigIssueCode, Feature, WorkspaceId};
use serde::{Deserialize, Serialize};

/// Which workspaces may use licensed features
///
/// # Example
///
/// ```toml
/// [license]
/// enterprise = false
/// workspaces = [1, 7]
/// features = ["assistant"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLicenseConfig {
    /// Instance-wide license: every workspace gets the licensed features
    pub enterprise: bool,
    /// Workspaces licensed individually
    pub workspaces: Vec<WorkspaceId>,
    /// Features covered by the license
    pub features: Vec<String>,
}

impl Default for FileLicenseConfig {
    fn default() -> Self {
        Self {
            enterprise: false,
            workspaces: Vec::new(),
            features: Feature::enterprise()
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
        }
    }
}

impl FileLicenseConfig {
    /// Parse the feature list; unknown names are skipped with a warning.
    pub fn parse_features(&self) -> (Vec<Feature>, Vec<ConfigIssue>) {
        let mut features = Vec::new();
        let mut issues = Vec::new();
        for name in &self.features {
            match name.parse::<Feature>() {
                Ok(feature) => features.push(feature),
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownFeature {
                        field: "license.features".to_string(),
                        value: name.clone(),
                    },
                    format!("license.features: unknown feature '{}', ignoring it", name),
                )),
            }
        }
        (features, issues)
    }
}
