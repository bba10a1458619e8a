//! License checker driven by the `[license]` config section.

use crate::config::FileLicenseConfig;
use assistant_application::{LicenseError, LicensePort};
use assistant_domain::{Feature, UserId, WorkspaceId};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Grants licensed features per workspace, or instance-wide for an
/// enterprise license.
#[derive(Debug, Clone)]
pub struct ConfigLicenseChecker {
    enterprise: bool,
    workspaces: HashSet<WorkspaceId>,
    features: HashSet<Feature>,
}

impl ConfigLicenseChecker {
    pub fn from_config(config: &FileLicenseConfig) -> Self {
        let (features, issues) = config.parse_features();
        for issue in issues {
            warn!("{}", issue.message);
        }

        Self {
            enterprise: config.enterprise,
            workspaces: config.workspaces.iter().copied().collect(),
            features: features.into_iter().collect(),
        }
    }
}

#[async_trait]
impl LicensePort for ConfigLicenseChecker {
    async fn has_feature(
        &self,
        feature: Feature,
        user: UserId,
        workspace: WorkspaceId,
    ) -> Result<bool, LicenseError> {
        let granted = self.features.contains(&feature)
            && (self.enterprise || self.workspaces.contains(&workspace));
        debug!(%feature, %user, %workspace, granted, "License check");
        Ok(granted)
    }
}
