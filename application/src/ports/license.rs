//! License port
//!
//! Gates licensed features per workspace. The licensing engine itself is
//! an external collaborator.

use assistant_domain::{Feature, UserId, WorkspaceId};
use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by license checks
#[derive(Error, Debug)]
pub enum LicenseError {
    #[error("Feature '{feature}' is not available in workspace {workspace}")]
    FeatureNotAvailable {
        feature: Feature,
        workspace: WorkspaceId,
    },

    #[error("License check failed: {0}")]
    CheckFailed(String),
}

/// Answers whether a user may use a licensed feature in a workspace
#[async_trait]
pub trait LicensePort: Send + Sync {
    /// Whether `feature` is available to `user` in `workspace`
    async fn has_feature(
        &self,
        feature: Feature,
        user: UserId,
        workspace: WorkspaceId,
    ) -> Result<bool, LicenseError>;

    /// Fail with [`LicenseError::FeatureNotAvailable`] unless the feature is available
    async fn require_feature(
        &self,
        feature: Feature,
        user: UserId,
        workspace: WorkspaceId,
    ) -> Result<(), LicenseError> {
        if self.has_feature(feature, user, workspace).await? {
            Ok(())
        } else {
            Err(LicenseError::FeatureNotAvailable { feature, workspace })
        }
    }
}

/// License that grants every feature everywhere.
///
/// Used for self-hosted setups without licensing and in tests.
pub struct UnrestrictedLicense;

#[async_trait]
impl LicensePort for UnrestrictedLicense {
    async fn has_feature(
        &self,
        _feature: Feature,
        _user: UserId,
        _workspace: WorkspaceId,
    ) -> Result<bool, LicenseError> {
        Ok(true)
    }
}
