//! Factory for the assistant runtime.
//!
//! Implements the [`CapabilityFactory`] port. Nothing here runs until the
//! first `get_assistant` call: building the handler, or serving chat
//! metadata, never constructs providers or HTTP clients.

use crate::config::FileProvidersConfig;
use crate::providers::echo::EchoProvider;
use crate::providers::routing::ModelRouter;
use crate::providers::{ProviderAdapter, ProviderKind};
use assistant_application::{AssistantRuntime, CapabilityFactory, CapabilityLoadError};
use assistant_domain::ModelId;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Builds a [`ModelRouter`] from the `[providers]` config.
pub struct RuntimeFactory {
    config: FileProvidersConfig,
    model: ModelId,
}

impl RuntimeFactory {
    pub fn new(config: FileProvidersConfig, model: ModelId) -> Self {
        Self { config, model }
    }

    /// Whether the HTTP runtime is compiled into this build
    pub fn runtime_installed() -> bool {
        cfg!(feature = "runtime")
    }

    fn build_providers(&self) -> Result<Vec<Arc<dyn ProviderAdapter>>, CapabilityLoadError> {
        let mut providers: Vec<Arc<dyn ProviderAdapter>> = Vec::new();

        if let Some(provider) = self.openai_provider()? {
            providers.push(provider);
        }
        if self.config.echo {
            providers.push(Arc::new(EchoProvider));
        }

        Ok(providers)
    }

    #[cfg(feature = "runtime")]
    fn openai_provider(&self) -> Result<Option<Arc<dyn ProviderAdapter>>, CapabilityLoadError> {
        use crate::providers::openai::OpenAiCompatibleProvider;
        use tracing::debug;

        let Some(api_key) = self.config.openai.resolve_api_key() else {
            debug!(
                "No API key in {}, skipping OpenAI provider",
                self.config.openai.api_key_env
            );
            return Ok(None);
        };
        let provider = OpenAiCompatibleProvider::new(&self.config.openai, api_key)
            .map_err(|e| CapabilityLoadError::Failed(format!("HTTP client: {}", e)))?;
        Ok(Some(Arc::new(provider)))
    }

    #[cfg(not(feature = "runtime"))]
    fn openai_provider(&self) -> Result<Option<Arc<dyn ProviderAdapter>>, CapabilityLoadError> {
        Ok(None)
    }

    fn no_providers_error() -> CapabilityLoadError {
        if Self::runtime_installed() {
            CapabilityLoadError::Misconfigured(
                "no provider configured: set an API key or enable providers.echo".to_string(),
            )
        } else {
            CapabilityLoadError::NotInstalled(
                "built without the `runtime` feature and providers.echo is disabled".to_string(),
            )
        }
    }
}

#[async_trait]
impl CapabilityFactory for RuntimeFactory {
    async fn load(&self) -> Result<Arc<dyn AssistantRuntime>, CapabilityLoadError> {
        let providers = self.build_providers()?;
        if providers.is_empty() {
            return Err(Self::no_providers_error());
        }

        let router = ModelRouter::new(providers, &self.config);
        if let Some(prefix) = self.model.provider() {
            let registered = ProviderKind::from_name(prefix)
                .is_some_and(|kind| router.provider_kinds().contains(&kind));
            if !registered {
                return Err(CapabilityLoadError::Misconfigured(format!(
                    "model '{}' needs provider '{}', which is not configured",
                    self.model, prefix
                )));
            }
        }

        info!(runtime = router.name(), model = %self.model, "Built model router");
        Ok(Arc::new(router))
    }
}
