use super::{ProviderAdapter, ProviderKind};
use crate::config::FileProvidersConfig;
use assistant_application::{AssistantRuntime, PromptMessage, RuntimeError};
use assistant_domain::ModelId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// The assistant runtime: routes each request to a provider adapter.
pub struct ModelRouter {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    /// Model name to provider index, for bare model names that should not
    /// go to the default provider.
    explicit_model_routing: HashMap<String, usize>,
    default_kind: Option<ProviderKind>,
    name: String,
}

impl ModelRouter {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, config: &FileProvidersConfig) -> Self {
        let mut explicit_model_routing = HashMap::new();

        for (model_name, provider_name) in &config.routing {
            // Unknown or unregistered providers are skipped; validate() reports them.
            let Some(target_kind) = ProviderKind::from_name(provider_name) else {
                continue;
            };
            if let Some(idx) = providers.iter().position(|p| p.kind() == target_kind) {
                explicit_model_routing.insert(model_name.clone(), idx);
            }
        }

        let name = format!(
            "model-router[{}]",
            providers
                .iter()
                .map(|p| p.kind().as_str())
                .collect::<Vec<_>>()
                .join(",")
        );

        Self {
            providers,
            explicit_model_routing,
            default_kind: config.default.as_deref().and_then(ProviderKind::from_name),
            name,
        }
    }

    pub fn provider_kinds(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    /// Resolve the provider for a model.
    ///
    /// Priority:
    ///  1. the model's own `provider/` prefix (must be registered)
    ///  2. the explicit routing table, by model name
    ///  3. the configured default provider
    ///  4. the first registered provider
    ///  5. no providers: `RuntimeError::ModelNotAvailable`
    pub(crate) fn resolve_provider(
        &self,
        model: &ModelId,
    ) -> Result<&dyn ProviderAdapter, RuntimeError> {
        // 1. Explicit provider prefix
        if let Some(prefix) = model.provider() {
            let kind = ProviderKind::from_name(prefix).ok_or_else(|| {
                RuntimeError::ModelNotAvailable(format!("unknown provider '{}'", prefix))
            })?;
            return self
                .providers
                .iter()
                .find(|p| p.kind() == kind)
                .map(|p| p.as_ref())
                .ok_or_else(|| {
                    RuntimeError::ModelNotAvailable(format!(
                        "provider '{}' is not configured",
                        kind
                    ))
                });
        }

        // 2. Routing table (from config [providers.routing])
        if let Some(&idx) = self.explicit_model_routing.get(model.name()) {
            return Ok(self.providers[idx].as_ref());
        }

        // 3. Default provider kind
        if let Some(kind) = self.default_kind
            && let Some(p) = self.providers.iter().find(|p| p.kind() == kind)
        {
            return Ok(p.as_ref());
        }

        // 4. First provider fallback
        self.providers
            .first()
            .map(|p| p.as_ref())
            .ok_or(RuntimeError::ModelNotAvailable(
                "No providers available".to_string(),
            ))
    }
}

#[async_trait]
impl AssistantRuntime for ModelRouter {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        model: &ModelId,
        messages: &[PromptMessage],
    ) -> Result<String, RuntimeError> {
        let provider = self.resolve_provider(model)?;
        debug!(%model, provider = %provider.kind(), "Routing completion request");
        provider.complete(model.name(), messages).await
    }
}
