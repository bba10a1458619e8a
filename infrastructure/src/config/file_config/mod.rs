//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod assistant;
mod license;
mod output;
mod providers;
mod storage;

pub use assistant::FileAssistantConfig;
pub use license::FileLicenseConfig;
pub use output::{ColorChoice, FileOutputConfig};
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use storage::FileStorageConfig;

use crate::providers::ProviderKind;
use assistant_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Assistant behavior
    pub assistant: FileAssistantConfig,
    /// Providers of the assistant runtime
    pub providers: FileProvidersConfig,
    /// Licensed features
    pub license: FileLicenseConfig,
    /// Chat storage
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. The assistant model id parses and names a known provider
    /// 2. Provider names in `providers.default` and `providers.routing`
    /// 3. Feature names in `license.features`
    /// 4. At least one provider can be enabled
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Model
        let (model, model_issues) = self.assistant.parse_model();
        issues.extend(model_issues);
        if let Some(provider) = model.as_ref().and_then(|m| m.provider())
            && ProviderKind::from_name(provider).is_none()
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::UnknownProvider {
                    field: "assistant.model".to_string(),
                    value: provider.to_string(),
                },
                format!("assistant.model: unknown provider '{}'", provider),
            ));
        }

        // 2. Provider names
        if let Some(default) = &self.providers.default {
            issues.extend(unknown_provider("providers.default", default));
        }
        let mut routed: Vec<_> = self.providers.routing.iter().collect();
        routed.sort();
        for (model, provider) in routed {
            issues.extend(unknown_provider(
                &format!("providers.routing.{}", model),
                provider,
            ));
        }

        // 3. Features
        issues.extend(self.license.parse_features().1);

        // 4. Providers
        if !self.providers.echo && self.providers.openai.resolve_api_key().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NoProviders,
                format!(
                    "no provider enabled: set {} or providers.echo = true; the assistant will be unavailable",
                    self.providers.openai.api_key_env
                ),
            ));
        }

        issues
    }
}

fn unknown_provider(field: &str, value: &str) -> Option<ConfigIssue> {
    if ProviderKind::from_name(value).is_some() {
        return None;
    }
    Some(ConfigIssue::warning(
        ConfigIssueCode::UnknownProvider {
            field: field.to_string(),
            value: value.to_string(),
        },
        format!("{}: unknown provider '{}', ignoring it", field, value),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_domain::{OutputFormat, WorkspaceId};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[assistant]
model = "echo/test-model"
history_limit = 6

[providers]
default = "echo"
echo = true

[providers.routing]
"llama3" = "openai"

[providers.openai]
base_url = "http://localhost:11434"

[license]
enterprise = false
workspaces = [3, 4]

[storage]
path = "/tmp/chats.json"

[output]
format = "json"
color = "never"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assistant.model, "echo/test-model");
        assert_eq!(config.assistant.history_limit, 6);
        assert!(config.providers.echo);
        assert_eq!(config.providers.default.as_deref(), Some("echo"));
        assert_eq!(config.providers.routing["llama3"], "openai");
        assert_eq!(config.providers.openai.base_url, "http://localhost:11434");
        assert_eq!(
            config.license.workspaces,
            vec![WorkspaceId::new(3), WorkspaceId::new(4)]
        );
        assert!(config.storage.path.is_some());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.color, ColorChoice::Never);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[providers]
echo = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.assistant.model, "openai/gpt-4o-mini");
        assert!(!config.license.enterprise);
        assert!(config.storage.path.is_none());
        assert_eq!(config.output.color, ColorChoice::Auto);
    }

    #[test]
    fn test_validate_reports_bad_values() {
        let toml_str = r#"
[assistant]
model = "mystery/model"

[providers]
default = "bedrock"
echo = true

[license]
features = ["assistant", "sso"]
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues[0].is_error());
        assert!(matches!(
            issues[1].code,
            ConfigIssueCode::UnknownProvider { .. }
        ));
        assert!(matches!(
            issues[2].code,
            ConfigIssueCode::UnknownFeature { .. }
        ));
    }

    #[test]
    fn test_validate_warns_without_providers() {
        let mut config = FileConfig::default();
        config.providers.openai.api_key_env = "WORKSPACE_ASSISTANT_TEST_UNSET_KEY".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::NoProviders);
    }
}
