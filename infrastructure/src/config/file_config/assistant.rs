//! Assistant configuration from TOML (`[assistant]` section)

use assistant_application::AssistantSettings;
use assistant_domain::{ConfigIssue, ConfigIssueCode, ModelId};
use serde::{Deserialize, Serialize};

/// Assistant configuration from TOML
///
/// # Example
///
/// ```toml
/// [assistant]
/// model = "openai/gpt-4o-mini"
/// history_limit = 20
/// timeout_seconds = 60
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Model every chat talks to (`provider/model`)
    pub model: String,
    /// Overrides the built-in system prompt
    pub system_prompt: Option<String>,
    /// Number of previous messages sent with each question
    pub history_limit: usize,
    /// Reply timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        Self {
            model: ModelId::default().to_string(),
            system_prompt: None,
            history_limit: AssistantSettings::default().history_limit,
            timeout_seconds: Some(120),
        }
    }
}

impl FileAssistantConfig {
    /// Parse the model id, collecting an issue when it is malformed.
    pub fn parse_model(&self) -> (Option<ModelId>, Vec<ConfigIssue>) {
        match self.model.parse::<ModelId>() {
            Ok(model) => (Some(model), Vec::new()),
            Err(e) => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidModel {
                        field: "assistant.model".to_string(),
                        value: self.model.clone(),
                    },
                    format!("assistant.model: {}", e),
                )],
            ),
        }
    }

    /// Convert into application settings.
    ///
    /// A malformed model falls back to the default model; `validate()`
    /// reports it as an error.
    pub fn to_settings(&self) -> AssistantSettings {
        let mut settings = AssistantSettings::default()
            .with_model(self.parse_model().0.unwrap_or_default())
            .with_timeout_seconds(self.timeout_seconds);
        if let Some(prompt) = self.system_prompt.as_ref().filter(|p| !p.trim().is_empty()) {
            settings.system_prompt = prompt.clone();
        }
        settings.history_limit = self.history_limit;
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_to_settings() {
        let config = FileAssistantConfig {
            model: "echo/test".to_string(),
            system_prompt: Some("Be brief.".to_string()),
            history_limit: 4,
            timeout_seconds: None,
        };
        let settings = config.to_settings();
        assert_eq!(settings.model.to_string(), "echo/test");
        assert_eq!(settings.system_prompt, "Be brief.");
        assert_eq!(settings.history_limit, 4);
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn test_default_timeout() {
        let settings = FileAssistantConfig::default().to_settings();
        assert_eq!(settings.timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_invalid_model_is_reported() {
        let config = FileAssistantConfig {
            model: "openai/".to_string(),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert!(model.is_none());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(config.to_settings().model, ModelId::default());
    }
}
