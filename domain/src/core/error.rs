//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid model id: {0}")]
    InvalidModel(String),

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Chat title is too long ({len} > {max} characters)")]
    TitleTooLong { len: usize, max: usize },

    #[error("Message must not be empty")]
    EmptyMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_too_long_display() {
        let error = DomainError::TitleTooLong { len: 300, max: 250 };
        assert_eq!(
            error.to_string(),
            "Chat title is too long (300 > 250 characters)"
        );
    }

    #[test]
    fn test_empty_message_display() {
        assert_eq!(
            DomainError::EmptyMessage.to_string(),
            "Message must not be empty"
        );
    }
}
