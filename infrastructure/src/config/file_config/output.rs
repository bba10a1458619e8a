//! `[output]` section: how command results reach the terminal.

use assistant_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// When text output is colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Let the terminal detection of `colored` decide
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl FileOutputConfig {
    /// The format to render with. A `-o` flag wins over the file.
    pub fn format_with(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.format)
    }

    /// Forced color setting for `format`, or `None` to auto-detect.
    ///
    /// JSON is never colored so it stays machine readable.
    pub fn color_override(&self, format: OutputFormat) -> Option<bool> {
        match (format, self.color) {
            (OutputFormat::Json, _) | (_, ColorChoice::Never) => Some(false),
            (OutputFormat::Text, ColorChoice::Always) => Some(true),
            (OutputFormat::Text, ColorChoice::Auto) => None,
        }
    }
}
