//! solkit_options: solkit.json parsing.
//!
//! Every key is optional; command-line flags override file values and
//! anything left unset falls back to the printer defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// The solkit.json file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolkitConfig {
    /// Spaces per nesting level.
    pub indent_width: Option<usize>,
    pub new_line: Option<NewLine>,
    /// Write the `// SPDX-License-Identifier:` header when the tree has one.
    pub emit_license: Option<bool>,
    /// Directory for `<stem>.sol` outputs instead of stdout.
    pub out_dir: Option<String>,
    /// Treat partial output as failure.
    pub strict: Option<bool>,
}

/// Line terminator written after every printed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewLine {
    Lf,
    Crlf,
}

impl NewLine {
    pub fn as_str(self) -> &'static str {
        match self {
            NewLine::Lf => "\n",
            NewLine::Crlf => "\r\n",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid solkit.json: {0}")]
    Json(#[from] serde_json::Error),
}

impl SolkitConfig {
    /// `self` with every key that `other` sets replaced by `other`'s value.
    pub fn merged_with(&self, other: &SolkitConfig) -> SolkitConfig {
        SolkitConfig {
            indent_width: other.indent_width.or(self.indent_width),
            new_line: other.new_line.or(self.new_line),
            emit_license: other.emit_license.or(self.emit_license),
            out_dir: other.out_dir.clone().or_else(|| self.out_dir.clone()),
            strict: other.strict.or(self.strict),
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }
}

/// Parse a solkit.json file from a string.
pub fn parse_config(content: &str) -> Result<SolkitConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a solkit.json file from a path.
pub fn parse_config_file(path: impl AsRef<Path>) -> Result<SolkitConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&content)
}
