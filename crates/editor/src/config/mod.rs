//! Editor configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config.
//! Keys are kebab-case and unknown keys are rejected:
//!
//! ```toml
//! page-size = 3000
//! min-chars-for-smart-analysis = 300
//! history-limit = 100
//! default-tab = "analytics"
//! split = true
//! ```

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use lexdraft_editor_core::{DEFAULT_HISTORY_LIMIT, DEFAULT_PAGE_SIZE};
use serde::Deserialize;
use thiserror::Error;

use crate::gate::MIN_CHARS_FOR_SMART_ANALYSIS;
use crate::view::Tab;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A value parsed but is not usable.
	#[error("invalid value for `{field}`: {reason}")]
	Invalid {
		field: &'static str,
		reason: &'static str,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Tunables for [`DraftEditor`](crate::DraftEditor).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EditorConfig {
	/// Read-mode page budget in chars.
	pub page_size: usize,
	/// Trimmed length a document needs before any analysis runs.
	pub min_chars_for_smart_analysis: usize,
	/// Snapshots retained per document.
	pub history_limit: usize,
	/// Tab selected when a document is loaded without an explicit tab.
	pub default_tab: Tab,
	/// Initial split-view flag.
	pub split: bool,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			min_chars_for_smart_analysis: MIN_CHARS_FOR_SMART_ANALYSIS,
			history_limit: DEFAULT_HISTORY_LIMIT,
			default_tab: Tab::default(),
			split: true,
		}
	}
}

impl EditorConfig {
	/// Parses and validates a TOML config.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses, and validates a TOML config file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&input)?;
		tracing::debug!(path = %path.display(), ?config, "config.load");
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.page_size == 0 {
			return Err(ConfigError::Invalid {
				field: "page-size",
				reason: "must be greater than zero",
			});
		}
		if self.history_limit == 0 {
			return Err(ConfigError::Invalid {
				field: "history-limit",
				reason: "must keep at least one snapshot",
			});
		}
		Ok(())
	}
}
