// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Config file error types.

use std::path::PathBuf;

/// Errors raised while loading a config or settings file.
///
/// Nothing here is retried or defaulted; every variant propagates to the
/// caller as is.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
	/// The path does not reference an existing file
	#[error("Config file not found: {}", .path.display())]
	NotFound { path: PathBuf },

	/// The file loaded, but not to a mapping
	#[error("Invalid config file {}: expected a mapping at the top level, found {found}", .path.display())]
	InvalidConfigFile { path: PathBuf, found: &'static str },

	/// I/O error reading the file
	#[error("Failed to read config file {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// TOML parsing error
	#[error("TOML parse error in {}: {source}", .path.display())]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// JSON parsing error
	#[error("JSON parse error in {}: {source}", .path.display())]
	JsonParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// INI parsing error
	#[error("INI parse error in {}: {message}", .path.display())]
	IniParse { path: PathBuf, message: String },

	/// Extension maps to no known structured format
	#[error("Unsupported config file format: {}", .path.display())]
	UnsupportedFormat { path: PathBuf },

	/// Loaded data does not fit the requested type
	#[error("Config file {} does not match the expected shape: {source}", .path.display())]
	Deserialize {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl ConfigFileError {
	/// Create a not-found error
	pub fn not_found(path: impl Into<PathBuf>) -> Self {
		Self::NotFound { path: path.into() }
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}

	pub fn is_invalid(&self) -> bool {
		matches!(self, Self::InvalidConfigFile { .. })
	}

	/// Path of the file the error is about.
	pub fn path(&self) -> &std::path::Path {
		match self {
			Self::NotFound { path }
			| Self::InvalidConfigFile { path, .. }
			| Self::Read { path, .. }
			| Self::TomlParse { path, .. }
			| Self::JsonParse { path, .. }
			| Self::IniParse { path, .. }
			| Self::UnsupportedFormat { path }
			| Self::Deserialize { path, .. } => path,
		}
	}
}
