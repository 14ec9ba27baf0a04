// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Structured file formats understood by [`crate::SectionedFileConfig`].

use std::path::Path;

use serde_json::Value;

use crate::error::ConfigFileError;

/// Format of a structured config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
	Toml,
	Json,
}

impl FileFormat {
	/// Detect the format from the file extension (case-insensitive).
	pub fn from_path(path: &Path) -> Result<Self, ConfigFileError> {
		let ext = path
			.extension()
			.and_then(|e| e.to_str())
			.map(str::to_ascii_lowercase);

		match ext.as_deref() {
			Some("toml") => Ok(Self::Toml),
			Some("json") => Ok(Self::Json),
			_ => Err(ConfigFileError::UnsupportedFormat {
				path: path.to_path_buf(),
			}),
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Self::Toml => "toml",
			Self::Json => "json",
		}
	}

	/// Parse file contents into a dynamic value. Key order follows the file.
	pub fn parse(&self, path: &Path, content: &str) -> Result<Value, ConfigFileError> {
		match self {
			Self::Toml => {
				let table: toml::Table =
					toml::from_str(content).map_err(|e| ConfigFileError::TomlParse {
						path: path.to_path_buf(),
						source: e,
					})?;
				Ok(toml_to_json(toml::Value::Table(table)))
			}
			Self::Json => serde_json::from_str(content).map_err(|e| ConfigFileError::JsonParse {
				path: path.to_path_buf(),
				source: e,
			}),
		}
	}
}

/// Convert a TOML value, rendering datetimes as their TOML text.
///
/// Non-finite floats have no JSON form and become `Null`.
fn toml_to_json(value: toml::Value) -> Value {
	match value {
		toml::Value::String(s) => Value::String(s),
		toml::Value::Integer(i) => Value::from(i),
		toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
		toml::Value::Boolean(b) => Value::Bool(b),
		toml::Value::Datetime(dt) => Value::String(dt.to_string()),
		toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
		toml::Value::Table(table) => Value::Object(
			table
				.into_iter()
				.map(|(k, v)| (k, toml_to_json(v)))
				.collect(),
		),
	}
}

/// Human-readable kind of a value, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "a mapping",
	}
}
