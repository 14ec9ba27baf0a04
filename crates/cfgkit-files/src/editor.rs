// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Editor settings loaded from a flat ini-style file (`.editorconfig`).

use std::path::Path;

use cfgkit_records::{ConfigRecord, FieldMap};
use ini::{Ini, ParseOption};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::ConfigFileError;

/// Settings read once from an ini-style file.
///
/// Root keys (before any `[group]` header) map to their raw string values;
/// each group maps to a nested mapping of its keys. Values are kept verbatim:
/// `root = true` reads back as the string `"true"`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
	settings: FieldMap,
}

impl EditorSettings {
	pub const FIELDS: &'static [&'static str] = &["settings"];

	/// Load settings from `path`. Load failures propagate.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
		let path = path.as_ref();
		if !path.is_file() {
			return Err(ConfigFileError::not_found(path));
		}

		debug!(path = %path.display(), "loading editor settings");
		let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
			path: path.to_path_buf(),
			source: e,
		})?;

		let settings = parse_ini(path, &content)?;
		trace!(path = %path.display(), keys = settings.len(), "parsed editor settings");
		Ok(Self { settings })
	}

	pub fn root(&self) -> Option<&str> {
		self.get("root")
	}

	pub fn indent_size(&self) -> Option<&str> {
		self.get("indent_size")
	}

	pub fn end_of_line(&self) -> Option<&str> {
		self.get("end_of_line")
	}

	pub fn charset(&self) -> Option<&str> {
		self.get("charset")
	}

	/// Raw value of a root-level key.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.settings.get(key).and_then(Value::as_str)
	}

	/// Keys of a bracketed group, e.g. `group("*.rs")`.
	pub fn group(&self, name: &str) -> Option<&FieldMap> {
		self.settings.get(name).and_then(Value::as_object)
	}

	/// Group names in file order.
	pub fn groups(&self) -> Vec<&str> {
		self.settings
			.iter()
			.filter(|(_, v)| v.is_object())
			.map(|(k, _)| k.as_str())
			.collect()
	}

	pub fn settings(&self) -> &FieldMap {
		&self.settings
	}
}

impl ConfigRecord for EditorSettings {
	fn field_names(&self) -> &'static [&'static str] {
		Self::FIELDS
	}

	fn field(&self, name: &str) -> Option<Value> {
		match name {
			"settings" => Some(Value::Object(self.settings.clone())),
			_ => None,
		}
	}
}

fn parse_ini(path: &Path, content: &str) -> Result<FieldMap, ConfigFileError> {
	let opt = ParseOption {
		enabled_quote: false,
		enabled_escape: false,
		..ParseOption::default()
	};
	let ini = Ini::load_from_str_opt(content, opt).map_err(|e| ConfigFileError::IniParse {
		path: path.to_path_buf(),
		message: e.to_string(),
	})?;

	let mut settings = FieldMap::new();
	for (section, properties) in ini.iter() {
		match section {
			None => {
				for (key, value) in properties.iter() {
					settings.insert(key.to_string(), Value::from(value));
				}
			}
			Some(name) => {
				let entry = settings
					.entry(name.to_string())
					.or_insert_with(|| Value::Object(FieldMap::new()));
				if !entry.is_object() {
					*entry = Value::Object(FieldMap::new());
				}
				if let Value::Object(group) = entry {
					for (key, value) in properties.iter() {
						group.insert(key.to_string(), Value::from(value));
					}
				}
			}
		}
	}
	Ok(settings)
}
