// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reader treating a structured config file as a tree of sections.
//!
//! A file such as
//!
//! ```toml
//! [db]
//! host = "local"
//!
//! [app]
//! debug = true
//! ```
//!
//! has the sections `db` and `app`; `host` is a subsection of `db`.
//!
//! Every query re-reads the file. Nothing is cached, so a file edited
//! between two calls is observed by the second one. Callers sharing a path
//! across threads synchronize externally.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use cfgkit_records::{ConfigRecord, FieldMap};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::ConfigFileError;
use crate::format::{value_kind, FileFormat};

/// Handle on a structured config file.
///
/// Unbound until a path is set; an unbound handle reads as "file not found".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionedFileConfig {
	file_path: PathBuf,
}

impl SectionedFileConfig {
	pub const FIELDS: &'static [&'static str] = &["file_path"];

	pub fn new(file_path: impl Into<PathBuf>) -> Self {
		Self {
			file_path: file_path.into(),
		}
	}

	/// Return a handle bound to `file_path`. The file is not read.
	#[must_use]
	pub fn set_file(&self, file_path: impl Into<PathBuf>) -> Self {
		Self {
			file_path: file_path.into(),
		}
	}

	/// Current path; empty when unbound.
	pub fn file(&self) -> &Path {
		&self.file_path
	}

	pub fn is_bound(&self) -> bool {
		!self.file_path.as_os_str().is_empty()
	}

	/// Load the file and return its top-level mapping.
	pub fn read(&self) -> Result<FieldMap, ConfigFileError> {
		let path = self.file_path.as_path();
		if !path.is_file() {
			return Err(ConfigFileError::not_found(path));
		}

		let format = FileFormat::from_path(path)?;
		debug!(path = %path.display(), format = format.name(), "loading config file");

		let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
			path: path.to_path_buf(),
			source: e,
		})?;

		match format.parse(path, &content)? {
			Value::Object(map) => {
				trace!(path = %path.display(), sections = map.len(), "parsed config file");
				Ok(map)
			}
			other => Err(ConfigFileError::InvalidConfigFile {
				path: path.to_path_buf(),
				found: value_kind(&other),
			}),
		}
	}

	/// Same data as [`Self::read`], wrapped in a read-only view.
	pub fn read_as_object(&self) -> Result<ConfigObject, ConfigFileError> {
		self.read().map(ConfigObject)
	}

	/// Deserialize the whole file into `T`.
	pub fn read_into<T: DeserializeOwned>(&self) -> Result<T, ConfigFileError> {
		let map = self.read()?;
		serde_json::from_value(Value::Object(map)).map_err(|e| ConfigFileError::Deserialize {
			path: self.file_path.clone(),
			source: e,
		})
	}

	/// Top-level key names in file order.
	pub fn sections(&self) -> Result<Vec<String>, ConfigFileError> {
		Ok(self.read()?.keys().cloned().collect())
	}

	/// Content of a mapping-valued top-level key; `None` when the key is
	/// absent or holds a scalar.
	pub fn section(&self, name: &str) -> Result<Option<FieldMap>, ConfigFileError> {
		Ok(section_of(&self.read()?, name).cloned())
	}

	/// Key names of a section, `None` when the section is absent *or* empty.
	///
	/// Use [`Self::section_exists`] to tell those two apart.
	pub fn sub_sections(&self, name: &str) -> Result<Option<Vec<String>>, ConfigFileError> {
		let map = self.read()?;
		Ok(section_of(&map, name)
			.filter(|section| !section.is_empty())
			.map(|section| section.keys().cloned().collect()))
	}

	/// Whether a section is present and non-empty. An empty section reads as
	/// missing here; see [`Self::section_exists`].
	pub fn has_section(&self, name: &str) -> Result<bool, ConfigFileError> {
		let map = self.read()?;
		Ok(section_of(&map, name).is_some_and(|section| !section.is_empty()))
	}

	/// Whether a section is present, empty or not.
	pub fn section_exists(&self, name: &str) -> Result<bool, ConfigFileError> {
		Ok(section_of(&self.read()?, name).is_some())
	}
}

impl ConfigRecord for SectionedFileConfig {
	fn field_names(&self) -> &'static [&'static str] {
		Self::FIELDS
	}

	fn field(&self, name: &str) -> Option<Value> {
		match name {
			"file_path" => Some(Value::from(self.file_path.to_string_lossy().into_owned())),
			_ => None,
		}
	}
}

fn section_of<'a>(map: &'a FieldMap, name: &str) -> Option<&'a FieldMap> {
	map.get(name).and_then(Value::as_object)
}

/// Read-only view over a loaded config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigObject(FieldMap);

impl ConfigObject {
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	pub fn section(&self, name: &str) -> Option<&FieldMap> {
		section_of(&self.0, name)
	}

	pub fn sections(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn into_inner(self) -> FieldMap {
		self.0
	}
}

impl Deref for ConfigObject {
	type Target = FieldMap;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
