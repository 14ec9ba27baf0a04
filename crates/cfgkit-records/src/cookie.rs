// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cookie settings.

use serde_json::Value;

use crate::record::ConfigRecord;

/// Attributes of a single cookie.
///
/// A plain data container: attribute values are not validated, that is the
/// job of whatever eventually writes the `Set-Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
	name: String,
	value: String,
	/// Expiry timestamp, or an options bitmask for callers that pack one in.
	expires_or_options: i64,
	path: String,
	domain: String,
	secure: bool,
	http_only: bool,
	prefix: String,
}

impl CookieSettings {
	pub const FIELDS: &'static [&'static str] = &[
		"name",
		"value",
		"expires_or_options",
		"path",
		"domain",
		"secure",
		"http_only",
		"prefix",
	];

	/// A cookie named `name` with every other attribute at its default.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: String::new(),
			expires_or_options: 0,
			path: String::new(),
			domain: String::new(),
			secure: false,
			http_only: false,
			prefix: String::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn expires_or_options(&self) -> i64 {
		self.expires_or_options
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn domain(&self) -> &str {
		&self.domain
	}

	pub fn secure(&self) -> bool {
		self.secure
	}

	pub fn http_only(&self) -> bool {
		self.http_only
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	#[must_use]
	pub fn with_name(&self, name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_value(&self, value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_expires_or_options(&self, expires_or_options: i64) -> Self {
		Self {
			expires_or_options,
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_path(&self, path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_domain(&self, domain: impl Into<String>) -> Self {
		Self {
			domain: domain.into(),
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_secure(&self, secure: bool) -> Self {
		Self {
			secure,
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_http_only(&self, http_only: bool) -> Self {
		Self {
			http_only,
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			..self.clone()
		}
	}
}

impl ConfigRecord for CookieSettings {
	fn field_names(&self) -> &'static [&'static str] {
		Self::FIELDS
	}

	fn field(&self, name: &str) -> Option<Value> {
		match name {
			"name" => Some(Value::from(self.name.as_str())),
			"value" => Some(Value::from(self.value.as_str())),
			"expires_or_options" => Some(Value::from(self.expires_or_options)),
			"path" => Some(Value::from(self.path.as_str())),
			"domain" => Some(Value::from(self.domain.as_str())),
			"secure" => Some(Value::Bool(self.secure)),
			"http_only" => Some(Value::Bool(self.http_only)),
			"prefix" => Some(Value::from(self.prefix.as_str())),
			_ => None,
		}
	}
}
