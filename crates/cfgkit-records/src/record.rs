// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Field export shared by every settings record.

use serde_json::Value;

/// Ordered map of field name to value.
pub type FieldMap = serde_json::Map<String, Value>;

/// Placeholder printed instead of sensitive values in `Debug` output.
pub const REDACTED: &str = "[REDACTED]";

/// A settings record that can export its declared fields.
///
/// Implementors describe their fields with a static name table instead of
/// runtime reflection. A derived record lists the base fields first, then its
/// own, and answers [`ConfigRecord::field`] for its own names before
/// delegating to the base.
pub trait ConfigRecord {
	/// Declared field names, in declaration order. Each name appears once.
	fn field_names(&self) -> &'static [&'static str];

	/// Current value of a declared field, `None` if the field is unset or
	/// unknown.
	fn field(&self, name: &str) -> Option<Value>;

	/// Export every declared field. Unset fields map to [`Value::Null`].
	fn export_fields(&self) -> FieldMap {
		let mut fields = FieldMap::new();
		for name in self.field_names() {
			let value = self.field(name).unwrap_or(Value::Null);
			fields.insert((*name).to_string(), value);
		}
		fields
	}
}
