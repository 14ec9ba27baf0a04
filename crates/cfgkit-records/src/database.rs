// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Database connection settings.

use std::fmt;

use serde_json::Value;

use crate::driver::{ConnectionSettings, DriverSettings};
use crate::record::{ConfigRecord, FieldMap, REDACTED};

pub const DEFAULT_DRIVER: &str = "mysql";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_CHARSET: &str = "utf8mb4";
pub const DEFAULT_COLLATION: &str = "utf8mb4_unicode_ci";

/// Connection settings extended with database-specific fields.
///
/// Embeds a [`DriverSettings`] and exposes its fields through
/// [`ConnectionSettings`], so a database record can be used anywhere a plain
/// connection is expected.
#[derive(Clone, PartialEq)]
pub struct DatabaseSettings {
	connection: DriverSettings,
	database: String,
	charset: String,
	collation: String,
	prefix: String,
	prefix_indexes: bool,
	strict: bool,
	engine: Option<String>,
	options: FieldMap,
}

impl DatabaseSettings {
	pub const FIELDS: &'static [&'static str] = &[
		"driver",
		"host",
		"port",
		"username",
		"password",
		"database",
		"charset",
		"collation",
		"prefix",
		"prefix_indexes",
		"strict",
		"engine",
		"options",
	];

	/// Settings for a MySQL database on the default port, with every
	/// database field at its default.
	pub fn new(
		host: impl Into<String>,
		username: impl Into<String>,
		password: impl Into<String>,
		database: impl Into<String>,
	) -> Self {
		let connection = DriverSettings::new(DEFAULT_DRIVER, host, DEFAULT_PORT, username, password);
		Self::from_connection(connection, database)
	}

	/// Layer database fields, at their defaults, on an existing connection.
	pub fn from_connection(connection: DriverSettings, database: impl Into<String>) -> Self {
		Self {
			connection,
			database: database.into(),
			charset: DEFAULT_CHARSET.to_string(),
			collation: DEFAULT_COLLATION.to_string(),
			prefix: String::new(),
			prefix_indexes: true,
			strict: true,
			engine: None,
			options: FieldMap::new(),
		}
	}

	pub fn connection(&self) -> &DriverSettings {
		&self.connection
	}

	pub fn database(&self) -> &str {
		&self.database
	}

	pub fn charset(&self) -> &str {
		&self.charset
	}

	pub fn collation(&self) -> &str {
		&self.collation
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	pub fn prefix_indexes(&self) -> bool {
		self.prefix_indexes
	}

	pub fn strict(&self) -> bool {
		self.strict
	}

	pub fn engine(&self) -> Option<&str> {
		self.engine.as_deref()
	}

	pub fn options(&self) -> &FieldMap {
		&self.options
	}

	/// Value of an option, `None` when the key is absent.
	pub fn option(&self, key: &str) -> Option<&Value> {
		self.options.get(key)
	}

	/// Whether `key` is present in the options, whatever its value.
	pub fn has_option(&self, key: &str) -> bool {
		self.options.contains_key(key)
	}

	#[must_use]
	pub fn with_database(&self, database: impl Into<String>) -> Self {
		Self {
			database: database.into(),
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_charset(&self, charset: impl Into<String>) -> Self {
		Self {
			charset: charset.into(),
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_collation(&self, collation: impl Into<String>) -> Self {
		Self {
			collation: collation.into(),
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

	#[must_use]
	pub fn with_prefix_indexes(&self, prefix_indexes: bool) -> Self {
		Self {
			prefix_indexes,
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_strict(&self, strict: bool) -> Self {
		Self {
			strict,
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_engine(&self, engine: Option<String>) -> Self {
		Self {
			engine,
			..self.clone()
		}
	}

	/// Replace the whole options map.
	#[must_use]
	pub fn with_options(&self, options: FieldMap) -> Self {
		Self {
			options,
			..self.clone()
		}
	}

	/// Append `entry` as a new positional option.
	///
	/// The entry lands under the next integer key (one past the largest
	/// integer key present, or `"0"`). Existing entries are never replaced,
	/// so named options must go through [`Self::with_keyed_option`] or
	/// [`Self::with_options`].
	#[must_use]
	pub fn with_option(&self, entry: impl Into<Value>) -> Self {
		let mut options = self.options.clone();
		options.insert(self.next_option_key(), entry.into());
		Self {
			options,
			..self.clone()
		}
	}

	/// Insert or replace a named option.
	#[must_use]
	pub fn with_keyed_option(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		let mut options = self.options.clone();
		options.insert(key.into(), value.into());
		Self {
			options,
			..self.clone()
		}
	}

	fn next_option_key(&self) -> String {
		let max = self.options.keys().filter_map(|k| k.parse::<u64>().ok()).max();
		match max {
			None => "0".to_string(),
			Some(max) => match max.checked_add(1) {
				Some(next) => next.to_string(),
				// Past u64::MAX: take the first free integer key from len upward.
				// At most len keys are taken, so this stops within len + 1 steps.
				None => {
					let mut candidate = self.options.len() as u64;
					while self.options.contains_key(&candidate.to_string()) {
						candidate += 1;
					}
					candidate.to_string()
				}
			},
		}
	}

	fn with_connection(&self, connection: DriverSettings) -> Self {
		Self {
			connection,
			..self.clone()
		}
	}
}

impl ConnectionSettings for DatabaseSettings {
	fn driver(&self) -> &str {
		self.connection.driver()
	}

	fn host(&self) -> &str {
		self.connection.host()
	}

	fn port(&self) -> u16 {
		self.connection.port()
	}

	fn username(&self) -> &str {
		self.connection.username()
	}

	fn password(&self) -> &str {
		self.connection.password()
	}

	fn with_driver(&self, driver: impl Into<String>) -> Self {
		self.with_connection(self.connection.with_driver(driver))
	}

	fn with_host(&self, host: impl Into<String>) -> Self {
		self.with_connection(self.connection.with_host(host))
	}

	fn with_port(&self, port: u16) -> Self {
		self.with_connection(self.connection.with_port(port))
	}

	fn with_username(&self, username: impl Into<String>) -> Self {
		self.with_connection(self.connection.with_username(username))
	}

	fn with_password(&self, password: impl Into<String>) -> Self {
		self.with_connection(self.connection.with_password(password))
	}
}

impl ConfigRecord for DatabaseSettings {
	fn field_names(&self) -> &'static [&'static str] {
		Self::FIELDS
	}

	fn field(&self, name: &str) -> Option<Value> {
		match name {
			"database" => Some(Value::from(self.database.as_str())),
			"charset" => Some(Value::from(self.charset.as_str())),
			"collation" => Some(Value::from(self.collation.as_str())),
			"prefix" => Some(Value::from(self.prefix.as_str())),
			"prefix_indexes" => Some(Value::Bool(self.prefix_indexes)),
			"strict" => Some(Value::Bool(self.strict)),
			"engine" => self.engine.as_deref().map(Value::from),
			"options" => Some(Value::Object(self.options.clone())),
			_ => self.connection.field(name),
		}
	}
}

impl fmt::Debug for DatabaseSettings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DatabaseSettings")
			.field("driver", &self.connection.driver())
			.field("host", &self.connection.host())
			.field("port", &self.connection.port())
			.field("username", &self.connection.username())
			.field("password", &REDACTED)
			.field("database", &self.database)
			.field("charset", &self.charset)
			.field("collation", &self.collation)
			.field("prefix", &self.prefix)
			.field("prefix_indexes", &self.prefix_indexes)
			.field("strict", &self.strict)
			.field("engine", &self.engine)
			.field("options", &self.options)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	fn sample() -> DatabaseSettings {
		DatabaseSettings::new("localhost", "app", "s3cret", "app_db")
	}

	fn changed_fields(a: &DatabaseSettings, b: &DatabaseSettings) -> Vec<String> {
		let after = b.export_fields();
		a.export_fields()
			.into_iter()
			.filter(|(k, v)| after.get(k) != Some(v))
			.map(|(k, _)| k)
			.collect()
	}

	#[test]
	fn test_new_applies_defaults() {
		let db = sample();
		assert_eq!(db.driver(), "mysql");
		assert_eq!(db.port(), 3306);
		assert_eq!(db.charset(), "utf8mb4");
		assert_eq!(db.collation(), "utf8mb4_unicode_ci");
		assert_eq!(db.prefix(), "");
		assert!(db.prefix_indexes());
		assert!(db.strict());
		assert_eq!(db.engine(), None);
		assert!(db.options().is_empty());
	}

	#[test]
	fn test_from_connection_keeps_driver_fields() {
		let connection = DriverSettings::new("pgsql", "pg.internal", 5432, "root", "pw");
		let db = DatabaseSettings::from_connection(connection.clone(), "analytics");
		assert_eq!(db.connection(), &connection);
		assert_eq!(db.driver(), "pgsql");
		assert_eq!(db.database(), "analytics");
	}

	#[test]
	fn test_export_includes_base_and_derived_fields_once() {
		let db = sample().with_port(3307).with_engine(Some("InnoDB".to_string()));
		let fields = db.export_fields();

		let keys: Vec<_> = fields.keys().map(String::as_str).collect();
		assert_eq!(keys, DatabaseSettings::FIELDS);
		assert_eq!(fields["driver"], "mysql");
		assert_eq!(fields["port"], 3307);
		assert_eq!(fields["engine"], "InnoDB");
		assert_eq!(fields["options"], json!({}));
	}

	#[test]
	fn test_unset_engine_exports_null() {
		assert_eq!(sample().export_fields()["engine"], Value::Null);
	}

	#[test]
	fn test_has_option_is_presence_based() {
		let db = sample();
		assert!(!db.has_option("x"));
		assert_eq!(db.option("x"), None);

		let mut options = FieldMap::new();
		options.insert("x".to_string(), json!(false));
		let db = db.with_options(options);

		assert!(db.has_option("x"));
		assert_eq!(db.option("x"), Some(&json!(false)));
	}

	#[test]
	fn test_with_options_replaces_whole_map() {
		let db = sample().with_keyed_option("a", 1).with_keyed_option("b", 2);
		let mut options = FieldMap::new();
		options.insert("c".to_string(), json!(3));
		let db = db.with_options(options);

		assert!(!db.has_option("a"));
		assert!(!db.has_option("b"));
		assert!(db.has_option("c"));
	}

	#[test]
	fn test_with_option_appends_positionally() {
		let db = sample().with_keyed_option("timeout", 5);
		let db = db.with_option(json!({"ssl": true}));
		let db = db.with_option(json!({"ssl": false}));

		let keys: Vec<_> = db.options().keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["timeout", "0", "1"]);
		assert_eq!(db.option("timeout"), Some(&json!(5)));
		assert_eq!(db.option("0"), Some(&json!({"ssl": true})));
		assert_eq!(db.option("1"), Some(&json!({"ssl": false})));
		assert!(!db.has_option("ssl"));
	}

	#[test]
	fn test_with_option_continues_after_largest_index() {
		let mut options = FieldMap::new();
		options.insert("7".to_string(), json!("seven"));
		let db = sample().with_options(options).with_option("eight");
		assert_eq!(db.option("8"), Some(&json!("eight")));
	}

	#[test]
	fn test_with_option_after_max_integer_key_keeps_entries() {
		let mut options = FieldMap::new();
		options.insert(u64::MAX.to_string(), json!("last"));
		options.insert("0".to_string(), json!("zero"));
		let db = sample().with_options(options).with_option("next");

		assert_eq!(db.options().len(), 3);
		assert_eq!(db.option(&u64::MAX.to_string()), Some(&json!("last")));
		assert_eq!(db.option("0"), Some(&json!("zero")));
		assert_eq!(db.option("2"), Some(&json!("next")));

		let db = db.with_option("again");
		assert_eq!(db.options().len(), 4);
		assert_eq!(db.option("3"), Some(&json!("again")));
	}

	#[test]
	fn test_with_keyed_option_upserts() {
		let db = sample().with_keyed_option("timeout", 5).with_keyed_option("timeout", 10);
		assert_eq!(db.options().len(), 1);
		assert_eq!(db.option("timeout"), Some(&json!(10)));
	}

	#[test]
	fn test_connection_mutators_keep_database_fields() {
		let db = sample().with_charset("latin1");
		let moved = db.with_host("db2").with_password("rotated");
		assert_eq!(moved.host(), "db2");
		assert_eq!(moved.password(), "rotated");
		assert_eq!(moved.charset(), "latin1");
		assert_eq!(moved.database(), "app_db");
		assert_eq!(db.host(), "localhost");
	}

	#[test]
	fn test_debug_redacts_password() {
		let rendered = format!("{:?}", sample());
		assert!(!rendered.contains("s3cret"));
		assert!(rendered.contains("app_db"));
	}

	proptest! {
		/// Each database mutator changes exactly its own exported field.
		#[test]
		fn mutators_change_one_field(
			name in "[a-z_]{1,12}",
			flag in any::<bool>(),
			engine in "[A-Za-z]{1,8}",
		) {
			let original = sample();

			let cases = [
				("database", original.with_database(format!("db_{name}"))),
				("charset", original.with_charset(format!("cs_{name}"))),
				("collation", original.with_collation(format!("co_{name}"))),
				("prefix", original.with_prefix(format!("p_{name}"))),
				("prefix_indexes", original.with_prefix_indexes(!original.prefix_indexes())),
				("strict", original.with_strict(!original.strict())),
				("engine", original.with_engine(Some(engine.clone()))),
				("options", original.with_keyed_option(name.clone(), flag)),
			];

			for (field, derived) in cases {
				prop_assert_eq!(changed_fields(&original, &derived), vec![field.to_string()]);
			}
			prop_assert_eq!(original, sample());
		}

		/// Appending grows the options by one and keeps earlier entries.
		#[test]
		fn with_option_appends_one(values in proptest::collection::vec(any::<i64>(), 0..8), extra in any::<i64>()) {
			let db = values.iter().fold(sample(), |db, v| db.with_option(*v));
			let before = db.options().clone();
			let grown = db.with_option(extra);

			prop_assert_eq!(grown.options().len(), before.len() + 1);
			for (key, value) in &before {
				prop_assert_eq!(grown.option(key), Some(value));
			}
		}
	}
}
