// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Factories producing default-populated records.

use serde_json::Value;

use crate::cookie::CookieSettings;
use crate::driver::DriverSettings;
use crate::record::FieldMap;

/// Cookie lifetime applied by [`CookieSettingsFactory`]: one day.
pub const DEFAULT_COOKIE_LIFETIME_SECS: i64 = 86_400;

/// Inputs for [`DriverSettingsFactory::create_config_driver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverParams {
	pub driver: String,
	pub host: String,
	pub port: u16,
	pub username: String,
	pub password: String,
}

impl Default for DriverParams {
	fn default() -> Self {
		Self {
			driver: String::new(),
			host: String::new(),
			port: 80,
			username: String::new(),
			password: String::new(),
		}
	}
}

/// Builds [`DriverSettings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverSettingsFactory;

impl DriverSettingsFactory {
	pub fn new() -> Self {
		Self
	}

	pub fn create_config_driver(&self, params: DriverParams) -> DriverSettings {
		DriverSettings::new(
			params.driver,
			params.host,
			params.port,
			params.username,
			params.password,
		)
	}

	/// Driver settings built entirely from [`DriverParams::default`].
	pub fn create_default(&self) -> DriverSettings {
		self.create_config_driver(DriverParams::default())
	}

	/// Field names this factory understands, with their blank defaults.
	pub fn defaults(&self) -> FieldMap {
		let mut fields = FieldMap::new();
		fields.insert("driver".to_string(), Value::from(""));
		fields.insert("host".to_string(), Value::from(""));
		fields.insert("port".to_string(), Value::from(0));
		fields.insert("username".to_string(), Value::from(""));
		fields.insert("password".to_string(), Value::from(""));
		fields
	}
}

/// Inputs for [`CookieSettingsFactory::create_config_cookie_with`], everything
/// but the cookie name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieParams {
	pub value: String,
	pub expires_or_options: i64,
	pub path: String,
	pub domain: String,
	pub secure: bool,
	pub http_only: bool,
}

impl Default for CookieParams {
	fn default() -> Self {
		Self {
			value: String::new(),
			expires_or_options: DEFAULT_COOKIE_LIFETIME_SECS,
			path: String::new(),
			domain: String::new(),
			secure: false,
			http_only: false,
		}
	}
}

/// Builds [`CookieSettings`] with factory-level defaults.
///
/// The factory default expiry is [`DEFAULT_COOKIE_LIFETIME_SECS`], unlike
/// [`CookieSettings::new`] which starts at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSettingsFactory;

impl CookieSettingsFactory {
	pub fn new() -> Self {
		Self
	}

	pub fn create_config_cookie(&self, name: impl Into<String>) -> CookieSettings {
		self.create_config_cookie_with(name, CookieParams::default())
	}

	pub fn create_config_cookie_with(
		&self,
		name: impl Into<String>,
		params: CookieParams,
	) -> CookieSettings {
		CookieSettings::new(name)
			.with_value(params.value)
			.with_expires_or_options(params.expires_or_options)
			.with_path(params.path)
			.with_domain(params.domain)
			.with_secure(params.secure)
			.with_http_only(params.http_only)
	}

	/// Field names this factory understands, with their defaults.
	pub fn defaults(&self) -> FieldMap {
		let mut fields = FieldMap::new();
		fields.insert("name".to_string(), Value::from(""));
		fields.insert("value".to_string(), Value::from(""));
		fields.insert(
			"expires_or_options".to_string(),
			Value::from(DEFAULT_COOKIE_LIFETIME_SECS),
		);
		fields.insert("path".to_string(), Value::from(""));
		fields.insert("domain".to_string(), Value::from(""));
		fields.insert("secure".to_string(), Value::Bool(false));
		fields.insert("http_only".to_string(), Value::Bool(false));
		fields
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::driver::ConnectionSettings;
	use crate::record::ConfigRecord;

	#[test]
	fn test_create_default_driver() {
		let driver = DriverSettingsFactory::new().create_default();
		assert_eq!(driver.driver(), "");
		assert_eq!(driver.host(), "");
		assert_eq!(driver.port(), 80);
		assert_eq!(driver.username(), "");
		assert_eq!(driver.password(), "");
	}

	#[test]
	fn test_create_config_driver_with_overrides() {
		let driver = DriverSettingsFactory::new().create_config_driver(DriverParams {
			driver: "redis".to_string(),
			host: "cache.internal".to_string(),
			port: 6379,
			..Default::default()
		});
		assert_eq!(driver.driver(), "redis");
		assert_eq!(driver.port(), 6379);
		assert_eq!(driver.username(), "");
	}

	#[test]
	fn test_driver_defaults_cover_record_fields() {
		let defaults = DriverSettingsFactory::new().defaults();
		let keys: Vec<_> = defaults.keys().map(String::as_str).collect();
		assert_eq!(keys, DriverSettings::FIELDS);
		assert_eq!(defaults["port"], 0);
		assert!(defaults
			.iter()
			.filter(|(k, _)| k.as_str() != "port")
			.all(|(_, v)| v == ""));
	}

	#[test]
	fn test_create_config_cookie_uses_factory_expiry() {
		let cookie = CookieSettingsFactory::new().create_config_cookie("session");
		assert_eq!(cookie.name(), "session");
		assert_eq!(cookie.value(), "");
		assert_eq!(cookie.expires_or_options(), 86_400);
		assert_ne!(
			cookie.expires_or_options(),
			CookieSettings::new("session").expires_or_options()
		);
	}

	#[test]
	fn test_create_config_cookie_with_params() {
		let cookie = CookieSettingsFactory::new().create_config_cookie_with(
			"prefs",
			CookieParams {
				value: "dark".to_string(),
				secure: true,
				http_only: true,
				..Default::default()
			},
		);
		assert_eq!(cookie.value(), "dark");
		assert!(cookie.secure());
		assert!(cookie.http_only());
		assert_eq!(cookie.expires_or_options(), DEFAULT_COOKIE_LIFETIME_SECS);
		assert_eq!(cookie.prefix(), "");
	}

	#[test]
	fn test_cookie_defaults_match_factory_surface() {
		let defaults = CookieSettingsFactory::new().defaults();
		let keys: Vec<_> = defaults.keys().map(String::as_str).collect();
		assert_eq!(
			keys,
			vec![
				"name",
				"value",
				"expires_or_options",
				"path",
				"domain",
				"secure",
				"http_only"
			]
		);
		assert_eq!(defaults["expires_or_options"], 86_400);

		let cookie = CookieSettingsFactory::new().create_config_cookie("");
		let exported = cookie.export_fields();
		for (key, value) in &defaults {
			assert_eq!(exported.get(key), Some(value), "field {key}");
		}
	}
}
