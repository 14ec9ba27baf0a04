// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Connection settings: driver, host, port and credentials.

use std::fmt;

use serde_json::Value;

use crate::record::{ConfigRecord, REDACTED};

/// Read access and copy-on-write mutators for connection fields.
///
/// Implemented by [`DriverSettings`] and by every record that embeds one.
/// Values are stored as given; nothing is validated.
pub trait ConnectionSettings {
	fn driver(&self) -> &str;
	fn host(&self) -> &str;
	fn port(&self) -> u16;
	fn username(&self) -> &str;
	fn password(&self) -> &str;

	/// Return a copy with the driver replaced.
	#[must_use]
	fn with_driver(&self, driver: impl Into<String>) -> Self
	where
		Self: Sized;

	/// Return a copy with the host replaced.
	#[must_use]
	fn with_host(&self, host: impl Into<String>) -> Self
	where
		Self: Sized;

	/// Return a copy with the port replaced.
	#[must_use]
	fn with_port(&self, port: u16) -> Self
	where
		Self: Sized;

	/// Return a copy with the username replaced.
	#[must_use]
	fn with_username(&self, username: impl Into<String>) -> Self
	where
		Self: Sized;

	/// Return a copy with the password replaced.
	#[must_use]
	fn with_password(&self, password: impl Into<String>) -> Self
	where
		Self: Sized;
}

/// Connection settings for an arbitrary driver.
#[derive(Clone, PartialEq, Eq)]
pub struct DriverSettings {
	driver: String,
	host: String,
	port: u16,
	username: String,
	password: String,
}

impl DriverSettings {
	pub const FIELDS: &'static [&'static str] = &["driver", "host", "port", "username", "password"];

	pub fn new(
		driver: impl Into<String>,
		host: impl Into<String>,
		port: u16,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		Self {
			driver: driver.into(),
			host: host.into(),
			port,
			username: username.into(),
			password: password.into(),
		}
	}
}

impl ConnectionSettings for DriverSettings {
	fn driver(&self) -> &str {
		&self.driver
	}

	fn host(&self) -> &str {
		&self.host
	}

	fn port(&self) -> u16 {
		self.port
	}

	fn username(&self) -> &str {
		&self.username
	}

	fn password(&self) -> &str {
		&self.password
	}

	fn with_driver(&self, driver: impl Into<String>) -> Self {
		Self {
			driver: driver.into(),
			..self.clone()
		}
	}

	fn with_host(&self, host: impl Into<String>) -> Self {
		Self {
			host: host.into(),
			..self.clone()
		}
	}

	fn with_port(&self, port: u16) -> Self {
		Self {
			port,
			..self.clone()
		}
	}

	fn with_username(&self, username: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			..self.clone()
		}
	}

	fn with_password(&self, password: impl Into<String>) -> Self {
		Self {
			password: password.into(),
			..self.clone()
		}
	}
}

impl ConfigRecord for DriverSettings {
	fn field_names(&self) -> &'static [&'static str] {
		Self::FIELDS
	}

	fn field(&self, name: &str) -> Option<Value> {
		match name {
			"driver" => Some(Value::from(self.driver.as_str())),
			"host" => Some(Value::from(self.host.as_str())),
			"port" => Some(Value::from(self.port)),
			"username" => Some(Value::from(self.username.as_str())),
			"password" => Some(Value::from(self.password.as_str())),
			_ => None,
		}
	}
}

impl fmt::Debug for DriverSettings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DriverSettings")
			.field("driver", &self.driver)
			.field("host", &self.host)
			.field("port", &self.port)
			.field("username", &self.username)
			.field("password", &REDACTED)
			.finish()
	}
}
