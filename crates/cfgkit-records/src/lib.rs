// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Immutable settings records for cfgkit.
//!
//! This crate provides:
//! - [`ConfigRecord`]: export of a record's declared fields as an ordered map
//! - [`DriverSettings`] and [`DatabaseSettings`]: connection settings sharing
//!   the [`ConnectionSettings`] contract
//! - [`CookieSettings`]: cookie attributes
//! - Factories that build default-populated records
//!
//! Records are never mutated in place. Every `with_*` method returns a new
//! record with exactly one field replaced.
//!
//! ```
//! use cfgkit_records::{ConfigRecord, ConnectionSettings, DatabaseSettings};
//!
//! let db = DatabaseSettings::new("localhost", "app", "secret", "app_db");
//! let replica = db.with_host("replica.internal");
//!
//! assert_eq!(db.host(), "localhost");
//! assert_eq!(replica.host(), "replica.internal");
//! assert_eq!(replica.export_fields()["database"], "app_db");
//! ```

pub mod cookie;
pub mod database;
pub mod driver;
pub mod factory;
pub mod record;

pub use cookie::CookieSettings;
pub use database::DatabaseSettings;
pub use driver::{ConnectionSettings, DriverSettings};
pub use factory::{
	CookieParams, CookieSettingsFactory, DriverParams, DriverSettingsFactory,
	DEFAULT_COOKIE_LIFETIME_SECS,
};
pub use record::{ConfigRecord, FieldMap, REDACTED};

pub use serde_json::Value;
