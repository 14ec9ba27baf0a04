// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! File-backed configuration for cfgkit.
//!
//! This crate provides:
//! - [`SectionedFileConfig`]: a TOML or JSON file read as a tree of sections
//!   and subsections, re-read on every query
//! - [`EditorSettings`]: typed lookups over a flat ini-style settings file
//! - [`ConfigFileError`]: the failures both can raise
//!
//! # Usage
//!
//! ```no_run
//! use cfgkit_files::{ConfigFileError, SectionedFileConfig};
//!
//! fn main() -> Result<(), ConfigFileError> {
//!     let config = SectionedFileConfig::default().set_file("/etc/app/config.toml");
//!     for name in config.sections()? {
//!         println!("{name}: {:?}", config.sub_sections(&name)?);
//!     }
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod format;
pub mod sectioned;

pub use editor::EditorSettings;
pub use error::ConfigFileError;
pub use format::FileFormat;
pub use sectioned::{ConfigObject, SectionedFileConfig};
