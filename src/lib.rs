//! # vetted-config
//!
//! Layered service configuration with an accumulating validation engine.
//!
//! ## Overview
//!
//! `vetted-config` checks that a configuration tree is well-formed before a
//! service starts:
//! - A [`Validator`](core::Validator) offering a closed library of named checks
//!   (presence, string shape, numeric range, format classes) that records every
//!   failure instead of stopping at the first one
//! - A [`Validate`](core::Validate) protocol where each section checks its own
//!   fields, validates its children, and merges everything under its label
//! - A ready-made service tree ([`sections::Configuration`]) with documented
//!   defaults
//! - Standard configuration precedence (defaults → files → env vars) on top of
//!   the `config` crate
//!
//! ## Quick Start
//!
//! ```rust
//! use vetted_config::prelude::*;
//!
//! let mut config = Configuration::default();
//! assert!(config.validate().is_ok());
//!
//! config.databases.session.database = 20;
//! config.databases.session.tls = true;
//! config.databases.session.certificate.clear();
//!
//! let err = config.validate().unwrap_err();
//! assert_eq!(err.len(), 2);
//! for violation in err.violations() {
//!     assert_eq!(violation.section(), Some("session"));
//!     println!("{}", violation);
//! }
//! ```
//!
//! Loading layers files and environment variables over the defaults and
//! validates the result:
//!
//! ```rust,no_run
//! use vetted_config::prelude::*;
//!
//! # fn example() -> Result<()> {
//! // APP_DATABASES__SESSION__PORT=6380 -> databases.session.port = 6380
//! let config = Configuration::builder()
//!     .with_file("/etc/app/config.yaml")
//!     .with_optional_file("config.toml")
//!     .with_env_overrides("APP", "__")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod sections;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{ConfigBuilder, Validate, Validator};
    pub use crate::error::{ConfigError, Result, ValidationError, Violation};
    pub use crate::sections::{
        AddressFamily, Configuration, Databases, Parameters, Relational, Security, Session,
    };
}
