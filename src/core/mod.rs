//! Validation engine and configuration loading.

mod builder;
mod duration;
mod loader;
pub mod rules;
mod validation;
mod validator;

pub use builder::ConfigBuilder;
pub use duration::{DurationError, SignedDuration, parse_duration};
pub use loader::ConfigLoader;
pub use validation::Validate;
pub use validator::{Number, Validator};
