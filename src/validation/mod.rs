//! Configuration and batch validation.

mod validate;

pub use validate::{validate_config, validate_run, validate_segments, ValidationResult};
