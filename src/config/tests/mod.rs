//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Composing configuration from explicit sources
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Input and remote URL resolution tests

mod field_resolution;
mod helpers;
