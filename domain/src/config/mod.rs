//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod display;
mod output_format;

pub use display::DisplayOptions;
pub use output_format::OutputFormat;
