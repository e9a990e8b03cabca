//! # Stylesheet Generation Module
//!
//! Build-time rendering of the site stylesheet from the built-in theme
//! registry. Each theme becomes a scoped block of HSL custom properties
//! (light on `:root`, the other modes behind their class markers), followed
//! by the fixed accessibility and utility rules the presentational
//! components rely on.
//!
//! The output is deterministic: the same theme definitions always produce a
//! byte-identical file, so regeneration only dirties version control when a
//! color actually changed.

pub mod generator;
pub mod output;

pub use generator::generate;
pub use output::write_stylesheet;
