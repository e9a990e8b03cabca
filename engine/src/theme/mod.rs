//! # Theme System Module
//!
//! Theme definitions and lookup for the Sentinela website. Themes are
//! authored as TOML palettes of hex colors, embedded in the binary, parsed
//! and validated once at startup, and consumed in two places: the runtime
//! applier (custom properties on the live document) and the build-time
//! stylesheet generator.
//!
//! ## Components
//!
//! - [`ThemeRegistry`] - Immutable lookup from identifier to theme,
//!   validated at construction
//! - [`ThemeId`] - The closed set of visual modes the site ships
//! - [`Theme`] / [`ThemePalette`] - The color-role model, including the
//!   property-name flattening rule shared by applier and generator
//! - Theme validation - Metadata checks layered on the structural
//!   guarantees of the palette types
//!
//! ## Visual Modes
//!
//! - **Claro** - Default light theme using the civil defense brand palette
//! - **Escuro** - Dark theme preserving brand identity at AAA contrast
//! - **Alto Contraste** - Yellow-on-black for low vision
//! - **Monocromático** - Grayscale for color blindness and print
//!
//! ## Basic Usage
//!
//! ```no_run
//! use engine::theme::{ThemeId, ThemeRegistry};
//!
//! let registry = ThemeRegistry::global();
//! let theme = registry.get(ThemeId::Dark)?;
//! println!("{}: {}", theme.metadata.name, theme.metadata.description);
//! # Ok::<(), engine::theme::ThemeError>(())
//! ```
//!
//! ## Data Quality
//!
//! Palette fields are typed: mandatory roles are plain struct fields,
//! genuinely theme-dependent roles (`destructive_inverted`, `success`,
//! `warning`) are `Option`s, and `deny_unknown_fields` refuses stray or
//! misspelled roles at parse time. A registry that constructs successfully
//! can always be fully applied.

pub mod errors;
pub mod registry;
pub mod types;
pub mod validation;

pub use errors::ThemeError;
pub use registry::ThemeRegistry;
pub use types::{AccentRole, SurfaceRole, Theme, ThemeId, ThemeMetadata, ThemePalette};
