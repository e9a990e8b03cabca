//! # Sentinela Engine Library
//!
//! Core theming and accessibility engine for the Defesa Civil São Carlos
//! website. This library owns the color model, the built-in theme
//! definitions, the accessibility-settings state, and the logic that
//! projects both onto a presentation scope — everything the presentational
//! layer consumes but none of the markup.
//!
//! ## Modules
//!
//! - [`color`] - Hex parsing and RGB to HSL conversion
//! - [`theme`] - Theme model, embedded definitions, registry and validation
//! - [`settings`] - Accessibility settings record and subscription store
//! - [`applier`] - Projection of themes and settings onto a presentation sink
//! - [`speech`] - Text-to-speech announcements behind an injected capability
//! - [`validation`] - Shared validation trait
//!
//! The presentation scope and the speech capability are both traits
//! ([`applier::PresentationSink`], [`speech::SpeechSynthesizer`]), so the
//! whole engine runs headless under test.

pub mod applier;
pub mod color;
pub mod settings;
pub mod speech;
pub mod theme;
pub mod validation;

// Re-export the types most consumers need directly.
pub use applier::{MemorySink, PresentationSink, Scope};
pub use color::{hex_to_hsl, ColorError, HexColor, Hsl, Rgb};
pub use settings::{
    AccessibilitySettings, AccessibilityStore, FontSize, LineHeight, SettingsError, SettingsUpdate,
};
pub use speech::{SpeechAnnouncer, SpeechSynthesizer};
pub use theme::{Theme, ThemeError, ThemeId, ThemeRegistry};
pub use validation::Validator;
