use crate::theme::errors::ThemeError;
use crate::theme::types::{Theme, ThemeId};
use crate::theme::validation::ThemeValidator;
use crate::validation::Validator;
use once_cell::sync::Lazy;

/// Theme definitions embedded at compile time, in the fixed enumeration
/// order used by the stylesheet generator.
const BUILTIN_SOURCES: [(ThemeId, &str); 4] = [
    (ThemeId::Light, include_str!("../../themes/light.toml")),
    (ThemeId::Dark, include_str!("../../themes/dark.toml")),
    (
        ThemeId::HighContrast,
        include_str!("../../themes/high_contrast.toml"),
    ),
    (
        ThemeId::Monochrome,
        include_str!("../../themes/monochrome.toml"),
    ),
];

static BUILTIN: Lazy<ThemeRegistry> =
    Lazy::new(|| ThemeRegistry::load_builtin().expect("embedded theme definitions are valid"));

/// Immutable lookup from theme identifier to its full color-role mapping.
///
/// Construction parses and validates every definition; a registry that
/// exists holds only themes whose every color converts to HSL, so theme
/// application downstream cannot fail halfway through a palette.
pub struct ThemeRegistry {
    themes: Vec<(ThemeId, Theme)>,
}

impl ThemeRegistry {
    /// Parse and validate the embedded theme set.
    pub fn load_builtin() -> Result<ThemeRegistry, ThemeError> {
        let mut themes = Vec::with_capacity(BUILTIN_SOURCES.len());

        for (id, source) in BUILTIN_SOURCES {
            let theme: Theme = toml::from_str(source)
                .map_err(|e| ThemeError::invalid(id.as_str(), e.to_string()))?;

            ThemeValidator.validate(&theme)?;

            // Force every role through the converter once so a palette that
            // cannot be fully applied is rejected here, not mid-application.
            theme
                .colors
                .custom_properties()
                .map_err(|e| ThemeError::invalid(id.as_str(), e.to_string()))?;

            themes.push((id, theme));
        }

        log::debug!("Loaded {} built-in themes", themes.len());
        Ok(ThemeRegistry { themes })
    }

    /// Shared registry of the built-in themes.
    ///
    /// The embedded definitions are covered by tests, so initialization
    /// cannot fail outside a broken build.
    pub fn global() -> &'static ThemeRegistry {
        &BUILTIN
    }

    /// Look up a theme by identifier.
    pub fn get(&self, id: ThemeId) -> Result<&Theme, ThemeError> {
        self.themes
            .iter()
            .find(|(tid, _)| *tid == id)
            .map(|(_, theme)| theme)
            .ok_or_else(|| ThemeError::UnknownTheme {
                name: id.to_string(),
            })
    }

    /// Themes in fixed enumeration order (light, dark, highContrast,
    /// monochrome).
    pub fn iter(&self) -> impl Iterator<Item = (ThemeId, &Theme)> {
        self.themes.iter().map(|(id, theme)| (*id, theme))
    }
}
