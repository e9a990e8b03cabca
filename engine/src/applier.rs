//! Theme application onto a presentation scope.
//!
//! The live document is reached only through the narrow [`PresentationSink`]
//! trait (set a custom property, toggle a class), which keeps every piece of
//! theming logic runnable against an in-memory sink. Application is
//! all-or-nothing: every color is converted before the first write, so a
//! sink never observes a partially updated palette.

use crate::settings::{AccessibilitySettings, SettingsError};
use crate::theme::{ThemeError, ThemeId, ThemeRegistry};
use crate::validation::Validator;
use std::collections::{BTreeMap, BTreeSet};

/// Custom property carrying the font-size multiplier.
pub const FONT_SIZE_PROPERTY: &str = "--font-size-multiplier";
/// Custom property carrying the line-height value.
pub const LINE_HEIGHT_PROPERTY: &str = "--line-height-multiplier";
/// Body class enabling the dyslexia-friendly font stack.
pub const DYSLEXIA_CLASS: &str = "dyslexia-friendly";

/// The two document scopes class markers land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Root,
    Body,
}

/// Minimal surface the applier needs from the presentation layer.
pub trait PresentationSink {
    fn set_property(&mut self, name: &str, value: &str);
    fn add_class(&mut self, scope: Scope, class: &str);
    fn remove_class(&mut self, scope: Scope, class: &str);
}

/// Marker class and scope for a theme. The dark marker lives on the root
/// element, the accessibility modes on the body, matching the selectors in
/// the generated stylesheet.
fn marker(id: ThemeId) -> Option<(Scope, &'static str)> {
    match id {
        ThemeId::Light => None,
        ThemeId::Dark => Some((Scope::Root, "dark")),
        ThemeId::HighContrast => Some((Scope::Body, "high-contrast")),
        ThemeId::Monochrome => Some((Scope::Body, "monochrome")),
    }
}

/// Validator for numeric accessibility multipliers.
pub struct MultiplierValidator {
    field: &'static str,
}

impl MultiplierValidator {
    pub fn new(field: &'static str) -> Self {
        MultiplierValidator { field }
    }
}

impl Validator<f64> for MultiplierValidator {
    type Error = SettingsError;

    fn validate(&self, input: &f64) -> Result<(), Self::Error> {
        if input.is_finite() && *input > 0.0 {
            Ok(())
        } else {
            Err(SettingsError::InvalidMultiplier {
                field: self.field,
                value: *input,
            })
        }
    }
}

/// Resolve a theme and push its palette onto the sink.
///
/// Writes every role as a `--<role>` custom property (compound roles also
/// emit `--<role>-foreground`), then clears all theme class markers and
/// sets the one for the requested theme. Applying the same theme twice
/// yields the same end state.
pub fn apply_theme(
    sink: &mut impl PresentationSink,
    registry: &ThemeRegistry,
    id: ThemeId,
) -> Result<(), ThemeError> {
    let theme = registry.get(id)?;

    // Convert the whole palette before the first write.
    let properties = theme
        .colors
        .custom_properties()
        .map_err(|e| ThemeError::invalid(id.as_str(), e.to_string()))?;

    for (name, hsl) in properties {
        sink.set_property(&format!("--{name}"), &hsl.to_string());
    }

    for other in ThemeId::ALL {
        if let Some((scope, class)) = marker(other) {
            sink.remove_class(scope, class);
        }
    }
    if let Some((scope, class)) = marker(id) {
        sink.add_class(scope, class);
    }

    log::info!("Applied theme '{id}'");
    Ok(())
}

/// Write the font-size multiplier custom property.
pub fn apply_font_size_multiplier(
    sink: &mut impl PresentationSink,
    multiplier: f64,
) -> Result<(), SettingsError> {
    MultiplierValidator::new("font-size multiplier").validate(&multiplier)?;
    set_number(sink, FONT_SIZE_PROPERTY, multiplier);
    Ok(())
}

/// Write the line-height custom property.
pub fn apply_line_height(
    sink: &mut impl PresentationSink,
    value: f64,
) -> Result<(), SettingsError> {
    MultiplierValidator::new("line-height").validate(&value)?;
    set_number(sink, LINE_HEIGHT_PROPERTY, value);
    Ok(())
}

/// Push a full settings record onto the sink: theme palette and markers,
/// both typography multipliers, and the dyslexia-friendly font toggle.
pub fn apply_settings(
    sink: &mut impl PresentationSink,
    registry: &ThemeRegistry,
    settings: &AccessibilitySettings,
) -> Result<(), ThemeError> {
    apply_theme(sink, registry, settings.theme)?;

    // Tier tables only hold positive finite values; no validation needed.
    set_number(sink, FONT_SIZE_PROPERTY, settings.font_size.multiplier());
    set_number(sink, LINE_HEIGHT_PROPERTY, settings.line_height.value());

    if settings.dyslexia_friendly {
        sink.add_class(Scope::Body, DYSLEXIA_CLASS);
    } else {
        sink.remove_class(Scope::Body, DYSLEXIA_CLASS);
    }

    Ok(())
}

fn set_number(sink: &mut impl PresentationSink, name: &str, value: f64) {
    sink.set_property(name, &value.to_string());
}

/// A sink that records state in memory.
///
/// Used by the test suites in place of a live document; also suitable for
/// headless rendering of the property set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    properties: BTreeMap<String, String>,
    root_classes: BTreeSet<String>,
    body_classes: BTreeSet<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn has_class(&self, scope: Scope, class: &str) -> bool {
        match scope {
            Scope::Root => self.root_classes.contains(class),
            Scope::Body => self.body_classes.contains(class),
        }
    }

    pub fn classes(&self, scope: Scope) -> &BTreeSet<String> {
        match scope {
            Scope::Root => &self.root_classes,
            Scope::Body => &self.body_classes,
        }
    }
}

impl PresentationSink for MemorySink {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn add_class(&mut self, scope: Scope, class: &str) {
        match scope {
            Scope::Root => self.root_classes.insert(class.to_string()),
            Scope::Body => self.body_classes.insert(class.to_string()),
        };
    }

    fn remove_class(&mut self, scope: Scope, class: &str) {
        match scope {
            Scope::Root => self.root_classes.remove(class),
            Scope::Body => self.body_classes.remove(class),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FontSize, LineHeight};
    use claims::{assert_err, assert_ok};

    fn registry() -> &'static ThemeRegistry {
        ThemeRegistry::global()
    }

    #[test]
    fn applying_a_theme_twice_is_idempotent() {
        let mut once = MemorySink::new();
        assert_ok!(apply_theme(&mut once, registry(), ThemeId::Dark));

        let mut twice = once.clone();
        assert_ok!(apply_theme(&mut twice, registry(), ThemeId::Dark));

        assert_eq!(once, twice);
    }

    #[test]
    fn switching_themes_clears_previous_markers() {
        let mut sink = MemorySink::new();

        apply_theme(&mut sink, registry(), ThemeId::HighContrast).unwrap();
        assert!(sink.has_class(Scope::Body, "high-contrast"));

        apply_theme(&mut sink, registry(), ThemeId::Dark).unwrap();
        assert!(!sink.has_class(Scope::Body, "high-contrast"));
        assert!(sink.has_class(Scope::Root, "dark"));

        apply_theme(&mut sink, registry(), ThemeId::Light).unwrap();
        assert!(sink.classes(Scope::Root).is_empty());
        assert!(sink.classes(Scope::Body).is_empty());
    }

    #[test]
    fn properties_use_the_documented_names() {
        let mut sink = MemorySink::new();
        apply_theme(&mut sink, registry(), ThemeId::Light).unwrap();

        assert_eq!(sink.property("--primary"), Some("207 100% 17%"));
        assert_eq!(sink.property("--primary-foreground"), Some("0 0% 100%"));
        assert_eq!(sink.property("--background"), Some("0 0% 100%"));
        assert!(sink.property("--destructive-inverted").is_some());
    }

    #[test]
    fn absent_optional_roles_emit_no_properties() {
        let mut sink = MemorySink::new();
        apply_theme(&mut sink, registry(), ThemeId::Monochrome).unwrap();

        assert!(sink.property("--success").is_none());
        assert!(sink.property("--warning").is_none());
        assert!(sink.property("--destructive-inverted").is_some());
    }

    #[test]
    fn multipliers_must_be_positive_and_finite() {
        let mut sink = MemorySink::new();

        assert_ok!(apply_font_size_multiplier(&mut sink, 1.125));
        assert_eq!(sink.property(FONT_SIZE_PROPERTY), Some("1.125"));

        assert_err!(apply_font_size_multiplier(&mut sink, 0.0));
        assert_err!(apply_font_size_multiplier(&mut sink, -1.0));
        assert_err!(apply_font_size_multiplier(&mut sink, f64::NAN));
        assert_err!(apply_line_height(&mut sink, f64::INFINITY));

        // Rejected values never reached the sink.
        assert_eq!(sink.property(FONT_SIZE_PROPERTY), Some("1.125"));
        assert!(sink.property(LINE_HEIGHT_PROPERTY).is_none());
    }

    #[test]
    fn apply_settings_covers_theme_typography_and_dyslexia_font() {
        let mut sink = MemorySink::new();
        let settings = AccessibilitySettings {
            font_size: FontSize::Xl,
            line_height: LineHeight::Relaxed,
            theme: ThemeId::Dark,
            dyslexia_friendly: true,
            tts_enabled: false,
        };

        assert_ok!(apply_settings(&mut sink, registry(), &settings));

        assert!(sink.has_class(Scope::Root, "dark"));
        assert!(sink.has_class(Scope::Body, DYSLEXIA_CLASS));
        assert_eq!(sink.property(FONT_SIZE_PROPERTY), Some("1.25"));
        assert_eq!(sink.property(LINE_HEIGHT_PROPERTY), Some("1.8"));

        // Turning the font back off removes the class again.
        let defaults = AccessibilitySettings::default();
        apply_settings(&mut sink, registry(), &defaults).unwrap();
        assert!(!sink.has_class(Scope::Body, DYSLEXIA_CLASS));
    }
}
