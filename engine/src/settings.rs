//! Accessibility settings and their change-notification store.
//!
//! The settings record is the single piece of mutable state in the engine.
//! It is owned by an explicit [`AccessibilityStore`] handed to consumers at
//! startup; components react to changes through subscription callbacks
//! rather than reaching into a global.

use crate::theme::ThemeId;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when a setting value fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// The value is not a member of the setting's enumeration.
    #[error("invalid value '{value}' for setting '{field}'")]
    InvalidValue { field: &'static str, value: String },

    /// A numeric accessibility value must be positive and finite.
    #[error("invalid {field}: {value} (must be a positive finite number)")]
    InvalidMultiplier { field: &'static str, value: f64 },
}

/// Font size tier. Ordered: stepping up or down moves one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Medium,
    Large,
    Xl,
    Xxl,
}

impl FontSize {
    const ORDERED: [FontSize; 5] = [
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::Xl,
        FontSize::Xxl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
            FontSize::Xl => "xl",
            FontSize::Xxl => "2xl",
        }
    }

    /// Multiplier applied to the base 1rem body size. The table matches the
    /// rem scale the site's typography was designed around (14px to 24px).
    pub fn multiplier(self) -> f64 {
        match self {
            FontSize::Small => 0.875,
            FontSize::Medium => 1.0,
            FontSize::Large => 1.125,
            FontSize::Xl => 1.25,
            FontSize::Xxl => 1.5,
        }
    }

    /// Next larger tier, or `None` at the top of the scale.
    pub fn step_up(self) -> Option<FontSize> {
        let index = Self::ORDERED.iter().position(|&t| t == self)?;
        Self::ORDERED.get(index + 1).copied()
    }

    /// Next smaller tier, or `None` at the bottom of the scale.
    pub fn step_down(self) -> Option<FontSize> {
        let index = Self::ORDERED.iter().position(|&t| t == self)?;
        index.checked_sub(1).and_then(|i| Self::ORDERED.get(i)).copied()
    }
}

impl FromStr for FontSize {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            "xl" => Ok(FontSize::Xl),
            "2xl" => Ok(FontSize::Xxl),
            other => Err(SettingsError::InvalidValue {
                field: "fontSize",
                value: other.to_string(),
            }),
        }
    }
}

/// Line height tier. Ordered like [`FontSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineHeight {
    Tight,
    Normal,
    Relaxed,
    Loose,
}

impl LineHeight {
    const ORDERED: [LineHeight; 4] = [
        LineHeight::Tight,
        LineHeight::Normal,
        LineHeight::Relaxed,
        LineHeight::Loose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LineHeight::Tight => "tight",
            LineHeight::Normal => "normal",
            LineHeight::Relaxed => "relaxed",
            LineHeight::Loose => "loose",
        }
    }

    /// Unitless line-height value pushed to the presentation layer.
    pub fn value(self) -> f64 {
        match self {
            LineHeight::Tight => 1.25,
            LineHeight::Normal => 1.6,
            LineHeight::Relaxed => 1.8,
            LineHeight::Loose => 2.0,
        }
    }

    pub fn step_up(self) -> Option<LineHeight> {
        let index = Self::ORDERED.iter().position(|&t| t == self)?;
        Self::ORDERED.get(index + 1).copied()
    }

    pub fn step_down(self) -> Option<LineHeight> {
        let index = Self::ORDERED.iter().position(|&t| t == self)?;
        index.checked_sub(1).and_then(|i| Self::ORDERED.get(i)).copied()
    }
}

impl FromStr for LineHeight {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tight" => Ok(LineHeight::Tight),
            "normal" => Ok(LineHeight::Normal),
            "relaxed" => Ok(LineHeight::Relaxed),
            "loose" => Ok(LineHeight::Loose),
            other => Err(SettingsError::InvalidValue {
                field: "lineHeight",
                value: other.to_string(),
            }),
        }
    }
}

/// The five independent accessibility preferences a visitor can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilitySettings {
    pub font_size: FontSize,
    pub line_height: LineHeight,
    pub theme: ThemeId,
    pub dyslexia_friendly: bool,
    pub tts_enabled: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        AccessibilitySettings {
            font_size: FontSize::Medium,
            line_height: LineHeight::Normal,
            theme: ThemeId::Light,
            dyslexia_friendly: false,
            tts_enabled: false,
        }
    }
}

/// A partial settings change. Fields left `None` keep their current value.
///
/// Values are already typed when they reach the store, so a merged record is
/// valid by construction; string input from the toolbar is rejected earlier
/// by the `FromStr` impls with [`SettingsError::InvalidValue`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsUpdate {
    pub font_size: Option<FontSize>,
    pub line_height: Option<LineHeight>,
    pub theme: Option<ThemeId>,
    pub dyslexia_friendly: Option<bool>,
    pub tts_enabled: Option<bool>,
}

type Subscriber = Box<dyn FnMut(&AccessibilitySettings)>;

/// Owner of the current accessibility settings.
///
/// Mutations are synchronous and atomic from the caller's perspective:
/// subscribers are invoked after the merge completes, in subscription
/// order, always with the full new record — never a partially merged one.
pub struct AccessibilityStore {
    settings: AccessibilitySettings,
    subscribers: Vec<Subscriber>,
}

impl AccessibilityStore {
    pub fn new() -> Self {
        AccessibilityStore {
            settings: AccessibilitySettings::default(),
            subscribers: Vec::new(),
        }
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> AccessibilitySettings {
        self.settings
    }

    /// Register a callback invoked after every settings change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AccessibilitySettings) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Merge a partial update into the current settings and notify.
    pub fn update(&mut self, update: SettingsUpdate) {
        let mut next = self.settings;

        if let Some(font_size) = update.font_size {
            next.font_size = font_size;
        }
        if let Some(line_height) = update.line_height {
            next.line_height = line_height;
        }
        if let Some(theme) = update.theme {
            next.theme = theme;
        }
        if let Some(dyslexia_friendly) = update.dyslexia_friendly {
            next.dyslexia_friendly = dyslexia_friendly;
        }
        if let Some(tts_enabled) = update.tts_enabled {
            next.tts_enabled = tts_enabled;
        }

        self.settings = next;
        log::debug!("Accessibility settings updated: {next:?}");
        self.notify();
    }

    /// Replace the current settings wholesale with the defaults and notify.
    pub fn reset(&mut self) {
        self.settings = AccessibilitySettings::default();
        log::debug!("Accessibility settings reset to defaults");
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = self.settings;
        for subscriber in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}

impl Default for AccessibilityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_err;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn defaults_match_the_site_baseline() {
        let settings = AccessibilitySettings::default();
        assert_eq!(settings.font_size, FontSize::Medium);
        assert_eq!(settings.line_height, LineHeight::Normal);
        assert_eq!(settings.theme, ThemeId::Light);
        assert!(!settings.dyslexia_friendly);
        assert!(!settings.tts_enabled);
    }

    #[test]
    fn partial_update_leaves_other_fields_untouched() {
        let mut store = AccessibilityStore::new();
        let before = store.settings();

        store.update(SettingsUpdate {
            font_size: Some(FontSize::Large),
            ..SettingsUpdate::default()
        });

        let after = store.settings();
        assert_eq!(after.font_size, FontSize::Large);
        assert_eq!(after.line_height, before.line_height);
        assert_eq!(after.theme, before.theme);
        assert_eq!(after.dyslexia_friendly, before.dyslexia_friendly);
        assert_eq!(after.tts_enabled, before.tts_enabled);
    }

    #[test]
    fn reset_restores_exact_defaults() {
        let mut store = AccessibilityStore::new();
        store.update(SettingsUpdate {
            font_size: Some(FontSize::Xxl),
            line_height: Some(LineHeight::Loose),
            theme: Some(ThemeId::HighContrast),
            dyslexia_friendly: Some(true),
            tts_enabled: Some(true),
        });

        store.reset();
        assert_eq!(store.settings(), AccessibilitySettings::default());
    }

    #[test]
    fn subscribers_see_full_snapshots_in_subscription_order() {
        let mut store = AccessibilityStore::new();
        let seen: Rc<RefCell<Vec<(u8, AccessibilitySettings)>>> = Rc::default();

        for tag in [1u8, 2] {
            let seen = Rc::clone(&seen);
            store.subscribe(move |settings| seen.borrow_mut().push((tag, *settings)));
        }

        store.update(SettingsUpdate {
            theme: Some(ThemeId::Dark),
            tts_enabled: Some(true),
            ..SettingsUpdate::default()
        });

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, 1);
        assert_eq!(seen[1].0, 2);
        for (_, settings) in seen.iter() {
            // Never a partially merged record.
            assert_eq!(settings.theme, ThemeId::Dark);
            assert!(settings.tts_enabled);
            assert_eq!(settings.font_size, FontSize::Medium);
        }
    }

    #[test]
    fn invalid_tier_strings_are_rejected_before_any_mutation() {
        let mut store = AccessibilityStore::new();
        let before = store.settings();

        let parsed = "not-a-real-size".parse::<FontSize>();
        assert_err!(&parsed);
        assert_eq!(
            parsed.unwrap_err(),
            SettingsError::InvalidValue {
                field: "fontSize",
                value: "not-a-real-size".to_string()
            }
        );

        // Nothing reached the store.
        assert_eq!(store.settings(), before);
        store.update(SettingsUpdate::default());
        assert_eq!(store.settings(), before);
    }

    #[test]
    fn tier_parsing_round_trips() {
        for tier in FontSize::ORDERED {
            assert_eq!(tier.as_str().parse::<FontSize>().unwrap(), tier);
        }
        for tier in LineHeight::ORDERED {
            assert_eq!(tier.as_str().parse::<LineHeight>().unwrap(), tier);
        }
    }

    #[test]
    fn stepping_stops_at_the_scale_ends() {
        assert_eq!(FontSize::Medium.step_up(), Some(FontSize::Large));
        assert_eq!(FontSize::Xxl.step_up(), None);
        assert_eq!(FontSize::Small.step_down(), None);
        assert_eq!(LineHeight::Loose.step_up(), None);
        assert_eq!(LineHeight::Normal.step_down(), Some(LineHeight::Tight));
    }

    #[test]
    fn multiplier_tables_match_the_design_scale() {
        assert_eq!(FontSize::Small.multiplier(), 0.875);
        assert_eq!(FontSize::Medium.multiplier(), 1.0);
        assert_eq!(FontSize::Xxl.multiplier(), 1.5);
        assert_eq!(LineHeight::Tight.value(), 1.25);
        assert_eq!(LineHeight::Normal.value(), 1.6);
        assert_eq!(LineHeight::Loose.value(), 2.0);
    }
}
