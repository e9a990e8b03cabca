//! Text-to-speech announcements.
//!
//! The synthesis capability is injected behind a trait so the announcer has
//! last-caller-wins semantics that can be verified without audio hardware.
//! A missing capability (headless runtime, unsupported browser bridge) is a
//! silent no-op, not an error.

use crate::applier::MultiplierValidator;
use crate::settings::{AccessibilitySettings, SettingsError};
use crate::validation::Validator;

/// Locale tag utterances are announced with.
pub const DEFAULT_LOCALE: &str = "pt-BR";
/// Speaking rate, slightly below normal for intelligibility.
pub const DEFAULT_RATE: f64 = 0.9;

/// The injected speech-synthesis capability.
pub trait SpeechSynthesizer {
    /// Cancel any utterance currently in progress.
    fn cancel_all(&mut self);
    /// Submit text for synthesis.
    fn speak(&mut self, text: &str, locale: &str, rate: f64);
}

/// Gate and sequencing in front of a [`SpeechSynthesizer`].
///
/// Only one utterance is ever audible: each announcement cancels whatever
/// is in flight before submitting, with no queueing.
pub struct SpeechAnnouncer {
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    locale: String,
    rate: f64,
}

impl std::fmt::Debug for SpeechAnnouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAnnouncer")
            .field("synthesizer", &self.synthesizer.as_ref().map(|_| "..."))
            .field("locale", &self.locale)
            .field("rate", &self.rate)
            .finish()
    }
}

impl SpeechAnnouncer {
    /// Announcer with the site defaults (`pt-BR`, rate 0.9). `None` means
    /// the runtime has no synthesis capability.
    pub fn new(synthesizer: Option<Box<dyn SpeechSynthesizer>>) -> Self {
        SpeechAnnouncer {
            synthesizer,
            locale: DEFAULT_LOCALE.to_string(),
            rate: DEFAULT_RATE,
        }
    }

    /// Announcer with a configured voice.
    pub fn with_voice(
        synthesizer: Option<Box<dyn SpeechSynthesizer>>,
        locale: impl Into<String>,
        rate: f64,
    ) -> Result<Self, SettingsError> {
        MultiplierValidator::new("speech rate").validate(&rate)?;
        Ok(SpeechAnnouncer {
            synthesizer,
            locale: locale.into(),
            rate,
        })
    }

    /// Speak `text` if speech output is enabled and a synthesizer exists.
    pub fn announce(&mut self, settings: &AccessibilitySettings, text: &str) {
        if !settings.tts_enabled {
            return;
        }

        let Some(synthesizer) = self.synthesizer.as_mut() else {
            log::debug!("Speech synthesis unavailable, skipping announcement");
            return;
        };

        synthesizer.cancel_all();
        synthesizer.speak(text, &self.locale, self.rate);
    }
}
