use thiserror::Error;

/// Errors produced by theme lookup and theme definition loading.
///
/// `UnknownTheme` is fatal to the requesting call only; `InvalidDefinition`
/// is raised at registry construction so a broken theme file can never reach
/// the applier or the stylesheet generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The requested identifier does not name a registered theme.
    #[error("unknown theme '{name}'")]
    UnknownTheme { name: String },

    /// A theme definition failed to parse or validate.
    #[error("invalid definition for theme '{theme}': {reason}")]
    InvalidDefinition { theme: String, reason: String },
}

impl ThemeError {
    pub(crate) fn invalid(theme: &str, reason: impl Into<String>) -> Self {
        ThemeError::InvalidDefinition {
            theme: theme.to_string(),
            reason: reason.into(),
        }
    }
}
