use std::fmt::Display;

/// Application-wide error types for the Sentinela stylesheet pipeline.
///
/// # Error Categories
///
/// - [`Theme`] - Theme definition loading or lookup failures
/// - [`Settings`] - Accessibility setting validation failures
/// - [`Config`] - Configuration loading and validation errors
/// - [`Output`] - Stylesheet write failures (fatal at build time; the
///   process reports them and exits non-zero)
///
/// Engine errors convert into these variants automatically, so `?` works
/// across the crate boundary:
///
/// ```no_run
/// use sentinela::error::AppResult;
/// use engine::theme::ThemeRegistry;
///
/// fn load() -> AppResult<()> {
///     let _registry = ThemeRegistry::load_builtin()?;
///     Ok(())
/// }
/// ```
///
/// [`Theme`]: AppError::Theme
/// [`Settings`]: AppError::Settings
/// [`Config`]: AppError::Config
/// [`Output`]: AppError::Output
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Theme definition loading or lookup failures.
    Theme(String),

    /// Accessibility setting validation failures.
    Settings(String),

    /// Configuration loading and validation errors.
    Config(String),

    /// Stylesheet output failures. Build-time only and always fatal.
    Output(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Settings(msg) => write!(f, "Settings Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Output(msg) => write!(f, "Output Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<engine::theme::ThemeError> for AppError {
    fn from(err: engine::theme::ThemeError) -> Self {
        AppError::Theme(err.to_string())
    }
}

impl From<engine::settings::SettingsError> for AppError {
    fn from(err: engine::settings::SettingsError) -> Self {
        AppError::Settings(err.to_string())
    }
}

impl From<engine::color::ColorError> for AppError {
    fn from(err: engine::color::ColorError) -> Self {
        AppError::Theme(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use engine::theme::ThemeError;

    #[test]
    fn engine_errors_convert_with_context() {
        let err: AppError = ThemeError::UnknownTheme {
            name: "sepia".to_string(),
        }
        .into();
        assert_eq!(err, AppError::Theme("unknown theme 'sepia'".to_string()));
        assert_eq!(err.to_string(), "Theme Error: unknown theme 'sepia'");
    }

    #[test]
    fn output_errors_carry_the_failing_path() {
        let err = AppError::Output("failed to write 'assets/index.css'".to_string());
        assert!(err.to_string().contains("assets/index.css"));
    }
}
