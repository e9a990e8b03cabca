use serde::Deserialize;

/// Main pipeline configuration
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Where the generated stylesheet lands
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Path of the generated stylesheet (default: assets/index.css)
    stylesheet_path: Option<String>,
}

impl OutputConfig {
    pub fn stylesheet_path(&self) -> &str {
        self.stylesheet_path.as_deref().unwrap_or("assets/index.css")
    }
}

/// Logging configuration
#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error (default: info)
    level: Option<String>,
    /// Optional log file; without it logs go to stderr
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let config = AppConfig::default();
        assert_eq!(config.output().stylesheet_path(), "assets/index.css");
        assert_eq!(config.logging().level(), "info");
        assert_eq!(config.logging().file(), None);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [output]
            stylesheet_path = "public/styles.css"

            [logging]
            level = "debug"
            file = "sentinela.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.output().stylesheet_path(), "public/styles.css");
        assert_eq!(config.logging().level(), "debug");
        assert_eq!(config.logging().file(), Some("sentinela.log"));
    }
}
