use crate::theme::errors::ThemeError;
use crate::theme::types::Theme;
use crate::validation::Validator;

/// Validator for loaded theme content.
///
/// Color validity is already enforced structurally (every palette field is a
/// parsed [`crate::color::HexColor`]), so this checks the parts the type
/// system cannot: the metadata block must actually describe the theme.
pub struct ThemeValidator;

impl Validator<Theme> for ThemeValidator {
    type Error = ThemeError;

    fn validate(&self, input: &Theme) -> Result<(), Self::Error> {
        let metadata = &input.metadata;

        if metadata.name.is_empty() {
            return Err(ThemeError::invalid(&metadata.name, "metadata name is empty"));
        }

        if metadata.name.len() > 50 {
            return Err(ThemeError::invalid(
                &metadata.name,
                "metadata name too long (max 50 characters)",
            ));
        }

        if metadata.description.is_empty() {
            return Err(ThemeError::invalid(
                &metadata.name,
                "metadata description is empty",
            ));
        }

        if metadata.author.is_empty() {
            return Err(ThemeError::invalid(
                &metadata.name,
                "metadata author is empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::types::ThemeMetadata;

    fn theme_with_metadata(metadata: ThemeMetadata) -> Theme {
        let mut theme: Theme = toml::from_str(include_str!("../../themes/light.toml")).unwrap();
        theme.metadata = metadata;
        theme
    }

    #[test]
    fn accepts_complete_metadata() {
        let theme = theme_with_metadata(ThemeMetadata {
            name: "Claro".to_string(),
            description: "Tema padrão".to_string(),
            author: "Defesa Civil".to_string(),
        });
        assert!(ThemeValidator.validate(&theme).is_ok());
    }

    #[test]
    fn rejects_empty_fields() {
        for (name, description, author) in [
            ("", "desc", "autor"),
            ("nome", "", "autor"),
            ("nome", "desc", ""),
        ] {
            let theme = theme_with_metadata(ThemeMetadata {
                name: name.to_string(),
                description: description.to_string(),
                author: author.to_string(),
            });
            assert!(ThemeValidator.validate(&theme).is_err());
        }
    }

    #[test]
    fn rejects_overlong_name() {
        let theme = theme_with_metadata(ThemeMetadata {
            name: "a".repeat(51),
            description: "desc".to_string(),
            author: "autor".to_string(),
        });
        assert!(ThemeValidator.validate(&theme).is_err());
    }
}
