use crate::color::{ColorError, HexColor, Hsl};
use crate::theme::errors::ThemeError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Identifier of a built-in theme.
///
/// The set is closed: the site ships exactly these four visual modes and the
/// accessibility toolbar cycles between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeId {
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ThemeId {
    /// Fixed enumeration order, also the emission order of the stylesheet
    /// generator.
    pub const ALL: [ThemeId; 4] = [
        ThemeId::Light,
        ThemeId::Dark,
        ThemeId::HighContrast,
        ThemeId::Monochrome,
    ];

    /// The camelCase key used in theme files and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Light => "light",
            ThemeId::Dark => "dark",
            ThemeId::HighContrast => "highContrast",
            ThemeId::Monochrome => "monochrome",
        }
    }

    /// The class marker toggled on the document for non-default modes.
    /// Light is the `:root` default and carries no marker.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            ThemeId::Light => None,
            ThemeId::Dark => Some("dark"),
            ThemeId::HighContrast => Some("high-contrast"),
            ThemeId::Monochrome => Some("monochrome"),
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    /// Accepts both the camelCase config key and the kebab-case class
    /// marker, since callers hold whichever form the document exposes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeId::Light),
            "dark" => Ok(ThemeId::Dark),
            "highContrast" | "high-contrast" => Ok(ThemeId::HighContrast),
            "monochrome" => Ok(ThemeId::Monochrome),
            other => Err(ThemeError::UnknownTheme {
                name: other.to_string(),
            }),
        }
    }
}

/// Human-readable information carried by every theme file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeMetadata {
    pub name: String,
    pub description: String,
    pub author: String,
}

/// A surface role: a container background paired with the text color placed
/// on it (cards, popovers).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceRole {
    pub background: HexColor,
    pub foreground: HexColor,
}

/// An accent role: a fill color with an optional paired foreground for
/// text-on-fill contrast.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccentRole {
    pub default: HexColor,
    pub foreground: Option<HexColor>,
}

/// The complete set of color roles a theme assigns.
///
/// Field order is the emission order of the generated stylesheet; changing
/// it changes build output. `destructive_inverted`, `success` and `warning`
/// are optional because the monochrome palette collapses status colors into
/// its grayscale and defines no equivalents.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemePalette {
    pub background: HexColor,
    pub foreground: HexColor,
    pub card: SurfaceRole,
    pub popover: SurfaceRole,
    pub primary: AccentRole,
    pub secondary: AccentRole,
    pub muted: AccentRole,
    pub accent: AccentRole,
    pub destructive: AccentRole,
    pub destructive_inverted: Option<AccentRole>,
    pub success: Option<AccentRole>,
    pub warning: Option<AccentRole>,
    pub border: HexColor,
    pub input: HexColor,
    pub ring: HexColor,
}

impl ThemePalette {
    /// Flatten the palette into `(custom property name, HSL value)` pairs.
    ///
    /// This is the single source of the property naming rule shared by the
    /// runtime applier and the stylesheet generator: surface roles collapse
    /// their `background` into the bare role name and suffix `foreground`
    /// with `-foreground`; accent roles use the bare name for the fill and
    /// the same suffix for the pairing; optional roles are skipped entirely
    /// when absent.
    pub fn custom_properties(&self) -> Result<Vec<(&'static str, Hsl)>, ColorError> {
        let mut props = Vec::with_capacity(26);

        props.push(("background", self.background.to_hsl()?));
        props.push(("foreground", self.foreground.to_hsl()?));

        Self::push_surface(&mut props, "card", "card-foreground", &self.card)?;
        Self::push_surface(&mut props, "popover", "popover-foreground", &self.popover)?;

        Self::push_accent(&mut props, "primary", "primary-foreground", &self.primary)?;
        Self::push_accent(&mut props, "secondary", "secondary-foreground", &self.secondary)?;
        Self::push_accent(&mut props, "muted", "muted-foreground", &self.muted)?;
        Self::push_accent(&mut props, "accent", "accent-foreground", &self.accent)?;
        Self::push_accent(&mut props, "destructive", "destructive-foreground", &self.destructive)?;

        if let Some(inverted) = &self.destructive_inverted {
            Self::push_accent(
                &mut props,
                "destructive-inverted",
                "destructive-inverted-foreground",
                inverted,
            )?;
        }
        if let Some(success) = &self.success {
            Self::push_accent(&mut props, "success", "success-foreground", success)?;
        }
        if let Some(warning) = &self.warning {
            Self::push_accent(&mut props, "warning", "warning-foreground", warning)?;
        }

        props.push(("border", self.border.to_hsl()?));
        props.push(("input", self.input.to_hsl()?));
        props.push(("ring", self.ring.to_hsl()?));

        Ok(props)
    }

    fn push_surface(
        props: &mut Vec<(&'static str, Hsl)>,
        base: &'static str,
        foreground: &'static str,
        role: &SurfaceRole,
    ) -> Result<(), ColorError> {
        props.push((base, role.background.to_hsl()?));
        props.push((foreground, role.foreground.to_hsl()?));
        Ok(())
    }

    fn push_accent(
        props: &mut Vec<(&'static str, Hsl)>,
        base: &'static str,
        foreground: &'static str,
        role: &AccentRole,
    ) -> Result<(), ColorError> {
        props.push((base, role.default.to_hsl()?));
        if let Some(fg) = &role.foreground {
            props.push((foreground, fg.to_hsl()?));
        }
        Ok(())
    }
}

/// A named, complete set of color-role assignments selectable by the user.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub metadata: ThemeMetadata,
    pub colors: ThemePalette,
}
