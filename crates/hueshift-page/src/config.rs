#![forbid(unsafe_code)]

//! Styling parameters as data.
//!
//! [`StyleConfig`] gathers every constant the applicator uses: palette
//! ranges, decoration strings, and the container alpha. It can be loaded
//! from TOML or JSON with the `config` feature.
//!
//! ```toml
//! # hueshift.toml
//! body_transition = "background-color 0.5s ease"
//!
//! [palette.value]
//! min = 0.7
//! max = 1.0
//!
//! [headers]
//! gradient_max_level = 3
//!
//! [containers]
//! background_alpha = 96
//! ```
//!
//! ```rust,ignore
//! let config = StyleConfig::from_toml_file("hueshift.toml")?;
//! ```
//!
//! `StyleConfig::default()` reproduces the stock look.

#[cfg(feature = "config")]
use std::path::Path;

use hueshift_color::{PaletteConfig, Rgb};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised while loading a [`StyleConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "config")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid style config: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Decoration applied to headings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeaderStyle {
    /// Headings up to this level get the gradient treatment; deeper ones get
    /// a flat background.
    pub gradient_max_level: u8,
    pub gradient_angle_deg: u16,
    pub padding: String,
    pub border_radius: String,
    pub text_shadow: String,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            gradient_max_level: 2,
            gradient_angle_deg: 45,
            padding: "10px 20px".into(),
            border_radius: "5px".into(),
            text_shadow: "1px 1px 3px rgba(0,0,0,0.2)".into(),
        }
    }
}

impl HeaderStyle {
    /// `linear-gradient(<angle>deg, <from>, <to>)`.
    #[must_use]
    pub fn gradient(&self, from: Rgb, to: Rgb) -> String {
        format!(
            "linear-gradient({}deg, {from}, {to})",
            self.gradient_angle_deg
        )
    }
}

/// Decoration applied to buttons.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonStyle {
    /// Shadow geometry at rest; the accent color is appended.
    pub shadow: String,
    /// Shadow geometry while hovered.
    pub hover_shadow: String,
    pub rest_transform: String,
    pub hover_transform: String,
    pub transition: String,
    pub cursor: String,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            shadow: "3px 3px 5px".into(),
            hover_shadow: "1px 1px 3px".into(),
            rest_transform: "translateY(0)".into(),
            hover_transform: "translateY(-2px)".into(),
            transition: "all 0.3s ease".into(),
            cursor: "pointer".into(),
        }
    }
}

/// Decoration applied to sectioning containers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContainerStyle {
    /// Alpha byte appended to the secondary color (`0x44` by default).
    pub background_alpha: u8,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            background_alpha: 0x44,
        }
    }
}

/// Everything the applicator needs besides the document and a palette.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleConfig {
    pub palette: PaletteConfig,
    /// Written to the body's `transition` on apply.
    pub body_transition: String,
    pub headers: HeaderStyle,
    pub buttons: ButtonStyle,
    pub containers: ContainerStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: PaletteConfig::default(),
            body_transition: "background-color 0.3s ease".into(),
            headers: HeaderStyle::default(),
            buttons: ButtonStyle::default(),
            containers: ContainerStyle::default(),
        }
    }
}

impl StyleConfig {
    /// Load from a TOML string and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk and validate.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string and validate.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON file on disk and validate.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check all parameters. Empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.palette.validate();

        if self.headers.gradient_max_level > 6 {
            errors.push(format!(
                "headers.gradient_max_level must be in 0..=6, got {}",
                self.headers.gradient_max_level
            ));
        }
        if self.headers.gradient_angle_deg >= 360 {
            errors.push(format!(
                "headers.gradient_angle_deg must be < 360, got {}",
                self.headers.gradient_angle_deg
            ));
        }
        if self.buttons.shadow.trim().is_empty() {
            errors.push("buttons.shadow must not be empty".into());
        }
        if self.buttons.hover_shadow.trim().is_empty() {
            errors.push("buttons.hover_shadow must not be empty".into());
        }

        errors
    }

    /// `Ok(self)` if [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(StyleConfig::default().validate().is_empty());
        assert!(StyleConfig::default().validated().is_ok());
    }

    #[test]
    fn gradient_formatting() {
        let headers = HeaderStyle::default();
        assert_eq!(
            headers.gradient(Rgb::new(0xB2, 0x7A, 0x59), Rgb::new(0x59, 0xB2, 0x59)),
            "linear-gradient(45deg, #B27A59, #59B259)"
        );
    }

    #[test]
    fn validation_collects_errors() {
        let mut config = StyleConfig::default();
        config.headers.gradient_max_level = 9;
        config.headers.gradient_angle_deg = 400;
        config.buttons.shadow = "  ".into();
        config.palette.saturation.max = 2.0;

        let errors = config.validate();
        assert_eq!(errors.len(), 4, "{errors:?}");

        let err = config.validated().expect_err("invalid config");
        let message = err.to_string();
        assert!(message.starts_with("invalid style config: "));
        assert!(message.contains("gradient_max_level"));
    }

    #[test]
    fn zero_gradient_level_disables_gradients() {
        let mut config = StyleConfig::default();
        config.headers.gradient_max_level = 0;
        assert!(config.validate().is_empty());
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_overrides_merge_with_defaults() {
        let config = StyleConfig::from_toml_str(
            r#"
            body_transition = "none"

            [palette.value]
            min = 0.6
            max = 1.0

            [containers]
            background_alpha = 96
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.body_transition, "none");
        assert_eq!(config.palette.value.max, 1.0);
        assert_eq!(config.containers.background_alpha, 96);
        assert_eq!(config.headers, HeaderStyle::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_validation_failure_is_reported() {
        let err = StyleConfig::from_json_str(r#"{"headers": {"gradient_max_level": 12}}"#)
            .expect_err("level out of range");
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
    }

    #[cfg(feature = "config")]
    #[test]
    fn malformed_input_maps_to_parse_errors() {
        assert!(matches!(
            StyleConfig::from_toml_str("palette = 3"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            StyleConfig::from_json_str("{"),
            Err(ConfigError::Json(_))
        ));
    }

    #[cfg(feature = "config")]
    #[test]
    fn missing_file_is_io_error() {
        let err = StyleConfig::from_toml_file("/nonexistent/hueshift.toml").expect_err("missing");
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
