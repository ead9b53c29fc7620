use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const THEME_KEY: &str = "theme";
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

pub const DEFAULT_FALLBACK_EMAIL: &str = "antthein.dev@gmail.com";
pub const DEFAULT_TYPING_TEXT: &str =
    "Mid-Senior Power Platform Developer | 3+ Years Experience | Myanmar";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only the exact stored value `"dark"` selects the dark theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon and caption for the toggle control: they describe the theme a
    /// click would switch to, not the current one.
    pub fn toggle_label(self) -> (&'static str, &'static str) {
        match self {
            Theme::Dark => ("\u{2600}\u{fe0f}", "Light"),
            Theme::Light => ("\u{1f319}", "Dark"),
        }
    }
}

/// Raw values of the contact form fields as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("portfolio config is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Page-level settings. Every field falls back to its default when the host
/// page omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Remote form endpoint. Empty selects the `mailto:` fallback.
    pub form_endpoint: String,
    pub fallback_email: String,
    pub typing_text: String,
    pub typing_speed_ms: u32,
    pub typing_delay_ms: u32,
    pub mobile_breakpoint_px: u32,
    pub scroll_debounce_ms: u32,
    pub resize_throttle_ms: u32,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            form_endpoint: String::new(),
            fallback_email: DEFAULT_FALLBACK_EMAIL.to_owned(),
            typing_text: DEFAULT_TYPING_TEXT.to_owned(),
            typing_speed_ms: 50,
            typing_delay_ms: 500,
            mobile_breakpoint_px: 1024,
            scroll_debounce_ms: 10,
            resize_throttle_ms: 200,
        }
    }
}

impl PortfolioConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    pub fn endpoint(&self) -> Option<&str> {
        let trimmed = self.form_endpoint.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_theme_parsing_defaults_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Dark.toggle_label().1, "Light");
        assert_eq!(Theme::Light.toggle_label().1, "Dark");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = PortfolioConfig::from_json(r#"{"form_endpoint":"https://formspree.io/f/abc"}"#)
            .unwrap();
        assert_eq!(config.endpoint(), Some("https://formspree.io/f/abc"));
        assert_eq!(config.typing_speed_ms, 50);
        assert_eq!(config.fallback_email, DEFAULT_FALLBACK_EMAIL);
    }

    #[test]
    fn blank_endpoint_selects_mailto() {
        let config = PortfolioConfig::from_json("").unwrap();
        assert_eq!(config.endpoint(), None);

        let config = PortfolioConfig::from_json(r#"{"form_endpoint":"   "}"#).unwrap();
        assert_eq!(config.endpoint(), None);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(PortfolioConfig::from_json("{not json").is_err());
    }
}
