//! User-selectable enhancement options.

use serde::Deserialize;

/// Background treatment requested for the enhanced photo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BackgroundStyle {
    /// Softly blurred office setting.
    Office,
    /// Minimalist modern interior.
    Modern,
    /// Textured wall.
    Textured,
    /// Let the model pick a neutral professional background.
    #[default]
    AiChoice,
}

impl BackgroundStyle {
    pub const ALL: [BackgroundStyle; 4] = [Self::Office, Self::Modern, Self::Textured, Self::AiChoice];

    /// Parses a UI label. Unknown labels fall back to [`BackgroundStyle::AiChoice`].
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Office" => Self::Office,
            "Modern" => Self::Modern,
            "Textured" => Self::Textured,
            _ => Self::AiChoice,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::Modern => "Modern",
            Self::Textured => "Textured",
            Self::AiChoice => "AI Choice",
        }
    }
}

impl From<String> for BackgroundStyle {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<&str> for BackgroundStyle {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

/// Toggles that parameterize the instruction text of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnhancementOptions {
    pub background_style: BackgroundStyle,
    pub adjust_brightness: bool,
    pub smooth_skin: bool,
}

impl Default for EnhancementOptions {
    fn default() -> Self {
        Self {
            background_style: BackgroundStyle::AiChoice,
            adjust_brightness: true,
            smooth_skin: true,
        }
    }
}

impl EnhancementOptions {
    pub fn with_background_style(mut self, style: impl Into<BackgroundStyle>) -> Self {
        self.background_style = style.into();
        self
    }

    pub fn with_adjust_brightness(mut self, enabled: bool) -> Self {
        self.adjust_brightness = enabled;
        self
    }

    pub fn with_smooth_skin(mut self, enabled: bool) -> Self {
        self.smooth_skin = enabled;
        self
    }
}

/// Interprets an HTML form value as a boolean (`on` is what checkboxes send).
pub fn parse_form_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "yes"
    )
}
