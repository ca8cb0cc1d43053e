//! Instruction text sent alongside the photo.
//!
//! The rules are rendered as a numbered list whose order is fixed: hairstyle,
//! lighting, retouching, background, then the four closing rules. Positions 2
//! and 3 always hold exactly one of their two alternatives.

use crate::options::{BackgroundStyle, EnhancementOptions};

const PREAMBLE: &str = "You are a Professional LinkedIn Photo Editor AI.
Your job is to enhance profile photos while keeping the person’s natural identity, hairstyle, and facial features intact.

Editing rules:
";

pub const HAIRSTYLE_RULE: &str =
    "Keep the hairstyle as it is, do not cut, shorten, or erase hair. Ensure the person does not look bald.";

pub const ADJUST_LIGHTING_RULE: &str =
    "Adjust lighting, skin tone, and contrast for a natural but polished look.";
pub const PRESERVE_LIGHTING_RULE: &str =
    "Preserve the original lighting, brightness, and contrast. Do not apply any automatic lighting or color adjustment.";

pub const SMOOTH_SKIN_RULE: &str =
    "Subtly reduce blemishes and fine wrinkles while keeping natural skin texture.";
pub const NO_RETOUCH_RULE: &str =
    "Do not retouch the face in any way. Leave skin texture, blemishes, and wrinkles exactly as they are.";

pub const OFFICE_BACKGROUND_RULE: &str =
    "Replace the background with a softly blurred, well-lit modern office setting.";
pub const MODERN_BACKGROUND_RULE: &str =
    "Replace the background with a clean, minimalist modern interior with soft natural light.";
pub const TEXTURED_BACKGROUND_RULE: &str =
    "Replace the background with a subtle, evenly lit textured wall in a neutral tone.";
pub const GENERIC_BACKGROUND_RULE: &str =
    "Clean background to a neutral professional shade (light gray, soft blue, or white).";

pub const CLOSING_RULES: [&str; 4] = [
    "Match the lighting and edges of the person to the background so the subject blends in naturally.",
    "Smooth clothing edges and enhance sharpness, but do not replace or distort the outfit.",
    "Avoid making the photo look “AI-generated” or plastic. It should look like a real, high-quality camera photo.",
    "Always maintain the original face structure and identity.",
];

/// Background sentence for `style`.
pub fn background_rule(style: BackgroundStyle) -> &'static str {
    match style {
        BackgroundStyle::Office => OFFICE_BACKGROUND_RULE,
        BackgroundStyle::Modern => MODERN_BACKGROUND_RULE,
        BackgroundStyle::Textured => TEXTURED_BACKGROUND_RULE,
        BackgroundStyle::AiChoice => GENERIC_BACKGROUND_RULE,
    }
}

/// Assembles the editing rules in their final order.
pub fn build_rules(options: &EnhancementOptions) -> Vec<&'static str> {
    let mut rules = Vec::with_capacity(4 + CLOSING_RULES.len());

    rules.push(HAIRSTYLE_RULE);
    rules.push(if options.adjust_brightness {
        ADJUST_LIGHTING_RULE
    } else {
        PRESERVE_LIGHTING_RULE
    });
    rules.push(if options.smooth_skin {
        SMOOTH_SKIN_RULE
    } else {
        NO_RETOUCH_RULE
    });
    rules.push(background_rule(options.background_style));
    rules.extend(CLOSING_RULES);

    rules
}

/// Renders the full instruction text for `options`.
pub fn build_instruction(options: &EnhancementOptions) -> String {
    let numbered = build_rules(options)
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{}. {}", i + 1, rule))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{PREAMBLE}{numbered}")
}
