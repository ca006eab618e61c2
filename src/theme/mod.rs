pub mod presets;

use iced::Color;
use serde::{Deserialize, Serialize};

/// Complete theme definition with semantic color naming
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // === Background Layers (progressive depth) ===
    pub bg_base: Color,     // Page background (deepest)
    pub bg_header: Color,   // Sticky header bar
    pub bg_surface: Color,  // Cards, section panels
    pub bg_elevated: Color, // Inputs, chips
    pub bg_hover: Color,    // Hover states
    pub bg_active: Color,   // Active/selected states

    // === Foreground/Text ===
    pub fg_primary: Color,   // Main text
    pub fg_secondary: Color, // Body copy
    pub fg_muted: Color,     // Placeholders, captions
    pub fg_on_accent: Color, // Text on accent colors

    // === Semantic Colors ===
    pub accent: Color,       // Purple brand color
    pub accent_hover: Color, // Hovered accent
    pub accent_alt: Color,   // Blue end of the brand gradient
    pub success: Color,      // Live badges, sent banner
    pub warning: Color,      // In-progress badges
    pub danger: Color,       // Field errors, send failures
    pub info: Color,         // Completed badges

    // === Borders & Dividers ===
    pub border: Color,        // Default borders
    pub border_strong: Color, // Focused inputs, active filters
    pub divider: Color,       // Separators

    // === Shadows ===
    pub shadow_color: Color,  // Card shadow
    pub shadow_strong: Color, // Modal backdrop
}

impl AppTheme {
    /// Creates a theme from RGB hex values for easier definition
    #[allow(clippy::too_many_arguments)]
    pub fn from_hex(
        name: &str,
        bg_base: u32,
        bg_header: u32,
        bg_surface: u32,
        bg_elevated: u32,
        bg_hover: u32,
        bg_active: u32,
        fg_primary: u32,
        fg_secondary: u32,
        fg_muted: u32,
        fg_on_accent: u32,
        accent: u32,
        accent_hover: u32,
        accent_alt: u32,
        success: u32,
        warning: u32,
        danger: u32,
        info: u32,
        border: u32,
        border_strong: u32,
        divider: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            bg_base: hex_to_color(bg_base),
            bg_header: hex_to_color(bg_header),
            bg_surface: hex_to_color(bg_surface),
            bg_elevated: hex_to_color(bg_elevated),
            bg_hover: hex_to_color(bg_hover),
            bg_active: hex_to_color(bg_active),
            fg_primary: hex_to_color(fg_primary),
            fg_secondary: hex_to_color(fg_secondary),
            fg_muted: hex_to_color(fg_muted),
            fg_on_accent: hex_to_color(fg_on_accent),
            accent: hex_to_color(accent),
            accent_hover: hex_to_color(accent_hover),
            accent_alt: hex_to_color(accent_alt),
            success: hex_to_color(success),
            warning: hex_to_color(warning),
            danger: hex_to_color(danger),
            info: hex_to_color(info),
            border: hex_to_color(border),
            border_strong: hex_to_color(border_strong),
            divider: hex_to_color(divider),
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, 0.7),
        }
    }

    /// Uses relative luminance of the base background
    pub fn is_light(&self) -> bool {
        let c = self.bg_base;
        0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b > 0.5
    }
}

/// Converts hex color (0xRRGGBB) to iced Color
#[allow(clippy::cast_precision_loss)]
fn hex_to_color(hex: u32) -> Color {
    Color::from_rgb(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// Dark or light page palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn to_theme(self) -> AppTheme {
        match self {
            Self::Dark => presets::midnight(),
            Self::Light => presets::daylight(),
        }
    }

    /// Base iced theme used for widgets that are not styled explicitly
    pub fn to_iced(self) -> iced::Theme {
        match self {
            Self::Dark => iced::Theme::Dark,
            Self::Light => iced::Theme::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        })
    }
}
