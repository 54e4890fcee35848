//! Theme and Styling Configuration
//!
//! Color themes for the playground window. Two built-in themes ship with
//! CodePlay (`dark`, the default, and `light`); more can be declared in the
//! configuration file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the theme used when nothing else is configured
pub const DEFAULT_THEME: &str = "dark";

const BUILTIN_THEMES: [&str; 2] = ["dark", "light"];

/// RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Create color from hex string (e.g., "#FF0000" or "#FF0000FF")
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        let invalid = || Error::ConfigValidationFailed {
            field: "color".to_string(),
            reason: format!("Invalid hex color '{}'", hex),
        };

        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if digits.len() == 8 { channel(6..8)? } else { 255 };

        Ok(Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ))
    }

    /// Convert to 8-bit channels
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b), channel(self.a))
    }

    /// Convert to hex string, omitting alpha when opaque
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

/// Colors used by the editor highlighter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxColors {
    pub plain: Color,
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub number: Color,
}

/// A complete window theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name, used as the lookup key
    pub name: String,
    /// Base egui visuals (dark or light)
    pub dark_mode: bool,
    /// Central area and output pane
    pub background: Color,
    /// Sidebar and header
    pub panel: Color,
    /// Editor text area
    pub editor_background: Color,
    /// Hovered picker buttons
    pub hover: Color,
    pub foreground: Color,
    /// Secondary labels and unselected picker buttons
    pub muted: Color,
    /// Selected language and the Run button
    pub accent: Color,
    /// Clear button
    pub secondary_button: Color,
    pub success: Color,
    pub error: Color,
    pub syntax: SyntaxColors,
}

impl Theme {
    /// Built-in dark theme
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            dark_mode: true,
            background: Color::from_rgb(0x1e, 0x1e, 0x1e),
            panel: Color::from_rgb(0x2d, 0x2d, 0x2d),
            editor_background: Color::from_rgb(0x1e, 0x1e, 0x1e),
            hover: Color::from_rgb(0x3d, 0x3d, 0x3d),
            foreground: Color::from_rgb(0xff, 0xff, 0xff),
            muted: Color::from_rgb(0x9c, 0xa3, 0xaf),
            accent: Color::from_rgb(0x25, 0x63, 0xeb),
            secondary_button: Color::from_rgb(0x4b, 0x55, 0x63),
            success: Color::from_rgb(0x4a, 0xde, 0x80),
            error: Color::from_rgb(0xf8, 0x71, 0x71),
            syntax: SyntaxColors {
                plain: Color::from_rgb(0xd4, 0xd4, 0xd4),
                keyword: Color::from_rgb(0xc5, 0x86, 0xc0),
                string: Color::from_rgb(0xce, 0x91, 0x78),
                comment: Color::from_rgb(0x6a, 0x99, 0x55),
                number: Color::from_rgb(0xb5, 0xce, 0xa8),
            },
        }
    }

    /// Built-in light theme
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            dark_mode: false,
            background: Color::from_rgb(0xff, 0xff, 0xff),
            panel: Color::from_rgb(0xf3, 0xf4, 0xf6),
            editor_background: Color::from_rgb(0xfa, 0xfa, 0xfa),
            hover: Color::from_rgb(0xe5, 0xe7, 0xeb),
            foreground: Color::from_rgb(0x11, 0x18, 0x27),
            muted: Color::from_rgb(0x6b, 0x72, 0x80),
            accent: Color::from_rgb(0x25, 0x63, 0xeb),
            secondary_button: Color::from_rgb(0x9c, 0xa3, 0xaf),
            success: Color::from_rgb(0x16, 0xa3, 0x4a),
            error: Color::from_rgb(0xdc, 0x26, 0x26),
            syntax: SyntaxColors {
                plain: Color::from_rgb(0x1f, 0x29, 0x37),
                keyword: Color::from_rgb(0xaf, 0x00, 0xdb),
                string: Color::from_rgb(0xa3, 0x15, 0x15),
                comment: Color::from_rgb(0x00, 0x80, 0x00),
                number: Color::from_rgb(0x09, 0x86, 0x58),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Theme registry with a current selection
#[derive(Debug, Clone)]
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: String,
}

impl ThemeManager {
    /// Create a manager holding the built-in themes, with `dark` selected
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [Theme::dark(), Theme::light()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self {
            themes,
            current_theme: DEFAULT_THEME.to_string(),
        }
    }

    /// Get the current theme
    pub fn current_theme(&self) -> Result<&Theme> {
        self.themes
            .get(&self.current_theme)
            .ok_or_else(|| Error::ThemeNotFound {
                theme_name: self.current_theme.clone(),
            })
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme_name: &str) -> Result<()> {
        if self.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            Ok(())
        } else {
            Err(Error::ThemeNotFound {
                theme_name: theme_name.to_string(),
            })
        }
    }

    /// Add or replace a custom theme. Built-in themes cannot be replaced.
    pub fn add_theme(&mut self, theme: Theme) -> Result<()> {
        if BUILTIN_THEMES.contains(&theme.name.as_str()) {
            return Err(Error::ConfigValidationFailed {
                field: "themes.name".to_string(),
                reason: format!("'{}' is a built-in theme", theme.name),
            });
        }
        self.themes.insert(theme.name.clone(), theme);
        Ok(())
    }

    /// Whether a theme with this name is registered
    pub fn contains(&self, theme_name: &str) -> bool {
        self.themes.contains_key(theme_name)
    }

    /// List all available themes, sorted by name
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
