//! Color utilities for UI rendering
//!
//! Converts configured theme colors to egui colors and applies a theme to
//! the egui context.

use crate::config::theme::{Color, SyntaxColors, Theme};
use crate::ui::highlight::HighlightKind;
use eframe::egui;

/// Extension trait to convert config Color to egui::Color32
pub trait ToEguiColor {
    /// Convert to egui::Color32
    fn to_egui(&self) -> egui::Color32;

    /// Convert to egui::Color32 with custom alpha
    fn to_egui_with_alpha(&self, alpha: u8) -> egui::Color32;
}

impl ToEguiColor for Color {
    fn to_egui(&self) -> egui::Color32 {
        let (r, g, b, a) = self.to_rgba8();
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    fn to_egui_with_alpha(&self, alpha: u8) -> egui::Color32 {
        let (r, g, b, _) = self.to_rgba8();
        egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)
    }
}

/// Theme colors resolved once per frame for the widgets
#[derive(Debug, Clone, PartialEq)]
pub struct UiColors {
    pub background: egui::Color32,
    pub panel: egui::Color32,
    pub editor_background: egui::Color32,
    pub hover: egui::Color32,
    pub foreground: egui::Color32,
    pub muted: egui::Color32,
    pub accent: egui::Color32,
    pub secondary_button: egui::Color32,
    pub success: egui::Color32,
    pub error: egui::Color32,
    pub syntax: SyntaxEguiColors,
}

/// Highlighter colors converted to egui
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxEguiColors {
    pub plain: egui::Color32,
    pub keyword: egui::Color32,
    pub string: egui::Color32,
    pub comment: egui::Color32,
    pub number: egui::Color32,
}

impl SyntaxEguiColors {
    fn from_syntax(syntax: &SyntaxColors) -> Self {
        Self {
            plain: syntax.plain.to_egui(),
            keyword: syntax.keyword.to_egui(),
            string: syntax.string.to_egui(),
            comment: syntax.comment.to_egui(),
            number: syntax.number.to_egui(),
        }
    }

    /// Color for a highlighted span
    pub fn for_kind(&self, kind: HighlightKind) -> egui::Color32 {
        match kind {
            HighlightKind::Keyword => self.keyword,
            HighlightKind::String => self.string,
            HighlightKind::Comment => self.comment,
            HighlightKind::Number => self.number,
        }
    }
}

impl UiColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: theme.background.to_egui(),
            panel: theme.panel.to_egui(),
            editor_background: theme.editor_background.to_egui(),
            hover: theme.hover.to_egui(),
            foreground: theme.foreground.to_egui(),
            muted: theme.muted.to_egui(),
            accent: theme.accent.to_egui(),
            secondary_button: theme.secondary_button.to_egui(),
            success: theme.success.to_egui(),
            error: theme.error.to_egui(),
            syntax: SyntaxEguiColors::from_syntax(&theme.syntax),
        }
    }
}

impl Default for UiColors {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Build egui visuals for a theme
pub fn visuals_for(theme: &Theme) -> egui::Visuals {
    let mut visuals = if theme.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = theme.background.to_egui();
    visuals.window_fill = theme.panel.to_egui();
    visuals.extreme_bg_color = theme.editor_background.to_egui();
    visuals.faint_bg_color = theme.panel.to_egui();
    visuals.override_text_color = Some(theme.foreground.to_egui());
    visuals.selection.bg_fill = theme.accent.to_egui_with_alpha(120);
    visuals.widgets.hovered.weak_bg_fill = theme.hover.to_egui();
    visuals
}

/// Apply a theme to the whole egui context
pub fn apply_theme(ctx: &egui::Context, theme: &Theme) {
    ctx.set_visuals(visuals_for(theme));
}
