//! Language picker
//!
//! The narrow column of icon buttons on the left of the window, one per
//! registry entry in registry order.

use crate::models::{registry, Language};
use crate::ui::colors::UiColors;
use eframe::egui;

/// Vertical language picker component
pub struct LanguagePicker {
    /// Side length of each square button
    button_size: f32,
    /// Font size of the icon glyphs
    icon_size: f32,
}

impl LanguagePicker {
    /// Create a picker sized for a sidebar of `sidebar_width` points
    pub fn new(sidebar_width: f32) -> Self {
        Self {
            button_size: (sidebar_width - 16.0).max(24.0),
            icon_size: 18.0,
        }
    }

    pub fn button_size(&self) -> f32 {
        self.button_size
    }

    /// Render the picker; returns the language whose button was clicked
    pub fn render(
        &self,
        ui: &mut egui::Ui,
        current: Language,
        colors: &UiColors,
    ) -> Option<Language> {
        let mut selected = None;

        ui.vertical_centered(|ui| {
            ui.add_space(8.0);

            for descriptor in registry() {
                let active = descriptor.language == current;
                let (fill, text_color) = if active {
                    (colors.accent, egui::Color32::WHITE)
                } else {
                    (colors.panel, colors.muted)
                };

                let button = egui::Button::new(
                    egui::RichText::new(descriptor.icon)
                        .size(self.icon_size)
                        .color(text_color),
                )
                .fill(fill)
                .stroke(egui::Stroke::NONE)
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(self.button_size, self.button_size));

                let response = ui.add(button).on_hover_text(descriptor.name);
                if response.clicked() {
                    selected = Some(descriptor.language);
                }

                ui.add_space(4.0);
            }
        });

        selected
    }
}

impl Default for LanguagePicker {
    fn default() -> Self {
        Self::new(64.0)
    }
}
