//! Output pane
//!
//! Read-only display of the last simulated run. Successful runs are drawn in
//! the theme's success color, failed runs in its error color and the
//! placeholder in the muted color.

use crate::models::Session;
use crate::ui::colors::UiColors;
use eframe::egui;

/// How the output text should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTone {
    /// Nothing has been run (or the pane was cleared)
    Placeholder,
    Success,
    Error,
}

impl OutputTone {
    pub fn for_session(session: &Session) -> Self {
        if session.output().is_empty() {
            OutputTone::Placeholder
        } else if session.output_is_error() {
            OutputTone::Error
        } else {
            OutputTone::Success
        }
    }

    pub fn color(self, colors: &UiColors) -> egui::Color32 {
        match self {
            OutputTone::Placeholder => colors.muted,
            OutputTone::Success => colors.success,
            OutputTone::Error => colors.error,
        }
    }
}

/// Output pane component
pub struct OutputPane {
    font_size: f32,
    wrap: bool,
}

impl OutputPane {
    pub fn new(font_size: f32, wrap: bool) -> Self {
        Self { font_size, wrap }
    }

    pub fn render(&self, ui: &mut egui::Ui, session: &Session, colors: &UiColors) {
        let tone = OutputTone::for_session(session);

        ui.label(
            egui::RichText::new("Output")
                .color(colors.muted)
                .strong(),
        );
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("output_pane")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let text = egui::RichText::new(session.output_or_placeholder())
                    .font(egui::FontId::monospace(self.font_size))
                    .color(tone.color(colors));

                let label = egui::Label::new(text).selectable(true);
                let label = if self.wrap { label.wrap() } else { label.extend() };
                ui.add(label);
            });
    }
}

impl Default for OutputPane {
    fn default() -> Self {
        Self::new(13.0, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;

    #[test]
    fn test_tone_follows_session() {
        let mut session = Session::new(Language::Go);
        assert_eq!(OutputTone::for_session(&session), OutputTone::Placeholder);

        session.run();
        assert_eq!(OutputTone::for_session(&session), OutputTone::Success);

        session.select_language(Language::Python);
        session.run();
        assert_eq!(OutputTone::for_session(&session), OutputTone::Error);

        session.clear_output();
        assert_eq!(OutputTone::for_session(&session), OutputTone::Placeholder);
    }

    #[test]
    fn test_error_tone_uses_error_color() {
        let colors = UiColors::default();
        assert_eq!(OutputTone::Error.color(&colors), colors.error);
        assert_eq!(OutputTone::Placeholder.color(&colors), colors.muted);
        assert_eq!(OutputTone::Success.color(&colors), colors.success);
    }
}
