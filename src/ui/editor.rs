//! Code editor pane
//!
//! A monospace multiline text area bound to the session's source buffer,
//! with a line-number gutter and optional syntax coloring from
//! [`crate::ui::highlight`].

use crate::models::{Session, SyntaxMode};
use crate::ui::colors::{SyntaxEguiColors, UiColors};
use crate::ui::highlight::highlight;
use eframe::egui;
use eframe::egui::text::{LayoutJob, TextFormat};

/// Editor component
pub struct CodeEditor {
    /// Font size in points
    font_size: f32,
    /// Whether to color the source text
    syntax_highlighting: bool,
}

impl CodeEditor {
    pub fn new(font_size: f32, syntax_highlighting: bool) -> Self {
        Self {
            font_size,
            syntax_highlighting,
        }
    }

    /// Render the editor filling the available space
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        session: &mut Session,
        colors: &UiColors,
    ) -> egui::Response {
        let mode = session.descriptor().syntax_mode;
        let font_id = egui::FontId::monospace(self.font_size);
        let highlighting = self.syntax_highlighting;
        let syntax = colors.syntax.clone();

        let mut layouter = |ui: &egui::Ui, text: &str, wrap_width: f32| {
            let mut job = layout_job(text, mode, &syntax, font_id.clone(), highlighting);
            job.wrap.max_width = wrap_width;
            ui.fonts(|fonts| fonts.layout_job(job))
        };

        let rows = (ui.available_height() / (self.font_size * 1.4)).max(4.0) as usize;
        let gutter = egui::RichText::new(line_numbers(session.source()))
            .font(font_id.clone())
            .color(colors.muted);

        egui::Frame::none()
            .fill(colors.editor_background)
            .inner_margin(egui::Margin::same(8.0))
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("code_editor")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.horizontal_top(|ui| {
                            ui.add(egui::Label::new(gutter).selectable(false).extend());
                            ui.add(
                                egui::TextEdit::multiline(session.source_mut())
                                    .id_salt("code_editor_text")
                                    .code_editor()
                                    .frame(false)
                                    .margin(egui::Margin::symmetric(4.0, 0.0))
                                    .lock_focus(true)
                                    .desired_width(f32::INFINITY)
                                    .desired_rows(rows)
                                    .layouter(&mut layouter),
                            )
                        })
                        .inner
                    })
                    .inner
            })
            .inner
    }
}

impl Default for CodeEditor {
    fn default() -> Self {
        Self::new(14.0, true)
    }
}

/// Gutter text for `source`: one right-aligned number per editor line.
///
/// A trailing newline starts a new (empty) line, so it gets a number too.
pub fn line_numbers(source: &str) -> String {
    let count = source.split('\n').count();
    let width = count.to_string().len();
    (1..=count)
        .map(|n| format!("{:>width$}", n))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build a colored layout for `source`; plain text between highlighted spans
pub fn layout_job(
    source: &str,
    mode: SyntaxMode,
    colors: &SyntaxEguiColors,
    font_id: egui::FontId,
    syntax_highlighting: bool,
) -> LayoutJob {
    let mut job = LayoutJob::default();
    let plain = TextFormat::simple(font_id.clone(), colors.plain);

    if !syntax_highlighting {
        job.append(source, 0.0, plain);
        return job;
    }

    let mut cursor = 0;
    for span in highlight(source, mode) {
        if span.start > cursor {
            job.append(&source[cursor..span.start], 0.0, plain.clone());
        }
        job.append(
            &source[span.start..span.end],
            0.0,
            TextFormat::simple(font_id.clone(), colors.for_kind(span.kind)),
        );
        cursor = span.end;
    }

    if cursor < source.len() {
        job.append(&source[cursor..], 0.0, plain);
    }

    job
}
