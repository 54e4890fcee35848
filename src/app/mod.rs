//! Main application window
//!
//! `CodePlayApp` owns the playground session and the UI components and lays
//! them out every frame: language picker on the left, a header with the
//! file label and action buttons, then editor and output side by side, and
//! a status line at the bottom.

mod input;

use codeplay::config::theme::Theme;
use codeplay::config::RuntimeConfig;
use codeplay::models::{Language, Session};
use codeplay::ui::{apply_theme, CodeEditor, LanguagePicker, OutputPane, UiColors};
use eframe::egui;
use tracing::{debug, info, warn};

/// Something the user asked for this frame, from a button or a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Run,
    ClearOutput,
    CopyOutput,
    SelectLanguage(Language),
}

/// Main application struct
pub struct CodePlayApp {
    /// Playground state (language, editor text, output text)
    session: Session,
    /// Runtime configuration
    runtime_config: RuntimeConfig,
    /// Active theme and its egui colors
    theme: Theme,
    colors: UiColors,
    /// Whether the theme still has to be pushed to the egui context
    theme_dirty: bool,
    picker: LanguagePicker,
    editor: CodeEditor,
    output: OutputPane,
    /// Transient message shown in the status line (e.g. clipboard result)
    notice: Option<String>,
}

impl CodePlayApp {
    /// Create the application from a loaded configuration
    pub fn new(runtime_config: RuntimeConfig) -> Self {
        let theme = runtime_config.current_theme().cloned().unwrap_or_else(|e| {
            warn!("{}. Using the default theme", e);
            Theme::default()
        });
        let config = runtime_config.config();
        let language = runtime_config.initial_language();
        info!("Starting session with {}", language);

        Self {
            session: Session::new(language),
            colors: UiColors::from_theme(&theme),
            theme,
            theme_dirty: true,
            picker: LanguagePicker::new(config.ui.sidebar_width),
            editor: CodeEditor::new(config.editor.font_size, config.editor.syntax_highlighting),
            output: OutputPane::new(config.editor.output_font_size, config.editor.wrap_output),
            notice: None,
            runtime_config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Apply one user action to the session
    pub fn apply(&mut self, action: AppAction) {
        debug!("Applying {:?}", action);
        match action {
            AppAction::Run => {
                let record = self.session.run();
                if !record.succeeded {
                    debug!("Run of {} failed", record.language);
                }
                self.notice = None;
            }
            AppAction::ClearOutput => {
                self.session.clear_output();
                self.notice = None;
            }
            AppAction::CopyOutput => self.copy_output(),
            AppAction::SelectLanguage(language) => {
                self.session.select_language(language);
                self.notice = None;
            }
        }
    }

    fn copy_output(&mut self) {
        if self.session.output().is_empty() {
            self.notice = Some("Nothing to copy".to_string());
            return;
        }

        let result = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(self.session.output().to_string()));

        self.notice = Some(match result {
            Ok(()) => "Output copied to clipboard".to_string(),
            Err(e) => {
                let error = codeplay::Error::from(e);
                warn!("{}", error);
                error.to_string()
            }
        });
    }

    /// Text for the status line
    pub fn status_text(&self) -> String {
        if let Some(notice) = self.notice() {
            return notice.to_string();
        }

        match self.session().last_run() {
            Some(run) => {
                let finished = run.finished_at.with_timezone(&chrono::Local);
                let outcome = if run.succeeded { "ok" } else { "failed" };
                format!(
                    "Last run {} ({}): {} line(s), {}",
                    finished.format("%H:%M:%S"),
                    run.language,
                    run.line_count,
                    outcome
                )
            }
            None => "Ready".to_string(),
        }
    }

    fn render_sidebar(&self, ctx: &egui::Context, actions: &mut Vec<AppAction>) {
        let width = self.runtime_config.config().ui.sidebar_width;

        egui::SidePanel::left("language_picker")
            .resizable(false)
            .exact_width(width)
            .frame(egui::Frame::none().fill(self.colors.panel))
            .show(ctx, |ui| {
                if let Some(language) =
                    self.picker
                        .render(ui, self.session.language(), &self.colors)
                {
                    actions.push(AppAction::SelectLanguage(language));
                }
            });
    }

    fn render_header(&self, ctx: &egui::Context, actions: &mut Vec<AppAction>) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.colors.panel)
                    .inner_margin(egui::Margin::symmetric(12.0, 8.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(self.session.header_label())
                            .monospace()
                            .color(self.colors.foreground),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let copy = egui::Button::new("Copy").fill(self.colors.secondary_button);
                        if ui.add(copy).on_hover_text("Copy output").clicked() {
                            actions.push(AppAction::CopyOutput);
                        }

                        let clear = egui::Button::new("Clear").fill(self.colors.secondary_button);
                        if ui.add(clear).on_hover_text("Ctrl+L").clicked() {
                            actions.push(AppAction::ClearOutput);
                        }

                        let run = egui::Button::new(
                            egui::RichText::new("Run").color(egui::Color32::WHITE),
                        )
                        .fill(self.colors.accent);
                        if ui.add(run).on_hover_text("Ctrl+Enter").clicked() {
                            actions.push(AppAction::Run);
                        }
                    });
                });
            });
    }

    fn render_status_line(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_line")
            .frame(
                egui::Frame::none()
                    .fill(self.colors.panel)
                    .inner_margin(egui::Margin::symmetric(12.0, 4.0)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(self.status_text())
                        .small()
                        .color(self.colors.muted),
                );
            });
    }

    fn render_workspace(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.colors.background)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    self.editor
                        .render(&mut columns[0], &mut self.session, &self.colors);
                    self.output.render(&mut columns[1], &self.session, &self.colors);
                });
            });
    }
}

impl eframe::App for CodePlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.theme_dirty {
            apply_theme(ctx, &self.theme);
            self.theme_dirty = false;
        }

        let mut actions = input::shortcut_actions(ctx);

        // Bottom and side panels must be added before the central panel
        self.render_sidebar(ctx, &mut actions);
        self.render_header(ctx, &mut actions);
        self.render_status_line(ctx);
        self.render_workspace(ctx);

        for action in actions {
            self.apply(action);
        }
    }
}
