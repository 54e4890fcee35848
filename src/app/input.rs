//! Keyboard Handling
//!
//! | Shortcut | Action |
//! |----------|--------|
//! | Ctrl+Enter | Run the editor contents |
//! | Ctrl+L | Clear the output pane |
//!
//! Both shortcuts work while the editor has focus. They are consumed before
//! the widgets run, so the editor never sees the key press.

use eframe::egui;

use super::AppAction;

/// Shortcut table, in the order the shortcuts are checked
const SHORTCUTS: [(egui::Modifiers, egui::Key, AppAction); 2] = [
    (egui::Modifiers::COMMAND, egui::Key::Enter, AppAction::Run),
    (egui::Modifiers::COMMAND, egui::Key::L, AppAction::ClearOutput),
];

/// Consume this frame's shortcut key presses and translate them to actions
pub(super) fn shortcut_actions(ctx: &egui::Context) -> Vec<AppAction> {
    ctx.input_mut(|input| {
        SHORTCUTS
            .iter()
            .filter(|(modifiers, key, _)| input.consume_key(*modifiers, *key))
            .map(|(_, _, action)| *action)
            .collect()
    })
}
