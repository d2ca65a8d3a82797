//! Input handling - keyboard and mouse events mapped onto the form

use super::layout::FormLayout;
use super::state::{FormTuiState, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use duygu_common::PendingSubmit;

/// What the event loop must do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    None,
    /// Send this request in the background
    Submit(PendingSubmit),
    Quit,
}

/// Submit button press. The button is disabled unless `can_submit`.
fn press_analyze(state: &mut FormTuiState) -> UiAction {
    if !state.form.can_submit() {
        return UiAction::None;
    }
    match state.form.begin_submit() {
        Some(pending) => UiAction::Submit(pending),
        None => UiAction::None,
    }
}

/// Activate a control as if it was clicked
pub fn activate(state: &mut FormTuiState, target: Focus) -> UiAction {
    state.focus = target;
    match target {
        Focus::Input | Focus::Analyze => press_analyze(state),
        Focus::Suggestion(i) => {
            state.click_suggestion(i);
            UiAction::None
        }
        Focus::Clear => {
            state.clear();
            UiAction::None
        }
    }
}

pub fn handle_key(state: &mut FormTuiState, key: KeyEvent) -> UiAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    // AltGr arrives as Ctrl+Alt on some platforms
    let alt_gr = ctrl && key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl && !alt_gr => UiAction::Quit,
        KeyCode::Esc => UiAction::Quit,
        KeyCode::Char('l') if ctrl && !alt_gr => activate(state, Focus::Clear),
        KeyCode::Char('u') if ctrl && !alt_gr => {
            state.clear_input();
            UiAction::None
        }
        KeyCode::F(n @ 1..=9) => {
            let index = (n - 1) as usize;
            if index < state.form.view().suggestions.len() {
                activate(state, Focus::Suggestion(index))
            } else {
                UiAction::None
            }
        }
        KeyCode::Tab => {
            state.focus = state.focus.next();
            UiAction::None
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            UiAction::None
        }
        KeyCode::Enter => {
            let focus = state.focus;
            activate(state, focus)
        }
        KeyCode::Char(c) if !ctrl || alt_gr => {
            state.focus = Focus::Input;
            state.insert_char(c);
            UiAction::None
        }
        KeyCode::Backspace => {
            state.backspace();
            UiAction::None
        }
        KeyCode::Delete => {
            state.delete();
            UiAction::None
        }
        KeyCode::Left => {
            state.move_left();
            UiAction::None
        }
        KeyCode::Right => {
            state.move_right();
            UiAction::None
        }
        KeyCode::Home => {
            state.move_home();
            UiAction::None
        }
        KeyCode::End => {
            state.move_end();
            UiAction::None
        }
        _ => UiAction::None,
    }
}

/// Bracketed paste lands in the input as text. Never submits.
pub fn handle_paste(state: &mut FormTuiState, text: &str) -> UiAction {
    state.focus = Focus::Input;
    state.insert_str(text);
    UiAction::None
}

/// Left click activates buttons and focuses the input box
pub fn handle_mouse(state: &mut FormTuiState, mouse: MouseEvent, layout: &FormLayout) -> UiAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return UiAction::None;
    }

    match layout.hit_test(mouse.column, mouse.row) {
        Some(Focus::Input) => {
            state.focus = Focus::Input;
            UiAction::None
        }
        Some(target) => activate(state, target),
        None => UiAction::None,
    }
}
