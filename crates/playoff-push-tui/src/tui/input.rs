// Keyboard input handling.
//
// Translates crossterm key events into draft intents, or into local
// ViewState mutations (selection, scroll, filtering, quit confirmation).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use playoff_push_core::view::{Body, View};
use playoff_push_core::{Intent, Position};

use super::ViewState;

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Apply this intent to the draft.
    Intent(Intent),
    /// Leave the TUI.
    Quit,
}

/// None -> QB -> RB -> WR -> TE -> None
const POSITION_CYCLE: &[Position] = &Position::ALL;

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 20;

/// Handle a keyboard event against the currently displayed `view`.
///
/// Returns `Some(Action)` when the event loop has to act; `None` when the
/// key was handled locally or ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState, view: &View) -> Option<Action> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if view_state.filter_mode {
        return handle_filter_mode(key_event, view_state);
    }

    let draft_view = matches!(view.body, Body::Draft(_));

    match key_event.code {
        KeyCode::Tab | KeyCode::Char('v') => Some(Action::Intent(view.header.toggle.on_press.clone())),

        KeyCode::Up | KeyCode::Char('k') => {
            move_up(view_state, draft_view, 1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_down(view_state, view, draft_view, 1);
            None
        }
        KeyCode::PageUp => {
            move_up(view_state, draft_view, PAGE_SIZE);
            None
        }
        KeyCode::PageDown => {
            move_down(view_state, view, draft_view, PAGE_SIZE);
            None
        }

        // Draft log scrolling
        KeyCode::Char('[') => {
            scroll_up(view_state, "draft_log", 1);
            None
        }
        KeyCode::Char(']') => {
            scroll_down(view_state, "draft_log", 1);
            None
        }

        KeyCode::Enter | KeyCode::Char('+') | KeyCode::Char('d') if draft_view => view_state
            .selected_card(view)
            .and_then(|card| card.on_select.clone())
            .map(Action::Intent),

        // Filters only apply to the available list
        KeyCode::Char('/') if draft_view => {
            view_state.filter_mode = true;
            None
        }
        KeyCode::Char('p') if draft_view => {
            cycle_position_filter(view_state);
            view_state.selected = 0;
            None
        }

        KeyCode::Esc => {
            view_state.filter_text.clear();
            view_state.position_filter = None;
            view_state.notice = None;
            None
        }

        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Quit confirmation: `y`/`q` confirm, `n`/Esc cancel, everything else blocked.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(Action::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Filter mode: printable characters edit the text, Enter keeps it, Esc
/// clears it.
fn handle_filter_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.filter_mode = false;
            view_state.filter_text.clear();
        }
        KeyCode::Enter => {
            view_state.filter_mode = false;
        }
        KeyCode::Backspace => {
            view_state.filter_text.pop();
            view_state.selected = 0;
        }
        KeyCode::Char(c) => {
            view_state.filter_text.push(c);
            view_state.selected = 0;
        }
        _ => {}
    }
    None
}

fn cycle_position_filter(view_state: &mut ViewState) {
    view_state.position_filter = match view_state.position_filter {
        None => Some(POSITION_CYCLE[0]),
        Some(current) => {
            let idx = POSITION_CYCLE.iter().position(|&p| p == current);
            match idx {
                Some(i) if i + 1 < POSITION_CYCLE.len() => Some(POSITION_CYCLE[i + 1]),
                _ => None,
            }
        }
    };
}

/// Move the selection (draft view) or scroll the team sheet up.
fn move_up(view_state: &mut ViewState, draft_view: bool, lines: usize) {
    if draft_view {
        view_state.selected = view_state.selected.saturating_sub(lines);
    } else {
        scroll_up(view_state, "teams", lines);
    }
}

/// Move the selection (draft view) or scroll the team sheet down.
fn move_down(view_state: &mut ViewState, view: &View, draft_view: bool, lines: usize) {
    if draft_view {
        let last = view_state.visible_cards(view).len().saturating_sub(1);
        view_state.selected = view_state.selected.saturating_add(lines).min(last);
    } else {
        scroll_down(view_state, "teams", lines);
    }
}

fn scroll_up(view_state: &mut ViewState, key: &str, lines: usize) {
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_sub(lines);
}

fn scroll_down(view_state: &mut ViewState, key: &str, lines: usize) {
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_add(lines);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
