// Drives the TUI event loop with scripted key presses on a TestBackend.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use futures_util::stream;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use playoff_push_core::pool::default_pool;
use playoff_push_core::state::DEFAULT_PICK_CAP;
use playoff_push_core::{DraftState, Position, Slot, ViewMode};
use playoff_push_tui::tui::run_loop;

fn key(code: KeyCode) -> std::io::Result<Event> {
    Ok(Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }))
}

fn fresh() -> DraftState {
    DraftState::new(
        ["Nate", "Josh", "Sam", "Ethan"].map(String::from),
        default_pool(),
        DEFAULT_PICK_CAP,
    )
}

async fn drive(keys: Vec<std::io::Result<Event>>) -> DraftState {
    let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
    run_loop(&mut terminal, stream::iter(keys), fresh())
        .await
        .unwrap()
}

#[tokio::test]
async fn enter_drafts_then_quit_confirms() {
    let draft = drive(vec![
        key(KeyCode::Enter),
        key(KeyCode::Down),
        key(KeyCode::Enter),
        key(KeyCode::Char('q')),
        key(KeyCode::Char('y')),
    ])
    .await;

    assert_eq!(draft.pick_number(), 2);
    let first = &draft.roster(Slot::FIRST).players()[0];
    assert_eq!(first.full_name(), "Justin Jefferson");
    // Second pick skipped one card down from the top of the remaining pool.
    let second = &draft.roster(Slot::new(2).unwrap()).players()[0];
    assert_eq!(second.full_name(), "CeeDee Lamb");
    assert_eq!(second.rank, 2);
}

#[tokio::test]
async fn filtered_pick_and_view_toggle() {
    let draft = drive(vec![
        key(KeyCode::Char('p')), // QB
        key(KeyCode::Char('d')),
        key(KeyCode::Esc),
        key(KeyCode::Tab),
        // Enter does nothing on the team screen.
        key(KeyCode::Enter),
        key(KeyCode::Char('q')),
        key(KeyCode::Char('q')),
    ])
    .await;

    assert_eq!(draft.pick_number(), 1);
    assert_eq!(
        draft.roster(Slot::FIRST).players()[0].position,
        Position::Quarterback
    );
    assert_eq!(draft.view_mode(), ViewMode::Team);
}

#[tokio::test]
async fn cancelled_quit_keeps_running_until_stream_ends() {
    let draft = drive(vec![
        key(KeyCode::Char('q')),
        key(KeyCode::Char('n')),
        key(KeyCode::Char('+')),
    ])
    .await;
    assert_eq!(draft.pick_number(), 1);
}

#[tokio::test]
async fn input_error_ends_the_loop() {
    let draft = drive(vec![
        key(KeyCode::Enter),
        Err(std::io::Error::other("terminal went away")),
        key(KeyCode::Enter),
    ])
    .await;
    assert_eq!(draft.pick_number(), 1);
}
