// TUI board: layout, input handling, and widget rendering.
//
// The event loop owns the current `DraftState` snapshot. Every frame draws
// the `View` rendered from that snapshot; key presses either mutate the
// TUI-local `ViewState` (selection, filters, scroll) or produce an `Intent`
// that replaces the snapshot.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};
use tracing::{info, warn};

use playoff_push_core::view::{render, Body, PlayerCard, View};
use playoff_push_core::{update, DraftState, Intent, Position};

use input::Action;
use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that is not part of the draft itself.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Index of the highlighted row in the filtered available list.
    pub selected: usize,
    /// Per-widget scroll offsets (keyed by widget name).
    pub scroll_offset: HashMap<String, usize>,
    /// Current filter/search text.
    pub filter_text: String,
    /// Whether the filter input is active.
    pub filter_mode: bool,
    /// Position filter for the available players table.
    pub position_filter: Option<Position>,
    /// Whether the quit confirmation dialog is showing.
    pub confirm_quit: bool,
    /// Why the last pick was refused, shown in the status bar.
    pub notice: Option<String>,
}

impl ViewState {
    /// Available cards left after the position and text filters.
    pub fn visible_cards<'a>(&self, view: &'a View) -> Vec<&'a PlayerCard> {
        match &view.body {
            Body::Draft(board) => widgets::available::filter_cards(
                &board.available,
                self.position_filter,
                &self.filter_text,
            ),
            Body::Team(_) => Vec::new(),
        }
    }

    /// The highlighted available card, if any.
    pub fn selected_card<'a>(&self, view: &'a View) -> Option<&'a PlayerCard> {
        self.visible_cards(view).get(self.selected).copied()
    }

    /// Keep the selection inside the filtered list after it shrinks.
    pub fn clamp_selection(&mut self, view: &View) {
        let len = self.visible_cards(view).len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

// ---------------------------------------------------------------------------
// Intent dispatch
// ---------------------------------------------------------------------------

/// Apply `intent` to `draft`, recording a notice when a pick is refused.
pub fn dispatch(draft: &DraftState, intent: &Intent, view_state: &mut ViewState) -> DraftState {
    match intent {
        Intent::DraftPlayer(player) => match draft.try_pick(player) {
            Ok(next) => {
                view_state.notice = None;
                next
            }
            Err(rejection) => {
                info!("{}", rejection);
                view_state.notice = Some(rejection.to_string());
                draft.clone()
            }
        },
        Intent::ToggleView => {
            view_state.notice = None;
            update(draft, intent)
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete frame for `view`.
pub fn render_frame(frame: &mut Frame, view: &View, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::header::render(frame, layout.header, &view.header);
    widgets::status_bar::render(frame, layout.status_bar, &view.status, state);

    match &view.body {
        Body::Draft(board) => {
            widgets::board::render(frame, layout.board, board);
            widgets::available::render(frame, layout.available, board, state);
        }
        Body::Team(sheet) => {
            widgets::teams::render(frame, layout.main_panel, sheet, state);
        }
    }

    widgets::draft_log::render(frame, layout.draft_log, &view.draft_log, state);
    widgets::help_bar::render(frame, layout.help_bar, view, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI until the user quits, returning the last draft snapshot.
///
/// Initializes the terminal, installs a panic hook that restores it, runs
/// the event loop and restores the terminal on the way out.
pub async fn run(draft: DraftState) -> anyhow::Result<DraftState> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, EventStream::new(), draft).await;

    ratatui::restore();
    result
}

/// The select loop: input events and a ~30fps render tick.
///
/// Generic over the backend and the event source so it can be driven by a
/// `TestBackend` and a scripted stream.
pub async fn run_loop<B, S>(
    terminal: &mut Terminal<B>,
    mut events: S,
    mut draft: DraftState,
) -> anyhow::Result<DraftState>
where
    B: Backend,
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    let mut view_state = ViewState::default();
    let mut view = render(&draft);

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        match input::handle_key(key_event, &mut view_state, &view) {
                            Some(Action::Quit) => {
                                info!("Quit requested at pick {}", draft.pick_number());
                                break;
                            }
                            Some(Action::Intent(intent)) => {
                                draft = dispatch(&draft, &intent, &mut view_state);
                                view = render(&draft);
                                view_state.clamp_selection(&view);
                            }
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events: the next tick redraws.
                    }
                    Some(Err(e)) => {
                        warn!("Input stream error: {}", e);
                        break;
                    }
                    None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal
                    .draw(|frame| render_frame(frame, &view, &view_state))
                    .map_err(|e| anyhow::anyhow!("failed to draw frame: {e}"))?;
            }
        }
    }

    Ok(draft)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
