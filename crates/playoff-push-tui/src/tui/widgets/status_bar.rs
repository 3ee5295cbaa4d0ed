// Status bar widget: who is on the clock, pick counter, round, direction.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use playoff_push_core::view::Status;
use playoff_push_core::Direction;

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [on the clock] [pick counter] [round] [direction] [notice]
pub fn render(frame: &mut Frame, area: Rect, status: &Status, state: &ViewState) {
    let mut spans = Vec::new();

    if status.complete {
        spans.push(Span::styled(
            " Draft complete ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            format!(" On the clock: {} (slot {}) ", status.on_the_clock, status.slot),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.push(Span::styled(
        pick_counter(status),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.push(Span::styled(
        format!("Round {}/{} {}", status.round, status.total_rounds, direction_arrow(status.direction)),
        Style::default().fg(Color::White),
    ));

    if let Some(notice) = &state.notice {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// "Pick 5/40": the pick about to be made, or the final count once complete.
pub fn pick_counter(status: &Status) -> String {
    let shown = if status.complete {
        status.pick_number
    } else {
        status.pick_number + 1
    };
    format!("Pick {}/{}", shown, status.pick_cap)
}

/// Arrow showing which way the snake is moving.
pub fn direction_arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "→",
        Direction::Backward => "←",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use playoff_push_core::pool::default_pool;
    use playoff_push_core::view::render as render_view;
    use playoff_push_core::DraftState;

    fn status_after(picks: usize, pick_cap: u32) -> Status {
        let mut state = DraftState::new(
            ["Nate", "Josh", "Sam", "Ethan"].map(String::from),
            default_pool(),
            pick_cap,
        );
        for _ in 0..picks {
            state = state.apply_pick(&state.available_players()[0].clone());
        }
        render_view(&state).status
    }

    #[test]
    fn pick_counter_shows_next_pick() {
        assert_eq!(pick_counter(&status_after(0, 40)), "Pick 1/40");
        assert_eq!(pick_counter(&status_after(4, 40)), "Pick 5/40");
    }

    #[test]
    fn pick_counter_when_complete() {
        assert_eq!(pick_counter(&status_after(2, 2)), "Pick 2/2");
    }

    #[test]
    fn direction_arrows() {
        assert_eq!(direction_arrow(Direction::Forward), "→");
        assert_eq!(direction_arrow(Direction::Backward), "←");
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let status = status_after(0, 40);
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &status, &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_complete_with_notice() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let status = status_after(1, 1);
        let state = ViewState {
            notice: Some("draft complete after 1 picks".into()),
            ..Default::default()
        };
        terminal
            .draw(|frame| render(frame, frame.area(), &status, &state))
            .unwrap();
    }
}
