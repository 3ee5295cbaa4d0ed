// Draft log widget: completed picks, newest first.
//
// Each: "#{pick} R{round} {participant}: {player} ({pos}, {team})"

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use playoff_push_core::view::LogEntry;

use crate::tui::ViewState;

/// Render the draft log into the given area.
pub fn render(frame: &mut Frame, area: Rect, log: &[LogEntry], state: &ViewState) {
    if log.is_empty() {
        let paragraph = Paragraph::new("  No picks yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Draft Log"));
        frame.render_widget(paragraph, area);
        return;
    }

    let scroll_offset = state.scroll_offset.get("draft_log").copied().unwrap_or(0);

    // Visible row count: subtract 2 for borders
    let visible_rows = (area.height as usize).saturating_sub(2);
    let total = log.len();

    let max_offset = total.saturating_sub(visible_rows);
    let scroll_offset = scroll_offset.min(max_offset);

    let items: Vec<ListItem> = log
        .iter()
        .rev()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                format_entry(entry),
                Style::default().fg(round_color(entry.round)),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Draft Log ({})", total)),
    );
    frame.render_widget(list, area);

    if total > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible_rows)).position(scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin { vertical: 1, horizontal: 0 }),
            &mut scrollbar_state,
        );
    }
}

/// Format a single log entry for display.
pub fn format_entry(entry: &LogEntry) -> String {
    format!(
        "#{} R{} {}: {} ({}, {})",
        entry.pick_number,
        entry.round,
        entry.participant,
        entry.player.full_name(),
        entry.player.position,
        entry.player.team
    )
}

/// Alternate colors by round so the snake turns are easy to spot.
pub fn round_color(round: u32) -> Color {
    if round % 2 == 1 {
        Color::White
    } else {
        Color::Gray
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
