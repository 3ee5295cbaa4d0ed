// Available players widget: filterable table of undrafted players.
//
// Columns: Rank, Name, Pos, Team. Rows the participant on the clock may not
// draft are dimmed; the selected row is highlighted and kept in view.

use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{
    Block, Borders, Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table, TableState,
};
use ratatui::Frame;

use playoff_push_core::view::{DraftBoard, PlayerCard};
use playoff_push_core::Position;

use crate::tui::ViewState;

/// Render the available players table into the given area.
pub fn render(frame: &mut Frame, area: Rect, board: &DraftBoard, state: &ViewState) {
    let filtered = filter_cards(&board.available, state.position_filter, &state.filter_text);

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Name"),
        Cell::from("Pos"),
        Cell::from("Team"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = filtered
        .iter()
        .map(|card| {
            let style = if card.eligible {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Row::new(vec![
                Cell::from(format!("{}", card.rank)),
                Cell::from(card.full_name()),
                Cell::from(card.position.display_str()),
                Cell::from(card.team.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(16),
        Constraint::Length(4),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(build_title(state, filtered.len())),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let selected = (!filtered.is_empty()).then(|| state.selected.min(filtered.len() - 1));
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);

    // Borders and header row take three lines.
    let visible_rows = (area.height as usize).saturating_sub(3);
    if filtered.len() > visible_rows {
        let mut scrollbar_state = ScrollbarState::new(filtered.len().saturating_sub(visible_rows))
            .position(table_state.offset());
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin { vertical: 1, horizontal: 0 }),
            &mut scrollbar_state,
        );
    }
}

/// Filter cards by position and a case-insensitive name search.
pub fn filter_cards<'a>(
    cards: &'a [PlayerCard],
    position_filter: Option<Position>,
    filter_text: &str,
) -> Vec<&'a PlayerCard> {
    let text_lower = filter_text.to_lowercase();

    cards
        .iter()
        .filter(|card| {
            if let Some(pos) = position_filter {
                if card.position != pos {
                    return false;
                }
            }
            if !text_lower.is_empty() && !card.full_name().to_lowercase().contains(&text_lower) {
                return false;
            }
            true
        })
        .collect()
}

/// Build the title with filter info and the filtered count.
fn build_title(state: &ViewState, filtered_count: usize) -> Line<'static> {
    let mut title = String::from("Available Players");
    if let Some(pos) = state.position_filter {
        title.push_str(&format!(" [{}]", pos.display_str()));
    }
    if !state.filter_text.is_empty() || state.filter_mode {
        title.push_str(&format!(" \"{}\"", state.filter_text));
    }
    title.push_str(&format!(" ({})", filtered_count));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
