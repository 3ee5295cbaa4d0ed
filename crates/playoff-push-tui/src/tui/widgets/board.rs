// Draft board widget: one row per round, one column per participant.
//
// Each slot picks exactly once per round, so a column's n-th pick sits in
// round n. The participant on the clock has a highlighted column header.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use playoff_push_core::view::{DraftBoard, PlayerCard};
use playoff_push_core::Position;

/// Render the draft board into the given area.
pub fn render(frame: &mut Frame, area: Rect, board: &DraftBoard) {
    let mut header_cells = vec![Cell::from("")];
    header_cells.extend(board.columns.iter().map(|column| {
        let style = if column.on_the_clock {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        Cell::from(column.participant.clone()).style(style)
    }));
    let header = Row::new(header_cells);

    let rows: Vec<Row> = board
        .rounds
        .iter()
        .enumerate()
        .map(|(round_idx, label)| {
            let mut cells = vec![Cell::from(label.clone()).style(Style::default().fg(Color::DarkGray))];
            cells.extend(board.columns.iter().map(|column| {
                match column.picks.get(round_idx) {
                    Some(card) => Cell::from(format_board_cell(card)).style(position_style(card)),
                    None => Cell::from("--").style(Style::default().fg(Color::DarkGray)),
                }
            }));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(9)];
    widths.extend(board.columns.iter().map(|_| Constraint::Fill(1)));

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Draft Board"),
    );
    frame.render_widget(table, area);
}

/// Compact board cell, e.g. "WR J. Jefferson".
pub fn format_board_cell(card: &PlayerCard) -> String {
    let initial = card.first_name.chars().next().map(String::from).unwrap_or_default();
    if initial.is_empty() {
        format!("{} {}", card.position, card.last_name)
    } else {
        format!("{} {}. {}", card.position, initial, card.last_name)
    }
}

/// Foreground color per position.
pub fn position_style(card: &PlayerCard) -> Style {
    let color = match card.position {
        Position::Quarterback => Color::LightRed,
        Position::RunningBack => Color::LightGreen,
        Position::WideReceiver => Color::LightBlue,
        Position::TightEnd => Color::LightMagenta,
    };
    Style::default().fg(color)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
