// Header widget: title, tagline and the view toggle button.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use playoff_push_core::view::Header;

/// Render the header into the given area.
pub fn render(frame: &mut Frame, area: Rect, header: &Header) {
    let line = Line::from(vec![
        Span::styled(
            header.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            header.tagline.clone(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title_bottom(toggle_line(&header.toggle.label).alignment(Alignment::Right));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// The toggle button label with its key hint, e.g. "[Tab] Switch View".
pub fn toggle_line(label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " [Tab] ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{label} "), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use playoff_push_core::pool::default_pool;
    use playoff_push_core::view::render as render_view;
    use playoff_push_core::DraftState;

    #[test]
    fn toggle_line_has_key_hint() {
        let line = toggle_line("Switch View");
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " [Tab] Switch View ");
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = DraftState::new(
            ["Nate", "Josh", "Sam", "Ethan"].map(String::from),
            default_pool(),
            40,
        );
        let view = render_view(&state);
        terminal
            .draw(|frame| render(frame, frame.area(), &view.header))
            .unwrap();
    }
}
