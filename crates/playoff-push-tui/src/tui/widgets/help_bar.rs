// Help bar widget: keyboard hints for the current mode.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use playoff_push_core::view::{Body, View};

use crate::tui::ViewState;

/// Render the help bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, view: &View, state: &ViewState) {
    let line = if state.filter_mode {
        Line::from(vec![
            Span::styled(" Filter: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}_", state.filter_text),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Enter:Keep | Esc:Clear",
                Style::default().fg(Color::White).add_modifier(Modifier::DIM),
            ),
        ])
    } else {
        Line::from(Span::styled(
            hint_text(view),
            Style::default().fg(Color::White).add_modifier(Modifier::DIM),
        ))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the screen `view` is showing.
pub fn hint_text(view: &View) -> String {
    let toggle = format!("Tab:{}", view.header.toggle.label);
    match view.body {
        Body::Draft(_) => format!(
            " q:Quit | {toggle} | j/k:Select | Enter:Draft | /:Filter | p:Position | [/]:Log | Esc:Clear"
        ),
        Body::Team(_) => format!(" q:Quit | {toggle} | j/k:Scroll | [/]:Log"),
    }
}
