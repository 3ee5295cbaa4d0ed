// Teams widget: every participant's roster grouped by position.
//
// One bordered card per participant, side by side. Each card lists the
// position groups with their fill against the cap.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use playoff_push_core::eligibility::MAX_ROSTER_SIZE;
use playoff_push_core::view::{PositionGroup, TeamCard, TeamSheet};

use crate::tui::ViewState;

/// Render the team sheet into the given area.
pub fn render(frame: &mut Frame, area: Rect, sheet: &TeamSheet, state: &ViewState) {
    if sheet.teams.is_empty() {
        let paragraph = Paragraph::new("  No teams.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Teams"));
        frame.render_widget(paragraph, area);
        return;
    }

    let scroll = state.scroll_offset.get("teams").copied().unwrap_or(0);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(sheet.teams.iter().map(|_| Constraint::Fill(1)))
        .split(area);

    for (team, column) in sheet.teams.iter().zip(columns.iter()) {
        let lines = team_lines(team);
        let max_scroll = lines.len().saturating_sub((column.height as usize).saturating_sub(2));
        let scroll = scroll.min(max_scroll) as u16;

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(team_title(team)),
            )
            .scroll((scroll, 0));
        frame.render_widget(paragraph, *column);
    }
}

/// "Nate (3/10)".
pub fn team_title(team: &TeamCard) -> String {
    format!("{} ({}/{})", team.participant, team.total, MAX_ROSTER_SIZE)
}

/// "QB 1/2 (1 left)"; shown in red once the group is full.
pub fn group_heading(group: &PositionGroup) -> Line<'static> {
    let color = if group.remaining == 0 {
        Color::Red
    } else {
        Color::Cyan
    };
    Line::from(Span::styled(
        format!(
            "{} {}/{} ({} left)",
            group.position,
            group.players.len(),
            group.cap,
            group.remaining
        ),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn team_lines(team: &TeamCard) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for group in &team.groups {
        lines.push(group_heading(group));
        if group.players.is_empty() {
            lines.push(Line::from(Span::styled(
                "  --",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for player in &group.players {
            lines.push(Line::from(format!(
                "  #{} {} ({})",
                player.rank,
                player.full_name(),
                player.team
            )));
        }
    }
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use playoff_push_core::pool::default_pool;
    use playoff_push_core::view::{render as render_view, Body};
    use playoff_push_core::DraftState;

    fn sheet_after(picks: usize) -> TeamSheet {
        let mut state = DraftState::new(
            ["Nate", "Josh", "Sam", "Ethan"].map(String::from),
            default_pool(),
            40,
        );
        for _ in 0..picks {
            state = state.apply_pick(&state.available_players()[0].clone());
        }
        match render_view(&state.toggle_view()).body {
            Body::Team(sheet) => sheet,
            Body::Draft(_) => panic!("expected team sheet"),
        }
    }

    #[test]
    fn team_title_shows_fill() {
        let sheet = sheet_after(8);
        assert_eq!(team_title(&sheet.teams[0]), "Nate (2/10)");
        assert_eq!(team_title(&sheet.teams[3]), "Ethan (2/10)");
    }

    #[test]
    fn team_lines_cover_every_group() {
        let sheet = sheet_after(0);
        let lines = team_lines(&sheet.teams[0]);
        // Heading plus placeholder for each of the four empty groups.
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].to_string(), "QB 0/2 (2 left)");
        assert_eq!(lines[1].to_string(), "  --");
    }

    #[test]
    fn group_heading_turns_red_when_full() {
        let sheet = sheet_after(0);
        let mut group = sheet.teams[0].groups[3].clone();
        assert_eq!(group_heading(&group).spans[0].style.fg, Some(Color::Cyan));
        group.remaining = 0;
        assert_eq!(group_heading(&group).spans[0].style.fg, Some(Color::Red));
        assert!(group_heading(&group).to_string().ends_with("(0 left)"));
    }

    #[test]
    fn render_does_not_panic_empty() {
        let backend = ratatui::backend::TestBackend::new(80, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let sheet = sheet_after(0);
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &sheet, &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_scrolled_with_picks() {
        let backend = ratatui::backend::TestBackend::new(80, 8);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let sheet = sheet_after(12);
        let mut state = ViewState::default();
        state.scroll_offset.insert("teams".to_string(), 100);
        terminal
            .draw(|frame| render(frame, frame.area(), &sheet, &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_without_teams() {
        let backend = ratatui::backend::TestBackend::new(80, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let sheet = TeamSheet { teams: Vec::new() };
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &sheet, &state))
            .unwrap();
    }
}
