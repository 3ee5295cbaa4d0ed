// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Header (3 rows)                                   |
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-------------------------+------------------------+
// | Main Panel (65%)         | Draft Log (35%)        |
// | +- Board (55%) --------+ |                        |
// | +- Available (45%) ----+ |                        |
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// The team view draws over the whole main panel; the draft view splits it
// into the board and the available list.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Title, tagline and the view toggle.
    pub header: Rect,
    /// On-the-clock participant, pick counter, round.
    pub status_bar: Rect,
    /// Left side of the middle section: board + available, or team sheet.
    pub main_panel: Rect,
    /// Upper part of the main panel in the draft view.
    pub board: Rect,
    /// Lower part of the main panel in the draft view.
    pub available: Rect,
    /// Right side of the middle section.
    pub draft_log: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: header(3) | status(1) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(1), // status bar
            Constraint::Min(10),   // middle section
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let header = vertical[0];
    let status_bar = vertical[1];
    let middle = vertical[2];
    let help_bar = vertical[3];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(middle);

    let main_panel = horizontal[0];
    let draft_log = horizontal[1];

    let main_sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_panel);

    AppLayout {
        header,
        status_bar,
        main_panel,
        board: main_sections[0],
        available: main_sections[1],
        draft_log,
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
