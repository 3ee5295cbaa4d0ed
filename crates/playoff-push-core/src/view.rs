// Declarative view description of a draft snapshot.
//
// `render` is a pure function of the state. Front-ends draw the returned tree
// and send back the intents attached to its buttons and cards.

use serde::Serialize;

use crate::eligibility::{is_eligible, position_cap, remaining};
use crate::intent::Intent;
use crate::player::{Player, Position};
use crate::state::{DraftState, ViewMode};
use crate::turn::{round_of, Direction, Slot};

pub const TITLE: &str = "Playoff Push";
pub const TAGLINE: &str = "Experience Fantasy Football for the NFL Playoffs";
pub const TOGGLE_LABEL: &str = "Switch View";

/// The whole screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub header: Header,
    pub status: Status,
    pub body: Body,
    /// Accepted picks, oldest first.
    pub draft_log: Vec<LogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub tagline: String,
    pub toggle: Button,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub label: String,
    pub on_press: Intent,
}

/// Draft progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Name of the participant on the clock.
    pub on_the_clock: String,
    pub slot: Slot,
    pub pick_number: u32,
    pub pick_cap: u32,
    pub round: u32,
    pub total_rounds: u32,
    pub direction: Direction,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Body {
    Draft(DraftBoard),
    Team(TeamSheet),
}

/// Draft screen: one column per participant plus the available pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftBoard {
    /// "Round 1" .. "Round N".
    pub rounds: Vec<String>,
    pub columns: Vec<BoardColumn>,
    pub available: Vec<PlayerCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    pub participant: String,
    pub slot: Slot,
    pub on_the_clock: bool,
    /// Drafted players in pick order.
    pub picks: Vec<PlayerCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerCard {
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub team: String,
    /// Pool rank while available, pick number once drafted.
    pub rank: u32,
    /// Whether the participant on the clock may take this player.
    pub eligible: bool,
    /// Intent sent when the card is selected. Only available players have one.
    pub on_select: Option<Intent>,
}

/// Team screen: every roster grouped by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSheet {
    pub teams: Vec<TeamCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCard {
    pub participant: String,
    pub slot: Slot,
    pub total: usize,
    pub groups: Vec<PositionGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionGroup {
    pub position: Position,
    pub cap: usize,
    /// Further picks at this position the roster may still make.
    pub remaining: usize,
    pub players: Vec<PlayerCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub pick_number: u32,
    pub round: u32,
    pub participant: String,
    pub player: PlayerCard,
}

/// Describe `state` as a view tree.
pub fn render(state: &DraftState) -> View {
    let body = match state.view_mode() {
        ViewMode::Draft => Body::Draft(draft_board(state)),
        ViewMode::Team => Body::Team(team_sheet(state)),
    };

    View {
        header: Header {
            title: TITLE.to_string(),
            tagline: TAGLINE.to_string(),
            toggle: Button {
                label: TOGGLE_LABEL.to_string(),
                on_press: Intent::ToggleView,
            },
        },
        status: status(state),
        body,
        draft_log: draft_log(state),
    }
}

fn status(state: &DraftState) -> Status {
    let slot = state.current_participant();
    Status {
        on_the_clock: state.participant_name(slot).to_string(),
        slot,
        pick_number: state.pick_number(),
        pick_cap: state.pick_cap(),
        round: state.round(),
        total_rounds: state.total_rounds(),
        direction: state.direction(),
        complete: state.is_complete(),
    }
}

fn draft_board(state: &DraftState) -> DraftBoard {
    let current = state.current_participant();
    let on_clock_roster = state.roster(current);

    let rounds = (1..=state.total_rounds())
        .map(|r| format!("Round {r}"))
        .collect();

    let columns = state
        .rosters()
        .iter()
        .map(|(slot, roster)| BoardColumn {
            participant: state.participant_name(slot).to_string(),
            slot,
            on_the_clock: slot == current && !state.is_complete(),
            picks: roster.players().iter().map(drafted_card).collect(),
        })
        .collect();

    let available = state
        .available_players()
        .iter()
        .map(|p| PlayerCard {
            eligible: !state.is_complete() && is_eligible(on_clock_roster, p.position),
            on_select: Some(Intent::DraftPlayer(p.clone())),
            ..drafted_card(p)
        })
        .collect();

    DraftBoard {
        rounds,
        columns,
        available,
    }
}

fn team_sheet(state: &DraftState) -> TeamSheet {
    let teams = state
        .rosters()
        .iter()
        .map(|(slot, roster)| TeamCard {
            participant: state.participant_name(slot).to_string(),
            slot,
            total: roster.len(),
            groups: roster
                .grouped_by_position()
                .into_iter()
                .map(|(position, players)| PositionGroup {
                    position,
                    cap: position_cap(position),
                    remaining: remaining(roster, position),
                    players: players.into_iter().map(drafted_card).collect(),
                })
                .collect(),
        })
        .collect();
    TeamSheet { teams }
}

fn draft_log(state: &DraftState) -> Vec<LogEntry> {
    state
        .picks()
        .into_iter()
        .map(|(pick_number, slot, player)| LogEntry {
            pick_number,
            round: round_of(pick_number),
            participant: state.participant_name(slot).to_string(),
            player: drafted_card(player),
        })
        .collect()
}

fn drafted_card(player: &Player) -> PlayerCard {
    PlayerCard {
        first_name: player.first_name.clone(),
        last_name: player.last_name.clone(),
        position: player.position,
        team: player.team.clone(),
        rank: player.rank,
        eligible: false,
        on_select: None,
    }
}

impl PlayerCard {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
