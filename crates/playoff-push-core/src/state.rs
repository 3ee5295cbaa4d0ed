// Draft state: whose turn it is, rosters, available players.
//
// Every transition returns a new `DraftState`; the snapshot it was computed
// from is never modified.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::eligibility::{is_eligible, MAX_ROSTER_SIZE};
use crate::player::{Player, Position};
use crate::roster::{Roster, Rosters};
use crate::turn::{advance_turn, round_of, Direction, Slot, PARTICIPANT_COUNT};

/// Default number of picks in a draft: every roster filled to its caps.
pub const DEFAULT_PICK_CAP: u32 = (PARTICIPANT_COUNT * MAX_ROSTER_SIZE) as u32;

/// Which screen the board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    Draft,
    Team,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Draft => ViewMode::Team,
            ViewMode::Team => ViewMode::Draft,
        }
    }
}

/// Why a pick was not applied. None of these are failures: the state is
/// simply left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickRejection {
    #[error("draft complete after {pick_cap} picks")]
    DraftComplete { pick_cap: u32 },

    #[error("cannot draft more players of this position ({position} for slot {slot})")]
    Ineligible { slot: Slot, position: Position },

    #[error("player not available: {name}")]
    NotAvailable { name: String },
}

/// A snapshot of the whole draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftState {
    view_mode: ViewMode,
    /// Participant names, index 0 is slot 1.
    participants: Vec<String>,
    rosters: Rosters,
    available_players: Vec<Player>,
    current_participant: Slot,
    /// Accepted picks so far.
    pick_number: u32,
    /// Pick number at which the draft closes.
    pick_cap: u32,
    direction: Direction,
}

impl DraftState {
    /// Create a fresh draft: empty rosters, slot 1 on the clock going forward.
    ///
    /// `participants` holds one name per slot; callers validate the count
    /// (see `config`).
    pub fn new(participants: [String; PARTICIPANT_COUNT], pool: Vec<Player>, pick_cap: u32) -> Self {
        DraftState {
            view_mode: ViewMode::Draft,
            participants: participants.into(),
            rosters: Rosters::new(),
            available_players: pool,
            current_participant: Slot::FIRST,
            pick_number: 0,
            pick_cap,
            direction: Direction::Forward,
        }
    }

    /// Which screen the board is showing.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Display name of the participant in `slot`.
    pub fn participant_name(&self, slot: Slot) -> &str {
        &self.participants[slot.index()]
    }

    pub fn rosters(&self) -> &Rosters {
        &self.rosters
    }

    pub fn roster(&self, slot: Slot) -> &Roster {
        self.rosters.get(slot)
    }

    pub fn available_players(&self) -> &[Player] {
        &self.available_players
    }

    pub fn current_participant(&self) -> Slot {
        self.current_participant
    }

    pub fn pick_number(&self) -> u32 {
        self.pick_number
    }

    pub fn pick_cap(&self) -> u32 {
        self.pick_cap
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// 1-based round the next pick belongs to (the last round once complete).
    pub fn round(&self) -> u32 {
        round_of(self.pick_number.saturating_add(1).min(self.pick_cap))
    }

    /// Total rounds in this draft.
    pub fn total_rounds(&self) -> u32 {
        round_of(self.pick_cap)
    }

    pub fn is_complete(&self) -> bool {
        self.pick_number >= self.pick_cap
    }

    /// Draft `player` for the participant currently on the clock.
    ///
    /// On success returns the next snapshot: the player (rank stamped with the
    /// pick number) appended to the picking roster, removed from the pool, the
    /// pick counter incremented and the turn advanced.
    pub fn try_pick(&self, player: &Player) -> Result<DraftState, PickRejection> {
        if self.is_complete() {
            return Err(PickRejection::DraftComplete {
                pick_cap: self.pick_cap,
            });
        }

        let slot = self.current_participant;
        let roster = self.rosters.get(slot);
        debug!(
            "picked by {}, type {}, {} count: {}",
            slot,
            player.position,
            player.position,
            roster.count(player.position)
        );

        if !is_eligible(roster, player.position) {
            return Err(PickRejection::Ineligible {
                slot,
                position: player.position,
            });
        }

        let Some(pool_idx) = self.available_players.iter().position(|p| p == player) else {
            return Err(PickRejection::NotAvailable {
                name: player.full_name(),
            });
        };

        let pick_number = self.pick_number + 1;
        let (next_participant, next_direction) = advance_turn(slot, self.direction);

        let mut next = self.clone();
        next.available_players.remove(pool_idx);
        next.rosters.add(slot, player.with_rank(pick_number));
        next.pick_number = pick_number;
        next.current_participant = next_participant;
        next.direction = next_direction;

        info!(
            "Pick {}: {} drafted {} ({}, {})",
            pick_number,
            self.participant_name(slot),
            player.full_name(),
            player.position,
            player.team
        );
        Ok(next)
    }

    /// Draft `player`, or return an unchanged copy when the pick is rejected.
    pub fn apply_pick(&self, player: &Player) -> DraftState {
        match self.try_pick(player) {
            Ok(next) => next,
            Err(rejection @ PickRejection::DraftComplete { .. }) => {
                debug!("ignoring pick: {}", rejection);
                self.clone()
            }
            Err(rejection) => {
                info!("{}", rejection);
                self.clone()
            }
        }
    }

    /// Flip between the draft and team screens.
    pub fn toggle_view(&self) -> DraftState {
        DraftState {
            view_mode: self.view_mode.toggled(),
            ..self.clone()
        }
    }

    /// Every accepted pick as (pick number, slot, player), in pick order.
    pub fn picks(&self) -> Vec<(u32, Slot, &Player)> {
        let mut picks: Vec<(u32, Slot, &Player)> = self
            .rosters
            .iter()
            .flat_map(|(slot, roster)| roster.players().iter().map(move |p| (p.rank, slot, p)))
            .collect();
        picks.sort_by_key(|&(n, _, _)| n);
        picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::default_pool;

    fn names() -> [String; PARTICIPANT_COUNT] {
        ["Nate", "Josh", "Sam", "Ethan"].map(String::from)
    }

    fn four_player_pool() -> Vec<Player> {
        vec![
            Player::new("Josh", "Allen", Position::Quarterback, "BUF", 1),
            Player::new("Bijan", "Robinson", Position::RunningBack, "ATL", 2),
            Player::new("Justin", "Jefferson", Position::WideReceiver, "MIN", 3),
            Player::new("Travis", "Kelce", Position::TightEnd, "KC", 4),
        ]
    }

    fn find(state: &DraftState, last_name: &str) -> Player {
        state
            .available_players()
            .iter()
            .find(|p| p.last_name == last_name)
            .cloned()
            .unwrap()
    }

    #[test]
    fn new_state_defaults() {
        let state = DraftState::new(names(), default_pool(), DEFAULT_PICK_CAP);
        assert_eq!(state.view_mode(), ViewMode::Draft);
        assert_eq!(state.current_participant(), Slot::FIRST);
        assert_eq!(state.direction(), Direction::Forward);
        assert_eq!(state.pick_number(), 0);
        assert_eq!(state.pick_cap(), 40);
        assert_eq!(state.available_players().len(), 46);
        assert_eq!(state.rosters().total(), 0);
        assert_eq!(state.participant_name(Slot::LAST), "Ethan");
        assert_eq!(state.round(), 1);
        assert_eq!(state.total_rounds(), 10);
    }

    #[test]
    fn first_pick_scenario() {
        let state = DraftState::new(names(), four_player_pool(), DEFAULT_PICK_CAP);
        let qb = find(&state, "Allen");
        let next = state.apply_pick(&qb);

        let roster = next.roster(Slot::FIRST);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.players()[0].last_name, "Allen");
        assert_eq!(roster.players()[0].rank, 1);
        assert!(next.available_players().iter().all(|p| p.last_name != "Allen"));
        assert_eq!(next.available_players().len(), 3);
        assert_eq!(next.pick_number(), 1);
        assert_eq!(next.current_participant(), Slot::new(2).unwrap());
    }

    #[test]
    fn pick_leaves_previous_snapshot_untouched() {
        let state = DraftState::new(names(), four_player_pool(), DEFAULT_PICK_CAP);
        let before = state.clone();
        let _next = state.apply_pick(&find(&state, "Kelce"));
        assert_eq!(state, before);
    }

    #[test]
    fn rank_is_stamped_with_pick_number() {
        let mut state = DraftState::new(names(), default_pool(), DEFAULT_PICK_CAP);
        // Draft from the bottom of the board so pool rank and pick number differ.
        for _ in 0..3 {
            let player = state.available_players().last().cloned().unwrap();
            state = state.apply_pick(&player);
            let drafted = state
                .rosters()
                .iter()
                .flat_map(|(_, r)| r.players().iter())
                .find(|p| p.same_player(&player))
                .unwrap();
            assert_ne!(drafted.rank, player.rank);
            assert_eq!(drafted.rank, state.pick_number());
        }
    }

    #[test]
    fn ineligible_pick_changes_nothing() {
        let pool = vec![
            Player::new("A", "One", Position::TightEnd, "AAA", 1),
            Player::new("B", "Two", Position::WideReceiver, "BBB", 2),
            Player::new("C", "Three", Position::WideReceiver, "CCC", 3),
            Player::new("D", "Four", Position::WideReceiver, "DDD", 4),
            Player::new("E", "Five", Position::TightEnd, "EEE", 5),
            Player::new("F", "Six", Position::WideReceiver, "FFF", 6),
            Player::new("G", "Seven", Position::WideReceiver, "GGG", 7),
            Player::new("H", "Eight", Position::WideReceiver, "HHH", 8),
            Player::new("I", "Nine", Position::TightEnd, "III", 9),
            Player::new("J", "Ten", Position::TightEnd, "JJJ", 10),
        ];
        let mut state = DraftState::new(names(), pool, DEFAULT_PICK_CAP);
        // Slot 1 takes a TE, slots 2-4 receivers, slot 4 again, 3, 2 receivers,
        // then slot 1 twice: TE then a third TE attempt.
        for name in ["One", "Two", "Three", "Four", "Six", "Seven", "Eight", "Five"] {
            state = state.apply_pick(&find(&state, name));
        }
        assert_eq!(state.current_participant(), Slot::FIRST);
        assert_eq!(state.roster(Slot::FIRST).count(Position::TightEnd), 2);

        let before = state.clone();
        let third_te = find(&state, "Nine");
        assert_eq!(
            state.try_pick(&third_te),
            Err(PickRejection::Ineligible {
                slot: Slot::FIRST,
                position: Position::TightEnd,
            })
        );
        let after = state.apply_pick(&third_te);
        assert_eq!(after, before);
    }

    #[test]
    fn unavailable_player_is_rejected() {
        let state = DraftState::new(names(), four_player_pool(), DEFAULT_PICK_CAP);
        let qb = find(&state, "Allen");
        let next = state.apply_pick(&qb);

        // Same intent delivered twice.
        assert!(matches!(
            next.try_pick(&qb),
            Err(PickRejection::NotAvailable { .. })
        ));
        assert_eq!(next.apply_pick(&qb), next);

        // A player that was never in the pool.
        let stranger = Player::new("Tom", "Brady", Position::Quarterback, "TB", 99);
        assert_eq!(next.apply_pick(&stranger), next);
    }

    #[test]
    fn pick_cap_stops_the_draft() {
        let mut state = DraftState::new(names(), default_pool(), 2);
        state = state.apply_pick(&state.available_players()[0].clone());
        state = state.apply_pick(&state.available_players()[0].clone());
        assert!(state.is_complete());

        let before = state.clone();
        let candidate = state.available_players()[0].clone();
        assert_eq!(
            state.try_pick(&candidate),
            Err(PickRejection::DraftComplete { pick_cap: 2 })
        );
        assert_eq!(state.apply_pick(&candidate), before);
    }

    #[test]
    fn toggle_view_is_an_involution() {
        let state = DraftState::new(names(), default_pool(), DEFAULT_PICK_CAP);
        let toggled = state.toggle_view();
        assert_eq!(toggled.view_mode(), ViewMode::Team);
        assert_eq!(toggled.available_players(), state.available_players());
        assert_eq!(toggled.toggle_view(), state);
    }

    #[test]
    fn picks_are_listed_in_pick_order() {
        let mut state = DraftState::new(names(), default_pool(), DEFAULT_PICK_CAP);
        for _ in 0..6 {
            state = state.apply_pick(&state.available_players()[0].clone());
        }
        let picks = state.picks();
        let numbers: Vec<u32> = picks.iter().map(|&(n, _, _)| n).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        let slots: Vec<u8> = picks.iter().map(|&(_, s, _)| s.number()).collect();
        assert_eq!(slots, vec![1, 2, 3, 4, 4, 3]);
        assert_eq!(picks[0].2.last_name, "Jefferson");
    }

    #[test]
    fn round_advances_every_four_picks() {
        let mut state = DraftState::new(names(), default_pool(), DEFAULT_PICK_CAP);
        for _ in 0..4 {
            state = state.apply_pick(&state.available_players()[0].clone());
        }
        assert_eq!(state.round(), 2);
    }
}
