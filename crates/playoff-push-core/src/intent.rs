// User intents accepted by the draft board.

use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::state::DraftState;

/// Everything the presentation layer can ask the board to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Switch between the draft and team screens.
    ToggleView,
    /// Draft this player for whoever is on the clock.
    DraftPlayer(Player),
}

/// Apply one intent to a snapshot, producing the next snapshot.
pub fn update(state: &DraftState, intent: &Intent) -> DraftState {
    match intent {
        Intent::ToggleView => state.toggle_view(),
        Intent::DraftPlayer(player) => state.apply_pick(player),
    }
}
