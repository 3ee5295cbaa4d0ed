//! Draft engine for a four-participant fantasy football playoff league.
//!
//! The state is a persistent value: every operation returns a new
//! [`state::DraftState`] and leaves its input untouched. [`view::render`]
//! turns a snapshot into a declarative [`view::View`] whose buttons and cards
//! carry the [`intent::Intent`]s a front-end feeds back through
//! [`intent::update`].

pub mod config;
pub mod eligibility;
pub mod intent;
pub mod player;
pub mod pool;
pub mod roster;
pub mod state;
pub mod turn;
pub mod view;

pub use intent::{update, Intent};
pub use player::{Player, Position};
pub use state::{DraftState, PickRejection, ViewMode};
pub use turn::{Direction, Slot};
