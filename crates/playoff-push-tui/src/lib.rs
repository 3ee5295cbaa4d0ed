// Terminal front-end for the Playoff Push draft board.

pub mod tui;
