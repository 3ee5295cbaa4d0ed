// TUI widget modules for each board panel.

pub mod available;
pub mod board;
pub mod draft_log;
pub mod header;
pub mod help_bar;
pub mod quit_confirm;
pub mod status_bar;
pub mod teams;
