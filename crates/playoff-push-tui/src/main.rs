// Playoff Push entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config, copying defaults on first run
// 3. Build the player pool and the opening draft state
// 4. Run the TUI until the user quits

use playoff_push_core::config;
use playoff_push_tui::tui;

use anyhow::Context;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Playoff Push starting up");

    let config = config::load_config().context("failed to load configuration")?;
    let base_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let draft = config
        .initial_state(&base_dir)
        .context("failed to build the opening draft state")?;
    info!(
        "League: {}; {} players in pool, pick cap {}",
        draft.participants().join(", "),
        draft.available_players().len(),
        draft.pick_cap()
    );

    let draft = tui::run(draft).await.context("TUI error")?;

    info!(
        "Shut down after {} of {} picks",
        draft.pick_number(),
        draft.pick_cap()
    );
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("playoff-push.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("playoff_push_core=info,playoff_push_tui=info,warn")
        }))
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
