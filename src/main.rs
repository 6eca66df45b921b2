use std::io;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use lessonbook_console::config::ConsoleConfig;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ConsoleConfig::from_env()?;

    // Initialize logging; stdout belongs to the session
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // The session's state container lives here for the whole run
    let mut store = lessonbook_console::build_store(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    lessonbook_console::run_session(&mut store, &config, stdin.lock(), stdout.lock())?;

    Ok(())
}
