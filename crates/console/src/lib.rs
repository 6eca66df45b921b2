//! # Lessonbook Console
//!
//! Presentation layer for the music school scheduler. The console reads one
//! command per line, runs it against a [`SchedulingStore`] owned by the caller,
//! and writes the rendered reply.

use std::io::{BufRead, Write};

use eyre::Result;
use lessonbook_core::{seed, store::SchedulingStore};
use tracing::{info, warn};

pub mod commands;
pub mod config;
pub mod handlers;
pub mod render;

use crate::{
    commands::parse_command,
    config::ConsoleConfig,
    handlers::{Outcome, handle_command},
};

/// Builds the session's store from the seed data and configuration overrides.
pub fn build_store(config: &ConsoleConfig) -> SchedulingStore {
    let mut state = seed::seed_state();
    if let Some(id) = &config.student_id {
        state.current_student.id = id.clone();
    }
    if let Some(name) = &config.student_name {
        state.current_student.name = name.clone();
    }

    SchedulingStore::new(state, config.id_strategy.generator())
}

/// Run a console session until `quit` or end of input.
///
/// # Arguments
///
/// * `store` - The session's store, owned by the caller
/// * `config` - Console configuration
/// * `input` - Source of command lines
/// * `output` - Destination for prompts and replies
///
/// # Returns
///
/// * `Ok(())` when the session ended normally
/// * `Err` if reading input or writing output failed
pub fn run_session<R: BufRead, W: Write>(
    store: &mut SchedulingStore,
    config: &ConsoleConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    info!(
        student = %store.snapshot().current_student.name,
        "Starting scheduling session"
    );
    writeln!(output, "Lessonbook. Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", config.prompt())?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let result = parse_command(&line).and_then(|command| match command {
            Some(command) => handle_command(store, command).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(Some(Outcome::Reply(reply))) => writeln!(output, "{}", reply)?,
            Ok(Some(Outcome::Quit)) => break,
            Ok(None) => {}
            Err(e) => {
                warn!("Command refused: {}", e);
                writeln!(output, "Error: {}", e)?;
            }
        }
    }

    info!(version = store.version(), "Scheduling session ended");
    Ok(())
}
