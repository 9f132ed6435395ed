//! `findmeeting` CLI — find free meeting windows in a day of events.
//!
//! ## Usage
//!
//! ```sh
//! # Run a meeting request (stdin → stdout)
//! cat day.json | findmeeting find
//!
//! # Same, from a file, as JSON
//! findmeeting find -i day.json --format json
//!
//! # Free windows of at least 45 minutes for an explicit set of people
//! findmeeting free -i day.json --duration 45 --attendee ana --attendee bo
//!
//! # Log the search to stderr
//! findmeeting --debug find -i day.json
//! ```

mod input;
mod output;

use std::collections::BTreeSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meeting_finder::{find_free_windows, try_find_meeting_times};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use crate::input::DayInput;
use crate::output::Format;

#[derive(Parser)]
#[command(
    name = "findmeeting",
    version,
    about = "Find free meeting windows in a day of events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find meeting times for the request in the input
    Find {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: Format,
    },
    /// List free windows for an explicit set of attendees
    Free {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Minimum window length in minutes
        #[arg(short, long)]
        duration: u32,
        /// Attendee whose events block time (repeatable)
        #[arg(short, long = "attendee")]
        attendees: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::Find {
            input,
            output,
            format,
        } => {
            let mut day = DayInput::parse(&read_input(input.as_deref())?)?;
            let events = day.events()?;
            let request = day
                .request
                .take()
                .context("Input has no 'request' object")?;
            info!(
                events = events.len(),
                duration = request.duration(),
                "finding meeting times"
            );

            let windows = try_find_meeting_times(&events, &request)
                .context("Failed to find meeting times")?;
            write_output(output.as_deref(), &output::render(&windows, format)?)?;
        }
        Commands::Free {
            input,
            output,
            duration,
            attendees,
            format,
        } => {
            let mut day = DayInput::parse(&read_input(input.as_deref())?)?;
            let events = day.events()?;
            let attendees: BTreeSet<String> = attendees.into_iter().collect();
            info!(
                events = events.len(),
                attendees = attendees.len(),
                duration,
                "finding free windows"
            );

            let windows = find_free_windows(&events, &attendees, duration);
            write_output(output.as_deref(), &output::render(&windows, format)?)?;
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
