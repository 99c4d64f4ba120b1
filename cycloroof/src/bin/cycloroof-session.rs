//! Headless catalog session driven over stdio.
//!
//! Runs one browsing session per process with JSON-over-stdio IPC.
//! Logging goes to stderr; stdout is reserved for the protocol.
//!
//! Usage:
//!   cycloroof-session [--inventory <PATH>] [--rentals <PATH>]
//!
//! On startup, emits a `Ready` JSON line to stdout.
//! Then reads `SessionCommand` JSON lines from stdin and writes `SessionResponse` lines.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cycloroof::session::{dispatch, parse_command, ReadyEvent, SessionCommand, SessionResponse};
use cycloroof::{CatalogConfig, Inventory, RentalFleet, Session};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cycloroof-session")]
#[command(about = "Drive a catalog session with JSON lines on stdin/stdout")]
struct Cli {
    /// JSON inventory file (overrides CYCLOROOF_INVENTORY)
    #[arg(long, value_name = "PATH")]
    inventory: Option<PathBuf>,

    /// JSON rental fleet file (overrides CYCLOROOF_RENTALS)
    #[arg(long, value_name = "PATH")]
    rentals: Option<PathBuf>,
}

fn init_logging_stderr() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();
}

fn emit_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    let line = serde_json::to_string(value).context("JSON serialization failed")?;
    writeln!(out, "{line}").context("stdout write failed")?;
    out.flush().context("stdout flush failed")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_stderr();

    let config = CatalogConfig::from_env().with_overrides(cli.inventory, cli.rentals);
    let inventory = Inventory::load_or_sample(config.inventory_path.as_deref())
        .context("Failed to load inventory")?;
    let fleet = RentalFleet::load_or_sample(config.rentals_path.as_deref())
        .context("Failed to load rental fleet")?;
    let mut session = Session::new(inventory, fleet);
    info!(
        "cycloroof-session ready ({} vehicles, {} rentals)",
        session.inventory().len(),
        session.fleet().len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit_json(&mut out, &ReadyEvent::for_session(&session))?;

    for line in std::io::stdin().lock().lines() {
        let line = line.context("stdin read failed")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected command line: {}", e);
                emit_json(
                    &mut out,
                    &SessionResponse::Err {
                        message: e.to_string(),
                    },
                )?;
                continue;
            }
        };

        let shutdown = command == SessionCommand::Shutdown;
        let response = dispatch(&mut session, command);
        emit_json(&mut out, &response)?;

        if shutdown {
            info!("Shutdown requested");
            break;
        }
    }

    Ok(())
}
