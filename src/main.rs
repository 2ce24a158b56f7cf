use clap::Parser;
use eyre::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use todostore::{Command, Config, TaskListStore, command, now_ms, view};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "TodoStore CLI - manage an in-memory to-do list from the terminal")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/todostore/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read one JSON command per line instead of text commands
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::resolve(cli.config.as_deref())?;
    let mut store = TaskListStore::with_config(config);
    info!(json = cli.json, "Starting session");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}", view::render(&store))?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();

        match trimmed {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                writeln!(stdout, "{}", command::HELP)?;
                continue;
            }
            _ => {}
        }

        let parsed = if cli.json {
            Command::from_json(trimmed)
        } else {
            line.parse::<Command>()
        };

        match parsed {
            Ok(cmd) => {
                store.dispatch(cmd);
            }
            Err(e) => {
                warn!(error = %e, "Rejected command");
                writeln!(stdout, "error: {:#}", e)?;
                continue;
            }
        }

        store.tick(now_ms());
        write!(stdout, "{}", view::render(&store))?;
        stdout.flush()?;
    }

    Ok(())
}
