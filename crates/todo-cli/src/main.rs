mod command;
mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use todo_core::app::{AppBuilder, AppState};
use todo_core::domain::Filter;
use todo_core::ports::TaskCommands;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP};
use crate::config::{Settings, load_settings};

/// Interactive to-do list. Reads one command per line from stdin.
#[derive(Parser, Debug)]
#[command(name = "todo", version)]
struct Args {
    /// Settings file (defaults to ./todo.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial filter: All, Active or Completed.
    #[arg(long)]
    filter: Option<Filter>,

    /// Start with an empty list instead of the seed tasks.
    #[arg(long)]
    no_seed: bool,

    /// Print the visible list as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = apply_args(load_settings(args.config.as_deref())?, &args);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut builder = AppBuilder::new().with_filter(settings.filter);
    if let Some(tasks) = settings.initial_tasks() {
        builder = builder.with_tasks(tasks);
    }
    let mut app = builder.build().context("initial task list")?;
    info!(tasks = app.tasks().len(), filter = %app.filter(), "todo started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut app, stdin.lock(), &mut stdout.lock(), args.json)
}

/// Overlay CLI flags on loaded settings. Flags win over file and env.
fn apply_args(mut settings: Settings, args: &Args) -> Settings {
    if let Some(filter) = args.filter {
        settings.filter = filter;
    }
    if args.no_seed {
        settings.seed = false;
        settings.tasks = None;
    }
    settings
}

/// Command loop: one line, one dispatch.
///
/// Per-command errors are reported and the loop continues; an unknown
/// action kind is fatal and ends the loop with an error.
fn run(app: &mut AppState, input: impl BufRead, out: &mut impl Write, json: bool) -> Result<()> {
    render(app, out, json)?;
    for line in input.lines() {
        let line = line.context("read stdin")?;
        let cmd = match Command::parse(&line) {
            Ok(cmd) => cmd,
            Err(command::ParseError::Empty) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        let outcome = match &cmd {
            Command::List => Ok(()),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
            Command::Quit => break,
            Command::Add(name) => app.add(name).map(|id| info!(%id, "task added")),
            Command::Toggle(id) => {
                app.toggle(id);
                Ok(())
            }
            Command::Delete(id) => {
                app.delete(id);
                Ok(())
            }
            Command::Rename(id, name) => app.rename(id, name),
            Command::Filter(filter) => {
                app.set_filter(*filter);
                Ok(())
            }
            Command::Dispatch(descriptor) => app.dispatch_descriptor(descriptor),
        };

        match outcome {
            Ok(()) if cmd.is_mutating() || matches!(cmd, Command::List) => render(app, out, json)?,
            Ok(()) => {}
            Err(e) if e.is_fatal() => {
                error!(error = %e, "fatal action");
                return Err(e.into());
            }
            Err(e) => {
                warn!(error = %e, "command rejected");
                writeln!(out, "error: {e}")?;
            }
        }
    }
    Ok(())
}

fn render(app: &AppState, out: &mut impl Write, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(&app.visible_tasks())?)?;
        return Ok(());
    }
    writeln!(out, "[{}] {}", app.filter(), app.heading_text())?;
    for task in app.visible_tasks() {
        let mark = if task.completed { 'x' } else { ' ' };
        writeln!(out, "[{mark}] {} {}", task.id, task.name)?;
    }
    Ok(())
}
