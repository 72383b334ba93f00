use crate::cli::shell::{HELP, ShellCommand, parse_line};
use crate::config::Config;
use crate::core::{Clock, FileOpener, Recorder, RecorderSettings, ReloadOutcome, StopOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::{RecordFile, TimerState};
use crate::ui::messages::{error, field, header, info, success, warning};
use crate::ui::{SystemOpener, Terminal};
use crate::utils::format_duration;
use crate::utils::path::resolve_user_path;
use ansi_term::Colour;
use chrono::TimeDelta;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Handle the `session` command (also the default without a subcommand).
pub fn handle(file: Option<&str>, cfg: &Config) -> AppResult<()> {
    let settings = RecorderSettings::from(cfg);
    let mut recorder = Recorder::with_system_clock(settings.clone());

    if let Some(file) = file {
        let path = resolve_user_path(file, settings.records_dir.as_deref());
        recorder = recorder.with_last_file(RecordFile::inspect(path)?);
    }

    let opener = SystemOpener::from_config(cfg);
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock());

    run_session(&mut recorder, &mut terminal, &opener)
}

/// Read commands until `quit` or end of input, dispatching each to the recorder.
///
/// Errors from single actions are reported and the loop goes on; only a
/// failure to read the input itself ends the session with an error.
pub fn run_session<C, R>(
    recorder: &mut Recorder<C>,
    terminal: &mut Terminal<R>,
    opener: &dyn FileOpener,
) -> AppResult<()>
where
    C: Clock,
    R: BufRead,
{
    header("rTimeRecorder");
    info("Type 'help' for the list of commands.");

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let Some(line) = terminal.read_line()? else {
            break;
        };

        let cmd = match parse_line(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                warning(format!("{}. Type 'help' for the list of commands.", e));
                continue;
            }
        };
        debug!(?cmd, "shell command");

        if cmd == ShellCommand::Quit {
            break;
        }

        if let Err(e) = execute(cmd, recorder, terminal, opener) {
            report(&e);
        }
    }

    let unsaved = recorder.elapsed();
    if unsaved > TimeDelta::zero() {
        warning(format!(
            "Session ended with {} of unsaved time.",
            format_duration(unsaved)
        ));
    }

    Ok(())
}

fn execute<C, R>(
    cmd: ShellCommand,
    recorder: &mut Recorder<C>,
    terminal: &mut Terminal<R>,
    opener: &dyn FileOpener,
) -> AppResult<()>
where
    C: Clock,
    R: BufRead,
{
    match cmd {
        ShellCommand::Start => {
            if recorder.timer().is_running() {
                info("Timer is already running.");
            } else {
                recorder.start();
                success("Timer started.");
            }
        }
        ShellCommand::Pause => {
            if recorder.timer().is_running() {
                let segment = recorder.pause();
                success(format!(
                    "Timer paused. Segment: {}  Total: {}",
                    format_duration(segment),
                    format_duration(recorder.timer().accumulated())
                ));
            } else {
                info("Timer is not running.");
            }
        }
        ShellCommand::Stop => match recorder.stop(terminal)? {
            StopOutcome::Saved { path, session } => {
                success(format!(
                    "Saved {} to {}",
                    session.time_spent(),
                    path.display()
                ));
            }
            StopOutcome::Cancelled => info("Stop cancelled, time kept."),
            StopOutcome::NothingToRecord => info("No time recorded yet, nothing to save."),
        },
        ShellCommand::Reload => match recorder.reload(terminal, opener)? {
            ReloadOutcome::Opened(path) => info(format!("Opened {}", path.display())),
            ReloadOutcome::Created(path) => success(format!("Recording to {}", path.display())),
            ReloadOutcome::Cancelled => info("Reload cancelled."),
        },
        ShellCommand::Describe(text) => {
            recorder.set_description(text);
            if recorder.description().trim().is_empty() {
                info("Description cleared.");
            } else {
                success("Description set.");
            }
        }
        ShellCommand::Clear => {
            recorder.clear_description();
            info("Description cleared.");
        }
        ShellCommand::Status => print_status(recorder),
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => {}
    }

    Ok(())
}

fn print_status<C: Clock>(recorder: &Recorder<C>) {
    let state = recorder.timer().state();
    let painted = match state {
        TimerState::Running => Colour::Green.bold().paint(state.label()),
        TimerState::Paused => Colour::Yellow.bold().paint(state.label()),
        TimerState::Idle => Colour::Fixed(244).paint(state.label()),
    };

    field("State", painted);
    field("Elapsed", format_duration(recorder.elapsed()));

    let description = recorder.description().trim();
    field(
        "Description",
        if description.is_empty() { "--" } else { description },
    );

    match recorder.last_file() {
        Some(file) => field("File", file.path.display()),
        None => field("File", "--"),
    }
}

fn report(e: &AppError) {
    match e {
        AppError::Validation(msg) => warning(msg),
        other if other.is_recoverable() => {
            error(format!("{}. Nothing was changed, you can retry.", other))
        }
        other => error(other),
    }
}
