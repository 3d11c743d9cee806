use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use chiplist::app::theme::{detect_color_support, BoardTheme};
use chiplist::app::{BoardOptions, ChipBoard};
use chiplist::kernel::{BoardMode, ListStore, Store};
use chiplist::services::load_settings;
use chiplist::tui::{InputEvent, TerminalGuard, TerminationSignal, View};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod logging;

const USAGE: &str = "usage: chiplist [--mode staged|identity] [--settings <path>] [--columns <n>]";
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    mode: Option<BoardMode>,
    settings: Option<PathBuf>,
    columns: Option<u16>,
    help: bool,
}

fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((name, raw)) if name.starts_with("--") => (name.to_string(), Some(raw.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| format!("missing value for {name}"))
        };

        match flag.as_str() {
            "-h" | "--help" => out.help = true,
            "--mode" => {
                let raw = value("--mode")?;
                let mode = BoardMode::parse(&raw).ok_or_else(|| format!("unknown mode: {raw}"))?;
                out.mode = Some(mode);
            }
            "--settings" => out.settings = Some(PathBuf::from(value("--settings")?)),
            "--columns" => {
                let raw = value("--columns")?;
                let columns = raw
                    .parse::<u16>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| format!("invalid column count: {raw}"))?;
                out.columns = Some(columns);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(out)
}

fn main() -> io::Result<()> {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("chiplist: {message}\n{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let logging = logging::init();

    let settings = load_settings(args.settings.as_deref());
    let list = ListStore::new(&settings.seed());
    let store = Store::new(list).with_new_item_name(settings.board.new_item_name.as_str());

    let mut theme = BoardTheme::default();
    theme.apply_settings(&settings.theme);
    theme.adapt_to(detect_color_support());

    let options = BoardOptions {
        mode: args.mode.unwrap_or(settings.mode),
        columns: args.columns.unwrap_or_else(|| settings.board.columns()),
    };
    tracing::info!(mode = ?options.mode, columns = options.columns, "starting");
    let mut board = ChipBoard::new(store, options, theme);

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signals = chiplist::tui::terminal_guard::install_termination_signals(
        guard.restorer(),
        signal_tx,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(&mut terminal, &mut board, &signal_rx);

    drop(terminal);
    drop(guard);

    let store = board.into_store();
    tracing::info!(revision = store.list().revision(), "exiting");

    match result {
        Ok(None) => Ok(()),
        Ok(Some(signal)) => {
            // `exit` skips destructors; flush the log writer first.
            drop(logging);
            std::process::exit(signal.exit_code());
        }
        Err(e) => {
            tracing::error!(error = %e, "event loop failed");
            if let Some(logging) = &logging {
                eprintln!("chiplist: {e} (logs in {})", logging.log_dir().display());
            }
            Err(e)
        }
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    board: &mut ChipBoard,
    signals: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;
    loop {
        if let Ok(signal) = signals.try_recv() {
            return Ok(Some(signal));
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                board.render(frame, area);
            })?;
            dirty = false;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        let event = InputEvent::from(crossterm::event::read()?);
        let result = board.handle_input(&event);
        if result.is_quit() {
            return Ok(None);
        }
        dirty |= result.is_consumed();
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_args.rs"]
mod tests;
