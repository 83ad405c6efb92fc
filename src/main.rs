use bitgrid_core::{Mode, Paint, RenderInstruction, Row};
use bitgrid_tui::config::{SystemConfig, log_path};
use bitgrid_tui::events;
use bitgrid_tui::state::{AppState, Field};
use bitgrid_tui::theme::Theme;
use bitgrid_tui::ui_state::UIState;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "bitgrid",
    version,
    about = "Convert HEX, DEC or BIN numbers and show every bit with its index"
)]
struct Args {
    /// Initial HEX value (optional 0x prefix)
    #[arg(long, allow_hyphen_values = true)]
    hex: Option<String>,

    /// Initial DEC value
    #[arg(long, allow_hyphen_values = true, conflicts_with = "hex")]
    dec: Option<String>,

    /// Initial BIN value
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["hex", "dec"])]
    bin: Option<String>,

    /// First bit index to highlight, counted from the least significant bit
    #[arg(long, allow_hyphen_values = true)]
    mark_start: Option<String>,

    /// Last bit index to highlight
    #[arg(long, allow_hyphen_values = true)]
    mark_end: Option<String>,

    /// Print the conversion and the bit grid, then exit
    #[arg(long)]
    headless: bool,

    /// Theme name ("Solarized Dark" or "Solarized Light")
    #[arg(long)]
    theme: Option<String>,

    /// Log level: off, error, warn, info, debug or trace [default: info, warn when headless]
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn init_logging(headless: bool, level: LevelFilter) -> Result<()> {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if headless {
        TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    } else if let Some(path) = log_path() {
        // The TUI owns the terminal, so logs go to a file.
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file =
            File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        WriteLogger::init(level, config, file)?;
    }
    Ok(())
}

fn initial_state(args: &Args) -> AppState {
    let mut system_config = SystemConfig::load();
    if let Some(theme) = &args.theme {
        system_config.theme = Theme::from_name(theme).name.to_string();
    }

    let mut app_state = AppState::with_config(system_config);
    app_state.mode = if args.bin.is_some() {
        Mode::Bin
    } else if args.dec.is_some() {
        Mode::Dec
    } else {
        Mode::Hex
    };

    let fields = [
        (Field::Hex, &args.hex),
        (Field::Dec, &args.dec),
        (Field::Bin, &args.bin),
        (Field::MarkStart, &args.mark_start),
        (Field::MarkEnd, &args.mark_end),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            app_state.set(field, value.clone());
        }
    }
    app_state.recompute();
    app_state
}

/// Plain text rendering of a cycle, one line per row plus a marker line.
fn headless_lines(instruction: &RenderInstruction) -> Vec<String> {
    let Some(conversion) = &instruction.conversion else {
        return Vec::new();
    };

    let mut lines = vec![
        format!("HEX: {}", conversion.hex_display()),
        format!("DEC: {}", conversion.dec),
        format!("BIN: {}", conversion.bin),
        String::new(),
    ];
    for row in Row::all() {
        lines.push(format!("{}{}", row.label(), instruction.row(row).text()));
    }

    if instruction.range.is_some() {
        let markers: String = instruction
            .row(Row::Bin)
            .cells
            .iter()
            .map(|cell| {
                let width = cell.text().len();
                if cell.fg() == Paint::BitMark {
                    format!("{:>width$}", "^")
                } else {
                    " ".repeat(width)
                }
            })
            .collect();
        lines.push(format!(" MRK: {}", markers.trim_end()));
    }
    lines
}

fn run_headless(app_state: &AppState) {
    let instruction = &app_state.last;
    for message in instruction.messages() {
        eprintln!("{}", message);
    }
    for line in headless_lines(instruction) {
        println!("{}", line);
    }
    if !instruction.success() {
        if instruction.messages().is_empty() {
            eprintln!("Error: nothing to convert, pass --hex, --dec or --bin");
        }
        std::process::exit(1);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args.log_level.unwrap_or(if args.headless {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    });
    if let Err(e) = init_logging(args.headless, level) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    log::info!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let app_state = initial_state(&args);

    if args.headless {
        run_headless(&app_state);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Optional setup: Keyboard Enhancement (might fail on legacy Windows)
    let keyboard_enhancement_result = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    );

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::from_name(&app_state.system_config.theme);
    let mut ui_state = UIState::new(theme);

    if let Err(ref e) = keyboard_enhancement_result {
        log::warn!("keyboard enhancement failed: {}", e);
        ui_state.set_status_message(format!("Warning: Keyboard enhancement failed: {}", e));
    }

    let res = events::run_app(&mut terminal, app_state, ui_state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    // Try to pop enhancement flags, ignore error
    let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);

    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("{:#}", err);
        println!("{:?}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitgrid_core::{RecomputeRequest, Session};

    #[test]
    fn test_headless_lines_with_marks() {
        let mut session = Session::new();
        let instruction =
            session.recompute(&RecomputeRequest::new(Mode::Hex).hex("A3").marks("3", "0"));
        assert_eq!(
            headless_lines(&instruction),
            [
                "HEX: 0xA3",
                "DEC: 163",
                "BIN: 10100011",
                "",
                " HEX:    A   3",
                " BIN: 10100011",
                " IDX: 76543210",
                " MRK:     ^^^^",
            ]
        );
    }

    #[test]
    fn test_headless_lines_without_conversion() {
        let mut session = Session::new();
        let instruction = session.recompute(&RecomputeRequest::new(Mode::Dec).dec("nope"));
        assert!(headless_lines(&instruction).is_empty());
    }

    #[test]
    fn test_args_pick_mode() {
        let args = Args::parse_from(["bitgrid", "--dec", "5", "--headless"]);
        assert_eq!(args.dec.as_deref(), Some("5"));
        assert!(args.headless);
        assert_eq!(args.log_level, None);

        let args = Args::parse_from(["bitgrid", "--log-level", "debug"]);
        assert_eq!(args.log_level, Some(LevelFilter::Debug));

        let args = Args::parse_from(["bitgrid", "--dec", "-5"]);
        assert_eq!(args.dec.as_deref(), Some("-5"));

        assert!(Args::try_parse_from(["bitgrid", "--hex", "1", "--dec", "1"]).is_err());
    }
}
