use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use flappy::assets::Assets;
use flappy::constants::WINDOW_TITLE;
use flappy::{build_info, display, GameLoop, PlayArea, Result};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;

fn main() {
    init_logging();
    tracing::info!("starting {}", build_info::version_line());

    if let Err(e) = run() {
        tracing::error!(error = %e, "fatal");
        eprintln!("flappy: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Assets and display are resolved before the terminal is touched so a
    // startup failure leaves the shell as it was.
    let assets = Assets::load_default()?;
    let area = display::detect_play_area();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let result = play(area, assets);
    restore_terminal();
    result
}

fn play(area: PlayArea, assets: Assets) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(WINDOW_TITLE)
    )?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut game_loop = GameLoop::new(area, assets, rand::thread_rng());
    game_loop.run(&mut terminal)
}

/// Restore terminal state - called on quit, on error and on panic
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file only when `RUST_LOG` asks for it; the terminal belongs
/// to the game.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Some(dir) = dirs::cache_dir().map(|d| d.join("flappy")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(log_file) = File::create(dir.join("flappy.log")) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
}
