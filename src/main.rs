mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flapper::core::{FrameClock, GameConfig};
use flapper::input::{map_key, KeyAction};
use flapper::round::Round;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use ui::play_scene::Hud;

/// Crash flash length in rendered frames.
const CRASH_FLASH_FRAMES: u32 = 12;

/// Target redraw interval (~60 FPS).
const FRAME_MS: u64 = 16;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = parse_args(&args);

    let config = match GameConfig::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging();

    let mut round = match Round::new(config) {
        Ok(round) => round,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut round);

    // Always restore the terminal, even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    round: &mut Round,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut clock = FrameClock::new(round.config().physics_step, round.config().max_frame_dt);
    let mut hud = Hud {
        round_number: round.round_number(),
        ..Default::default()
    };
    let mut last_frame = Instant::now();

    loop {
        // Drain every pending key; inputs latch until the next tick
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    KeyAction::Game(input) => round.queue_input(input),
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Ignore => {}
                }
            }
        }

        let now = Instant::now();
        let steps = clock.advance(now - last_frame);
        last_frame = now;

        for _ in 0..steps {
            let tick = round.tick(clock.step(), &mut rng);
            if tick.game_over {
                hud.crash_flash = CRASH_FLASH_FRAMES;
                hud.best_score = hud.best_score.max(round.score());
            }
        }
        hud.round_number = round.round_number();

        let snap = round.snapshot();
        terminal.draw(|f| ui::draw(f, &snap, &hud))?;
        hud.crash_flash = hud.crash_flash.saturating_sub(1);

        // Sleep until the next frame, waking early on input
        let spent = last_frame.elapsed();
        let budget = Duration::from_millis(FRAME_MS).saturating_sub(spent);
        let _ = event::poll(budget)?;
    }
}

/// Write logs to a file in the data directory, and only when `RUST_LOG`
/// asks for them. The alternate screen owns stdout and stderr.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Ok(dir) = GameConfig::data_dir() else {
        return;
    };
    let Ok(file) = File::create(dir.join("flapper.log")) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// Returns the `--config` path, if any. Handles `--help`/`--version` itself.
fn parse_args(args: &[String]) -> Option<PathBuf> {
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--version" | "-v" => {
                println!("flapper {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flapper - flap through the pipes\n");
                println!("Usage: flapper [--config <path>]\n");
                println!("Options:");
                println!("  -c, --config <path>  Load settings from a JSON file");
                println!("  -v, --version        Show version information");
                println!("  -h, --help           Show this help message");
                println!();
                println!("Controls: Space, W, Up or Enter to flap; R to restart; Esc or Q to quit.");
                if let Some(path) = GameConfig::default_path() {
                    println!("Default config file: {}", path.display());
                }
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'flapper --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config_path
}
