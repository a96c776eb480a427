use crossterm::event;
use flappy_pigeon::core::constants::{LOG_ENV_VAR, LOG_FILE_NAME};
use flappy_pigeon::managers::{AudioManager, TerminalBell};
use flappy_pigeon::ui::{
    play_area_size, translate, TerminalCommand, TerminalRenderer, TerminalSession,
};
use flappy_pigeon::utils::build_info;
use flappy_pigeon::utils::persistence::app_path;
use flappy_pigeon::{
    FieldSize, GameConfig, GameEngine, GameError, GameLoop, InputDispatcher, JsonFileStore,
    MemoryStore, SharedStore, SystemClock,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct PlayOptions {
    debug: bool,
    config: Option<PathBuf>,
    seed: Option<u64>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    Play(PlayOptions),
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    let mut options = PlayOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--debug" => options.debug = true,
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Play(options))
}

fn print_help() {
    println!("Flappy Pigeon - Terminal Arcade Game\n");
    println!("Usage: flappy-pigeon [options]\n");
    println!("Options:");
    println!("  --debug          Mark pipe gaps and show flyer telemetry");
    println!("  --config <path>  Load tuning from a JSON file");
    println!("  --seed <n>       Fixed seed for obstacle placement");
    println!("  --version        Show version information");
    println!("  --help           Show this help message\n");
    println!("Controls: Space/Up/Enter or click to flap, P to pause, M to mute, Esc to quit");
}

/// Log to ~/.flappy-pigeon/flappy.log; stdout belongs to the TUI. Without a
/// writable log file, logging stays off.
fn init_logging() {
    let Ok(path) = app_path(LOG_FILE_NAME) else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn open_store() -> SharedStore {
    match JsonFileStore::open_default() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "Persistent storage unavailable, scores will not be saved");
            Rc::new(MemoryStore::new())
        }
    }
}

fn fit_field(cols: u16, rows: u16, config: &GameConfig) -> FieldSize {
    let (play_cols, play_rows) = play_area_size(cols, rows);
    FieldSize::fit_terminal(play_cols, play_rows, config)
}

fn run(options: &PlayOptions) -> Result<(), GameError> {
    let config = GameConfig::load(options.config.as_deref())?;
    let store = open_store();
    let renderer = TerminalRenderer::new(config.field())?;
    let session = TerminalSession::start().map_err(GameError::Terminal)?;

    let (cols, rows) = renderer.size().map_err(GameError::Terminal)?;
    let field = fit_field(cols, rows, &config);

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let audio = AudioManager::new(Some(Box::new(TerminalBell::stdout())), store.clone());
    let mut engine = GameEngine::new(config.clone(), renderer, store, audio, rng)?;
    engine.resize(field);
    engine.set_debug(options.debug);

    let input = if session.reports_key_release() {
        InputDispatcher::new()
    } else {
        InputDispatcher::without_release_events()
    };

    let mut game = GameLoop::new(engine, SystemClock::new(), input);
    game.start();

    while game.is_running() {
        let wait = game.time_until_next_frame().unwrap_or(Duration::ZERO);
        if event::poll(wait).map_err(GameError::Terminal)? {
            match translate(&event::read().map_err(GameError::Terminal)?) {
                TerminalCommand::Quit => game.stop(),
                TerminalCommand::Game(raw) => {
                    if let Some(game_event) = game.handle_raw_input(raw) {
                        tracing::debug!(?game_event, "Input applied");
                    }
                }
                TerminalCommand::Resize(cols, rows) => game.resize(fit_field(cols, rows, &config)),
                TerminalCommand::None => {}
            }
        }
        game.run_due_frame()?;
    }

    tracing::info!(
        frames = game.frames_run(),
        best = game.engine().score().best_score(),
        "Session ended"
    );
    drop(session);
    Ok(())
}

fn main() {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy-pigeon --help' for usage.");
            std::process::exit(1);
        }
    };

    let options = match command {
        Command::Help => {
            print_help();
            return;
        }
        Command::Version => {
            println!("{}", build_info::version_line());
            return;
        }
        Command::Play(options) => options,
    };

    init_logging();
    tracing::info!(version = build_info::BUILD_COMMIT, "Starting");

    if let Err(e) = run(&options) {
        tracing::error!(error = %e, "Fatal error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
