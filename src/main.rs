use flappy::core::{GameConfig, GameLoop, SystemClock};
use flappy::surface::TerminalSurface;
use flappy::SurfaceError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    init_logging();

    let code = match run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    };
    std::process::exit(code);
}

/// Logs go to stderr, which is free while the game owns stdout. Silent unless
/// `RUST_LOG` is set, e.g. `RUST_LOG=flappy=debug flappy 2> flappy.log`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn run() -> Result<(), SurfaceError> {
    let surface = TerminalSurface::new()?;
    let mut game = GameLoop::new(surface, SystemClock, rand::thread_rng(), GameConfig::default());
    // The terminal is restored when `game` drops, before any error is printed.
    game.run()
}
