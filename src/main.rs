// Maze: grid esolang interpreter with a terminal stepper

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use maze::interpreter::engine::Interpreter;
use maze::ui::{cli, App};

/// Run a Maze program
#[derive(Parser, Debug)]
#[command(name = "maze")]
#[command(about = "Interpreter and terminal stepper for the Maze grid esolang")]
struct Args {
    /// Maze source file
    file: PathBuf,

    /// Open the interactive stepper instead of running to completion
    #[arg(long)]
    gui: bool,

    /// Ticks per second while playing in the stepper
    #[arg(long, default_value_t = 5)]
    fps: u32,

    /// Memory budget for step-back history, in megabytes
    #[arg(long, default_value_t = 64)]
    history_mb: usize,

    /// Write logs to this file (the stepper logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// `--history-mb` in bytes, saturating on overflow
fn history_budget(megabytes: usize) -> usize {
    megabytes.saturating_mul(1024 * 1024)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("maze=warn"))
}

fn init_tracing(args: &Args) -> io::Result<()> {
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // Stderr would draw over the alternate screen
        None if args.gui => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if !Path::new(&args.file).exists() {
        eprintln!("Error: File '{}' not found", args.file.display());
        std::process::exit(1);
    }

    init_tracing(&args)?;

    let source = fs::read_to_string(&args.file)?;
    let mut interpreter = Interpreter::from_source(&source);
    tracing::info!(file = %args.file.display(), cars = interpreter.cars().len(), "loaded");

    if !args.gui {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut stdout = io::stdout().lock();
        cli::run_blocking(&mut interpreter, &mut input, &mut stdout)?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(interpreter, args.fps, history_budget(args.history_mb));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
