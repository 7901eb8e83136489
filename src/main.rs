// arrayviz: step-synchronized array operation visualizer

use std::fs::File;
use std::io;
use std::panic;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use arrayviz::animation::runner::is_polling;
use arrayviz::config::{Config, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use arrayviz::ui::App;

fn print_usage(program_name: &str) {
    eprintln!(
        "Usage: {} [--size N] [--speed MS] [--lang python|java|c] [--capacity N] [--log FILE]",
        program_name
    );
    eprintln!();
    eprintln!(
        "  --size, -n N        number of elements ({}-{}, default 8)",
        MIN_ARRAY_SIZE, MAX_ARRAY_SIZE
    );
    eprintln!("  --speed, -s MS      base pause between steps in milliseconds (default 600)");
    eprintln!("  --lang, -l LANG     listing language: python, java or c (default python)");
    eprintln!("  --capacity, -c N    capacity of the fixed-size C array (default 10)");
    eprintln!("  --log FILE          write logs to FILE; filter with RUST_LOG");
}

/// Logs go to a file because the terminal belongs to the TUI.
fn init_logger(file: File) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
}

/// Panics inside a running operation are caught and logged by the runner, so
/// they stay off the screen. Any other panic restores the terminal before the
/// default hook prints it.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if is_polling() {
            return;
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "arrayviz".to_string());

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&program_name);
            std::process::exit(1);
        }
    };

    if let Some(path) = &config.log_file {
        init_logger(File::create(path)?);
    }
    info!(?config, "starting");

    // Set up terminal
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config);
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
