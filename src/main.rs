mod app;
mod calendar;
mod domain;
mod input;
mod persistence;
mod store;
mod ticker;
mod ui;

use app::AppState;
use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_dayplan_dir, get_dayplan_dir, init_local_dayplan, JsonFileStorage};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use store::TaskStore;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "A terminal day planner with a calendar-bound task list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .dayplan directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .dayplan directory
            let dayplan_dir = init_local_dayplan()?;
            println!("Initialized dayplan directory: {}", dayplan_dir.display());
            println!();
            println!("Dayplan will now use this local directory for task storage.");
            println!("Run 'dayplan' to start planning.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Ensure dayplan directory exists
    ensure_dayplan_dir()?;

    // Show which directory we're using
    let dayplan_dir = get_dayplan_dir()?;
    eprintln!("Using dayplan directory: {}", dayplan_dir.display());

    // Load the task store
    let storage = JsonFileStorage::open_default()?;
    let store = TaskStore::open(Box::new(storage))?;

    // Create app state pinned to today's date
    let today = chrono::Local::now().date_naive();
    let mut app = AppState::new(store, today);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Check for midnight crossing - force restart
        if app.has_day_changed() && app.ui_mode != domain::UiMode::DayChanged {
            app.notice_day_change();
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with a timeout so the rollover check keeps running
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }
    }
}
