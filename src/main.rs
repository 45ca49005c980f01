use clap::Parser;
use crossterm::event::{self, Event as CEvent, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::error::Error;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rustdex::error::FetchError;
use rustdex::fetch::{PokeClient, RosterRow};
use rustdex::models::Pokemon;
use rustdex::screen::{App, Screen};
use rustdex::ui::draw_ui;
use rustdex::utils::format_name;

#[derive(Parser, Debug)]
#[command(name = "rustdex")]
#[command(about = "Browse the Pokédex from the terminal")]
struct Args {
    /// Roster page size. Falls back to the POKEMON_LIMIT environment
    /// variable, then to 20.
    #[arg(long)]
    limit: Option<usize>,

    /// Fetch the roster, print one line per entry, and exit without
    /// entering the TUI.
    #[arg(long)]
    roster_only: bool,
}

/// Slot a spawned fetch writes its tagged result into for the event loop
/// to drain. The generation tag lets the app discard stale arrivals.
type FetchSlot<T> = Arc<Mutex<Option<(u64, Result<T, FetchError>)>>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let limit = args.limit.unwrap_or_else(|| {
        std::env::var("POKEMON_LIMIT")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(20)
    });

    let client = PokeClient::new();

    if args.roster_only {
        // The TUI owns the terminal in interactive mode, so the log
        // subscriber is only installed here.
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
        let rows = client.list_roster(limit).await?;
        print_roster(&rows);
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client, limit).await;

    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    result
}

fn print_roster(rows: &[RosterRow]) {
    for (i, row) in rows.iter().enumerate() {
        match row {
            Ok(row) => println!(
                "{:>4}  {:<16} [{}]",
                i + 1,
                format_name(&row.name),
                row.types.join(", ")
            ),
            Err(err) => println!("{:>4}  (failed: {})", i + 1, err),
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: PokeClient,
    limit: usize,
) -> Result<(), Box<dyn Error>> {
    let roster_slot: FetchSlot<Vec<RosterRow>> = Arc::new(Mutex::new(None));
    let detail_slot: FetchSlot<Pokemon> = Arc::new(Mutex::new(None));

    let mut app = App::new();
    let generation = app.start_roster_load();
    spawn_roster_fetch(&client, limit, generation, &roster_slot);

    let tick_rate = Duration::from_millis(200);
    loop {
        draw_ui(terminal, &app)?;

        // Drain completed fetches. Results tagged with a superseded
        // generation are dropped by the app, never rendered.
        if let Some((generation, result)) = roster_slot.lock().unwrap().take() {
            app.finish_roster_load(generation, result);
        }
        if let Some((generation, result)) = detail_slot.lock().unwrap().take() {
            app.finish_detail_load(generation, result);
        }

        if event::poll(tick_rate)? {
            if let CEvent::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char('h') | KeyCode::F(1) => {
                        app.show_help = !app.show_help;
                    }
                    KeyCode::Down => app.select_next(),
                    KeyCode::Up => app.select_previous(),
                    KeyCode::Enter => {
                        if app.screen == Screen::List {
                            if let Some(name) = app.selected_name().map(str::to_string) {
                                let generation = app.open_detail(name.clone());
                                spawn_detail_fetch(&client, name, generation, &detail_slot);
                            }
                        }
                    }
                    KeyCode::Esc | KeyCode::Backspace => {
                        if matches!(app.screen, Screen::Detail { .. }) {
                            app.close_detail();
                        }
                    }
                    KeyCode::Char('r') => {
                        if app.screen == Screen::List {
                            let generation = app.start_roster_load();
                            spawn_roster_fetch(&client, limit, generation, &roster_slot);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

fn spawn_roster_fetch(
    client: &PokeClient,
    limit: usize,
    generation: u64,
    slot: &FetchSlot<Vec<RosterRow>>,
) {
    let client = client.clone();
    let slot = Arc::clone(slot);
    tokio::spawn(async move {
        let result = client.list_roster(limit).await;
        *slot.lock().unwrap() = Some((generation, result));
    });
}

fn spawn_detail_fetch(
    client: &PokeClient,
    name: String,
    generation: u64,
    slot: &FetchSlot<Pokemon>,
) {
    let client = client.clone();
    let slot = Arc::clone(slot);
    tokio::spawn(async move {
        let result = client.fetch_pokemon(&name).await;
        *slot.lock().unwrap() = Some((generation, result));
    });
}
