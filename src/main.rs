use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_elite::game::GameSession;
use snake_elite::input::{GameInput, InputHandler};
use snake_elite::renderer;
use snake_elite::terminal_runtime::TerminalSession;
use snake_elite::theme::ThemeCatalog;

#[derive(Debug, Parser)]
#[command(name = "snake-elite", about = "Endless classic Snake plus perfect-maze missions")]
struct Cli {
    /// Seed for maze carving and food placement (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Theme id to start with (builtin or user-provided).
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let catalog = ThemeCatalog::load();
    let mut session = match cli.seed {
        Some(seed) => GameSession::new_with_seed(seed),
        None => GameSession::new(),
    };
    session.set_cosmetic_counts(catalog.theme_count(), catalog.skin_count());

    if let Some(id) = cli.theme.as_deref() {
        match catalog.position_of_theme(id) {
            Some(index) => session.theme_index = index,
            None => eprintln!("unknown theme {id:?}, using the default"),
        }
    }

    run(&mut session, &catalog)
}

fn run(session: &mut GameSession, catalog: &ThemeCatalog) -> io::Result<()> {
    let mut terminal_session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    loop {
        terminal_session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, session, catalog))?;

        if let Some(game_input) = input.poll_input()? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }
            session.apply_input(game_input);
        }

        if session.exit_requested {
            break;
        }

        if last_tick.elapsed() >= tick_interval(session.desired_tick_rate()) {
            session.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn tick_interval(rate: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(rate.max(1)))
}
