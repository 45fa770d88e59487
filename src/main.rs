mod config;
mod cooldown;
mod error;
mod event;
mod input;
mod name_entry;
mod round;
mod scores;
mod screens;
mod ui;

use std::fs::File;
use std::io;
use std::rc::Rc;

use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use config::Settings;
use cooldown::SystemClock;
use event::{Event, EventHandler};
use input::KeyState;
use round::RoundResult;
use scores::FileStore;
use screens::score::ScoreScreen;
use screens::{Screen, Services, Transition};

fn main() -> io::Result<()> {
    init_logging(&Settings::default());
    let settings = Settings::from_env();
    info!("high scores at {}", settings.scores_path.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(settings: &Settings) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Warn).parse_default_env();
    if let Ok(file) = File::create(&settings.log_path) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, settings: Settings) -> io::Result<()> {
    let clock = Rc::new(SystemClock);
    let services = Services {
        store: Rc::new(FileStore::new(&settings.scores_path)),
        clock: clock.clone(),
        settings: settings.clone(),
    };
    let events = EventHandler::new(settings.tick_rate);
    let mut keys = KeyState::new(clock, settings.key_hold);
    let mut rng = rand::thread_rng();

    let mut screen = ScoreScreen::new(services.clone(), RoundResult::simulated(&mut rng));
    loop {
        terminal.draw(|frame| screen.draw(frame))?;

        let first = events.next()?;
        for event in std::iter::once(first).chain(events.pending()) {
            if let Event::Key(key) = event {
                // Ctrl+C always quits
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                keys.handle(key);
            }
        }
        screen.update(&keys);

        match screen.exit() {
            None => {}
            Some(Transition::Replay) => {
                info!("replaying with a fresh simulated round");
                screen = ScoreScreen::new(services.clone(), RoundResult::simulated(&mut rng));
            }
            Some(Transition::Menu) => {
                // No title menu in the standalone binary
                return Ok(());
            }
        }
    }
}
