// src/main.rs

use chrono::Local;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::info;

use phishguard::app::App;
use phishguard::config::Config;
use phishguard::core::api::{Backend, HttpBackend};
use phishguard::dispatch::{spawn_request, AppEvent};
use phishguard::keys::map_key;
use phishguard::{logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let config = Config::load().wrap_err("Failed to load configuration")?;
    let log_path = logging::initialize_logging()?;
    info!(log = %log_path.display(), backend = %config.backend_url, "PhishGuard starting.");

    let backend: Arc<dyn Backend> = Arc::new(
        HttpBackend::new(&config.backend_url).wrap_err("Invalid backend URL")?,
    );

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, &config, backend).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    info!("PhishGuard stopped.");
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    config: &Config,
    backend: Arc<dyn Backend>,
) -> Result<()> {
    let mut app = App::new(&config.default_location, Local::now().naive_local());
    let (tx, mut rx) = mpsc::channel::<AppEvent>(32);

    for request in app.startup() {
        spawn_request(backend.clone(), tx.clone(), request);
    }

    let mut last_clock_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(config.tick_rate())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(request) = map_key(key).and_then(|action| app.handle_action(action)) {
                        spawn_request(backend.clone(), tx.clone(), request);
                    }
                }
            }
        }

        // Settles are applied in arrival order.
        while let Ok(event) = rx.try_recv() {
            app.apply_event(event);
        }

        if last_clock_tick.elapsed() >= config.clock_interval() {
            app.on_tick(Local::now().naive_local());
            last_clock_tick = Instant::now();
        }
    }

    Ok(())
}
