//! tienda-solidaria - charity store for the Bomberos Garibaldi 6 campaign
//!
//! Shows the campaign hero banner and a store dialog listing the
//! merchandise sold to fund the fire station. Uses the Component
//! Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod document;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    #[cfg(debug_assertions)]
    init_logging();

    let config = Config::load_or_init();
    log::debug!("Loaded config: {:?}", config);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    let mut app = App::new(&config);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        log::error!("Exiting after error: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    log::debug!("=== TIENDA SOLIDARIA SESSION ENDED ===");
    Ok(())
}

/// Write logs to a file so they never reach the terminal the UI owns
///
/// Level comes from `TIENDA_LOG`, defaulting to debug.
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let log_path = std::env::temp_dir().join("tienda-solidaria.log");
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().filter_or("TIENDA_LOG", "debug"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== TIENDA SOLIDARIA SESSION STARTED ===");
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("Draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }

            // Dismissal requests raised by callbacks during this event
            for request in app.take_requests() {
                app.update(request)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
