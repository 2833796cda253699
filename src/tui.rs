//! Terminal session for the store
//!
//! Owns raw mode, the alternate screen and mouse capture (the dialog is
//! dismissed by clicking its backdrop). The terminal is restored on exit,
//! on drop and from the panic hook.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::{
    io::{self, Stdout},
    panic,
    sync::Once,
    time::Duration,
};

static PANIC_HOOK: Once = Once::new();

/// Undo everything `Tui::enter` set up
fn restore() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )
}

/// Restore the terminal before the panic message is printed
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore();
            hook(info);
        }));
    });
}

/// Whether the main loop should see this event
///
/// Only key presses count; release and repeat reports (sent by Windows and
/// by terminals with the kitty protocol) would otherwise press twice.
pub fn is_key_press(event: &Event) -> bool {
    match event {
        Event::Key(key) => key.kind == KeyEventKind::Press,
        _ => true,
    }
}

/// Terminal wrapper for the store session
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Polling timeout for events, one `Tick` per timeout
    pub tick_rate: Duration,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            tick_rate: Duration::from_millis(100),
            entered: false,
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Enter the alternate screen with raw mode and mouse capture
    pub fn enter(&mut self) -> Result<()> {
        install_panic_hook();
        terminal::enable_raw_mode()?;

        // Leave raw mode behind if the screen could not be switched
        if let Err(e) = crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }

        self.entered = true;
        self.terminal.clear()?;
        log::debug!("Entered terminal session (tick {:?})", self.tick_rate);
        Ok(())
    }

    /// Restore the terminal; a no-op unless `enter` succeeded
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        restore()?;
        log::debug!("Left terminal session");
        Ok(())
    }

    /// Wait up to `tick_rate` for an event
    ///
    /// `None` means the tick elapsed or the event was a non-press key report.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }
        let event = event::read()?;
        Ok(is_key_press(&event).then_some(event))
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
