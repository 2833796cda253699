//! Root application component
//!
//! The App owns the store visibility flag and hands the store dialog a
//! callback that asks for the flag to be cleared. Dismissal requests arrive
//! over a channel and are applied as `Action::CloseStore`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_home_layout, HelpModal, HelpModalProps, HeroCarousel};
use crate::config::Config;
use crate::document::{Callback, Document};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::sync::mpsc::{self, Receiver};

/// Main application state - coordinates between components
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Whether the store dialog is shown
    pub store_open: bool,

    /// Document-level key listeners
    pub document: Document,

    /// Dismissal requests sent by `on_close_store`
    close_requests: Receiver<Action>,

    /// Callback handed to the store dialog
    on_close_store: Callback,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub hero: HeroCarousel,
    pub store: HelpModal,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &Config) -> App {
        let (tx, close_requests) = mpsc::channel();
        let on_close_store = Callback::new(move || {
            // The receiver lives as long as the app
            let _ = tx.send(Action::CloseStore);
        });

        let document = Document::new();
        let store_open = config.open_store_on_start;
        let store = HelpModal::mount(
            &document,
            HelpModalProps {
                is_open: store_open,
                on_close: on_close_store.clone(),
            },
            &config.placeholder_base_url,
        );

        log::debug!(
            "Store mounted with {} key listener(s)",
            document.listener_count()
        );

        App {
            should_quit: false,
            store_open,
            document,
            close_requests,
            on_close_store,
            hero: HeroCarousel,
            store,
        }
    }

    /// Dismissal requests queued since the last call
    pub fn take_requests(&self) -> Vec<Action> {
        self.close_requests.try_iter().collect()
    }

    /// Pass the current flag and callback down to the store dialog
    fn render_store(&mut self) {
        self.store.render(HelpModalProps {
            is_open: self.store_open,
            on_close: self.on_close_store.clone(),
        });
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let hints = if self.store.is_open() {
            vec![
                Span::styled(" Esc", key_style),
                Span::raw(" cerrar  "),
                Span::styled("j/k", key_style),
                Span::raw(" desplazar  "),
                Span::styled("Ctrl+c", key_style),
                Span::raw(" salir"),
            ]
        } else {
            vec![
                Span::styled(" t", key_style),
                Span::raw(" Tienda Solidaria  "),
                Span::styled("q", key_style),
                Span::raw(" salir"),
            ]
        };
        frame.render_widget(
            Paragraph::new(Line::from(hints)).style(Style::default().fg(Color::Gray)),
            area,
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        for action in self.store.load_images() {
            self.update(action)?;
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        self.document.dispatch_key(&key);

        // A modal dialog captures all remaining input
        if self.store.semantics().is_some_and(|s| s.aria_modal) {
            return self.store.handle_key_event(key);
        }

        let action = match key.code {
            KeyCode::Char('t') | KeyCode::Enter => Some(Action::OpenStore),
            KeyCode::Char('q') => Some(Action::ForceQuit),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        self.store.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            log::trace!("Action: {}", action);
        }
        match action {
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::OpenStore => {
                self.store_open = true;
                self.render_store();
                if let Some(semantics) = self.store.semantics() {
                    log::info!(
                        "Store opened (role={}, modal={})",
                        semantics.role,
                        semantics.aria_modal
                    );
                }
            }
            Action::CloseStore => {
                // Repeated requests are expected (e.g. Escape plus a click)
                if self.store_open {
                    log::info!("Store closed");
                }
                self.store_open = false;
                self.render_store();
            }
            Action::ImageLoadFailed(id) => {
                self.store.on_image_error(id);
            }
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                return self.store.update(action);
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_home_layout(area);
        self.hero.draw(frame, layout.hero)?;
        self.draw_help_bar(frame, layout.help);

        // Overlay on top of everything
        self.store.draw(frame, area)?;
        Ok(())
    }
}
