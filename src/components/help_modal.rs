//! Store dialog component ("Tienda Solidaria")
//!
//! A controlled dialog: the parent decides whether it is open and receives a
//! callback whenever the user asks to dismiss it. The dialog never hides
//! itself.
//!
//! Dismissal paths, each of which calls `on_close`:
//! - left click on the backdrop around the panel
//! - left click on the `[×]` button
//! - Escape, through a document-level listener held for the whole mount
//!
//! Clicks bubble from the clicked region outwards and the panel stops them,
//! so clicking inside the catalog never reaches the backdrop.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{ModalLayout, ModalRegion};
use crate::document::{Callback, Document, ListenerGuard};
use crate::model::{ImageSource, Product, CATALOG};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const STORE_TITLE: &str = "TIENDA SOLIDARIA";
pub const STORE_SUBTITLE: &str =
    "El 100% de lo recaudado se destina al equipamiento de la estación.";
const CLOSE_LABEL: &str = "[ × ]";
const BADGE: &str = " NUEVO ";
const INTEREST_BUTTON: &str = "[ Lo Quiero ]";
const HOW_TO_BUY_TITLE: &str = "¿Cómo comprar?";
const HOW_TO_BUY_TEXT: &str =
    "Selecciona tus productos y contáctanos por WhatsApp para coordinar el pago y la entrega.";
const WHATSAPP_LABEL: &str = "[ Escribir al WhatsApp ]";
const WHATSAPP_HREF: &str = "#";

/// Height of one catalog card, borders included
const CARD_HEIGHT: u16 = 8;
/// Height of the "how to buy" footer, borders included
const FOOTER_HEIGHT: u16 = 5;

const BRAND_RED: Color = Color::Rgb(200, 30, 40);

/// Inputs supplied by the parent on every render
#[derive(Debug, Clone, PartialEq)]
pub struct HelpModalProps {
    pub is_open: bool,
    pub on_close: Callback,
}

/// Semantics exposed to assistive technology while the dialog is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogSemantics {
    pub role: &'static str,
    pub aria_modal: bool,
}

/// Number of grid columns for a viewport width
pub fn grid_columns(viewport_width: u16) -> usize {
    if viewport_width >= 120 {
        3
    } else if viewport_width >= 80 {
        2
    } else {
        1
    }
}

/// Store dialog listing the merchandise catalog
pub struct HelpModal {
    document: Document,
    props: HelpModalProps,
    /// Escape listener bound to `props.on_close`
    escape_listener: Option<ListenerGuard>,
    placeholder_base: String,
    /// One image element per catalog entry, in catalog order
    images: Vec<ImageSource>,
    /// First visible body item (grid row, then the footer)
    pub scroll_offset: usize,
    /// Items that fit in the body on the last draw
    page_size: usize,
    layout: Option<ModalLayout>,
}

impl HelpModal {
    /// Mount the dialog, registering its Escape listener
    pub fn mount(document: &Document, props: HelpModalProps, placeholder_base: &str) -> Self {
        let escape_listener = Some(Self::listen_for_escape(document, &props.on_close));

        Self {
            document: document.clone(),
            props,
            escape_listener,
            placeholder_base: placeholder_base.to_string(),
            images: CATALOG
                .iter()
                .map(|product| ImageSource::new(product.name, product.image))
                .collect(),
            scroll_offset: 0,
            page_size: 1,
            layout: None,
        }
    }

    fn listen_for_escape(document: &Document, on_close: &Callback) -> ListenerGuard {
        let on_close = on_close.clone();
        document.add_key_listener(move |key| {
            if key.code == KeyCode::Esc {
                on_close.emit();
            }
        })
    }

    /// Re-render with fresh props
    ///
    /// A new `on_close` identity replaces the Escape listener; the old one is
    /// removed before the new one is installed. Opening starts at the top.
    pub fn render(&mut self, props: HelpModalProps) {
        if props.is_open && !self.props.is_open {
            self.scroll_offset = 0;
        }
        if props.on_close != self.props.on_close {
            drop(self.escape_listener.take());
            self.escape_listener = Some(Self::listen_for_escape(&self.document, &props.on_close));
        }
        self.props = props;
    }

    pub fn is_open(&self) -> bool {
        self.props.is_open
    }

    /// Dialog semantics, present only while rendered
    pub fn semantics(&self) -> Option<DialogSemantics> {
        self.props.is_open.then_some(DialogSemantics {
            role: "dialog",
            aria_modal: true,
        })
    }

    /// Image element for a product
    pub fn image(&self, product_id: u32) -> Option<&ImageSource> {
        CATALOG
            .iter()
            .position(|p| p.id == product_id)
            .and_then(|index| self.images.get(index))
    }

    /// Image load error handler: swap in the placeholder
    pub fn on_image_error(&mut self, product_id: u32) {
        if let Some(index) = CATALOG.iter().position(|p| p.id == product_id) {
            self.images[index].on_error(&self.placeholder_base);
        }
    }

    /// Load every card image, reporting the ones that fail
    pub fn load_images(&self) -> Vec<Action> {
        CATALOG
            .iter()
            .zip(&self.images)
            .filter(|(_, image)| !image.loads())
            .map(|(product, _)| Action::ImageLoadFailed(product.id))
            .collect()
    }

    /// Deliver a left click to `region` and the regions around it
    fn click(&self, region: ModalRegion) {
        for target in region.bubble_path() {
            match target {
                ModalRegion::CloseButton | ModalRegion::Backdrop => self.props.on_close.emit(),
                // Propagation boundary
                ModalRegion::Panel => break,
            }
        }
    }

    fn body_item_heights(columns: usize) -> Vec<u16> {
        let rows = CATALOG.len().div_ceil(columns);
        let mut heights = vec![CARD_HEIGHT; rows];
        heights.push(FOOTER_HEIGHT);
        heights
    }

    /// Largest offset that still fills the body, or the last item
    fn max_scroll(heights: &[u16], body_height: u16) -> usize {
        let mut remaining: u16 = 0;
        for (index, height) in heights.iter().enumerate().rev() {
            remaining = remaining.saturating_add(*height);
            if remaining > body_height {
                return (index + 1).min(heights.len().saturating_sub(1));
            }
        }
        0
    }

    fn draw_header(&self, frame: &mut Frame, layout: &ModalLayout) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                STORE_TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                STORE_SUBTITLE,
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, layout.header);

        let close = Paragraph::new(Span::styled(
            CLOSE_LABEL,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(close, layout.close_button);
    }

    fn draw_card(&self, frame: &mut Frame, area: Rect, product: &Product, image: &ImageSource) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        // Image row: source on the left, badge on the right
        let badge_width = BADGE.width() as u16;
        let src_width = inner.width.saturating_sub(badge_width + 1) as usize;
        let image_style = if image.is_placeholder() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(truncate(image.src(), src_width), image_style)),
            rows[0],
        );
        let badge_area = Rect::new(
            rows[0].x + rows[0].width.saturating_sub(badge_width),
            rows[0].y,
            badge_width.min(rows[0].width),
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                BADGE,
                Style::default()
                    .fg(Color::White)
                    .bg(BRAND_RED)
                    .add_modifier(Modifier::BOLD),
            )),
            badge_area,
        );

        // Name on the left, price on the right
        let price_width = product.price.width() as u16;
        let name_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(price_width)])
            .split(rows[1]);
        frame.render_widget(
            Paragraph::new(Span::styled(
                truncate(product.name, name_row[0].width.saturating_sub(1) as usize),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            name_row[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                product.price,
                Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
            )),
            name_row[1],
        );

        frame.render_widget(
            Paragraph::new(product.description)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            rows[2],
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                INTEREST_BUTTON,
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Rgb(20, 30, 60))
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[3],
        );
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(vec![
            Line::from(Span::styled(
                HOW_TO_BUY_TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                HOW_TO_BUY_TEXT,
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![
                Span::styled(
                    WHATSAPP_LABEL,
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}", WHATSAPP_HREF),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(footer, area);
    }

    fn draw_body(&mut self, frame: &mut Frame, body: Rect, columns: usize) {
        let heights = Self::body_item_heights(columns);
        let max_scroll = Self::max_scroll(&heights, body.height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let grid_rows = heights.len() - 1;
        let mut y = body.y;
        let mut shown = 0;
        for (item, height) in heights.iter().enumerate().skip(self.scroll_offset) {
            if y + height > body.bottom() {
                break;
            }
            let row_area = Rect::new(body.x, y, body.width, *height);

            if item < grid_rows {
                let cells = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                    .split(row_area);
                let products = CATALOG.iter().skip(item * columns).take(columns);
                for (product, cell) in products.zip(cells.iter()) {
                    if let Some(image) = self.image(product.id) {
                        self.draw_card(frame, *cell, product, image);
                    }
                }
            } else {
                self.draw_footer(frame, row_area);
            }

            y += height;
            shown += 1;
        }
        self.page_size = shown.max(1);
    }
}

/// Cut `text` to at most `max_width` display columns, marking the cut
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

impl Component for HelpModal {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.props.is_open {
            return Ok(None);
        }
        // Escape is handled by the document listener
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.props.is_open {
            return Ok(None);
        }
        let Some(region) = self
            .layout
            .as_ref()
            .and_then(|layout| layout.region_at(mouse.column, mouse.row))
        else {
            return Ok(None);
        };

        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.click(region);
                None
            }
            MouseEventKind::ScrollDown if region != ModalRegion::Backdrop => {
                Some(Action::ScrollDown)
            }
            MouseEventKind::ScrollUp if region != ModalRegion::Backdrop => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll_offset = self.scroll_offset.saturating_add(1),
            Action::ScrollUp => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            Action::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(self.page_size)
            }
            Action::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(self.page_size),
            Action::ImageLoadFailed(id) => self.on_image_error(id),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if !self.props.is_open {
            self.layout = None;
            return Ok(());
        }

        let layout = ModalLayout::compute(area);
        self.layout = Some(layout);

        // Dim whatever is underneath
        frame.buffer_mut().set_style(
            area,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        );

        frame.render_widget(Clear, layout.panel);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray))
                .style(Style::default().bg(Color::Rgb(18, 18, 24))),
            layout.panel,
        );

        self.draw_header(frame, &layout);
        self.draw_body(frame, layout.body, grid_columns(area.width));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PLACEHOLDER_BASE_URL;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};
    use std::cell::Cell;
    use std::rc::Rc;

    const WIDTH: u16 = 130;
    const HEIGHT: u16 = 40;

    fn counting_callback() -> (Callback, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        (Callback::new(move || counter.set(counter.get() + 1)), calls)
    }

    fn mount(document: &Document, is_open: bool, on_close: &Callback) -> HelpModal {
        HelpModal::mount(
            document,
            HelpModalProps {
                is_open,
                on_close: on_close.clone(),
            },
            DEFAULT_PLACEHOLDER_BASE_URL,
        )
    }

    fn escape() -> KeyEvent {
        KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn render_to_string(modal: &mut HelpModal, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                modal.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for row in buffer.content().chunks(buffer.area.width as usize) {
            for cell in row {
                out.push_str(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let mut modal = mount(&document, false, &on_close);

        let output = render_to_string(&mut modal, WIDTH, HEIGHT);
        assert!(output.chars().all(|c| c == ' ' || c == '\n'));
        assert!(modal.semantics().is_none());
        assert!(modal.layout.is_none());
    }

    #[test]
    fn test_open_modal_renders_one_dialog() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let mut modal = mount(&document, true, &on_close);

        let output = render_to_string(&mut modal, WIDTH, HEIGHT);
        assert_eq!(output.matches(STORE_TITLE).count(), 1);
        assert_eq!(
            modal.semantics(),
            Some(DialogSemantics {
                role: "dialog",
                aria_modal: true,
            })
        );
    }

    #[test]
    fn test_open_modal_renders_first_row_of_catalog() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let mut modal = mount(&document, true, &on_close);

        let output = render_to_string(&mut modal, WIDTH, HEIGHT);
        for product in &CATALOG[..3] {
            assert!(output.contains(product.name), "missing {}", product.name);
            assert!(output.contains(product.price));
        }
        assert!(output.contains("Lo Quiero"));
        assert!(output.contains("NUEVO"));
    }

    #[test]
    fn test_scrolling_reaches_footer() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let mut modal = mount(&document, true, &on_close);
        render_to_string(&mut modal, WIDTH, 20);

        for _ in 0..10 {
            modal.update(Action::ScrollDown).unwrap();
        }
        let output = render_to_string(&mut modal, WIDTH, 20);
        assert!(output.contains(HOW_TO_BUY_TITLE));
        assert!(output.contains("Escribir al WhatsApp"));
        // Clamped so the last grid row and the footer fill the body
        assert_eq!(modal.scroll_offset, 1);
    }

    #[test]
    fn test_narrow_header_shows_full_subtitle_and_close_button() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let mut modal = mount(&document, true, &on_close);
        let output = render_to_string(&mut modal, 80, 30);
        assert!(output.contains(STORE_SUBTITLE));
        assert!(output.contains(CLOSE_LABEL));
    }

    #[test]
    fn test_reopening_starts_at_top() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let mut modal = mount(&document, true, &on_close);
        render_to_string(&mut modal, WIDTH, 20);
        modal.update(Action::ScrollDown).unwrap();
        render_to_string(&mut modal, WIDTH, 20);
        assert_eq!(modal.scroll_offset, 1);

        let props = |is_open| HelpModalProps {
            is_open,
            on_close: on_close.clone(),
        };
        modal.render(props(false));
        modal.render(props(true));
        assert_eq!(modal.scroll_offset, 0);

        // Re-rendering while open keeps the position
        modal.update(Action::ScrollDown).unwrap();
        modal.render(props(true));
        assert_eq!(modal.scroll_offset, 1);
    }

    #[test]
    fn test_catalog_images_all_load() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let modal = mount(&document, true, &on_close);
        assert!(modal.load_images().is_empty());
    }

    #[test]
    fn test_image_load_failed_action_swaps_in_placeholder() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let mut modal = mount(&document, true, &on_close);

        modal.update(Action::ImageLoadFailed(2)).unwrap();
        assert_eq!(
            modal.image(2).unwrap().src(),
            "https://placehold.co/600x400?text=Gorra%20Garibaldi%206"
        );
    }

    #[test]
    fn test_escape_calls_on_close_once_per_press() {
        let document = Document::new();
        let (on_close, calls) = counting_callback();
        let _modal = mount(&document, true, &on_close);

        document.dispatch_key(&escape());
        assert_eq!(calls.get(), 1);

        document.dispatch_key(&escape());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_other_keys_do_not_dismiss() {
        let document = Document::new();
        let (on_close, calls) = counting_callback();
        let mut modal = mount(&document, true, &on_close);

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        document.dispatch_key(&key);
        modal.handle_key_event(key).unwrap();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_mount_registers_exactly_one_listener() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let mut modal = mount(&document, true, &on_close);
        assert_eq!(document.listener_count(), 1);

        // Same callback identity keeps the registration
        modal.render(HelpModalProps {
            is_open: false,
            on_close: on_close.clone(),
        });
        assert_eq!(document.listener_count(), 1);
    }

    #[test]
    fn test_unmount_removes_listener() {
        let document = Document::new();
        let (on_close, calls) = counting_callback();
        let modal = mount(&document, true, &on_close);

        drop(modal);
        assert_eq!(document.listener_count(), 0);

        document.dispatch_key(&escape());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_new_callback_replaces_old_listener() {
        let document = Document::new();
        let (old_close, old_calls) = counting_callback();
        let (new_close, new_calls) = counting_callback();
        let mut modal = mount(&document, true, &old_close);

        modal.render(HelpModalProps {
            is_open: true,
            on_close: new_close,
        });
        assert_eq!(document.listener_count(), 1);

        document.dispatch_key(&escape());
        assert_eq!(old_calls.get(), 0);
        assert_eq!(new_calls.get(), 1);
    }

    #[test]
    fn test_backdrop_click_calls_on_close() {
        let document = Document::new();
        let (on_close, calls) = counting_callback();
        let mut modal = mount(&document, true, &on_close);
        render_to_string(&mut modal, WIDTH, HEIGHT);

        modal.handle_mouse_event(left_click(0, 0)).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_click_inside_panel_does_not_dismiss() {
        let document = Document::new();
        let (on_close, calls) = counting_callback();
        let mut modal = mount(&document, true, &on_close);
        render_to_string(&mut modal, WIDTH, HEIGHT);
        let layout = modal.layout.unwrap();

        let inside = [
            (layout.panel.x, layout.panel.y),
            (layout.header.x + 1, layout.header.y),
            (layout.body.x + 3, layout.body.y + 3),
            (layout.panel.right() - 1, layout.panel.bottom() - 1),
        ];
        for (column, row) in inside {
            modal.handle_mouse_event(left_click(column, row)).unwrap();
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_close_button_calls_on_close_once() {
        let document = Document::new();
        let (on_close, calls) = counting_callback();
        let mut modal = mount(&document, true, &on_close);
        let output = render_to_string(&mut modal, WIDTH, HEIGHT);
        assert!(output.contains(CLOSE_LABEL));
        let button = modal.layout.unwrap().close_button;

        modal
            .handle_mouse_event(left_click(button.x + 2, button.y))
            .unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_closed_modal_ignores_clicks() {
        let document = Document::new();
        let (on_close, calls) = counting_callback();
        let mut modal = mount(&document, false, &on_close);
        render_to_string(&mut modal, WIDTH, HEIGHT);

        modal.handle_mouse_event(left_click(0, 0)).unwrap();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_image_error_swaps_in_placeholder() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let mut modal = mount(&document, true, &on_close);
        assert!(!modal.image(6).unwrap().is_placeholder());

        modal.on_image_error(6);
        let image = modal.image(6).unwrap();
        assert!(image.is_placeholder());
        assert_eq!(
            image.src(),
            "https://placehold.co/600x400?text=Llavero%20de%20Goma"
        );
        // Other cards are untouched
        assert!(!modal.image(5).unwrap().is_placeholder());
    }

    #[test]
    fn test_image_error_for_unknown_product_is_ignored() {
        let document = Document::new();
        let (on_close, _) = counting_callback();
        let mut modal = mount(&document, true, &on_close);

        modal.on_image_error(42);
        assert!(CATALOG
            .iter()
            .all(|p| !modal.image(p.id).unwrap().is_placeholder()));
    }

    #[test]
    fn test_grid_columns_breakpoints() {
        assert_eq!(grid_columns(60), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(119), 2);
        assert_eq!(grid_columns(120), 3);
    }

    #[test]
    fn test_max_scroll() {
        // Two grid rows plus the footer
        let heights = [CARD_HEIGHT, CARD_HEIGHT, FOOTER_HEIGHT];
        assert_eq!(HelpModal::max_scroll(&heights, 40), 0);
        assert_eq!(HelpModal::max_scroll(&heights, CARD_HEIGHT + FOOTER_HEIGHT), 1);
        assert_eq!(HelpModal::max_scroll(&heights, FOOTER_HEIGHT), 2);
        assert_eq!(HelpModal::max_scroll(&heights, 1), 2);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("abc", 0), "");
    }
}
