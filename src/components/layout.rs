//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Home screen layout areas
pub struct HomeLayout {
    pub hero: Rect,
    pub help: Rect,
}

/// Calculate home screen layout: hero banner + key hint bar
pub fn calculate_home_layout(area: Rect) -> HomeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    HomeLayout {
        hero: chunks[0],
        help: chunks[1],
    }
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Check if a point is within a rectangle
pub fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Clickable parts of the store dialog, innermost first when nested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalRegion {
    /// Dimmed area around the panel
    Backdrop,
    /// The dialog panel itself
    Panel,
    /// The `[×]` button in the panel header
    CloseButton,
}

impl ModalRegion {
    /// Regions a click passes through, from the target outwards
    pub fn bubble_path(self) -> &'static [ModalRegion] {
        match self {
            ModalRegion::CloseButton => &[
                ModalRegion::CloseButton,
                ModalRegion::Panel,
                ModalRegion::Backdrop,
            ],
            ModalRegion::Panel => &[ModalRegion::Panel, ModalRegion::Backdrop],
            ModalRegion::Backdrop => &[ModalRegion::Backdrop],
        }
    }
}

/// Areas of the store dialog, recomputed on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub backdrop: Rect,
    pub panel: Rect,
    pub header: Rect,
    pub close_button: Rect,
    pub body: Rect,
}

/// Width of the `[×]` close button
const CLOSE_BUTTON_WIDTH: u16 = 5;

/// Widest the panel gets, like a max-width container
const MAX_PANEL_WIDTH: u16 = 150;

impl ModalLayout {
    /// Lay the dialog out inside `area`
    ///
    /// The panel leaves a margin of backdrop on every side (90% of the
    /// height at most) and is capped in width.
    pub fn compute(area: Rect) -> Self {
        let margin_x = (area.width / 20).max(2);
        let margin_y = (area.height / 20).max(1);
        let width = area
            .width
            .saturating_sub(margin_x * 2)
            .min(MAX_PANEL_WIDTH);
        let height = area.height.saturating_sub(margin_y * 2);
        let panel = centered_popup(area, width, height);

        // Inside the panel border
        let inner = Rect::new(
            panel.x.saturating_add(1),
            panel.y.saturating_add(1),
            panel.width.saturating_sub(2),
            panel.height.saturating_sub(2),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);
        let header = chunks[0];
        let body = chunks[1];

        // On the title row, clear of the subtitle below it
        let close_button = Rect::new(
            header
                .x
                .saturating_add(header.width.saturating_sub(CLOSE_BUTTON_WIDTH + 1)),
            header.y,
            CLOSE_BUTTON_WIDTH.min(header.width),
            header.height.min(1),
        );

        Self {
            backdrop: area,
            panel,
            header,
            close_button,
            body,
        }
    }

    /// Returns the innermost region containing the given point
    ///
    /// `None` when the point is outside the overlay entirely.
    pub fn region_at(&self, x: u16, y: u16) -> Option<ModalRegion> {
        if contains(&self.close_button, x, y) {
            return Some(ModalRegion::CloseButton);
        }
        if contains(&self.panel, x, y) {
            return Some(ModalRegion::Panel);
        }
        if contains(&self.backdrop, x, y) {
            return Some(ModalRegion::Backdrop);
        }
        None
    }
}
