//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Store modal
    // ─────────────────────────────────────────────────────────────────────────
    /// Set the store visibility flag
    OpenStore,
    /// Clear the store visibility flag (sent by the modal's dismissal callback)
    CloseStore,
    /// An image in the catalog failed to load
    ImageLoadFailed(u32),

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll catalog up one row
    ScrollUp,
    /// Scroll catalog down one row
    ScrollDown,
    /// Scroll catalog up one page
    PageUp,
    /// Scroll catalog down one page
    PageDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenStore => write!(f, "OpenStore"),
            Action::CloseStore => write!(f, "CloseStore"),
            Action::ImageLoadFailed(id) => write!(f, "ImageLoadFailed({})", id),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
        }
    }
}
