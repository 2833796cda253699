//! UI Components
//!
//! Each component encapsulates its own event handling and rendering logic.
//! Components communicate through Actions and callbacks rather than direct
//! state mutation.

pub mod help_modal;
pub mod hero_carousel;
pub mod layout;

pub use help_modal::{HelpModal, HelpModalProps};
pub use hero_carousel::HeroCarousel;
pub use layout::calculate_home_layout;
