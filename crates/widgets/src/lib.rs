//! The scroll-to button widget and its icon variants.

pub mod button;
pub mod icon;

pub use button::ScrollToButton;
pub use icon::{ButtonIcon, IconDocument, ViewBox, FILL_TARGET_ID};
