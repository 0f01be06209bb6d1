//! Retained style document for the scroll buttons.
//!
//! Plays the part of the page: host elements found by id, inline styles with
//! declared transitions, a root property scope, and the viewport metrics the
//! buttons position themselves against.  [`ElementSurface`] binds a button
//! to one host; the Wayland surface reads the resolved styles back to draw.

pub mod document;
pub mod style;
pub mod surface;

pub use document::{Document, NodeId, SharedDocument};
pub use surface::ElementSurface;
