pub mod error;
pub mod event;
pub mod geometry;
pub mod surface;

pub use error::{Result, ScrollError};
pub use event::{ButtonId, Message, PointerEvent};
pub use geometry::{Point, Rect};
pub use surface::{ButtonSurface, Layers, PressLook};
