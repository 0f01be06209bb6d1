//! Platform metrics: root-scoped style properties, scrollbar width, and
//! integer reads of element properties.

pub mod px;

pub use px::{format_px, parse_integer};

use scroll_core::{Result, ScrollError};

/// Read/write access to the platform's style system.
///
/// Implemented by whatever owns the page: the retained document in
/// `scroll-renderer`, or a stub in tests.
pub trait PlatformMetrics {
    /// Value of a property declared on the root scope (e.g. `--default-box-shadow`).
    fn root_property(&self, name: &str) -> Option<String>;

    /// Declare a property on the root scope, replacing any previous value.
    fn set_root_property(&mut self, name: &str, value: &str);

    /// Width of the vertical scrollbar in px (0 when there is none).
    fn scrollbar_width(&self) -> i32;

    /// Value of `name` on the element `element_id`, if both exist.
    fn property(&self, element_id: &str, name: &str) -> Option<String>;
}

/// Root property, trimmed, or `None` when unset or blank.
pub fn root_value(metrics: &impl PlatformMetrics, name: &str) -> Option<String> {
    metrics
        .root_property(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read `name` off `element_id` and parse its leading integer (`"16px"` → 16).
pub fn property_as_integer(
    metrics: &impl PlatformMetrics,
    element_id: &str,
    name: &str,
) -> Result<i32> {
    let value = metrics
        .property(element_id, name)
        .ok_or_else(|| ScrollError::HostNotFound(element_id.to_string()))?;
    parse_integer(&value).ok_or(ScrollError::InvalidValue {
        property: name.to_string(),
        value,
    })
}
