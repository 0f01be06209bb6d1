use thiserror::Error;

/// Top-level error type used across the entire workspace.
#[derive(Debug, Error)]
pub enum ScrollError {
    /// No element in the document carries the requested id.
    #[error("host element '{0}' not found")]
    HostNotFound(String),

    #[error("icon markup error: {0}")]
    IconMarkup(String),

    #[error("icon markup has no shape with id '{shape_id}'")]
    ShapeNotFound { shape_id: String },

    /// A style value could not be interpreted (e.g. `right: auto` read as px).
    #[error("invalid value for '{property}': '{value}'")]
    InvalidValue { property: String, value: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = ScrollError> = std::result::Result<T, E>;
