//! scroll-to: floating "scroll to top / bottom" buttons on a Wayland overlay.
//!
//! Run with:  `RUST_LOG=debug scroll-to`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("scroll-to v{} starting", env!("CARGO_PKG_VERSION"));

    scroll_wayland::run()
}
