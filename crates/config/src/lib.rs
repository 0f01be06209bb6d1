pub mod schema;
pub mod watcher;

pub use schema::{
    ButtonsConfig, HostLayout, PageConfig, ScrollConfig, ThemeConfig, WiringConfig,
};
pub use watcher::ConfigWatcher;

use scroll_core::{Result, ScrollError};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `ScrollConfig::default()` if
/// the file doesn't exist so the buttons always have sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<ScrollConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ScrollConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ScrollError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<ScrollConfig> {
    toml::from_str(raw).map_err(|e| ScrollError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("scroll-to").join("scroll-to.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.buttons.top, "scroll-to-top-button");
        assert_eq!(cfg.wiring.offset, 100);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[theme]\naccent_color = \"rgba(255, 0, 0, 0.5)\"\n\n[wiring]\noffset = 120"
        )
        .unwrap();

        let cfg = load(file.path()).unwrap();
        assert_eq!(cfg.theme.accent_color, "rgba(255, 0, 0, 0.5)");
        assert_eq!(cfg.theme.transition_duration, "0.3s");
        assert_eq!(cfg.wiring.offset, 120);
        assert_eq!(cfg.page.scrollbar_width, 15);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let err = parse("[wiring\noffset = 1").unwrap_err();
        assert!(matches!(err, ScrollError::Config(_)));
    }
}
