use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Watches the config file and fires once per relevant change.
///
/// The parent directory is watched rather than the file itself: editors that
/// save by rename would otherwise drop the watch after the first write, and
/// the file may not exist yet when the watcher starts.
pub struct ConfigWatcher {
    path: PathBuf,
    _inner: Option<RecommendedWatcher>,
}

impl ConfigWatcher {
    /// Start watching `path`.
    ///
    /// Returns the handle (drop it to stop watching) and a receiver that
    /// yields `()` whenever the file is created or modified.  When the
    /// directory cannot be watched the receiver simply never fires.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let path = path.as_ref().to_path_buf();
        let (tx, rx) = mpsc::channel(1);

        let filter_path = path.clone();
        let handler = move |res: notify::Result<Event>| match res {
            Ok(event) if touches(&event, &filter_path) => {
                // A full channel already holds a pending reload.
                let _ = tx.try_send(());
            }
            Ok(event) => debug!("Ignoring unrelated fs event: {:?}", event.kind),
            Err(e) => warn!("Watcher error: {e}"),
        };

        let inner = match start(&path, handler) {
            Ok(w) => {
                info!("Watching config file: {}", path.display());
                Some(w)
            }
            Err(e) => {
                warn!("Live reload disabled for '{}': {e}", path.display());
                None
            }
        };

        (Self { path, _inner: inner }, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn start<F>(path: &Path, handler: F) -> notify::Result<RecommendedWatcher>
where
    F: notify::EventHandler,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut watcher = RecommendedWatcher::new(
        handler,
        Config::default().with_poll_interval(Duration::from_secs(2)),
    )?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

/// Whether `event` is a write/create that concerns `path`.
fn touches(event: &Event, path: &Path) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == path.file_name())
}
