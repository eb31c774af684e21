//! Watch mode: rebuild whenever content, static assets or the config change.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use tokio::sync::mpsc;

use super::build_site;
use crate::config::{reload_config, ResolvedConfig};
use crate::render::RenderContext;

/// Paths whose changes trigger a rebuild
#[derive(Debug, Clone, PartialEq, Eq)]
struct WatchTargets {
    content: Option<PathBuf>,
    config_file: Option<PathBuf>,
    static_dir: Option<PathBuf>,
    out_dir: PathBuf,
}

/// What a changed path means for the watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Config,
    Site,
    Ignored,
}

fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

impl WatchTargets {
    fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            content: config.content.as_deref().map(absolute),
            config_file: config.config_file.as_deref().map(absolute),
            static_dir: config
                .static_dir
                .is_dir()
                .then(|| absolute(&config.static_dir)),
            out_dir: absolute(&config.out_dir),
        }
    }

    fn classify(&self, path: &Path) -> Change {
        // Our own output must never retrigger a build
        if path.starts_with(&self.out_dir) {
            return Change::Ignored;
        }
        if self.config_file.as_deref() == Some(path) {
            return Change::Config;
        }
        if self.content.as_deref() == Some(path) {
            return Change::Site;
        }
        if let Some(static_dir) = &self.static_dir {
            if path.starts_with(static_dir) {
                return Change::Site;
            }
        }
        Change::Ignored
    }

    /// Directories to register with the watcher. Files are watched through
    /// their parent so editors that replace files on save are still seen.
    fn watch_list(&self) -> Vec<(PathBuf, RecursiveMode)> {
        let mut list = Vec::new();
        for file in [&self.content, &self.config_file].into_iter().flatten() {
            if let Some(parent) = file.parent() {
                list.push((parent.to_path_buf(), RecursiveMode::NonRecursive));
            }
        }
        if let Some(static_dir) = &self.static_dir {
            list.push((static_dir.clone(), RecursiveMode::Recursive));
        }
        list.dedup_by(|a, b| a.0 == b.0);
        list
    }
}

async fn rebuild(config: &ResolvedConfig) {
    if let Err(e) = build_site(config, &RenderContext::now()).await {
        tracing::error!("Build failed: {:#}", e);
    }
}

/// Build once, then rebuild on changes until Ctrl-C.
///
/// `out` and `content` are the command-line overrides, re-applied when the
/// config file changes and is reloaded.
pub async fn watch(
    config: ResolvedConfig,
    out: Option<PathBuf>,
    content: Option<PathBuf>,
) -> Result<()> {
    let mut config = config;
    rebuild(&config).await;

    let (tx, mut rx) = mpsc::channel::<DebounceEventResult>(16);
    let mut debouncer = new_debouncer(
        Duration::from_millis(300),
        move |result: DebounceEventResult| {
            let _ = tx.blocking_send(result);
        },
    )?;

    let mut targets = WatchTargets::from_config(&config);
    for (path, mode) in targets.watch_list() {
        debouncer.watcher().watch(&path, mode)?;
        tracing::info!("Watching {}", path.display());
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Watcher stopping...");
                break;
            }
            received = rx.recv() => {
                let Some(result) = received else {
                    tracing::error!("Watcher channel disconnected");
                    break;
                };

                let events = match result {
                    Ok(events) => events,
                    Err(e) => {
                        tracing::warn!("Watcher error: {:?}", e);
                        continue;
                    }
                };

                let mut change = Change::Ignored;
                for event in &events {
                    match targets.classify(&event.path) {
                        Change::Config => change = Change::Config,
                        Change::Site if change == Change::Ignored => change = Change::Site,
                        _ => {}
                    }
                }

                match change {
                    Change::Config => {
                        tracing::info!("Config changed, reloading");
                        match reload_config() {
                            Ok(reloaded) => {
                                config = reloaded.with_overrides(out.clone(), content.clone());
                                let previous = targets.watch_list();
                                targets = WatchTargets::from_config(&config);
                                for (path, mode) in targets.watch_list() {
                                    if previous.iter().any(|(p, _)| *p == path) {
                                        continue;
                                    }
                                    match debouncer.watcher().watch(&path, mode) {
                                        Ok(()) => tracing::info!("Watching {}", path.display()),
                                        Err(e) => {
                                            tracing::warn!("Cannot watch {}: {}", path.display(), e)
                                        }
                                    }
                                }
                            }
                            Err(e) => tracing::warn!("Keeping previous config: {:#}", e),
                        }
                        rebuild(&config).await;
                    }
                    Change::Site => rebuild(&config).await,
                    Change::Ignored => {}
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> WatchTargets {
        WatchTargets {
            content: Some(PathBuf::from("/site/content.yaml")),
            config_file: Some(PathBuf::from("/site/.folioflix/config.yaml")),
            static_dir: Some(PathBuf::from("/site/public")),
            out_dir: PathBuf::from("/site/public/dist"),
        }
    }

    #[test]
    fn test_classify() {
        let targets = targets();

        assert_eq!(targets.classify(Path::new("/site/content.yaml")), Change::Site);
        assert_eq!(targets.classify(Path::new("/site/public/resume.pdf")), Change::Site);
        assert_eq!(
            targets.classify(Path::new("/site/.folioflix/config.yaml")),
            Change::Config
        );
        assert_eq!(targets.classify(Path::new("/site/notes.md")), Change::Ignored);
        // Output nested inside the static dir is ignored
        assert_eq!(
            targets.classify(Path::new("/site/public/dist/index.html")),
            Change::Ignored
        );
    }

    #[test]
    fn test_watch_list() {
        let list = targets().watch_list();
        let paths: Vec<&Path> = list.iter().map(|(p, _)| p.as_path()).collect();

        assert_eq!(
            paths,
            vec![
                Path::new("/site"),
                Path::new("/site/.folioflix"),
                Path::new("/site/public"),
            ]
        );
    }

    #[test]
    fn test_builtin_content_watches_nothing_extra() {
        let targets = WatchTargets {
            content: None,
            config_file: None,
            static_dir: None,
            out_dir: PathBuf::from("/site/dist"),
        };
        assert!(targets.watch_list().is_empty());
    }
}
