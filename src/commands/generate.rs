//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::generator::{GenerateSummary, Generator};
use crate::Blog;

/// Generate the static site
pub fn run(blog: &Blog) -> Result<GenerateSummary> {
    let start = Instant::now();

    let provider = blog.provider();
    let summary = Generator::new(blog)?.generate(&provider)?;

    tracing::info!(
        "Generated {} posts and copied {} assets in {:.2}s",
        summary.posts,
        summary.assets,
        start.elapsed().as_secs_f64()
    );

    Ok(summary)
}

/// Watch posts, assets and config, regenerating on change
///
/// Blocks the calling thread until the watcher goes away.
pub fn watch(blog: &Blog) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        match res {
            Ok(event) => {
                if tx.send(event).is_err() {
                    tracing::debug!("Watch loop stopped, dropping file event");
                }
            }
            Err(e) => tracing::warn!("Watch error: {}", e),
        }
    })?;

    for dir in [&blog.posts_dir, &blog.assets_dir] {
        if dir.exists() {
            watcher.watch(dir, notify::RecursiveMode::Recursive)?;
        }
    }

    let config_path = blog.base_dir.join(crate::CONFIG_FILE);
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Debounce: only rebuild if more than 500ms since last rebuild
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    // Config edits need a fresh Blog, not the one we started with
                    let result = Blog::new(&blog.base_dir).and_then(|b| run(&b));
                    if let Err(e) = result {
                        tracing::error!("Generation failed: {}", e);
                    }
                    last_rebuild = Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
