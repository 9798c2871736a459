//! Development server for the generated site

use anyhow::Result;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Blog;

/// Characters that must be escaped inside a URI path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Server state
struct ServerState {
    public_dir: PathBuf,
}

/// Start the development server
pub async fn start(blog: &Blog, ip: &str, port: u16, watch: bool) -> Result<()> {
    let state = Arc::new(ServerState {
        public_dir: blog.public_dir.clone(),
    });

    let app = Router::new()
        .fallback(fallback_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    if watch {
        println!("Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if watch {
        let blog = blog.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_regenerate(&blog) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Regenerate the site whenever posts, assets or config change
fn watch_and_regenerate(blog: &Blog) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Debounce to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&blog.posts_dir, &blog.assets_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = blog.base_dir.join(crate::CONFIG_FILE);
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|e| {
                    let path = e.path.to_string_lossy();
                    !path.contains(".DS_Store") && !path.ends_with('~')
                });
                if !relevant {
                    continue;
                }

                for event in &events {
                    tracing::info!("File changed: {}", event.path.display());
                }

                match Blog::new(&blog.base_dir).and_then(|b| b.generate()) {
                    Ok(summary) => tracing::info!("Regenerated {} posts", summary.posts),
                    Err(e) => tracing::error!("Generation failed: {}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Serve generated files, mapping routes like `/posts/a` to `posts/a/index.html`
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let Some(file) = resolve_path(&state.public_dir, request.uri().path()) else {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    };

    // Point the request at the resolved file and let tower-http serve it
    let (mut parts, body) = request.into_parts();
    parts.uri = match file.parse() {
        Ok(uri) => uri,
        Err(_) => return (StatusCode::BAD_REQUEST, "Bad path").into_response(),
    };
    let request = Request::from_parts(parts, body);

    let mut service = ServeDir::new(&state.public_dir);
    match service.try_call(request).await {
        Ok(response) => response.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

/// Map a request path onto a file in the public directory
///
/// Returns the file's path relative to the public directory, as an
/// absolute URL path. Paths that try to leave the directory resolve to
/// nothing.
fn resolve_path(public_dir: &Path, request_path: &str) -> Option<String> {
    let decoded = percent_decode_str(request_path)
        .decode_utf8()
        .ok()?;
    let clean = decoded.trim_matches('/');

    if clean.split('/').any(|segment| segment == "..") {
        return None;
    }

    let candidates = if clean.is_empty() {
        vec!["index.html".to_string()]
    } else {
        vec![
            format!("{}/index.html", clean),
            clean.to_string(),
            format!("{}.html", clean),
        ]
    };

    candidates
        .into_iter()
        .find(|relative| public_dir.join(relative).is_file())
        .map(|relative| {
            // Re-encode so the URI parses; ServeDir decodes it again
            let encoded: String = relative
                .split('/')
                .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
                .collect::<Vec<_>>()
                .join("/");
            format!("/{}", encoded)
        })
}
