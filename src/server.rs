//! Minimal HTTP layer: a liveness endpoint and the static front-end.
//!
//! `tiny_http` accepts on a blocking loop, so `serve` parks it on the tokio
//! blocking pool.

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{debug, info, warn};
use tiny_http::{Header, Method, Request, Response, Server};

use crate::error::{MicroDsiError, Result};

pub const HEALTH_PATH: &str = "/api/health";
pub const HEALTH_BODY: &str = r#"{"status":"ok"}"#;
pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOptions {
    /// `host:port` to bind
    pub address: String,
    /// Directory served for every non-API path
    pub static_root: PathBuf,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:3000".to_string(),
            static_root: PathBuf::from("public"),
        }
    }
}

/// Where a request ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Health,
    File(PathBuf),
    NotFound,
    MethodNotAllowed,
}

/// Decide how to answer `method url` against `root`.
pub fn route(method: &Method, url: &str, root: &Path) -> Route {
    if !matches!(method, Method::Get | Method::Head) {
        return Route::MethodNotAllowed;
    }
    let path = strip_query(url);
    if path == HEALTH_PATH {
        return Route::Health;
    }
    match resolve_path(root, path) {
        Some(file) if file.is_file() => Route::File(file),
        _ => Route::NotFound,
    }
}

fn strip_query(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or_default()
}

/// Map a URL path onto a file under `root`.
///
/// Only plain path segments are accepted; `..`, roots and prefixes yield
/// `None`. The root and directories map to their `index.html`.
pub fn resolve_path(root: &Path, url_path: &str) -> Option<PathBuf> {
    let relative = strip_query(url_path).trim_start_matches('/');
    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(segment) => resolved.push(segment),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if relative.is_empty() || relative.ends_with('/') || resolved.is_dir() {
        resolved.push(INDEX_FILE);
    }
    Some(resolved)
}

/// Content type by file extension.
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json",
        "md" => "text/markdown; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn content_type_header(value: &str) -> Option<Header> {
    Header::from_bytes(&b"Content-Type"[..], value.as_bytes()).ok()
}

fn with_content_type<R: std::io::Read>(response: Response<R>, value: &str) -> Response<R> {
    match content_type_header(value) {
        Some(header) => response.with_header(header),
        None => response,
    }
}

pub struct StaticServer {
    server: Server,
    root: PathBuf,
}

impl StaticServer {
    pub fn bind(options: &ServerOptions) -> Result<Self> {
        let server = Server::http(options.address.as_str())
            .map_err(|e| MicroDsiError::Server(format!("failed to bind {}: {}", options.address, e)))?;
        Ok(Self {
            server,
            root: options.static_root.clone(),
        })
    }

    /// Bound port, useful after binding to port 0.
    pub fn port(&self) -> Option<u16> {
        self.server.server_addr().to_ip().map(|addr| addr.port())
    }

    /// Serve until `unblock` is called.
    pub fn run(&self) {
        for request in self.server.incoming_requests() {
            self.handle(request);
        }
        debug!("Static server stopped accepting");
    }

    /// Stop a running `run` loop.
    pub fn unblock(&self) {
        self.server.unblock();
    }

    fn handle(&self, request: Request) {
        let url = request.url().to_string();
        let method = request.method().clone();
        let route = route(&method, &url, &self.root);
        debug!("{} {} -> {:?}", method, url, route);

        let result = match route {
            Route::Health => request.respond(with_content_type(
                Response::from_string(HEALTH_BODY),
                "application/json",
            )),
            Route::File(path) => match fs::read(&path) {
                Ok(bytes) => request.respond(with_content_type(Response::from_data(bytes), content_type(&path))),
                Err(e) => {
                    warn!("Could not read {}: {}", path.display(), e);
                    request.respond(Response::from_string("Not Found").with_status_code(404))
                }
            },
            Route::NotFound => request.respond(Response::from_string("Not Found").with_status_code(404)),
            Route::MethodNotAllowed => {
                request.respond(Response::from_string("Method Not Allowed").with_status_code(405))
            }
        };

        if let Err(e) = result {
            warn!("Failed to respond to {}: {}", url, e);
        }
    }
}

/// Bind and serve until the process ends.
pub async fn serve(options: ServerOptions) -> Result<()> {
    let server = StaticServer::bind(&options)?;
    info!(
        "Serving {} on http://{}",
        options.static_root.display(),
        options.address
    );
    tokio::task::spawn_blocking(move || server.run())
        .await
        .map_err(|e| MicroDsiError::Server(format!("server task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpStream;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>MicroDSI</h1>").unwrap();
        fs::create_dir(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css").join("app.css"), "body{}").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs").join("index.html"), "docs").unwrap();
        dir
    }

    #[test]
    fn test_root_maps_to_index() {
        let root = Path::new("/srv/public");
        assert_eq!(resolve_path(root, "/"), Some(root.join("index.html")));
        assert_eq!(resolve_path(root, ""), Some(root.join("index.html")));
        assert_eq!(resolve_path(root, "/a/b.css?v=2"), Some(root.join("a").join("b.css")));
    }

    #[test]
    fn test_traversal_rejected() {
        let root = Path::new("/srv/public");
        assert_eq!(resolve_path(root, "/../etc/passwd"), None);
        assert_eq!(resolve_path(root, "/css/../../secret"), None);
    }

    #[test]
    fn test_directory_maps_to_index() {
        let dir = site();
        assert_eq!(
            resolve_path(dir.path(), "/docs"),
            Some(dir.path().join("docs").join("index.html"))
        );
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("app.JS")), "application/javascript; charset=utf-8");
        assert_eq!(content_type(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("entregable.md")), "text/markdown; charset=utf-8");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }

    #[test]
    fn test_routes() {
        let dir = site();
        let root = dir.path();
        assert_eq!(route(&Method::Get, "/api/health", root), Route::Health);
        assert_eq!(route(&Method::Head, "/api/health?x=1", root), Route::Health);
        assert_eq!(route(&Method::Get, "/", root), Route::File(root.join("index.html")));
        assert_eq!(route(&Method::Get, "/missing.js", root), Route::NotFound);
        assert_eq!(route(&Method::Get, "/../index.html", root), Route::NotFound);
        assert_eq!(route(&Method::Post, "/", root), Route::MethodNotAllowed);
    }

    fn fetch(port: u16, request_line: &str) -> String {
        let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
        write!(stream, "{}\r\nHost: localhost\r\nConnection: close\r\n\r\n", request_line).unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    #[test]
    fn test_serves_health_and_files() {
        let dir = site();
        let options = ServerOptions {
            address: "127.0.0.1:0".to_string(),
            static_root: dir.path().to_path_buf(),
        };
        let server = Arc::new(StaticServer::bind(&options).unwrap());
        let port = server.port().unwrap();
        let worker = {
            let server = Arc::clone(&server);
            thread::spawn(move || server.run())
        };

        let health = fetch(port, "GET /api/health HTTP/1.1");
        assert!(health.starts_with("HTTP/1.1 200"));
        assert!(health.contains("application/json"));
        assert!(health.ends_with(HEALTH_BODY));

        let index = fetch(port, "GET / HTTP/1.1");
        assert!(index.contains("text/html"));
        assert!(index.ends_with("<h1>MicroDSI</h1>"));

        assert!(fetch(port, "GET /nope.css HTTP/1.1").starts_with("HTTP/1.1 404"));
        assert!(fetch(port, "DELETE / HTTP/1.1").starts_with("HTTP/1.1 405"));

        server.unblock();
        worker.join().unwrap();
    }
}
