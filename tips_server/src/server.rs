//! Minimal HTTP/1.1 server for the tips page.
//!
//! The page is rendered once when the server is built and the same bytes are
//! returned for every request. Images are read from `assets_dir` on demand.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use energy_tips_page::render_page;
use energy_tips_page::types::AssetRef;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Upper bound on the request line plus headers read from one connection.
const MAX_REQUEST_HEAD: u64 = 8 * 1024;

/// Socket read/write timeout; an idle client holds the accept loop at most this long.
const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Response status codes the server uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    Found,
    Forbidden,
    NotFound,
    MethodNotAllowed,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Found => 302,
            Status::Forbidden => 403,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
        }
    }

    fn status_line(self) -> &'static str {
        match self {
            Status::Ok => "HTTP/1.1 200 OK",
            Status::Found => "HTTP/1.1 302 Found",
            Status::Forbidden => "HTTP/1.1 403 Forbidden",
            Status::NotFound => "HTTP/1.1 404 Not Found",
            Status::MethodNotAllowed => "HTTP/1.1 405 Method Not Allowed",
        }
    }
}

/// A routed response, before it is written to the socket.
#[derive(Clone, Debug)]
pub struct Response {
    pub status: Status,
    pub content_type: &'static str,
    pub body: Arc<[u8]>,
    pub location: Option<String>,
    /// HEAD requests keep `Content-Length` but send no body
    pub head_only: bool,
}

impl Response {
    fn new(status: Status, content_type: &'static str, body: Arc<[u8]>) -> Self {
        Self {
            status,
            content_type,
            body,
            location: None,
            head_only: false,
        }
    }

    fn text(status: Status, body: &'static str) -> Self {
        Self::new(status, "text/plain", Arc::from(body.as_bytes()))
    }

    fn redirect(to: &str) -> Self {
        Self {
            location: Some(to.to_string()),
            ..Self::text(Status::Found, "found")
        }
    }

    /// Serialize headers and (unless HEAD) the body.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        let mut header = format!(
            "{}\r\nContent-Type: {}\r\nContent-Length: {}\r\n",
            self.status.status_line(),
            self.content_type,
            self.body.len()
        );
        if let Some(location) = &self.location {
            header.push_str(&format!("Location: {}\r\n", location));
        }
        header.push_str("Connection: close\r\n\r\n");

        out.write_all(header.as_bytes())?;
        if !self.head_only {
            out.write_all(&self.body)?;
        }
        out.flush()
    }
}

/// Routes requests to the pre-rendered page and the image directory.
#[derive(Clone, Debug)]
pub struct PageServer {
    config: ServerConfig,
    page: Arc<[u8]>,
    assets_root: Option<PathBuf>,
    io_timeout: Duration,
}

impl PageServer {
    /// Render the page and resolve the image directory.
    ///
    /// A missing image directory is not fatal: the page is still served and
    /// browsers fall back to the alt text.
    pub fn new(config: ServerConfig) -> Self {
        let page: Arc<[u8]> = Arc::from(render_page(&config.page_assets()).into_bytes());

        let assets_root = match &config.assets_dir {
            Some(dir) => match dir.canonicalize() {
                Ok(root) => {
                    for asset in AssetRef::ALL {
                        if !root.join(asset.file_name()).is_file() {
                            warn!(file = asset.file_name(), dir = %root.display(), "page image missing");
                        }
                    }
                    Some(root)
                }
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "assets directory unavailable, images will 404");
                    None
                }
            },
            None => {
                warn!("no assets directory configured, images will 404");
                None
            }
        };

        Self {
            config,
            page,
            assets_root,
            io_timeout: IO_TIMEOUT,
        }
    }

    /// Override the per-connection socket timeout.
    pub fn with_io_timeout(mut self, timeout: Duration) -> Self {
        self.io_timeout = timeout;
        self
    }

    /// Route one request line (`METHOD target VERSION`).
    pub fn respond(&self, request_line: &str) -> Response {
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or("");
        let target = parts.next().unwrap_or("/");
        let is_head = method.eq_ignore_ascii_case("head");

        if !(method.eq_ignore_ascii_case("get") || is_head) {
            return Response::text(Status::MethodNotAllowed, "method not allowed");
        }

        let (path, _) = target.split_once('?').unwrap_or((target, ""));

        let mut response = self.route(path);
        response.head_only = is_head;
        response
    }

    fn route(&self, path: &str) -> Response {
        let page_route = self.config.route.trim_end_matches('/');
        let trimmed = path.trim_end_matches('/');

        if trimmed == page_route {
            return Response::new(Status::Ok, "text/html; charset=utf-8", self.page.clone());
        }
        if path == "/" {
            return Response::redirect(&self.config.route);
        }

        let asset_prefix = format!("{}/", self.config.asset_base.trim_end_matches('/'));
        if let Some(name) = path.strip_prefix(&asset_prefix) {
            return self.serve_asset(name);
        }

        Response::text(Status::NotFound, "not found")
    }

    fn serve_asset(&self, encoded_name: &str) -> Response {
        let Some(root) = &self.assets_root else {
            return Response::text(Status::NotFound, "not found");
        };
        let name = url_decode_component(encoded_name).unwrap_or_else(|| encoded_name.to_string());

        let Ok(canon) = root.join(&name).canonicalize() else {
            return Response::text(Status::NotFound, "not found");
        };
        if !canon.starts_with(root) {
            return Response::text(Status::Forbidden, "forbidden");
        }
        if !canon.is_file() {
            return Response::text(Status::NotFound, "not found");
        }

        match fs::read(&canon) {
            Ok(bytes) => Response::new(Status::Ok, content_type_for(&canon), Arc::from(bytes)),
            Err(e) => {
                warn!(path = %canon.display(), error = %e, "failed to read asset");
                Response::text(Status::NotFound, "not found")
            }
        }
    }

    /// Open the listener and handle connections on a background thread.
    pub fn bind(self) -> Result<RunningServer, ServerError> {
        let addr = self.config.listen_addr();
        let listener =
            TcpListener::bind(&addr).map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener.local_addr()?;

        info!(
            "serving {} at http://{}{}",
            energy_tips_page::types::PAGE_TITLE,
            local_addr,
            self.config.route
        );

        let handle = thread::spawn(move || {
            for mut stream in listener.incoming().flatten() {
                if let Err(e) = self.handle_connection(&mut stream) {
                    debug!(error = %e, "connection dropped");
                }
            }
        });

        Ok(RunningServer { local_addr, handle })
    }

    fn handle_connection(&self, stream: &mut TcpStream) -> io::Result<()> {
        stream.set_read_timeout(Some(self.io_timeout))?;
        stream.set_write_timeout(Some(self.io_timeout))?;

        let request_line =
            read_request_head(io::BufReader::new((&*stream).take(MAX_REQUEST_HEAD)))?;

        let response = self.respond(request_line.trim());
        debug!(
            request = request_line.trim(),
            status = response.status.code(),
            "request"
        );
        response.write_to(stream)
    }
}

/// Read the request line and skip the headers up to the blank line.
///
/// Headers are not used; they are drained so the client sees a clean close.
/// The caller bounds `reader`, so an unterminated header ends at EOF.
fn read_request_head(mut reader: impl BufRead) -> io::Result<String> {
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    let mut header = String::new();
    while reader.read_line(&mut header)? > 0 && header != "\r\n" && header != "\n" {
        header.clear();
    }
    Ok(request_line)
}

/// Handle to a server accepting connections in the background.
#[derive(Debug)]
pub struct RunningServer {
    local_addr: SocketAddr,
    handle: thread::JoinHandle<()>,
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Block until the accept loop ends.
    pub fn join(self) -> thread::Result<()> {
        self.handle.join()
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("css") => "text/css; charset=utf-8",
        _ => "application/octet-stream",
    }
}

pub(crate) fn url_decode_component(input: &str) -> Option<String> {
    let mut out = Vec::with_capacity(input.len());
    let mut iter = input.bytes();
    while let Some(b) = iter.next() {
        if b == b'%' {
            let hex = [iter.next()?, iter.next()?];
            let s = std::str::from_utf8(&hex).ok()?;
            out.push(u8::from_str_radix(s, 16).ok()?);
        } else {
            out.push(b);
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    fn body_str(response: &Response) -> String {
        String::from_utf8_lossy(&response.body).into_owned()
    }

    fn server_with_assets() -> (TempDir, PageServer) {
        let temp = TempDir::new().expect("temp dir");
        let assets = temp.path().join("images");
        fs::create_dir_all(&assets).expect("create images");
        fs::write(assets.join("EnergySavingTipsPic1.png"), b"\x89PNG fake").expect("write png");
        fs::write(temp.path().join("secret.txt"), b"nope").expect("write secret");

        let config = ServerConfig {
            port: 0,
            assets_dir: Some(assets),
            ..Default::default()
        };
        (temp, PageServer::new(config))
    }

    #[test]
    fn serves_page_at_route() {
        let server = PageServer::new(ServerConfig::default());
        let response = server.respond("GET /energy-saving-tips HTTP/1.1");

        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.content_type, "text/html; charset=utf-8");
        assert!(body_str(&response).starts_with("<!DOCTYPE html>"));
        assert!(body_str(&response).contains("GHG Emissions from Heat Pumps and Furnaces"));
    }

    #[test]
    fn page_is_identical_across_requests() {
        let server = PageServer::new(ServerConfig::default());
        let first = server.respond("GET /energy-saving-tips HTTP/1.1");
        let second = server.respond("GET /energy-saving-tips/?utm=x HTTP/1.1");
        assert_eq!(first.body, second.body);
    }

    #[test]
    fn root_redirects_to_route() {
        let server = PageServer::new(ServerConfig::default());
        let response = server.respond("GET / HTTP/1.1");

        assert_eq!(response.status, Status::Found);
        assert_eq!(response.location.as_deref(), Some("/energy-saving-tips"));
    }

    #[test]
    fn page_can_be_mounted_at_root() {
        let server = PageServer::new(ServerConfig {
            route: "/".into(),
            ..Default::default()
        });
        assert_eq!(server.respond("GET / HTTP/1.1").status, Status::Ok);
    }

    #[test]
    fn rejects_other_methods() {
        let server = PageServer::new(ServerConfig::default());
        let response = server.respond("POST /energy-saving-tips HTTP/1.1");
        assert_eq!(response.status, Status::MethodNotAllowed);
    }

    #[test]
    fn head_keeps_length_without_body() {
        let server = PageServer::new(ServerConfig::default());
        let response = server.respond("HEAD /energy-saving-tips HTTP/1.1");
        assert!(response.head_only);

        let mut out = Vec::new();
        response.write_to(&mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains(&format!("Content-Length: {}\r\n", response.body.len())));
        assert!(text.ends_with("\r\n\r\n"));
    }

    #[test]
    fn serves_images_from_assets_dir() {
        let (_temp, server) = server_with_assets();
        let response = server.respond("GET /assets/EnergySavingTipsPic1.png HTTP/1.1");

        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.content_type, "image/png");
        assert_eq!(&response.body[..], b"\x89PNG fake");
    }

    #[test]
    fn missing_image_is_404() {
        let (_temp, server) = server_with_assets();
        let response = server.respond("GET /assets/EnergySavingTipsPic2.png HTTP/1.1");
        assert_eq!(response.status, Status::NotFound);
    }

    #[test]
    fn traversal_outside_assets_is_forbidden() {
        let (_temp, server) = server_with_assets();

        let plain = server.respond("GET /assets/../secret.txt HTTP/1.1");
        assert_eq!(plain.status, Status::Forbidden);

        let encoded = server.respond("GET /assets/%2e%2e/secret.txt HTTP/1.1");
        assert_eq!(encoded.status, Status::Forbidden);
    }

    #[test]
    fn images_404_without_assets_dir() {
        let server = PageServer::new(ServerConfig::default());
        let response = server.respond("GET /assets/EnergySavingTipsPic1.png HTTP/1.1");
        assert_eq!(response.status, Status::NotFound);
    }

    #[test]
    fn missing_assets_dir_still_serves_page() {
        let temp = TempDir::new().expect("temp dir");
        let server = PageServer::new(ServerConfig {
            assets_dir: Some(temp.path().join("missing")),
            ..Default::default()
        });

        assert_eq!(
            server.respond("GET /energy-saving-tips HTTP/1.1").status,
            Status::Ok
        );
        assert_eq!(
            server
                .respond("GET /assets/EnergySavingTipsPic1.png HTTP/1.1")
                .status,
            Status::NotFound
        );
    }

    #[test]
    fn unknown_path_is_404() {
        let server = PageServer::new(ServerConfig::default());
        assert_eq!(
            server.respond("GET /calc HTTP/1.1").status,
            Status::NotFound
        );
    }

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(url_decode_component("a%20b").as_deref(), Some("a b"));
        assert_eq!(url_decode_component("%C2%B0C").as_deref(), Some("°C"));
        assert_eq!(url_decode_component("bad%2"), None);
    }

    #[test]
    fn request_head_is_read_up_to_blank_line() {
        let raw = b"GET /energy-saving-tips HTTP/1.1\r\nHost: x\r\n\r\nleftover";
        let line = read_request_head(io::Cursor::new(&raw[..])).expect("read");
        assert_eq!(line, "GET /energy-saving-tips HTTP/1.1\r\n");
    }

    #[test]
    fn endless_header_stops_at_limit() {
        let mut raw = b"GET /energy-saving-tips HTTP/1.1\r\nX-Fill: ".to_vec();
        raw.extend(std::iter::repeat_n(b'a', 64 * 1024));

        let mut reader = io::BufReader::new(io::Cursor::new(raw).take(MAX_REQUEST_HEAD));
        let line = read_request_head(&mut reader).expect("read");
        assert_eq!(line.trim(), "GET /energy-saving-tips HTTP/1.1");
        assert_eq!(reader.into_inner().limit(), 0);
    }

    #[test]
    fn idle_client_does_not_block_others() {
        let server = PageServer::new(ServerConfig {
            port: 0,
            ..Default::default()
        })
        .with_io_timeout(Duration::from_millis(200));
        let running = server.bind().expect("bind");

        let _idle = TcpStream::connect(running.local_addr()).expect("connect idle");

        let mut stream = TcpStream::connect(running.local_addr()).expect("connect");
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("client timeout");
        stream
            .write_all(b"GET /energy-saving-tips HTTP/1.1\r\n\r\n")
            .expect("send");
        let mut reply = String::new();
        stream.read_to_string(&mut reply).expect("response while idle client connected");

        assert!(reply.starts_with("HTTP/1.1 200 OK"));
    }

    #[test]
    fn answers_over_tcp() {
        let server = PageServer::new(ServerConfig {
            port: 0,
            ..Default::default()
        });
        let running = server.bind().expect("bind");

        let mut stream = TcpStream::connect(running.local_addr()).expect("connect");
        stream
            .write_all(b"GET /energy-saving-tips HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .expect("send");
        let mut reply = String::new();
        stream.read_to_string(&mut reply).expect("read");

        assert!(reply.starts_with("HTTP/1.1 200 OK"));
        assert!(reply.contains("Connection: close"));
        assert!(reply.contains("Heating your Home in Cold Temperatures"));
    }
}
