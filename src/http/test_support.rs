use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// What the capture server saw for one request.
#[derive(Debug, Clone)]
pub(crate) struct CapturedRequest {
    pub(crate) method: String,
    pub(crate) content_type: Option<String>,
    pub(crate) body: Vec<u8>,
}

pub(crate) type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

/// Test server that records every request and answers with `status`.
pub(crate) struct CaptureServer {
    pub(crate) url: String,
    pub(crate) captured: Captured,
    handle: JoinHandle<()>,
}

impl Drop for CaptureServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl CaptureServer {
    pub(crate) fn requests(&self) -> Result<Vec<CapturedRequest>, String> {
        self.captured
            .lock()
            .map(|requests| requests.clone())
            .map_err(|err| format!("capture lock poisoned: {}", err))
    }
}

/// Spawns the capture server on an ephemeral local port.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound.
pub(crate) async fn spawn_capture_server(status: u16) -> Result<CaptureServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));

    let captured_accept = Arc::clone(&captured);
    let handle = tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let captured = Arc::clone(&captured_accept);
            tokio::spawn(handle_client(stream, captured, status));
        }
    });

    Ok(CaptureServer {
        url: format!("http://{}/echo", addr),
        captured,
        handle,
    })
}

/// Returns a local URL nothing listens on.
///
/// # Errors
///
/// Returns an error if a probe listener cannot be bound.
pub(crate) async fn unreachable_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("bind probe failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

async fn handle_client(mut stream: TcpStream, captured: Captured, status: u16) {
    let Some(request) = read_request(&mut stream).await else {
        return;
    };
    if let Ok(mut requests) = captured.lock() {
        requests.push(request);
    }
    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        status
    );
    if stream.write_all(response.as_bytes()).await.is_err() {
        return;
    }
    drop(stream.shutdown().await);
}

async fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
    let mut buffer: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        if let Some(pos) = find_subsequence(&buffer, b"\r\n\r\n") {
            break pos;
        }
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
    };

    let head = String::from_utf8_lossy(buffer.get(..header_end)?).into_owned();
    let mut lines = head.lines();
    let method = lines
        .next()?
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_owned();
    let mut content_type = None;
    let mut content_length = 0usize;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.eq_ignore_ascii_case("content-type") {
            content_type = Some(value.trim().to_owned());
        } else if name.eq_ignore_ascii_case("content-length") {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    let body_start = header_end.saturating_add(4);
    let mut body = buffer.get(body_start..).unwrap_or_default().to_vec();
    while body.len() < content_length {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            break;
        }
        body.extend_from_slice(chunk.get(..read)?);
    }
    body.truncate(content_length);

    Some(CapturedRequest {
        method,
        content_type,
        body,
    })
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
