//! Common test utilities for integration tests

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// A request as captured by the one-shot backend stand-in.
#[allow(dead_code)]
pub struct ReceivedRequest {
    pub request_line: String,
    pub headers: Vec<String>,
    pub body: String,
}

#[allow(dead_code)]
impl ReceivedRequest {
    /// Case-insensitive header lookup, returns the raw header line.
    pub fn header(&self, name: &str) -> Option<&str> {
        let prefix = format!("{}:", name.to_ascii_lowercase());
        self.headers
            .iter()
            .find(|line| line.to_ascii_lowercase().starts_with(&prefix))
            .map(|line| line.as_str())
    }
}

/// Spawns a TCP listener that serves exactly one canned JSON response and
/// hands the captured request back through a channel.
///
/// The pack carries no HTTP-mocking crate, so the backend is stood in for
/// with a minimal HTTP/1.1 responder. `status` is the full status portion,
/// e.g. `"200 OK"` or `"500 INTERNAL SERVER ERROR"`.
#[allow(dead_code)]
pub fn one_shot_server(status: &str, body: &str) -> (String, Receiver<ReceivedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let (tx, rx) = mpsc::channel();

    let status = status.to_string();
    let body = body.to_string();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let request = read_request(&mut stream);

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        let _ = stream.flush();
        let _ = tx.send(request);
    });

    (format!("http://{addr}"), rx)
}

fn read_request(stream: &mut TcpStream) -> ReceivedRequest {
    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];

    // Read until the blank line separating headers from body
    let header_end = loop {
        let n = stream.read(&mut buf).expect("read request");
        if n == 0 {
            break raw.len();
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = find_blank_line(&raw) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<String> = lines.map(|line| line.to_string()).collect();

    let content_length = headers
        .iter()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    let body_start = (header_end + 4).min(raw.len());
    let mut body_bytes = raw[body_start..].to_vec();
    while body_bytes.len() < content_length {
        let n = stream.read(&mut buf).expect("read body");
        if n == 0 {
            break;
        }
        body_bytes.extend_from_slice(&buf[..n]);
    }

    ReceivedRequest {
        request_line,
        headers,
        body: String::from_utf8_lossy(&body_bytes).to_string(),
    }
}

fn find_blank_line(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|window| window == b"\r\n\r\n")
}
