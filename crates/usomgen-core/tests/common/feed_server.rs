//! Minimal HTTP/1.1 server that replays a scripted sequence of responses.
//!
//! The n-th request gets the n-th scripted response; once the script runs
//! out the last response is repeated. Request count and the User-Agent of
//! each request are recorded for assertions.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Scripted {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Scripted {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Seen {
    pub user_agents: Vec<String>,
}

pub struct FeedServer {
    pub url: String,
    seen: Arc<Mutex<Seen>>,
}

impl FeedServer {
    pub fn hits(&self) -> usize {
        self.seen.lock().unwrap().user_agents.len()
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.seen.lock().unwrap().user_agents.clone()
    }
}

/// Starts a server in a background thread. Returns its handle with the feed
/// URL (e.g. "http://127.0.0.1:12345/url-list.txt"). Runs until the process exits.
pub fn start(script: Vec<Scripted>) -> FeedServer {
    assert!(!script.is_empty(), "script needs at least one response");
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let seen = Arc::new(Mutex::new(Seen::default()));
    let seen_srv = Arc::clone(&seen);
    thread::spawn(move || {
        let mut next = 0usize;
        for stream in listener.incoming().flatten() {
            let response = script[next.min(script.len() - 1)].clone();
            next += 1;
            handle(stream, &response, &seen_srv);
        }
    });
    FeedServer {
        url: format!("http://127.0.0.1:{}/url-list.txt", port),
        seen,
    }
}

fn handle(mut stream: TcpStream, response: &Scripted, seen: &Mutex<Seen>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let text = String::from_utf8_lossy(&request);
    let user_agent = text
        .lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("user-agent"))
        .map(|(_, v)| v.trim().to_string())
        .unwrap_or_default();
    seen.lock().unwrap().user_agents.push(user_agent);

    let head = format!(
        "HTTP/1.1 {} Scripted\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
    let _ = stream.flush();
}
