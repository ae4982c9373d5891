#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpListener,
    time::sleep,
};
use xkcd_core::Client;

/// What the local server answers to one request.
pub struct Reply {
    pub status: u16,
    pub reason: &'static str,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            reason: "OK",
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn comic(num: u64) -> Self {
        Self::json(comic_json(num))
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            reason: "Not Found",
            body: "<html>404 Not Found</html>".to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub fn comic_json(num: u64) -> String {
    format!(
        r#"{{"month": "7", "num": {num}, "link": "", "year": "2022", "news": "",
            "safe_title": "Safe {num}", "transcript": "", "alt": "Alt {num}",
            "img": "https://imgs.xkcd.com/comics/{num}.png", "title": "Title {num}", "day": "1"}}"#
    )
}

/// A bare http/1.1 server on a random local port, answering every request through `handler`.
pub struct Server {
    pub client: Client,
    pub paths: Arc<Mutex<Vec<String>>>,
}

impl Server {
    pub fn requested(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

pub async fn serve<H>(handler: H) -> Server
where
    H: Fn(&str) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);
    let paths = Arc::new(Mutex::new(Vec::new()));

    let accepted_paths = Arc::clone(&paths);
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let handler = Arc::clone(&handler);
            let paths = Arc::clone(&accepted_paths);
            tokio::spawn(async move {
                let (read, mut write) = stream.into_split();
                let mut reader = BufReader::new(read);

                let mut request_line = String::new();
                reader.read_line(&mut request_line).await.unwrap();
                let path = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                loop {
                    let mut header = String::new();
                    let read = reader.read_line(&mut header).await.unwrap();
                    if read == 0 || header == "\r\n" {
                        break;
                    }
                }

                paths.lock().unwrap().push(path.clone());
                let reply = handler(&path);
                sleep(reply.delay).await;

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    reply.status,
                    reply.reason,
                    reply.body.len(),
                    reply.body
                );
                write.write_all(response.as_bytes()).await.unwrap();
                write.shutdown().await.unwrap();
            });
        }
    });

    let base_url = format!("http://{addr}").parse().unwrap();
    Server {
        client: Client::new(base_url),
        paths,
    }
}
