use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::Router;

/// A request seen by the stub upstream.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

/// A local server answering every request with the same canned response.
#[derive(Debug)]
pub struct Upstream {
    pub port: u16,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Upstream {
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/api/nhl", self.port)
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn start_upstream(status: StatusCode, body: &'static str) -> Result<Upstream, anyhow::Error> {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap| {
        let seen = seen.clone();
        async move {
            seen.lock().unwrap().push(Recorded {
                path: uri.path().to_string(),
                query: uri.query().map(String::from),
                headers,
            });
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }
    });

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move { axum::serve(listener, app).await });

    println!("Listening on http://127.0.0.1:{port}");

    Ok(Upstream { port, requests })
}

/// Accept one connection and never answer it. Returns the port and the thread holding it.
pub fn start_silent_server(hold: Duration) -> (u16, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let thread = thread::spawn(move || {
        let _stream = listener.accept().unwrap();
        thread::sleep(hold);
    });
    (port, thread)
}

/// A port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
