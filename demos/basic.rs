//! Minimal statpage example — serves every registered default error page.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Try:
//!   curl -i http://localhost:3000/404
//!   curl -i http://localhost:3000/302   # redirect page with an injected target
//!   curl -i http://localhost:3000/999   # unreachable → falls back to the default slot

use statpage::{BodyKind, DefaultResponse, StatusRegistry};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let registry = StatusRegistry::new();
    let listener = TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("failed to bind 0.0.0.0:3000");
    info!("listening on 0.0.0.0:3000");

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(v) => v,
            Err(e) => {
                error!("accept error: {e}");
                continue;
            }
        };
        let (read, mut write) = stream.into_split();

        // "GET /404 HTTP/1.1" → "404"
        let mut lines = BufReader::new(read).lines();
        let request_line = match lines.next_line().await {
            Ok(Some(line)) => line,
            _ => continue,
        };
        let code = request_line
            .split('/')
            .nth(1)
            .and_then(|rest| rest.split(' ').next())
            .unwrap_or("");

        let entry = match registry.resolve(code) {
            Some(index) => registry.get(index),
            None => registry.fallback(),
        };

        let mut response = DefaultResponse::new(entry);
        if entry.kind() == BodyKind::Templated {
            response = response.redirect_target("http://example.com/moved");
        }
        if let Err(e) = response.write_to(&mut write).await {
            error!(%peer, "write error: {e}");
        }
    }
}
