//! Suspending operations with awaited handlers and cleanup.
//!
//! Run with: cargo run --example async_cleanup

use std::cell::Cell;

use catch_this::{attempt, catch_finally_await, finally_async, AsyncOperationExt, Failure, Result};
use thiserror::Error;
use tokio::task::yield_now;

#[derive(Error, Debug)]
#[error("upstream returned status {status}")]
struct Upstream {
    status: u16,
}

struct Connection {
    open: Cell<bool>,
}

impl Connection {
    async fn open() -> Self {
        yield_now().await;
        Connection { open: Cell::new(true) }
    }

    async fn fetch(&self, path: &str) -> std::result::Result<String, Upstream> {
        yield_now().await;
        match path {
            "/health" => Ok("ok".into()),
            _ => Err(Upstream { status: 503 }),
        }
    }

    async fn close(&self) {
        yield_now().await;
        self.open.set(false);
        println!("   connection closed");
    }
}

async fn fetch_or_empty(conn: &Connection, path: &str) -> Result<String> {
    catch_finally_await(
        || conn.fetch(path),
        |e: Failure| async move {
            yield_now().await;
            eprintln!("   fetch {path} failed: {e}");
        },
        || conn.close(),
    )
    .await
}

async fn fetch_status(conn: &Connection) -> Result<u16> {
    attempt! {
        async try {
            conn.fetch("/metrics").await?;
            200
        }
        catch Upstream(e) { println!("   upstream status {}", e.status) }
    }
    .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== async catch-this ===\n");

    println!("1. Fetch with awaited handler and cleanup:");
    let conn = Connection::open().await;
    println!("   /health -> {:?}", fetch_or_empty(&conn, "/health").await);
    let conn = Connection::open().await;
    println!("   /users  -> {:?}", fetch_or_empty(&conn, "/users").await);
    println!("   still open: {}\n", conn.open.get());

    println!("2. Blocking cleanup after an awaited operation:");
    let conn = Connection::open().await;
    let result = finally_async(|| conn.fetch("/users"), || println!("   released request slot")).await;
    println!("   result: {result:?}\n");

    println!("3. Typed catch in block form:");
    let conn = Connection::open().await;
    println!("   status: {:?}\n", fetch_status(&conn).await);

    println!("4. Method form:");
    let body = (|| conn.fetch("/users")).catch_ignore_async().await;
    println!("   body: {body:?}");
}
