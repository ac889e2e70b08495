//! Loading configuration with catch-this and thiserror-defined errors.
//!
//! Run with: cargo run --example config_loader

use catch_this::{attempt, catch_finally_kind, catch_ignore_kind, catch_kind_or, Failure, Narrow, Result};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("invalid config format: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum DbError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),
}

#[derive(Error, Debug)]
#[error("request failed")]
pub struct RequestFailed {
    #[source]
    cause: DbError,
}

/// Everything the startup path knows how to recover from.
#[derive(Debug)]
pub enum Startup {
    Config(ConfigError),
    Db(DbError),
}

impl Narrow for Startup {
    fn narrow(failure: Failure) -> Result<Self, Failure> {
        failure
            .downcast::<ConfigError>()
            .map(Startup::Config)
            .or_else(|f| f.downcast::<DbError>().map(Startup::Db))
    }
}

fn read_config(path: &str) -> std::result::Result<String, ConfigError> {
    match path {
        "missing.toml" => Err(ConfigError::NotFound { path: path.into() }),
        "invalid.toml" => Err(ConfigError::Parse("unexpected token".into())),
        _ => Ok(format!("db = \"good://{path}\"")),
    }
}

fn connect_db(url: &str) -> std::result::Result<(), DbError> {
    if url.contains("bad") {
        Err(DbError::Connection("refused".into()))
    } else {
        Ok(())
    }
}

fn query_user(id: u32) -> std::result::Result<String, DbError> {
    if id == 0 {
        Err(DbError::Query("user not found".into()))
    } else {
        Ok(format!("user_{id}"))
    }
}

// Typed catch with an explicit default
fn load_config_with_default(path: &str) -> Result<String> {
    catch_kind_or(
        || read_config(path),
        |e: ConfigError| eprintln!("   using defaults: {e}"),
        "db = \"good://localhost\"".to_string(),
    )
}

// Family catch: config and database failures are recoverable, others propagate
fn user_or_guest(config_path: &str, db_url: &str, user_id: u32) -> Result<String> {
    let name = attempt! {
        try {
            read_config(config_path)?;
            connect_db(db_url)?;
            query_user(user_id)?
        }
        catch Startup(kind) {
            match kind {
                Startup::Config(e) => eprintln!("   config: {e}"),
                Startup::Db(e) => eprintln!("   database: {e}"),
            }
        }
    }?;
    Ok(if name.is_empty() { "guest".into() } else { name })
}

// Cleanup that runs whether or not the query succeeds
fn query_with_connection(db_url: &str, user_id: u32) -> Result<String> {
    let mut open = false;
    let result = catch_finally_kind(
        || {
            connect_db(db_url)?;
            open = true;
            query_user(user_id).map_err(|cause| Failure::new(RequestFailed { cause }))
        },
        |e: DbError| eprintln!("   connect failed: {e}"),
        || println!("   connection closed"),
    );
    println!("   connection was opened: {open}");
    result
}

fn main() {
    println!("=== catch-this + thiserror ===\n");

    println!("1. Load missing config:");
    println!("   result: {:?}\n", load_config_with_default("missing.toml"));

    println!("2. User lookup with recoverable failures:");
    println!("   missing config -> {:?}", user_or_guest("missing.toml", "good://db", 1));
    println!("   bad database   -> {:?}", user_or_guest("app.toml", "bad://db", 1));
    println!("   missing user   -> {:?}", user_or_guest("app.toml", "good://db", 0));
    println!("   success        -> {:?}\n", user_or_guest("app.toml", "good://db", 42));

    println!("3. Query with cleanup and cause chain:");
    if let Err(e) = query_with_connection("good://db", 0) {
        println!("   {}", e.report());
        if let Some(db) = e.chain_any::<DbError>() {
            println!("   found DbError in chain: {db}");
        }
    }
    println!();

    println!("4. Ignore only parse failures:");
    let ignored = catch_ignore_kind::<ConfigError, _>(|| read_config("invalid.toml"));
    println!("   invalid.toml -> {ignored:?}");
}
