//! # User Export
//!
//! Dumps per-user posting activity from Redis into a single JSON file.
//!
//! ## Data
//!
//! Stored as:
//! - `subreddit|user => timestamp|link`
//!
//! Or generically `group|subject => order|payload`. Exported as:
//! ```json
//! { "user": { "sub1": { "order": 1700000000, "payload": "link" }, "sub2": { ... } } }
//! ```
//!
//! ## Pipeline
//!
//! 1. `SCAN` the keyspace batch by batch, reusing whatever batch size Redis picks.
//!
//! 2. `MGET` each non-empty batch and keep the decoded pairs in memory.
//!
//! 3. Group by subject, one record per group. Order must be an integer, anything else aborts.
//!
//! 4. Drop subjects that only appear in one group, as well as `AutoModerator`.
//!
//! 5. Write the remaining subjects as compact JSON, overwriting the output.
//!
//! ## Notes
//! - Sequential and fully in memory, sized for modest databases.
//! - All or nothing: connection, parse and write failures end the run, no partial file is salvaged.
//! - Output maps are ordered, so two exports of an unchanged database are byte-identical.
//!
//! ## Usage
//!
//! ```sh
//! RUST_LOG=info cargo run --bin extract -- --host localhost --port 6379 --db 1 --output users.json
//! ```
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

pub mod aggregate;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod output;
pub mod scan;
pub mod utils;

use aggregate::{aggregate, retain_active};
use config::Config;
use database::{KeyStore, init_redis};
use error::ExtractError;
use output::write_json;
use scan::collect_pairs;

/// Connects with `config` and runs [`extract`], returning the number of exported subjects.
pub async fn run(config: &Config) -> Result<usize, ExtractError> {
    let mut store = init_redis(&config.redis_url()).await?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );

    let result = extract(&mut store, &config.output, &pb).await;
    pb.finish_and_clear();

    result
}

pub async fn extract<S: KeyStore>(
    store: &mut S,
    output: &Path,
    pb: &ProgressBar,
) -> Result<usize, ExtractError> {
    let data = collect_pairs(store, pb).await?;
    info!("Fetched {} pairs", data.len());

    let subjects = retain_active(aggregate(&data)?);
    write_json(output, &subjects)?;

    Ok(subjects.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::{Value, json};

    use crate::scan::tests::MemoryStore;

    use super::*;

    const PAIRS: [(&str, &str); 6] = [
        ("a|u1", "10|x"),
        ("b|u1", "20|y"),
        ("c|u2", "5|z"),
        ("a|AutoModerator", "1|m"),
        ("b|AutoModerator", "2|n"),
        ("nodelimiter", "3|q"),
    ];

    async fn export(store: &mut MemoryStore, path: &Path) -> Result<usize, ExtractError> {
        extract(store, path, &ProgressBar::hidden()).await
    }

    #[tokio::test]
    async fn test_extract() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let mut store = MemoryStore::new(&PAIRS, 2);

        let count = export(&mut store, &path).await.unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(count, 1);
        assert_eq!(
            written,
            json!({
                "u1": {
                    "a": { "order": 10, "payload": "x" },
                    "b": { "order": 20, "payload": "y" }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let mut store = MemoryStore::new(&[], 10);

        assert_eq!(export(&mut store, &path).await.unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");

        export(&mut MemoryStore::new(&PAIRS, 4), &first)
            .await
            .unwrap();
        export(&mut MemoryStore::new(&PAIRS, 1), &second)
            .await
            .unwrap();

        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_malformed_value_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let mut store = MemoryStore::new(&[("a|u1", "10|x"), ("b|u1", "no-order")], 10);

        let err = export(&mut store, &path).await.unwrap_err();

        assert!(matches!(err, ExtractError::InvalidOrder { .. }));
        assert!(!path.exists());
    }
}
