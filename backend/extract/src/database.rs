//! # Redis
//!
//! Source of the export.
//!
//! ## Layout
//!
//! - Plain string keys, one per (group, subject) pair: `group|subject`
//! - String values: `order|payload`, where order is an integer such as a unix timestamp
//!
//! ## Access
//!
//! - `SCAN` walks the keyspace in server-sized batches, starting and ending at cursor `0`
//! - One `MGET` per batch fetches the values, paired to keys by position
//! - A single multiplexed connection per run, dropped with the [`RedisStore`]
//! - No retries and no local timeouts, connection defaults of the client apply
//!
//! ## Consistency
//!
//! `SCAN` only guarantees full coverage of keys that exist for the whole scan. Keys written
//! or deleted mid-scan may be missed or returned twice, and a key deleted between `SCAN` and
//! `MGET` comes back as nil. Exports are expected to run against a quiescent database.
use redis::{Client, aio::MultiplexedConnection};
use tracing::info;

use crate::error::ExtractError;

/// Cursor that both starts a scan and marks it complete.
pub const SCAN_START: u64 = 0;

/// What the extractor needs from a key-value store.
#[allow(async_fn_in_trait)]
pub trait KeyStore {
    /// Returns the next cursor and the raw keys of one batch.
    async fn scan(&mut self, cursor: u64) -> Result<(u64, Vec<Vec<u8>>), ExtractError>;

    /// Returns one entry per key, `None` where the key no longer exists.
    async fn fetch(&mut self, keys: &[String]) -> Result<Vec<Option<Vec<u8>>>, ExtractError>;
}

pub struct RedisStore {
    connection: MultiplexedConnection,
}

impl KeyStore for RedisStore {
    async fn scan(&mut self, cursor: u64) -> Result<(u64, Vec<Vec<u8>>), ExtractError> {
        let (next, keys): (u64, Vec<Vec<u8>>) = redis::cmd("SCAN")
            .arg(cursor)
            .query_async(&mut self.connection)
            .await?;

        Ok((next, keys))
    }

    async fn fetch(&mut self, keys: &[String]) -> Result<Vec<Option<Vec<u8>>>, ExtractError> {
        let values: Vec<Option<Vec<u8>>> = redis::cmd("MGET")
            .arg(keys)
            .query_async(&mut self.connection)
            .await?;

        Ok(values)
    }
}

pub async fn init_redis(redis_url: &str) -> Result<RedisStore, ExtractError> {
    info!("Connecting to {redis_url}");

    let client = Client::open(redis_url)?;
    let connection = client.get_multiplexed_async_connection().await?;

    Ok(RedisStore { connection })
}
