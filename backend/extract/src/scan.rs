use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::{
    database::{KeyStore, SCAN_START},
    error::ExtractError,
    models::RawData,
    utils::decode,
};

/// Walks the whole keyspace, fetching each scan batch with a single bulk get.
pub async fn collect_pairs<S: KeyStore>(
    store: &mut S,
    pb: &ProgressBar,
) -> Result<RawData, ExtractError> {
    let mut data = RawData::new();
    let mut cursor = SCAN_START;
    let mut batches = 0;

    loop {
        let (next, raw_keys) = store.scan(cursor).await?;
        batches += 1;

        // SCAN may hand back an empty batch before it is done, and MGET needs at least one key
        if !raw_keys.is_empty() {
            let keys = raw_keys
                .into_iter()
                .map(|key| decode("key", key))
                .collect::<Result<Vec<_>, _>>()?;

            let values = store.fetch(&keys).await?;
            debug!("Batch {batches}: {} keys", keys.len());

            for (key, value) in keys.into_iter().zip(values) {
                match value {
                    Some(value) => {
                        data.insert(key, decode("value", value)?);
                    }
                    None => warn!("Key {key} vanished before it was fetched, skipping"),
                }
            }
        }

        pb.set_message(format!("{} keys, {batches} batches", data.len()));
        pb.tick();

        if next == SCAN_START {
            break;
        }
        cursor = next;
    }

    Ok(data)
}
