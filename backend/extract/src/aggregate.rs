//! # Aggregation
//!
//! Reshapes raw `group|subject => order|payload` pairs into
//! `{ subject: { group: { order, payload } } }` and filters out noise.
//!
//! ## Rules
//!
//! - Keys and values are split on the **first** `|` only
//! - A key with no `|` lands under the empty group, keyed by the full key
//! - A non-numeric order fails the whole export
//! - Subjects seen in fewer than [`MIN_GROUPS`] groups are dropped
//! - [`RESERVED_SUBJECT`] is always dropped
use std::collections::btree_map::Entry;

use tracing::debug;

use crate::{
    error::ExtractError,
    models::{MIN_GROUPS, RESERVED_SUBJECT, RawData, Subjects},
    utils::{parse_record, split_key},
};

pub fn aggregate(data: &RawData) -> Result<Subjects, ExtractError> {
    let mut subjects = Subjects::new();

    for (key, value) in data {
        let (group, subject) = split_key(key);
        let record = parse_record(key, value)?;

        match subjects.entry(subject.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert([(group.to_string(), record)].into());
            }
            Entry::Occupied(mut entry) => {
                entry.get_mut().insert(group.to_string(), record);
            }
        }
    }

    debug!(
        "Aggregated {} pairs into {} subjects",
        data.len(),
        subjects.len()
    );

    Ok(subjects)
}

pub fn retain_active(mut subjects: Subjects) -> Subjects {
    let before = subjects.len();

    subjects.retain(|subject, groups| {
        groups.len() >= MIN_GROUPS && subject != RESERVED_SUBJECT
    });

    debug!("Dropped {} subjects", before - subjects.len());

    subjects
}
