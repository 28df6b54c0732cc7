use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// Subject that is dropped from every export regardless of how many groups it touched.
pub const RESERVED_SUBJECT: &str = "AutoModerator";

/// A subject must show up in at least this many groups to be exported.
pub const MIN_GROUPS: usize = 2;

pub const FIELD_DELIMITER: char = '|';

/// Keys and values exactly as they were read from the store, after UTF-8 decoding.
pub type RawData = HashMap<String, String>;

/// Group name to the record stored for it.
pub type Groups = BTreeMap<String, Record>;

/// Subject to every group it appeared in. Ordered so repeated exports are byte-identical.
pub type Subjects = BTreeMap<String, Groups>;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub order: i64,
    pub payload: String,
}
