use crate::{
    error::ExtractError,
    models::{FIELD_DELIMITER, Record},
};

/// Splits on the first delimiter. Without one the head is empty and the tail is the whole input.
pub fn split_key(key: &str) -> (&str, &str) {
    key.split_once(FIELD_DELIMITER).unwrap_or(("", key))
}

/// Splits on the first delimiter. Without one the whole input is the head and the tail is empty.
pub fn split_value(value: &str) -> (&str, &str) {
    value.split_once(FIELD_DELIMITER).unwrap_or((value, ""))
}

pub fn parse_record(key: &str, value: &str) -> Result<Record, ExtractError> {
    let (order, payload) = split_value(value);

    let order = order
        .trim()
        .parse::<i64>()
        .map_err(|source| ExtractError::InvalidOrder {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })?;

    Ok(Record {
        order,
        payload: payload.to_string(),
    })
}

pub fn decode(what: &'static str, bytes: Vec<u8>) -> Result<String, ExtractError> {
    String::from_utf8(bytes).map_err(|source| ExtractError::Decode { what, source })
}
