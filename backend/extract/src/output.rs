use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::{error::ExtractError, models::Subjects};

/// Writes compact JSON, truncating whatever was at `path` before.
pub fn write_json(path: &Path, subjects: &Subjects) -> Result<(), ExtractError> {
    let io_error = |source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, subjects).map_err(|e| {
        if e.is_io() {
            io_error(e.into())
        } else {
            ExtractError::Json(e)
        }
    })?;
    writer.flush().map_err(io_error)?;

    info!("Wrote {} subjects to {}", subjects.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::models::Record;

    use super::*;

    #[test]
    fn test_writes_compact_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let subjects: Subjects = [(
            "u1".to_string(),
            [(
                "a".to_string(),
                Record {
                    order: 10,
                    payload: "x".to_string(),
                },
            )]
            .into(),
        )]
        .into();

        write_json(&path, &subjects).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"{"u1":{"a":{"order":10,"payload":"x"}}}"#
        );
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "stale contents that are longer than the new ones").unwrap();

        write_json(&path, &Subjects::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("users.json");

        let err = write_json(&path, &Subjects::new()).unwrap_err();

        assert!(matches!(err, ExtractError::Io { path: ref p, .. } if *p == path));
    }
}
