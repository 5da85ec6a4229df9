use crate::error::{Error, Result};
use crate::types::Definition;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read and parse a definition file.
///
/// A path that does not exist is [`Error::NotFound`]; content that is not a
/// JSON object of the expected shape is [`Error::Malformed`]. Any other I/O
/// failure, including content that is not UTF-8, is [`Error::Read`].
pub fn load(path: impl AsRef<Path>) -> Result<Definition> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let definition = Definition::from_json(&content).map_err(|source| Error::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        categories = definition.categories.len(),
        "loaded definition"
    );
    Ok(definition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_load_valid_file() {
        let f = write_temp(br#"{"title": "Dungeon", "categories": {"room": {"items": ["crypt"]}}}"#);
        let def = load(f.path()).unwrap();
        assert_eq!(def.title, "Dungeon");
        assert_eq!(def.categories.len(), 1);
    }

    #[test]
    fn test_load_utf8_content() {
        let f = write_temp("{\"categories\": {\"drink\": {\"items\": [\"café\", \"glühwein\"]}}}".as_bytes());
        let def = load(f.path()).unwrap();
        let drink = def.categories.get("drink").unwrap();
        assert_eq!(drink.items[1].to_string(), "glühwein");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let err = load("/nonexistent/definition.json").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "File '/nonexistent/definition.json' not found."
        );
    }

    #[test]
    fn test_load_invalid_json() {
        let f = write_temp(b"{\"categories\": {");
        let err = load(f.path()).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
        assert_eq!(
            err.to_string(),
            format!("Invalid JSON in '{}'", f.path().display())
        );
        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert!(cause.contains("EOF"));
        assert!(cause.contains("line 1 column"));
    }

    #[test]
    fn test_load_wrong_shape() {
        let f = write_temp(b"[1, 2, 3]");
        assert!(matches!(load(f.path()), Err(Error::Malformed { .. })));
    }

    #[test]
    fn test_load_not_utf8() {
        let f = write_temp(&[0xff, 0xfe, 0x7b, 0x7d]);
        assert!(matches!(load(f.path()), Err(Error::Read { .. })));
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert_eq!(err.path(), dir.path());
    }
}
