//! Session store: the accounts a run grades against

use crate::error::SessionStoreError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

/// One adventofcode.com account from the session store
pub struct SessionProfile {
    /// Session cookie (zeroized on drop)
    pub cookie: Zeroizing<String>,
    /// Human-readable label used in progress output
    pub description: String,
}

/// On-disk shape of one store entry
#[derive(Deserialize)]
struct StoredProfile {
    cookie: String,
    description: String,
}

/// Load all profiles from the store, in store order
///
/// The store is a JSON array of `{"cookie": ..., "description": ...}`
/// objects. A missing or unparsable store is fatal; an empty array is a
/// valid store with nothing to grade.
pub fn load(path: &Path) -> Result<Vec<SessionProfile>, SessionStoreError> {
    let data = fs::read_to_string(path).map_err(|source| SessionStoreError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let stored: Vec<StoredProfile> =
        serde_json::from_str(&data).map_err(|source| SessionStoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(stored
        .into_iter()
        .map(|entry| SessionProfile {
            cookie: Zeroizing::new(entry.cookie),
            description: entry.description,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn store_with(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_profiles_load_in_store_order() {
        let file = store_with(
            r#"[
                {"cookie": "53616c7465645f5f", "description": "github account"},
                {"cookie": "6f74686572636f6f", "description": "google account"}
            ]"#,
        );

        let profiles = load(file.path()).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(*profiles[0].cookie, "53616c7465645f5f");
        assert_eq!(profiles[0].description, "github account");
        assert_eq!(profiles[1].description, "google account");
    }

    #[test]
    fn test_empty_store_is_valid() {
        let file = store_with("[]");
        assert!(load(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_store_is_unreadable() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load(&dir.path().join("no-such-file.json"));
        assert!(matches!(result, Err(SessionStoreError::Unreadable { .. })));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let file = store_with("not json at all");
        let result = load(file.path());
        assert!(matches!(result, Err(SessionStoreError::Malformed { .. })));
    }

    #[test]
    fn test_entry_missing_a_field_is_malformed() {
        let file = store_with(r#"[{"cookie": "53616c7465645f5f"}]"#);
        let result = load(file.path());
        assert!(matches!(result, Err(SessionStoreError::Malformed { .. })));
    }

    #[test]
    fn test_non_array_store_is_malformed() {
        let file = store_with(r#"{"cookie": "x", "description": "y"}"#);
        let result = load(file.path());
        assert!(matches!(result, Err(SessionStoreError::Malformed { .. })));
    }
}
