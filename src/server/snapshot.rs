use crate::store::{MapRedirector, Redirector};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    #[error("could not read snapshot {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse snapshot {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not write snapshot {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub async fn load(path: &Path) -> Result<MapRedirector, SnapshotError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| SnapshotError::Read {
            path: path.to_owned(),
            source,
        })?;
    MapRedirector::from_json(&bytes).map_err(|source| SnapshotError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Writes the snapshot next to `path` and renames it into place,
/// so a failed write leaves the previous snapshot intact.
pub fn save(path: &Path, redirects: &dyn Redirector) -> Result<(), SnapshotError> {
    let json = redirects.to_json()?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let write = || -> Result<(), io::Error> {
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(&json)?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    };
    write().map_err(|source| SnapshotError::Write {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Redirect;

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redirects.json");

        let store = MapRedirector::new();
        store.add(Redirect::new("a.example", "/", "http://x")).unwrap();
        store.add(Redirect::new("a.example", "/b", "http://y")).unwrap();
        save(&path, &store).unwrap();

        let loaded = load(&path).await.unwrap();
        assert_eq!(loaded.snapshot(), store.snapshot());
        assert_eq!(loaded.target("a.example", "/b").unwrap(), "http://y");
    }

    #[tokio::test]
    async fn file_is_keyed_by_hostname() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redirects.json");

        let store = MapRedirector::new();
        store.add(Redirect::new("a.example", "/", "http://x")).unwrap();
        save(&path, &store).unwrap();

        let json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"a.example": {"/": "http://x"}}));
    }

    #[tokio::test]
    async fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redirects.json");
        std::fs::write(&path, br#"{"old.example": {"/": "http://old"}}"#).unwrap();

        let store = MapRedirector::new();
        store.add(Redirect::new("new.example", "/", "http://new")).unwrap();
        save(&path, &store).unwrap();

        let loaded = load(&path).await.unwrap();
        assert!(loaded.target("old.example", "/").is_err());
        assert_eq!(loaded.target("new.example", "/").unwrap(), "http://new");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, SnapshotError::Read { .. }));
    }

    #[tokio::test]
    async fn garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redirects.json");
        std::fs::write(&path, b"not json").unwrap();

        let err = load(&path).await.unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
    }
}
