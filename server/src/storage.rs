use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::PipelineError;

/// Per-request scratch files under the upload directory. Names are
/// generated fresh for every request, never derived from the client
/// filename, so concurrent uploads cannot collide or overwrite each
/// other's in-flight files.
#[derive(Clone, Debug)]
pub struct TransientStore {
    root: PathBuf,
}

impl TransientStore {
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Writes a validated upload under a fresh uuid name and returns the
    /// full path. No partial writes survive: `fs::write` either creates
    /// the file with the full contents or fails.
    pub fn save(&self, bytes: &[u8], extension: &str) -> Result<PathBuf, PipelineError> {
        let path = self.root.join(format!("{}.{}", Uuid::new_v4(), extension));
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Synchronous removal, called immediately after decoding. The file
    /// must not outlive the request; a failed removal is logged and does
    /// not abort the response.
    pub fn remove(&self, path: &Path) {
        if let Err(err) = fs::remove_file(path) {
            warn!("failed to remove transient file {}: {}", path.display(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_under_generated_names_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let store = TransientStore::new(dir.path()).unwrap();

        let a = store.save(b"first", "png").unwrap();
        let b = store.save(b"first", "png").unwrap();
        assert_ne!(a, b, "identical uploads must not share a path");
        assert_eq!(fs::read(&a).unwrap(), b"first");
        assert_eq!(a.extension().and_then(|e| e.to_str()), Some("png"));

        store.remove(&a);
        store.remove(&b);
        assert!(!a.exists());
        assert!(!b.exists());
    }

    #[test]
    fn creates_missing_upload_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let store = TransientStore::new(&nested).unwrap();
        let path = store.save(b"x", "jpg").unwrap();
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn remove_of_missing_file_is_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let store = TransientStore::new(dir.path()).unwrap();
        store.remove(&dir.path().join("never-existed.png"));
    }
}
