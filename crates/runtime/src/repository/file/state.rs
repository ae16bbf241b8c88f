//! File-based StateRepository implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::repository::{RepositoryError, Result, StateRepository};

/// File-based implementation of StateRepository.
///
/// Each slot is stored as `{slot}.json` under the base directory. Writes go
/// to a temporary file first and are renamed into place, so a crash never
/// leaves a half-written save behind.
#[derive(Debug)]
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    const EXTENSION: &'static str = "json";

    /// Create a new file-based state repository, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a slot file.
    fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        if slot.is_empty() || slot.contains(['/', '\\']) || slot.starts_with('.') {
            return Err(RepositoryError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid slot name `{slot}`"),
            )));
        }
        Ok(self.base_dir.join(format!("{slot}.{}", Self::EXTENSION)))
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, slot: &str, text: &str) -> Result<()> {
        let path = self.slot_path(slot)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, text)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved slot `{}` to {}", slot, path.display());

        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot)?;

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Loaded slot `{}` from {}", slot, path.display());

        Ok(Some(text))
    }

    fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).is_ok_and(|path| path.is_file())
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot)?;

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted slot `{}`", slot);
        }

        Ok(())
    }

    fn list_slots(&self) -> Result<Vec<String>> {
        let mut slots = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if path.extension().and_then(|ext| ext.to_str()) == Some(Self::EXTENSION)
                && let Some(slot) = path.file_stem().and_then(|stem| stem.to_str())
            {
                slots.push(slot.to_owned());
            }
        }

        slots.sort_unstable();
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_and_delete_slot() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path()).unwrap();

        assert_eq!(repo.load("slot").unwrap(), None);
        repo.save("slot", "{}").unwrap();
        assert!(repo.exists("slot"));
        assert_eq!(repo.load("slot").unwrap().as_deref(), Some("{}"));
        assert!(!dir.path().join("slot.json.tmp").exists());

        repo.delete("slot").unwrap();
        repo.delete("slot").unwrap();
        assert!(!repo.exists("slot"));
    }

    #[test]
    fn lists_only_json_slots_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path()).unwrap();
        repo.save("beta", "{}").unwrap();
        repo.save("alpha", "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        assert_eq!(repo.list_slots().unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn rejects_path_like_slot_names() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileStateRepository::new(dir.path()).unwrap();

        assert!(matches!(
            repo.save("../escape", "{}"),
            Err(RepositoryError::Io(_))
        ));
        assert!(!repo.exists(""));
    }
}
