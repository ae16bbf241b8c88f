//! Repository contract for save text.

use super::Result;

/// Storage for serialized game states, keyed by slot name.
///
/// Repositories store opaque text; they never interpret or validate it.
/// Validation happens when the text is fed back into the engine.
pub trait StateRepository: Send + Sync {
    /// Store `text` under `slot`, replacing any previous save.
    fn save(&self, slot: &str, text: &str) -> Result<()>;

    /// Load the text stored under `slot`, or `None` if the slot is empty.
    fn load(&self, slot: &str) -> Result<Option<String>>;

    /// Check if a slot holds a save
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot. Deleting an empty slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all occupied slots
    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
