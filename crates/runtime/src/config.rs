//! Runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for persistence and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding `{slot}.json` save files.
    pub save_dir: PathBuf,
    /// Slot used when none is given explicitly.
    pub save_slot: String,
    /// Side length of the rendered occupancy grid.
    pub map_size: usize,
    /// When set, logs are also written to this directory.
    pub log_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub const DEFAULT_SLOT: &'static str = "game_state";
    pub const DEFAULT_MAP_SIZE: usize = 15;
    /// Largest grid the diagnostics will render.
    pub const MAX_MAP_SIZE: usize = 1000;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `WORLD_SAVE_DIR` - Save directory (default: platform data dir, then `./saves`)
    /// - `WORLD_SAVE_SLOT` - Default slot name (default: `game_state`)
    /// - `WORLD_MAP_SIZE` - Rendered grid size (default: 15, clamped to 1..=1000)
    /// - `WORLD_LOG_DIR` - Optional log file directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("WORLD_SAVE_DIR") {
            config.save_dir = dir;
        }
        if let Some(slot) = read_env::<String>("WORLD_SAVE_SLOT").filter(|s| !s.is_empty()) {
            config.save_slot = slot;
        }
        if let Some(size) = read_env::<usize>("WORLD_MAP_SIZE") {
            config = config.with_map_size(size);
        }
        config.log_dir = read_env::<PathBuf>("WORLD_LOG_DIR");

        config
    }

    /// Sets the grid size, clamped to `1..=MAX_MAP_SIZE`.
    pub fn with_map_size(mut self, size: usize) -> Self {
        self.map_size = size.clamp(1, Self::MAX_MAP_SIZE);
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            save_slot: Self::DEFAULT_SLOT.to_owned(),
            map_size: Self::DEFAULT_MAP_SIZE,
            log_dir: None,
        }
    }
}

/// Platform data directory for saves.
///
/// - Linux: `~/.local/share/world/saves`
/// - macOS: `~/Library/Application Support/world/saves`
/// - Fallback: `./saves`
fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "world")
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("./saves"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
