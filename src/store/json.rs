//! JSON file store
//!
//! The whole store is one JSON document. It is read once when opened and
//! rewritten after every change, so each CLI invocation sees the previous
//! invocation's session.

use super::{MemoryStore, ScoreRecord, ScoreStore, SessionCarrier, StoreError};
use crate::core::Tier;
use crate::game::Session;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const APP_DIR: &str = "word_scramble";
const FILE_NAME: &str = "store.json";
const FALLBACK_PATH: &str = "word_scramble.json";

/// Store persisted to a JSON file
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    image: MemoryStore,
}

impl JsonStore {
    /// Default location under the platform data directory
    ///
    /// Falls back to `word_scramble.json` in the working directory when the
    /// platform has no data directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir().map_or_else(
            || PathBuf::from(FALLBACK_PATH),
            |dir| dir.join(APP_DIR).join(FILE_NAME),
        )
    }

    /// Open a store, starting empty if the file does not exist yet
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let image = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| {
                StoreError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No store yet, starting empty");
                MemoryStore::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        Ok(Self { path, image })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply a change to a copy of the image, write it, then keep it
    ///
    /// On failure the in-memory image still matches the file.
    fn update(
        &mut self,
        change: impl FnOnce(&mut MemoryStore) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        let mut next = self.image.clone();
        change(&mut next)?;
        self.persist(&next)?;
        self.image = next;
        Ok(())
    }

    /// Write an image to disk via a temporary file and rename
    fn persist(&self, image: &MemoryStore) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(image).map_err(StoreError::Encode)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).map_err(io_err)?;
        file.write_all(json.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        debug!(path = %self.path.display(), bytes = json.len(), "Store written");
        Ok(())
    }
}

impl ScoreStore for JsonStore {
    fn high_score(&self, player: &str, tier: Tier) -> Result<u32, StoreError> {
        self.image.high_score(player, tier)
    }

    fn set_high_score(&mut self, player: &str, tier: Tier, points: u32) -> Result<(), StoreError> {
        self.update(|image| image.set_high_score(player, tier, points))
    }

    fn record_score(&mut self, player: &str, record: ScoreRecord) -> Result<(), StoreError> {
        self.update(|image| image.record_score(player, record))
    }

    fn saved_tier(&self, player: &str) -> Result<Option<Tier>, StoreError> {
        self.image.saved_tier(player)
    }

    fn set_saved_tier(&mut self, player: &str, tier: Tier) -> Result<(), StoreError> {
        self.update(|image| image.set_saved_tier(player, tier))
    }

    fn scores(&self, player: &str) -> Result<Vec<ScoreRecord>, StoreError> {
        self.image.scores(player)
    }
}

impl SessionCarrier for JsonStore {
    fn load_session(&self, player: &str) -> Result<Option<Session>, StoreError> {
        self.image.load_session(player)
    }

    fn save_session(&mut self, player: &str, session: &Session) -> Result<(), StoreError> {
        self.update(|image| image.save_session(player, session))
    }
}
