use super::PreferenceStorage;
use crate::theme::ThemePreference;

/// Best-effort, write-through persistence of the theme preference.
///
/// Storage failures never leave this type; they are logged and the caller
/// keeps running from memory.
pub struct PersistenceSink {
    storage: Box<dyn PreferenceStorage>,
    key: String,
}

impl PersistenceSink {
    pub fn new(storage: Box<dyn PreferenceStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Missing, invalid, and unreadable values all read as `None`.
    pub fn load(&self) -> Option<ThemePreference> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(?err, key = %self.key, "theme storage unreadable; ignoring stored value");
                return None;
            }
        };
        match raw.parse() {
            Ok(preference) => Some(preference),
            Err(err) => {
                tracing::debug!(%err, key = %self.key, "ignoring invalid stored theme");
                None
            }
        }
    }

    pub fn save(&mut self, value: ThemePreference) {
        match self.storage.set_item(&self.key, value.as_str()) {
            Ok(()) => tracing::debug!(key = %self.key, %value, "persisted theme preference"),
            Err(err) => {
                tracing::warn!(?err, key = %self.key, %value, "failed to persist theme preference");
            }
        }
    }
}

impl std::fmt::Debug for PersistenceSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceSink")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
