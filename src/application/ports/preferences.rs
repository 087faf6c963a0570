// src/application/ports/preferences.rs
use crate::application::ApplicationResult;

/// Key-value persistence for user preferences (browser local storage or an
/// equivalent).
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> ApplicationResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ApplicationResult<()>;
}

/// Ambient color-scheme preference of the client.
pub trait ColorSchemeProbe: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

/// Class list of the document body.
pub trait ThemeClassList: Send + Sync {
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
}
