// src/application/commands/dark_mode.rs
use crate::application::{
    ApplicationResult,
    ports::preferences::{ColorSchemeProbe, PreferenceStore, ThemeClassList},
};
use std::sync::Arc;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const DARK_MODE_CLASS: &str = "dark-mode";
/// Light-theme class left behind by the UI kit; always stripped.
pub const LEGACY_LIGHT_CLASS: &str = "chakra-ui-light";

/// Tracks the dark-mode preference. The stored value wins on mount; the
/// ambient color scheme is only consulted when nothing has been stored.
/// Every later change is written through to the store.
pub struct DarkModeController {
    store: Arc<dyn PreferenceStore>,
    probe: Arc<dyn ColorSchemeProbe>,
    classes: Arc<dyn ThemeClassList>,
    enabled: bool,
}

impl DarkModeController {
    #[must_use]
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        probe: Arc<dyn ColorSchemeProbe>,
        classes: Arc<dyn ThemeClassList>,
    ) -> Self {
        Self {
            store,
            probe,
            classes,
            enabled: false,
        }
    }

    /// Resolve the initial state and apply it. Does not persist anything.
    pub fn mount(&mut self) -> ApplicationResult<bool> {
        self.enabled = match self.store.get(DARK_MODE_KEY)? {
            Some(stored) => stored == "true",
            None => self.probe.prefers_dark(),
        };
        self.apply();
        Ok(self.enabled)
    }

    pub fn toggle(&mut self) -> ApplicationResult<bool> {
        self.set_dark_mode(!self.enabled)
    }

    /// No-op when the value is unchanged.
    pub fn set_dark_mode(&mut self, enabled: bool) -> ApplicationResult<bool> {
        if enabled == self.enabled {
            return Ok(self.enabled);
        }
        self.enabled = enabled;
        self.apply();
        self.store
            .set(DARK_MODE_KEY, if enabled { "true" } else { "false" })?;
        tracing::debug!(enabled, "dark mode preference updated");
        Ok(self.enabled)
    }

    fn apply(&self) {
        self.classes.remove(LEGACY_LIGHT_CLASS);
        if self.enabled {
            self.classes.add(DARK_MODE_CLASS);
        } else {
            self.classes.remove(DARK_MODE_CLASS);
        }
    }
}
