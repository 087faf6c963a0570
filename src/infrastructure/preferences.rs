// src/infrastructure/preferences.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::preferences::{ColorSchemeProbe, PreferenceStore, ThemeClassList},
};
use axum::http::HeaderMap;
use std::{
    collections::{BTreeMap, BTreeSet},
    fs, io,
    path::PathBuf,
    sync::RwLock,
};

/// Client hint carrying the browser's `prefers-color-scheme`.
pub const COLOR_SCHEME_HINT: &str = "sec-ch-prefers-color-scheme";

/// Preference store persisted as a flat JSON object on disk.
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    fn load(&self) -> ApplicationResult<BTreeMap<String, String>> {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
                ApplicationError::infrastructure(format!(
                    "invalid preference file {}: {err}",
                    self.path.display()
                ))
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(ApplicationError::infrastructure(format!(
                "failed to read {}: {err}",
                self.path.display()
            ))),
        }
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        let _guard = self
            .lock
            .read()
            .map_err(|_| ApplicationError::infrastructure("preference lock poisoned"))?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ApplicationResult<()> {
        let _guard = self
            .lock
            .write()
            .map_err(|_| ApplicationError::infrastructure("preference lock poisoned"))?;
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        let bytes = serde_json::to_vec_pretty(&values)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        fs::write(&self.path, bytes).map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to write {}: {err}",
                self.path.display()
            ))
        })
    }
}

/// Reads the color-scheme client hint from request headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientHintColorScheme {
    prefers_dark: bool,
}

impl ClientHintColorScheme {
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let prefers_dark = headers
            .get(COLOR_SCHEME_HINT)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().trim_matches('"').eq_ignore_ascii_case("dark"))
            .unwrap_or(false);
        Self { prefers_dark }
    }
}

impl ColorSchemeProbe for ClientHintColorScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

/// In-memory body class list, e.g. for server-side rendering of the
/// `<body class="...">` attribute.
#[derive(Debug, Default)]
pub struct BodyClassList {
    classes: RwLock<BTreeSet<String>>,
}

impl BodyClassList {
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes
            .read()
            .map(|classes| classes.contains(class))
            .unwrap_or(false)
    }

    /// Space-separated, sorted class attribute value.
    #[must_use]
    pub fn class_attribute(&self) -> String {
        self.classes
            .read()
            .map(|classes| classes.iter().cloned().collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }
}

impl ThemeClassList for BodyClassList {
    fn add(&self, class: &str) {
        if let Ok(mut classes) = self.classes.write() {
            classes.insert(class.to_string());
        }
    }

    fn remove(&self, class: &str) {
        if let Ok(mut classes) = self.classes.write() {
            classes.remove(class);
        }
    }
}
