//! Client-side generation credits.
//!
//! A soft throttle, not a security boundary: the counter lives in
//! client-local storage, is read-modify-write without cross-process
//! locking, and a damaged counter reads as zero rather than locking the
//! user out.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::ThemeError;

/// Generations permitted per client.
pub const CREDIT_LIMIT: u32 = 4;

/// File name of the persisted counter under the config directory.
const CREDITS_FILE: &str = "credits";

/// Storage port for the persisted counter: get/set of a single string.
///
/// Implementations own their synchronization; the meter only ever reads
/// and overwrites the whole value.
pub trait CreditStore: Send + Sync {
    /// Best-effort read. Absent or unreadable state reads as `None`.
    fn load(&self) -> Option<String>;

    /// Overwrite the persisted value.
    fn save(&self, value: &str) -> io::Result<()>;
}

/// Meter over a [`CreditStore`], enforcing [`CREDIT_LIMIT`].
pub struct CreditMeter {
    store: Box<dyn CreditStore>,
}

impl CreditMeter {
    pub fn new(store: impl CreditStore + 'static) -> Self {
        Self { store: Box::new(store) }
    }

    /// Generations consumed so far.
    ///
    /// Corrupted or non-numeric persisted state deliberately reads as
    /// zero: this throttle fails open to usability, never closed to
    /// quota.
    pub fn used(&self) -> u32 {
        self.store
            .load()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    /// `max(0, LIMIT - used)`, never negative.
    pub fn remaining(&self) -> u32 {
        CREDIT_LIMIT.saturating_sub(self.used())
    }

    pub fn has_credits(&self) -> bool {
        self.remaining() > 0
    }

    /// Record one consumed generation.
    pub fn consume(&self) -> Result<(), ThemeError> {
        let next = self.used().saturating_add(1);
        self.store
            .save(&next.to_string())
            .map_err(|e| ThemeError::Storage(e.to_string()))
    }

    /// Administrative reset back to zero used.
    pub fn reset(&self) -> Result<(), ThemeError> {
        self.store
            .save("0")
            .map_err(|e| ThemeError::Storage(e.to_string()))
    }
}

/// Volatile store for tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemoryCreditStore {
    value: Mutex<Option<String>>,
}

impl InMemoryCreditStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing raw value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self { value: Mutex::new(Some(value.into())) }
    }
}

impl CreditStore for InMemoryCreditStore {
    fn load(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }

    fn save(&self, value: &str) -> io::Result<()> {
        *self.value.lock().unwrap() = Some(value.to_string());
        Ok(())
    }
}

/// Counter persisted as a single integer string in a file.
pub struct FileCreditStore {
    path: PathBuf,
}

impl FileCreditStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional location under the platform config
    /// directory (`<config>/thematic/credits`).
    pub fn in_config_dir() -> io::Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
        Ok(Self::new(base.join("thematic").join(CREDITS_FILE)))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CreditStore for FileCreditStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "credit file unreadable");
                None
            }
        }
    }

    fn save(&self, value: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, value)
    }
}
