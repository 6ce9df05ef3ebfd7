//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::page::Page;
use crate::storage::{Storage, StorageError, StorageErrorKind};
use crate::title::Title;

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores page bodies in memory. Use the builder methods to configure the mock
/// with test data.
///
/// # Example
///
/// ```ignore
/// use wiki_storage::{MockStorage, Storage, Title};
///
/// let storage = MockStorage::new().with_page("Home", "Welcome to [[Home]]");
/// let page = storage.load(&Title::new("Home")?)?;
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    pages: RwLock<BTreeMap<String, Vec<u8>>>,
    fail_writes: bool,
    fail_scans: bool,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page body under `title`.
    ///
    /// The title is not validated, so listings can contain names a real
    /// directory might hold.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(title.into(), body.into());
        self
    }

    /// Make every save fail with a permission error.
    #[must_use]
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Make every listing fail with a generic backend error.
    #[must_use]
    pub fn with_failing_scans(mut self) -> Self {
        self.fail_scans = true;
        self
    }

    /// Raw body stored under `title`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn body(&self, title: &str) -> Option<Vec<u8>> {
        self.pages.read().unwrap().get(title).cloned()
    }
}

impl Storage for MockStorage {
    fn load(&self, title: &Title) -> Result<Page, StorageError> {
        self.pages
            .read()
            .unwrap()
            .get(title.as_str())
            .map(|body| Page::new(title.clone(), body.clone()))
            .ok_or_else(|| StorageError::not_found(title.as_str()).with_backend(BACKEND))
    }

    fn save(&self, page: &Page) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_path(page.title.as_str())
                .with_backend(BACKEND));
        }
        self.pages
            .write()
            .unwrap()
            .insert(page.title.to_string(), page.body.clone());
        Ok(())
    }

    fn list_titles(&self) -> Result<Vec<String>, StorageError> {
        if self.fail_scans {
            return Err(StorageError::new(StorageErrorKind::Other).with_backend(BACKEND));
        }
        Ok(self.pages.read().unwrap().keys().cloned().collect())
    }
}
