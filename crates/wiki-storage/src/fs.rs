//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`], which keeps every page as a flat file named
//! `<Title>.txt` inside a single data directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::page::Page;
use crate::storage::{Storage, StorageError, StorageErrorKind};
use crate::title::Title;

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Extension of page files (without the dot).
const PAGE_EXTENSION: &str = "txt";

/// Permission bits for newly created page files (owner read/write).
#[cfg(unix)]
const PAGE_FILE_MODE: u32 = 0o600;

/// Filesystem storage implementation.
///
/// Page bodies are stored verbatim with no header or metadata. Writes truncate
/// and overwrite in place, without a temporary file or backup.
///
/// # Example
///
/// ```ignore
/// use wiki_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new("data");
/// let titles = storage.list_titles()?;
/// ```
#[derive(Debug, Clone)]
pub struct FsStorage {
    /// Directory holding the page files.
    data_dir: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory holding the page files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `title`.
    #[must_use]
    pub fn page_path(&self, title: &Title) -> PathBuf {
        self.data_dir.join(format!("{title}.{PAGE_EXTENSION}"))
    }

    /// Create the data directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory can't be created, or if the path
    /// exists and is not a directory.
    pub fn ensure_dir(&self) -> Result<(), StorageError> {
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(&self.data_dir)
                .with_backend(BACKEND));
        }
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::io(e, Some(self.data_dir.clone())).with_backend(BACKEND))
    }
}

/// Write `body` to `path`, creating the file owner-only or truncating it.
fn write_page_file(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(PAGE_FILE_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(body)
}

/// Title for a directory entry name, if it names a page file.
fn title_from_file_name(name: &str) -> Option<&str> {
    let path = Path::new(name);
    if path.extension().is_some_and(|e| e == PAGE_EXTENSION) {
        path.file_stem().and_then(|s| s.to_str())
    } else {
        None
    }
}

impl Storage for FsStorage {
    fn load(&self, title: &Title) -> Result<Page, StorageError> {
        let path = self.page_path(title);
        let body =
            fs::read(&path).map_err(|e| StorageError::io(e, Some(path)).with_backend(BACKEND))?;
        Ok(Page::new(title.clone(), body))
    }

    fn save(&self, page: &Page) -> Result<(), StorageError> {
        let path = self.page_path(&page.title);
        write_page_file(&path, &page.body)
            .map_err(|e| StorageError::io(e, Some(path)).with_backend(BACKEND))
    }

    fn list_titles(&self) -> Result<Vec<String>, StorageError> {
        let entries = fs::read_dir(&self.data_dir)
            .map_err(|e| StorageError::io(e, Some(self.data_dir.clone())).with_backend(BACKEND))?;

        let mut titles: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name();
                title_from_file_name(name.to_str()?).map(str::to_owned)
            })
            .collect();

        titles.sort();
        Ok(titles)
    }
}
