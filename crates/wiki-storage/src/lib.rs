//! Page storage for the wiki.
//!
//! This crate provides a [`Storage`] trait for loading, saving and listing wiki pages,
//! keyed by [`Title`]. This enables:
//!
//! - **Unit testing** of request handlers without touching the real filesystem
//! - **Clean separation** between HTTP handling and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Title`] - validated alphanumeric page identifier
//! - [`Page`] - a title plus its raw body bytes
//! - [`Storage`] trait with `load()`, `save()`, and `list_titles()` methods
//! - [`FsStorage`] implementation storing one `<Title>.txt` file per page
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use wiki_storage::{FsStorage, Page, Storage, Title};
//!
//! let storage = FsStorage::new("data");
//! let title = Title::new("FrontPage")?;
//! storage.save(&Page::new(title.clone(), b"Hello [[World]]".to_vec()))?;
//! let page = storage.load(&title)?;
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod page;
mod storage;
mod title;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use page::Page;
pub use storage::{Storage, StorageError, StorageErrorKind};
pub use title::{InvalidTitle, Title};
