use std::{collections::VecDeque, sync::Arc};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{io::AssetListing, EntryKind};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CursorError {
    #[error("no cursor initialized for {0:?}")]
    NotInitialized(String),
}

#[derive(Debug, Default)]
struct DirectoryCursor {
    directories: VecDeque<String>,
    files: VecDeque<String>,
}

/// Per-directory consumption queues over the asset store.
///
/// [`DirectoryCursors::init`] lists a directory once and partitions its
/// children into a directory queue and a file queue; the `next_*` pulls
/// drain them one name at a time. Pulling from a directory that was never
/// initialized is caller misuse and fails loudly, unlike the data-driven
/// failures which degrade to empty queues.
#[derive(Debug)]
pub struct DirectoryCursors {
    listing: Arc<dyn AssetListing>,
    cursors: FxHashMap<String, DirectoryCursor>,
}

impl Default for DirectoryCursors {
    fn default() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(target_os = "android")] {
                Self::new(Arc::new(crate::io::AndroidAssetListing))
            } else {
                Self::new(Arc::new(crate::io::FileAssetListing::default()))
            }
        }
    }
}

impl DirectoryCursors {
    pub fn new(listing: Arc<dyn AssetListing>) -> Self {
        Self {
            listing,
            cursors: FxHashMap::default(),
        }
    }

    /// Lists `dir` and sets up fresh queues for it, discarding any queues a
    /// previous `init` left behind. A directory the store refuses to list
    /// gets empty queues.
    pub fn init(&mut self, dir: &str) {
        let mut cursor = DirectoryCursor::default();

        match self.listing.list(dir) {
            Ok(children) => {
                for child in children {
                    match EntryKind::of(&child) {
                        EntryKind::File => cursor.files.push_back(child),
                        EntryKind::Directory => cursor.directories.push_back(child),
                    }
                }
            }
            Err(error) => log::warn!("cursor for {dir:?} starts empty: {error}"),
        }

        self.cursors.insert(dir.to_owned(), cursor);
    }

    /// Next pending subdirectory name of `dir`, `Ok(None)` once exhausted.
    pub fn next_directory(&mut self, dir: &str) -> Result<Option<String>, CursorError> {
        self.cursors
            .get_mut(dir)
            .map(|cursor| cursor.directories.pop_front())
            .ok_or_else(|| CursorError::NotInitialized(dir.to_owned()))
    }

    /// Next pending file name of `dir`, `Ok(None)` once exhausted.
    pub fn next_file(&mut self, dir: &str) -> Result<Option<String>, CursorError> {
        self.cursors
            .get_mut(dir)
            .map(|cursor| cursor.files.pop_front())
            .ok_or_else(|| CursorError::NotInitialized(dir.to_owned()))
    }
}
