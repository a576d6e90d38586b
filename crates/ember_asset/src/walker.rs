use std::{collections::VecDeque, sync::Arc};

use rustc_hash::FxHashSet;

use crate::{io::AssetListing, normalize, EntryKind};

/// Upper bound on the number of paths handed back per call. The remainder
/// stays queued for [`DirectoryWalker::rest_of_walk`].
pub const BATCH_LIMIT: usize = 500;

/// Names the OS injects into the apk root listing alongside game content.
const RESERVED_ROOT_ENTRIES: [&str; 4] = ["images", "webkit", "sounds", "kioskmode"];

/// A traversal session over the asset store.
///
/// The store only lists immediate children, so subtree enumeration is
/// rebuilt here: breadth-first expansion over [`AssetListing`], dot-in-name
/// classification, and delivery in batches of at most [`BATCH_LIMIT`]
/// slash-prefixed paths.
///
/// Each walker owns its pending queues outright; callers that need two
/// traversals in flight create two walkers.
#[derive(Debug)]
pub struct DirectoryWalker {
    listing: Arc<dyn AssetListing>,
    results: VecDeque<String>,
    queue: VecDeque<String>,
    discovered: FxHashSet<String>,
}

impl Default for DirectoryWalker {
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

impl DirectoryWalker {
    pub fn new(listing: Arc<dyn AssetListing>) -> Self {
        Self {
            listing,
            results: VecDeque::new(),
            queue: VecDeque::new(),
            discovered: FxHashSet::default(),
        }
    }

    /// Walks the subtree under `root` and returns the first batch of file
    /// paths. With `exclude_root` unset the (normalized) root itself leads
    /// the results. Directories already expanded in this walk are never
    /// expanded again.
    pub fn walk(&mut self, root: &str, recursive: bool, exclude_root: bool) -> Vec<String> {
        self.reset();
        let root = normalize(root);

        if !exclude_root {
            self.results.push_back(root.clone());
        }

        self.expand(&root, true);
        while recursive {
            let Some(dir) = self.queue.pop_front() else {
                break;
            };
            self.expand(&dir, true);
        }

        self.next_batch()
    }

    /// [`DirectoryWalker::walk`] without the discovered-directories
    /// registry: only the flattened file list is kept, and the root is
    /// never emitted.
    pub fn walk_flat(&mut self, root: &str, recursive: bool) -> Vec<String> {
        self.reset();
        let root = normalize(root);

        self.expand(&root, false);
        while recursive {
            let Some(dir) = self.queue.pop_front() else {
                break;
            };
            self.expand(&dir, false);
        }

        self.next_batch()
    }

    /// Drains up to [`BATCH_LIMIT`] more entries from the last walk, in the
    /// order they were discovered, without re-walking anything. Empty once
    /// the session is exhausted.
    pub fn rest_of_walk(&mut self) -> Vec<String> {
        self.next_batch()
    }

    fn reset(&mut self) {
        self.results.clear();
        self.queue.clear();
        self.discovered.clear();
    }

    fn expand(&mut self, dir: &str, track_discovered: bool) {
        if track_discovered && !self.discovered.insert(dir.to_owned()) {
            return;
        }

        let children = match self.listing.list(dir) {
            Ok(children) => children,
            Err(error) => {
                // This subtree contributes nothing; siblings are unaffected.
                log::warn!("skipping unlistable directory {dir:?}: {error}");
                return;
            }
        };

        for child in children {
            if child == "." || child == ".." {
                continue;
            }
            if dir.is_empty() && RESERVED_ROOT_ENTRIES.contains(&child.as_str()) {
                continue;
            }

            let child_path = if dir.is_empty() {
                child.clone()
            } else {
                format!("{dir}/{child}")
            };

            match EntryKind::of(&child) {
                EntryKind::File => self.results.push_back(child_path),
                EntryKind::Directory => self.queue.push_back(child_path),
            }
        }
    }

    fn next_batch(&mut self) -> Vec<String> {
        let size = self.results.len().min(BATCH_LIMIT);
        self.results
            .drain(..size)
            .map(|path| format!("/{path}"))
            .collect()
    }
}
