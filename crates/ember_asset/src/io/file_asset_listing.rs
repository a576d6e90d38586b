use std::{
    env,
    path::{Path, PathBuf},
};

use super::{AssetListing, ListError};

/// Filesystem-backed listing used on desktop targets and in tests, with the
/// asset root resolved the same way the engine resolves its asset folder.
#[derive(Debug)]
pub struct FileAssetListing {
    base_path: PathBuf,
}

impl Default for FileAssetListing {
    fn default() -> Self {
        Self {
            base_path: Self::get_base_path(),
        }
    }
}

impl FileAssetListing {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_owned(),
        }
    }

    pub fn get_base_path() -> PathBuf {
        if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
            PathBuf::from(manifest_dir)
        } else {
            env::current_exe()
                .ok()
                .and_then(|path| path.parent().map(|exe_parent| exe_parent.to_owned()))
                .unwrap_or_else(|| PathBuf::from("."))
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        if path.is_empty() {
            self.base_path.clone()
        } else {
            self.base_path.join(path)
        }
    }
}

impl AssetListing for FileAssetListing {
    fn list(&self, path: &str) -> Result<Vec<String>, ListError> {
        let full_path = self.full_path(path);

        if !full_path.exists() {
            return Err(ListError::NotFound(path.to_owned()));
        }
        if !full_path.is_dir() {
            return Err(ListError::NotADirectory(path.to_owned()));
        }

        let io_error = |source| ListError::Io {
            path: path.to_owned(),
            source,
        };

        let mut children = Vec::new();
        for entry in std::fs::read_dir(&full_path).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            if let Some(name) = entry.file_name().to_str() {
                children.push(name.to_owned());
            }
        }

        Ok(children)
    }

    // The filesystem can answer these directly; the trait defaults exist
    // for stores where `list` is the only primitive.
    fn is_dir(&self, path: &str) -> bool {
        self.full_path(path).is_dir()
    }

    fn is_file(&self, path: &str) -> bool {
        self.full_path(path).is_file()
    }
}
