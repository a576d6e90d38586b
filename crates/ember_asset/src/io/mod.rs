use thiserror::Error;

#[cfg(not(target_os = "android"))]
mod file_asset_listing;

#[cfg(target_os = "android")]
mod android_asset_listing;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("no asset entry at {0:?}")]
    NotFound(String),

    #[error("{0:?} is not a directory")]
    NotADirectory(String),

    #[error("failed to list {path:?}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The one primitive the asset store offers: immediate child names of a
/// directory. Not recursive, and the order of siblings is unspecified.
pub trait AssetListing: std::fmt::Debug + Send + Sync + 'static {
    fn list(&self, path: &str) -> Result<Vec<String>, ListError>;

    /// A path that lists with at least one child is a directory. That is
    /// the strongest statement the store supports.
    fn is_dir(&self, path: &str) -> bool {
        self.list(path).map(|children| !children.is_empty()).unwrap_or(false)
    }

    fn is_file(&self, path: &str) -> bool {
        self.list(path).map(|children| children.is_empty()).unwrap_or(false)
    }
}

#[cfg(not(target_os = "android"))]
pub use file_asset_listing::FileAssetListing;

#[cfg(target_os = "android")]
pub use android_asset_listing::AndroidAssetListing;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedListing;

    impl AssetListing for FixedListing {
        fn list(&self, path: &str) -> Result<Vec<String>, ListError> {
            match path {
                "filled" => Ok(vec!["child.txt".to_owned()]),
                "empty" => Ok(Vec::new()),
                _ => Err(ListError::NotFound(path.to_owned())),
            }
        }
    }

    #[test]
    fn default_probes_follow_store_semantics() {
        let listing = FixedListing;

        assert!(listing.is_dir("filled"));
        assert!(!listing.is_file("filled"));
        // A path that lists empty could be a file or an empty directory;
        // the store cannot tell them apart, so it reads as a file.
        assert!(!listing.is_dir("empty"));
        assert!(listing.is_file("empty"));
        assert!(!listing.is_dir("nowhere"));
        assert!(!listing.is_file("nowhere"));
    }
}
