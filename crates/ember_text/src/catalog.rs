use std::{
    io,
    path::{Path, PathBuf},
};

use ember_asset::io::AssetListing;

use crate::ttf;

/// Directories Android may keep system fonts in.
pub const SYSTEM_FONT_DIRS: [&str; 3] = ["/system/fonts", "/system/font", "/data/fonts"];

/// Asset-store directory holding the game's bundled fonts.
pub const ASSET_FONT_DIR: &str = "fonts";

/// Stages a bundled font into a location the name parser can seek in. The
/// asset store itself cannot be random-accessed.
pub trait FontStager: std::fmt::Debug {
    fn stage(&self, name: &str) -> io::Result<PathBuf>;
}

/// Stager that copies bundled fonts into a cache directory.
#[derive(Debug)]
pub struct CacheFontStager {
    fonts_dir: PathBuf,
    cache_dir: PathBuf,
}

impl CacheFontStager {
    pub fn new<P: AsRef<Path>, C: AsRef<Path>>(asset_base: P, cache_dir: C) -> Self {
        Self {
            fonts_dir: asset_base.as_ref().join(ASSET_FONT_DIR),
            cache_dir: cache_dir.as_ref().to_owned(),
        }
    }
}

impl FontStager for CacheFontStager {
    fn stage(&self, name: &str) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.cache_dir)?;

        let staged = self.cache_dir.join(name);
        if staged.exists() {
            std::fs::remove_file(&staged)?;
        }
        std::fs::copy(self.fonts_dir.join(name), &staged)?;

        Ok(staged)
    }
}

#[derive(Debug)]
pub struct FontEntry {
    pub path: PathBuf,
    pub display_name: String,
}

/// Every font the device and the game bundle offer, keyed by the name
/// embedded in the font file.
///
/// Entries keep insertion order, so [`FontCatalog::lookup`] always resolves
/// ties the same way for a given enumeration.
#[derive(Debug, Default)]
pub struct FontCatalog {
    entries: Vec<FontEntry>,
}

impl FontCatalog {
    /// Rebuilds the catalog wholesale: every file in each system directory
    /// (non-recursive), then every bundled `.ttf`, staged first so it can
    /// be parsed. Files with no extractable name are skipped.
    pub fn enumerate(
        &mut self,
        system_dirs: &[PathBuf],
        assets: &dyn AssetListing,
        stager: &dyn FontStager,
    ) {
        self.entries.clear();

        for dir in system_dirs {
            let Ok(read) = std::fs::read_dir(dir) else {
                continue;
            };
            for file in read.flatten() {
                let path = file.path();
                if let Some(display_name) = ttf::font_full_name_from_path(&path) {
                    self.entries.push(FontEntry { path, display_name });
                }
            }
        }

        let bundled = match assets.list(ASSET_FONT_DIR) {
            Ok(children) => children,
            Err(error) => {
                log::warn!("no bundled fonts: {error}");
                return;
            }
        };

        for font in bundled {
            if !font.ends_with(".ttf") {
                continue;
            }
            let staged = match stager.stage(&font) {
                Ok(path) => path,
                Err(error) => {
                    log::warn!("failed staging bundled font {font:?}: {error}");
                    continue;
                }
            };
            if let Some(display_name) = ttf::font_full_name_from_path(&staged) {
                self.entries.push(FontEntry {
                    path: staged,
                    display_name,
                });
            }
        }
    }

    /// [`FontCatalog::enumerate`] over the standard device font directories.
    pub fn enumerate_device(&mut self, assets: &dyn AssetListing, stager: &dyn FontStager) {
        let system_dirs: Vec<PathBuf> = SYSTEM_FONT_DIRS.iter().map(PathBuf::from).collect();
        self.enumerate(&system_dirs, assets, stager);
    }

    /// First font whose display name contains `fragment`. Unstyled lookups
    /// refuse names carrying an Italic or Bold marker, so a plain
    /// "Helvetica" query cannot land on "Helvetica Bold".
    pub fn lookup(&self, fragment: &str, want_styled: bool) -> Option<&Path> {
        self.entries
            .iter()
            .find(|entry| {
                entry.display_name.contains(fragment)
                    && (want_styled
                        || (!entry.display_name.contains("Italic")
                            && !entry.display_name.contains("Bold")))
            })
            .map(|entry| entry.path.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn log_fonts(&self) {
        for entry in &self.entries {
            log::info!("font: {} ({})", entry.display_name, entry.path.display());
        }
    }
}
