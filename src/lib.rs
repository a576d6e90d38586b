//! Android integration layer for the Ember 2D engine.
//!
//! The packaged Android asset store only exposes a flat "list children of
//! this path" primitive: no recursive walk, no stat, no seek. This crate
//! rebuilds directory-tree semantics on top of it (recursive enumeration,
//! per-directory cursors, paginated delivery) and recovers human-readable
//! names from raw TrueType files so the engine can match fonts by name.
//!
//! ### This Crate
//! The `ember_android` crate is a container crate that makes it easier to
//! consume the integration subcrates. Each module in the root of this crate
//! can also be consumed directly with `ember_` appended to the front,
//! e.g. `asset` -> `ember_asset`.

pub mod asset {
    //! Asset-store listing, path normalization, directory walking and cursors.
    pub use ember_asset::*;
}

pub mod text {
    //! TrueType name extraction and the font catalog.
    pub use ember_text::*;
}

#[cfg(target_os = "android")]
pub use ndk_glue;
