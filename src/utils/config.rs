//! Application configuration constants.
//! Recognized file names, extensions and size units in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Recognized files ----

/// File names and extensions the collector recognizes.
pub struct RecognizedFiles;

impl RecognizedFiles {
    /// Descriptor file names, matched exactly.
    pub const DESCRIPTOR_NAMES: [&'static str; 2] = ["version.json", "versioninfo.json"];
    /// Extensions reported as assets (lowercase, matched case-insensitively).
    pub const ASSET_EXTENSIONS: [&'static str; 4] = [".usdc", ".usd", ".usda", ".vdb"];
    /// Extensions a dependency entry must carry to be followed. `.vdb` volumes are
    /// reported but never expanded.
    pub const FOLLOWED_EXTENSIONS: [&'static str; 3] = [".usdc", ".usd", ".usda"];
}

// ---- Sizes ----

/// Binary size units.
pub struct SizeConsts;

impl SizeConsts {
    pub const UNIT_STEP: f64 = 1024.0;
    pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;
    /// Display units up to TB; anything larger falls through to PB.
    pub const UNITS: [&'static str; 5] = ["B", "KB", "MB", "GB", "TB"];
    pub const OVERFLOW_UNIT: &'static str = "PB";
}

// ---- Progress ----

/// Update the progress counter every this many recorded assets.
pub const PROGRESS_UPDATE_BATCH_SIZE: usize = 25;
