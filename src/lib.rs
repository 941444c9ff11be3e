//! usdsize: size report for the USD/VDB assets a version descriptor pulls in.
//!
//! Starting from a `version.json` / `versioninfo.json`, every dependency with a scene extension
//! (`.usd`, `.usda`, `.usdc`) is expanded into its containing folder. Assets found anywhere
//! below that folder are recorded with their size, and nested descriptors found there are
//! followed in turn. Each descriptor is processed at most once.

pub mod collect;
pub mod engine;
pub mod report;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

pub use utils::{bytes_to_gb, format_size};

use log::debug;
use std::path::Path;

/// Result alias used by public usdsize API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Collect every asset reachable from `descriptor`.
///
/// Never fails: descriptors that cannot be read end up in
/// [`Collection::failed_descriptors`], unreadable paths in [`Collection::skipped_paths`], and
/// whatever was found before and after them is still returned.
pub fn collect_assets(descriptor: &Path, opts: &ScanOpts) -> Collection {
    collect_assets_with(descriptor, opts, |_, _| {})
}

/// Same as [`collect_assets`], invoking `on_asset` for each asset as it is recorded.
pub fn collect_assets_with<F>(descriptor: &Path, opts: &ScanOpts, on_asset: F) -> Collection
where
    F: FnMut(&Path, &AssetInfo),
{
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    collect::collect_from(descriptor, opts, on_asset)
}
