//! Public and internal types for the usdsize API and traversal.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Metadata for one discovered asset file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AssetInfo {
    /// File size in bytes.
    pub size_bytes: u64,
    /// File size in GB (1024-based), derived from `size_bytes`.
    pub size_gb: f64,
    /// Canonical path of the descriptor whose dependency led to this asset.
    pub from_descriptor: PathBuf,
}

/// Map of asset path → metadata, in discovery order.
///
/// The first descriptor to discover a path owns it; later rediscoveries leave the entry alone.
pub type AssetMap = IndexMap<PathBuf, AssetInfo>;

/// A descriptor that could not be loaded or parsed.
#[derive(Clone, Debug, Serialize)]
pub struct FailedDescriptor {
    pub path: PathBuf,
    pub reason: String,
}

/// Mutable traversal context: everything accumulated over one run.
#[derive(Debug, Default)]
pub struct Collection {
    /// Canonical descriptor paths already processed.
    pub visited: HashSet<PathBuf>,
    pub assets: AssetMap,
    pub failed_descriptors: Vec<FailedDescriptor>,
    /// Paths the subtree walk could not read, with the error message.
    pub skipped_paths: Vec<(PathBuf, String)>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of `size_bytes` over all discovered assets.
    pub fn total_bytes(&self) -> u64 {
        self.assets.values().map(|a| a.size_bytes).sum()
    }
}

/// How relative dependency entries are turned into absolute paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DependencyBase {
    /// Relative to the process working directory.
    #[default]
    WorkingDir,
    /// Relative to the directory containing the descriptor that lists them.
    Descriptor,
}

impl DependencyBase {
    /// Base selected by a `relative_to_descriptor` switch.
    pub fn from_descriptor_flag(relative_to_descriptor: bool) -> Self {
        if relative_to_descriptor {
            Self::Descriptor
        } else {
            Self::WorkingDir
        }
    }
}

/// Lib-facing options for [`collect_assets`](crate::collect_assets).
#[derive(Clone, Debug, Default)]
pub struct ScanOpts {
    /// Follow symbolic links while walking expansion roots.
    pub follow_links: bool,
    /// Exclude patterns (glob syntax, e.g. `cache`, `*.bak`).
    pub exclude: Vec<String>,
    /// Base for relative dependency entries.
    pub dependency_base: DependencyBase,
}

/// Output format for the CLI report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Full options (CLI). Use [`ScanOpts`] for lib.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    pub scan: ScanOpts,
    /// Show debug logs and a progress counter.
    pub verbose: bool,
    /// Rank and print the N largest assets.
    pub top: Option<usize>,
    pub format: OutputFormat,
    /// Omit the per-asset listing in text mode.
    pub quiet_list: bool,
}
