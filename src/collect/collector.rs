//! Depth-first descriptor traversal driven by an explicit work stack.
//!
//! Each frame is one descriptor being expanded: the expansion roots of its followed
//! dependencies still to scan, and the nested descriptors found under the current root still
//! to enter. A nested descriptor is fully expanded before its parent moves on, so the order in
//! which assets are first discovered matches a plain recursive walk.

use log::{debug, warn};
use std::collections::VecDeque;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::engine::tools::{
    descriptor_identity, expansion_root, is_followed_dependency, resolve_dependency,
};
use crate::utils::bytes_to_gb;
use crate::{AssetInfo, Collection, FailedDescriptor, ScanOpts};

use super::descriptor::load_descriptor;
use super::walk::scan_expansion_root;

struct Frame {
    /// Canonical descriptor path; origin tag for assets found while this frame is on top.
    descriptor: PathBuf,
    roots: std::vec::IntoIter<PathBuf>,
    /// Descriptor files found under the last scanned root, not yet entered.
    pending: VecDeque<PathBuf>,
}

/// Mark `path` visited and load it. Returns `None` when already visited or unloadable.
fn enter_descriptor(path: &Path, opts: &ScanOpts, collection: &mut Collection) -> Option<Frame> {
    let identity = descriptor_identity(path);
    if !collection.visited.insert(identity.clone()) {
        debug!("Already visited {}", identity.display());
        return None;
    }
    debug!("Reading descriptor {}", identity.display());

    let descriptor = match load_descriptor(&identity) {
        Ok(d) => d,
        Err(e) => {
            warn!("Skipping descriptor: {:#}", e);
            collection.failed_descriptors.push(FailedDescriptor {
                path: identity,
                reason: format!("{:#}", e),
            });
            return None;
        }
    };

    let mut roots = Vec::new();
    for dep in descriptor.dependencies() {
        if !is_followed_dependency(dep) {
            debug!("Ignoring dependency {} (not a scene file)", dep);
            continue;
        }
        let resolved = resolve_dependency(dep, &identity, opts.dependency_base);
        roots.push(expansion_root(&resolved));
    }

    Some(Frame {
        descriptor: identity,
        roots: roots.into_iter(),
        pending: VecDeque::new(),
    })
}

/// Stat each candidate not yet in the map and record it against `origin`. Candidates that no
/// longer exist are dropped without a trace; other stat errors land in `skipped_paths`.
pub fn record_candidates<I, F>(
    candidates: I,
    origin: &Path,
    collection: &mut Collection,
    on_asset: &mut F,
) where
    I: IntoIterator<Item = PathBuf>,
    F: FnMut(&Path, &AssetInfo),
{
    for path in candidates {
        if collection.assets.contains_key(&path) {
            continue;
        }
        let size_bytes = match std::fs::metadata(&path) {
            Ok(meta) => meta.len(),
            // Removed between the walk and the stat.
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                collection.skipped_paths.push((path, e.to_string()));
                continue;
            }
        };
        let info = AssetInfo {
            size_bytes,
            size_gb: bytes_to_gb(size_bytes),
            from_descriptor: origin.to_path_buf(),
        };
        on_asset(&path, &info);
        collection.assets.insert(path, info);
    }
}

/// Expand `descriptor` into `collection`. Already-visited descriptors are a no-op, so the same
/// collection can be threaded through several calls. `on_asset` sees each newly recorded asset.
pub fn collect_into<F>(
    descriptor: &Path,
    opts: &ScanOpts,
    collection: &mut Collection,
    mut on_asset: F,
) where
    F: FnMut(&Path, &AssetInfo),
{
    let mut stack: Vec<Frame> = enter_descriptor(descriptor, opts, collection)
        .into_iter()
        .collect();

    while let Some(frame) = stack.last_mut() {
        if let Some(candidate) = frame.pending.pop_front() {
            if let Some(child) = enter_descriptor(&candidate, opts, collection) {
                stack.push(child);
            }
            continue;
        }
        if let Some(root) = frame.roots.next() {
            debug!("Expanding {}", root.display());
            let scan = scan_expansion_root(&root, opts, &mut collection.skipped_paths);
            record_candidates(scan.assets, &frame.descriptor, collection, &mut on_asset);
            frame.pending = scan.descriptors.into();
            continue;
        }
        stack.pop();
    }
}

/// Run a full traversal from `descriptor` with a fresh [`Collection`].
pub fn collect_from<F>(descriptor: &Path, opts: &ScanOpts, on_asset: F) -> Collection
where
    F: FnMut(&Path, &AssetInfo),
{
    let mut collection = Collection::new();
    collect_into(descriptor, opts, &mut collection, on_asset);
    collection
}
