//! Subtree walk: lists files under an expansion root, records unreadable paths.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::ScanOpts;
use crate::engine::tools::{is_asset_file, is_descriptor_file, should_include_in_walk};

/// One result from a directory walk: either a file to consider or an error with optional path.
pub enum WalkOutcome {
    Ok(PathBuf),
    Err { msg: String, path: Option<PathBuf> },
}

/// Convert a walkdir result into [`WalkOutcome`]. Directories yield `None`.
pub fn to_outcome_walkdir(r: Result<walkdir::DirEntry, walkdir::Error>) -> Option<WalkOutcome> {
    match r {
        Ok(entry) => {
            // Unfollowed symlinks still count when they point at a file.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            is_file.then(|| WalkOutcome::Ok(entry.into_path()))
        }
        Err(err) => Some(WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        }),
    }
}

fn walkdir_iter<'a>(root: &'a Path, opts: &'a ScanOpts) -> impl Iterator<Item = WalkOutcome> + 'a {
    WalkDir::new(root)
        .follow_links(opts.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| should_include_in_walk(e.path(), root, &opts.exclude))
        .filter_map(to_outcome_walkdir)
}

/// Files found under one expansion root, in walk order.
#[derive(Debug, Default)]
pub struct ExpansionScan {
    /// Files with a recognized asset extension.
    pub assets: Vec<PathBuf>,
    /// Descriptor files (`version.json`, `versioninfo.json`).
    pub descriptors: Vec<PathBuf>,
}

/// Walk `root` once, sorting files into assets and descriptors.
/// Errors are pushed onto `skipped` as `(path, message)`; the walk continues past them.
pub fn scan_expansion_root(
    root: &Path,
    opts: &ScanOpts,
    skipped: &mut Vec<(PathBuf, String)>,
) -> ExpansionScan {
    let mut scan = ExpansionScan::default();
    for outcome in walkdir_iter(root, opts) {
        match outcome {
            WalkOutcome::Ok(path) => {
                // Lossy: a non-UTF-8 stem still keeps its ASCII extension.
                let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned())
                else {
                    continue;
                };
                if is_descriptor_file(&name) {
                    scan.descriptors.push(path);
                } else if is_asset_file(&name) {
                    scan.assets.push(path);
                }
            }
            WalkOutcome::Err { msg, path } => {
                let path = path.unwrap_or_else(|| root.to_path_buf());
                log::debug!("Walk error under {}: {}", root.display(), msg);
                skipped.push((path, msg));
            }
        }
    }
    scan
}
