//! Report rendering: asset listing, ranked top-N, totals, JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::utils::format_size;
use crate::{AssetInfo, AssetMap, Collection, FailedDescriptor, Opts, OutputFormat};

/// The `n` largest assets, largest first. Equal sizes are ordered by path.
pub fn top_assets(assets: &AssetMap, n: usize) -> Vec<(&PathBuf, &AssetInfo)> {
    let mut ranked: Vec<_> = assets.iter().collect();
    ranked.sort_by(|(pa, a), (pb, b)| b.size_bytes.cmp(&a.size_bytes).then_with(|| pa.cmp(pb)));
    ranked.truncate(n);
    ranked
}

/// Render the human-readable report.
pub fn render_text(collection: &Collection, opts: &Opts) -> String {
    let mut out = String::new();

    if !opts.quiet_list {
        for (path, info) in &collection.assets {
            let _ = writeln!(out, "- {}", path.display());
            let _ = writeln!(out, "    Linked to: {}", info.from_descriptor.display());
        }
    }

    if let Some(n) = opts.top {
        let ranked = top_assets(&collection.assets, n);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            format!("Top {} largest assets:", ranked.len()).bold()
        );
        for (rank, (path, info)) in ranked.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>4}. {:>12}  {}",
                rank + 1,
                format_size(info.size_bytes),
                path.display()
            );
            let _ = writeln!(out, "      from {}", info.from_descriptor.display());
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total size of all assets: {} ({} files)",
        format_size(collection.total_bytes()).green().bold(),
        collection.assets.len()
    );

    if !collection.failed_descriptors.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            format!(
                "Failed to load {} descriptor(s):",
                collection.failed_descriptors.len()
            )
            .yellow()
        );
        for failed in &collection.failed_descriptors {
            let _ = writeln!(out, "  {}: {}", failed.path.display(), failed.reason);
        }
    }
    out
}

#[derive(Serialize)]
struct JsonAsset<'a> {
    path: &'a Path,
    #[serde(flatten)]
    info: &'a AssetInfo,
}

#[derive(Serialize)]
struct JsonSkipped<'a> {
    path: &'a Path,
    error: &'a str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    total_bytes: u64,
    total_human: String,
    assets: Vec<JsonAsset<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top: Option<Vec<JsonAsset<'a>>>,
    failed_descriptors: &'a [FailedDescriptor],
    skipped_paths: Vec<JsonSkipped<'a>>,
}

fn json_assets<'a, I>(iter: I) -> Vec<JsonAsset<'a>>
where
    I: IntoIterator<Item = (&'a PathBuf, &'a AssetInfo)>,
{
    iter.into_iter()
        .map(|(path, info)| JsonAsset { path, info })
        .collect()
}

/// Render the report as a pretty-printed JSON document.
pub fn render_json(collection: &Collection, root: &Path, opts: &Opts) -> Result<String> {
    let total = collection.total_bytes();
    let report = JsonReport {
        root,
        total_bytes: total,
        total_human: format_size(total),
        assets: json_assets(&collection.assets),
        top: opts
            .top
            .map(|n| json_assets(top_assets(&collection.assets, n))),
        failed_descriptors: &collection.failed_descriptors,
        skipped_paths: collection
            .skipped_paths
            .iter()
            .map(|(path, error)| JsonSkipped { path, error })
            .collect(),
    };
    serde_json::to_string_pretty(&report).context("serialize report")
}

/// Print the report for `collection` to stdout in the configured format.
pub fn print_report(collection: &Collection, root: &Path, opts: &Opts) -> Result<()> {
    match opts.format {
        OutputFormat::Text => print!("{}", render_text(collection, opts)),
        OutputFormat::Json => println!("{}", render_json(collection, root, opts)?),
    }
    Ok(())
}

/// Warn once about walk errors; list them individually when verbose.
pub fn report_skipped_paths(collection: &Collection, verbose: bool) {
    let skipped = collection.skipped_paths.len();
    if skipped == 0 {
        return;
    }
    log::warn!(
        "Skipped {} paths due to permission errors or access issues",
        skipped
    );
    if verbose {
        for (p, msg) in &collection.skipped_paths {
            eprintln!("  skipped: {} ({})", p.display(), msg);
        }
    }
}
