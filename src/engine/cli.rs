//! CLI command handler: collect from the descriptor, then print the report.

use anyhow::Result;
use log::{debug, warn};

use crate::engine::arg_parser::Cli;
use crate::engine::progress::AssetProgress;
use crate::report::{print_report, report_skipped_paths};
use crate::utils::{
    UsdsizeToml, apply_file_to_opts, load_default_usdsize_toml, load_usdsize_toml,
    setup_logging,
};
use crate::{DependencyBase, Opts, collect_assets_with};

/// Overwrite opts field from a CLI flag when it was given.
macro_rules! apply_cli_opt {
    ($cli:expr, $opts:expr, $field:ident => $($opts_field:ident).+) => {
        if let Some(v) = $cli.$field {
            $opts.$($opts_field).+ = v;
        }
    };
}

/// Layer CLI flags over `opts` (already holding defaults + file config).
pub fn apply_cli_to_opts(cli: &Cli, opts: &mut Opts) {
    if cli.top.is_some() {
        opts.top = cli.top;
    }
    apply_cli_opt!(cli, opts, format => format);
    apply_cli_opt!(cli, opts, quiet_list => quiet_list);
    apply_cli_opt!(cli, opts, follow_links => scan.follow_links);
    apply_cli_opt!(cli, opts, verbose => verbose);
    if !cli.exclude.is_empty() {
        opts.scan.exclude = cli.exclude.clone();
    }
    if let Some(flag) = cli.relative_to_descriptor {
        opts.scan.dependency_base = DependencyBase::from_descriptor_flag(flag);
    }
}

/// Defaults < config file < CLI flags. A malformed default config is returned as a warning
/// to log once logging is up; an explicit `--config` that fails is an error.
fn setup_opts(cli: &Cli) -> Result<(Opts, Option<String>)> {
    let mut opts = Opts::default();
    let mut config_warning = None;
    let file: Option<UsdsizeToml> = match &cli.config {
        Some(path) => Some(load_usdsize_toml(path)?),
        None => load_default_usdsize_toml(cli.config_dir()).unwrap_or_else(|e| {
            config_warning = Some(format!("Ignoring config: {:#}", e));
            None
        }),
    };
    if let Some(file) = &file {
        apply_file_to_opts(file, &mut opts);
    }
    apply_cli_to_opts(cli, &mut opts);
    Ok((opts, config_warning))
}

/// Collect assets reachable from the descriptor and print the report. The traversal itself
/// never fails: an unreadable descriptor yields an empty or partial report.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let (opts, config_warning) = setup_opts(cli)?;
    setup_logging(opts.verbose);
    if let Some(msg) = config_warning {
        warn!("{}", msg);
    }
    debug!("Config file: {}", cli.config_path().display());
    debug!("Scanning from {}", cli.descriptor.display());

    let mut progress = AssetProgress::new(opts.verbose);
    let collection = collect_assets_with(&cli.descriptor, &opts.scan, |_, _| progress.tick());
    progress.finish();

    debug!(
        "Visited {} descriptor(s), {} asset(s)",
        collection.visited.len(),
        collection.assets.len()
    );
    report_skipped_paths(&collection, opts.verbose);
    print_report(&collection, &cli.descriptor, &opts)
}
