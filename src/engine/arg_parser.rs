use clap::Parser;
use std::path::{Path, PathBuf};

use crate::OutputFormat;
use crate::utils::config::PackagePaths;

/// Report the size of USD/VDB assets reachable from a version descriptor.
#[derive(Clone, Parser)]
#[command(name = "usdsize")]
#[command(
    about = "Walk the dependencies of a version.json / versioninfo.json and report the assets they pull in."
)]
pub struct Cli {
    /// Starting descriptor (version.json or versioninfo.json).
    #[arg(value_name = "DESCRIPTOR")]
    pub descriptor: PathBuf,

    /// Show the N largest assets, ranked.
    #[arg(long, short = 't', value_name = "N")]
    pub top: Option<usize>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit the per-asset listing (text output only).
    #[arg(long, short = 'q', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub quiet_list: Option<bool>,

    /// Follow symbolic links while scanning.
    #[arg(long, short = 'f', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub follow_links: Option<bool>,

    /// Exclude patterns (glob syntax). Can specify multiple: -e pattern1 pattern2 pattern3
    #[arg(long, short = 'e', num_args = 1..)]
    pub exclude: Vec<String>,

    /// Resolve relative dependency paths against the descriptor's folder instead of the working directory.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub relative_to_descriptor: Option<bool>,

    /// Config file. Default: `.usdsize.toml` next to DESCRIPTOR.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}

impl Cli {
    /// Directory searched for the default config file.
    pub fn config_dir(&self) -> &Path {
        self.descriptor
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    }

    /// Explicit config path, or the package default in [`Self::config_dir`].
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(|| {
            self.config_dir()
                .join(PackagePaths::get().config_filename())
        })
    }
}
