//! Load `.usdsize.toml` (CLI only). Lib callers pass [`ScanOpts`](crate::ScanOpts) directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::{DependencyBase, Opts, OutputFormat};

#[derive(Debug, Default, Deserialize)]
pub struct UsdsizeToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    top: Option<usize>,
    format: Option<OutputFormat>,
    follow_links: Option<bool>,
    exclude: Option<Vec<String>>,
    relative_to_descriptor: Option<bool>,
    verbose: Option<bool>,
    quiet_list: Option<bool>,
}

/// Parse a config file's contents.
pub fn parse_usdsize_toml(s: &str) -> Result<UsdsizeToml> {
    toml::from_str(s).context("parse config")
}

/// Load an explicitly requested config file. Unreadable or malformed files are errors.
pub fn load_usdsize_toml(path: &Path) -> Result<UsdsizeToml> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    parse_usdsize_toml(&s).with_context(|| format!("load config {}", path.display()))
}

/// Load the default config from `dir` if present. Missing file → `Ok(None)`; unreadable or
/// malformed → `Err` (the CLI logs it and carries on with defaults).
pub fn load_default_usdsize_toml(dir: &Path) -> Result<Option<UsdsizeToml>> {
    let path = dir.join(crate::utils::PackagePaths::get().config_filename());
    let s = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read config {}", path.display())),
    };
    parse_usdsize_toml(&s)
        .map(Some)
        .with_context(|| format!("load config {}", path.display()))
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $opts:expr, $field:ident => $($opts_field:ident).+) => {
        if let Some(v) = $section.$field {
            $opts.$($opts_field).+ = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI flags.
pub fn apply_file_to_opts(file: &UsdsizeToml, opts: &mut Opts) {
    let s = &file.settings;
    if let Some(top) = s.top {
        opts.top = Some(top);
    }
    apply_file_opt!(s, opts, format => format);
    apply_file_opt!(s, opts, follow_links => scan.follow_links);
    if let Some(ref v) = s.exclude {
        opts.scan.exclude = v.clone();
    }
    if let Some(flag) = s.relative_to_descriptor {
        opts.scan.dependency_base = DependencyBase::from_descriptor_flag(flag);
    }
    apply_file_opt!(s, opts, verbose => verbose);
    apply_file_opt!(s, opts, quiet_list => quiet_list);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_present_fields() {
        let file = parse_usdsize_toml(
            r#"
            [settings]
            top = 5
            exclude = ["cache"]
            relative_to_descriptor = true
            "#,
        )
        .unwrap();
        let mut opts = Opts {
            quiet_list: true,
            ..Default::default()
        };
        apply_file_to_opts(&file, &mut opts);
        assert_eq!(opts.top, Some(5));
        assert_eq!(opts.scan.exclude, vec!["cache".to_string()]);
        assert_eq!(opts.scan.dependency_base, DependencyBase::Descriptor);
        assert!(opts.quiet_list);
        assert_eq!(opts.format, OutputFormat::Text);
    }

    #[test]
    fn test_format_from_file() {
        let file = parse_usdsize_toml("[settings]\nformat = \"json\"\n").unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts);
        assert_eq!(opts.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_file_is_valid() {
        let file = parse_usdsize_toml("").unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts);
        assert_eq!(opts.top, None);
        assert!(!opts.scan.follow_links);
    }

    #[test]
    fn test_malformed_file_is_error() {
        assert!(parse_usdsize_toml("[settings]\ntop = \"many\"\n").is_err());
    }
    #[test]
    fn test_default_config_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_default_usdsize_toml(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_default_config_unreadable_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".usdsize.toml")).unwrap();
        assert!(load_default_usdsize_toml(dir.path()).is_err());
    }
}
