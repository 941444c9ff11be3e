use std::path::{Path, PathBuf};
use usdsize::DependencyBase;
use usdsize::engine::{
    expansion_root, glob_match, is_asset_file, is_descriptor_file, is_followed_dependency,
    is_os_hidden_file, resolve_dependency, should_include_in_walk,
};
use usdsize::{bytes_to_gb, format_size};

// --- format_size / bytes_to_gb ---

#[test]
fn test_format_size_reference_values() {
    assert_eq!(format_size(500), "500.00 B");
    assert_eq!(format_size(2048), "2.00 KB");
    assert_eq!(format_size(1024_u64.pow(3)), "1.00 GB");
}

#[test]
fn test_bytes_to_gb_one_gb() {
    assert_eq!(bytes_to_gb(1024_u64.pow(3)), 1.0);
}

// --- extension predicates ---

#[test]
fn test_asset_extensions_case_insensitive() {
    assert!(is_asset_file("shot.usdc"));
    assert!(is_asset_file("shot.USD"));
    assert!(is_asset_file("layout.Usda"));
    assert!(is_asset_file("smoke.0001.vdb"));
    assert!(!is_asset_file("shot.usdz"));
    assert!(!is_asset_file("notes.txt"));
    assert!(!is_asset_file("usd"));
}

#[test]
fn test_vdb_is_asset_but_not_followed() {
    assert!(is_asset_file("fx/smoke.vdb"));
    assert!(!is_followed_dependency("fx/smoke.vdb"));
}

#[test]
fn test_followed_dependency_extensions() {
    assert!(is_followed_dependency("geo/main.usdc"));
    assert!(is_followed_dependency("/abs/geo/main.USD"));
    assert!(is_followed_dependency("layout.usda"));
    assert!(!is_followed_dependency("textures/albedo.exr"));
    assert!(!is_followed_dependency("rig.json"));
}

#[test]
fn test_descriptor_names_exact() {
    assert!(is_descriptor_file("version.json"));
    assert!(is_descriptor_file("versioninfo.json"));
    assert!(!is_descriptor_file("Version.json"));
    assert!(!is_descriptor_file("version.json.bak"));
    assert!(!is_descriptor_file("my_version.json"));
}

// --- glob_match / should_include_in_walk ---

#[test]
fn test_glob_match_literal() {
    assert!(glob_match("cache", "cache"));
    assert!(!glob_match("cache", "caches"));
}

#[test]
fn test_glob_match_star() {
    assert!(glob_match("*.bak", "shot.usd.bak"));
    assert!(glob_match("*.bak", ".bak"));
    assert!(!glob_match("*.bak", "shot.bak.usd"));
    assert!(glob_match("tmp_*", "tmp_render"));
    assert!(glob_match("*/cache/*", "/show/cache/a.usd"));
}

#[test]
fn test_glob_match_question_mark() {
    assert!(glob_match("v00?", "v001"));
    assert!(!glob_match("v00?", "v00"));
    assert!(!glob_match("v00?", "v0012"));
}

#[test]
fn test_os_hidden_files() {
    assert!(is_os_hidden_file(Path::new("/a/.DS_Store")));
    assert!(is_os_hidden_file(Path::new("/a/._shot.usd")));
    assert!(is_os_hidden_file(Path::new("/a/Thumbs.db")));
    assert!(is_os_hidden_file(Path::new("/a/.Trash-1000")));
    assert!(!is_os_hidden_file(Path::new("/a/shot.usd")));
}

#[test]
fn test_should_include_root_always() {
    let root = PathBuf::from("/show/cache");
    assert!(should_include_in_walk(&root, &root, &["cache".to_string()]));
}

#[test]
fn test_should_include_exclude_pattern_name() {
    let root = PathBuf::from("/show");
    let path = PathBuf::from("/show/cache");
    assert!(!should_include_in_walk(
        &path,
        &root,
        &["cache".to_string()]
    ));
}

#[test]
fn test_should_include_exclude_pattern_glob() {
    let root = PathBuf::from("/show");
    let path = PathBuf::from("/show/geo/old.usd.bak");
    assert!(!should_include_in_walk(&path, &root, &["*.bak".to_string()]));
}

#[test]
fn test_should_include_not_excluded() {
    let root = PathBuf::from("/show");
    let path = PathBuf::from("/show/geo/main.usd");
    assert!(should_include_in_walk(
        &path,
        &root,
        &["*.bak".to_string(), "cache".to_string()]
    ));
}

// --- dependency resolution ---

#[test]
fn test_resolve_absolute_dependency_unchanged() {
    let descriptor = PathBuf::from("/show/shot/version.json");
    assert_eq!(
        resolve_dependency("/lib/assets/tree.usd", &descriptor, DependencyBase::Descriptor),
        PathBuf::from("/lib/assets/tree.usd")
    );
}

#[test]
fn test_resolve_relative_to_descriptor() {
    let descriptor = PathBuf::from("/show/shot/version.json");
    assert_eq!(
        resolve_dependency("../assets/tree.usd", &descriptor, DependencyBase::Descriptor),
        PathBuf::from("/show/assets/tree.usd")
    );
    assert_eq!(
        resolve_dependency("./geo/main.usdc", &descriptor, DependencyBase::Descriptor),
        PathBuf::from("/show/shot/geo/main.usdc")
    );
}

#[test]
fn test_resolve_relative_to_working_dir() {
    let descriptor = PathBuf::from("/show/shot/version.json");
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(
        resolve_dependency("geo/main.usdc", &descriptor, DependencyBase::WorkingDir),
        cwd.join("geo/main.usdc")
    );
}

#[test]
fn test_expansion_root_of_resolved_dependency() {
    let descriptor = PathBuf::from("/show/shot/version.json");
    let dep = resolve_dependency("geo/main.usdc", &descriptor, DependencyBase::Descriptor);
    assert_eq!(expansion_root(&dep), PathBuf::from("/show/shot/geo"));
}
