//! Path and filter utilities

use std::path::{Component, Path, PathBuf};

use crate::DependencyBase;
use crate::utils::config::RecognizedFiles;

/// Case-insensitive suffix match of the file name against `extensions` (lowercase, with dot).
fn has_extension(name: &str, extensions: &[&str]) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext))
}

/// True if `name` ends in a recognized asset extension (`.usdc`, `.usd`, `.usda`, `.vdb`).
pub fn is_asset_file(name: &str) -> bool {
    has_extension(name, &RecognizedFiles::ASSET_EXTENSIONS)
}

/// True if a dependency entry should be followed (scene extensions only, never `.vdb`).
pub fn is_followed_dependency(entry: &str) -> bool {
    has_extension(entry, &RecognizedFiles::FOLLOWED_EXTENSIONS)
}

/// True if `name` is exactly one of the descriptor file names.
pub fn is_descriptor_file(name: &str) -> bool {
    RecognizedFiles::DESCRIPTOR_NAMES.contains(&name)
}

/// Check if a file should be excluded based on OS-specific hidden files
pub fn is_os_hidden_file(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        match name {
            // macOS
            ".DS_Store" | ".AppleDouble" | ".LSOverride" => true,
            // Windows
            "Thumbs.db" | "ehthumbs.db" | "Desktop.ini" | "$RECYCLE.BIN" => true,
            // Linux
            ".directory" => true,
            // macOS resource forks and Linux trash dirs
            _ => name.starts_with("._") || name.starts_with(".Trash-"),
        }
    } else {
        false
    }
}

/// Returns true if the path should be included in the walk (not excluded).
/// The walk root itself is always included so its children are reached.
pub fn should_include_in_walk(path: &Path, root: &Path, exclude_patterns: &[String]) -> bool {
    if path == root {
        return true;
    }
    if is_os_hidden_file(path) {
        return false;
    }
    if exclude_patterns.is_empty() {
        return true;
    }
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return true,
    };
    let path_str = path.to_str().unwrap_or("");
    !exclude_patterns
        .iter()
        .any(|pattern| glob_match(pattern, name) || glob_match(pattern, path_str))
}

/// Simple glob pattern matching (supports * and ?)
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    glob_match_chars(&pattern, &text)
}

fn glob_match_chars(pattern: &[char], text: &[char]) -> bool {
    match pattern.split_first() {
        None => text.is_empty(),
        Some(('*', rest)) => {
            if rest.is_empty() {
                return true; // trailing * matches everything
            }
            (0..=text.len()).any(|i| glob_match_chars(rest, &text[i..]))
        }
        Some(('?', rest)) => !text.is_empty() && glob_match_chars(rest, &text[1..]),
        Some((c, rest)) => text.first() == Some(c) && glob_match_chars(rest, &text[1..]),
    }
}

/// Collapse `.` and `..` components without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Absolute form of `path` without resolving symlinks. Relative paths are joined onto the
/// working directory; falls back to the path as given if that is unavailable.
pub fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path)
        .map(|p| normalize_lexically(&p))
        .unwrap_or_else(|_| normalize_lexically(path))
}

/// Identity of a descriptor: canonical path when it exists, else its absolute form.
pub fn descriptor_identity(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| absolutize(path))
}

/// Resolve a dependency entry listed in `descriptor` to an absolute path.
pub fn resolve_dependency(entry: &str, descriptor: &Path, base: DependencyBase) -> PathBuf {
    let dep = Path::new(entry);
    if dep.is_absolute() {
        return normalize_lexically(dep);
    }
    match base {
        DependencyBase::Descriptor => {
            let dir = descriptor.parent().unwrap_or(Path::new("."));
            absolutize(&dir.join(dep))
        }
        DependencyBase::WorkingDir => absolutize(dep),
    }
}

/// Directory whose subtree is scanned for a dependency: the dependency's parent.
pub fn expansion_root(dependency: &Path) -> PathBuf {
    dependency
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dependency.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_cur_and_parent() {
        assert_eq!(
            normalize_lexically(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize_lexically(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize_lexically(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(
            normalize_lexically(Path::new("../../a")),
            PathBuf::from("../../a")
        );
    }

    #[test]
    fn test_expansion_root_is_parent() {
        assert_eq!(
            expansion_root(Path::new("/show/shot/geo/main.usdc")),
            PathBuf::from("/show/shot/geo")
        );
    }
}
