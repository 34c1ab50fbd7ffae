//! Path reconciliation primitives
//!
//! All functions normalize separators to forward slashes internally so that
//! answers produced by git on Windows (`C:/work/repo`, `C:\work\repo`) and
//! Unix (`/work/repo`) compare consistently.

use std::path::{Path, PathBuf};

/// Splits a normalized path string into its absolute prefix and the rest.
///
/// The prefix is `"/"` for rooted POSIX paths, `"C:/"` (or bare `"C:"`) for
/// drive-letter paths, and empty for relative paths.
fn split_prefix(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    if bytes.first() == Some(&b'/') {
        return ("/", &path[1..]);
    }
    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        if bytes.get(2) == Some(&b'/') {
            return (&path[..3], &path[3..]);
        }
        return (&path[..2], &path[2..]);
    }
    ("", path)
}

fn is_rooted(path: &str) -> bool {
    !split_prefix(path).0.is_empty()
}

/// Lexically cleans a path, resolving `.` and `..` components without
/// consulting the filesystem.
///
/// Follows the classic path-cleaning discipline: repeated separators
/// collapse, `.` components disappear, `..` pops a preceding component,
/// and `..` at the root of an absolute path is discarded. Cleaning an
/// empty or fully-consumed relative path yields `.`.
pub fn clean(path: impl AsRef<Path>) -> PathBuf {
    let normalized = path.as_ref().to_string_lossy().replace('\\', "/");
    let (prefix, rest) = split_prefix(&normalized);
    let rooted = !prefix.is_empty();

    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // Leading ".." survives in relative paths, vanishes at a root.
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let mut out = String::from(prefix.trim_end_matches('/'));
    if rooted && !prefix.ends_with(':') {
        out.push('/');
    }
    out.push_str(&parts.join("/"));
    if out.is_empty() {
        out.push('.');
    }
    PathBuf::from(out)
}

/// Makes a candidate path absolute against a resolved root.
///
/// Git reports metadata directories either absolutely or relative to the
/// working-tree root; relative answers are joined onto `root` before
/// cleaning, absolute answers pass through unchanged (but cleaned).
pub fn make_absolute(root: impl AsRef<Path>, candidate: impl AsRef<Path>) -> PathBuf {
    let candidate_str = candidate.as_ref().to_string_lossy().replace('\\', "/");
    if is_rooted(&candidate_str) {
        return clean(candidate_str);
    }
    let mut joined = root.as_ref().to_string_lossy().replace('\\', "/");
    if !joined.ends_with('/') {
        joined.push('/');
    }
    joined.push_str(&candidate_str);
    clean(joined)
}

/// Compares two paths for effective equality after cleaning.
///
/// An empty path never equals anything, including another empty path:
/// a missing answer must not spuriously match another missing answer.
pub fn same_path(a: impl AsRef<Path>, b: impl AsRef<Path>) -> bool {
    if a.as_ref().as_os_str().is_empty() || b.as_ref().as_os_str().is_empty() {
        return false;
    }
    clean(a) == clean(b)
}

/// Returns the final non-empty segment of a path, if it has one.
///
/// A filesystem root (`/`, `C:/`) has no segment and yields `None`.
pub fn leaf_name(path: impl AsRef<Path>) -> Option<String> {
    let cleaned = clean(path);
    let s = cleaned.to_string_lossy();
    let trimmed = s.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment.ends_with(':') {
        return None;
    }
    Some(segment.to_string())
}
