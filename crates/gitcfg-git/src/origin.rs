//! Origin descriptor normalization
//!
//! `git config --show-origin` reports where each entry was declared in one
//! ambiguous field: usually `file:<path>:<line>`, but also bare provenance
//! labels such as `command line`, `standard input`, or `blob:<object>`.

/// Splits an origin descriptor into a label and a line number.
///
/// For `file:` origins the remainder is split at its *last* colon; the
/// suffix counts as a line number only when it parses as a base-10
/// non-negative integer. A non-numeric suffix keeps the colon as part of
/// the path, which is what prevents drive-letter paths like
/// `file:C:/dev/.gitconfig` from being misread as ending in a line number.
///
/// Non-`file:` descriptors come back verbatim with line 0. Callers must
/// treat the label as opaque; it is not guaranteed to be an openable path.
pub fn normalize_origin(origin: &str) -> (String, u32) {
    if origin.is_empty() {
        return (String::new(), 0);
    }

    const PREFIX: &str = "file:";
    let Some(path_with_line) = origin.strip_prefix(PREFIX) else {
        return (origin.to_string(), 0);
    };

    let Some(colon) = path_with_line.rfind(':') else {
        return (path_with_line.to_string(), 0);
    };

    match path_with_line[colon + 1..].parse::<u32>() {
        Ok(line) => (path_with_line[..colon].to_string(), line),
        Err(_) => (path_with_line.to_string(), 0),
    }
}
