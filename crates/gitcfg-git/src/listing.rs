//! Tokenizer for NUL-delimited configuration listings
//!
//! `git config --null --show-origin --show-scope --list` emits repeating
//! groups of three NUL-terminated fields: scope label, origin descriptor,
//! and a key/value unit in which the key ends at the first newline.

use serde::Serialize;

use crate::origin::normalize_origin;
use crate::scope::Scope;

/// One parsed configuration entry, in raw emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawRecord {
    /// Dotted configuration key, case preserved as emitted
    pub key: String,

    /// Value, possibly empty
    pub value: String,

    /// Provenance tier labelled by git
    pub scope: Scope,

    /// File path or opaque provenance label from the origin descriptor
    pub origin_file: String,

    /// 1-based line within the origin file, 0 when not applicable
    pub origin_line: u32,

    /// Zero-based emission index over retained records.
    ///
    /// This is the sole precedence signal downstream: later entries
    /// override earlier ones for the same key. Skipped padding or
    /// malformed triplets never consume a slot, so the numbering is
    /// always gap-free.
    pub sequence: usize,
}

/// Splits a raw listing into an ordered sequence of [`RawRecord`].
///
/// Deliberately permissive: empty input yields an empty vec, an
/// all-empty triplet is stream padding and is skipped, a triplet whose
/// key is empty is dropped, and a dangling partial group at the end of
/// the stream is ignored. Truncated or malformed input is never an error.
pub fn tokenize_listing(raw: &[u8]) -> Vec<RawRecord> {
    if raw.is_empty() {
        return Vec::new();
    }

    let fields: Vec<&[u8]> = raw.split(|b| *b == 0).collect();
    let mut records = Vec::with_capacity(fields.len() / 3);
    let mut sequence = 0;

    let mut i = 0;
    while i + 2 < fields.len() {
        let scope_raw = String::from_utf8_lossy(fields[i]);
        let origin_raw = String::from_utf8_lossy(fields[i + 1]);
        let key_value_raw = fields[i + 2];
        i += 3;

        if scope_raw.is_empty() && origin_raw.is_empty() && key_value_raw.is_empty() {
            continue;
        }

        let (key, value) = split_key_value(key_value_raw);
        if key.is_empty() {
            continue;
        }

        let (origin_file, origin_line) = normalize_origin(&origin_raw);
        records.push(RawRecord {
            key,
            value,
            scope: Scope::from(scope_raw.to_ascii_lowercase().as_str()),
            origin_file,
            origin_line,
            sequence,
        });
        sequence += 1;
    }

    records
}

/// Splits a key/value unit at the first newline.
///
/// A unit without a newline is a key with an empty value (git omits the
/// separator for valueless entries).
fn split_key_value(raw: &[u8]) -> (String, String) {
    match raw.iter().position(|b| *b == b'\n') {
        Some(pos) => (
            String::from_utf8_lossy(&raw[..pos]).to_string(),
            String::from_utf8_lossy(&raw[pos + 1..]).to_string(),
        ),
        None => (String::from_utf8_lossy(raw).to_string(), String::new()),
    }
}
