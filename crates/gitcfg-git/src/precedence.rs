//! Precedence resolution over tokenized configuration records
//!
//! Git lists entries from lowest to highest precedence; the engine never
//! ranks scopes itself. The only precedence signal consumed here is the
//! record `sequence`: for a given key, the latest record wins and every
//! earlier one becomes part of its override chain.

use std::collections::HashMap;

use serde::Serialize;

use crate::listing::RawRecord;
use crate::scope::Scope;

/// Provenance of one configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSource {
    pub scope: Scope,

    /// Declaring file, or an opaque provenance label (`command line`, ...)
    pub file: String,

    /// 1-based line number, 0 when not applicable
    pub line: u32,
}

/// A value shadowed by the effective one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Override {
    pub value: String,
    pub source: ConfigSource,
}

/// The winning value for one key, with its full override chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveValue {
    pub key: String,
    pub value: String,
    pub source: ConfigSource,

    /// Shadowed values, most recently shadowed first (strictly descending
    /// by original sequence). Empty iff the key had exactly one record.
    pub overrides: Vec<Override>,
}

impl RawRecord {
    fn source(&self) -> ConfigSource {
        ConfigSource {
            scope: self.scope.clone(),
            file: self.origin_file.clone(),
            line: self.origin_line,
        }
    }
}

/// Folds an ordered record sequence into per-key effective values.
///
/// Records are grouped by key and each group is re-sorted by `sequence`
/// before picking the winner. The input is expected to arrive already
/// ordered, but the sort is kept so an unordered producer cannot corrupt
/// the precedence result.
pub fn resolve_entries(records: Vec<RawRecord>) -> HashMap<String, EffectiveValue> {
    if records.is_empty() {
        return HashMap::new();
    }

    let mut by_key: HashMap<String, Vec<RawRecord>> = HashMap::new();
    for record in records {
        by_key.entry(record.key.clone()).or_default().push(record);
    }

    let mut entries = HashMap::with_capacity(by_key.len());
    for (key, mut group) in by_key {
        group.sort_by_key(|record| record.sequence);

        let Some(effective) = group.last() else {
            continue;
        };
        let mut resolved = EffectiveValue {
            key: key.clone(),
            value: effective.value.clone(),
            source: effective.source(),
            overrides: Vec::with_capacity(group.len() - 1),
        };

        for shadowed in group.iter().rev().skip(1) {
            resolved.overrides.push(Override {
                value: shadowed.value.clone(),
                source: shadowed.source(),
            });
        }

        entries.insert(key, resolved);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(key: &str, value: &str, scope: Scope, sequence: usize) -> RawRecord {
        RawRecord {
            key: key.to_string(),
            value: value.to_string(),
            scope,
            origin_file: format!("/origin/{sequence}"),
            origin_line: sequence as u32 + 1,
            sequence,
        }
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert_eq!(resolve_entries(Vec::new()), HashMap::new());
    }

    #[test]
    fn single_record_has_empty_override_list() {
        let entries = resolve_entries(vec![record("user.name", "Ada", Scope::Global, 0)]);

        let entry = &entries["user.name"];
        assert_eq!(entry.value, "Ada");
        assert!(entry.overrides.is_empty());
    }

    #[test]
    fn latest_sequence_wins_regardless_of_scope() {
        // A "lower" scope label emitted later still wins: document order is
        // the contract, not a scope ranking table.
        let entries = resolve_entries(vec![
            record("core.editor", "vim", Scope::Local, 0),
            record("core.editor", "emacs", Scope::System, 1),
        ]);

        assert_eq!(entries["core.editor"].value, "emacs");
        assert_eq!(entries["core.editor"].source.scope, Scope::System);
    }

    #[test]
    fn overrides_are_ordered_most_recently_shadowed_first() {
        let entries = resolve_entries(vec![
            record("user.name", "oldest", Scope::System, 0),
            record("user.name", "middle", Scope::Global, 1),
            record("user.name", "winner", Scope::Local, 2),
        ]);

        let entry = &entries["user.name"];
        assert_eq!(entry.value, "winner");
        assert_eq!(entry.overrides.len(), 2);
        assert_eq!(entry.overrides[0].value, "middle");
        assert_eq!(entry.overrides[1].value, "oldest");
    }

    #[test]
    fn out_of_order_input_is_resorted_by_sequence() {
        let entries = resolve_entries(vec![
            record("user.name", "winner", Scope::Local, 2),
            record("user.name", "oldest", Scope::System, 0),
            record("user.name", "middle", Scope::Global, 1),
        ]);

        let entry = &entries["user.name"];
        assert_eq!(entry.value, "winner");
        assert_eq!(entry.overrides[0].value, "middle");
        assert_eq!(entry.overrides[1].value, "oldest");
    }

    #[test]
    fn override_count_is_record_count_minus_one() {
        let records: Vec<_> = (0..5)
            .map(|i| record("push.default", &format!("v{i}"), Scope::Global, i))
            .collect();
        let entries = resolve_entries(records);

        assert_eq!(entries["push.default"].overrides.len(), 4);
    }

    #[test]
    fn distinct_keys_resolve_independently() {
        let entries = resolve_entries(vec![
            record("user.name", "Ada", Scope::Global, 0),
            record("user.email", "ada@example.com", Scope::Global, 1),
        ]);

        assert_eq!(entries.len(), 2);
        assert!(entries["user.name"].overrides.is_empty());
        assert!(entries["user.email"].overrides.is_empty());
    }
}
