//! Configuration scope labels

use serde::{Deserialize, Serialize};

/// Provenance tier of a configuration entry, as labelled by git.
///
/// The raw listing already orders entries from lowest to highest precedence,
/// so the engine never ranks scopes itself; `Scope` is descriptive only.
/// Labels git may grow in the future land in [`Scope::Other`] rather than
/// failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scope {
    System,
    Global,
    Local,
    Worktree,
    Command,
    Env,
    Include,
    Other(String),
}

impl Scope {
    pub fn as_str(&self) -> &str {
        match self {
            Scope::System => "system",
            Scope::Global => "global",
            Scope::Local => "local",
            Scope::Worktree => "worktree",
            Scope::Command => "command",
            Scope::Env => "env",
            Scope::Include => "include",
            Scope::Other(label) => label,
        }
    }
}

impl From<&str> for Scope {
    fn from(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "system" => Scope::System,
            "global" => Scope::Global,
            "local" => Scope::Local,
            "worktree" => Scope::Worktree,
            "command" => Scope::Command,
            "env" => Scope::Env,
            "include" => Scope::Include,
            other => Scope::Other(other.to_string()),
        }
    }
}

impl From<String> for Scope {
    fn from(label: String) -> Self {
        Scope::from(label.as_str())
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.as_str().to_string()
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
