use serde::{Deserialize, Serialize};

use crate::compare::Compatibility;

/// How a declaration's type changed between two snapshots
///
/// `Compatible` and `Breaking` are the two outcomes of comparing a declaration
/// present on both sides; they are alternatives, not severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Unchanged,
    Added,
    Removed,
    Compatible,
    Breaking,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Unchanged => "unchanged",
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Compatible => "compatible",
            ChangeKind::Breaking => "breaking",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Compatibility> for ChangeKind {
    fn from(c: Compatibility) -> Self {
        match c {
            Compatibility::Identical => ChangeKind::Unchanged,
            Compatibility::Compatible => ChangeKind::Compatible,
            Compatibility::Incompatible => ChangeKind::Breaking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_mapping() {
        assert_eq!(ChangeKind::from(Compatibility::Identical), ChangeKind::Unchanged);
        assert_eq!(ChangeKind::from(Compatibility::Compatible), ChangeKind::Compatible);
        assert_eq!(ChangeKind::from(Compatibility::Incompatible), ChangeKind::Breaking);
    }

    #[test]
    fn test_serializes_as_lowercase() {
        let json = serde_json::to_string(&ChangeKind::Breaking).unwrap();
        assert_eq!(json, "\"breaking\"");
        assert_eq!(ChangeKind::Added.to_string(), "added");
    }
}
