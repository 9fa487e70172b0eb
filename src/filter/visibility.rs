use std::collections::HashSet;

/// A composable visibility predicate over artifact ids.
///
/// Domain filtering produces one of three shapes: everything passes (no
/// filter active), an explicit allow-set (selected real domains), or a
/// complement (the "unassigned" pseudo-domain: everything *not* reachable
/// from any known domain). Modelling all three as one value type keeps the
/// six parallel collection filters mechanically identical and lets the
/// "selected domain OR unassigned" rule fall out of a single `union`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilitySet {
    /// Every id is visible. Produced by an empty filter selection.
    All,
    /// Only the listed ids are visible.
    Only(HashSet<String>),
    /// Every id except the listed ones is visible.
    AllExcept(HashSet<String>),
}

impl VisibilitySet {
    /// The empty visibility set (nothing passes).
    pub fn none() -> Self {
        Self::Only(HashSet::new())
    }

    pub fn contains(&self, id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(ids) => ids.contains(id),
            Self::AllExcept(ids) => !ids.contains(id),
        }
    }

    /// Set union: an id is visible in the result iff it is visible in either
    /// operand.
    pub fn union(self, other: Self) -> Self {
        match (self, other) {
            (Self::All, _) | (_, Self::All) => Self::All,
            (Self::Only(a), Self::Only(b)) => {
                let mut ids = a;
                ids.extend(b);
                Self::Only(ids)
            }
            // Only(a) ∪ AllExcept(b) excludes exactly the b-members not
            // rescued by a.
            (Self::Only(a), Self::AllExcept(b)) | (Self::AllExcept(b), Self::Only(a)) => {
                Self::AllExcept(b.into_iter().filter(|id| !a.contains(id)).collect())
            }
            (Self::AllExcept(a), Self::AllExcept(b)) => {
                Self::AllExcept(a.into_iter().filter(|id| b.contains(id)).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_passes_everything() {
        assert!(VisibilitySet::All.contains("anything"));
    }

    #[test]
    fn test_none_passes_nothing() {
        assert!(!VisibilitySet::none().contains("anything"));
    }

    #[test]
    fn test_union_with_all_is_all() {
        let union = VisibilitySet::Only(ids(&["a"])).union(VisibilitySet::All);
        assert_eq!(union, VisibilitySet::All);
    }

    #[test]
    fn test_union_of_allow_sets() {
        let union = VisibilitySet::Only(ids(&["a", "b"])).union(VisibilitySet::Only(ids(&["b", "c"])));
        assert_eq!(union, VisibilitySet::Only(ids(&["a", "b", "c"])));
    }

    #[test]
    fn test_allow_set_rescues_excluded_ids() {
        let union = VisibilitySet::Only(ids(&["a"])).union(VisibilitySet::AllExcept(ids(&["a", "b"])));
        assert_eq!(union, VisibilitySet::AllExcept(ids(&["b"])));
        assert!(union.contains("a"));
        assert!(!union.contains("b"));
        assert!(union.contains("unrelated"));
    }

    #[test]
    fn test_union_of_complements_intersects_exclusions() {
        let union =
            VisibilitySet::AllExcept(ids(&["a", "b"])).union(VisibilitySet::AllExcept(ids(&["b", "c"])));
        assert_eq!(union, VisibilitySet::AllExcept(ids(&["b"])));
    }
}
