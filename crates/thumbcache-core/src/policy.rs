//! Dimension allow-list policy.

use std::collections::HashSet;

/// Opt-in allow-list of permitted size specifiers.
///
/// Matching is an exact string comparison against the configured entries
/// (e.g. "16x16"); no whitespace normalization or parsed-dimension
/// comparison. An empty list permits every well-formed specifier.
///
/// The policy is a plain value injected into the orchestrator, so it can be
/// tested without any environment setup.
#[derive(Debug, Clone, Default)]
pub struct DimensionPolicy {
    allowed: HashSet<String>,
}

impl DimensionPolicy {
    pub fn new(entries: impl IntoIterator<Item = String>) -> Self {
        DimensionPolicy {
            allowed: entries.into_iter().collect(),
        }
    }

    /// Whether the given size specifier may be served.
    pub fn is_allowed(&self, size_spec: &str) -> bool {
        self.allowed.is_empty() || self.allowed.contains(size_spec)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.allowed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_allow_list_permits_everything() {
        let policy = DimensionPolicy::default();
        assert!(policy.is_unrestricted());
        assert!(policy.is_allowed("999x999"));
        assert!(policy.is_allowed("anything"));
    }

    #[test]
    fn test_exact_match_only() {
        let policy =
            DimensionPolicy::new(vec!["16x16".to_string(), "28x28".to_string()]);
        assert!(policy.is_allowed("16x16"));
        assert!(policy.is_allowed("28x28"));
        assert!(!policy.is_allowed("10x10"));
        // Exact string match: no normalization of equivalent spellings.
        assert!(!policy.is_allowed(" 16x16"));
        assert!(!policy.is_allowed("016x016"));
    }
}
