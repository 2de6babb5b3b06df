//! Ignore sets: dotted attribute paths excluded from comparison.

use std::collections::BTreeSet;

/// A set of fully-qualified dotted paths the differ must skip
///
/// Matching is exact: ignoring `price` does not ignore `price.amount` by
/// prefix, it simply stops the differ from ever descending into `price`.
/// Ignoring `price.amount` leaves `price` and its other children compared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    paths: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list of paths
    ///
    /// Entries are trimmed and empty entries are dropped, so `""` and `" , "`
    /// both produce an empty set rather than a set containing `""`.
    pub fn parse(csv: &str) -> Self {
        csv.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_yields_empty_set() {
        let set = IgnoreSet::parse("");
        assert!(set.is_empty());
        assert!(!set.contains(""));
    }

    #[test]
    fn test_entries_are_trimmed() {
        let set = IgnoreSet::parse(" lastModified ,price.currency");
        assert_eq!(set.len(), 2);
        assert!(set.contains("lastModified"));
        assert!(set.contains("price.currency"));
    }

    #[test]
    fn test_blank_entries_dropped() {
        let set = IgnoreSet::parse("a,, ,b,");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_match_is_exact_not_prefix() {
        let set = IgnoreSet::parse("price");
        assert!(set.contains("price"));
        assert!(!set.contains("price.amount"));
        assert!(!set.contains("pric"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set: IgnoreSet = ["a", "a", "b"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
