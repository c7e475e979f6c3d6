//! The ordered set of conditions the user has selected.
//!
//! Membership for the search exclusion check is case-insensitive, while
//! de-duplication and removal compare exactly against the previously
//! inserted values. The asymmetry is inherited from the source system and
//! kept as-is.

/// Ordered, duplicate-free sequence of selected condition names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    entries: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless it is already present (exact match). Returns
    /// whether the set changed. Idempotent.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.entries.iter().any(|entry| *entry == name) {
            return false;
        }
        self.entries.push(name);
        true
    }

    /// Remove the first exact-match occurrence of `name`. Returns whether
    /// anything was removed; absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|entry| entry == name) {
            Some(position) => {
                self.entries.remove(position);
                true
            }
            None => false,
        }
    }

    /// Exact membership check, matching the de-duplication rule.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    /// Case-insensitive membership check, used as the search exclusion rule.
    pub fn contains_ignore_case(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.entries
            .iter()
            .any(|entry| entry.to_lowercase() == lowered)
    }

    /// Selected names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.add(name);
        }
        set
    }
}
