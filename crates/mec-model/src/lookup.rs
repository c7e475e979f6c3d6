use std::collections::HashMap;

/// Case-insensitive name index over positions in an ordered collection.
///
/// Chart keys are case-sensitive strings matched case-insensitively; the
/// index maps the uppercase form to the position of the canonical entry.
/// The first insertion of a given name wins.
#[derive(Debug, Clone, Default)]
pub(crate) struct CaseInsensitiveIndex {
    map: HashMap<String, usize>,
}

impl CaseInsensitiveIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record `name` at `position` unless a case-insensitive match exists.
    /// Returns the position already occupying the slot, if any.
    pub(crate) fn insert(&mut self, name: &str, position: usize) -> Option<usize> {
        let key = name.to_uppercase();
        match self.map.get(&key) {
            Some(existing) => Some(*existing),
            None => {
                self.map.insert(key, position);
                None
            }
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<usize> {
        self.map.get(&name.to_uppercase()).copied()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&name.to_uppercase())
    }
}
