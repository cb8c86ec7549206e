//! Ordered identity → content mapping produced by the collector.

use rustc_hash::FxHashSet;

use super::AssetId;

/// A collected script: its identity and raw text at collection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub id: AssetId,
    pub content: String,
}

/// Insertion-ordered set of [`AssetEntry`], unique by id.
///
/// Insertion order is emission order. Only the collector inserts; everything
/// downstream sees a read-only view.
#[derive(Debug, Clone, Default)]
pub struct AssetMap {
    entries: Vec<AssetEntry>,
    seen: FxHashSet<AssetId>,
}

impl AssetMap {
    /// Append an entry. Returns `false` (and keeps the first content) if the id
    /// is already present.
    pub(super) fn insert(&mut self, id: AssetId, content: String) -> bool {
        if !self.seen.insert(id.clone()) {
            return false;
        }
        self.entries.push(AssetEntry { id, content });
        true
    }

    pub fn contains(&self, id: &AssetId) -> bool {
        self.seen.contains(id)
    }

    /// Look up content by id string.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssetEntry> {
        self.entries.iter()
    }

    /// Ids in emission order.
    pub fn ids(&self) -> impl Iterator<Item = &AssetId> {
        self.entries.iter().map(|entry| &entry.id)
    }
}

impl<'a> IntoIterator for &'a AssetMap {
    type Item = &'a AssetEntry;
    type IntoIter = std::slice::Iter<'a, AssetEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn id(s: &str) -> AssetId {
        AssetId::from_relative(Path::new(s)).unwrap()
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut map = AssetMap::default();
        assert!(map.insert(id("b.js"), "b".into()));
        assert!(map.insert(id("a.js"), "a".into()));
        let ids: Vec<_> = map.ids().map(AssetId::as_str).collect();
        assert_eq!(ids, ["b.js", "a.js"]);
    }

    #[test]
    fn test_insert_duplicate_keeps_first() {
        let mut map = AssetMap::default();
        assert!(map.insert(id("a.js"), "first".into()));
        assert!(!map.insert(id("a.js"), "second".into()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a.js"), Some("first"));
    }
}
