//! Insertion-ordered id → entity table.

use std::collections::HashMap;
use std::fmt;

/// Entities stored in an [`EntityTable`] expose their own id as the key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Id-keyed table that iterates in insertion order.
///
/// Iteration order is observable: nearest-item ties and the diagnostic map
/// both resolve by it. Snapshots serialize the table as a JSON object keyed
/// by id, preserving that order.
///
/// Lookups go through an id index. Mutable access must not change an
/// entry's id.
#[derive(Clone)]
pub struct EntityTable<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for EntityTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> EntityTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&slot| &self.entries[slot])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.index.get(id).map(|&slot| &mut self.entries[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Inserts an entry, replacing (in place) any entry with the same id.
    ///
    /// Returns the replaced entry.
    pub fn insert(&mut self, entry: T) -> Option<T> {
        match self.index.get(entry.key()) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot], entry)),
            None => {
                self.index.insert(entry.key().to_owned(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// Appends an entry whose id is not yet present.
    ///
    /// Returns the entry back if the id is taken.
    pub fn try_push(&mut self, entry: T) -> Result<(), T> {
        if self.contains(entry.key()) {
            return Err(entry);
        }
        self.index.insert(entry.key().to_owned(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Keyed::key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: PartialEq> PartialEq for EntityTable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: fmt::Debug> fmt::Debug for EntityTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}

impl<T: Keyed> FromIterator<T> for EntityTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

impl<'a, T> IntoIterator for &'a EntityTable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{Error as _, MapAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{EntityTable, Keyed};

    impl<T: Keyed + Serialize> Serialize for EntityTable<T> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_map(self.entries.iter().map(|entry| (entry.key(), entry)))
        }
    }

    struct TableVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for TableVisitor<T>
    where
        T: Keyed + Deserialize<'de>,
    {
        type Value = EntityTable<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from id to entity")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut table = EntityTable::new();
            while let Some((key, entry)) = map.next_entry::<String, T>()? {
                if entry.key() != key {
                    return Err(A::Error::custom(format!(
                        "entry key `{key}` does not match id `{}`",
                        entry.key()
                    )));
                }
                if table.try_push(entry).is_err() {
                    return Err(A::Error::custom(format!("duplicate id `{key}`")));
                }
            }
            Ok(table)
        }
    }

    impl<'de, T> Deserialize<'de> for EntityTable<T>
    where
        T: Keyed + Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(TableVisitor(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Entry(&'static str, u32);

    impl Keyed for Entry {
        fn key(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn iterates_in_insertion_order() {
        let table: EntityTable<Entry> =
            [Entry("zeta", 1), Entry("alpha", 2), Entry("mid", 3)].into_iter().collect();
        assert_eq!(table.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut table: EntityTable<Entry> = [Entry("a", 1), Entry("b", 2)].into_iter().collect();
        let replaced = table.insert(Entry("a", 9));
        assert_eq!(replaced, Some(Entry("a", 1)));
        assert_eq!(table.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(table.get("a"), Some(&Entry("a", 9)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn lookup_misses_return_none() {
        let table: EntityTable<Entry> = EntityTable::new();
        assert!(table.get("ghost").is_none());
        assert!(!table.contains("ghost"));
        assert!(table.is_empty());
    }

    #[test]
    fn try_push_refuses_taken_ids() {
        let mut table: EntityTable<Entry> = EntityTable::new();
        assert_eq!(table.try_push(Entry("a", 1)), Ok(()));
        assert_eq!(table.try_push(Entry("a", 2)), Err(Entry("a", 2)));
        assert_eq!(table.get("a"), Some(&Entry("a", 1)));
    }

    #[test]
    fn large_tables_keep_order_and_lookups() {
        let ids: Vec<&'static str> = (0..50_000)
            .map(|n| &*Box::leak(format!("item{n}").into_boxed_str()))
            .collect();
        let table: EntityTable<Entry> = ids.iter().zip(0..).map(|(&id, n)| Entry(id, n)).collect();

        assert_eq!(table.len(), 50_000);
        assert_eq!(table.keys().next(), Some("item0"));
        assert_eq!(table.get("item49999"), Some(&Entry("item49999", 49_999)));
        assert!(!table.contains("item50000"));
    }

    #[test]
    fn equality_ignores_construction_history() {
        let mut replaced: EntityTable<Entry> = [Entry("a", 1)].into_iter().collect();
        replaced.insert(Entry("a", 2));
        let direct: EntityTable<Entry> = [Entry("a", 2)].into_iter().collect();
        assert_eq!(replaced, direct);
    }
}
