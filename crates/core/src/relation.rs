//! In-memory projection of related records onto list-valued references.
//!
//! Used when a record holds an ordered list of references (meeting
//! participants). The caller batch-fetches every distinct target once, builds
//! a lookup map, and projects it back onto each list here. Order and
//! cardinality of the source list are preserved; a reference with no match
//! keeps its slot with an empty match list.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Collect the distinct keys of an iterator in first-seen order.
pub fn distinct_keys<K, I>(keys: I) -> Vec<K>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    keys.into_iter().filter(|k| seen.insert(*k)).collect()
}

/// Pair each key with its matches from `lookup` (zero or one element).
pub fn attach_many<K, V>(keys: &[K], lookup: &HashMap<K, V>) -> Vec<(K, Vec<V>)>
where
    K: Eq + Hash + Copy,
    V: Clone,
{
    keys.iter()
        .map(|key| (*key, lookup.get(key).cloned().into_iter().collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_keys_keeps_first_occurrence_order() {
        let keys = distinct_keys([3, 1, 3, 2, 1]);
        assert_eq!(keys, vec![3, 1, 2]);
    }

    #[test]
    fn attach_many_preserves_order_and_missing_slots() {
        let lookup: HashMap<u32, &str> = [(1, "alice"), (2, "bob")].into_iter().collect();

        let attached = attach_many(&[2, 9, 1], &lookup);

        assert_eq!(attached.len(), 3);
        assert_eq!(attached[0], (2, vec!["bob"]));
        assert_eq!(attached[1], (9, vec![]));
        assert_eq!(attached[2], (1, vec!["alice"]));
    }

    #[test]
    fn attach_many_repeats_duplicates() {
        let lookup: HashMap<u32, &str> = [(1, "alice")].into_iter().collect();
        let attached = attach_many(&[1, 1], &lookup);
        assert_eq!(attached, vec![(1, vec!["alice"]), (1, vec!["alice"])]);
    }

    #[test]
    fn attach_many_on_empty_input() {
        let lookup: HashMap<u32, &str> = HashMap::new();
        assert!(attach_many(&[], &lookup).is_empty());
    }
}
