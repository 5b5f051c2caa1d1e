use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Outcome tuples mapped to the number of rolls that produced them.
pub type Counts<T> = BTreeMap<Vec<T>, usize>;

pub(crate) fn tally<K, I>(keys: I) -> BTreeMap<K, usize>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts = BTreeMap::new();
    for k in keys {
        match counts.entry(k) {
            Entry::Vacant(e) => {
                e.insert(1);
            }
            Entry::Occupied(mut e) => {
                *e.get_mut() += 1;
            }
        }
    }
    counts
}
