use std::iter::FromIterator;
use std::slice;

/// An ordered list of `(original, renamed)` pairs.
///
/// Unlike a map, nothing is ever deduplicated or reordered.
/// The same input always gives the same order out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Relation<K, V>(Vec<(K, V)>);
impl<K, V> Relation<K, V> {
    #[inline]
    pub fn new() -> Self {
        Relation(Vec::new())
    }
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Relation(Vec::with_capacity(capacity))
    }
    #[inline]
    pub fn push(&mut self, original: K, renamed: V) {
        self.0.push((original, renamed));
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    #[inline]
    pub fn iter(&self) -> slice::Iter<(K, V)> {
        self.0.iter()
    }
    #[inline]
    pub fn originals(&self) -> impl Iterator<Item=&K> + '_ {
        self.0.iter().map(|&(ref original, _)| original)
    }
    #[inline]
    pub fn renamed(&self) -> impl Iterator<Item=&V> + '_ {
        self.0.iter().map(|&(_, ref renamed)| renamed)
    }
    /// Swap every pair, keeping the order
    pub fn inverted(&self) -> Relation<V, K> where K: Clone, V: Clone {
        self.0.iter()
            .map(|&(ref original, ref renamed)| (renamed.clone(), original.clone()))
            .collect()
    }
}
impl<K, V> Default for Relation<K, V> {
    #[inline]
    fn default() -> Self {
        Relation::new()
    }
}
impl<K, V> FromIterator<(K, V)> for Relation<K, V> {
    #[inline]
    fn from_iter<T: IntoIterator<Item=(K, V)>>(iter: T) -> Self {
        Relation(iter.into_iter().collect())
    }
}
impl<K, V> Extend<(K, V)> for Relation<K, V> {
    #[inline]
    fn extend<T: IntoIterator<Item=(K, V)>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}
impl<K, V> IntoIterator for Relation<K, V> {
    type Item = (K, V);
    type IntoIter = ::std::vec::IntoIter<(K, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a, K, V> IntoIterator for &'a Relation<K, V> {
    type Item = &'a (K, V);
    type IntoIter = slice::Iter<'a, (K, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn keeps_duplicates_in_order() {
        let mut relation = Relation::new();
        relation.push("a", "b");
        relation.push("c", "d");
        relation.push("a", "b");
        assert_eq!(relation.len(), 3);
        assert_eq!(relation.originals().cloned().collect::<Vec<_>>(), vec!["a", "c", "a"]);
    }
    #[test]
    fn inverted_swaps_pairs() {
        let relation: Relation<_, _> = vec![("a", "b"), ("c", "d")].into_iter().collect();
        let inverted = relation.inverted();
        assert_eq!(inverted.iter().cloned().collect::<Vec<_>>(), vec![("b", "a"), ("d", "c")]);
        assert_eq!(inverted.inverted(), relation);
    }
}
