//! Bounded newest-first sequence

use std::collections::VecDeque;

/// A sequence capped at a fixed size, newest first
///
/// Insertion prepends; when the cap is exceeded the oldest (tail) entry is
/// dropped. Insertions happen one at a time, so at most one eviction occurs
/// per push.
#[derive(Debug, Clone)]
pub struct HistoryRing<T> {
    entries: VecDeque<T>,
    cap: usize,
}

impl<T> HistoryRing<T> {
    /// Create an empty ring with the given capacity
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Prepend an entry, evicting the oldest if the cap is exceeded
    pub fn push(&mut self, entry: T) {
        self.entries.push_front(entry);
        if self.entries.len() > self.cap {
            self.entries.pop_back();
        }
    }

    /// Entry by position, 0 = newest
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Iterate newest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Reset to empty
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_is_newest_first() {
        let mut ring = HistoryRing::new(3);
        ring.push(1);
        ring.push(2);
        ring.push(3);
        let items: Vec<_> = ring.iter().copied().collect();
        assert_eq!(items, vec![3, 2, 1]);
    }

    #[test]
    fn test_eviction_drops_oldest() {
        let mut ring = HistoryRing::new(3);
        for i in 1..=5 {
            ring.push(i);
        }
        assert_eq!(ring.len(), 3);
        let items: Vec<_> = ring.iter().copied().collect();
        assert_eq!(items, vec![5, 4, 3]);
    }

    #[test]
    fn test_clear() {
        let mut ring = HistoryRing::new(2);
        ring.push("a");
        ring.push("b");
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.cap(), 2);
    }

    #[test]
    fn test_get_by_position() {
        let mut ring = HistoryRing::new(5);
        ring.push("old");
        ring.push("new");
        assert_eq!(ring.get(0), Some(&"new"));
        assert_eq!(ring.get(1), Some(&"old"));
        assert_eq!(ring.get(2), None);
    }
}
