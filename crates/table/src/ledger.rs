use serde::Serialize;
use std::collections::VecDeque;

/// Bounded log that evicts its oldest entries first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ledger<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> Ledger<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }
    /// Appends an entry, then trims back down to capacity.
    pub fn push(&mut self, entry: T) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.entries.iter()
    }
    /// Newest first.
    pub fn newest(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn evicts_oldest_first() {
        let mut ledger = Ledger::new(3);
        (0..5).for_each(|i| ledger.push(i));
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(ledger.newest().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
    }
    #[test]
    fn never_exceeds_capacity() {
        let mut ledger = Ledger::new(50);
        for i in 0..500 {
            ledger.push(i);
            assert!(ledger.len() <= 50);
        }
    }
    #[test]
    fn clear_empties() {
        let mut ledger = Ledger::new(2);
        ledger.push("a");
        ledger.clear();
        assert!(ledger.is_empty());
    }
}
