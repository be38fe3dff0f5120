//! Indexed minimum priority queue.
//!
//! Binary heap over vertex ids with an inverse position table, so a key can
//! be lowered in place without scanning the heap. Shared by the shortest
//! path and spanning forest builders.

/// Errors raised when the queue contract is violated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("Index {index} is outside the queue capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },
    #[error("Index {0} is already in the queue")]
    DuplicateIndex(usize),
    #[error("Index {0} is not in the queue")]
    MissingIndex(usize),
    #[error("New key for index {0} is greater than its current key")]
    KeyNotDecreased(usize),
}

/// Min-priority queue of ids in `[0, capacity)` keyed by `K`
#[derive(Debug, Clone)]
pub struct IndexMinPq<K> {
    len: usize,
    // 1-based binary heap of ids; slot 0 unused
    heap: Vec<usize>,
    // position of each id in `heap`, None when absent
    position: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
}

impl<K: PartialOrd + Copy> IndexMinPq<K> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            heap: vec![0; capacity + 1],
            position: vec![None; capacity],
            keys: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Is `index` currently queued? Out-of-range ids are never queued.
    pub fn contains(&self, index: usize) -> bool {
        self.position.get(index).is_some_and(Option::is_some)
    }

    /// Current key of `index`, if queued
    pub fn key_of(&self, index: usize) -> Option<K> {
        self.keys.get(index).copied().flatten()
    }

    /// Associate `key` with an id that is not yet queued
    pub fn insert(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        self.check_index(index)?;
        if self.contains(index) {
            return Err(QueueError::DuplicateIndex(index));
        }

        self.len += 1;
        self.position[index] = Some(self.len);
        self.heap[self.len] = index;
        self.keys[index] = Some(key);
        self.swim(self.len);
        Ok(())
    }

    /// Lower the key of an id that is already queued
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        self.check_index(index)?;
        let slot = self.position[index].ok_or(QueueError::MissingIndex(index))?;
        if let Some(current) = self.keys[index] {
            if key > current {
                return Err(QueueError::KeyNotDecreased(index));
            }
        }

        self.keys[index] = Some(key);
        self.swim(slot);
        Ok(())
    }

    /// Insert `index`, or lower its key if it is queued with a larger one.
    ///
    /// An entry already holding a smaller or equal key is left untouched.
    pub fn insert_or_decrease(&mut self, index: usize, key: K) -> Result<(), QueueError> {
        match self.key_of(index) {
            None => self.insert(index, key),
            Some(current) if key < current => self.decrease_key(index, key),
            Some(_) => Ok(()),
        }
    }

    /// Remove the id with the smallest key; `None` on an empty queue
    pub fn extract_min(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let min = self.heap[1];
        self.exchange(1, self.len);
        self.len -= 1;
        self.sink(1);

        self.position[min] = None;
        self.keys[min] = None;
        Some(min)
    }

    fn check_index(&self, index: usize) -> Result<(), QueueError> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(QueueError::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            })
        }
    }

    fn greater(&self, i: usize, j: usize) -> bool {
        match (self.keys[self.heap[i]], self.keys[self.heap[j]]) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i]] = Some(i);
        self.position[self.heap[j]] = Some(j);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.exchange(k, k / 2);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.len {
            let mut j = 2 * k;
            if j < self.len && self.greater(j, j + 1) {
                j += 1;
            }
            if !self.greater(k, j) {
                break;
            }
            self.exchange(k, j);
            k = j;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(pq: &mut IndexMinPq<f64>) -> Vec<usize> {
        std::iter::from_fn(|| pq.extract_min()).collect()
    }

    #[test]
    fn test_extracts_in_key_order() {
        let mut pq = IndexMinPq::with_capacity(6);
        for (id, key) in [(0, 5.0), (1, 3.0), (2, 9.0), (3, 1.0), (4, 7.0), (5, 2.0)] {
            pq.insert(id, key).unwrap();
        }

        assert_eq!(pq.len(), 6);
        assert_eq!(drain(&mut pq), vec![3, 5, 1, 0, 4, 2]);
        assert!(pq.is_empty());
    }

    #[test]
    fn test_decrease_key_reorders() {
        let mut pq = IndexMinPq::with_capacity(4);
        pq.insert(0, 10.0).unwrap();
        pq.insert(1, 20.0).unwrap();
        pq.insert(2, 30.0).unwrap();

        pq.decrease_key(2, 5.0).unwrap();
        assert_eq!(pq.key_of(2), Some(5.0));
        assert_eq!(pq.extract_min(), Some(2));
        assert_eq!(pq.extract_min(), Some(0));
    }

    #[test]
    fn test_contract_violations() {
        let mut pq = IndexMinPq::with_capacity(2);
        pq.insert(0, 1.0).unwrap();

        assert_eq!(pq.insert(0, 2.0), Err(QueueError::DuplicateIndex(0)));
        assert_eq!(pq.decrease_key(1, 0.5), Err(QueueError::MissingIndex(1)));
        assert_eq!(pq.decrease_key(0, 4.0), Err(QueueError::KeyNotDecreased(0)));
        assert_eq!(
            pq.insert(2, 0.0),
            Err(QueueError::IndexOutOfRange { index: 2, capacity: 2 })
        );
    }

    #[test]
    fn test_extract_from_empty_queue() {
        let mut pq: IndexMinPq<f64> = IndexMinPq::with_capacity(3);
        assert_eq!(pq.extract_min(), None);
    }

    #[test]
    fn test_contains_tracks_membership() {
        let mut pq = IndexMinPq::with_capacity(3);
        assert!(!pq.contains(1));
        pq.insert(1, 4.0).unwrap();
        assert!(pq.contains(1));
        assert!(!pq.contains(99));

        pq.extract_min();
        assert!(!pq.contains(1));
        assert_eq!(pq.key_of(1), None);

        // Ids can be reinserted after removal
        pq.insert(1, 2.0).unwrap();
        assert_eq!(pq.extract_min(), Some(1));
    }

    #[test]
    fn test_insert_or_decrease_keeps_smaller_key() {
        let mut pq = IndexMinPq::with_capacity(3);
        pq.insert_or_decrease(0, 8.0).unwrap();
        pq.insert_or_decrease(1, 6.0).unwrap();
        pq.insert_or_decrease(0, 9.0).unwrap();
        assert_eq!(pq.key_of(0), Some(8.0));

        pq.insert_or_decrease(0, 3.0).unwrap();
        assert_eq!(pq.key_of(0), Some(3.0));
        assert_eq!(pq.extract_min(), Some(0));
    }

    #[test]
    fn test_many_entries_match_sorted_order() {
        let keys: Vec<f64> = (0..50).map(|i| ((i * 37) % 50) as f64 + 0.5).collect();
        let mut pq = IndexMinPq::with_capacity(keys.len());
        for (id, &key) in keys.iter().enumerate() {
            pq.insert(id, key).unwrap();
        }
        for id in (0..50).step_by(3) {
            pq.decrease_key(id, keys[id] - 0.25).unwrap();
        }

        let order = drain(&mut pq);
        let extracted: Vec<f64> = order
            .iter()
            .map(|&id| if id % 3 == 0 { keys[id] - 0.25 } else { keys[id] })
            .collect();
        assert!(extracted.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(order.len(), 50);
    }
}
