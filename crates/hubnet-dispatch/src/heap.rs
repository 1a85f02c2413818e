//! # Dispatch Heap
//!
//! Bounded binary max-heap of [`DispatchEntry`] keyed on `priority`, stored
//! in a dense `Vec`. The children of slot `i` are `2i + 1` and `2i + 2`.
//!
//! - Insert appends and trickles the new entry up while it outranks its
//!   parent.
//! - Extract moves the last entry into the root and trickles it down,
//!   swapping with the larger child, until neither child outranks it.
//!
//! Both are one O(log n) pass. Among entries of equal priority the order of
//! extraction depends on heap shape and is not defined.
//!
//! The capacity bound is backpressure: a full heap rejects new entries
//! instead of growing.

use hubnet_core::AdmissionError;

use crate::entry::DispatchEntry;

/// Bounded max-heap of dispatch entries.
#[derive(Debug, Clone)]
pub struct DispatchHeap {
    entries: Vec<DispatchEntry>,
    capacity: usize,
}

impl DispatchHeap {
    /// Create an empty heap holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Add an entry.
    ///
    /// # Errors
    ///
    /// Returns [`AdmissionError::SchedulerFull`] if the heap is at capacity;
    /// the heap is unchanged.
    pub fn insert(&mut self, entry: DispatchEntry) -> Result<(), AdmissionError> {
        if self.is_full() {
            return Err(AdmissionError::SchedulerFull {
                capacity: self.capacity,
            });
        }
        self.entries.push(entry);
        self.trickle_up(self.entries.len() - 1);
        tracing::trace!(len = self.entries.len(), root = ?self.root_priority(), "heap insert");
        Ok(())
    }

    /// Remove and return the highest-priority entry.
    pub fn extract_max(&mut self) -> Option<DispatchEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let top = self.entries.swap_remove(0);
        self.trickle_down(0);
        tracing::trace!(len = self.entries.len(), root = ?self.root_priority(), "heap extract");
        Some(top)
    }

    /// The highest-priority entry, without removing it.
    pub fn peek(&self) -> Option<&DispatchEntry> {
        self.entries.first()
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another insert would be rejected.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Queued entries in heap (not priority) order.
    pub fn iter(&self) -> impl Iterator<Item = &DispatchEntry> {
        self.entries.iter()
    }

    fn root_priority(&self) -> Option<f64> {
        self.peek().map(|entry| entry.priority)
    }

    fn trickle_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].priority <= self.entries[parent].priority {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn trickle_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut largest = index;
            if left < len && self.entries[left].priority > self.entries[largest].priority {
                largest = left;
            }
            if right < len && self.entries[right].priority > self.entries[largest].priority {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.entries.swap(index, largest);
            index = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubnet_core::{CustomerId, HubLabel};

    fn entry(id: u64, priority: f64) -> DispatchEntry {
        DispatchEntry {
            customer: CustomerId::new(id),
            destination: HubLabel::new("B").unwrap(),
            travel_time: 1.0,
            priority,
        }
    }

    fn assert_heap_property(heap: &DispatchHeap) {
        let entries: Vec<_> = heap.iter().collect();
        for i in 1..entries.len() {
            assert!(entries[(i - 1) / 2].priority >= entries[i].priority);
        }
    }

    #[test]
    fn extracts_in_descending_priority() {
        let mut heap = DispatchHeap::new(16);
        for (id, p) in [(1, 3.0), (2, 9.0), (3, 1.0), (4, 7.0), (5, 5.0), (6, 8.0)] {
            heap.insert(entry(id, p)).unwrap();
            assert_heap_property(&heap);
        }
        let order: Vec<u64> = std::iter::from_fn(|| heap.extract_max())
            .map(|e| e.customer.get())
            .collect();
        assert_eq!(order, vec![2, 6, 4, 5, 1, 3]);
    }

    #[test]
    fn extract_from_empty_is_none_repeatedly() {
        let mut heap = DispatchHeap::new(4);
        assert!(heap.extract_max().is_none());
        assert!(heap.extract_max().is_none());
        assert!(heap.peek().is_none());
    }

    #[test]
    fn full_heap_rejects_and_is_unchanged() {
        let mut heap = DispatchHeap::new(2);
        heap.insert(entry(1, 1.0)).unwrap();
        heap.insert(entry(2, 2.0)).unwrap();
        assert!(heap.is_full());
        assert_eq!(
            heap.insert(entry(3, 99.0)),
            Err(AdmissionError::SchedulerFull { capacity: 2 })
        );
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek().unwrap().customer, CustomerId::new(2));
    }

    #[test]
    fn room_frees_up_after_extract() {
        let mut heap = DispatchHeap::new(1);
        heap.insert(entry(1, 1.0)).unwrap();
        assert!(heap.insert(entry(2, 2.0)).is_err());
        heap.extract_max().unwrap();
        heap.insert(entry(2, 2.0)).unwrap();
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut heap = DispatchHeap::new(0);
        assert!(heap.insert(entry(1, 1.0)).is_err());
        assert!(heap.is_empty());
    }

    #[test]
    fn equal_priorities_all_come_out() {
        let mut heap = DispatchHeap::new(8);
        for id in 1..=4 {
            heap.insert(entry(id, 2.0)).unwrap();
        }
        let mut ids: Vec<u64> = std::iter::from_fn(|| heap.extract_max())
            .map(|e| e.customer.get())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
