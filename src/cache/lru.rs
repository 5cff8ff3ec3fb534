//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::HashMap;

use crate::cache::EvictionPolicy;

/// Null link in the arena list.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    key: String,
    prev: usize,
    next: usize,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys live in an arena-backed doubly-linked list where:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// A reverse index maps each key to its arena slot, so touching, removing and
/// finding the oldest key are all O(1). Freed slots are reused.
#[derive(Debug)]
pub struct LruTracker {
    /// Key -> arena slot
    index: HashMap<String, usize>,
    /// Arena of list nodes
    nodes: Vec<Node>,
    /// Most recently used slot
    head: usize,
    /// Least recently used slot
    tail: usize,
    /// Vacant slots available for reuse
    free: Vec<usize>,
}

impl Default for LruTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            free: Vec::new(),
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to front).
    ///
    /// If key exists, it is unlinked then relinked at the front.
    /// If key is new, a slot is allocated at the front.
    pub fn touch(&mut self, key: &str) {
        if let Some(&idx) = self.index.get(key) {
            if idx != self.head {
                self.unlink(idx);
                self.push_front(idx);
            }
            return;
        }

        let idx = self.alloc(key);
        self.push_front(idx);
        self.index.insert(key.to_string(), idx);
    }

    // == Remove ==
    /// Removes a key from the tracker. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        if let Some(idx) = self.index.remove(key) {
            self.unlink(idx);
            self.nodes[idx].key.clear();
            self.free.push(idx);
        }
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        (self.tail != NIL).then(|| self.nodes[self.tail].key.as_str())
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Iter ==
    /// Iterates tracked keys from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            if cursor == NIL {
                return None;
            }
            let node = &self.nodes[cursor];
            cursor = node.next;
            Some(node.key.as_str())
        })
    }

    // == Arena List Operations ==
    fn alloc(&mut self, key: &str) -> usize {
        let node = Node {
            key: key.to_string(),
            prev: NIL,
            next: NIL,
        };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;

        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        } else {
            self.tail = idx;
        }
        self.head = idx;
    }
}

impl EvictionPolicy for LruTracker {
    fn on_get(&mut self, key: &str) {
        self.touch(key);
    }

    fn on_set(&mut self, key: &str) {
        self.touch(key);
    }

    fn on_del(&mut self, key: &str) {
        self.remove(key);
    }

    fn evict_key(&self) -> Option<String> {
        self.peek_oldest().map(str::to_string)
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order(lru: &LruTracker) -> Vec<&str> {
        lru.iter().collect()
    }

    #[test]
    fn test_lru_new() {
        let lru = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.peek_oldest(), None);
        assert_eq!(lru.evict_key(), None);
    }

    #[test]
    fn test_lru_touch_new_key() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");
        lru.touch("key3");

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.peek_oldest(), Some("key1"));
        assert_eq!(order(&lru), vec!["key3", "key2", "key1"]);
    }

    #[test]
    fn test_lru_touch_existing_key() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");
        lru.touch("key3");

        // Touch key1 again - should move to front
        lru.touch("key1");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some("key2"));
        assert_eq!(order(&lru), vec!["key1", "key3", "key2"]);
    }

    #[test]
    fn test_lru_touch_head_is_noop() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("b");

        assert_eq!(order(&lru), vec!["b", "a"]);
    }

    #[test]
    fn test_lru_evict_key_does_not_remove() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");

        assert_eq!(lru.evict_key(), Some("key1".to_string()));
        assert_eq!(lru.evict_key(), Some("key1".to_string()));
        assert_eq!(lru.len(), 2);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");
        lru.touch("key3");

        lru.remove("key2");

        assert_eq!(lru.len(), 2);
        assert!(!lru.contains("key2"));
        assert!(lru.contains("key1"));
        assert!(lru.contains("key3"));
        assert_eq!(order(&lru), vec!["key3", "key1"]);
    }

    #[test]
    fn test_lru_remove_head_and_tail() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");

        lru.remove("c");
        assert_eq!(order(&lru), vec!["b", "a"]);

        lru.remove("a");
        assert_eq!(order(&lru), vec!["b"]);
        assert_eq!(lru.peek_oldest(), Some("b"));

        lru.remove("b");
        assert!(lru.is_empty());
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = LruTracker::new();

        lru.touch("a");
        lru.touch("b");
        lru.touch("c");

        lru.touch("a");
        lru.touch("c");
        lru.touch("b");

        // front=[b, c, a]=back
        assert_eq!(order(&lru), vec!["b", "c", "a"]);

        let mut evicted = Vec::new();
        while let Some(key) = lru.evict_key() {
            lru.on_del(&key);
            evicted.push(key);
        }
        assert_eq!(evicted, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_lru_remove_nonexistent_key() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key2");

        // Remove a key that doesn't exist - should not panic or affect existing keys
        lru.remove("nonexistent");

        assert_eq!(lru.len(), 2);
        assert!(lru.contains("key1"));
        assert!(lru.contains("key2"));
    }

    #[test]
    fn test_lru_touch_same_key_multiple_times() {
        let mut lru = LruTracker::new();

        lru.touch("key1");
        lru.touch("key1");
        lru.touch("key1");

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.evict_key(), Some("key1".to_string()));
    }

    #[test]
    fn test_lru_reuses_freed_slots() {
        let mut lru = LruTracker::new();

        for i in 0..4 {
            lru.touch(&format!("k{}", i));
        }
        lru.remove("k1");
        lru.remove("k2");
        lru.touch("k4");
        lru.touch("k5");

        assert_eq!(lru.nodes.len(), 4, "Freed slots should be reused");
        assert_eq!(order(&lru), vec!["k5", "k4", "k3", "k0"]);
    }
}
