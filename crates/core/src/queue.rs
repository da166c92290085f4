//! Bounded FIFO of pending input events.
//!
//! The input source pushes at arbitrary times; the tick step pops at most one
//! event per tick. When more events arrive than the capacity allows, the
//! oldest are dropped.

use std::collections::VecDeque;

use crate::types::InputEvent;

#[derive(Debug, Clone)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
    capacity: usize,
}

impl InputQueue {
    /// Create a queue keeping at most `capacity` events.
    ///
    /// A capacity of zero keeps no history: only the newest event pushed
    /// since the last pop survives.
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn retained(&self) -> usize {
        self.capacity.max(1)
    }

    /// Append an event, returning how many old events were dropped.
    pub fn push(&mut self, event: InputEvent) -> usize {
        self.events.push_back(event);
        let mut dropped = 0;
        while self.events.len() > self.retained() {
            self.events.pop_front();
            dropped += 1;
        }
        dropped
    }

    pub fn pop_one(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(name: &str) -> InputEvent {
        InputEvent::named(name)
    }

    #[test]
    fn pops_in_push_order() {
        let mut q = InputQueue::new(8);
        q.push(ev("e1"));
        q.push(ev("e2"));
        q.push(ev("e3"));
        assert_eq!(q.pop_one(), Some(ev("e1")));
        assert_eq!(q.pop_one(), Some(ev("e2")));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn drops_oldest_beyond_capacity() {
        let mut q = InputQueue::new(2);
        assert_eq!(q.push(ev("e1")), 0);
        assert_eq!(q.push(ev("e2")), 0);
        assert_eq!(q.push(ev("e3")), 1);
        assert_eq!(q.pop_one(), Some(ev("e2")));
        assert_eq!(q.pop_one(), Some(ev("e3")));
        assert_eq!(q.pop_one(), None);
    }

    #[test]
    fn zero_capacity_keeps_only_newest() {
        let mut q = InputQueue::new(0);
        q.push(ev("a"));
        q.push(ev("b"));
        q.push(ev("c"));
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_one(), Some(ev("c")));
        assert!(q.is_empty());
    }

    #[test]
    fn empty_queue_pops_none() {
        let mut q = InputQueue::new(3);
        assert_eq!(q.pop_one(), None);
    }
}
