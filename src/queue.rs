//! A bounded first-in-first-out queue of pending booking requests.
//!
//! The queue is a fixed-capacity ring: the capacity chosen at construction
//! never changes, an enqueue against a full queue is rejected (the value is
//! dropped and `false` returned), and a dequeue against an empty queue
//! reports `None`. Beyond strict FIFO order the queue imposes nothing: no
//! priorities, no deduplication, and no awareness of what its elements
//! mean. In the booking pipeline it carries bare seat numbers
//! (`BookingQueue<u32>`), and checking that a number names a real seat is
//! the caller's business.

/// A bounded FIFO over a fixed ring of slots.
///
/// Storage is a `Vec<Option<T>>` whose length is the capacity; `front` is
/// the slot of the oldest element and the rear slot is `front + len`,
/// wrapping modulo the capacity. Slots holding live elements are `Some`,
/// all others `None`.
#[derive(Debug, Clone)]
pub struct BookingQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    len: usize,
}

impl<T> BookingQueue<T> {
    /// Make a queue that can hold at most `capacity` elements. A capacity
    /// of zero is allowed and produces a queue that is permanently both
    /// empty and full.
    pub fn with_capacity(capacity: usize) -> BookingQueue<T> {
        BookingQueue {
            slots: (0..capacity).map(|_| None).collect(),
            front: 0,
            len: 0,
        }
    }

    /// The fixed capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of elements currently queued.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Append `value` at the rear of the queue. Returns `false` without
    /// queueing anything if the queue is full; the rejected value is
    /// dropped and no retry is attempted.
    pub fn enqueue(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        let rear = self.wrap(self.len);
        self.slots[rear] = Some(value);
        self.len += 1;
        true
    }

    /// Remove and return the oldest element, or `None` if the queue is
    /// empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take()?;
        self.front = self.wrap(1);
        self.len -= 1;
        Some(value)
    }

    /// The oldest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Iterate over the queued elements from front (oldest) to rear.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    /// The slot `offset` positions past `front`, wrapping around the ring.
    /// Only meaningful while the queue has at least one slot.
    fn wrap(&self, offset: usize) -> usize {
        (self.front + offset) % self.slots.len()
    }
}

pub struct Iter<'a, T> {
    queue: &'a BookingQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len {
            return None;
        }
        let slot = self.queue.wrap(self.offset);
        self.offset += 1;
        self.queue.slots[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<'a, T> IntoIterator for &'a BookingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_empty() {
        let queue: BookingQueue<u32> = BookingQueue::with_capacity(3);
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 3);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn rejects_when_full_and_drains_in_order() {
        let mut queue = BookingQueue::with_capacity(3);
        assert!(queue.enqueue(10));
        assert!(queue.enqueue(20));
        assert!(queue.enqueue(30));
        assert!(queue.is_full());
        assert!(!queue.enqueue(40));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Some(10));
        assert_eq!(queue.dequeue(), Some(20));
        assert_eq!(queue.dequeue(), Some(30));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn wraps_around_the_ring() {
        let mut queue = BookingQueue::with_capacity(2);
        for round in 0..10u32 {
            assert!(queue.enqueue(round));
            assert_eq!(queue.dequeue(), Some(round));
        }
        assert!(queue.enqueue(100));
        assert!(queue.enqueue(200));
        assert!(!queue.enqueue(300));
        assert_eq!(queue.dequeue(), Some(100));
        assert!(queue.enqueue(300));
        assert_eq!(queue.dequeue(), Some(200));
        assert_eq!(queue.dequeue(), Some(300));
        assert!(queue.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut queue = BookingQueue::with_capacity(2);
        queue.enqueue(7);
        assert_eq!(queue.peek(), Some(&7));
        assert_eq!(queue.peek(), Some(&7));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.dequeue(), Some(7));
    }

    #[test]
    fn iterates_front_to_rear_across_the_seam() {
        let mut queue = BookingQueue::with_capacity(3);
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        queue.dequeue();
        queue.enqueue(4);
        let seen: Vec<u32> = queue.iter().copied().collect();
        assert_eq!(seen, vec![2, 3, 4]);
        let again: Vec<u32> = (&queue).into_iter().copied().collect();
        assert_eq!(again, vec![2, 3, 4]);
    }

    #[test]
    fn zero_capacity_is_empty_and_full() {
        let mut queue = BookingQueue::with_capacity(0);
        assert!(queue.is_empty());
        assert!(queue.is_full());
        assert!(!queue.enqueue(1));
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek(), None);
    }
}
