use std::collections::{LinkedList, VecDeque};

/// A queue that supports pushing at the back and popping at both ends.
/// This abstracts over the double-ended queues of the standard library,
/// such that a traversal can be run both as a stack and as a FIFO queue.
pub trait BidirectedQueue<T>: Default {
    /// Inserts an element at the back of the queue.
    fn push_back(&mut self, t: T);
    /// Removes and returns the element at the front of the queue.
    fn pop_front(&mut self) -> Option<T>;
    /// Removes and returns the element at the back of the queue.
    fn pop_back(&mut self) -> Option<T>;
    /// Removes all elements.
    fn clear(&mut self);
    /// Returns the amount of elements in the queue.
    fn len(&self) -> usize;
    /// Returns true if the queue contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_bidirected_queue {
    ($queue:ident) => {
        impl<T> BidirectedQueue<T> for $queue<T> {
            #[inline]
            fn push_back(&mut self, t: T) {
                $queue::push_back(self, t)
            }

            #[inline]
            fn pop_front(&mut self) -> Option<T> {
                $queue::pop_front(self)
            }

            #[inline]
            fn pop_back(&mut self) -> Option<T> {
                $queue::pop_back(self)
            }

            fn clear(&mut self) {
                $queue::clear(self)
            }

            #[inline]
            fn len(&self) -> usize {
                $queue::len(self)
            }
        }
    };
}

impl_bidirected_queue!(VecDeque);
impl_bidirected_queue!(LinkedList);
