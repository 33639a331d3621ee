//! Min-priority queue backed by an unbalanced binary search tree.
//!
//! Unlike [std::collections::BinaryHeap], items sharing a priority come out in the
//! order they were inserted. The cost-ordered searches rely on this to decide which
//! cell on a cost plateau is expanded first.

use crate::error::{Error, Result};
use core::fmt;

struct PriorityNode<T, P> {
    item: T,
    priority: P,
    left: Option<Box<PriorityNode<T, P>>>,
    right: Option<Box<PriorityNode<T, P>>>,
}

impl<T, P> PriorityNode<T, P> {
    fn leaf(item: T, priority: P) -> Box<Self> {
        Box::new(PriorityNode {
            item,
            priority,
            left: None,
            right: None,
        })
    }
}

/// Tree ordered by priority. The leftmost node always holds the minimum, and among
/// equal priorities the one inserted first. There is no rebalancing, so strictly
/// increasing insertions degrade to a list.
pub struct PriorityQueue<T, P = i32> {
    root: Option<Box<PriorityNode<T, P>>>,
    count: usize,
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        PriorityQueue {
            root: None,
            count: 0,
        }
    }
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item`. Descends left past every node with a strictly greater priority
    /// and right otherwise, so ties land behind earlier insertions.
    pub fn enqueue(&mut self, item: T, priority: P) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if node.priority > priority {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(PriorityNode::leaf(item, priority));
        self.count += 1;
    }

    /// Removes and returns the item with the smallest priority.
    pub fn dequeue(&mut self) -> Result<T> {
        self.dequeue_with_priority().map(|(item, _)| item)
    }

    /// Like [dequeue](Self::dequeue) but also hands back the priority the item was
    /// queued with.
    pub fn dequeue_with_priority(&mut self) -> Result<(T, P)> {
        let mut slot = &mut self.root;
        while slot.as_ref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }
        let mut node = slot.take().ok_or(Error::EmptyQueue)?;
        // The right subtree takes the removed node's place on the same side.
        *slot = node.right.take();
        self.count -= 1;
        Ok((node.item, node.priority))
    }

    /// Priority of the item the next [dequeue](Self::dequeue) would return.
    pub fn peek_priority(&self) -> Option<&P> {
        let mut node = self.root.as_ref()?;
        while let Some(left) = node.left.as_ref() {
            node = left;
        }
        Some(&node.priority)
    }
}

impl<T, P> PriorityQueue<T, P> {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        let mut stack: Vec<Box<PriorityNode<T, P>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.count = 0;
    }
}

impl<T, P> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.count)
            .finish()
    }
}

// Degenerate trees are as deep as they are long; dropping them recursively could
// exhaust the stack.
impl<T, P> Drop for PriorityQueue<T, P> {
    fn drop(&mut self) {
        self.clear();
    }
}
