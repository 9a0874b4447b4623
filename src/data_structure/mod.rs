use std::{fmt, rc::Rc};

use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("tried to take a value from an empty stack")]
pub struct EmptyStackError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<Rc<Node<T>>>,
}

/// Singly-linked stack whose nodes are immutable and shared.
///
/// Copying a stack only copies the head pointer, so it is O(1) regardless of
/// the depth. After a copy both handles evolve independently, because `push`
/// and `pop` only ever move the local head and never touch a node.
pub struct PersistentStack<T> {
    head: Option<Rc<Node<T>>>,
    len: usize,
}

impl<T> Default for PersistentStack<T> {
    fn default() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<T> Clone for PersistentStack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> PersistentStack<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Rc::new(Node { value, next }));
        self.len += 1;
    }

    pub fn peek(&self) -> Result<&T, EmptyStackError> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or(EmptyStackError)
    }

    /// Returns a handle sharing every node with `self`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Forgets every element. Nodes still reachable from other handles stay
    /// alive.
    pub fn clear(&mut self) {
        self.release();
        self.len = 0;
    }

    /// Whether both handles point at the very same head node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(lhs), Some(rhs)) => Rc::ptr_eq(lhs, rhs),
            (None, None) => true,
            _ => false,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    // Unlinks the chain iteratively, stopping at the first node someone else
    // still owns, so dropping a deep unique chain does not recurse.
    fn release(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            match Rc::try_unwrap(node) {
                Ok(Node { next, .. }) => head = next,
                Err(_) => break,
            }
        }
    }
}

impl<T: Clone> PersistentStack<T> {
    /// Moves the head one node down and returns the value it pointed at.
    ///
    /// The value is moved out when this handle was the only owner of the node
    /// and cloned otherwise.
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        let node = self.head.take().ok_or(EmptyStackError)?;
        self.len -= 1;
        match Rc::try_unwrap(node) {
            Ok(Node { value, next }) => {
                self.head = next;
                Ok(value)
            }
            Err(shared) => {
                self.head = shared.next.clone();
                Ok(shared.value.clone())
            }
        }
    }
}

impl<T> Drop for PersistentStack<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for PersistentStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Pushes the items in order, so the last item ends up on top.
impl<T> FromIterator<T> for PersistentStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

/// Iterates from the top of the stack to the bottom.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a PersistentStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
