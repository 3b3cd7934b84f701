//! Persistent singly linked list.
//!
//! `cons` shares the tail instead of copying it, so many lists can hang off
//! one suffix. Dropping is iterative to keep long lists off the stack.

use std::fmt;
use std::sync::Arc;

struct Node<T> {
    value: T,
    next: List<T>,
}

pub struct List<T> {
    head: Option<Arc<Node<T>>>,
}

impl<T> List<T> {
    pub fn nil() -> Self {
        Self { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// A new list with `value` in front of `self`.
    pub fn cons(&self, value: T) -> Self {
        Self {
            head: Some(Arc::new(Node {
                value,
                next: self.clone(),
            })),
        }
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|n| &n.value)
    }

    /// Everything after the head; empty for the empty list.
    pub fn tail(&self) -> Self {
        match &self.head {
            Some(node) => node.next.clone(),
            None => Self::nil(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cur: self.head.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Prepend every element of `items`, in order, onto `tail`.
    pub fn from_vec_with_tail(items: Vec<T>, tail: &List<T>) -> Self {
        let mut out = tail.clone();
        for item in items.into_iter().rev() {
            out = out.cons(item);
        }
        out
    }

    /// True when both lists share the same first node.
    pub fn ptr_eq(&self, other: &List<T>) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Clone> List<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(node) = cur {
            match Arc::try_unwrap(node) {
                Ok(mut node) => cur = node.next.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_tail(iter.into_iter().collect(), &Self::nil())
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    cur: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.cur?;
        self.cur = node.next.head.as_deref();
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
