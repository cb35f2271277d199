//! Singly-linked record list
//!
//! Records are held in boxed nodes, each owning its successor. Appends walk
//! to the tail, prepends replace the head, and lookups and deletions scan
//! from the head so the first match in list order wins.

use std::fmt;
use std::iter::FusedIterator;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// An insertion-ordered list of records.
///
/// `len` is maintained alongside the chain, so [`len`](Self::len) and
/// [`is_empty`](Self::is_empty) are O(1). All point operations are linear.
/// There is no internal synchronization; wrap the list in a `Mutex` if it
/// must be shared between threads.
///
/// # Example
///
/// ```
/// use nonprofit_registry::RecordList;
///
/// let mut list = RecordList::new();
/// list.append("A");
/// list.append("B");
/// list.prepend("C");
///
/// assert_eq!(list.to_vec(), vec!["C", "A", "B"]);
/// assert_eq!(list.len(), 3);
///
/// assert!(list.delete(&"A"));
/// assert_eq!(list.find(&"A"), None);
/// assert_eq!(list.to_string(), "C -> B");
/// ```
pub struct RecordList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of records in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ═══════════════════════════════════════════════════════════════════
    // Insertion
    // ═══════════════════════════════════════════════════════════════════

    /// Insert a record after the current last node.
    ///
    /// Returns the record in its new position.
    pub fn append(&mut self, value: T) -> &mut T {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        self.len += 1;
        let node = cursor.insert(Box::new(Node { value, next: None }));
        &mut node.value
    }

    /// Insert a record before the current head.
    pub fn prepend(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// The first record, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// First record matching `predicate`, scanning from the head.
    pub fn find_by<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// Mutable access to the first record matching `predicate`.
    pub fn find_mut_by<F>(&mut self, mut predicate: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter_mut().find(|value| predicate(value))
    }

    /// First record equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.find_by(|candidate| candidate == value)
    }

    /// Whether any record equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Removal
    // ═══════════════════════════════════════════════════════════════════

    /// Unlink the first record matching `predicate` and return it.
    ///
    /// A matching head is replaced by its successor; otherwise the matching
    /// node is spliced out of its predecessor's link.
    pub fn remove_by<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| !predicate(&node.value)) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let removed = cursor.take()?;
        let Node { value, next } = *removed;
        *cursor = next;
        self.len -= 1;
        Some(value)
    }

    /// Delete the first record matching `predicate`.
    ///
    /// Returns `false` and leaves the list untouched when nothing matches.
    pub fn delete_by<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.remove_by(predicate).is_some()
    }

    /// Delete the first record equal to `value`.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.delete_by(|candidate| candidate == value)
    }

    /// Remove and return the head record.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Traversal
    // ═══════════════════════════════════════════════════════════════════

    /// Borrowing iterator in list order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Mutable iterator in list order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Copy the records into a vector, preserving list order.
    ///
    /// The list is left intact, so repeated calls yield equal vectors.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for RecordList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; recursive Box drops overflow on long chains.
        self.clear();
    }
}

impl<T: Clone> Clone for RecordList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for RecordList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RecordList<T> {}

impl<T: fmt::Debug> fmt::Debug for RecordList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RecordList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T> Extend<T> for RecordList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Walk to the tail once rather than once per record.
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            let node = cursor.insert(Box::new(Node { value, next: None }));
            cursor = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for RecordList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Iterators
// ═══════════════════════════════════════════════════════════════════════

/// Borrowing iterator over a [`RecordList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Mutable iterator over a [`RecordList`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`RecordList`].
pub struct IntoIter<T>(RecordList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RecordList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RecordList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
