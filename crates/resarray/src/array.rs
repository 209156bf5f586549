//! The [`ResizableArray`] container.
//!
//! Storage is a fixed-length boxed slice of `Option<T>` slots. Slots
//! `0..len` are always `Some`, slots `len..capacity` are always `None`, so
//! a removed element is dropped as soon as it leaves the live region and
//! nothing in the buffer keeps it reachable.
//!
//! # Capacity policy
//!
//! ```text
//! after an insertion:  len == capacity       => capacity *= 2
//! after a removal:     capacity / 4 >= len   => capacity /= 2  (floor 2)
//! ```
//!
//! Growth fires as soon as the last slot is filled, so there is always at
//! least one free slot at the tail when an insertion starts.

use std::fmt;

use log::debug;

use crate::config::{ArrayConfig, RemovePolicy};
use crate::error::ArrayError;
use crate::metrics::ResizeMetrics;

/// A growable, shrinkable sequence backed by a single contiguous buffer.
///
/// Appends are amortized *O*(1); indexed insertion and deletion shift the
/// tail and cost *O*(n - index). Capacity is always a power of two and
/// never below [`ArrayConfig::INITIAL_CAPACITY`].
///
/// Not synchronised: wrap it in a lock to share it between threads.
///
/// ```
/// use resarray::ResizableArray;
///
/// let mut arr = ResizableArray::new();
/// for n in 1..=5 {
///     arr.push(n);
/// }
/// assert_eq!(arr.len(), 5);
/// assert_eq!(arr.capacity(), 8);
/// assert_eq!(arr.at(2), Ok(&3));
///
/// assert_eq!(arr.delete(2), Ok(3));
/// assert_eq!(arr.at(2), Ok(&4));
/// ```
pub struct ResizableArray<T> {
    /// Backing storage; its length is the capacity.
    buffer: Box<[Option<T>]>,
    /// Number of live elements at the front of `buffer`.
    len: usize,
    config: ArrayConfig,
    metrics: ResizeMetrics,
}

impl<T> ResizableArray<T> {
    /// Create an empty array with capacity 2 and the default config.
    pub fn new() -> Self {
        Self::with_config(ArrayConfig::default())
    }

    /// Create an empty array with capacity 2 and the given config.
    pub fn with_config(config: ArrayConfig) -> Self {
        Self {
            buffer: alloc_slots(ArrayConfig::INITIAL_CAPACITY),
            len: 0,
            config,
            metrics: ResizeMetrics::default(),
        }
    }

    /// The config this array was built with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Reallocation counters accumulated since construction.
    pub fn metrics(&self) -> ResizeMetrics {
        self.metrics
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::OutOfBounds`] unless `index < len`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        Ok(self.buffer[index].as_ref().expect("slot below len is occupied"))
    }

    /// Mutably borrow the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::OutOfBounds`] unless `index < len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check_index(index)?;
        Ok(self.buffer[index].as_mut().expect("slot below len is occupied"))
    }

    /// Append `item` after the last element, growing if the buffer fills.
    pub fn push(&mut self, item: T) {
        self.shift_in(self.len, item);
    }

    /// Insert `item` at `index`, shifting `index..len` one slot right.
    ///
    /// `index == len` is equivalent to [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// [`ArrayError::OutOfBounds`] if `index > len`. The array is unchanged.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        self.shift_in(index, item);
        Ok(())
    }

    /// Insert `item` at the front.
    pub fn prepend(&mut self, item: T) {
        self.shift_in(0, item);
    }

    /// Remove and return the last element, shrinking if the array becomes sparse.
    ///
    /// # Errors
    ///
    /// [`ArrayError::Underflow`] if the array is empty. The array is unchanged.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::Underflow);
        }
        Ok(self.shift_out(self.len - 1))
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// [`ArrayError::OutOfBounds`] unless `index < len`. The array is unchanged.
    pub fn delete(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        Ok(self.shift_out(index))
    }

    /// Remove every element equal to `item` under the configured
    /// [`RemovePolicy`]. Returns how many elements were removed.
    ///
    /// Removing a value that is not present is a no-op returning `0`.
    pub fn remove(&mut self, item: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_with(item, self.config.remove_policy)
    }

    /// Like [`remove`](Self::remove), but with an explicit policy for this call.
    ///
    /// ```
    /// use resarray::{RemovePolicy, ResizableArray};
    ///
    /// let mut arr = ResizableArray::new();
    /// for n in [1, 1, 2] {
    ///     arr.push(n);
    /// }
    /// // The second 1 shifts into slot 0 after the first is deleted and is
    /// // never looked at.
    /// assert_eq!(arr.remove_with(&1, RemovePolicy::SkipShifted), 1);
    /// assert_eq!(arr.find(&1), Some(0));
    /// ```
    pub fn remove_with(&mut self, item: &T, policy: RemovePolicy) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut i = 0;
        while i < self.len {
            if self.buffer[i].as_ref() == Some(item) {
                drop(self.shift_out(i));
                removed += 1;
                if policy == RemovePolicy::Rescan {
                    continue;
                }
            }
            i += 1;
        }
        removed
    }

    /// Index of the first element equal to `item`, or `None` if absent.
    pub fn find(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len).find(|&i| self.buffer[i].as_ref() == Some(item))
    }

    /// Drop every element and return to the initial capacity.
    pub fn clear(&mut self) {
        if self.capacity() == ArrayConfig::INITIAL_CAPACITY {
            self.buffer.iter_mut().for_each(|slot| *slot = None);
            self.len = 0;
            return;
        }
        debug!(
            "array cleared: capacity {} -> {}, dropped {} elements",
            self.capacity(),
            ArrayConfig::INITIAL_CAPACITY,
            self.len
        );
        self.buffer = alloc_slots(ArrayConfig::INITIAL_CAPACITY);
        self.len = 0;
        self.metrics.shrinks += 1;
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ArrayError::OutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Place `item` at `index <= len`, moving `index..len` right by one.
    fn shift_in(&mut self, index: usize, item: T) {
        // Walk from the tail down so every source is read before it is overwritten.
        for i in (index..self.len).rev() {
            self.buffer[i + 1] = self.buffer[i].take();
        }
        self.buffer[index] = Some(item);
        self.len += 1;

        if self.len == self.capacity() {
            let new_capacity = self
                .capacity()
                .checked_mul(2)
                .expect("capacity overflow");
            self.reallocate(new_capacity);
            self.metrics.grows += 1;
        }
    }

    /// Take the element at `index < len`, moving `index + 1..len` left by one.
    fn shift_out(&mut self, index: usize) -> T {
        let item = self.buffer[index]
            .take()
            .expect("slot below len is occupied");
        for i in index..self.len - 1 {
            self.buffer[i] = self.buffer[i + 1].take();
        }
        self.len -= 1;

        let capacity = self.capacity();
        if capacity > ArrayConfig::INITIAL_CAPACITY && capacity / 4 >= self.len {
            self.reallocate((capacity / 2).max(ArrayConfig::INITIAL_CAPACITY));
            self.metrics.shrinks += 1;
        }
        item
    }

    /// Move the live elements into a fresh buffer of `new_capacity` slots
    /// and release the old one.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity > self.len);
        debug_assert!(new_capacity.is_power_of_two());

        let mut buffer = alloc_slots(new_capacity);
        for (dst, src) in buffer.iter_mut().zip(self.buffer[..self.len].iter_mut()) {
            *dst = src.take();
        }
        debug!(
            "array capacity resized from {} to {} ({} live elements)",
            self.capacity(),
            new_capacity,
            self.len
        );
        self.metrics.elements_moved += self.len as u64;
        self.buffer = buffer;
    }
}

fn alloc_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for ResizableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ResizableArray<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            len: self.len,
            config: self.config.clone(),
            metrics: ResizeMetrics::default(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ResizableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.buffer[..self.len].iter().flatten())
            .finish()
    }
}

/// Equal when the live elements are equal; capacity, config and metrics are ignored.
impl<T: PartialEq> PartialEq for ResizableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer[..self.len] == other.buffer[..other.len]
    }
}

impl<T: Eq> Eq for ResizableArray<T> {}
