//! Growable Array
//!
//! A dense, zero-indexed sequence backed by a single contiguous buffer.
//! When the buffer is full it is replaced by one `growth_factor` times larger
//! and the live elements are moved across in order, which amortizes `push`
//! to O(1).
//!
//! The buffer holds `Option<T>` slots. Slots `[0, len)` are always `Some`,
//! slots `[len, capacity)` are always `None`, so no element outlives its
//! logical removal.
//!
//! - `get` / `set`: O(1), checked against the logical length
//! - `push`: amortized O(1)
//! - `insert` / `remove`: O(n) shift

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::profiling;

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// Largest buffer, in slots, that stays within `isize::MAX` bytes.
fn max_slots<T>() -> usize {
    isize::MAX as usize / std::mem::size_of::<Option<T>>().max(1)
}

fn compare_slots<T: PartialOrd>(a: &Option<T>, b: &Option<T>) -> Result<Ordering> {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(b).ok_or(Error::Unorderable),
        _ => Ok(a.is_some().cmp(&b.is_some())),
    }
}

/// Bottom-up stable merge sort of the indices in `order` by the slots they
/// point at. Stops at the first undefined comparison.
fn merge_sort_partial<T: PartialOrd>(slots: &[Option<T>], order: &mut Vec<usize>) -> Result<()> {
    let n = order.len();
    let mut merged = order.clone();
    let mut width = 1;
    while width < n {
        for start in (0..n).step_by(2 * width) {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            let (mut left, mut right) = (start, mid);
            for out in &mut merged[start..end] {
                // Right wins only when strictly smaller, which keeps equal items in order.
                let take_right = if left == mid {
                    true
                } else if right == end {
                    false
                } else {
                    compare_slots(&slots[order[right]], &slots[order[left]])? == Ordering::Less
                };
                if take_right {
                    *out = order[right];
                    right += 1;
                } else {
                    *out = order[left];
                    left += 1;
                }
            }
        }
        std::mem::swap(order, &mut merged);
        width *= 2;
    }
    Ok(())
}

/// A generic array that doubles its backing buffer when full.
#[derive(Clone)]
pub struct GrowableArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    growth_factor: usize,
}

impl<T> GrowableArray<T> {
    /// Create an empty array with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::new().with_initial_capacity(capacity))
    }

    pub fn with_config(config: Config) -> Self {
        GrowableArray {
            slots: empty_slots(config.initial_capacity),
            len: 0,
            growth_factor: config.effective_growth_factor(),
        }
    }

    /// Create an array of `len` copies of `value`, with no spare capacity.
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        GrowableArray {
            slots: std::iter::repeat_n(value, len).map(Some).collect(),
            len,
            growth_factor: Config::new().effective_growth_factor(),
        }
    }

    /// Create an array of `len` default values, with no spare capacity.
    pub fn with_default(len: usize) -> Self
    where
        T: Default,
    {
        GrowableArray {
            slots: std::iter::repeat_with(|| Some(T::default())).take(len).collect(),
            len,
            growth_factor: Config::new().effective_growth_factor(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.slots[..len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::OutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.slots[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Overwrite the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<&T> {
        let index = self.len.checked_sub(1)?;
        self.get(index).ok()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|other| other == item)
    }

    /// Append an item, growing the buffer first if it is full.
    pub fn push(&mut self, item: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
    }

    /// Insert an item at `index`, shifting later items right.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }
        if len == self.capacity() {
            self.grow();
        }
        self.slots[len] = Some(item);
        self.slots[index..=len].rotate_right(1);
        self.len += 1;
        profiling::shift(len - index);
        Ok(())
    }

    /// Remove the item at `index`, shifting later items left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let item = self.slots[..len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(Error::OutOfRange { index, len })?;

        // Moves the vacated `None` to the end of the live range.
        self.slots[index..len].rotate_left(1);
        self.len -= 1;
        profiling::shift(self.len - index);
        Ok(item)
    }

    pub fn pop(&mut self) -> Option<T> {
        let index = self.len.checked_sub(1)?;
        self.len = index;
        self.slots[index].take()
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        for slot in &mut self.slots[..len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Grow until at least `additional` more items fit without reallocating.
    ///
    /// The new capacity follows the growth policy, so it may exceed
    /// `len() + additional`.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self.len.saturating_add(additional);
        if needed <= self.capacity() {
            return;
        }
        let mut capacity = self.capacity();
        while capacity < needed {
            capacity = self.next_capacity(capacity);
        }
        self.reallocate(capacity);
        profiling::growth(self.len);
    }

    /// Release spare capacity so that `capacity() == len()`.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.reallocate(self.len);
        }
    }

    /// Sort the live elements in ascending order.
    ///
    /// The sort is stable and never touches the spare slots past `len()`.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        // `None < Some(_)`, but the live range holds only `Some`.
        self.slots[..self.len].sort();
    }

    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.slots[..self.len].sort_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            _ => a.is_some().cmp(&b.is_some()),
        });
    }

    /// Sort elements that only have a partial order.
    ///
    /// Fails with [`Error::Unorderable`] if any element is not comparable
    /// with itself (such as `NaN`) or if any comparison made while sorting is
    /// undefined. On failure the array is left untouched.
    pub fn try_sort(&mut self) -> Result<()>
    where
        T: PartialOrd,
    {
        let live = &self.slots[..self.len];
        if live.iter().flatten().any(|item| item.partial_cmp(item).is_none()) {
            return Err(Error::Unorderable);
        }

        // Sort a permutation first so a failed comparison leaves no trace.
        let mut order: Vec<usize> = (0..live.len()).collect();
        merge_sort_partial(live, &mut order)?;

        let len = self.len;
        let mut taken: Vec<Option<T>> = self.slots[..len].iter_mut().map(Option::take).collect();
        for (slot, &from) in self.slots.iter_mut().zip(&order) {
            *slot = taken[from].take();
        }
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.slots[..self.len].iter_mut(),
        }
    }

    /// Next buffer size under the growth policy. Falls back to one extra slot
    /// when multiplying would overflow or exceed the largest possible buffer.
    fn next_capacity(&self, capacity: usize) -> usize {
        let minimum = capacity.saturating_add(1);
        capacity
            .checked_mul(self.growth_factor)
            .filter(|&grown| grown <= max_slots::<T>())
            .map_or(minimum, |grown| grown.max(minimum))
    }

    fn grow(&mut self) {
        let capacity = self.next_capacity(self.capacity());
        self.reallocate(capacity);
        profiling::growth(self.len);
    }

    /// Move the live elements into a fresh buffer of `capacity` slots.
    fn reallocate(&mut self, capacity: usize) {
        let len = self.len;
        debug_assert!(capacity >= len);
        let mut slots = empty_slots(capacity);
        for (new, old) in slots.iter_mut().zip(&mut self.slots[..len]) {
            *new = old.take();
        }
        tracing::trace!(
            old_capacity = self.slots.len(),
            new_capacity = capacity,
            len,
            "reallocated backing buffer"
        );
        self.slots = slots;
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Equality compares live elements only; capacity is ignored.
impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        GrowableArray {
            slots: items.into_iter().map(Some).collect(),
            len,
            growth_factor: Config::new().effective_growth_factor(),
        }
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = GrowableArray::new();
        array.extend(iter);
        array
    }
}

/// Borrowing iterator over the live elements.
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator over the live elements.
pub struct IterMut<'a, T> {
    inner: std::slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator, created by `GrowableArray::into_iter`.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.len);
        IntoIter {
            inner: slots.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for GrowableArray<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for GrowableArray<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(GrowableArray::from)
    }
}
