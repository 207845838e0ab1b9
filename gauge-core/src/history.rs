//! Fixed-Size Circular History with Running Min/Max
//!
//! ## Overview
//!
//! A display that shows "current, peak and trough over the last N
//! measurements" needs the extrema of a sliding window after every insertion.
//! Rescanning N values per insertion is wasteful; tracking the extrema
//! incrementally is cheap except for one case: when the slot being
//! overwritten holds the current maximum (or minimum), the extremum may leave
//! the window and nothing short of a rescan can find its replacement.
//!
//! [`HistoryTracker`] keeps a fixed-capacity ring of values plus the cached
//! maximum and minimum and the physical slot holding each.
//!
//! ### Memory Layout
//!
//! ```text
//! HistoryTracker<u16, 5> after inserting 3, 8, 1, 6, 4, 7:
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  7  │  8  │  1  │  6  │  4  │  ← slots
//! └─────┴─────┴─────┴─────┴─────┘
//!    0     1     2     3     4
//!          ↑
//!          cursor = 1 (next write), max_slot = 1
//!
//! The next insertion overwrites the 8; unless it is at least 8 itself, the
//! maximum has to be found again by rescanning.
//! ```
//!
//! ### Insertion
//!
//! Every insertion writes at `cursor` and advances it modulo `N`. The two
//! extrema are then updated independently:
//!
//! | Condition                                 | Action                |
//! |-------------------------------------------|-----------------------|
//! | `value >= max`                            | `max_slot` = new slot |
//! | otherwise, overwritten slot was `max_slot`| rescan                |
//! | otherwise                                 | max unchanged         |
//!
//! and symmetrically with `<=` for the minimum. At most one rescan happens
//! per insertion; it recomputes both extrema.
//!
//! ### Tie-Break: Newest Wins
//!
//! Among equal values the most recently inserted is designated. The
//! incremental path gets this from `>=`/`<=`; the rescan visits slots from
//! oldest to newest with the same comparisons, so the last equal value seen,
//! i.e. the newest, wins there too. Both paths therefore designate the same
//! slot for a given set of held values, so
//! [`max_age`](HistoryTracker::max_age) and
//! [`min_age`](HistoryTracker::min_age) never depend on which path ran last.
//!
//! ### Age
//!
//! Age counts insertions since a slot was written: 0 for the value just
//! inserted, `N - 1` for the oldest value of a full tracker.
//!
//! ```text
//! age(slot) = (cursor + N - 1 - slot) mod N
//! ```
//!
//! ## Performance Characteristics
//!
//! - `insert()`: O(1), O(N) only when an extremum is evicted
//! - `max()`, `min()`, ages: O(1)
//! - Zero heap allocations; `N × size_of::<T>()` plus five words
//!
//! ## Usage Example
//!
//! ```rust
//! use gauge_core::HistoryTracker;
//!
//! let mut history: HistoryTracker<u16, 3> = HistoryTracker::new();
//! for value in [5, 9, 9, 2] {
//!     history.insert(value);
//! }
//!
//! // 5 was evicted; of the two 9s the newer one is designated
//! assert_eq!(history.max(), Some(9));
//! assert_eq!(history.max_age(), Some(1));
//! assert_eq!(history.min(), Some(2));
//! assert_eq!(history.min_age(), Some(0));
//! ```

use crate::constants::DEFAULT_HISTORY_SIZE;

/// History of averaged measurements at the default depth
pub type MeasurementHistory = HistoryTracker<u16, DEFAULT_HISTORY_SIZE>;

/// Fixed-capacity ring of values with incrementally maintained extrema
///
/// ## Type Parameters
///
/// - `T`: stored value; any totally ordered `Copy` type
/// - `N`: capacity, a compile-time constant. `N == 0` fails to compile at
///   the call to [`new`](Self::new).
///
/// ## Internal Invariants
///
/// - `cursor < N`, `len <= N`
/// - when `len > 0`: `slots[max_slot]` is the maximum of the held values and
///   is the newest slot holding that value; likewise for `min_slot`
///
/// ## Thread Safety
///
/// Single context only. Feed it from the main loop, never from the sampling
/// interrupt.
#[derive(Debug, Clone)]
pub struct HistoryTracker<T, const N: usize> {
    slots: [T; N],

    /// Index where the next write will occur
    cursor: usize,

    /// Held values; grows to N, then stays
    len: usize,

    max: T,
    max_slot: usize,
    min: T,
    min_slot: usize,
}

impl<T, const N: usize> HistoryTracker<T, N>
where
    T: Copy + Ord + Default,
{
    /// Creates an empty tracker
    pub fn new() -> Self {
        const { assert!(N > 0, "history capacity must be non-zero") };

        Self {
            slots: [T::default(); N],
            cursor: 0,
            len: 0,
            max: T::default(),
            max_slot: 0,
            min: T::default(),
            min_slot: 0,
        }
    }

    /// Append a value, evicting the oldest once full
    pub fn insert(&mut self, value: T) {
        let slot = self.cursor;
        self.slots[slot] = value;
        self.cursor = (self.cursor + 1) % N;

        if self.len == 0 {
            self.len = 1;
            self.max = value;
            self.min = value;
            self.max_slot = slot;
            self.min_slot = slot;
            return;
        }

        if self.len < N {
            self.len += 1;
        }

        let mut stale = false;

        if value >= self.max {
            self.max = value;
            self.max_slot = slot;
        } else if self.max_slot == slot {
            stale = true;
        }

        if value <= self.min {
            self.min = value;
            self.min_slot = slot;
        } else if self.min_slot == slot {
            stale = true;
        }

        if stale {
            self.rescan();
        }
    }

    /// Largest held value
    pub fn max(&self) -> Option<T> {
        (self.len > 0).then_some(self.max)
    }

    /// Insertions since the largest value was written
    pub fn max_age(&self) -> Option<usize> {
        (self.len > 0).then(|| self.age_of(self.max_slot))
    }

    /// Smallest held value
    pub fn min(&self) -> Option<T> {
        (self.len > 0).then_some(self.min)
    }

    /// Insertions since the smallest value was written
    pub fn min_age(&self) -> Option<usize> {
        (self.len > 0).then(|| self.age_of(self.min_slot))
    }

    /// Most recently inserted value
    pub fn latest(&self) -> Option<T> {
        self.get(0)
    }

    /// Value inserted `age` insertions ago (0 = latest)
    pub fn get(&self, age: usize) -> Option<T> {
        (age < self.len).then(|| self.slots[self.slot_of(age)])
    }

    /// Iterate over held values from oldest to newest
    pub fn iter(&self) -> HistoryIter<'_, T, N> {
        HistoryIter {
            tracker: self,
            remaining: self.len,
        }
    }

    /// Copy of the held values, oldest first
    pub fn snapshot(&self) -> heapless::Vec<T, N> {
        self.iter().collect()
    }

    /// Get number of held values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if every slot holds a value
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Total slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Forget all values; the next insertion seeds the extrema again
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.len = 0;
    }

    /// Recompute both extrema from the held values
    ///
    /// Visits oldest to newest so the newest of equal values wins.
    fn rescan(&mut self) {
        log_trace!("history rescan over {} slots", self.len);

        let oldest = self.slot_of(self.len - 1);
        self.max = self.slots[oldest];
        self.max_slot = oldest;
        self.min = self.slots[oldest];
        self.min_slot = oldest;

        for age in (0..self.len - 1).rev() {
            let slot = self.slot_of(age);
            let value = self.slots[slot];

            if value >= self.max {
                self.max = value;
                self.max_slot = slot;
            }
            if value <= self.min {
                self.min = value;
                self.min_slot = slot;
            }
        }
    }

    /// Physical slot written `age` insertions ago
    #[inline]
    fn slot_of(&self, age: usize) -> usize {
        (self.cursor + N - 1 - age) % N
    }

    /// Insertions since `slot` was written
    #[inline]
    fn age_of(&self, slot: usize) -> usize {
        (self.cursor + N - 1 - slot) % N
    }
}

impl<T, const N: usize> Default for HistoryTracker<T, N>
where
    T: Copy + Ord + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over tracker contents, oldest first
pub struct HistoryIter<'a, T, const N: usize> {
    tracker: &'a HistoryTracker<T, N>,
    remaining: usize,
}

impl<T, const N: usize> Iterator for HistoryIter<'_, T, N>
where
    T: Copy + Ord + Default,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        self.tracker.get(self.remaining)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for HistoryIter<'_, T, N> where T: Copy + Ord + Default {}
