//! A fixed-capacity circular double-ended queue.
//!
//! The deque keeps a `front` and a `back` index into its slots. `front` is the first live slot
//! and `back` is one past the last, both wrapping at the capacity. An empty deque has
//! `front == back`, so one slot always stays unused to tell a full deque from an empty one: a
//! deque with `N` slots holds at most `N - 1` values.
//!
//! Storage never grows. [`ArrayDeque`] keeps its slots inline in a `[T; N]`, while
//! [`BoundedDeque::with_capacity`] picks the slot count at runtime and allocates it once.
//!
//! What happens when a push would fill that last slot depends on the [`OverflowMode`].
//!
//! # Examples
//!
//! ```
//! use ordkit::deque::ArrayDeque;
//!
//! let mut deque = ArrayDeque::<i32, 8>::new();
//! for v in 1..=4 {
//!     deque.push_back(v);
//! }
//! assert_eq!((deque.len(), deque.front(), deque.back()), (4, Some(&1), Some(&4)));
//!
//! deque.pop_back();
//! assert_eq!((deque.len(), deque.back()), (3, Some(&3)));
//!
//! deque.pop_front();
//! assert_eq!((deque.len(), deque.front()), (2, Some(&2)));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use smart_default::SmartDefault;

use crate::error::ParseModeError;

/// What a push does when the deque has no usable slot left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SmartDefault)]
pub enum OverflowMode {
    /// Don't look. Pushing into a full deque makes `front == back` again, so it reads as empty
    /// and the values it held are lost. Only for callers that know they stay under capacity.
    Disabled,
    /// Drop the push and leave the deque as it was.
    #[default]
    SilentReturn,
}

impl FromStr for OverflowMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disabled" => Ok(Self::Disabled),
            "silent-return" | "silent_return" => Ok(Self::SilentReturn),
            _ => Err(ParseModeError {
                kind: "overflow mode",
                given: s.to_owned(),
                expected: "disabled, silent-return",
            }),
        }
    }
}

impl fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disabled => "disabled",
            Self::SilentReturn => "silent-return",
        })
    }
}

/// A double-ended queue over a fixed number of slots `S`.
pub struct BoundedDeque<T, S = Box<[T]>> {
    slots: S,
    front: usize,
    back: usize,
    mode: OverflowMode,
    _marker: PhantomData<T>,
}

/// A [`BoundedDeque`] whose `N` slots live inline.
pub type ArrayDeque<T, const N: usize> = BoundedDeque<T, [T; N]>;

impl<T, const N: usize> Default for BoundedDeque<T, [T; N]>
where
    T: Copy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BoundedDeque<T, [T; N]>
where
    T: Copy + Default,
{
    const HAS_SLOTS: () = assert!(N > 0, "a deque needs at least one slot");

    /// An empty deque with the default [`OverflowMode`].
    pub fn new() -> Self {
        Self::with_mode(OverflowMode::default())
    }

    /// An empty deque using `mode`.
    pub fn with_mode(mode: OverflowMode) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::HAS_SLOTS;
        Self::from_slots([T::default(); N], mode)
    }
}

impl<T> BoundedDeque<T, Box<[T]>>
where
    T: Copy + Default,
{
    /// An empty deque with `capacity` slots allocated up front, so it holds at most
    /// `capacity - 1` values.
    ///
    /// ## Panics
    ///
    /// When `capacity` is zero.
    pub fn with_capacity(capacity: usize, mode: OverflowMode) -> Self {
        assert!(capacity > 0, "a deque needs at least one slot");
        Self::from_slots(vec![T::default(); capacity].into_boxed_slice(), mode)
    }
}

impl<T, S> BoundedDeque<T, S>
where
    T: Copy,
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn from_slots(slots: S, mode: OverflowMode) -> Self {
        Self {
            slots,
            front: 0,
            back: 0,
            mode,
            _marker: PhantomData,
        }
    }

    /// Number of slots, one more than the most values the deque can hold.
    pub fn capacity(&self) -> usize {
        self.slots.as_ref().len()
    }

    /// The most values the deque can hold at once.
    pub fn usable(&self) -> usize {
        self.capacity() - 1
    }

    /// The overflow mode chosen at construction.
    pub fn mode(&self) -> OverflowMode {
        self.mode
    }

    /// Number of values in the deque.
    pub fn len(&self) -> usize {
        (self.back + self.capacity() - self.front) % self.capacity()
    }

    /// Whether the deque holds no values.
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// Whether one more push would run `back` into `front`.
    pub fn is_full(&self) -> bool {
        self.next(self.back) == self.front
    }

    fn next(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    fn prev(&self, index: usize) -> usize {
        (index + self.capacity() - 1) % self.capacity()
    }

    /// Whether a push has to be dropped under the current mode.
    fn rejects_push(&self) -> bool {
        let rejects = self.mode == OverflowMode::SilentReturn && self.is_full();
        if rejects {
            log::debug!(
                "deque with {} slots is full, dropping push",
                self.capacity()
            );
        }
        rejects
    }

    /// Appends `value`. Returns `false` if the push was dropped.
    pub fn push_back(&mut self, value: T) -> bool {
        if self.rejects_push() {
            return false;
        }
        let back = self.back;
        self.slots.as_mut()[back] = value;
        self.back = self.next(back);
        true
    }

    /// Prepends `value`. Returns `false` if the push was dropped.
    pub fn push_front(&mut self, value: T) -> bool {
        if self.rejects_push() {
            return false;
        }
        self.front = self.prev(self.front);
        let front = self.front;
        self.slots.as_mut()[front] = value;
        true
    }

    /// Removes the last value. The slot keeps its contents until something overwrites it.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.back = self.prev(self.back);
        Some(self.slots.as_ref()[self.back])
    }

    /// Removes the first value. The slot keeps its contents until something overwrites it.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots.as_ref()[self.front];
        self.front = self.next(self.front);
        Some(value)
    }

    /// The first value.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(&self.slots.as_ref()[self.front])
    }

    /// The last value, which sits one slot before `back`.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(&self.slots.as_ref()[self.prev(self.back)])
    }

    /// Forgets every value.
    pub fn clear(&mut self) {
        self.front = 0;
        self.back = 0;
    }

    /// The values from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let slots = self.slots.as_ref();
        (0..self.len()).map(move |i| &slots[(self.front + i) % slots.len()])
    }
}

impl<T, S> fmt::Debug for BoundedDeque<T, S>
where
    T: Copy + fmt::Debug,
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
