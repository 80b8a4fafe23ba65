// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Strongly typed, zero-cost indices for the four dense index spaces of a
//! scheduling instance: slots, tracks, rooms, and calendar days.
//!
//! The model interns every track name, room name, and calendar day into a
//! dense `usize` range. Raw `usize` values in four concurrent index spaces
//! invite accidental swaps, so each space gets a phantom-tagged wrapper
//! that compiles down to a transparent `usize`.

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index associated with a specific tag type `T`.
///
/// Wraps a `usize` and uses a phantom type parameter to prevent mixing
/// indices of different index spaces at compile time.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline(always)]
    fn from(index: TypedIndex<T>) -> Self {
        index.get()
    }
}

/// A tag type for slot indices (positions in the fixed decision order).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SlotIndexTag;

impl TypedIndexTag for SlotIndexTag {
    const NAME: &'static str = "SlotIndex";
}

/// A typed index for slots in the model's fixed decision order.
pub type SlotIndex = TypedIndex<SlotIndexTag>;

/// A tag type for track indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TrackIndexTag;

impl TypedIndexTag for TrackIndexTag {
    const NAME: &'static str = "TrackIndex";
}

/// A typed index for interned tracks (lexicographic name order).
pub type TrackIndex = TypedIndex<TrackIndexTag>;

/// A tag type for room indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RoomIndexTag;

impl TypedIndexTag for RoomIndexTag {
    const NAME: &'static str = "RoomIndex";
}

/// A typed index for interned rooms.
pub type RoomIndex = TypedIndex<RoomIndexTag>;

/// A tag type for day indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DayIndexTag;

impl TypedIndexTag for DayIndexTag {
    const NAME: &'static str = "DayIndex";
}

/// A typed index for interned calendar days.
pub type DayIndex = TypedIndex<DayIndexTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get_roundtrip() {
        let s = SlotIndex::new(7);
        assert_eq!(s.get(), 7);

        let t = TrackIndex::new(0);
        assert_eq!(t.get(), 0);
    }

    #[test]
    fn test_display_uses_tag_name() {
        assert_eq!(format!("{}", SlotIndex::new(3)), "SlotIndex(3)");
        assert_eq!(format!("{}", TrackIndex::new(1)), "TrackIndex(1)");
        assert_eq!(format!("{}", RoomIndex::new(0)), "RoomIndex(0)");
        assert_eq!(format!("{}", DayIndex::new(2)), "DayIndex(2)");
    }

    #[test]
    fn test_usize_conversions() {
        let s: SlotIndex = 5usize.into();
        assert_eq!(s.get(), 5);
        let raw: usize = s.into();
        assert_eq!(raw, 5);
    }

    #[test]
    fn test_ordering_follows_raw_index() {
        assert!(TrackIndex::new(1) < TrackIndex::new(2));
        assert_eq!(SlotIndex::new(4), SlotIndex::new(4));
    }
}
