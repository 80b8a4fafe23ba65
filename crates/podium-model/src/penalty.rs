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

//! The objective weights of the scheduling problem.
//!
//! The solver minimizes a weighted sum of three penalties: works left
//! unassigned, distinct calendar days the programme touches, and rooms
//! that host more than one track. All three weights must be non-negative;
//! the bound estimator relies on that for admissibility.

use num_traits::{PrimInt, Signed};

/// Immutable weights for the scheduling objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Penalties<T> {
    unassigned_work: T,
    per_distinct_day: T,
    per_room_track_mix: T,
}

impl<T> Penalties<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new penalty configuration.
    ///
    /// Weights are not validated here; `ModelBuilder::build` rejects
    /// negative weights before any search starts.
    #[inline]
    pub fn new(unassigned_work: T, per_distinct_day: T, per_room_track_mix: T) -> Self {
        Self {
            unassigned_work,
            per_distinct_day,
            per_room_track_mix,
        }
    }

    /// The standard weighting: 10 000 per unassigned work, 100 per
    /// distinct day, 10 per mixed room.
    ///
    /// # Panics
    ///
    /// Panics if `T` cannot represent 10 000 (e.g. `i8`).
    #[inline]
    pub fn standard() -> Self {
        Self {
            unassigned_work: T::from(10_000)
                .expect("cost type too narrow for the standard penalty weights"),
            per_distinct_day: T::from(100)
                .expect("cost type too narrow for the standard penalty weights"),
            per_room_track_mix: T::from(10)
                .expect("cost type too narrow for the standard penalty weights"),
        }
    }

    /// Returns the cost charged per work left unassigned.
    #[inline]
    pub fn unassigned_work(&self) -> T {
        self.unassigned_work
    }

    /// Returns the cost charged the first time a calendar day is used.
    #[inline]
    pub fn per_distinct_day(&self) -> T {
        self.per_distinct_day
    }

    /// Returns the cost charged when a track enters a room that already
    /// hosts at least one other track.
    #[inline]
    pub fn per_room_track_mix(&self) -> T {
        self.per_room_track_mix
    }

    /// Returns true if every weight is non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.unassigned_work >= T::zero()
            && self.per_distinct_day >= T::zero()
            && self.per_room_track_mix >= T::zero()
    }
}

impl<T> std::fmt::Display for Penalties<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Penalties(unassigned_work: {}, per_distinct_day: {}, per_room_track_mix: {})",
            self.unassigned_work, self.per_distinct_day, self.per_room_track_mix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let p = Penalties::new(10_000i64, 100, 10);
        assert_eq!(p.unassigned_work(), 10_000);
        assert_eq!(p.per_distinct_day(), 100);
        assert_eq!(p.per_room_track_mix(), 10);
    }

    #[test]
    fn test_standard_matches_defaults() {
        let p = Penalties::<i64>::standard();
        assert_eq!(p, Penalties::new(10_000, 100, 10));
    }

    #[test]
    fn test_is_valid() {
        assert!(Penalties::new(0i64, 0, 0).is_valid());
        assert!(Penalties::new(1i64, 2, 3).is_valid());
        assert!(!Penalties::new(-1i64, 2, 3).is_valid());
        assert!(!Penalties::new(1i64, -2, 3).is_valid());
        assert!(!Penalties::new(1i64, 2, -3).is_valid());
    }

    #[test]
    fn test_display() {
        let p = Penalties::new(1i64, 2, 3);
        let text = format!("{}", p);
        assert!(text.contains("unassigned_work: 1"));
        assert!(text.contains("per_room_track_mix: 3"));
    }
}
