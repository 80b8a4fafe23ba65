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

//! Half-open time windows.
//!
//! Slot times are expressed as minutes on a common, non-negative epoch
//! chosen by the caller. A `TimeWindow` is the half-open interval
//! `[start, end)`; two windows conflict iff they share at least one
//! minute, which is the overlap test the track no-parallel-session
//! constraint is built on.

use num_traits::PrimInt;

/// A half-open time window `[start, end)` in minutes.
///
/// # Invariants
///
/// `start` must always be less than or equal to `end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeWindow<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> TimeWindow<T>
where
    T: PrimInt,
{
    /// Creates a new `TimeWindow`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "invalid time window: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `TimeWindow` if the inputs are valid.
    ///
    /// Returns `None` if `start > end`.
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Returns the inclusive start of the window.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive end of the window.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the duration of the window in minutes.
    #[inline]
    pub fn duration(&self) -> T {
        self.end - self.start
    }

    /// Returns true if the window contains no minutes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this window shares at least one minute with `other`.
    ///
    /// Overlap test for half-open intervals:
    /// `self.start < other.end && other.start < self.end`.
    /// Windows that merely touch (`[0, 10)` and `[10, 20)`) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl<T> std::fmt::Debug for TimeWindow<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeWindow[{:?}, {:?})", self.start, self.end)
    }
}

impl<T> std::fmt::Display for TimeWindow<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let w = TimeWindow::new(10i64, 40);
        assert_eq!(w.start(), 10);
        assert_eq!(w.end(), 40);
        assert_eq!(w.duration(), 30);
        assert!(!w.is_empty());
    }

    #[test]
    fn test_try_new_rejects_inverted_window() {
        assert!(TimeWindow::try_new(10i64, 5).is_none());
        assert!(TimeWindow::try_new(5i64, 5).is_some());
    }

    #[test]
    #[should_panic(expected = "invalid time window")]
    fn test_new_panics_on_inverted_window() {
        let _ = TimeWindow::new(10i64, 5);
    }

    #[test]
    fn test_empty_window() {
        let w = TimeWindow::new(30i64, 30);
        assert!(w.is_empty());
        assert_eq!(w.duration(), 0);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = TimeWindow::new(0i64, 60);
        let b = TimeWindow::new(30i64, 90);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        let a = TimeWindow::new(0i64, 60);
        let b = TimeWindow::new(60i64, 120);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contained_window_overlaps() {
        let outer = TimeWindow::new(0i64, 120);
        let inner = TimeWindow::new(30i64, 60);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_disjoint_windows_do_not_overlap() {
        let a = TimeWindow::new(0i64, 30);
        let b = TimeWindow::new(90i64, 120);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_display_format() {
        let w = TimeWindow::new(10i64, 40);
        assert_eq!(format!("{}", w), "[10, 40)");
    }
}
