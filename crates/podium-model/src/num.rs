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

//! Numeric support for objective arithmetic.
//!
//! `num_traits::PrimInt` does not bundle the inherent saturating
//! operations of the primitive integers, so `SaturatingArith` re-exposes
//! them behind a by-value trait the generic bound/statistics code can use.
//! `CostNumeric` is the scalar bundle every objective/time type of the
//! solver must satisfy.

use num_traits::{PrimInt, Signed};

/// By-value saturating arithmetic, clamping at the numeric bounds of the
/// type instead of overflowing.
pub trait SaturatingArith: Sized {
    /// Saturating addition.
    fn sat_add(self, v: Self) -> Self;
    /// Saturating subtraction.
    fn sat_sub(self, v: Self) -> Self;
    /// Saturating multiplication.
    fn sat_mul(self, v: Self) -> Self;
}

macro_rules! impl_saturating_arith {
    ($($t:ty),* $(,)?) => {
        $(
            impl SaturatingArith for $t {
                #[inline(always)]
                fn sat_add(self, v: Self) -> Self {
                    <$t>::saturating_add(self, v)
                }

                #[inline(always)]
                fn sat_sub(self, v: Self) -> Self {
                    <$t>::saturating_sub(self, v)
                }

                #[inline(always)]
                fn sat_mul(self, v: Self) -> Self {
                    <$t>::saturating_mul(self, v)
                }
            }
        )*
    };
}

impl_saturating_arith!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// The scalar bundle accepted for objective values and times.
///
/// Any signed primitive integer satisfies this; `i64` is the usual choice.
pub trait CostNumeric:
    PrimInt + Signed + SaturatingArith + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

impl<T> CostNumeric for T where
    T: PrimInt
        + Signed
        + SaturatingArith
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sat_add_clamps_at_max() {
        assert_eq!(250u8.sat_add(10), 255);
        assert_eq!(i64::MAX.sat_add(1), i64::MAX);
        assert_eq!(3i32.sat_add(4), 7);
    }

    #[test]
    fn test_sat_sub_clamps_at_min() {
        assert_eq!(5u8.sat_sub(10), 0);
        assert_eq!(i64::MIN.sat_sub(1), i64::MIN);
        assert_eq!(10i32.sat_sub(4), 6);
    }

    #[test]
    fn test_sat_mul_clamps_at_max() {
        assert_eq!(64u8.sat_mul(8), 255);
        assert_eq!(i64::MAX.sat_mul(2), i64::MAX);
        assert_eq!(6i32.sat_mul(7), 42);
    }

    fn takes_cost_numeric<T: CostNumeric>(v: T) -> T {
        v.sat_add(T::one())
    }

    #[test]
    fn test_cost_numeric_bundle_covers_signed_primitives() {
        assert_eq!(takes_cost_numeric(1i32), 2);
        assert_eq!(takes_cost_numeric(1i64), 2);
    }
}
