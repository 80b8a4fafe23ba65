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

//! Admissible lower bounds on the objective of a partial path.
//!
//! A bound must never exceed the true cost of the best completion of the
//! state it is evaluated on; the optimality proof of the search rests on
//! that. Saturating arithmetic is safe here: saturation can only make the
//! bound smaller relative to the true value on the side that matters.

use crate::state::SearchState;
use num_traits::{PrimInt, Signed};
use podium_model::{model::Model, num::SaturatingArith};

/// An admissible lower bound on the cost of the best leaf below a state.
pub trait LowerBound<T>
where
    T: PrimInt + Signed,
{
    /// Returns the name of the bound for diagnostics.
    fn name(&self) -> &str;

    /// Computes the bound for the given state. Must never exceed the true
    /// cost of the best completion of `state`.
    fn bound(&self, model: &Model<T>, state: &SearchState<T>) -> T;
}

/// The capacity bound: works that cannot fit into the residual space of
/// the undecided slots pay the unassigned-work penalty no matter what.
///
/// `current_cost + max(0, remaining - space_from(cursor)) * unassigned`.
/// Day and room penalties of the undecided slots are optimistically taken
/// as zero, which keeps the bound admissible.
#[derive(Clone, Copy, Debug, Default)]
pub struct CapacityBound;

impl CapacityBound {
    /// Creates a new `CapacityBound`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> LowerBound<T> for CapacityBound
where
    T: PrimInt + Signed + SaturatingArith,
{
    #[inline]
    fn name(&self) -> &str {
        "CapacityBound"
    }

    #[inline]
    fn bound(&self, model: &Model<T>, state: &SearchState<T>) -> T {
        let overflow = state
            .remaining_total()
            .saturating_sub(model.space_from(state.cursor()));
        if overflow == 0 {
            return state.current_cost();
        }

        let overflow = T::from(overflow).unwrap_or_else(T::max_value);
        state
            .current_cost()
            .sat_add(overflow.sat_mul(model.penalties().unassigned_work()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_model::{
        model::{ModelBuilder, SlotId, SlotRequest, Work, WorkId},
        penalty::Penalties,
    };

    fn works(n: u64, track: &str) -> Vec<Work> {
        (1..=n).map(|i| Work::new(WorkId(i), track)).collect()
    }

    #[test]
    fn test_bound_is_current_cost_when_everything_fits() {
        let mut builder = ModelBuilder::new(30, Penalties::new(10_000, 100, 10));
        builder.works(works(2, "AI"));
        builder.slot(SlotRequest::new(SlotId(1), "Aula", 0, 60)); // space 2
        let model = builder.build().unwrap();
        let state = SearchState::root(&model);

        let bound = CapacityBound::new();
        assert_eq!(bound.bound(&model, &state), 0);
    }

    #[test]
    fn test_bound_charges_overflowing_works() {
        let mut builder = ModelBuilder::new(30, Penalties::new(10_000, 100, 10));
        builder.works(works(5, "AI"));
        builder.slot(SlotRequest::new(SlotId(1), "Aula", 0, 90)); // space 3
        let model = builder.build().unwrap();
        let state = SearchState::root(&model);

        // Two works can never fit anywhere.
        let bound = CapacityBound::new();
        assert_eq!(bound.bound(&model, &state), 20_000);
    }

    #[test]
    fn test_bound_never_exceeds_true_optimum_on_small_instances() {
        // Exhaustive cross-check on a tiny instance: the root bound must
        // not exceed the cost of any complete schedule, in particular the
        // skip-everything leaf (all works unassigned).
        let mut builder = ModelBuilder::new(30, Penalties::new(10_000, 100, 10));
        builder.works(works(3, "AI"));
        builder.slots([
            SlotRequest::new(SlotId(1), "Aula", 0, 60),
            SlotRequest::new(SlotId(2), "Aula", 60, 120),
        ]);
        let model = builder.build().unwrap();
        let state = SearchState::root(&model);

        let bound = CapacityBound::new();
        let root_bound = bound.bound(&model, &state);
        let skip_all_cost = 3 * 10_000;
        assert!(root_bound <= skip_all_cost);
        // Space is 4 >= 3 pending, so the capacity term is zero.
        assert_eq!(root_bound, 0);
    }
}
