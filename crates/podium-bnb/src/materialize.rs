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

//! Turning a search leaf into a concrete schedule.
//!
//! The search only decides which track each slot serves; the works
//! themselves are interchangeable within a track. Materialization walks
//! the slots in decision order and deals out each track's pending works
//! in input order, so earlier-submitted works land in earlier slots.

use num_traits::{PrimInt, Signed};
use podium_model::{
    index::{SlotIndex, TrackIndex},
    model::Model,
    solution::{Assignment, Schedule},
};

/// Builds the concrete `Schedule` for a leaf's per-slot track decisions.
///
/// `slot_tracks` must have one entry per model slot in decision order;
/// `total_cost` is the leaf's objective value and is stored unchanged.
pub fn materialize<T>(
    model: &Model<T>,
    slot_tracks: &[Option<TrackIndex>],
    total_cost: T,
) -> Schedule<T>
where
    T: PrimInt + Signed,
{
    debug_assert!(
        slot_tracks.len() == model.num_slots(),
        "called `materialize` with {} decisions but the model has {} slots",
        slot_tracks.len(),
        model.num_slots()
    );

    let mut cursors = vec![0usize; model.num_tracks()];
    let mut assignments = Vec::new();

    for (i, decision) in slot_tracks.iter().enumerate() {
        let Some(track) = decision else {
            continue;
        };
        let slot = SlotIndex::new(i);
        let pending = model.pending_works(*track);
        let cursor = &mut cursors[track.get()];

        let space = model.slot_available_space(slot) as usize;
        let take = space.min(pending.len() - *cursor);
        if take == 0 {
            continue;
        }

        let works = pending[*cursor..*cursor + take].to_vec();
        *cursor += take;

        assignments.push(Assignment::new(
            model.slot_id(slot),
            model.room_name(model.slot_room(slot)),
            model.track_name(*track),
            works,
        ));
    }

    let mut unassigned = Vec::new();
    for t in 0..model.num_tracks() {
        let track = TrackIndex::new(t);
        unassigned.extend_from_slice(&model.pending_works(track)[cursors[t]..]);
    }

    Schedule::new(assignments, unassigned, total_cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_model::{
        model::{ModelBuilder, SlotId, SlotRequest, Work, WorkId},
        penalty::Penalties,
    };

    #[test]
    fn test_works_dealt_in_input_order() {
        let mut builder = ModelBuilder::new(30, Penalties::standard());
        builder.works([
            Work::new(WorkId(10), "AI"),
            Work::new(WorkId(11), "AI"),
            Work::new(WorkId(12), "AI"),
        ]);
        builder.slots([
            SlotRequest::new(SlotId(1), "Aula", 0, 60), // space 2
            SlotRequest::new(SlotId(2), "Aula", 60, 90), // space 1
        ]);
        let model = builder.build().unwrap();

        let ai = Some(TrackIndex::new(0));
        let schedule = materialize(&model, &[ai, ai], 200);

        assert_eq!(schedule.assignments().len(), 2);
        assert_eq!(schedule.assignments()[0].works(), &[WorkId(10), WorkId(11)]);
        assert_eq!(schedule.assignments()[1].works(), &[WorkId(12)]);
        assert!(schedule.is_complete());
        assert_eq!(schedule.total_cost(), 200);
    }

    #[test]
    fn test_skipped_slots_and_leftovers() {
        let mut builder = ModelBuilder::new(30, Penalties::standard());
        builder.works([Work::new(WorkId(1), "AI"), Work::new(WorkId(2), "AI")]);
        builder.slots([
            SlotRequest::new(SlotId(1), "Aula", 0, 30), // space 1
            SlotRequest::new(SlotId(2), "Aula", 30, 60), // space 1, skipped
        ]);
        let model = builder.build().unwrap();

        let schedule = materialize(&model, &[Some(TrackIndex::new(0)), None], 10_100);

        assert_eq!(schedule.num_assigned(), 1);
        assert_eq!(schedule.unassigned(), &[WorkId(2)]);
    }

    #[test]
    fn test_slot_with_no_take_is_omitted() {
        let mut builder = ModelBuilder::new(30, Penalties::standard());
        builder.work(Work::new(WorkId(1), "AI"));
        builder.slots([
            SlotRequest::new(SlotId(1), "Aula", 0, 30),
            SlotRequest::new(SlotId(2), "Aula", 30, 60),
        ]);
        let model = builder.build().unwrap();

        // Both slots decided for AI, but only the first receives a work.
        let ai = Some(TrackIndex::new(0));
        let schedule = materialize(&model, &[ai, ai], 100);

        assert_eq!(schedule.assignments().len(), 1);
        assert_eq!(schedule.assignments()[0].slot(), SlotId(1));
    }
}
