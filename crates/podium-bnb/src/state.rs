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

//! Mutable depth-first search state.
//!
//! One `SearchState` is threaded through the whole search. Every branch
//! mutates it forward and undoes the mutation with the exact inverse on
//! backtrack, so the accumulated cost uses plain `+`/`-` (never saturating
//! arithmetic, which would break inverse exactness). Day and room/track
//! usage are reference counted, which makes apply and undo symmetric even
//! though the penalties fire only on the first use.
//!
//! Slots already locked to a track by pre-existing assignments are folded
//! in once at the root: their windows, day usage, and room usage are
//! structural and never undone during the search.

use num_traits::{PrimInt, Signed};
use podium_model::{
    index::{SlotIndex, TrackIndex},
    model::{Model, SlotKind},
    time::TimeWindow,
};
use smallvec::SmallVec;

/// The undo token of an open-slot assignment.
///
/// Produced by `SearchState::assign_open` and consumed unchanged by
/// `SearchState::revert_open`; it carries exactly what the inverse needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenAssignment<T> {
    take: u32,
    cost_delta: T,
}

impl<T> OpenAssignment<T>
where
    T: Copy,
{
    /// Returns the number of pending works the assignment consumed.
    #[inline]
    pub fn take(&self) -> u32 {
        self.take
    }

    /// Returns the cost the assignment added to the running objective.
    #[inline]
    pub fn cost_delta(&self) -> T {
        self.cost_delta
    }
}

/// The complete mutable state of a depth-first search.
#[derive(Clone, Debug)]
pub struct SearchState<T>
where
    T: PrimInt + Signed,
{
    /// The slot (in decision order) the next branching happens on.
    cursor: usize,
    /// Cost accumulated by all decisions on the current path.
    current_cost: T,
    /// Pending works not yet consumed by any slot on the current path.
    remaining_total: u32,
    /// The track each slot serves on the current path, `None` if skipped
    /// or not yet decided.
    slot_tracks: Vec<Option<TrackIndex>>,
    /// Per track: pending works not yet consumed on the current path.
    remaining: Vec<u32>,
    /// Per track: the time windows of all slots currently serving it.
    busy: Vec<SmallVec<[TimeWindow<T>; 4]>>,
    /// Per day: number of used slots starting on that day.
    day_use: Vec<u32>,
    /// Per `room * num_tracks + track`: number of used slots of that track
    /// in that room.
    room_track_use: Vec<u32>,
    /// Per room: number of distinct tracks currently present.
    room_distinct: Vec<u32>,
    num_tracks: usize,
}

impl<T> SearchState<T>
where
    T: PrimInt + Signed,
{
    /// Creates the root state for the given model.
    ///
    /// All locked slots are occupied here once; their cost contribution is
    /// unconditional and stays in `current_cost` for the whole search.
    pub fn root(model: &Model<T>) -> Self {
        let num_tracks = model.num_tracks();
        let mut state = Self {
            cursor: 0,
            current_cost: T::zero(),
            remaining_total: model.total_pending(),
            slot_tracks: vec![None; model.num_slots()],
            remaining: (0..num_tracks)
                .map(|t| model.pending_count(TrackIndex::new(t)))
                .collect(),
            busy: vec![SmallVec::new(); num_tracks],
            day_use: vec![0; model.num_days()],
            room_track_use: vec![0; model.num_rooms() * num_tracks],
            room_distinct: vec![0; model.num_rooms()],
            num_tracks,
        };

        for i in 0..model.num_slots() {
            let slot = SlotIndex::new(i);
            if let SlotKind::Locked(track) = model.slot_kind(slot) {
                let delta = state.occupy(model, slot, track);
                state.current_cost = state.current_cost + delta;
                state.slot_tracks[i] = Some(track);
            }
        }

        state
    }

    /// Returns the slot index the search branches on next.
    #[inline]
    pub fn cursor(&self) -> SlotIndex {
        SlotIndex::new(self.cursor)
    }

    /// Moves the cursor to the next slot.
    #[inline]
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Moves the cursor back to the previous slot.
    #[inline]
    pub fn retreat(&mut self) {
        debug_assert!(
            self.cursor > 0,
            "called `SearchState::retreat` at the root of the search tree"
        );
        self.cursor -= 1;
    }

    /// Returns the cost accumulated on the current path.
    #[inline]
    pub fn current_cost(&self) -> T {
        self.current_cost
    }

    /// Returns the number of pending works not yet consumed on this path.
    #[inline]
    pub fn remaining_total(&self) -> u32 {
        self.remaining_total
    }

    /// Returns the number of pending works of the given track not yet
    /// consumed on this path.
    #[inline]
    pub fn remaining(&self, track: TrackIndex) -> u32 {
        self.remaining[track.get()]
    }

    /// Returns the track decided for the given slot on this path, if any.
    #[inline]
    pub fn slot_track(&self, slot: SlotIndex) -> Option<TrackIndex> {
        self.slot_tracks[slot.get()]
    }

    /// Returns the per-slot track decisions of the current path.
    #[inline]
    pub fn slot_tracks(&self) -> &[Option<TrackIndex>] {
        &self.slot_tracks
    }

    /// Returns true if a slot of the given track already occupies a window
    /// overlapping `window` on this path.
    #[inline]
    pub fn has_conflict(&self, track: TrackIndex, window: &TimeWindow<T>) -> bool {
        self.busy[track.get()].iter().any(|w| w.overlaps(window))
    }

    /// Consumes up to `space` pending works of the given track. Returns
    /// the number actually consumed.
    ///
    /// Used for locked slots, whose cost is already folded into the root.
    #[inline]
    pub fn consume(&mut self, track: TrackIndex, space: u32) -> u32 {
        let take = space.min(self.remaining[track.get()]);
        self.remaining[track.get()] -= take;
        self.remaining_total -= take;
        take
    }

    /// Exact inverse of `consume`.
    #[inline]
    pub fn restore(&mut self, track: TrackIndex, take: u32) {
        self.remaining[track.get()] += take;
        self.remaining_total += take;
    }

    /// Assigns the given track to the open slot at `slot`: occupies the
    /// slot's window, day, and room, charges the resulting penalties, and
    /// consumes as many pending works as the slot has space for.
    pub fn assign_open(
        &mut self,
        model: &Model<T>,
        slot: SlotIndex,
        track: TrackIndex,
    ) -> OpenAssignment<T> {
        debug_assert!(
            self.slot_tracks[slot.get()].is_none(),
            "called `SearchState::assign_open` on a slot that already serves a track"
        );

        let cost_delta = self.occupy(model, slot, track);
        self.current_cost = self.current_cost + cost_delta;
        self.slot_tracks[slot.get()] = Some(track);
        let take = self.consume(track, model.slot_available_space(slot));

        OpenAssignment { take, cost_delta }
    }

    /// Exact inverse of `assign_open`.
    pub fn revert_open(
        &mut self,
        model: &Model<T>,
        slot: SlotIndex,
        track: TrackIndex,
        assignment: OpenAssignment<T>,
    ) {
        self.restore(track, assignment.take);
        self.slot_tracks[slot.get()] = None;
        self.current_cost = self.current_cost - assignment.cost_delta;
        self.vacate(model, slot, track);
    }

    /// Occupies a slot for a track and returns the penalty cost this
    /// causes: the day penalty if the slot's day was unused, and the
    /// room-mix penalty if the track is new to a room already hosting
    /// another track. Does not touch `current_cost`.
    fn occupy(&mut self, model: &Model<T>, slot: SlotIndex, track: TrackIndex) -> T {
        let mut delta = T::zero();
        let penalties = model.penalties();

        let day = model.slot_day(slot).get();
        if self.day_use[day] == 0 {
            delta = delta + penalties.per_distinct_day();
        }
        self.day_use[day] += 1;

        let room = model.slot_room(slot).get();
        let rt = room * self.num_tracks + track.get();
        if self.room_track_use[rt] == 0 {
            if self.room_distinct[room] > 0 {
                delta = delta + penalties.per_room_track_mix();
            }
            self.room_distinct[room] += 1;
        }
        self.room_track_use[rt] += 1;

        self.busy[track.get()].push(model.slot_window(slot));

        delta
    }

    /// Exact inverse of `occupy`, except for the cost delta, which the
    /// caller subtracts from the value `occupy` returned.
    fn vacate(&mut self, model: &Model<T>, slot: SlotIndex, track: TrackIndex) {
        let popped = self.busy[track.get()].pop();
        debug_assert!(
            popped == Some(model.slot_window(slot)),
            "called `SearchState::vacate` out of stack order"
        );

        let room = model.slot_room(slot).get();
        let rt = room * self.num_tracks + track.get();
        self.room_track_use[rt] -= 1;
        if self.room_track_use[rt] == 0 {
            self.room_distinct[room] -= 1;
        }

        self.day_use[model.slot_day(slot).get()] -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_model::{
        model::{ModelBuilder, SlotId, SlotRequest, Work, WorkId},
        penalty::Penalties,
    };

    fn model_two_tracks() -> Model<i64> {
        let mut builder = ModelBuilder::new(30, Penalties::new(10_000, 100, 10));
        builder.works([
            Work::new(WorkId(1), "AI"),
            Work::new(WorkId(2), "AI"),
            Work::new(WorkId(3), "Theory"),
        ]);
        builder.slots([
            SlotRequest::new(SlotId(1), "Aula", 0, 60),
            SlotRequest::new(SlotId(2), "Aula", 60, 120),
        ]);
        builder.build().unwrap()
    }

    #[test]
    fn test_root_state_counts() {
        let model = model_two_tracks();
        let state = SearchState::root(&model);
        assert_eq!(state.cursor(), SlotIndex::new(0));
        assert_eq!(state.current_cost(), 0);
        assert_eq!(state.remaining_total(), 3);
        assert_eq!(state.remaining(TrackIndex::new(0)), 2);
        assert_eq!(state.remaining(TrackIndex::new(1)), 1);
    }

    #[test]
    fn test_assign_open_charges_day_penalty_once() {
        let model = model_two_tracks();
        let mut state = SearchState::root(&model);

        let ai = TrackIndex::new(0);
        let first = state.assign_open(&model, SlotIndex::new(0), ai);
        assert_eq!(first.take(), 2);
        assert_eq!(first.cost_delta(), 100); // new day
        assert_eq!(state.remaining_total(), 1);

        // Same day, same room, same track: free.
        let theory = TrackIndex::new(1);
        let second = state.assign_open(&model, SlotIndex::new(1), theory);
        assert_eq!(second.take(), 1);
        assert_eq!(second.cost_delta(), 10); // second track in the room
        assert_eq!(state.remaining_total(), 0);
        assert_eq!(state.current_cost(), 110);
    }

    #[test]
    fn test_revert_open_is_exact_inverse() {
        let model = model_two_tracks();
        let mut state = SearchState::root(&model);
        let reference = state.clone();

        let ai = TrackIndex::new(0);
        let slot = SlotIndex::new(0);
        let assignment = state.assign_open(&model, slot, ai);
        state.revert_open(&model, slot, ai, assignment);

        assert_eq!(state.current_cost(), reference.current_cost());
        assert_eq!(state.remaining_total(), reference.remaining_total());
        assert_eq!(state.slot_track(slot), None);
        assert!(!state.has_conflict(ai, &model.slot_window(slot)));
    }

    #[test]
    fn test_conflict_detection_per_track() {
        let mut builder = ModelBuilder::new(30, Penalties::standard());
        builder.works([Work::new(WorkId(1), "AI"), Work::new(WorkId(2), "AI")]);
        builder.slots([
            SlotRequest::new(SlotId(1), "Aula", 0, 60),
            SlotRequest::new(SlotId(2), "Sala", 30, 90),
        ]);
        let model = builder.build().unwrap();
        let mut state = SearchState::root(&model);

        let ai = TrackIndex::new(0);
        let _ = state.assign_open(&model, SlotIndex::new(0), ai);
        // Parallel window in another room conflicts for the same track.
        assert!(state.has_conflict(ai, &model.slot_window(SlotIndex::new(1))));
        // A later window does not.
        assert!(!state.has_conflict(ai, &TimeWindow::new(60, 120)));
    }

    #[test]
    fn test_locked_slots_fold_into_root() {
        let mut builder = ModelBuilder::new(30, Penalties::new(10_000, 100, 10));
        builder.works([
            Work::new(WorkId(1), "AI"),
            Work::new(WorkId(2), "AI"),
            Work::new(WorkId(3), "Theory"),
        ]);
        builder.slots([
            SlotRequest::new(SlotId(1), "Aula", 0, 60).with_linked([WorkId(1)]),
            SlotRequest::new(SlotId(2), "Aula", 60, 120).with_linked([WorkId(3)]),
        ]);
        let model = builder.build().unwrap();
        let state = SearchState::root(&model);

        // One day used plus one room hosting two tracks.
        assert_eq!(state.current_cost(), 110);
        // Linked works were never pending: one AI work remains.
        assert_eq!(state.remaining_total(), 1);
        assert_eq!(state.slot_track(SlotIndex::new(0)), Some(TrackIndex::new(0)));
        assert_eq!(state.slot_track(SlotIndex::new(1)), Some(TrackIndex::new(1)));
    }

    #[test]
    fn test_consume_and_restore() {
        let model = model_two_tracks();
        let mut state = SearchState::root(&model);
        let ai = TrackIndex::new(0);

        let take = state.consume(ai, 5);
        assert_eq!(take, 2); // only two AI works pending
        assert_eq!(state.remaining(ai), 0);
        assert_eq!(state.remaining_total(), 1);

        state.restore(ai, take);
        assert_eq!(state.remaining(ai), 2);
        assert_eq!(state.remaining_total(), 3);
    }
}
