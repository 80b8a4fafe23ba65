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

//! Instance input, validation, and the preprocessed scheduling model.
//!
//! `ModelBuilder` consumes raw works and slot requests and produces an
//! immutable `Model`:
//! - slots are sorted by `(start, room name)` into the fixed decision
//!   order the search tree is defined over;
//! - each slot's total capacity (`floor(duration / per_work_minutes)`) and
//!   residual space (total minus already-linked works) are computed;
//! - a slot that already carries linked works is locked to the track of
//!   its first linked work; mixed-track, unknown, duplicated, or
//!   over-capacity links are fatal input errors;
//! - track names, room names, and calendar days are interned into dense
//!   index spaces;
//! - suffix sums of residual space are precomputed so the bound estimator
//!   runs in O(1) per node.
//!
//! All validation happens in `build`; the search itself never fails.

use crate::{
    index::{DayIndex, RoomIndex, SlotIndex, TrackIndex},
    penalty::Penalties,
    time::TimeWindow,
};
use num_traits::{PrimInt, Signed};
use rustc_hash::{FxHashMap, FxHashSet};

/// Minutes per calendar day; slot times are minutes on a common epoch.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Opaque caller-supplied identity of a work.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WorkId(pub u64);

impl std::fmt::Display for WorkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WorkId({})", self.0)
    }
}

/// Opaque caller-supplied identity of a slot.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SlotId(pub u64);

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlotId({})", self.0)
    }
}

/// A presentation to be scheduled into exactly one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Work {
    id: WorkId,
    track: String,
}

impl Work {
    /// Creates a new work belonging to the given track.
    #[inline]
    pub fn new<S>(id: WorkId, track: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            id,
            track: track.into(),
        }
    }

    /// Returns the identity of this work.
    #[inline]
    pub fn id(&self) -> WorkId {
        self.id
    }

    /// Returns the track label of this work.
    #[inline]
    pub fn track(&self) -> &str {
        &self.track
    }
}

/// A raw bookable room/time unit as supplied by the caller.
///
/// `linked_works` lists works already persisted into this slot by a
/// previous run; a non-empty list locks the slot to their track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotRequest<T>
where
    T: PrimInt,
{
    id: SlotId,
    room: String,
    start: T,
    end: T,
    linked_works: Vec<WorkId>,
}

impl<T> SlotRequest<T>
where
    T: PrimInt,
{
    /// Creates a new slot request with no pre-assigned works.
    #[inline]
    pub fn new<S>(id: SlotId, room: S, start: T, end: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            id,
            room: room.into(),
            start,
            end,
            linked_works: Vec::new(),
        }
    }

    /// Attaches already-persisted work links to this slot.
    #[inline]
    pub fn with_linked<I>(mut self, works: I) -> Self
    where
        I: IntoIterator<Item = WorkId>,
    {
        self.linked_works = works.into_iter().collect();
        self
    }

    /// Returns the identity of this slot.
    #[inline]
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// Returns the room name of this slot.
    #[inline]
    pub fn room(&self) -> &str {
        &self.room
    }
}

/// Whether a slot's track is already fixed by pre-existing assignments.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SlotKind {
    /// The search is free to assign any track (or none) to this slot.
    Open,
    /// The slot already carries works of this track; the track never changes.
    Locked(TrackIndex),
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotKind::Open => write!(f, "Open"),
            SlotKind::Locked(track) => write!(f, "Locked({})", track),
        }
    }
}

/// A fatal input-validation error raised by `ModelBuilder::build`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// `per_work_minutes` was zero or negative.
    NonPositiveWorkDuration,
    /// At least one penalty weight was negative.
    NegativePenalty,
    /// Two works shared the same id.
    DuplicateWork(WorkId),
    /// Two slots shared the same id.
    DuplicateSlot(SlotId),
    /// A slot started before the epoch (negative start time).
    NegativeStart(SlotId),
    /// A slot ended before it started.
    InvertedWindow(SlotId),
    /// A slot referenced a linked work id that is not in the works list.
    UnknownLinkedWork { slot: SlotId, work: WorkId },
    /// A work was linked to more than one slot (or twice to the same slot).
    DuplicateLinkedWork { slot: SlotId, work: WorkId },
    /// The works linked to a slot do not all share one track.
    MixedTrackSlot(SlotId),
    /// A slot carried more linked works than its capacity allows.
    OverlinkedSlot {
        slot: SlotId,
        linked: usize,
        capacity: u32,
    },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::NonPositiveWorkDuration => {
                write!(f, "per-work duration must be a positive number of minutes")
            }
            ModelError::NegativePenalty => {
                write!(f, "penalty weights must be non-negative")
            }
            ModelError::DuplicateWork(work) => {
                write!(f, "duplicate work id: {}", work)
            }
            ModelError::DuplicateSlot(slot) => {
                write!(f, "duplicate slot id: {}", slot)
            }
            ModelError::NegativeStart(slot) => {
                write!(f, "slot {} starts before the time epoch", slot)
            }
            ModelError::InvertedWindow(slot) => {
                write!(f, "slot {} ends before it starts", slot)
            }
            ModelError::UnknownLinkedWork { slot, work } => {
                write!(f, "slot {} links unknown work {}", slot, work)
            }
            ModelError::DuplicateLinkedWork { slot, work } => {
                write!(f, "work {} is linked more than once (slot {})", work, slot)
            }
            ModelError::MixedTrackSlot(slot) => {
                write!(f, "slot {} links works of more than one track", slot)
            }
            ModelError::OverlinkedSlot {
                slot,
                linked,
                capacity,
            } => {
                write!(
                    f,
                    "slot {} links {} works but has capacity {}",
                    slot, linked, capacity
                )
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// The immutable, preprocessed scheduling instance.
///
/// All per-slot data lives in parallel arrays indexed by `SlotIndex` in
/// the fixed decision order (sorted by start time, then room name).
/// Tracks are interned in lexicographic name order, which doubles as the
/// deterministic branching order of the search.
#[derive(Clone, Debug)]
pub struct Model<T>
where
    T: PrimInt + Signed,
{
    penalties: Penalties<T>,
    per_work_minutes: T,

    // Slot-major data in decision order.
    slot_ids: Vec<SlotId>,
    slot_windows: Vec<TimeWindow<T>>,
    slot_rooms: Vec<RoomIndex>,
    slot_days: Vec<DayIndex>,
    slot_kinds: Vec<SlotKind>,
    slot_capacities: Vec<u32>,
    slot_available: Vec<u32>,
    // space_after[i] = sum of slot_available[i..]; len = num_slots + 1.
    space_after: Vec<u32>,

    // Track-major data in lexicographic name order.
    track_names: Vec<String>,
    // Works of the track still awaiting placement, in input order.
    track_pending: Vec<Vec<WorkId>>,

    room_names: Vec<String>,
    num_days: usize,
}

impl<T> Model<T>
where
    T: PrimInt + Signed,
{
    /// Returns the number of slots in the model.
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.slot_ids.len()
    }

    /// Returns the number of distinct tracks in the model.
    #[inline]
    pub fn num_tracks(&self) -> usize {
        self.track_names.len()
    }

    /// Returns the number of distinct rooms in the model.
    #[inline]
    pub fn num_rooms(&self) -> usize {
        self.room_names.len()
    }

    /// Returns the number of distinct calendar days touched by any slot.
    #[inline]
    pub fn num_days(&self) -> usize {
        self.num_days
    }

    /// Returns the penalty configuration of this instance.
    #[inline]
    pub fn penalties(&self) -> &Penalties<T> {
        &self.penalties
    }

    /// Returns the per-work duration in minutes.
    #[inline]
    pub fn per_work_minutes(&self) -> T {
        self.per_work_minutes
    }

    /// Returns the caller-supplied identity of the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds `0..num_slots`.
    #[inline]
    pub fn slot_id(&self, slot: SlotIndex) -> SlotId {
        self.slot_ids[slot.get()]
    }

    /// Returns the time window of the given slot.
    #[inline]
    pub fn slot_window(&self, slot: SlotIndex) -> TimeWindow<T> {
        self.slot_windows[slot.get()]
    }

    /// Returns the room of the given slot.
    #[inline]
    pub fn slot_room(&self, slot: SlotIndex) -> RoomIndex {
        self.slot_rooms[slot.get()]
    }

    /// Returns the calendar day of the given slot (day of its start time).
    #[inline]
    pub fn slot_day(&self, slot: SlotIndex) -> DayIndex {
        self.slot_days[slot.get()]
    }

    /// Returns whether the given slot is open or locked to a track.
    #[inline]
    pub fn slot_kind(&self, slot: SlotIndex) -> SlotKind {
        self.slot_kinds[slot.get()]
    }

    /// Returns the total work capacity of the given slot.
    #[inline]
    pub fn slot_capacity(&self, slot: SlotIndex) -> u32 {
        self.slot_capacities[slot.get()]
    }

    /// Returns the residual space of the given slot (capacity minus
    /// already-linked works).
    #[inline]
    pub fn slot_available_space(&self, slot: SlotIndex) -> u32 {
        self.slot_available[slot.get()]
    }

    /// Returns the total residual space of all slots from `slot` (in
    /// decision order) to the end. `slot` may equal `num_slots`, in which
    /// case the remaining space is zero.
    #[inline]
    pub fn space_from(&self, slot: SlotIndex) -> u32 {
        debug_assert!(
            slot.get() <= self.num_slots(),
            "called `Model::space_from` with slot index out of bounds: the len is {} but the index is {}",
            self.num_slots(),
            slot.get()
        );

        self.space_after[slot.get()]
    }

    /// Returns the name of the given track.
    #[inline]
    pub fn track_name(&self, track: TrackIndex) -> &str {
        &self.track_names[track.get()]
    }

    /// Returns the works of the given track still awaiting placement, in
    /// input order. Works already linked to a slot are not listed.
    #[inline]
    pub fn pending_works(&self, track: TrackIndex) -> &[WorkId] {
        &self.track_pending[track.get()]
    }

    /// Returns the number of pending works of the given track.
    #[inline]
    pub fn pending_count(&self, track: TrackIndex) -> u32 {
        self.track_pending[track.get()].len() as u32
    }

    /// Returns the total number of pending works across all tracks.
    #[inline]
    pub fn total_pending(&self) -> u32 {
        self.track_pending.iter().map(|p| p.len() as u32).sum()
    }

    /// Returns the name of the given room.
    #[inline]
    pub fn room_name(&self, room: RoomIndex) -> &str {
        &self.room_names[room.get()]
    }
}

impl<T> std::fmt::Display for Model<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Model(slots: {}, tracks: {}, rooms: {}, days: {}, pending works: {})",
            self.num_slots(),
            self.num_tracks(),
            self.num_rooms(),
            self.num_days(),
            self.total_pending()
        )
    }
}

/// Builder that validates raw input and preprocesses it into a `Model`.
#[derive(Clone, Debug)]
pub struct ModelBuilder<T>
where
    T: PrimInt + Signed,
{
    per_work_minutes: T,
    penalties: Penalties<T>,
    works: Vec<Work>,
    slots: Vec<SlotRequest<T>>,
}

impl<T> ModelBuilder<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new builder for an instance with the given per-work
    /// duration and penalty configuration.
    #[inline]
    pub fn new(per_work_minutes: T, penalties: Penalties<T>) -> Self {
        Self {
            per_work_minutes,
            penalties,
            works: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Adds a single work.
    #[inline]
    pub fn work(&mut self, work: Work) -> &mut Self {
        self.works.push(work);
        self
    }

    /// Adds a collection of works.
    #[inline]
    pub fn works<I>(&mut self, works: I) -> &mut Self
    where
        I: IntoIterator<Item = Work>,
    {
        self.works.extend(works);
        self
    }

    /// Adds a single slot request.
    #[inline]
    pub fn slot(&mut self, slot: SlotRequest<T>) -> &mut Self {
        self.slots.push(slot);
        self
    }

    /// Adds a collection of slot requests.
    #[inline]
    pub fn slots<I>(&mut self, slots: I) -> &mut Self
    where
        I: IntoIterator<Item = SlotRequest<T>>,
    {
        self.slots.extend(slots);
        self
    }

    /// Validates the collected input and builds the preprocessed `Model`.
    ///
    /// # Panics
    ///
    /// Panics if `T` cannot represent the number of minutes in a day
    /// (1440), i.e. for deliberately tiny scalar types.
    pub fn build(self) -> Result<Model<T>, ModelError> {
        if self.per_work_minutes <= T::zero() {
            return Err(ModelError::NonPositiveWorkDuration);
        }
        if !self.penalties.is_valid() {
            return Err(ModelError::NegativePenalty);
        }

        let minutes_per_day =
            T::from(MINUTES_PER_DAY).expect("time type too narrow for one day of minutes");

        // Intern tracks in lexicographic name order. This order is the
        // deterministic branching and tie-break order of the search.
        let mut track_names: Vec<String> =
            self.works.iter().map(|w| w.track().to_owned()).collect();
        track_names.sort();
        track_names.dedup();

        let track_of_name: FxHashMap<String, TrackIndex> = track_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), TrackIndex::new(i)))
            .collect();

        let mut work_tracks: FxHashMap<WorkId, TrackIndex> = FxHashMap::default();
        for work in &self.works {
            let track = track_of_name[work.track()];
            if work_tracks.insert(work.id(), track).is_some() {
                return Err(ModelError::DuplicateWork(work.id()));
            }
        }

        // Validate slots and resolve their pre-assigned work links.
        struct BuildSlot<T>
        where
            T: PrimInt,
        {
            id: SlotId,
            room: String,
            window: TimeWindow<T>,
            capacity: u32,
            available: u32,
            kind: SlotKind,
        }

        let mut seen_slots: FxHashSet<SlotId> = FxHashSet::default();
        let mut consumed: FxHashSet<WorkId> = FxHashSet::default();
        let mut build_slots: Vec<BuildSlot<T>> = Vec::with_capacity(self.slots.len());

        for slot in &self.slots {
            if !seen_slots.insert(slot.id) {
                return Err(ModelError::DuplicateSlot(slot.id));
            }
            if slot.start < T::zero() {
                return Err(ModelError::NegativeStart(slot.id));
            }
            let window =
                TimeWindow::try_new(slot.start, slot.end).ok_or(ModelError::InvertedWindow(slot.id))?;

            let capacity = (window.duration() / self.per_work_minutes)
                .to_u32()
                .unwrap_or(u32::MAX);

            let mut locked: Option<TrackIndex> = None;
            for &work in &slot.linked_works {
                let track = *work_tracks.get(&work).ok_or(ModelError::UnknownLinkedWork {
                    slot: slot.id,
                    work,
                })?;
                if !consumed.insert(work) {
                    return Err(ModelError::DuplicateLinkedWork {
                        slot: slot.id,
                        work,
                    });
                }
                match locked {
                    None => locked = Some(track),
                    Some(first) if first != track => {
                        return Err(ModelError::MixedTrackSlot(slot.id));
                    }
                    Some(_) => {}
                }
            }

            let linked = slot.linked_works.len();
            if linked as u32 > capacity {
                return Err(ModelError::OverlinkedSlot {
                    slot: slot.id,
                    linked,
                    capacity,
                });
            }

            build_slots.push(BuildSlot {
                id: slot.id,
                room: slot.room.clone(),
                window,
                capacity,
                available: capacity - linked as u32,
                kind: match locked {
                    Some(track) => SlotKind::Locked(track),
                    None => SlotKind::Open,
                },
            });
        }

        // Fixed decision order: start time, then room name.
        build_slots.sort_by(|a, b| {
            a.window
                .start()
                .cmp(&b.window.start())
                .then_with(|| a.room.cmp(&b.room))
        });

        // Intern rooms and days.
        let mut room_names: Vec<String> = build_slots.iter().map(|s| s.room.clone()).collect();
        room_names.sort();
        room_names.dedup();

        let mut day_values: Vec<T> = build_slots
            .iter()
            .map(|s| s.window.start() / minutes_per_day)
            .collect();
        day_values.sort();
        day_values.dedup();

        let num_slots = build_slots.len();
        let mut slot_ids = Vec::with_capacity(num_slots);
        let mut slot_windows = Vec::with_capacity(num_slots);
        let mut slot_rooms = Vec::with_capacity(num_slots);
        let mut slot_days = Vec::with_capacity(num_slots);
        let mut slot_kinds = Vec::with_capacity(num_slots);
        let mut slot_capacities = Vec::with_capacity(num_slots);
        let mut slot_available = Vec::with_capacity(num_slots);

        for slot in &build_slots {
            let room = room_names
                .binary_search(&slot.room)
                .map(RoomIndex::new)
                .expect("interned room name must be present");
            let day = day_values
                .binary_search(&(slot.window.start() / minutes_per_day))
                .map(DayIndex::new)
                .expect("interned day value must be present");

            slot_ids.push(slot.id);
            slot_windows.push(slot.window);
            slot_rooms.push(room);
            slot_days.push(day);
            slot_kinds.push(slot.kind);
            slot_capacities.push(slot.capacity);
            slot_available.push(slot.available);
        }

        // Suffix sums of residual space for the O(1) capacity bound.
        let mut space_after = vec![0u32; num_slots + 1];
        for i in (0..num_slots).rev() {
            space_after[i] = space_after[i + 1].saturating_add(slot_available[i]);
        }

        // Works still awaiting placement, grouped by track in input order.
        let mut track_pending: Vec<Vec<WorkId>> = vec![Vec::new(); track_names.len()];
        for work in &self.works {
            if !consumed.contains(&work.id()) {
                track_pending[track_of_name[work.track()].get()].push(work.id());
            }
        }

        Ok(Model {
            penalties: self.penalties,
            per_work_minutes: self.per_work_minutes,
            slot_ids,
            slot_windows,
            slot_rooms,
            slot_days,
            slot_kinds,
            slot_capacities,
            slot_available,
            space_after,
            track_names,
            track_pending,
            room_names,
            num_days: day_values.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(id: u64, track: &str) -> Work {
        Work::new(WorkId(id), track)
    }

    fn s(id: u64, room: &str, start: i64, end: i64) -> SlotRequest<i64> {
        SlotRequest::new(SlotId(id), room, start, end)
    }

    fn penalties() -> Penalties<i64> {
        Penalties::new(10_000, 100, 10)
    }

    #[test]
    fn test_empty_instance_builds() {
        let model = ModelBuilder::<i64>::new(30, penalties()).build().unwrap();
        assert_eq!(model.num_slots(), 0);
        assert_eq!(model.num_tracks(), 0);
        assert_eq!(model.total_pending(), 0);
        assert_eq!(model.space_from(SlotIndex::new(0)), 0);
    }

    #[test]
    fn test_rejects_non_positive_work_duration() {
        let err = ModelBuilder::<i64>::new(0, penalties()).build().unwrap_err();
        assert_eq!(err, ModelError::NonPositiveWorkDuration);

        let err = ModelBuilder::<i64>::new(-5, penalties()).build().unwrap_err();
        assert_eq!(err, ModelError::NonPositiveWorkDuration);
    }

    #[test]
    fn test_rejects_negative_penalty() {
        let err = ModelBuilder::<i64>::new(30, Penalties::new(-1, 0, 0))
            .build()
            .unwrap_err();
        assert_eq!(err, ModelError::NegativePenalty);
    }

    #[test]
    fn test_capacity_is_floor_of_duration_over_per_work() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.slot(s(1, "Aula", 0, 100)); // 100 / 30 = 3
        builder.slot(s(2, "Aula", 200, 220)); // 20 / 30 = 0
        let model = builder.build().unwrap();

        assert_eq!(model.slot_capacity(SlotIndex::new(0)), 3);
        assert_eq!(model.slot_capacity(SlotIndex::new(1)), 0);
        assert_eq!(model.space_from(SlotIndex::new(0)), 3);
        assert_eq!(model.space_from(SlotIndex::new(1)), 0);
    }

    #[test]
    fn test_slots_sorted_by_start_then_room() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.slot(s(1, "B", 60, 120));
        builder.slot(s(2, "A", 60, 120));
        builder.slot(s(3, "C", 0, 60));
        let model = builder.build().unwrap();

        assert_eq!(model.slot_id(SlotIndex::new(0)), SlotId(3));
        assert_eq!(model.slot_id(SlotIndex::new(1)), SlotId(2));
        assert_eq!(model.slot_id(SlotIndex::new(2)), SlotId(1));
    }

    #[test]
    fn test_tracks_interned_in_lexicographic_order() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.works([w(1, "Systems"), w(2, "AI"), w(3, "Systems"), w(4, "Theory")]);
        let model = builder.build().unwrap();

        assert_eq!(model.num_tracks(), 3);
        assert_eq!(model.track_name(TrackIndex::new(0)), "AI");
        assert_eq!(model.track_name(TrackIndex::new(1)), "Systems");
        assert_eq!(model.track_name(TrackIndex::new(2)), "Theory");
        assert_eq!(model.pending_count(TrackIndex::new(1)), 2);
    }

    #[test]
    fn test_linked_works_lock_slot_and_leave_pending() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.works([w(1, "AI"), w(2, "AI"), w(3, "AI")]);
        builder.slot(s(1, "Aula", 0, 90).with_linked([WorkId(1), WorkId(2)]));
        let model = builder.build().unwrap();

        let slot = SlotIndex::new(0);
        assert_eq!(model.slot_kind(slot), SlotKind::Locked(TrackIndex::new(0)));
        assert_eq!(model.slot_capacity(slot), 3);
        assert_eq!(model.slot_available_space(slot), 1);
        // Linked works are already placed; only work 3 is pending.
        assert_eq!(model.pending_works(TrackIndex::new(0)), &[WorkId(3)]);
        assert_eq!(model.total_pending(), 1);
    }

    #[test]
    fn test_unknown_linked_work_is_fatal() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.work(w(1, "AI"));
        builder.slot(s(1, "Aula", 0, 60).with_linked([WorkId(99)]));
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownLinkedWork {
                slot: SlotId(1),
                work: WorkId(99)
            }
        );
    }

    #[test]
    fn test_duplicate_linked_work_is_fatal() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.work(w(1, "AI"));
        builder.slot(s(1, "Aula", 0, 60).with_linked([WorkId(1)]));
        builder.slot(s(2, "Aula", 60, 120).with_linked([WorkId(1)]));
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateLinkedWork {
                slot: SlotId(2),
                work: WorkId(1)
            }
        );
    }

    #[test]
    fn test_mixed_track_links_are_fatal() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.works([w(1, "AI"), w(2, "Theory")]);
        builder.slot(s(1, "Aula", 0, 90).with_linked([WorkId(1), WorkId(2)]));
        let err = builder.build().unwrap_err();
        assert_eq!(err, ModelError::MixedTrackSlot(SlotId(1)));
    }

    #[test]
    fn test_overlinked_slot_is_fatal() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.works([w(1, "AI"), w(2, "AI")]);
        // Capacity 1, two linked works.
        builder.slot(s(1, "Aula", 0, 30).with_linked([WorkId(1), WorkId(2)]));
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            ModelError::OverlinkedSlot {
                slot: SlotId(1),
                linked: 2,
                capacity: 1
            }
        );
    }

    #[test]
    fn test_duplicate_ids_are_fatal() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.works([w(1, "AI"), w(1, "AI")]);
        assert_eq!(
            builder.clone().build().unwrap_err(),
            ModelError::DuplicateWork(WorkId(1))
        );

        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.slot(s(1, "Aula", 0, 60));
        builder.slot(s(1, "Aula", 60, 120));
        assert_eq!(builder.build().unwrap_err(), ModelError::DuplicateSlot(SlotId(1)));
    }

    #[test]
    fn test_invalid_windows_are_fatal() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.slot(s(1, "Aula", 60, 0));
        assert_eq!(builder.build().unwrap_err(), ModelError::InvertedWindow(SlotId(1)));

        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.slot(s(1, "Aula", -10, 60));
        assert_eq!(builder.build().unwrap_err(), ModelError::NegativeStart(SlotId(1)));
    }

    #[test]
    fn test_days_interned_from_start_times() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.slot(s(1, "Aula", 0, 60)); // day 0
        builder.slot(s(2, "Aula", 1500, 1560)); // day 1
        builder.slot(s(3, "Sala", 120, 180)); // day 0
        let model = builder.build().unwrap();

        assert_eq!(model.num_days(), 2);
        assert_eq!(model.slot_day(SlotIndex::new(0)), DayIndex::new(0));
        assert_eq!(model.slot_day(SlotIndex::new(1)), DayIndex::new(0));
        assert_eq!(model.slot_day(SlotIndex::new(2)), DayIndex::new(1));
    }

    #[test]
    fn test_suffix_space_sums() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.slot(s(1, "A", 0, 60)); // space 2
        builder.slot(s(2, "A", 60, 90)); // space 1
        builder.slot(s(3, "A", 90, 180)); // space 3
        let model = builder.build().unwrap();

        assert_eq!(model.space_from(SlotIndex::new(0)), 6);
        assert_eq!(model.space_from(SlotIndex::new(1)), 4);
        assert_eq!(model.space_from(SlotIndex::new(2)), 3);
        assert_eq!(model.space_from(SlotIndex::new(3)), 0);
    }

    #[test]
    fn test_display_summary() {
        let mut builder = ModelBuilder::<i64>::new(30, penalties());
        builder.works([w(1, "AI"), w(2, "Theory")]);
        builder.slot(s(1, "Aula", 0, 60));
        let model = builder.build().unwrap();
        let text = format!("{}", model);
        assert!(text.contains("slots: 1"));
        assert!(text.contains("tracks: 2"));
        assert!(text.contains("pending works: 2"));
    }
}
