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

//! Concrete schedules produced by the solver.
//!
//! A `Schedule` is the materialized form of a search leaf: per-slot work
//! placements in caller terms (`SlotId`/`WorkId`/names), the works left
//! unassigned, and the objective value of the whole schedule. Works that
//! were already linked to a slot in the input are not repeated here; an
//! `Assignment` lists only the works placed by this run.

use crate::model::{SlotId, WorkId};
use num_traits::{PrimInt, Signed};

/// The works placed into one slot by a solver run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    slot: SlotId,
    room: String,
    track: String,
    works: Vec<WorkId>,
}

impl Assignment {
    /// Creates a new assignment.
    #[inline]
    pub fn new<R, K>(slot: SlotId, room: R, track: K, works: Vec<WorkId>) -> Self
    where
        R: Into<String>,
        K: Into<String>,
    {
        Self {
            slot,
            room: room.into(),
            track: track.into(),
            works,
        }
    }

    /// Returns the slot the works were placed into.
    #[inline]
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// Returns the room name of the slot.
    #[inline]
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Returns the track the slot serves.
    #[inline]
    pub fn track(&self) -> &str {
        &self.track
    }

    /// Returns the works newly placed into the slot, in input order.
    #[inline]
    pub fn works(&self) -> &[WorkId] {
        &self.works
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, track {}): {} work(s)",
            self.slot,
            self.room,
            self.track,
            self.works.len()
        )
    }
}

/// A complete schedule with its objective value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule<T>
where
    T: PrimInt + Signed,
{
    assignments: Vec<Assignment>,
    unassigned: Vec<WorkId>,
    total_cost: T,
}

impl<T> Schedule<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new schedule.
    #[inline]
    pub fn new(assignments: Vec<Assignment>, unassigned: Vec<WorkId>, total_cost: T) -> Self {
        Self {
            assignments,
            unassigned,
            total_cost,
        }
    }

    /// Returns the per-slot placements, one entry per slot that received
    /// at least one new work, in decision order.
    #[inline]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Returns the works no slot could take, in input order.
    #[inline]
    pub fn unassigned(&self) -> &[WorkId] {
        &self.unassigned
    }

    /// Returns the objective value of this schedule.
    #[inline]
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Returns the number of works newly placed by this schedule.
    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.assignments.iter().map(|a| a.works().len()).sum()
    }

    /// Returns true if every pending work found a slot.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }
}

impl<T> std::fmt::Display for Schedule<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Schedule(cost: {}, assigned: {}, unassigned: {})",
            self.total_cost,
            self.num_assigned(),
            self.unassigned.len()
        )?;
        for assignment in &self.assignments {
            writeln!(f, "  {}", assignment)?;
        }
        Ok(())
    }
}
