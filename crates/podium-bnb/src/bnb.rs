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

//! The branch-and-bound engine.
//!
//! Depth-first search over the slots in the model's fixed decision order.
//! At each open slot the engine branches on every track that still has
//! pending works and no time conflict, plus the always-valid skip branch;
//! locked slots have exactly one branch. The single `SearchState` is
//! mutated forward and restored with the exact inverse on backtrack.
//!
//! Branch order is fixed (tracks in interned order, skip last) and ties
//! on the objective keep the first leaf found, so two runs on the same
//! model produce identical schedules and statistics. Because skipping
//! every slot is itself a leaf, an exhausted search always carries a
//! proven optimum.

use crate::{
    bound::{CapacityBound, LowerBound},
    materialize::materialize,
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    result::{SolveOutcome, SolveResult, TerminationReason},
    state::SearchState,
    stats::SolverStatistics,
};
use num_traits::{PrimInt, Signed};
use podium_model::{
    index::TrackIndex,
    model::{Model, SlotKind},
    num::SaturatingArith,
};
use std::time::Instant;

/// The branch-and-bound solver, parameterized over its lower bound.
#[derive(Debug, Clone, Default)]
pub struct BnbSolver<B> {
    bound: B,
}

impl BnbSolver<CapacityBound> {
    /// Creates a solver with the default `CapacityBound`.
    #[inline]
    pub fn new() -> Self {
        Self {
            bound: CapacityBound::new(),
        }
    }
}

impl<B> BnbSolver<B> {
    /// Creates a solver with a caller-supplied lower bound.
    #[inline]
    pub fn with_bound(bound: B) -> Self {
        Self { bound }
    }

    /// Runs the search to completion (or until a monitor terminates it)
    /// and returns the qualified outcome.
    pub fn solve<T>(
        &self,
        model: &Model<T>,
        monitor: &mut dyn TreeSearchMonitor<T>,
    ) -> SolveOutcome<T>
    where
        T: PrimInt + Signed + SaturatingArith,
        B: LowerBound<T>,
    {
        let start = Instant::now();
        let mut session = SearchSession {
            model,
            bound: &self.bound,
            monitor,
            stats: SolverStatistics::default(),
            state: SearchState::root(model),
            best_cost: None,
            best_tracks: None,
            aborted: None,
        };

        session.monitor.on_enter_search(model, &session.stats);
        session.search();
        session.stats.set_total_time(start.elapsed());
        session.monitor.on_exit_search(&session.stats);

        let SearchSession {
            stats,
            best_cost,
            best_tracks,
            aborted,
            ..
        } = session;

        let schedule = match (best_cost, best_tracks) {
            (Some(cost), Some(tracks)) => Some(materialize(model, &tracks, cost)),
            _ => None,
        };

        match aborted {
            Some(reason) => SolveOutcome::new(
                schedule.map_or(SolveResult::Unknown, SolveResult::Feasible),
                TerminationReason::Aborted(reason),
                stats,
            ),
            None => SolveOutcome::new(
                schedule.map_or(SolveResult::Unknown, SolveResult::Optimal),
                TerminationReason::OptimalityProven,
                stats,
            ),
        }
    }
}

/// One solver run: the model, the bound, the monitor, and everything the
/// recursion mutates.
struct SearchSession<'a, T, B>
where
    T: PrimInt + Signed + SaturatingArith,
    B: LowerBound<T>,
{
    model: &'a Model<T>,
    bound: &'a B,
    monitor: &'a mut dyn TreeSearchMonitor<T>,
    stats: SolverStatistics,
    state: SearchState<T>,
    best_cost: Option<T>,
    best_tracks: Option<Vec<Option<TrackIndex>>>,
    aborted: Option<String>,
}

impl<T, B> SearchSession<'_, T, B>
where
    T: PrimInt + Signed + SaturatingArith,
    B: LowerBound<T>,
{
    fn search(&mut self) {
        if self.aborted.is_some() {
            return;
        }

        self.stats.on_node_explored();
        self.stats.on_depth_update(self.state.cursor().get() as u64);

        if let SearchCommand::Terminate(reason) =
            self.monitor.search_command(&self.state, &self.stats)
        {
            self.aborted = Some(reason);
            return;
        }
        self.monitor.on_step(&self.state, &self.stats);

        let cursor = self.state.cursor();
        if cursor.get() == self.model.num_slots() {
            self.on_leaf();
            return;
        }

        let lower_bound = self.bound.bound(self.model, &self.state);
        self.monitor
            .on_lower_bound_computed(&self.state, lower_bound, &self.stats);
        if let Some(best) = self.best_cost {
            if lower_bound >= best {
                self.stats.on_pruning_bound();
                self.monitor
                    .on_prune(&self.state, PruneReason::BoundDominated, &self.stats);
                return;
            }
        }

        match self.model.slot_kind(cursor) {
            SlotKind::Locked(track) => {
                // The slot's track, window, and penalties are fixed since
                // the root; only its residual space is decided here.
                let take = self
                    .state
                    .consume(track, self.model.slot_available_space(cursor));
                self.state.advance();
                self.search();
                self.state.retreat();
                self.state.restore(track, take);
                self.stats.on_backtrack();
                self.monitor.on_backtrack(&self.state, &self.stats);
            }
            SlotKind::Open => {
                let window = self.model.slot_window(cursor);
                if self.model.slot_available_space(cursor) > 0 {
                    for t in 0..self.model.num_tracks() {
                        let track = TrackIndex::new(t);
                        if self.state.remaining(track) == 0 {
                            continue;
                        }
                        if self.state.has_conflict(track, &window) {
                            self.stats.on_conflict_skipped();
                            self.monitor
                                .on_prune(&self.state, PruneReason::Conflict, &self.stats);
                            continue;
                        }

                        let assignment = self.state.assign_open(self.model, cursor, track);
                        self.state.advance();
                        self.search();
                        self.state.retreat();
                        self.state.revert_open(self.model, cursor, track, assignment);
                        self.stats.on_backtrack();
                        self.monitor.on_backtrack(&self.state, &self.stats);

                        if self.aborted.is_some() {
                            return;
                        }
                    }
                }

                // Leaving the slot empty is always a valid branch.
                self.state.advance();
                self.search();
                self.state.retreat();
                self.stats.on_backtrack();
                self.monitor.on_backtrack(&self.state, &self.stats);
            }
        }
    }

    /// Evaluates a complete path: every work still pending pays the
    /// unassigned penalty. Strictly improving leaves replace the
    /// incumbent, so on ties the first leaf found survives.
    fn on_leaf(&mut self) {
        let unassigned = T::from(self.state.remaining_total()).unwrap_or_else(T::max_value);
        let total = self
            .state
            .current_cost()
            .sat_add(unassigned.sat_mul(self.model.penalties().unassigned_work()));

        let improved = match self.best_cost {
            None => true,
            Some(best) => total < best,
        };
        if improved {
            self.best_cost = Some(total);
            self.best_tracks = Some(self.state.slot_tracks().to_vec());
            self.stats.on_solution_found();
            self.monitor.on_solution_found(total, &self.stats);
        }
    }
}
