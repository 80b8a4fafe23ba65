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

//! Podium-BnB: branch-and-bound for conference slot scheduling
//!
//! Implements an exact, deterministic depth-first branch-and-bound search
//! over a `podium_model::Model<T>`: each slot, in a fixed decision order,
//! either serves one track's pending works or stays empty, minimizing the
//! weighted sum of unassigned works, distinct days, and mixed rooms.
//!
//! Core flow
//! - Build a `podium_model::Model<T>` from works and slot requests.
//! - Optionally attach monitors (logging, time limit, node budget).
//! - Run `bnb::BnbSolver` and inspect the `result::SolveOutcome`.
//!
//! Design highlights
//! - Tight inner loop: one `state::SearchState` is mutated in place and
//!   restored with exact inverses on backtrack.
//! - Admissible bounds (`bound::CapacityBound`) make exhausted searches
//!   optimality proofs.
//! - Monitors observe and stop the search without touching core logic.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `bound`: admissible lower bounds.
//! - `state`: the mutable depth-first search state.
//! - `materialize`: leaf decisions to concrete schedules.
//! - `monitor`: tree-search monitors (log, composite, limits).
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.

pub mod bnb;
pub mod bound;
pub mod materialize;
pub mod monitor;
pub mod result;
pub mod state;
pub mod stats;
