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

//! Podium-Model: the immutable problem model for conference scheduling
//!
//! This crate describes one scheduling instance of the multi-track
//! conference assignment problem: works (accepted presentations) grouped
//! by track, bookable room/time slots, and the penalty configuration that
//! defines the objective. `ModelBuilder` validates raw caller input and
//! preprocesses it into a `Model` the search engine can query cheaply:
//! slots are sorted into their fixed decision order, capacities and
//! residual space are computed, pre-assigned slots are detected and locked
//! to their track, and rooms/days/tracks are interned into dense indices.
//!
//! Module map
//! - `index`: phantom-tagged indices for slots, tracks, rooms, and days.
//! - `time`: half-open minute-resolution time windows.
//! - `num`: saturating arithmetic helpers and the `CostNumeric` bundle.
//! - `penalty`: the three objective weights.
//! - `model`: instance input types, validation, and the preprocessed model.
//! - `solution`: the final work-to-slot schedule value.

pub mod index;
pub mod model;
pub mod num;
pub mod penalty;
pub mod solution;
pub mod time;
