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

//! # Scheduler Facade
//!
//! The one-stop entry point for callers: wire a validated model, the
//! configured limits, and the progress log into a single solver run.
//!
//! ## Usage
//!
//! ```rust
//! use podium_model::{
//!     model::{ModelBuilder, SlotId, SlotRequest, Work, WorkId},
//!     penalty::Penalties,
//! };
//! use podium_solver::solver::{Scheduler, SolveOptions};
//!
//! let mut builder = ModelBuilder::new(30, Penalties::standard());
//! builder.work(Work::new(WorkId(1), "AI"));
//! builder.slot(SlotRequest::new(SlotId(1), "Aula", 0, 60));
//! let model = builder.build().unwrap();
//!
//! let scheduler = Scheduler::with_options(SolveOptions::new().with_node_limit(1_000_000));
//! let outcome = scheduler.solve(&model);
//! assert!(outcome.has_schedule());
//! ```

use num_traits::{PrimInt, Signed};
use podium_bnb::{
    bnb::BnbSolver,
    monitor::{
        composite::CompositeMonitor, log::LogMonitor, node_limit::NodeLimitMonitor,
        time_limit::TimeLimitMonitor, tree_search_monitor::TreeSearchMonitor,
    },
    result::SolveOutcome,
};
use podium_model::{model::Model, num::SaturatingArith};
use std::marker::PhantomData;
use std::time::Duration;

/// Configuration of a solver run: optional limits and progress logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveOptions {
    time_limit: Option<Duration>,
    node_limit: Option<u64>,
    progress_log: bool,
}

impl SolveOptions {
    /// Creates options with no limits and no logging: the search runs to
    /// a proven optimum.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts the search after the given wall-clock duration.
    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Aborts the search after the given number of explored nodes.
    /// Unlike a time limit, results under a node budget are reproducible.
    #[inline]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Logs search progress to stdout.
    #[inline]
    pub fn with_progress_log(mut self) -> Self {
        self.progress_log = true;
        self
    }

    /// Returns the configured wall-clock limit, if any.
    #[inline]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Returns the configured node budget, if any.
    #[inline]
    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }
}

/// The high-level scheduling facade.
///
/// Owns the run configuration and assembles the monitor stack for each
/// call to `solve`; the model can be solved repeatedly and the runs are
/// independent.
#[derive(Debug, Clone, Default)]
pub struct Scheduler<T> {
    options: SolveOptions,
    _marker: PhantomData<T>,
}

impl<T> Scheduler<T>
where
    T: PrimInt + Signed + SaturatingArith + std::fmt::Display,
{
    /// Creates a scheduler that runs to a proven optimum, unlimited.
    #[inline]
    pub fn new() -> Self {
        Self::with_options(SolveOptions::new())
    }

    /// Creates a scheduler with the given run configuration.
    #[inline]
    pub fn with_options(options: SolveOptions) -> Self {
        Self {
            options,
            _marker: PhantomData,
        }
    }

    /// Returns the run configuration.
    #[inline]
    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Solves the model with the configured limits and logging.
    pub fn solve(&self, model: &Model<T>) -> SolveOutcome<T> {
        let mut monitor = CompositeMonitor::new();
        if let Some(limit) = self.options.node_limit {
            monitor.add_monitor(NodeLimitMonitor::new(limit));
        }
        if let Some(limit) = self.options.time_limit {
            monitor.add_monitor(TimeLimitMonitor::with_default_check_interval(limit));
        }
        if self.options.progress_log {
            monitor.add_monitor(LogMonitor::with_default_interval());
        }

        self.solve_with_monitor(model, &mut monitor)
    }

    /// Solves the model with a caller-supplied monitor instead of the
    /// configured stack.
    pub fn solve_with_monitor(
        &self,
        model: &Model<T>,
        monitor: &mut dyn TreeSearchMonitor<T>,
    ) -> SolveOutcome<T> {
        BnbSolver::new().solve(model, monitor)
    }
}
