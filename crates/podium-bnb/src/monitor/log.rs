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

use crate::{
    monitor::tree_search_monitor::{PruneReason, TreeSearchMonitor},
    state::SearchState,
    stats::SolverStatistics,
};
use num_traits::{PrimInt, Signed};
use podium_model::model::Model;
use std::time::Instant;

/// A monitor that logs the search progress to stdout: the model summary
/// at entry, a table row every `log_interval` nodes, every incumbent
/// improvement, and the statistics table at exit.
///
/// Strictly an observer; never issues a terminate command.
pub struct LogMonitor<T>
where
    T: PrimInt + Signed,
{
    start_time: Option<Instant>,
    log_interval: u64,
    best: Option<T>,
}

impl<T> LogMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `LogMonitor` printing a progress row every
    /// `log_interval` explored nodes.
    pub fn new(log_interval: u64) -> Self {
        Self {
            start_time: None,
            log_interval: log_interval.max(1),
            best: None,
        }
    }

    /// Creates a new `LogMonitor` with a default interval of 100,000 nodes.
    pub fn with_default_interval() -> Self {
        Self::new(100_000)
    }

    fn elapsed(&self) -> std::time::Duration {
        self.start_time.map(|s| s.elapsed()).unwrap_or_default()
    }
}

impl<T> Default for LogMonitor<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::with_default_interval()
    }
}

impl<T> TreeSearchMonitor<T> for LogMonitor<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, model: &Model<T>, _statistics: &SolverStatistics) {
        self.start_time = Some(Instant::now());
        self.best = None;
        println!("[podium-bnb] search started: {}", model);
        println!(
            "[podium-bnb] {:>10} | {:>12} | {:>6} | {:>12} | {:>10}",
            "elapsed", "nodes", "depth", "best", "prunes"
        );
    }

    fn on_exit_search(&mut self, statistics: &SolverStatistics) {
        println!("[podium-bnb] search finished after {:.2?}", self.elapsed());
        print!("{}", statistics);
        self.start_time = None;
    }

    fn on_step(&mut self, state: &SearchState<T>, statistics: &SolverStatistics) {
        if statistics.nodes_explored % self.log_interval != 0 {
            return;
        }
        let best = match self.best {
            Some(best) => best.to_string(),
            None => "-".to_string(),
        };
        println!(
            "[podium-bnb] {:>10.2?} | {:>12} | {:>6} | {:>12} | {:>10}",
            self.elapsed(),
            statistics.nodes_explored,
            state.cursor().get(),
            best,
            statistics.prunings_bound
        );
    }

    fn on_lower_bound_computed(
        &mut self,
        _state: &SearchState<T>,
        _lower_bound: T,
        _statistics: &SolverStatistics,
    ) {
    }

    fn on_prune(
        &mut self,
        _state: &SearchState<T>,
        _reason: PruneReason,
        _statistics: &SolverStatistics,
    ) {
    }

    fn on_backtrack(&mut self, _state: &SearchState<T>, _statistics: &SolverStatistics) {}

    fn on_solution_found(&mut self, objective: T, statistics: &SolverStatistics) {
        self.best = Some(objective);
        println!(
            "[podium-bnb] [{:.2?}] improvement #{}: cost {} ({} nodes)",
            self.elapsed(),
            statistics.solutions_found,
            objective,
            statistics.nodes_explored
        );
    }
}
