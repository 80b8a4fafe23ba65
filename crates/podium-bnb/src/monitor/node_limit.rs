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
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    state::SearchState,
    stats::SolverStatistics,
};
use num_traits::{PrimInt, Signed};
use podium_model::model::Model;
use std::marker::PhantomData;

/// A monitor that terminates the search after a fixed number of explored
/// nodes. Deterministic, unlike a wall-clock limit, so results under a
/// node budget are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct NodeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    max_nodes: u64,
    _marker: PhantomData<T>,
}

impl<T> NodeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `NodeLimitMonitor` with the specified node budget.
    pub fn new(max_nodes: u64) -> Self {
        Self {
            max_nodes,
            _marker: PhantomData,
        }
    }
}

impl<T> TreeSearchMonitor<T> for NodeLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }

    fn on_enter_search(&mut self, _model: &Model<T>, _statistics: &SolverStatistics) {}
    fn on_exit_search(&mut self, _statistics: &SolverStatistics) {}

    fn search_command(
        &mut self,
        _state: &SearchState<T>,
        statistics: &SolverStatistics,
    ) -> SearchCommand {
        if statistics.nodes_explored >= self.max_nodes {
            return SearchCommand::Terminate(format!(
                "Node budget of {} nodes exhausted",
                self.max_nodes
            ));
        }
        SearchCommand::Continue
    }

    fn on_step(&mut self, _state: &SearchState<T>, _statistics: &SolverStatistics) {}
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
    fn on_solution_found(&mut self, _objective: T, _statistics: &SolverStatistics) {}
}
