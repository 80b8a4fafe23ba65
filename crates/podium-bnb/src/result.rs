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

use crate::stats::SolverStatistics;
use num_traits::{PrimInt, Signed};
use podium_model::solution::Schedule;

/// The qualified answer of a solver run.
///
/// Skipping every slot is always a valid (if expensive) schedule, so the
/// problem is never infeasible; `Unknown` only occurs when an aborted run
/// never reached its first leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult<T>
where
    T: PrimInt + Signed,
{
    /// The schedule is proven to be a minimum-cost schedule.
    Optimal(Schedule<T>),
    /// A valid schedule, found before the run was aborted; a cheaper one
    /// may exist.
    Feasible(Schedule<T>),
    /// The run was aborted before any schedule was found.
    Unknown,
}

impl<T> SolveResult<T>
where
    T: PrimInt + Signed,
{
    /// Returns the schedule carried by this result, if any.
    #[inline]
    pub fn schedule(&self) -> Option<&Schedule<T>> {
        match self {
            SolveResult::Optimal(schedule) | SolveResult::Feasible(schedule) => Some(schedule),
            SolveResult::Unknown => None,
        }
    }
}

impl<T> std::fmt::Display for SolveResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveResult::Optimal(schedule) => {
                write!(f, "Optimal(cost={})", schedule.total_cost())
            }
            SolveResult::Feasible(schedule) => {
                write!(f, "Feasible(cost={})", schedule.total_cost())
            }
            SolveResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why the solver stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The search tree was exhausted; the best schedule is optimal.
    OptimalityProven,
    /// A monitor terminated the search early (time limit, node budget,
    /// external interrupt). The string names the monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Everything a solver run produces: the qualified result, the reason the
/// run stopped, and the collected statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome<T>
where
    T: PrimInt + Signed,
{
    pub result: SolveResult<T>,
    pub reason: TerminationReason,
    pub statistics: SolverStatistics,
}

impl<T> SolveOutcome<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new(
        result: SolveResult<T>,
        reason: TerminationReason,
        statistics: SolverStatistics,
    ) -> Self {
        Self {
            result,
            reason,
            statistics,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SolveResult::Optimal(_))
    }

    #[inline]
    pub fn has_schedule(&self) -> bool {
        matches!(
            self.result,
            SolveResult::Optimal(_) | SolveResult::Feasible(_)
        )
    }

    /// Returns the schedule carried by this outcome, if any.
    #[inline]
    pub fn schedule(&self) -> Option<&Schedule<T>> {
        self.result.schedule()
    }
}

impl<T> std::fmt::Display for SolveOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({})", self.result, self.reason)?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        let schedule = Schedule::<i64>::new(vec![], vec![], 0);
        let outcome = SolveOutcome::new(
            SolveResult::Optimal(schedule),
            TerminationReason::OptimalityProven,
            SolverStatistics::default(),
        );
        assert!(outcome.is_optimal());
        assert!(outcome.has_schedule());
        assert_eq!(outcome.schedule().unwrap().total_cost(), 0);
    }

    #[test]
    fn test_unknown_carries_no_schedule() {
        let outcome = SolveOutcome::<i64>::new(
            SolveResult::Unknown,
            TerminationReason::Aborted("node budget of 10 nodes exhausted".into()),
            SolverStatistics::default(),
        );
        assert!(!outcome.is_optimal());
        assert!(!outcome.has_schedule());
        assert!(outcome.schedule().is_none());
    }

    #[test]
    fn test_display() {
        let outcome = SolveOutcome::<i64>::new(
            SolveResult::Unknown,
            TerminationReason::OptimalityProven,
            SolverStatistics::default(),
        );
        let text = format!("{}", outcome);
        assert!(text.contains("Unknown"));
        assert!(text.contains("Optimality Proven"));
    }
}
