use std::fmt::Debug;

use log::debug;

use super::Assignment;
use crate::error::{Error, Result};

/// Model specific slot reordering, run after all events are resolved.
pub trait Rebalance: Debug {
    /// Returns the reordered assignment, `counters` is the number of physical counters.
    fn rebalance(&self, assignment: Assignment, counters: usize) -> Result<Assignment>;

    /// Whether events may change slots. Events of a strategy that never
    /// moves them are checked against their counter as they are placed.
    fn reorders(&self) -> bool {
        true
    }
}

/// Keeps the input order.
#[derive(Clone, Copy, Debug)]
pub struct Identity;

impl Rebalance for Identity {
    fn rebalance(&self, assignment: Assignment, _: usize) -> Result<Assignment> {
        Ok(assignment)
    }

    fn reorders(&self) -> bool {
        false
    }
}

/// Moves the cycle counter to the last slot when every counter is in use.
///
/// On cores where the last counter can only count cycles, a full set of
/// events is only schedulable if one of them is the cycle event, and that
/// event must sit on the last counter.
#[derive(Clone, Copy, Debug)]
pub struct CycleCounterLast {
    pub cycle_event: u32,
}

impl Rebalance for CycleCounterLast {
    fn rebalance(&self, mut assignment: Assignment, counters: usize) -> Result<Assignment> {
        if assignment.is_empty() || assignment.len() != counters {
            return Ok(assignment);
        }

        let last = counters - 1;
        match assignment
            .iter()
            .position(|it| it.event.id == self.cycle_event)
        {
            Some(slot) => {
                if slot != last {
                    debug!("moving {} from counter {} to {}", assignment[slot].event.name, slot, last);
                    assignment.swap(slot, last);
                }
                Ok(assignment)
            }
            None => Err(Error::MissingCycleCounter),
        }
    }
}
