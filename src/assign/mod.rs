
mod rebalance;

use std::str::FromStr;

use arrayvec::ArrayVec;
use log::debug;
pub use rebalance::*;

use crate::error::{Error, Result};
use crate::event::{CpuEventTable, EventDescriptor};

/// Upper bound on physical counters of any supported CPU model.
pub const MAX_COUNTERS: usize = 8;

/// Event name selecting timer based profiling instead of hardware counters.
pub const TIMER: &str = "timer";

/// A user supplied event selection, `name` or `name:count`. An empty count
/// means the default one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventSpec {
    pub name: String,
    /// Reset count, the table default is used when absent.
    pub count: Option<u32>,
}

impl FromStr for EventSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, count) = match s.split_once(':') {
            Some((name, "")) => (name, None),
            Some((name, count)) => {
                let count = count
                    .parse::<u32>()
                    .map_err(|_| Error::MalformedSpec(s.to_string()))?;
                (name, Some(count))
            }
            None => (s, None),
        };
        if name.is_empty() {
            return Err(Error::MalformedSpec(s.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            count,
        })
    }
}

/// An event placed on the counter given by its position in [`Assignment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assigned {
    pub event: &'static EventDescriptor,
    pub count: u32,
}

/// Events indexed by physical counter slot.
pub type Assignment = ArrayVec<Assigned, MAX_COUNTERS>;

/// What the daemon is asked to profile with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Counters(Assignment),
    Timer,
}

impl Selection {
    /// Resolves specs against `table`, `timer` alone selects timer mode.
    pub fn from_specs(specs: &[EventSpec], table: &CpuEventTable) -> Result<Self> {
        match specs.iter().position(|it| it.name == TIMER) {
            Some(_) if specs.len() == 1 => Ok(Selection::Timer),
            Some(i) => Err(Error::MalformedSpec(format!(
                "{} cannot be combined with hardware events",
                specs[i].name
            ))),
            None => assign(specs, table).map(Selection::Counters),
        }
    }
}

/// Places every spec on its own counter, in input order.
///
/// Each spec is resolved and, unless the table's [`Rebalance`] strategy may
/// move events, checked against its counter in turn. The strategy then runs
/// and every event is checked against the counter it ended up on.
pub fn assign(specs: &[EventSpec], table: &CpuEventTable) -> Result<Assignment> {
    let limit = table.counters().min(MAX_COUNTERS);

    let mut assignment = Assignment::new();
    for spec in specs {
        if assignment.len() == limit {
            return Err(Error::TooManyEvents(limit));
        }
        let event = table
            .lookup_by_name(&spec.name)
            .ok_or_else(|| Error::UnknownEvent(spec.name.clone()))?;
        if !table.rebalance.reorders() {
            check_counter(event, assignment.len())?;
        }
        let count = spec.count.unwrap_or_else(|| table.default_count());
        debug!("resolved {} to id {:#x}, count {}", event.name, event.id, count);
        assignment.push(Assigned { event, count });
    }

    let assignment = table.rebalance.rebalance(assignment, limit)?;

    for (slot, it) in assignment.iter().enumerate() {
        check_counter(it.event, slot)?;
    }

    Ok(assignment)
}

fn check_counter(event: &EventDescriptor, slot: usize) -> Result<()> {
    if event.counters.contains(slot) {
        Ok(())
    } else {
        Err(Error::IneligibleCounter {
            name: event.name.to_string(),
            slot,
        })
    }
}
