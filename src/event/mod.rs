#[cfg(test)]
mod test;

mod armv6;
mod armv7;
mod mips24k;
mod mips34k;

use std::fmt;

pub use armv6::ARMV6;
pub use armv7::ARMV7;
pub use mips24k::MIPS_24K;
pub use mips34k::MIPS_34K;

use crate::assign::Rebalance;

/// Name reported for an event id that no catalog entry defines on a counter.
pub const UNDEFINED_EVENT: &str = "Undefined Event";

/// Every compiled catalog, looked up by the driver's `cpu_type`.
pub static TABLES: [&CpuEventTable; 4] = [&ARMV6, &ARMV7, &MIPS_24K, &MIPS_34K];

/// Set of physical counters an event may be programmed on, bit `i` is counter `i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CounterMask(pub u32);

impl CounterMask {
    pub const fn of(slots: &[usize]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < slots.len() {
            bits |= 1 << slots[i];
            i += 1;
        }
        Self(bits)
    }

    pub const fn slot(slot: usize) -> Self {
        if slot < u32::BITS as usize {
            Self(1 << slot)
        } else {
            Self(0)
        }
    }

    pub const fn contains(self, slot: usize) -> bool {
        self.intersects(Self::slot(slot))
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn slots(self) -> impl Iterator<Item = usize> {
        (0..u32::BITS as usize).filter(move |&slot| self.contains(slot))
    }
}

// Formats as the eligible counter indices, e.g. `0,1`.
impl fmt::Display for CounterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", slot)?;
        }
        Ok(())
    }
}

/// One hardware event of a CPU model.
///
/// The same `id` may appear several times in one catalog with disjoint
/// counter masks: the numeric code means different things on different
/// counters, so an id is only meaningful together with the counter it is
/// programmed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventDescriptor {
    pub id: u32,
    pub counters: CounterMask,
    pub name: &'static str,
    pub description: &'static str,
}

/// The event catalog and counter layout of one CPU model.
#[derive(Debug)]
pub struct CpuEventTable {
    /// Model name as reported by the driver's `cpu_type` field.
    pub cpu_type: &'static str,
    /// Default reset count per counter, one entry per physical counter.
    pub min_count: &'static [u32],
    /// Event selected by `--quick`.
    pub default_event: &'static str,
    pub events: &'static [EventDescriptor],
    /// Slot reordering applied after events are resolved.
    pub rebalance: &'static (dyn Rebalance + Sync),
}

impl CpuEventTable {
    pub fn find(cpu_type: &str) -> Option<&'static CpuEventTable> {
        TABLES.iter().copied().find(|it| it.cpu_type == cpu_type)
    }

    /// Number of physical counters.
    pub fn counters(&self) -> usize {
        self.min_count.len()
    }

    /// Reset count used when an event spec has none.
    ///
    /// This is always the first counter's minimum, whatever slot the event
    /// lands on.
    pub fn default_count(&self) -> u32 {
        self.min_count.first().copied().unwrap_or_default()
    }

    /// Returns the first event declared with `name`.
    pub fn lookup_by_name(&self, name: &str) -> Option<&'static EventDescriptor> {
        self.events.iter().find(|it| it.name == name)
    }

    /// Returns the first event with `id` that may run on any counter in `mask`.
    pub fn lookup_by_id(&self, id: u32, mask: CounterMask) -> Option<&'static EventDescriptor> {
        self.events
            .iter()
            .find(|it| it.id == id && it.counters.intersects(mask))
    }

    pub fn lookup_by_id_for_counter(&self, id: u32, slot: usize) -> Option<&'static EventDescriptor> {
        self.lookup_by_id(id, CounterMask::slot(slot))
    }

    /// Name of the event `id` programmed on counter `slot`, or [`UNDEFINED_EVENT`].
    pub fn event_name(&self, id: u32, slot: usize) -> &'static str {
        self.lookup_by_id_for_counter(id, slot)
            .map(|it| it.name)
            .unwrap_or(UNDEFINED_EVENT)
    }

    /// Human readable event listing.
    pub fn listing(&self) -> Listing<'_> {
        Listing(self)
    }
}

pub struct Listing<'a>(&'a CpuEventTable);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} | {:<30}: {}", "counter", "name", "meaning")?;
        writeln!(f, "{}", "-".repeat(78))?;
        for event in self.0.events {
            let counters = event.counters.to_string();
            writeln!(f, "{:<12} | {:<30}: {}", counters, event.name, event.description)?;
        }
        Ok(())
    }
}

macro_rules! event {
    ($id:expr, [$($slot:expr),+], $name:expr, $description:expr) => {
        crate::event::EventDescriptor {
            id: $id,
            counters: crate::event::CounterMask::of(&[$($slot),+]),
            name: $name,
            description: $description,
        }
    };
}
pub(crate) use event;
