//! Control plane for the oprofile performance-counter driver.
//!
//! Selects which hardware events are counted on which counters, checks the
//! selection against the CPU model, programs it through the driver's control
//! filesystem and manages the lifecycle of the sampling daemon.
//!
//! ## Example
//!
//! Resolve three events on an ARMv6 core. Its last counter can only count
//! cycles, so the cycle event is moved there.
//!
//! ```rust
//! use opctl::assign::{assign, EventSpec};
//! use opctl::event::CpuEventTable;
//!
//! let table = CpuEventTable::find("arm/armv6").unwrap();
//! let specs = ["CPU_CYCLES", "DCACHE_MISS:50000", "ITLB_MISS"]
//!     .map(|it| it.parse::<EventSpec>().unwrap());
//!
//! let assignment = assign(&specs, table).unwrap();
//! assert_eq!(assignment[2].event.name, "CPU_CYCLES");
//! assert_eq!(assignment[1].count, 50000);
//! ```
//!
//! ## Daemon liveness
//!
//! Whether the daemon runs is decided by probing the pid recorded in the
//! session lock file. If the daemon died and its pid was reused, an unrelated
//! process is reported as the daemon.

pub mod assign;
pub mod config;
pub mod control;
mod error;
pub mod event;
mod ffi;
pub mod host;
pub mod session;

pub use error::{Error, ErrorKind, Result};
