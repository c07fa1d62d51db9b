use std::fmt;
use std::path::PathBuf;

/// Live configuration read back from the control filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Status {
    pub driver_dir: PathBuf,
    pub session_dir: PathBuf,
    /// Indexed by counter.
    pub counters: Vec<CounterStatus>,
    pub daemon: DaemonStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CounterStatus {
    Disabled,
    Enabled {
        /// Event name resolved against the counter it runs on.
        name: &'static str,
        count: Option<i64>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DaemonStatus {
    /// No pid recorded.
    NotRunning,
    /// A pid is recorded but no such process exists.
    Stale { pid: i32 },
    Running {
        pid: i32,
        profiling: bool,
        samples_received: Option<i64>,
        samples_lost_overflow: Option<i64>,
    },
}

struct Count(Option<i64>);

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => fmt::Display::fmt(&n, f),
            None => f.pad("-"),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Driver directory: {}", self.driver_dir.display())?;
        writeln!(f, "Session directory: {}", self.session_dir.display())?;

        for (counter, it) in self.counters.iter().enumerate() {
            match it {
                CounterStatus::Disabled => writeln!(f, "Counter {} disabled", counter)?,
                CounterStatus::Enabled { name, count } => {
                    writeln!(f, "Counter {}:", counter)?;
                    writeln!(f, "    name: {}", name)?;
                    writeln!(f, "    count: {}", Count(*count))?;
                }
            }
        }

        match &self.daemon {
            DaemonStatus::NotRunning => writeln!(f, "oprofiled is not running"),
            DaemonStatus::Stale { .. } => writeln!(
                f,
                "Session directory is not clean - do \"opctl --setup\" before you continue"
            ),
            DaemonStatus::Running {
                pid,
                profiling,
                samples_received,
                samples_lost_overflow,
            } => {
                writeln!(f, "oprofiled pid: {}", pid)?;
                writeln!(f, "profiler is{} running", if *profiling { "" } else { " not" })?;
                writeln!(f, "  {:>9} samples received", Count(*samples_received))?;
                writeln!(f, "  {:>9} samples lost overflow", Count(*samples_lost_overflow))
            }
        }
    }
}
