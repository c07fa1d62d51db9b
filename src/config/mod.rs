#[cfg(test)]
mod test;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};

/// Default mount point of the control filesystem.
pub const DRIVER_DIR: &str = "/dev/oprofile";
/// Default session directory shared with the daemon.
pub const SESSION_DIR: &str = "/data/oprofile";
/// Default daemon executable.
pub const DAEMON: &str = "oprofiled";

/// Where the control filesystem, session and daemon live.
#[derive(Clone, Debug)]
pub struct Opts {
    pub driver_dir: PathBuf,
    pub session_dir: PathBuf,
    pub daemon: PathBuf,
    /// How long shutdown waits for a killed daemon to disappear.
    pub shutdown_grace: Duration,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            driver_dir: PathBuf::from(DRIVER_DIR),
            session_dir: PathBuf::from(SESSION_DIR),
            daemon: PathBuf::from(DAEMON),
            shutdown_grace: Duration::from_secs(1),
        }
    }
}

impl Opts {
    /// Holds the pid of the running daemon.
    pub fn lock_file(&self) -> PathBuf {
        self.session_dir.join("lock")
    }

    pub fn samples_dir(&self) -> PathBuf {
        self.session_dir.join("samples")
    }

    pub fn current_samples_dir(&self) -> PathBuf {
        self.samples_dir().join("current")
    }
}

/// Kernel symbol options passed through to the daemon.
#[derive(Clone, Debug, Default)]
pub struct DaemonOpts {
    /// Uncompressed kernel image, `--no-vmlinux` is passed when absent.
    pub vmlinux: Option<PathBuf>,
    pub kernel_range: Option<KernelRange>,
}

/// Kernel text address range, `start,end` in hexadecimal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelRange {
    pub start: u64,
    pub end: u64,
}

impl FromStr for KernelRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedKernelRange(s.to_string());
        let hex = |it: &str| {
            let it = it.trim();
            let it = it
                .strip_prefix("0x")
                .or_else(|| it.strip_prefix("0X"))
                .unwrap_or(it);
            u64::from_str_radix(it, 16).map_err(|_| malformed())
        };

        let (start, end) = s.split_once(',').ok_or_else(malformed)?;
        let range = Self {
            start: hex(start)?,
            end: hex(end)?,
        };
        if range.start >= range.end {
            return Err(malformed());
        }
        Ok(range)
    }
}

impl fmt::Display for KernelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x},{:x}", self.start, self.end)
    }
}
