#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
mod test;

use std::ffi::CStr;
use std::fmt;
use std::io::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use itertools::Itertools;
use log::debug;

use crate::ffi::syscall;

const CONTROL_FS_TYPE: &CStr = c"oprofilefs";
const CONTROL_FS_SOURCE: &CStr = c"nodev";

/// Signals sent to the sampling daemon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Asks the daemon to close its sample files.
    Hangup,
    /// Terminates the daemon immediately.
    Kill,
}

impl Signal {
    pub fn raw(self) -> i32 {
        match self {
            Signal::Hangup => libc::SIGHUP,
            Signal::Kill => libc::SIGKILL,
        }
    }
}

/// Command line used to launch the sampling daemon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaemonCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl fmt::Display for DaemonCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        if !self.args.is_empty() {
            write!(f, " {}", self.args.iter().join(" "))?;
        }
        Ok(())
    }
}

/// Process and mount primitives the session is built on.
///
/// Daemon liveness is a probe of the recorded pid, not a held handle: a pid
/// reused by an unrelated process after the daemon died is reported alive.
pub trait Host {
    fn mount_control_fs(&self, root: &Path) -> Result<()>;

    fn unmount_control_fs(&self, root: &Path) -> Result<()>;

    /// Starts the daemon without waiting for it and returns its pid.
    fn launch_daemon(&self, command: &DaemonCommand) -> Result<u32>;

    fn signal(&self, pid: i32, signal: Signal) -> Result<()>;

    fn is_alive(&self, pid: i32) -> bool;
}

/// The running system.
#[derive(Clone, Copy, Debug, Default)]
pub struct System;

impl Host for System {
    fn mount_control_fs(&self, root: &Path) -> Result<()> {
        debug!("mounting {:?} at {}", CONTROL_FS_TYPE, root.display());
        syscall!(mount, CONTROL_FS_SOURCE, root, CONTROL_FS_TYPE)
    }

    fn unmount_control_fs(&self, root: &Path) -> Result<()> {
        debug!("unmounting {}", root.display());
        syscall!(umount, root)
    }

    fn launch_daemon(&self, command: &DaemonCommand) -> Result<u32> {
        // The daemon records its own pid in the session lock file, the
        // child is left for init to reap once this process exits.
        let child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .spawn()?;
        Ok(child.id())
    }

    fn signal(&self, pid: i32, signal: Signal) -> Result<()> {
        debug!("sending {:?} to {}", signal, pid);
        syscall!(kill, pid, signal.raw())
    }

    fn is_alive(&self, pid: i32) -> bool {
        pid > 0 && Path::new("/proc").join(pid.to_string()).exists()
    }
}
