use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};

use super::{DaemonCommand, Host, Signal};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Mount(PathBuf),
    Unmount(PathBuf),
    Launch(DaemonCommand),
    Signal(i32, Signal),
}

/// In-memory host recording every call.
///
/// Mounting writes `cpu_type` into the root, launched daemons stay alive
/// until they are killed.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub calls: RefCell<Vec<Call>>,
    pub alive: RefCell<BTreeSet<i32>>,
    pub cpu_type: Option<&'static str>,
    pub fail_mount: bool,
}

impl FakeHost {
    pub const DAEMON_PID: u32 = 4242;

    pub fn with_cpu_type(cpu_type: &'static str) -> Self {
        Self {
            cpu_type: Some(cpu_type),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn signals(&self) -> Vec<(i32, Signal)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|it| match it {
                Call::Signal(pid, signal) => Some((*pid, *signal)),
                _ => None,
            })
            .collect()
    }

    pub fn launches(&self) -> Vec<DaemonCommand> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|it| match it {
                Call::Launch(command) => Some(command.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Host for FakeHost {
    fn mount_control_fs(&self, root: &Path) -> Result<()> {
        self.calls.borrow_mut().push(Call::Mount(root.to_path_buf()));
        if self.fail_mount {
            return Err(Error::from(ErrorKind::PermissionDenied));
        }
        if let Some(cpu_type) = self.cpu_type {
            fs::write(root.join("cpu_type"), format!("{}\n", cpu_type))?;
        }
        Ok(())
    }

    fn unmount_control_fs(&self, root: &Path) -> Result<()> {
        self.calls.borrow_mut().push(Call::Unmount(root.to_path_buf()));
        Ok(())
    }

    fn launch_daemon(&self, command: &DaemonCommand) -> Result<u32> {
        self.calls.borrow_mut().push(Call::Launch(command.clone()));
        self.alive.borrow_mut().insert(Self::DAEMON_PID as _);
        Ok(Self::DAEMON_PID)
    }

    fn signal(&self, pid: i32, signal: Signal) -> Result<()> {
        self.calls.borrow_mut().push(Call::Signal(pid, signal));
        let mut alive = self.alive.borrow_mut();
        if !alive.contains(&pid) {
            return Err(Error::from_raw_os_error(libc::ESRCH));
        }
        if signal == Signal::Kill {
            alive.remove(&pid);
        }
        Ok(())
    }

    fn is_alive(&self, pid: i32) -> bool {
        self.alive.borrow().contains(&pid)
    }
}

const FIELDS: [&str; 6] = ["enabled", "event", "count", "user", "kernel", "unit_mask"];

/// Lays out the files a mounted driver exposes for `counters` counters.
pub fn driver(root: &Path, cpu_type: &str, counters: usize) {
    fs::create_dir_all(root.join("stats/cpu0")).unwrap();
    fs::write(root.join("cpu_type"), format!("{}\n", cpu_type)).unwrap();
    for field in ["enable", "dump", "stats/cpu0/sample_received", "stats/cpu0/sample_lost_overflow"] {
        fs::write(root.join(field), "").unwrap();
    }
    for counter in 0..counters {
        let dir = root.join(counter.to_string());
        fs::create_dir(&dir).unwrap();
        for field in FIELDS {
            fs::write(dir.join(field), "").unwrap();
        }
    }
}
