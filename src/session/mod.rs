
mod status;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use itertools::Itertools;
use log::{debug, info, warn};
pub use status::*;

use crate::assign::{Assigned, Selection};
use crate::config::{DaemonOpts, Opts};
use crate::control::{read_numeric_field, ControlChannel, Device, Field, GlobalField, Stat};
use crate::error::{Error, Result};
use crate::event::UNDEFINED_EVENT;
use crate::host::{DaemonCommand, Host, Signal};

const SHUTDOWN_POLL: Duration = Duration::from_millis(50);

/// Drives the profiling session: the session directory, the control
/// filesystem and the sampling daemon.
///
/// The daemon keeps the counters open while it runs, so it is always shut
/// down before counters are reprogrammed. That ordering is the only
/// synchronization with it.
///
/// # Examples
///
/// ```no_run
/// use opctl::assign::{EventSpec, Selection};
/// use opctl::config::{DaemonOpts, Opts};
/// use opctl::host::System;
/// use opctl::session::SessionManager;
///
/// let session = SessionManager::new(Opts::default(), System);
/// session.setup().unwrap();
///
/// let device = session.device().unwrap();
/// let specs = ["CYCLES:20000".parse::<EventSpec>().unwrap()];
/// let selection = Selection::from_specs(&specs, device.table).unwrap();
///
/// session.configure(&device, &selection, &DaemonOpts::default()).unwrap();
/// session.start(&device).unwrap();
/// println!("{}", session.status(&device));
/// ```
pub struct SessionManager<H> {
    opts: Opts,
    host: H,
}

impl<H: Host> SessionManager<H> {
    pub fn new(opts: Opts, host: H) -> Self {
        Self { opts, host }
    }

    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mounts the control filesystem if needed and selects the CPU catalog.
    pub fn device(&self) -> Result<Device> {
        ControlChannel::discover(&self.opts.driver_dir, &self.host)
    }

    /// Shuts the daemon down, recreates an empty session directory and mounts
    /// the control filesystem.
    ///
    /// The daemon goes first, its pid is lost with the session directory.
    /// Session directory failures are reported but do not stop the setup,
    /// a failed mount does.
    pub fn setup(&self) -> Result<()> {
        self.shutdown()?;

        if let Err(Error::SessionDir { path, source }) = self.recreate_session_dir() {
            warn!("cannot create directory {}: {}", path.display(), source);
        }
        ControlChannel::new(&self.opts.driver_dir).mount(&self.host)
    }

    fn recreate_session_dir(&self) -> Result<()> {
        let session_dir = &self.opts.session_dir;
        let failed = |path: &Path, source| Error::SessionDir {
            path: path.to_path_buf(),
            source,
        };

        match fs::remove_dir_all(session_dir) {
            Err(e) if e.kind() != ErrorKind::NotFound => return Err(failed(session_dir, e)),
            _ => {}
        }
        fs::create_dir_all(session_dir).map_err(|e| failed(session_dir, e))?;
        let samples_dir = self.opts.samples_dir();
        fs::create_dir(&samples_dir).map_err(|e| failed(&samples_dir, e))?;
        info!("recreated session directory {}", session_dir.display());

        Ok(())
    }

    /// Pid recorded by the daemon, if any.
    pub fn daemon_pid(&self) -> Option<i32> {
        read_numeric_field(self.opts.lock_file())
            .and_then(|pid| i32::try_from(pid).ok())
            .filter(|&pid| pid > 0)
    }

    /// Programs the selected counters and launches the daemon on them.
    ///
    /// A failed write aborts at once, counters written before it keep their
    /// new values.
    pub fn configure(&self, device: &Device, selection: &Selection, daemon: &DaemonOpts) -> Result<u32> {
        self.shutdown()?;

        if let Selection::Counters(assignment) = selection {
            for (counter, it) in assignment.iter().enumerate() {
                program(&device.channel, counter, it).map_err(|e| Error::ConfigureCounter {
                    event: it.event.name,
                    source: Box::new(e),
                })?;
            }
            for counter in assignment.len()..device.table.counters() {
                device.channel.set_counter_field(counter, Field::Enabled, 0)?;
            }
        }

        let command = self.daemon_command(selection, daemon);
        info!("launching {}", command);
        let pid = self
            .host
            .launch_daemon(&command)
            .map_err(|source| Error::DaemonLaunch {
                program: command.program.clone(),
                source,
            })?;
        debug!("daemon launched with pid {}", pid);

        Ok(pid)
    }

    pub fn daemon_command(&self, selection: &Selection, daemon: &DaemonOpts) -> DaemonCommand {
        let mut args = vec![format!("--session-dir={}", self.opts.session_dir.display())];

        let events = match selection {
            Selection::Counters(assignment) => assignment
                .iter()
                .enumerate()
                .map(|(counter, it)| daemon_event_spec(counter, it))
                .join(","),
            Selection::Timer => String::new(),
        };
        args.push(format!("--events={}", events));

        match &daemon.vmlinux {
            Some(vmlinux) => {
                args.push("-k".to_string());
                args.push(vmlinux.display().to_string());
            }
            None => args.push("--no-vmlinux".to_string()),
        }
        if let Some(range) = daemon.kernel_range {
            args.push("-r".to_string());
            args.push(range.to_string());
        }

        DaemonCommand {
            program: self.opts.daemon.clone(),
            args,
        }
    }

    pub fn start(&self, device: &Device) -> Result<()> {
        device.channel.set_global_field(GlobalField::Enable, 1)?;
        info!("profiler started");
        Ok(())
    }

    /// Flushes pending samples then stops profiling.
    pub fn stop(&self, device: &Device) -> Result<()> {
        device.channel.set_global_field(GlobalField::Dump, 1)?;
        device.channel.set_global_field(GlobalField::Enable, 0)?;
        info!("profiler stopped");
        Ok(())
    }

    /// Makes the daemon close its sample files and drops the current samples.
    pub fn reset(&self) -> Result<()> {
        if let Some(pid) = self.daemon_pid() {
            self.signal(pid, Signal::Hangup)?;
        }

        let current = self.opts.current_samples_dir();
        match fs::remove_dir_all(&current) {
            Ok(()) => info!("removed {}", current.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(Error::SessionDir { path: current, source }),
        }

        Ok(())
    }

    /// Kills the daemon if one is recorded, a no-op otherwise.
    pub fn shutdown(&self) -> Result<()> {
        let Some(pid) = self.daemon_pid() else {
            return Ok(());
        };
        self.signal(pid, Signal::Kill)?;

        let deadline = Instant::now() + self.opts.shutdown_grace;
        while self.host.is_alive(pid) && Instant::now() < deadline {
            thread::sleep(SHUTDOWN_POLL);
        }
        if self.host.is_alive(pid) {
            warn!("daemon pid {} still alive after {:?}", pid, self.opts.shutdown_grace);
        }

        Ok(())
    }

    /// Shuts the daemon down, then unmounts the control filesystem and
    /// removes its mount point.
    pub fn teardown(&self) -> Result<()> {
        self.shutdown()?;

        let root = &self.opts.driver_dir;
        if let Err(e) = self.host.unmount_control_fs(root) {
            warn!("cannot unmount {}: {}", root.display(), e);
        }
        if let Err(e) = fs::remove_dir(root) {
            if e.kind() != ErrorKind::NotFound {
                warn!("cannot remove mount point {}: {}", root.display(), e);
            }
        }

        Ok(())
    }

    pub fn status(&self, device: &Device) -> Status {
        let channel = &device.channel;
        let counters = (0..device.table.counters())
            .map(|counter| match channel.read_counter_field(counter, Field::Enabled) {
                Some(enabled) if enabled > 0 => {
                    let name = channel
                        .read_counter_field(counter, Field::Event)
                        .and_then(|id| u32::try_from(id).ok())
                        .map(|id| device.table.event_name(id, counter))
                        .unwrap_or(UNDEFINED_EVENT);
                    let count = channel.read_counter_field(counter, Field::Count);
                    CounterStatus::Enabled { name, count }
                }
                _ => CounterStatus::Disabled,
            })
            .collect();

        let daemon = match self.daemon_pid() {
            None => DaemonStatus::NotRunning,
            Some(pid) if !self.host.is_alive(pid) => DaemonStatus::Stale { pid },
            Some(pid) => DaemonStatus::Running {
                pid,
                profiling: channel.read_global_field(GlobalField::Enable).unwrap_or(0) != 0,
                samples_received: channel.read_stat(Stat::SampleReceived),
                samples_lost_overflow: channel.read_stat(Stat::SampleLostOverflow),
            },
        };

        Status {
            driver_dir: self.opts.driver_dir.clone(),
            session_dir: self.opts.session_dir.clone(),
            counters,
            daemon,
        }
    }

    // A daemon that is already gone is not an error.
    fn signal(&self, pid: i32, signal: Signal) -> Result<()> {
        match self.host.signal(pid, signal) {
            Ok(()) => {
                info!("sent {:?} to daemon pid {}", signal, pid);
                Ok(())
            }
            Err(e) if e.raw_os_error() == Some(libc::ESRCH) => {
                debug!("daemon pid {} is gone", pid);
                Ok(())
            }
            Err(source) => Err(Error::Signal { pid, source }),
        }
    }
}

fn program(channel: &ControlChannel, counter: usize, it: &Assigned) -> Result<()> {
    channel.set_counter_field(counter, Field::User, 1)?;
    channel.set_counter_field(counter, Field::Kernel, 1)?;
    channel.set_counter_field(counter, Field::UnitMask, 0)?;
    channel.set_counter_field(counter, Field::Enabled, 1)?;
    channel.set_counter_field(counter, Field::Count, it.count)?;
    channel.set_counter_field(counter, Field::Event, it.event.id)?;
    Ok(())
}

// name:id:counter:count:unit_mask:kernel:user
fn daemon_event_spec(counter: usize, it: &Assigned) -> String {
    format!("{}:{}:{}:{}:0:1:1", it.event.name, it.event.id, counter, it.count)
}
