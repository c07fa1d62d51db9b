
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use opctl::assign::{EventSpec, Selection};
use opctl::config::{DaemonOpts, KernelRange, Opts, DAEMON, DRIVER_DIR, SESSION_DIR};
use opctl::control::Device;
use opctl::host::Host;
use opctl::session::SessionManager;

#[derive(Debug, Parser)]
#[command(name = "opctl", version, about = "Control the oprofile profiler")]
pub struct Args {
    /// List event types of this CPU
    #[arg(long)]
    pub list_events: bool,

    /// Recreate the session directory and mount the driver
    #[arg(long)]
    pub setup: bool,

    /// Setup and select the default event of this CPU
    #[arg(long)]
    pub quick: bool,

    /// Show the configuration and the daemon state
    #[arg(long)]
    pub status: bool,

    /// Start data collection
    #[arg(long)]
    pub start: bool,

    /// Stop data collection
    #[arg(long)]
    pub stop: bool,

    /// Clear out data from the current session
    #[arg(long)]
    pub reset: bool,

    /// Kill the daemon and unmount the driver
    #[arg(long)]
    pub shutdown: bool,

    /// Choose an event, name[:count], may be given multiple times
    #[arg(short = 'e', long = "event", value_name = "EVENTSPEC")]
    pub events: Vec<EventSpec>,

    /// Kernel image with symbols
    #[arg(long, value_name = "FILE")]
    pub vmlinux: Option<PathBuf>,

    /// Kernel text address range in hexadecimal
    #[arg(long, value_name = "START,END")]
    pub kernel_range: Option<KernelRange>,

    #[arg(long, env = "OPCTL_DRIVER_DIR", default_value = DRIVER_DIR)]
    pub driver_dir: PathBuf,

    #[arg(long, env = "OPCTL_SESSION_DIR", default_value = SESSION_DIR)]
    pub session_dir: PathBuf,

    /// Sampling daemon executable
    #[arg(long, env = "OPCTL_DAEMON", default_value = DAEMON)]
    pub daemon: PathBuf,

    /// Log every control write, mount and signal
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn opts(&self) -> Opts {
        Opts {
            driver_dir: self.driver_dir.clone(),
            session_dir: self.session_dir.clone(),
            daemon: self.daemon.clone(),
            ..Default::default()
        }
    }

    pub fn daemon_opts(&self) -> DaemonOpts {
        DaemonOpts {
            vmlinux: self.vmlinux.clone(),
            kernel_range: self.kernel_range,
        }
    }
}

// Discovers the device on first use.
fn device<'a, H: Host>(session: &SessionManager<H>, slot: &'a mut Option<Device>) -> Result<&'a Device> {
    let device = match slot.take() {
        Some(device) => device,
        None => session.device().context("cannot access the profiling driver")?,
    };
    Ok(slot.insert(device))
}

/// Runs the requested operations in a fixed order: status, shutdown,
/// list-events, quick, reset, setup, configure, start, stop.
pub fn run<H: Host>(args: &Args, session: &SessionManager<H>) -> Result<()> {
    let mut slot = None;

    if args.status {
        let device = device(session, &mut slot)?;
        print!("{}", session.status(device));
    }

    if args.shutdown {
        session.teardown().context("shutdown failed")?;
        slot = None;
    }

    if args.list_events {
        let device = device(session, &mut slot)?;
        print!("{}", device.table.listing());
    }

    let mut specs = args.events.clone();
    let mut setup = args.setup;
    if args.quick {
        let device = device(session, &mut slot)?;
        specs.push(EventSpec {
            name: device.table.default_event.to_string(),
            count: None,
        });
        setup = true;
    }

    // Rejected events abort before anything is changed.
    let selection = if specs.is_empty() {
        None
    } else {
        let device = device(session, &mut slot)?;
        Some(Selection::from_specs(&specs, device.table)?)
    };

    if args.reset {
        session.reset().context("reset failed")?;
    }

    if setup {
        session.setup().context("setup failed")?;
    }

    if let Some(selection) = selection {
        let device = device(session, &mut slot)?;
        let pid = session.configure(device, &selection, &args.daemon_opts())?;
        debug!("daemon started as pid {}", pid);
    }

    if args.start {
        let device = device(session, &mut slot)?;
        session.start(device)?;
    }

    if args.stop {
        let device = device(session, &mut slot)?;
        session.stop(device)?;
    }

    Ok(())
}
