
use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::event::CpuEventTable;
use crate::host::Host;

/// Field naming the CPU model, relative to the control root.
pub const CPU_TYPE: &str = "cpu_type";

/// Per counter field under `<root>/<counter>/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Enabled,
    Event,
    Count,
    User,
    Kernel,
    UnitMask,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Enabled => "enabled",
            Field::Event => "event",
            Field::Count => "count",
            Field::User => "user",
            Field::Kernel => "kernel",
            Field::UnitMask => "unit_mask",
        }
    }
}

/// Field directly under the control root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobalField {
    /// Profiling on or off.
    Enable,
    /// Flushes in-flight samples to the daemon.
    Dump,
}

impl GlobalField {
    pub fn name(self) -> &'static str {
        match self {
            GlobalField::Enable => "enable",
            GlobalField::Dump => "dump",
        }
    }
}

/// Read-only driver statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stat {
    SampleReceived,
    SampleLostOverflow,
}

impl Stat {
    pub fn path(self) -> &'static str {
        match self {
            Stat::SampleReceived => "stats/cpu0/sample_received",
            Stat::SampleLostOverflow => "stats/cpu0/sample_lost_overflow",
        }
    }
}

/// Client of the control filesystem.
///
/// Every write opens, writes and closes the field. Nothing is cached, the
/// daemon may change the same fields between calls.
#[derive(Clone, Debug)]
pub struct ControlChannel {
    root: PathBuf,
}

impl ControlChannel {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn counter_path(&self, counter: usize, field: Field) -> PathBuf {
        self.root.join(counter.to_string()).join(field.name())
    }

    pub fn set_counter_field(&self, counter: usize, field: Field, value: impl Display) -> Result<()> {
        write_field(&self.counter_path(counter, field), value)
    }

    pub fn set_global_field(&self, field: GlobalField, value: impl Display) -> Result<()> {
        write_field(&self.root.join(field.name()), value)
    }

    pub fn read_counter_field(&self, counter: usize, field: Field) -> Option<i64> {
        read_numeric_field(self.counter_path(counter, field))
    }

    pub fn read_global_field(&self, field: GlobalField) -> Option<i64> {
        read_numeric_field(self.root.join(field.name()))
    }

    pub fn read_stat(&self, stat: Stat) -> Option<i64> {
        read_numeric_field(self.root.join(stat.path()))
    }

    /// Whether the control filesystem is mounted at the root.
    pub fn is_populated(&self) -> bool {
        self.root.join(CPU_TYPE).is_file()
    }

    pub fn cpu_type(&self) -> Result<String> {
        let path = self.root.join(CPU_TYPE);
        let cpu_type = fs::read_to_string(&path).map_err(|source| Error::ControlRead { path, source })?;
        Ok(cpu_type.trim().to_string())
    }

    /// Mounts the control filesystem unless it is already there.
    pub fn mount(&self, host: &impl Host) -> Result<()> {
        if self.is_populated() {
            return Ok(());
        }

        let mount = |source| Error::Mount {
            path: self.root.clone(),
            source,
        };
        match fs::create_dir(&self.root) {
            Err(e) if e.kind() != ErrorKind::AlreadyExists => return Err(mount(e)),
            _ => {}
        }
        host.mount_control_fs(&self.root).map_err(mount)?;
        info!("mounted control filesystem at {}", self.root.display());

        Ok(())
    }

    /// Mounts the control filesystem if needed and selects the catalog
    /// matching its CPU model.
    pub fn discover(root: impl Into<PathBuf>, host: &impl Host) -> Result<Device> {
        let channel = Self::new(root);
        channel.mount(host)?;

        let cpu_type = channel.cpu_type()?;
        let table = CpuEventTable::find(&cpu_type).ok_or(Error::UnrecognizedCpu(cpu_type))?;
        debug!("cpu type {} with {} counters", table.cpu_type, table.counters());

        Ok(Device { channel, table })
    }
}

/// A mounted control filesystem and the catalog of its CPU.
#[derive(Clone, Debug)]
pub struct Device {
    pub channel: ControlChannel,
    pub table: &'static CpuEventTable,
}

fn write_field(path: &Path, value: impl Display) -> Result<()> {
    let content = value.to_string();
    debug!("configure {} ({})", path.display(), content);

    let failed = |source| Error::ControlWriteFailed {
        path: path.to_path_buf(),
        source,
    };
    // Driver fields exist already, they are never created.
    let mut file = OpenOptions::new().write(true).open(path).map_err(failed)?;
    file.write_all(content.as_bytes()).map_err(failed)
}

/// Reads a decimal field, `None` if it is missing, unreadable or not a number.
pub fn read_numeric_field(path: impl AsRef<Path>) -> Option<i64> {
    let path = path.as_ref();
    let mut content = String::new();
    let result = File::open(path).and_then(|mut file| file.read_to_string(&mut content));
    if let Err(e) = result {
        debug!("cannot read {}: {}", path.display(), e);
        return None;
    }

    content.trim().parse().ok()
}
