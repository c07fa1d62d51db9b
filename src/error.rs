use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of [`Error`], used by the CLI to pick diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad event names or malformed arguments.
    UserInput,
    /// The requested events cannot be scheduled on this CPU.
    Constraint,
    /// The control filesystem, session directory or daemon is unusable.
    Environment,
    /// A counter could not be programmed.
    ControlWrite,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown event name: {0}")]
    UnknownEvent(String),

    #[error("malformed event spec `{0}`, expected name[:count]")]
    MalformedSpec(String),

    #[error("malformed kernel range `{0}`, expected start,end in hexadecimal")]
    MalformedKernelRange(String),

    #[error("event {name} cannot be counted on counter {slot}, see --list-events")]
    IneligibleCounter { name: String, slot: usize },

    #[error("more than {0} events specified")]
    TooManyEvents(usize),

    #[error("all counters are in use, one of the events must be the cycle counter")]
    MissingCycleCounter,

    #[error("cannot write {}", path.display())]
    ControlWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("counter configuration failed for {event}, did you run --setup first?")]
    ConfigureCounter {
        event: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("cannot read {}", path.display())]
    ControlRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unrecognized cpu type: {0}")]
    UnrecognizedCpu(String),

    #[error("cannot mount the control filesystem at {}", path.display())]
    Mount {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot prepare session directory {}", path.display())]
    SessionDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot launch daemon {}", program.display())]
    DaemonLaunch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot signal daemon pid {pid}")]
    Signal {
        pid: i32,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownEvent(_) | Error::MalformedSpec(_) | Error::MalformedKernelRange(_) => {
                ErrorKind::UserInput
            }
            Error::IneligibleCounter { .. } | Error::TooManyEvents(_) | Error::MissingCycleCounter => {
                ErrorKind::Constraint
            }
            Error::ControlWriteFailed { .. } | Error::ConfigureCounter { .. } => {
                ErrorKind::ControlWrite
            }
            Error::ControlRead { .. }
            | Error::UnrecognizedCpu(_)
            | Error::Mount { .. }
            | Error::SessionDir { .. }
            | Error::DaemonLaunch { .. }
            | Error::Signal { .. } => ErrorKind::Environment,
        }
    }
}
