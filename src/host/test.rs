use std::io::ErrorKind;
use std::path::PathBuf;

use super::{DaemonCommand, Host, Signal, System};

#[test]
fn test_signal_raw() {
    assert_eq!(Signal::Hangup.raw(), libc::SIGHUP);
    assert_eq!(Signal::Kill.raw(), libc::SIGKILL);
}

#[test]
fn test_daemon_command_display() {
    let command = DaemonCommand {
        program: PathBuf::from("oprofiled"),
        args: vec![
            "--session-dir=/data/oprofile".to_string(),
            "--events=CYCLES:0:0:15000:0:1:1".to_string(),
            "--no-vmlinux".to_string(),
        ],
    };
    assert_eq!(
        command.to_string(),
        "oprofiled --session-dir=/data/oprofile --events=CYCLES:0:0:15000:0:1:1 --no-vmlinux"
    );

    let command = DaemonCommand {
        program: PathBuf::from("oprofiled"),
        args: vec![],
    };
    assert_eq!(command.to_string(), "oprofiled");
}

#[test]
fn test_is_alive() {
    assert!(System.is_alive(std::process::id() as _));
    assert!(!System.is_alive(0));
    assert!(!System.is_alive(-1));
    assert!(!System.is_alive(i32::MAX));
}

#[test]
fn test_signal_rejects_process_groups() {
    let err = System.signal(0, Signal::Hangup).unwrap_err();
    assert_eq!(err.raw_os_error(), Some(libc::ESRCH));
    let err = System.signal(-1, Signal::Kill).unwrap_err();
    assert_eq!(err.raw_os_error(), Some(libc::ESRCH));
}

#[test]
fn test_signal_missing_process() {
    let err = System.signal(i32::MAX, Signal::Hangup).unwrap_err();
    assert_eq!(err.raw_os_error(), Some(libc::ESRCH));
}

#[test]
fn test_launch_missing_daemon() {
    let command = DaemonCommand {
        program: PathBuf::from("/nonexistent/oprofiled"),
        args: vec![],
    };
    let err = System.launch_daemon(&command).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
