use std::ffi::{CStr, CString};
use std::io::{Error, Result};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr::null;

fn c_path(path: &Path) -> Result<CString> {
    CString::new(path.as_os_str().as_bytes()).map_err(Error::other)
}

pub fn mount(source: &CStr, target: &Path, fstype: &CStr) -> Result<()> {
    let target = c_path(target)?;
    let result = unsafe {
        libc::mount(
            source.as_ptr(),
            target.as_ptr(),
            fstype.as_ptr(),
            0,
            null(),
        )
    };
    if result != -1 {
        Ok(())
    } else {
        Err(Error::last_os_error())
    }
}

pub fn umount(target: &Path) -> Result<()> {
    let target = c_path(target)?;
    let result = unsafe { libc::umount(target.as_ptr()) };
    if result != -1 {
        Ok(())
    } else {
        Err(Error::last_os_error())
    }
}

pub fn kill(pid: i32, sig: i32) -> Result<()> {
    // Zero and negative pids address process groups.
    if pid <= 0 {
        return Err(Error::from_raw_os_error(libc::ESRCH));
    }
    let result = unsafe { libc::kill(pid, sig) };
    if result != -1 {
        Ok(())
    } else {
        Err(Error::last_os_error())
    }
}
