use std::path::Path;

use super::{KernelRange, Opts};
use crate::error::Error;

#[test]
fn test_default_paths() {
    let opts = Opts::default();
    assert_eq!(opts.driver_dir, Path::new("/dev/oprofile"));
    assert_eq!(opts.lock_file(), Path::new("/data/oprofile/lock"));
    assert_eq!(opts.samples_dir(), Path::new("/data/oprofile/samples"));
    assert_eq!(
        opts.current_samples_dir(),
        Path::new("/data/oprofile/samples/current")
    );
}

#[test]
fn test_parse_kernel_range() {
    let range: KernelRange = "c0008000,c0400000".parse().unwrap();
    assert_eq!(range.start, 0xc0008000);
    assert_eq!(range.end, 0xc0400000);
    assert_eq!(range.to_string(), "c0008000,c0400000");

    let range: KernelRange = "0xC0008000, 0xc0400000".parse().unwrap();
    assert_eq!(range.to_string(), "c0008000,c0400000");
}

#[test]
fn test_parse_malformed_kernel_range() {
    for it in ["", "c0008000", "c0008000,", "zz,c0400000", "c0400000,c0008000", "10,10"] {
        let result = it.parse::<KernelRange>();
        assert!(matches!(result, Err(Error::MalformedKernelRange(_))), "{}", it);
    }
}
