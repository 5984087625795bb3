//! Writing fetched fixture bytes to their destination.
//!
//! Bytes go to a `.part` sibling first and are renamed over the destination
//! once fully written and synced, so an existing fixture is replaced whole.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temp path used while writing `destination` (e.g. `small.svg.part`).
pub fn part_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".part");
    destination.with_file_name(name)
}

fn write_part(part: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(part)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Write `bytes` verbatim to `destination`, overwriting any existing file.
/// No `.part` file is left behind on any path.
pub fn persist(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    let part = part_path(destination);
    let res = write_part(&part, bytes).and_then(|()| fs::rename(&part, destination));
    if res.is_err() {
        let _ = fs::remove_file(&part);
    }
    res
}
