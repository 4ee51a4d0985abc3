#![doc = include_str!("../README.md")]

use std::{
    fs::{File, OpenOptions},
    os::unix::io::AsRawFd,
    path::Path,
};

use log::debug;

mod buffer;
pub mod error;
mod mmap;

pub use buffer::*;
pub use error::*;
use mmap::*;

/// Loads the entire contents of a file as a read-only memory-mapped buffer.
///
/// The file is opened for shared read access and its size is queried once;
/// the mapping is not re-validated if the file changes afterwards, so callers
/// needing consistency against concurrent writers must serialize externally.
/// The file handle is closed before this returns; only the mapped view stays
/// alive, and it is unmapped when the returned [`FileMap`] is dropped.
///
/// A zero-length file yields an empty buffer without creating a mapping.
pub fn load(path: impl AsRef<Path>) -> Result<FileMap> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| Error::from_open(path, e))?;
    debug!("File opened.");

    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(FileMap::empty());
    }
    if usize::try_from(len).is_err() {
        return Err(Error::TooLarge {
            path: path.to_owned(),
            len,
        });
    }

    let map = create_mmap(path, &file)?;
    debug!("Mmap created.");

    // `file` drops here; the mapped view outlives the handle that created it.
    Ok(FileMap::new(map))
}

/// Saves `data` as the complete contents of the file at `path`, replacing any
/// existing file there.
///
/// The destination is created (or truncated), sized to exactly `data.len()`
/// bytes, mapped read-write, filled with a single copy, and flushed to
/// backing storage before this returns. All handles and the mapping are
/// released before returning, in reverse acquisition order, on success and on
/// every error path.
///
/// There is no temp-file staging: a failure after creation can leave an empty
/// or truncated file at `path`.
///
/// An empty `data` slice produces an empty file without creating a mapping.
pub fn save(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::from_open(path, e))?;
    debug!("File created.");

    if data.is_empty() {
        file.sync_all()?;
        return Ok(());
    }

    file.set_len(data.len() as u64)?;
    debug!("File extended.");

    let mut map = create_mmap_mut(path, &file)?;
    debug!("Mmap created.");

    write_to_mmap(&mut map, 0, data);
    map.flush()?;
    debug!("Mmap flushed.");

    unsafe {
        libc::fsync(file.as_raw_fd());
    }

    // Drop order unmaps the view before the file handle closes.
    Ok(())
}
