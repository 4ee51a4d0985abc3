use std::{fs::File, path::Path};

use memmap2::{Mmap, MmapMut, MmapOptions};

use crate::{Error, Result};

/// Creates a read-only memory map covering the whole file.
#[inline]
pub fn create_mmap(path: &Path, file: &File) -> Result<Mmap> {
    unsafe { MmapOptions::new().map(file) }.map_err(|source| Error::MappingFailed {
        path: path.to_owned(),
        source,
    })
}

/// Creates a mutable memory map covering the whole file.
#[inline]
pub fn create_mmap_mut(path: &Path, file: &File) -> Result<MmapMut> {
    unsafe { MmapOptions::new().map_mut(file) }.map_err(|source| Error::MappingFailed {
        path: path.to_owned(),
        source,
    })
}

/// Writes data to a memory-mapped region.
///
/// # Panics
/// Panics if `offset + data.len()` exceeds `mmap.len()` or if the addition overflows.
#[inline]
pub fn write_to_mmap(mmap: &mut MmapMut, offset: usize, data: &[u8]) {
    let end = offset
        .checked_add(data.len())
        .expect("offset + data.len() overflow");
    assert!(end <= mmap.len(), "write beyond mmap bounds: end={end}, mmap.len()={}", mmap.len());

    mmap[offset..end].copy_from_slice(data);
}
