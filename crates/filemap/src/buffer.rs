use std::{fmt, ops::Deref};

use memmap2::Mmap;

/// Owned read-only buffer holding the entire contents of a file.
///
/// Created by [`load`](crate::load). The handle is the sole owner of the
/// mapped region and unmaps it exactly once when dropped, so releasing twice
/// or reading after release cannot be expressed.
#[must_use = "FileMap unmaps its contents when dropped"]
pub struct FileMap {
    // None only for zero-length files, which are never mapped.
    map: Option<Mmap>,
}

impl FileMap {
    #[inline]
    pub(crate) fn new(map: Mmap) -> Self {
        Self { map: Some(map) }
    }

    #[inline]
    pub(crate) fn empty() -> Self {
        Self { map: None }
    }

    /// Number of bytes in the buffer. Equals the file's size at open time.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// The mapped bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.map.as_deref().unwrap_or_default()
    }

    /// Base address of the buffer, valid for [`len`](Self::len) readable bytes.
    ///
    /// The address stays valid until the `FileMap` is dropped.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.as_slice().as_ptr()
    }
}

impl Deref for FileMap {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for FileMap {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for FileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileMap").field("len", &self.len()).finish()
    }
}
