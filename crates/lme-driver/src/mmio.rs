//! Memory-mapped access to an LME register window.
//!
//! [`RegisterIo`] is the seam between the operation layer and the transport:
//! the real implementation maps the block's register window from a file
//! (a UIO node, or anything else that exposes the instance's 64 KiB of
//! register space), and [`crate::sim::SimRegisters`] stands in for hardware
//! in tests.

// MMIO registers are 4-byte aligned by hardware, the pointer casts are safe.
#![allow(clippy::cast_ptr_alignment)]

use crate::error::{LmeError, Result};
use lme_chip::bank::DIRECT_BASE;
use lme_chip::regs::MAP_SPAN;
use rustix::mm::{mmap, munmap, MapFlags, ProtFlags};
use std::fs::{File, OpenOptions};
use std::os::unix::io::AsFd;
use std::path::Path;
use std::ptr::NonNull;

/// Raw 32-bit register access at byte offsets from the instance base.
///
/// Offsets are produced from the [`lme_chip::regs`] tables plus a
/// [`lme_chip::bank::CorexSet`] window base; implementations may assume they
/// stay below [`span()`](Self::span).
pub trait RegisterIo {
    /// Read the register at `offset`.
    fn read(&self, offset: u32) -> u32;

    /// Write the register at `offset`.
    fn write(&mut self, offset: u32, value: u32);

    /// Bytes of register space this transport must cover.
    #[must_use]
    fn span() -> usize {
        (DIRECT_BASE + MAP_SPAN) as usize
    }
}

/// Memory-mapped register window of one hardware instance.
///
/// Keeps the backing file open for the lifetime of the mapping and unmaps
/// on drop.
#[derive(Debug)]
pub struct MappedRegion {
    ptr: NonNull<u8>,
    size: usize,
    _file: File,
}

impl MappedRegion {
    /// Map the register window exposed by `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is smaller than the
    /// register map, or the mapping fails.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;

        // Truncation acceptable: the window is 64 KiB.
        #[allow(clippy::cast_possible_truncation)]
        let size = file.metadata()?.len() as usize;
        let required = <Self as RegisterIo>::span();
        if size < required {
            return Err(LmeError::WindowTooSmall { size, required });
        }

        // SAFETY: the fd was just opened read/write and size is non-zero.
        // MAP_SHARED is required for device memory; the mapping is released
        // in Drop and the file handle is held alongside it.
        let ptr = unsafe {
            let addr = mmap(
                std::ptr::null_mut(),
                size,
                ProtFlags::READ | ProtFlags::WRITE,
                MapFlags::SHARED,
                file.as_fd(),
                0,
            )
            .map_err(|e| std::io::Error::from_raw_os_error(e.raw_os_error()))?;

            NonNull::new(addr.cast::<u8>()).expect("mmap returns non-null on success")
        };

        tracing::debug!("mapped {} ({size:#x} bytes at {ptr:p})", path.display());

        Ok(Self { ptr, size, _file: file })
    }

    /// Size of the mapping in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl RegisterIo for MappedRegion {
    fn read(&self, offset: u32) -> u32 {
        let offset = offset as usize;
        debug_assert!(offset + 4 <= self.size);

        // SAFETY: offset comes from the static register tables and stays
        // below the span validated in open(). Volatile is required, the
        // hardware changes these values behind the compiler's back.
        let value = unsafe { self.ptr.as_ptr().add(offset).cast::<u32>().read_volatile() };
        tracing::trace!("rd {offset:#06x} = {value:#010x}");
        value
    }

    fn write(&mut self, offset: u32, value: u32) {
        let offset = offset as usize;
        debug_assert!(offset + 4 <= self.size);

        tracing::trace!("wr {offset:#06x} = {value:#010x}");
        // SAFETY: same bounds argument as read(); volatile because register
        // writes have side effects and must not be reordered or elided.
        unsafe {
            self.ptr.as_ptr().add(offset).cast::<u32>().write_volatile(value);
        }
    }
}

impl Drop for MappedRegion {
    fn drop(&mut self) {
        // SAFETY: ptr/size describe the mapping created in open().
        if let Err(e) = unsafe { munmap(self.ptr.as_ptr().cast(), self.size) } {
            tracing::warn!("munmap failed: {e}");
        }
    }
}
