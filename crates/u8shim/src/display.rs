//! Scoped ownership of one display record and its frame buffer.
//!
//! [`Display`] allocates the record on construction and releases it on
//! drop, so every successful allocation is paired with exactly one release.
//! The frame buffer is owned alongside the record and outlives every use
//! the record makes of it.

use std::ptr::NonNull;

use u8shim_core::{pack_raster, DisplayConfig, U8g2};
use u8shim_ffi::{self as ffi, ShimStatus};

use crate::error::DisplayError;

/// One set-up display record plus the frame buffer attached to it.
///
/// Neither `Send` nor `Sync`: a record is driven from one thread.
pub struct Display {
    handle: NonNull<U8g2>,
    buffer: Box<[u8]>,
    config: DisplayConfig,
}

impl Display {
    /// Allocate, set up and attach a zeroed buffer of exactly the size the
    /// setup requires.
    pub fn new(config: DisplayConfig) -> Result<Self, DisplayError> {
        config.validate()?;
        let handle = NonNull::new(ffi::init_u8g2()).ok_or(DisplayError::AllocationFailed)?;
        // From here on, drop releases the record on every early return.
        let mut display = Display {
            handle,
            buffer: Box::default(),
            config,
        };

        let status = ffi::u8shim_setup(
            handle.as_ptr(),
            config.setup as i32,
            config.bus as i32,
            config.buffer_mode as i32,
            config.rotation as i32,
        );
        if status != ShimStatus::Ok as i32 {
            return Err(DisplayError::Shim { status });
        }

        display.buffer = vec![0u8; display.buffer_size()].into_boxed_slice();
        display.attach();

        log::debug!(
            "Size {} x {}, buffer {} bytes, {} over {}",
            display.width(),
            display.height(),
            display.buffer_size(),
            config.setup.name(),
            config.bus
        );
        Ok(display)
    }

    /// Point the record at the owned buffer through a freshly derived
    /// pointer. Any pointer handed out earlier is stale once the buffer has
    /// been borrowed mutably.
    fn attach(&mut self) -> *mut U8g2 {
        ffi::setBufferPtr(self.handle.as_ptr(), self.buffer.as_mut_ptr());
        self.handle.as_ptr()
    }

    /// Configuration the display was created from.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Raw record pointer for calls into the display library.
    ///
    /// The record's buffer pointer is re-attached on every call, so it stays
    /// usable until the next call that borrows the buffer (`buffer_mut`,
    /// `clear`, `load_raster`, `replace_buffer`); call this again after
    /// those. Valid until `self` is dropped. Do not pass it to `done`.
    ///
    /// Setting the record up again through this pointer can make it report
    /// a larger size than the owned buffer. The views on `Display` stay
    /// within the owned buffer, but the library itself would not.
    pub fn as_ptr(&mut self) -> *mut U8g2 {
        self.attach()
    }

    /// Drawable width after rotation.
    pub fn width(&self) -> u16 {
        ffi::getDisplayWidth(self.handle.as_ptr()) as u16
    }

    /// Drawable height after rotation.
    pub fn height(&self) -> u16 {
        ffi::getDisplayHeight(self.handle.as_ptr()) as u16
    }

    /// Bytes the record reads from its buffer.
    pub fn buffer_size(&self) -> usize {
        ffi::getBufferSize(self.handle.as_ptr()) as usize
    }

    /// Buffer width in pixels (tile width times 8).
    pub fn buffer_pixel_width(&self) -> usize {
        ffi::getBufferTileWidth(self.handle.as_ptr()) as usize * 8
    }

    /// Buffer height in pixels (tile rows held times 8).
    pub fn buffer_pixel_height(&self) -> usize {
        ffi::getBufferTileHeight(self.handle.as_ptr()) as usize * 8
    }

    // Never past the owned allocation, whatever the record reports.
    fn used_len(&self) -> usize {
        self.buffer_size().min(self.buffer.len())
    }

    /// The region of the attached buffer the record uses.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..self.used_len()]
    }

    /// Mutable view of the region of the attached buffer the record uses.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        let len = self.used_len();
        &mut self.buffer[..len]
    }

    /// Zero the buffer.
    pub fn clear(&mut self) {
        self.buffer_mut().fill(0);
    }

    /// First panel tile row the buffer currently holds (page modes).
    pub fn current_tile_row(&self) -> u8 {
        ffi::getBufferCurrTileRow(self.handle.as_ptr()) as u8
    }

    /// Move the buffer window to another panel tile row.
    pub fn set_current_tile_row(&mut self, row: u8) {
        ffi::setBufferCurrTileRow(self.handle.as_ptr(), row as i32);
    }

    /// Replace the buffer content with a row-major, MSB-first 1-bit raster
    /// of the buffer's pixel dimensions.
    pub fn load_raster(&mut self, raster: &[u8]) -> Result<(), DisplayError> {
        let (w, h) = (self.buffer_pixel_width(), self.buffer_pixel_height());
        pack_raster(raster, w, h, self.buffer_mut())?;
        Ok(())
    }

    /// Attach a caller buffer, returning the previous one.
    ///
    /// Fails without changing anything if `buffer` is shorter than
    /// [`buffer_size`](Self::buffer_size).
    pub fn replace_buffer(&mut self, buffer: Box<[u8]>) -> Result<Box<[u8]>, DisplayError> {
        let required = self.buffer_size();
        if buffer.len() < required {
            return Err(DisplayError::BufferTooSmall {
                required,
                actual: buffer.len(),
            });
        }
        let old = std::mem::replace(&mut self.buffer, buffer);
        self.attach();
        Ok(old)
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        log::debug!("Done {}", self.config.setup.name());
        // Runs before the buffer field drops, so the record never points at
        // freed memory.
        ffi::done(self.handle.as_ptr());
    }
}

impl std::fmt::Debug for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Display")
            .field("setup", &self.config.setup.name())
            .field("width", &self.width())
            .field("height", &self.height())
            .field("buffer_size", &self.buffer_size())
            .finish()
    }
}
