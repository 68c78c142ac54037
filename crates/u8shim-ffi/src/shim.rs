//! Record allocation and the accessor functions.
//!
//! Each function is one action on the record with no branching on its
//! state. Nothing here logs, retries or validates beyond a null check.

#![allow(non_snake_case)]

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::os::raw::c_int;
use std::ptr;

use u8shim_core::U8g2;

#[allow(unsafe_code)]
fn record<'a>(u8g2: *const U8g2) -> Option<&'a U8g2> {
    // SAFETY: non-null handles come from `init_u8g2` and stay live until
    // `done`, per caller contract.
    unsafe { u8g2.as_ref() }
}

#[allow(unsafe_code)]
fn record_mut<'a>(u8g2: *mut U8g2) -> Option<&'a mut U8g2> {
    // SAFETY: as in `record`; the caller serialises access to one handle.
    unsafe { u8g2.as_mut() }
}

/// Allocate one zeroed display record.
///
/// Returns null if the allocator cannot satisfy the request. The record
/// must be set up before any display operation uses it, and released with
/// [`done`] exactly once.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn init_u8g2() -> *mut U8g2 {
    // SAFETY: `U8g2` has non-zero size, and all-zero bytes are a valid
    // `U8g2` (integers, a null pointer, and `None`).
    unsafe { alloc_zeroed(Layout::new::<U8g2>()).cast::<U8g2>() }
}

/// Release a record from [`init_u8g2`]. Null is a no-op.
///
/// Any buffer attached with [`setBufferPtr`] is not freed.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn done(u8g2: *mut U8g2) {
    if u8g2.is_null() {
        return;
    }
    // SAFETY: non-null handles were allocated by `init_u8g2` with this
    // exact layout and are released once, per caller contract.
    unsafe { dealloc(u8g2.cast::<u8>(), Layout::new::<U8g2>()) }
}

/// Frame buffer size in bytes for the record's current setup.
///
/// 0 for a null handle or a record that was never set up.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn getBufferSize(u8g2: *const U8g2) -> c_int {
    record(u8g2).map_or(0, |r| r.buffer_size() as c_int)
}

/// Attach a caller-owned frame buffer.
///
/// The buffer must hold at least [`getBufferSize`] bytes and outlive its use
/// by the record. It is neither copied nor freed.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn setBufferPtr(u8g2: *mut U8g2, buf: *mut u8) {
    if let Some(r) = record_mut(u8g2) {
        r.set_buffer_ptr(buf);
    }
}

/// Currently attached frame buffer, or null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn getBufferPtr(u8g2: *const U8g2) -> *mut u8 {
    record(u8g2).map_or(ptr::null_mut(), |r| r.buffer_ptr())
}

/// Buffer width in 8x8 tiles.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn getBufferTileWidth(u8g2: *const U8g2) -> c_int {
    record(u8g2).map_or(0, |r| r.buffer_tile_width() as c_int)
}

/// Buffer height in 8x8 tiles.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn getBufferTileHeight(u8g2: *const U8g2) -> c_int {
    record(u8g2).map_or(0, |r| r.buffer_tile_height() as c_int)
}

/// First panel tile row held in the buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn getBufferCurrTileRow(u8g2: *const U8g2) -> c_int {
    record(u8g2).map_or(0, |r| r.buffer_curr_tile_row() as c_int)
}

/// Move the buffer window to another panel tile row.
///
/// Values outside `0..=255` are truncated, as the underlying field is a byte.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn setBufferCurrTileRow(u8g2: *mut U8g2, row: c_int) {
    if let Some(r) = record_mut(u8g2) {
        r.set_buffer_curr_tile_row(row as u8);
    }
}

/// Drawable width after rotation.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn getDisplayWidth(u8g2: *const U8g2) -> c_int {
    record(u8g2).map_or(0, |r| r.width() as c_int)
}

/// Drawable height after rotation.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn getDisplayHeight(u8g2: *const U8g2) -> c_int {
    record(u8g2).map_or(0, |r| r.height() as c_int)
}

/// Zero the attached buffer over [`getBufferSize`] bytes.
///
/// No-op for a null handle or a record without a buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn clearBuffer(u8g2: *mut U8g2) {
    let Some(r) = record_mut(u8g2) else {
        return;
    };
    let buf = r.buffer_ptr();
    if buf.is_null() {
        return;
    }
    // SAFETY: the caller guarantees the attached buffer holds at least
    // `buffer_size()` writable bytes.
    unsafe { ptr::write_bytes(buf, 0, r.buffer_size()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use u8shim_core::{BufferMode, Rotation, SetupType};

    fn set_up(handle: *mut U8g2, setup: SetupType, mode: BufferMode) {
        record_mut(handle)
            .unwrap()
            .setup(setup.info(), mode, Rotation::R0);
    }

    #[test]
    fn allocate_returns_non_null() {
        let h = init_u8g2();
        assert!(!h.is_null());
        done(h);
    }

    #[test]
    fn fresh_record_reads_as_zero() {
        let h = init_u8g2();
        assert_eq!(getBufferSize(h), 0);
        assert_eq!(getBufferTileWidth(h), 0);
        assert!(getBufferPtr(h).is_null());
        done(h);
    }

    #[test]
    fn release_null_is_noop() {
        done(ptr::null_mut());
    }

    #[test]
    fn null_handle_accessors_are_inert() {
        let null = ptr::null_mut::<U8g2>();
        assert_eq!(getBufferSize(null), 0);
        assert!(getBufferPtr(null).is_null());
        assert_eq!(getBufferTileHeight(null), 0);
        assert_eq!(getDisplayWidth(null), 0);
        setBufferPtr(null, ptr::null_mut());
        setBufferCurrTileRow(null, 3);
        clearBuffer(null);
    }

    #[test]
    fn size_follows_setup() {
        let h = init_u8g2();
        set_up(h, SetupType::Ssd1306Noname128x64, BufferMode::Full);
        assert_eq!(getBufferSize(h), 1024);
        set_up(h, SetupType::Ssd1306Noname128x64, BufferMode::Page1);
        assert_eq!(getBufferSize(h), 128);
        assert_eq!(getBufferTileWidth(h), 16);
        assert_eq!(getBufferTileHeight(h), 1);
        done(h);
    }

    #[test]
    fn set_buffer_ptr_round_trips_and_keeps_size() {
        let h = init_u8g2();
        set_up(h, SetupType::Ssd1306Univision128x32, BufferMode::Full);
        let mut buf = vec![0u8; 512];
        setBufferPtr(h, buf.as_mut_ptr());
        assert_eq!(getBufferPtr(h), buf.as_mut_ptr());
        assert_eq!(getBufferSize(h), 512);
        done(h);
    }

    #[test]
    fn clear_buffer_zeroes_exactly_buffer_size() {
        let h = init_u8g2();
        set_up(h, SetupType::Ssd1306Noname128x64, BufferMode::Page2);
        let mut buf = vec![0xAAu8; 300];
        setBufferPtr(h, buf.as_mut_ptr());
        clearBuffer(h);
        assert!(buf[..256].iter().all(|&b| b == 0));
        assert!(buf[256..].iter().all(|&b| b == 0xAA));
        done(h);
    }

    #[test]
    fn clear_buffer_without_buffer_is_noop() {
        let h = init_u8g2();
        set_up(h, SetupType::Ssd1306Noname128x64, BufferMode::Full);
        clearBuffer(h);
        done(h);
    }

    #[test]
    fn current_tile_row_is_writable() {
        let h = init_u8g2();
        set_up(h, SetupType::Sh1106Noname128x64, BufferMode::Page1);
        setBufferCurrTileRow(h, 6);
        assert_eq!(getBufferCurrTileRow(h), 6);
        done(h);
    }
}
