//! C ABI helper shim for the u8g2 display record.
//!
//! The u8g2 accessors for the frame buffer are macros, which a binding
//! generator cannot call. This crate exposes them, plus allocation and
//! release of the record itself, as plain C functions over a raw
//! `u8g2_t *`. The symbol names match the ones existing bindings link
//! against (`init_u8g2`, `done`, `getBufferSize`, `setBufferPtr`, ...).
//!
//! This is the only crate in the workspace that contains `unsafe` code.
//! Null handles are tolerated (reads return 0, writes are no-ops); every
//! other misuse (double release, dangling or undersized buffers) remains
//! the caller's responsibility.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, converting a caught panic into `ShimStatus::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(code) => code,
            Err(_) => $crate::status::ShimStatus::Panicked as i32,
        }
    };
}

pub mod setup;
pub mod shim;
pub mod status;

pub use setup::{u8shim_setup, u8shim_setup_by_name};
pub use shim::{
    clearBuffer, done, getBufferCurrTileRow, getBufferPtr, getBufferSize, getBufferTileHeight,
    getBufferTileWidth, getDisplayHeight, getDisplayWidth, init_u8g2, setBufferCurrTileRow,
    setBufferPtr,
};
pub use status::ShimStatus;
pub use u8shim_core::U8g2;
