//! u8shim: scoped display handles over the u8g2 helper shim.
//!
//! This is the top-level facade crate. It wraps the C entry points of
//! `u8shim-ffi` in a [`Display`] that allocates its record on construction
//! and releases it on drop, and re-exports the configuration types from
//! `u8shim-core`.
//!
//! # Quick start
//!
//! ```rust
//! use u8shim::prelude::*;
//!
//! let config = DisplayConfig::new(SetupType::Ssd1306Noname128x64)
//!     .with_bus(Bus::HwSpi)
//!     .with_buffer_mode(BufferMode::Full);
//! let mut display = Display::new(config).unwrap();
//! assert_eq!(display.buffer_size(), 1024);
//!
//! display.buffer_mut()[0] = 0xFF;
//! display.clear();
//! assert_eq!(display.buffer()[0], 0);
//! // Dropping `display` releases the record, then the buffer.
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod display;
pub mod error;

pub use display::Display;
pub use error::DisplayError;

/// Core types: configuration, record layout, catalog.
pub use u8shim_core as types;

/// Common imports.
pub mod prelude {
    pub use crate::display::Display;
    pub use crate::error::DisplayError;
    pub use u8shim_core::{BufferMode, Bus, DisplayConfig, Rotation, SetupType};
}
