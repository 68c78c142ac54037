//! Core types for the u8shim display helper layer.
//!
//! This is the leaf crate with zero internal dependencies. It models the
//! parts of the u8g2 display-state record that the helper shim reaches
//! into, the controller geometry table, and the setup step that fills
//! geometry and buffer-tile fields.
//!
//! # Buffer layout
//!
//! A frame buffer holds `tile_buf_height` rows of 8x8 pixel tiles. Each
//! byte is a vertical strip of 8 pixels, least significant bit on top:
//!
//! ```text
//! byte index = (y / 8) * pixel_buf_width + x
//! bit        = y % 8
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod raster;
pub mod record;

pub use config::{BufferMode, Bus, DisplayConfig, Rotation};
pub use error::{PackError, SetupError};
pub use geometry::{DisplayInfo, SetupType};
pub use raster::pack_raster;
pub use record::U8g2;
