//! Error types for display setup and configuration.

use std::error::Error;
use std::fmt;

use crate::config::Bus;
use crate::geometry::SetupType;

/// Errors from decoding or validating a display configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// Integer tag does not name a known controller setup.
    UnknownSetupType {
        /// The rejected tag.
        tag: i32,
    },
    /// Controller name is not in the catalog.
    UnknownSetupName {
        /// The rejected name.
        name: String,
    },
    /// Integer tag does not name a bus.
    InvalidBus {
        /// The rejected tag.
        tag: i32,
    },
    /// Integer tag does not name a buffer mode.
    InvalidBufferMode {
        /// The rejected tag.
        tag: i32,
    },
    /// Integer tag does not name a rotation.
    InvalidRotation {
        /// The rejected tag.
        tag: i32,
    },
    /// The controller cannot be driven over the requested bus.
    UnsupportedBus {
        /// Controller that was requested.
        setup: SetupType,
        /// Bus that was requested.
        bus: Bus,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSetupType { tag } => write!(f, "unknown setup type tag {tag}"),
            Self::UnknownSetupName { name } => write!(f, "unknown setup type '{name}'"),
            Self::InvalidBus { tag } => write!(f, "invalid bus tag {tag}"),
            Self::InvalidBufferMode { tag } => write!(f, "invalid buffer mode tag {tag}"),
            Self::InvalidRotation { tag } => write!(f, "invalid rotation tag {tag}"),
            Self::UnsupportedBus { setup, bus } => {
                write!(f, "setup type {} not supported for {bus}", setup.name())
            }
        }
    }
}

impl Error for SetupError {}

/// Errors from packing a raster into the vertical-page buffer layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PackError {
    /// Source raster holds fewer bytes than its dimensions need.
    RasterTooShort {
        /// Bytes the dimensions need.
        required: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// Destination buffer holds fewer bytes than its dimensions need.
    BufferTooShort {
        /// Bytes the dimensions need.
        required: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// The byte length for these dimensions does not fit in `usize`.
    DimensionsOverflow {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RasterTooShort { required, actual } => {
                write!(f, "raster too short: need {required} bytes, got {actual}")
            }
            Self::BufferTooShort { required, actual } => {
                write!(f, "buffer too short: need {required} bytes, got {actual}")
            }
            Self::DimensionsOverflow { width, height } => {
                write!(f, "raster dimensions {width} x {height} overflow")
            }
        }
    }
}

impl Error for PackError {}
