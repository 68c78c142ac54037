//! Errors from creating and driving a [`Display`](crate::Display).

use std::error::Error;
use std::fmt;

use u8shim_core::{PackError, SetupError};

/// Errors from the scoped display handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayError {
    /// The allocator could not provide a display record.
    AllocationFailed,
    /// The configuration was rejected before touching the shim.
    Setup(SetupError),
    /// The shim returned a non-zero status code.
    Shim {
        /// Raw status value.
        status: i32,
    },
    /// A caller buffer is smaller than the record needs.
    BufferTooSmall {
        /// Bytes the current setup needs.
        required: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// A raster could not be packed into the frame buffer.
    Pack(PackError),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed => write!(f, "display record allocation failed"),
            Self::Setup(e) => write!(f, "display setup rejected: {e}"),
            Self::Shim { status } => write!(f, "shim returned status {status}"),
            Self::BufferTooSmall { required, actual } => {
                write!(f, "buffer too small: need {required} bytes, got {actual}")
            }
            Self::Pack(e) => write!(f, "raster packing failed: {e}"),
        }
    }
}

impl Error for DisplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Setup(e) => Some(e),
            Self::Pack(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SetupError> for DisplayError {
    fn from(e: SetupError) -> Self {
        Self::Setup(e)
    }
}

impl From<PackError> for DisplayError {
    fn from(e: PackError) -> Self {
        Self::Pack(e)
    }
}
