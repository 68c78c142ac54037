//! C-compatible status codes for the setup entry points.
//!
//! The four record accessors keep the plain signatures callers expect;
//! only the functions added on top of them report a [`ShimStatus`].

use u8shim_core::SetupError;

/// C-compatible status code.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShimStatus {
    /// Success.
    Ok = 0,
    /// A pointer argument is null or a string is not valid UTF-8.
    InvalidArgument = -1,
    /// Setup type tag or name is not in the catalog.
    UnknownSetup = -2,
    /// Bus tag is out of range.
    InvalidBus = -3,
    /// Buffer mode tag is out of range.
    InvalidBufferMode = -4,
    /// Rotation tag is out of range.
    InvalidRotation = -5,
    /// Controller cannot be driven over the requested bus.
    UnsupportedBus = -6,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&SetupError> for ShimStatus {
    fn from(e: &SetupError) -> Self {
        match e {
            SetupError::UnknownSetupType { .. } | SetupError::UnknownSetupName { .. } => {
                ShimStatus::UnknownSetup
            }
            SetupError::InvalidBus { .. } => ShimStatus::InvalidBus,
            SetupError::InvalidBufferMode { .. } => ShimStatus::InvalidBufferMode,
            SetupError::InvalidRotation { .. } => ShimStatus::InvalidRotation,
            SetupError::UnsupportedBus { .. } => ShimStatus::UnsupportedBus,
        }
    }
}
