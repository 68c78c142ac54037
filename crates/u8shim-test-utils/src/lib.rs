//! Test utilities for u8shim development.
//!
//! Provides a [`CountingAllocator`] for leak checks across the C boundary
//! and geometry fixtures shared by the integration tests.

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alloc;
pub mod fixtures;

pub use alloc::{AllocSnapshot, CountingAllocator};
pub use fixtures::{expected_buffer_size, KNOWN_SIZES};
