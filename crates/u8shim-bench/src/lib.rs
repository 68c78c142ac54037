//! Benchmark inputs for the u8shim helper layer.
//!
//! - [`random_raster`]: deterministic 1-bit raster content via seed
//! - [`bench_configs`]: one full-buffer config per catalog entry

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use u8shim_core::raster::raster_len;
use u8shim_core::{BufferMode, DisplayConfig, SetupType};

/// Row-major, MSB-first raster of `width` x `height` filled from `seed`.
pub fn random_raster(seed: u64, width: usize, height: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let len = raster_len(width, height).expect("raster dimensions overflow usize");
    let mut raster = vec![0u8; len];
    rng.fill_bytes(&mut raster);
    raster
}

/// Full-buffer config for every catalog setup, on its first supported bus.
pub fn bench_configs() -> Vec<DisplayConfig> {
    SetupType::ALL
        .iter()
        .map(|&setup| {
            DisplayConfig::new(setup)
                .with_bus(setup.buses()[0])
                .with_buffer_mode(BufferMode::Full)
        })
        .collect()
}
