//! Geometry fixtures with independently computed buffer sizes.

use u8shim_core::{BufferMode, SetupType};

/// Published full/page buffer sizes for a selection of setups.
pub const KNOWN_SIZES: &[(SetupType, BufferMode, usize)] = &[
    (SetupType::Ssd1306Noname128x64, BufferMode::Full, 1024),
    (SetupType::Ssd1306Noname128x64, BufferMode::Page1, 128),
    (SetupType::Ssd1306Noname128x64, BufferMode::Page2, 256),
    (SetupType::Ssd1306Univision128x32, BufferMode::Full, 512),
    (SetupType::Ssd1306Er72x40, BufferMode::Full, 360),
    (SetupType::Ssd1306Er64x48, BufferMode::Full, 384),
    (SetupType::Ssd1306Er96x16, BufferMode::Full, 192),
    (SetupType::Sh1106Generic64x32, BufferMode::Full, 256),
    (SetupType::Ssd1322Nhd256x64, BufferMode::Full, 2048),
    (SetupType::Ssd1322Nhd256x64, BufferMode::Page1, 256),
];

/// Buffer size derived from pixel dimensions alone.
pub fn expected_buffer_size(setup: SetupType, mode: BufferMode) -> usize {
    let info = setup.info();
    let width_px = (info.pixel_width as usize).div_ceil(8) * 8;
    let height_tiles = (info.pixel_height as usize).div_ceil(8);
    let rows = match mode {
        BufferMode::Page1 => 1,
        BufferMode::Page2 => height_tiles.min(2),
        BufferMode::Full => height_tiles,
    };
    width_px * rows
}
