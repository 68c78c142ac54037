//! The display-state record shared across the C boundary.
//!
//! [`U8g2`] carries the fields the u8g2 accessor macros read and write.
//! The layout is `repr(C)` and every field accepts all-zero bytes, so a
//! zeroed heap block is a valid, not-yet-set-up record.

use std::ptr;

use crate::config::{BufferMode, DisplayConfig, Rotation};
use crate::error::SetupError;
use crate::geometry::{DisplayInfo, TILE_PIXELS};

/// In-memory state of one display.
///
/// Fields are public because C callers hold the same layout. Prefer the
/// accessor methods from Rust; they mirror the u8g2 macros one-to-one.
#[repr(C)]
#[derive(Debug)]
pub struct U8g2 {
    /// Panel geometry, `None` until [`U8g2::setup`] runs.
    pub display_info: Option<&'static DisplayInfo>,
    /// Caller-owned frame buffer. Not owned, never freed by the record.
    pub tile_buf_ptr: *mut u8,
    /// Tile rows the buffer holds.
    pub tile_buf_height: u8,
    /// First panel tile row currently held in the buffer.
    pub tile_curr_row: u8,
    /// Buffer width in pixels.
    pub pixel_buf_width: u16,
    /// Buffer height in pixels.
    pub pixel_buf_height: u16,
    /// First panel pixel row currently held in the buffer.
    pub pixel_curr_row: u16,
    /// Drawable width after rotation.
    pub width: u16,
    /// Drawable height after rotation.
    pub height: u16,
    /// [`Rotation`] tag.
    pub rotation: u8,
    /// Current draw colour (0 clear, 1 set, 2 xor).
    pub draw_color: u8,
    /// Non-zero when page loops clear the buffer between pages.
    pub auto_page_clear: u8,
}

impl U8g2 {
    /// A record with every field zero / null.
    pub const fn zeroed() -> Self {
        Self {
            display_info: None,
            tile_buf_ptr: ptr::null_mut(),
            tile_buf_height: 0,
            tile_curr_row: 0,
            pixel_buf_width: 0,
            pixel_buf_height: 0,
            pixel_curr_row: 0,
            width: 0,
            height: 0,
            rotation: 0,
            draw_color: 0,
            auto_page_clear: 0,
        }
    }

    /// Whether geometry has been established.
    pub fn is_setup(&self) -> bool {
        self.display_info.is_some()
    }

    /// Fill geometry and buffer-tile fields for a panel.
    ///
    /// The buffer pointer is left as it is; callers attach a buffer of
    /// [`buffer_size`](Self::buffer_size) bytes afterwards.
    pub fn setup(&mut self, info: &'static DisplayInfo, mode: BufferMode, rotation: Rotation) {
        let rows = mode.tile_rows(info);
        self.display_info = Some(info);
        self.tile_buf_height = rows;
        self.tile_curr_row = 0;
        self.pixel_buf_width = info.tile_width as u16 * TILE_PIXELS;
        self.pixel_buf_height = rows as u16 * TILE_PIXELS;
        self.pixel_curr_row = 0;
        if rotation.swaps_axes() {
            self.width = info.pixel_height;
            self.height = info.pixel_width;
        } else {
            self.width = info.pixel_width;
            self.height = info.pixel_height;
        }
        self.rotation = rotation as u8;
        self.draw_color = 1;
        self.auto_page_clear = 1;
    }

    /// Validate `config` and set the record up from it.
    pub fn setup_with(&mut self, config: &DisplayConfig) -> Result<(), SetupError> {
        config.validate()?;
        self.setup(config.setup.info(), config.buffer_mode, config.rotation);
        Ok(())
    }

    /// Buffer width in tiles (`u8g2_GetBufferTileWidth`).
    pub fn buffer_tile_width(&self) -> u8 {
        self.display_info.map_or(0, |info| info.tile_width)
    }

    /// Buffer height in tiles (`u8g2_GetBufferTileHeight`).
    pub fn buffer_tile_height(&self) -> u8 {
        self.tile_buf_height
    }

    /// Buffer size in bytes (`u8g2_GetBufferSize`).
    pub fn buffer_size(&self) -> usize {
        8 * self.tile_buf_height as usize * self.buffer_tile_width() as usize
    }

    /// Attached frame buffer (`u8g2_GetBufferPtr`).
    pub fn buffer_ptr(&self) -> *mut u8 {
        self.tile_buf_ptr
    }

    /// Attach a frame buffer (`u8g2_SetBufferPtr`). No size check.
    pub fn set_buffer_ptr(&mut self, buf: *mut u8) {
        self.tile_buf_ptr = buf;
    }

    /// First tile row held (`u8g2_GetBufferCurrTileRow`).
    pub fn buffer_curr_tile_row(&self) -> u8 {
        self.tile_curr_row
    }

    /// Move the held window (`u8g2_SetBufferCurrTileRow`).
    pub fn set_buffer_curr_tile_row(&mut self, row: u8) {
        self.tile_curr_row = row;
    }

    /// Drawable width after rotation.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Drawable height after rotation.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Decoded rotation, `None` if the tag was corrupted.
    pub fn rotation(&self) -> Option<Rotation> {
        Rotation::try_from(self.rotation as i32).ok()
    }
}

impl Default for U8g2 {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bus;
    use crate::geometry::SetupType;
    use proptest::prelude::*;

    fn set_up(setup: SetupType, mode: BufferMode, rotation: Rotation) -> U8g2 {
        let mut rec = U8g2::zeroed();
        rec.setup(setup.info(), mode, rotation);
        rec
    }

    #[test]
    fn zeroed_record_reports_nothing() {
        let rec = U8g2::zeroed();
        assert!(!rec.is_setup());
        assert_eq!(rec.buffer_size(), 0);
        assert_eq!(rec.buffer_tile_width(), 0);
        assert!(rec.buffer_ptr().is_null());
    }

    #[test]
    fn ssd1306_128x64_full_is_1024_bytes() {
        let rec = set_up(
            SetupType::Ssd1306Noname128x64,
            BufferMode::Full,
            Rotation::R0,
        );
        assert_eq!(rec.buffer_size(), 1024);
        assert_eq!(rec.buffer_tile_width(), 16);
        assert_eq!(rec.buffer_tile_height(), 8);
        assert_eq!((rec.pixel_buf_width, rec.pixel_buf_height), (128, 64));
        assert_eq!((rec.width(), rec.height()), (128, 64));
        assert_eq!(rec.draw_color, 1);
    }

    #[test]
    fn page_modes_shrink_the_buffer() {
        let p1 = set_up(
            SetupType::Ssd1306Noname128x64,
            BufferMode::Page1,
            Rotation::R0,
        );
        let p2 = set_up(
            SetupType::Ssd1306Noname128x64,
            BufferMode::Page2,
            Rotation::R0,
        );
        assert_eq!(p1.buffer_size(), 128);
        assert_eq!(p2.buffer_size(), 256);
        assert_eq!(p2.pixel_buf_height, 16);
    }

    #[test]
    fn quarter_turn_swaps_drawable_size() {
        let rec = set_up(
            SetupType::Ssd1306Univision128x32,
            BufferMode::Full,
            Rotation::R1,
        );
        assert_eq!((rec.width(), rec.height()), (32, 128));
        assert_eq!(rec.buffer_size(), 512);
        assert_eq!(rec.rotation(), Some(Rotation::R1));
    }

    #[test]
    fn setup_keeps_attached_buffer() {
        let mut buf = [0u8; 1024];
        let mut rec = U8g2::zeroed();
        rec.set_buffer_ptr(buf.as_mut_ptr());
        rec.setup(
            SetupType::Ssd1306Noname128x64.info(),
            BufferMode::Full,
            Rotation::R0,
        );
        assert_eq!(rec.buffer_ptr(), buf.as_mut_ptr());
    }

    #[test]
    fn setup_resets_current_row() {
        let mut rec = set_up(SetupType::Sh1106Noname128x64, BufferMode::Page1, Rotation::R0);
        rec.set_buffer_curr_tile_row(5);
        assert_eq!(rec.buffer_curr_tile_row(), 5);
        rec.setup(
            SetupType::Sh1106Noname128x64.info(),
            BufferMode::Page1,
            Rotation::R0,
        );
        assert_eq!(rec.buffer_curr_tile_row(), 0);
    }

    #[test]
    fn setup_with_rejects_unsupported_bus() {
        let mut rec = U8g2::zeroed();
        let config = DisplayConfig::new(SetupType::Ssd1322Nhd256x64);
        assert!(rec.setup_with(&config).is_err());
        assert!(!rec.is_setup());
        rec.setup_with(&config.with_bus(Bus::HwSpi)).unwrap();
        assert_eq!(rec.buffer_size(), 2048);
    }

    fn arb_setup() -> impl Strategy<Value = SetupType> {
        (0usize..SetupType::ALL.len()).prop_map(|i| SetupType::ALL[i])
    }

    fn arb_mode() -> impl Strategy<Value = BufferMode> {
        prop_oneof![
            Just(BufferMode::Page1),
            Just(BufferMode::Page2),
            Just(BufferMode::Full),
        ]
    }

    fn arb_rotation() -> impl Strategy<Value = Rotation> {
        (0i32..5).prop_map(|t| Rotation::try_from(t).unwrap())
    }

    proptest! {
        #[test]
        fn buffer_size_ignores_rotation(
            setup in arb_setup(),
            mode in arb_mode(),
            rotation in arb_rotation(),
        ) {
            let rotated = set_up(setup, mode, rotation);
            let upright = set_up(setup, mode, Rotation::R0);
            prop_assert_eq!(rotated.buffer_size(), upright.buffer_size());
        }

        #[test]
        fn buffer_size_matches_config(setup in arb_setup(), mode in arb_mode()) {
            let rec = set_up(setup, mode, Rotation::R0);
            let config = DisplayConfig::new(setup).with_buffer_mode(mode);
            prop_assert_eq!(rec.buffer_size(), config.buffer_size());
        }

        #[test]
        fn set_buffer_ptr_leaves_size_unchanged(
            setup in arb_setup(),
            mode in arb_mode(),
            addr in 1usize..usize::MAX,
        ) {
            let mut rec = set_up(setup, mode, Rotation::R0);
            let before = rec.buffer_size();
            rec.set_buffer_ptr(addr as *mut u8);
            prop_assert_eq!(rec.buffer_size(), before);
            prop_assert_eq!(rec.buffer_ptr() as usize, addr);
        }

        #[test]
        fn full_buffer_covers_panel(setup in arb_setup()) {
            let rec = set_up(setup, BufferMode::Full, Rotation::R0);
            let info = setup.info();
            prop_assert!(rec.pixel_buf_width >= info.pixel_width);
            prop_assert!(rec.pixel_buf_height >= info.pixel_height);
        }
    }
}
