//! Conversion from row-major rasters to the vertical-page buffer layout.
//!
//! Most image sources produce 1-bit rows, 8 pixels per byte, MSB first.
//! The display buffer is organised in 8-pixel-high pages with one byte per
//! column, LSB at the top of the page.

use crate::error::PackError;

/// Bytes a row-major 1-bit raster of `width` x `height` occupies, or
/// `None` if that does not fit in `usize`.
pub fn raster_len(width: usize, height: usize) -> Option<usize> {
    width.div_ceil(8).checked_mul(height)
}

/// Bytes a vertical-page buffer of `width` x `height` occupies, or `None`
/// if that does not fit in `usize`.
pub fn page_len(width: usize, height: usize) -> Option<usize> {
    height.div_ceil(8).checked_mul(width)
}

/// Pack a row-major MSB-first raster into `out` in vertical-page layout.
///
/// `out` is cleared over the packed region first, so unlit raster pixels
/// end up clear. Bytes past the packed region are left untouched.
pub fn pack_raster(
    raster: &[u8],
    width: usize,
    height: usize,
    out: &mut [u8],
) -> Result<(), PackError> {
    let overflow = PackError::DimensionsOverflow { width, height };
    let required = raster_len(width, height).ok_or(overflow.clone())?;
    if raster.len() < required {
        return Err(PackError::RasterTooShort {
            required,
            actual: raster.len(),
        });
    }
    let required = page_len(width, height).ok_or(overflow)?;
    if out.len() < required {
        return Err(PackError::BufferTooShort {
            required,
            actual: out.len(),
        });
    }

    out[..required].fill(0);
    let row_bytes = width.div_ceil(8);
    for y in 0..height {
        let row = &raster[y * row_bytes..(y + 1) * row_bytes];
        let page = &mut out[(y / 8) * width..(y / 8 + 1) * width];
        let bit = 1u8 << (y % 8);
        for (x, dst) in page.iter_mut().enumerate() {
            if row[x / 8] & (0x80 >> (x % 8)) != 0 {
                *dst |= bit;
            }
        }
    }
    Ok(())
}
