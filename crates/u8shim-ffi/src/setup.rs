//! Setup entry points: fill a record's geometry from catalog tags or names.
//!
//! Stands in for the per-controller `u8g2_Setup_*` functions, which bindings
//! otherwise reach through a generated switch over every controller.

use std::ffi::CStr;
use std::os::raw::c_char;

use u8shim_core::{BufferMode, Bus, DisplayConfig, Rotation, SetupError, SetupType, U8g2};

use crate::status::ShimStatus;

#[allow(unsafe_code)]
fn apply(u8g2: *mut U8g2, config: Result<DisplayConfig, SetupError>) -> i32 {
    let config = match config {
        Ok(c) => c,
        Err(e) => return ShimStatus::from(&e) as i32,
    };
    // SAFETY: non-null handles come from `init_u8g2`, per caller contract.
    let Some(rec) = (unsafe { u8g2.as_mut() }) else {
        return ShimStatus::InvalidArgument as i32;
    };
    if let Err(e) = rec.setup_with(&config) {
        return ShimStatus::from(&e) as i32;
    }
    log::debug!(
        "setup {} over {}, {:?} buffer, {} bytes, {}x{} {:?}",
        config.setup.name(),
        config.bus,
        config.buffer_mode,
        rec.buffer_size(),
        rec.width(),
        rec.height(),
        rec.rotation()
    );
    ShimStatus::Ok as i32
}

/// Set up a record for a catalog controller given as integer tags.
///
/// Tags are the discriminants of `SetupType`, `Bus`, `BufferMode` and
/// `Rotation`. On any error the record is left unchanged.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn u8shim_setup(
    u8g2: *mut U8g2,
    setup_type: i32,
    bus: i32,
    buffer_mode: i32,
    rotation: i32,
) -> i32 {
    ffi_guard!({
        if u8g2.is_null() {
            return ShimStatus::InvalidArgument as i32;
        }
        apply(
            u8g2,
            DisplayConfig::from_tags(setup_type, bus, buffer_mode, rotation),
        )
    })
}

/// Set up a record for a controller named as in the catalog
/// (e.g. `"ssd1306_128x64_noname"`).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn u8shim_setup_by_name(
    u8g2: *mut U8g2,
    name: *const c_char,
    bus: i32,
    buffer_mode: i32,
    rotation: i32,
) -> i32 {
    ffi_guard!({
        if u8g2.is_null() || name.is_null() {
            return ShimStatus::InvalidArgument as i32;
        }
        // SAFETY: name is a NUL-terminated string per caller contract.
        let name = match unsafe { CStr::from_ptr(name) }.to_str() {
            Ok(s) => s,
            Err(_) => return ShimStatus::InvalidArgument as i32,
        };
        let config = SetupType::from_name(name).and_then(|setup| {
            let config = DisplayConfig {
                setup,
                bus: Bus::try_from(bus)?,
                buffer_mode: BufferMode::try_from(buffer_mode)?,
                rotation: Rotation::try_from(rotation)?,
            };
            config.validate()?;
            Ok(config)
        });
        apply(u8g2, config)
    })
}
