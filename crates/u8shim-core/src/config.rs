//! Display configuration: controller, bus, buffer mode and rotation.
//!
//! Integer tags for every enum are ABI-stable and decode with `TryFrom<i32>`,
//! so the same values cross the C boundary unchanged.

use std::fmt;

use crate::error::SetupError;
use crate::geometry::{DisplayInfo, SetupType};

/// Bus used to reach the controller.
///
/// The helper layer never drives the bus itself. The choice only gates
/// which controllers are valid and is reported in diagnostics.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bus {
    /// Kernel I2C device.
    HwI2c = 0,
    /// Bit-banged I2C over GPIO.
    SwI2c = 1,
    /// Kernel SPI device, 4-wire.
    HwSpi = 2,
    /// Bit-banged 4-wire SPI over GPIO.
    SwSpi = 3,
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HwI2c => "hardware I2C",
            Self::SwI2c => "software I2C",
            Self::HwSpi => "hardware SPI",
            Self::SwSpi => "software SPI",
        })
    }
}

impl TryFrom<i32> for Bus {
    type Error = SetupError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::HwI2c),
            1 => Ok(Self::SwI2c),
            2 => Ok(Self::HwSpi),
            3 => Ok(Self::SwSpi),
            _ => Err(SetupError::InvalidBus { tag }),
        }
    }
}

/// How many tile rows the frame buffer holds.
#[repr(i32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BufferMode {
    /// One tile row (u8g2 `_1` setups).
    Page1 = 0,
    /// Two tile rows (u8g2 `_2` setups).
    Page2 = 1,
    /// The whole panel (u8g2 `_f` setups).
    #[default]
    Full = 2,
}

impl BufferMode {
    /// Tile rows held for a panel of the given geometry.
    pub fn tile_rows(self, info: &DisplayInfo) -> u8 {
        match self {
            Self::Page1 => 1,
            Self::Page2 => 2.min(info.tile_height),
            Self::Full => info.tile_height,
        }
    }
}

impl TryFrom<i32> for BufferMode {
    type Error = SetupError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Page1),
            1 => Ok(Self::Page2),
            2 => Ok(Self::Full),
            _ => Err(SetupError::InvalidBufferMode { tag }),
        }
    }
}

/// Display rotation, matching the u8g2 `U8G2_R*` and `U8G2_MIRROR` callbacks.
#[repr(i32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation.
    #[default]
    R0 = 0,
    /// 90 degrees clockwise.
    R1 = 1,
    /// 180 degrees.
    R2 = 2,
    /// 270 degrees clockwise.
    R3 = 3,
    /// Horizontal mirror.
    Mirror = 4,
}

impl Rotation {
    /// Whether the drawable width and height are swapped relative to the panel.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::R1 | Self::R3)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = SetupError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::R0),
            1 => Ok(Self::R1),
            2 => Ok(Self::R2),
            3 => Ok(Self::R3),
            4 => Ok(Self::Mirror),
            _ => Err(SetupError::InvalidRotation { tag }),
        }
    }
}

/// Complete description of one display to set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Controller/panel combination.
    pub setup: SetupType,
    /// Bus the controller is wired to.
    ///
    /// Default: [`Bus::HwI2c`].
    pub bus: Bus,
    /// Frame buffer size class.
    ///
    /// Default: [`BufferMode::Full`].
    pub buffer_mode: BufferMode,
    /// Rotation applied to drawing coordinates.
    ///
    /// Default: [`Rotation::R0`].
    pub rotation: Rotation,
}

impl DisplayConfig {
    /// Config for `setup` with default bus, buffer mode and rotation.
    pub fn new(setup: SetupType) -> Self {
        Self {
            setup,
            bus: Bus::HwI2c,
            buffer_mode: BufferMode::default(),
            rotation: Rotation::default(),
        }
    }

    /// Replace the bus.
    pub fn with_bus(mut self, bus: Bus) -> Self {
        self.bus = bus;
        self
    }

    /// Replace the buffer mode.
    pub fn with_buffer_mode(mut self, buffer_mode: BufferMode) -> Self {
        self.buffer_mode = buffer_mode;
        self
    }

    /// Replace the rotation.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Decode a config from C integer tags.
    pub fn from_tags(
        setup: i32,
        bus: i32,
        buffer_mode: i32,
        rotation: i32,
    ) -> Result<Self, SetupError> {
        let config = Self {
            setup: SetupType::try_from(setup)?,
            bus: Bus::try_from(bus)?,
            buffer_mode: BufferMode::try_from(buffer_mode)?,
            rotation: Rotation::try_from(rotation)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the controller can be driven over the chosen bus.
    pub fn validate(&self) -> Result<(), SetupError> {
        if !self.setup.supports(self.bus) {
            return Err(SetupError::UnsupportedBus {
                setup: self.setup,
                bus: self.bus,
            });
        }
        Ok(())
    }

    /// Frame buffer size in bytes this config will require.
    pub fn buffer_size(&self) -> usize {
        let info = self.setup.info();
        8 * self.buffer_mode.tile_rows(info) as usize * info.tile_width as usize
    }
}
