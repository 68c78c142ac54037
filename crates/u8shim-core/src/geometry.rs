//! Controller geometry and the catalog of supported setups.
//!
//! Each [`SetupType`] maps to one static [`DisplayInfo`] and a set of buses
//! the controller can be driven over. Names follow the u8g2 setup naming
//! (`<controller>_<width>x<height>_<vendor>`) and resolve through an
//! insertion-ordered catalog.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::config::Bus;
use crate::error::SetupError;

/// Size of one tile edge in pixels. A tile is 8 bytes of buffer.
pub const TILE_PIXELS: u16 = 8;

/// Static geometry of one display controller/panel combination.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayInfo {
    /// Panel width in 8x8 tiles.
    pub tile_width: u8,
    /// Panel height in 8x8 tiles.
    pub tile_height: u8,
    /// Panel width in pixels.
    pub pixel_width: u16,
    /// Panel height in pixels.
    pub pixel_height: u16,
}

impl DisplayInfo {
    const fn new(pixel_width: u16, pixel_height: u16) -> Self {
        Self {
            tile_width: pixel_width.div_ceil(TILE_PIXELS) as u8,
            tile_height: pixel_height.div_ceil(TILE_PIXELS) as u8,
            pixel_width,
            pixel_height,
        }
    }
}

static SSD1306_128X64: DisplayInfo = DisplayInfo::new(128, 64);
static SSD1306_128X32: DisplayInfo = DisplayInfo::new(128, 32);
static SSD1306_72X40: DisplayInfo = DisplayInfo::new(72, 40);
static SSD1306_64X48: DisplayInfo = DisplayInfo::new(64, 48);
static SSD1306_96X16: DisplayInfo = DisplayInfo::new(96, 16);
static SH1106_128X64: DisplayInfo = DisplayInfo::new(128, 64);
static SH1106_64X32: DisplayInfo = DisplayInfo::new(64, 32);
static SSD1309_128X64: DisplayInfo = DisplayInfo::new(128, 64);
static SSD1322_256X64: DisplayInfo = DisplayInfo::new(256, 64);
static ST7920_128X64: DisplayInfo = DisplayInfo::new(128, 64);

const ALL_BUSES: &[Bus] = &[Bus::HwI2c, Bus::SwI2c, Bus::HwSpi, Bus::SwSpi];
const SPI_ONLY: &[Bus] = &[Bus::HwSpi, Bus::SwSpi];

/// Supported controller setups.
///
/// Discriminants are ABI-stable: they are the `setup_type` tags accepted
/// by the C setup entry point.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetupType {
    /// SSD1306, 128x64, generic ("noname") module.
    Ssd1306Noname128x64 = 0,
    /// SSD1306, 128x32, Univision module.
    Ssd1306Univision128x32 = 1,
    /// SSD1306, 72x40, East Rising module.
    Ssd1306Er72x40 = 2,
    /// SSD1306, 64x48, East Rising module.
    Ssd1306Er64x48 = 3,
    /// SSD1306, 96x16, East Rising module.
    Ssd1306Er96x16 = 4,
    /// SH1106, 128x64, generic module.
    Sh1106Noname128x64 = 5,
    /// SH1106, 64x32.
    Sh1106Generic64x32 = 6,
    /// SSD1309, 128x64, generic module (second variant).
    Ssd1309Noname2 = 7,
    /// SSD1322, 256x64, Newhaven module.
    Ssd1322Nhd256x64 = 8,
    /// ST7920, 128x64.
    St7920Generic128x64 = 9,
}

impl SetupType {
    /// Every setup, in tag order.
    pub const ALL: [SetupType; 10] = [
        SetupType::Ssd1306Noname128x64,
        SetupType::Ssd1306Univision128x32,
        SetupType::Ssd1306Er72x40,
        SetupType::Ssd1306Er64x48,
        SetupType::Ssd1306Er96x16,
        SetupType::Sh1106Noname128x64,
        SetupType::Sh1106Generic64x32,
        SetupType::Ssd1309Noname2,
        SetupType::Ssd1322Nhd256x64,
        SetupType::St7920Generic128x64,
    ];

    /// Catalog name of this setup.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ssd1306Noname128x64 => "ssd1306_128x64_noname",
            Self::Ssd1306Univision128x32 => "ssd1306_128x32_univision",
            Self::Ssd1306Er72x40 => "ssd1306_72x40_er",
            Self::Ssd1306Er64x48 => "ssd1306_64x48_er",
            Self::Ssd1306Er96x16 => "ssd1306_96x16_er",
            Self::Sh1106Noname128x64 => "sh1106_128x64_noname",
            Self::Sh1106Generic64x32 => "sh1106_64x32",
            Self::Ssd1309Noname2 => "ssd1309_128x64_noname2",
            Self::Ssd1322Nhd256x64 => "ssd1322_nhd_256x64",
            Self::St7920Generic128x64 => "st7920_128x64",
        }
    }

    /// Static geometry for this setup.
    pub fn info(self) -> &'static DisplayInfo {
        match self {
            Self::Ssd1306Noname128x64 => &SSD1306_128X64,
            Self::Ssd1306Univision128x32 => &SSD1306_128X32,
            Self::Ssd1306Er72x40 => &SSD1306_72X40,
            Self::Ssd1306Er64x48 => &SSD1306_64X48,
            Self::Ssd1306Er96x16 => &SSD1306_96X16,
            Self::Sh1106Noname128x64 => &SH1106_128X64,
            Self::Sh1106Generic64x32 => &SH1106_64X32,
            Self::Ssd1309Noname2 => &SSD1309_128X64,
            Self::Ssd1322Nhd256x64 => &SSD1322_256X64,
            Self::St7920Generic128x64 => &ST7920_128X64,
        }
    }

    /// Buses this controller can be driven over.
    pub fn buses(self) -> &'static [Bus] {
        match self {
            Self::Ssd1322Nhd256x64 | Self::St7920Generic128x64 => SPI_ONLY,
            _ => ALL_BUSES,
        }
    }

    /// Whether `bus` is usable with this controller.
    pub fn supports(self, bus: Bus) -> bool {
        self.buses().contains(&bus)
    }

    /// Look a setup up by catalog name.
    pub fn from_name(name: &str) -> Result<Self, SetupError> {
        catalog()
            .get(name)
            .copied()
            .ok_or_else(|| SetupError::UnknownSetupName {
                name: name.to_owned(),
            })
    }
}

impl TryFrom<i32> for SetupType {
    type Error = SetupError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        usize::try_from(tag)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(SetupError::UnknownSetupType { tag })
    }
}

/// Name → setup catalog, in tag order.
pub fn catalog() -> &'static IndexMap<&'static str, SetupType> {
    static CATALOG: OnceLock<IndexMap<&'static str, SetupType>> = OnceLock::new();
    CATALOG.get_or_init(|| SetupType::ALL.iter().map(|&s| (s.name(), s)).collect())
}
