//! Sensor register map, geometry and the catalog of supported modes.

mod tables;

pub use tables::COMMON_REGS;

use crate::error::{Result, SensorError};
use crate::regs::Reg;
use crate::timing::FRAME_LENGTH_MAX;
use crate::traits::{Fraction, Rect};

/// Chip identity register (16-bit), read from the identifier device.
pub const REG_CHIP_ID: u16 = 0x005e;
/// Expected chip identity.
pub const CHIP_ID: u16 = 0x4136;

/// Mode select register.
pub const REG_MODE_SELECT: u16 = 0x0100;
/// Mode select value: software standby.
pub const MODE_STANDBY: u32 = 0x00;
/// Mode select value: streaming.
pub const MODE_STREAMING: u32 = 0x01;

/// Image orientation register: bit 0 h-flip, bit 1 v-flip.
pub const REG_ORIENTATION: u16 = 0x0101;
/// Frame length in lines (16-bit).
pub const REG_FRAME_LENGTH: u16 = 0x0340;
/// Long exposure multiplier, as a power of two (8-bit).
pub const REG_LONG_EXP_SHIFT: u16 = 0x3100;
/// Coarse integration time in lines (16-bit).
pub const REG_EXPOSURE: u16 = 0x0202;
/// Analog gain (16-bit).
pub const REG_ANALOG_GAIN: u16 = 0x0204;
/// Digital gain (16-bit).
pub const REG_DIGITAL_GAIN: u16 = 0x020e;
/// Test pattern select (16-bit).
pub const REG_TEST_PATTERN: u16 = 0x0600;
/// Solid colour test pattern: red component.
pub const REG_TEST_PATTERN_R: u16 = 0x0602;
/// Solid colour test pattern: green-on-red-row component.
pub const REG_TEST_PATTERN_GR: u16 = 0x0604;
/// Solid colour test pattern: blue component.
pub const REG_TEST_PATTERN_B: u16 = 0x0606;
/// Solid colour test pattern: green-on-blue-row component.
pub const REG_TEST_PATTERN_GB: u16 = 0x0608;

/// Native array size including the optical black border.
pub const NATIVE_WIDTH: u32 = 9344;
/// Native array height.
pub const NATIVE_HEIGHT: u32 = 7032;
/// Left edge of the active pixel array.
pub const PIXEL_ARRAY_LEFT: u32 = 48;
/// Top edge of the active pixel array.
pub const PIXEL_ARRAY_TOP: u32 = 40;
/// Active pixel array width.
pub const PIXEL_ARRAY_WIDTH: u32 = 9248;
/// Active pixel array height.
pub const PIXEL_ARRAY_HEIGHT: u32 = 6944;

/// Full active pixel array.
pub const PIXEL_ARRAY: Rect = Rect::new(
    PIXEL_ARRAY_LEFT,
    PIXEL_ARRAY_TOP,
    PIXEL_ARRAY_WIDTH,
    PIXEL_ARRAY_HEIGHT,
);
/// Full physical array.
pub const NATIVE_SIZE: Rect = Rect::new(0, 0, NATIVE_WIDTH, NATIVE_HEIGHT);

/// Bytes per embedded metadata line.
pub const EMBEDDED_LINE_WIDTH: u32 = 11560 * 3;
/// Embedded metadata lines per frame.
pub const NUM_EMBEDDED_LINES: u32 = 1;

/// A supported capture geometry.
#[derive(Debug, PartialEq, Eq)]
pub struct Mode {
    /// Output width.
    pub width: u32,
    /// Output height.
    pub height: u32,
    /// Line length in pixel clocks (H timing).
    pub line_length_pix: u32,
    /// Analog crop rectangle.
    pub crop: Rect,
    /// Default (fastest) frame interval.
    pub default_interval: Fraction,
    /// Register deltas applied on top of [`COMMON_REGS`].
    pub regs: &'static [Reg],
}

impl Mode {
    /// Check that the timing derived from this mode is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::UnsupportedConfiguration`] if the mode is
    /// empty, has no horizontal blanking, is taller than the frame length
    /// register allows, or has a zero frame interval.
    pub fn validate(&self) -> Result<()> {
        let problem = if self.width == 0 || self.height == 0 {
            "has no pixels"
        } else if self.line_length_pix <= self.width {
            "has a line length shorter than its width"
        } else if self.height > FRAME_LENGTH_MAX {
            "is taller than the longest frame"
        } else if self.default_interval.numerator == 0 || self.default_interval.denominator == 0 {
            "has a zero frame interval"
        } else {
            return Ok(());
        };
        Err(SensorError::UnsupportedConfiguration(format!(
            "mode {}x{} {problem}",
            self.width, self.height
        )))
    }
}

/// Supported modes, largest first. Entry 0 is the attach default.
pub static SUPPORTED_MODES: [Mode; 7] = [
    Mode {
        width: 9152,
        height: 6944,
        line_length_pix: 0xb6b2,
        crop: Rect::new(PIXEL_ARRAY_LEFT, PIXEL_ARRAY_TOP, 9248, 6944),
        default_interval: Fraction::new(100, 270),
        regs: &tables::MODE_9152X6944,
    },
    Mode {
        width: 8000,
        height: 6000,
        line_length_pix: 0xb6b2,
        crop: Rect::new(PIXEL_ARRAY_LEFT + 624, PIXEL_ARRAY_TOP + 472, 9248, 6944),
        default_interval: Fraction::new(100, 300),
        regs: &tables::MODE_8000X6000,
    },
    Mode {
        width: 4624,
        height: 3472,
        line_length_pix: 0x6397,
        crop: Rect::new(PIXEL_ARRAY_LEFT, PIXEL_ARRAY_TOP, 9248, 6944),
        default_interval: Fraction::new(100, 1000),
        regs: &tables::MODE_4624X3472,
    },
    Mode {
        width: 3840,
        height: 2160,
        line_length_pix: 0x4eb7,
        crop: Rect::new(PIXEL_ARRAY_LEFT + 784, PIXEL_ARRAY_TOP + 1312, 7680, 4320),
        default_interval: Fraction::new(100, 2000),
        regs: &tables::MODE_3840X2160,
    },
    Mode {
        width: 2312,
        height: 1736,
        line_length_pix: 0x3360,
        crop: Rect::new(PIXEL_ARRAY_LEFT, PIXEL_ARRAY_TOP, 9248, 6944),
        default_interval: Fraction::new(100, 3000),
        regs: &tables::MODE_2312X1736,
    },
    Mode {
        width: 1920,
        height: 1080,
        line_length_pix: 0x29e3,
        crop: Rect::new(PIXEL_ARRAY_LEFT + 784, PIXEL_ARRAY_TOP + 1312, 7680, 4320),
        default_interval: Fraction::new(100, 6000),
        regs: &tables::MODE_1920X1080,
    },
    Mode {
        width: 1280,
        height: 720,
        line_length_pix: 0x1b08,
        crop: Rect::new(PIXEL_ARRAY_LEFT + 2064, PIXEL_ARRAY_TOP + 2032, 5120, 2880),
        default_interval: Fraction::new(100, 12000),
        regs: &tables::MODE_1280X720,
    },
];
