//! Frame timing and exposure coordination.
//!
//! Frame length is `mode.height + vblank` lines. The frame length register
//! is 16 bits wide, so longer frames are programmed as `frame_length >> k`
//! together with a long exposure shift of `k`. The exposure register is
//! scaled by the same shift.

use embedded_hal::i2c::I2c;
use tracing::debug;

use crate::error::Result;
use crate::modes::{Mode, REG_EXPOSURE, REG_FRAME_LENGTH, REG_LONG_EXP_SHIFT};
use crate::regs::{RegWidth, Registers};
use crate::traits::Fraction;

/// Pixel rate, fixed for all modes.
pub const PIXEL_RATE: u64 = 900_000_000;
/// Largest value the frame length register holds.
pub const FRAME_LENGTH_MAX: u32 = 0xffff;
/// Largest long exposure shift.
pub const LONG_EXP_SHIFT_MAX: u8 = 7;
/// Exposure must stay this many lines below the frame length.
pub const EXPOSURE_OFFSET: u32 = 48;
/// Shortest exposure in lines.
pub const EXPOSURE_MIN: u32 = 9;
/// Exposure step.
pub const EXPOSURE_STEP: u32 = 1;
/// Exposure after attach.
pub const EXPOSURE_DEFAULT: u32 = 0x3e8;
/// Exposure bound before any mode limits are applied.
pub const EXPOSURE_MAX: u32 = FRAME_LENGTH_MAX - EXPOSURE_OFFSET;

/// Frame length in lines for `interval` in `mode`.
///
/// Clamped to at most [`FRAME_LENGTH_MAX`] and at least `mode.height`.
pub fn frame_length(mode: &Mode, interval: Fraction) -> u32 {
    let divisor = u64::from(interval.denominator) * u64::from(mode.line_length_pix);
    let lines = (u64::from(interval.numerator) * PIXEL_RATE)
        .checked_div(divisor)
        .unwrap_or(u64::from(FRAME_LENGTH_MAX));

    let lines = u32::try_from(lines)
        .unwrap_or(FRAME_LENGTH_MAX)
        .min(FRAME_LENGTH_MAX);
    lines.max(mode.height)
}

/// Smallest shift `k` with `frame_length >> k <= FRAME_LENGTH_MAX`,
/// capped at [`LONG_EXP_SHIFT_MAX`].
pub const fn long_exposure_shift(frame_length: u32) -> u8 {
    let mut shift = 0;
    while shift < LONG_EXP_SHIFT_MAX && (frame_length >> shift) > FRAME_LENGTH_MAX {
        shift += 1;
    }
    shift
}

/// Mode-dependent control limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingLimits {
    /// Smallest vertical blank (fastest frame rate).
    pub vblank_min: u32,
    /// Largest vertical blank, reached with the maximum long exposure shift.
    pub vblank_max: u32,
    /// Vertical blank for the mode's default frame interval.
    pub vblank_default: u32,
    /// Horizontal blank, fixed by the mode's line length.
    pub hblank: u32,
}

impl FramingLimits {
    /// Limits for `mode`. The default frame rate is also the fastest one.
    pub fn for_mode(mode: &Mode) -> Self {
        let frame_length_default = frame_length(mode, mode.default_interval);
        let vblank_default = frame_length_default - mode.height;
        Self {
            vblank_min: vblank_default,
            vblank_max: (FRAME_LENGTH_MAX << LONG_EXP_SHIFT_MAX).saturating_sub(mode.height),
            vblank_default,
            hblank: mode.line_length_pix.saturating_sub(mode.width),
        }
    }
}

/// Largest exposure allowed with `vblank` lines of blanking.
pub const fn exposure_max(mode: &Mode, vblank: u32) -> u32 {
    (mode.height + vblank).saturating_sub(EXPOSURE_OFFSET)
}

/// Program the frame length for `vblank` and update `shift`.
///
/// `shift` tracks what the frame length register was programmed for. It is
/// left untouched if the frame length write fails, and updated if only the
/// shift register write fails.
pub fn apply_vertical_blank<I2C: I2c>(
    regs: &mut Registers<I2C>,
    mode: &Mode,
    vblank: u32,
    shift: &mut u8,
) -> Result<()> {
    let raw = vblank + mode.height;
    let new_shift = long_exposure_shift(raw);
    let lines = raw >> new_shift;

    debug!(vblank, frame_length = lines, shift = new_shift, "Applying vertical blank");

    regs.write(REG_FRAME_LENGTH, RegWidth::U16, lines)?;
    *shift = new_shift;
    regs.write(REG_LONG_EXP_SHIFT, RegWidth::U8, u32::from(new_shift))
}

/// Program `exposure` lines scaled by the current long exposure shift.
pub fn apply_exposure<I2C: I2c>(regs: &mut Registers<I2C>, exposure: u32, shift: u8) -> Result<()> {
    regs.write(REG_EXPOSURE, RegWidth::U16, exposure >> shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SensorError;
    use crate::mock::MockBus;
    use crate::modes::SUPPORTED_MODES;

    fn mode(width: u32) -> &'static Mode {
        SUPPORTED_MODES
            .iter()
            .find(|mode| mode.width == width)
            .expect("mode exists")
    }

    #[test]
    fn test_frame_length_for_default_intervals() {
        // 100 / 6000 s at 900 MHz over 0x29e3 pixel lines.
        assert_eq!(frame_length(mode(1920), mode(1920).default_interval), 1398);
        assert_eq!(frame_length(mode(9152), mode(9152).default_interval), 7127);
    }

    #[test]
    fn test_frame_length_is_clamped() {
        let slow = Fraction::new(10, 1);
        assert_eq!(frame_length(mode(1920), slow), FRAME_LENGTH_MAX);

        let fast = Fraction::new(1, 100_000);
        assert_eq!(frame_length(mode(1920), fast), 1080);

        let broken = Fraction::new(1, 0);
        assert_eq!(frame_length(mode(1920), broken), FRAME_LENGTH_MAX);
    }

    #[test]
    fn test_long_exposure_shift_is_minimal() {
        assert_eq!(long_exposure_shift(0xffff), 0);
        assert_eq!(long_exposure_shift(0x10000), 1);
        assert_eq!(long_exposure_shift(200_000), 2);
        assert_eq!(long_exposure_shift(FRAME_LENGTH_MAX << 7), 7);
        for raw in [1_000u32, 70_000, 140_000, 300_000, 1_000_000, 8_000_000] {
            let shift = long_exposure_shift(raw);
            assert!(raw >> shift <= FRAME_LENGTH_MAX);
            if shift > 0 {
                assert!(raw >> (shift - 1) > FRAME_LENGTH_MAX);
            }
        }
    }

    #[test]
    fn test_framing_limits_for_1080p() {
        let limits = FramingLimits::for_mode(mode(1920));
        assert_eq!(limits.vblank_min, 1398 - 1080);
        assert_eq!(limits.vblank_default, 1398 - 1080);
        assert_eq!(limits.vblank_max, 0xffff * 128 - 1080);
        assert_eq!(limits.hblank, 0x29e3 - 1920);
    }

    #[test]
    fn test_framing_limits_without_blanking() {
        let narrow = Mode {
            width: 400,
            height: 100,
            line_length_pix: 300,
            crop: crate::traits::Rect::new(0, 0, 400, 100),
            default_interval: Fraction::new(1, 30),
            regs: &[],
        };
        let limits = FramingLimits::for_mode(&narrow);
        assert_eq!(limits.hblank, 0);
        assert!(narrow.validate().is_err());
    }

    #[test]
    fn test_apply_vertical_blank_with_long_exposure() {
        let bus = MockBus::new();
        let mut regs = Registers::new(bus.clone(), 0x1a);
        let full = mode(9152);
        let mut shift = 0;

        apply_vertical_blank(&mut regs, full, 200_000 - full.height, &mut shift)
            .expect("apply should succeed");

        assert_eq!(shift, 2);
        assert_eq!(bus.last_value(REG_FRAME_LENGTH), Some(50_000));
        assert_eq!(bus.last_value(REG_LONG_EXP_SHIFT), Some(2));

        apply_exposure(&mut regs, 100_000, shift).expect("apply should succeed");
        assert_eq!(bus.last_value(REG_EXPOSURE), Some(25_000));
    }

    #[test]
    fn test_shift_unchanged_when_frame_length_write_fails() {
        let bus = MockBus::new();
        bus.fail_writes_to(REG_FRAME_LENGTH);
        let mut regs = Registers::new(bus.clone(), 0x1a);
        let mut shift = 3;

        let err = apply_vertical_blank(&mut regs, mode(1920), 100, &mut shift)
            .expect_err("frame length write should fail");

        assert!(matches!(err, SensorError::Bus { address: REG_FRAME_LENGTH, .. }));
        assert_eq!(shift, 3);
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn test_shift_follows_frame_length_when_shift_write_fails() {
        let bus = MockBus::new();
        bus.fail_writes_to(REG_LONG_EXP_SHIFT);
        let mut regs = Registers::new(bus.clone(), 0x1a);
        let full = mode(9152);
        let mut shift = 0;

        let err = apply_vertical_blank(&mut regs, full, 300_000 - full.height, &mut shift)
            .expect_err("shift write should fail");

        assert!(matches!(err, SensorError::Bus { address: REG_LONG_EXP_SHIFT, .. }));
        assert_eq!(shift, 3);
        assert_eq!(bus.last_value(REG_FRAME_LENGTH), Some(300_000 >> 3));
    }
}
