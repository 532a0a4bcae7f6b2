//! Arducam 64MP driver: device state, power sequencing and streaming.
//!
//! All state lives in one [`Inner`] behind a [`parking_lot::Mutex`]. Every
//! public entry point holds the lock for its whole duration, so format
//! changes, control writes and stream transitions never interleave.

use std::ops::RangeInclusive;
use std::time::Duration;

use embedded_hal::i2c::I2c;
use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use crate::config::SensorConfig;
use crate::controls::{ControlDescriptor, ControlId, ControlSet, TEST_PATTERN_VALUES};
use crate::error::{PowerStage, Result, SensorError};
use crate::format::{
    bayer_code, default_pad_config, fixed_selection, image_format, metadata_format, nearest_mode,
};
use crate::modes::{
    Mode, CHIP_ID, COMMON_REGS, EMBEDDED_LINE_WIDTH, MODE_STANDBY, MODE_STREAMING,
    NUM_EMBEDDED_LINES, REG_ANALOG_GAIN, REG_CHIP_ID, REG_DIGITAL_GAIN, REG_MODE_SELECT,
    REG_ORIENTATION, REG_TEST_PATTERN, REG_TEST_PATTERN_B, REG_TEST_PATTERN_GB,
    REG_TEST_PATTERN_GR, REG_TEST_PATTERN_R, SUPPORTED_MODES,
};
use crate::regs::{RegWidth, Registers};
use crate::timing::{apply_exposure, apply_vertical_blank, FramingLimits, EXPOSURE_OFFSET};
use crate::traits::{
    FrameSizeRange, MbusFormat, Pad, PadConfig, PixelCode, PowerControl, PowerManaged, Rect,
    SelectionTarget, SensorSubdev, Which,
};

/// Wait after releasing reset before the first register access.
pub const SETTLE_WINDOW: RangeInclusive<Duration> =
    Duration::from_micros(8000)..=Duration::from_micros(9000);

/// Power and streaming state of the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Supplies and clock off.
    Off,
    /// Powered, in software standby.
    PoweredIdle,
    /// Powered and streaming.
    Streaming,
    /// Streaming was stopped by a system suspend and resumes with it.
    SuspendedWhileStreaming,
}

impl StreamState {
    /// Whether the supplies and clock are on.
    #[must_use]
    pub const fn is_powered(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Whether a stream has been requested and not yet stopped.
    #[must_use]
    pub const fn is_streaming(self) -> bool {
        matches!(self, Self::Streaming | Self::SuspendedWhileStreaming)
    }
}

struct Inner<I2C, P> {
    regs: Registers<I2C>,
    power: P,
    identifier_address: u8,
    modes: &'static [Mode],
    mode: &'static Mode,
    controls: ControlSet,
    state: StreamState,
    common_regs_written: bool,
    long_exp_shift: u8,
    stream_holds_power: bool,
    /// A suspended stream lost its power and restarts on resume.
    resume_streaming: bool,
}

/// Arducam 64MP sensor driver.
///
/// Generic over the register bus and the power collaborators so it can run
/// against real hardware or the simulators in [`crate::mock`].
pub struct Arducam64mp<I2C, P> {
    inner: Mutex<Inner<I2C, P>>,
}

impl<I2C, P> std::fmt::Debug for Arducam64mp<I2C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arducam64mp").finish_non_exhaustive()
    }
}

impl<I2C: I2c, P: PowerControl> Arducam64mp<I2C, P> {
    /// Attach to the sensor with the built-in mode catalog.
    ///
    /// Powers the sensor up, checks its identity and leaves it powered off
    /// with the largest mode selected.
    ///
    /// # Errors
    ///
    /// - [`SensorError::UnsupportedConfiguration`] if `config` is not supported
    /// - [`SensorError::Power`] if power-up fails
    /// - [`SensorError::IdentityMismatch`] if the sensor is absent or wrong
    pub fn new(i2c: I2C, power: P, config: &SensorConfig) -> Result<Self> {
        Self::with_modes(i2c, power, config, &SUPPORTED_MODES)
    }

    /// Attach with a custom mode catalog. Entry 0 is selected initially.
    ///
    /// # Errors
    ///
    /// As [`Arducam64mp::new`], and
    /// [`SensorError::UnsupportedConfiguration`] for an empty catalog or a
    /// malformed entry.
    pub fn with_modes(
        i2c: I2C,
        power: P,
        config: &SensorConfig,
        modes: &'static [Mode],
    ) -> Result<Self> {
        config.validate()?;
        let mode = modes.first().ok_or_else(|| {
            SensorError::UnsupportedConfiguration("mode catalog is empty".to_owned())
        })?;
        for entry in modes {
            entry.validate()?;
        }

        let mut inner = Inner {
            regs: Registers::new(i2c, config.i2c_address),
            power,
            identifier_address: config.identifier_address,
            modes,
            mode,
            controls: ControlSet::new(),
            state: StreamState::Off,
            common_regs_written: false,
            long_exp_shift: 0,
            stream_holds_power: false,
            resume_streaming: false,
        };

        inner.power_on()?;
        let identified = inner.identify();
        inner.power_off();
        identified?;

        inner.set_framing_limits()?;
        debug!(width = mode.width, height = mode.height, "Sensor attached");

        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    /// Detach, powering off if needed, and hand back the collaborators.
    pub fn remove(self) -> (I2C, P) {
        let mut inner = self.inner.into_inner();
        if inner.state.is_powered() {
            inner.power_off();
        }
        (inner.regs.release(), inner.power)
    }

    /// Current power and streaming state.
    pub fn state(&self) -> StreamState {
        self.inner.lock().state
    }

    /// Whether the common register block has been written since power-up.
    pub fn common_regs_written(&self) -> bool {
        self.inner.lock().common_regs_written
    }

    /// Long exposure shift last programmed for the frame length.
    pub fn long_exposure_shift(&self) -> u8 {
        self.inner.lock().long_exp_shift
    }

    /// Active mode.
    pub fn mode(&self) -> &'static Mode {
        self.inner.lock().mode
    }
}

impl<I2C: I2c, P: PowerControl> Inner<I2C, P> {
    fn identify(&mut self) -> Result<()> {
        let expected = u32::from(CHIP_ID);
        let found = match self
            .regs
            .read_from(self.identifier_address, REG_CHIP_ID, RegWidth::U16)
        {
            Ok(found) => found,
            Err(err) => {
                error!("Failed to read chip id: {err}");
                return Err(SensorError::IdentityMismatch {
                    expected,
                    found: None,
                });
            }
        };

        if found != expected {
            error!("Chip id mismatch: expected 0x{expected:04x}, got 0x{found:04x}");
            return Err(SensorError::IdentityMismatch {
                expected,
                found: Some(found),
            });
        }

        info!("Arducam 64MP found, chip id 0x{found:04x}");
        Ok(())
    }

    fn power_on(&mut self) -> Result<()> {
        if self.state.is_powered() {
            return Ok(());
        }

        self.power
            .enable_supplies()
            .map_err(|source| SensorError::Power {
                stage: PowerStage::Supplies,
                source,
            })?;

        if let Err(source) = self.power.enable_clock() {
            self.power.disable_supplies();
            return Err(SensorError::Power {
                stage: PowerStage::Clock,
                source,
            });
        }

        if let Err(source) = self.power.set_reset(true) {
            self.power.disable_clock();
            self.power.disable_supplies();
            return Err(SensorError::Power {
                stage: PowerStage::Reset,
                source,
            });
        }

        self.power.settle(SETTLE_WINDOW);
        self.state = StreamState::PoweredIdle;
        debug!("Powered on");
        Ok(())
    }

    fn power_off(&mut self) {
        match self.state {
            StreamState::Off => return,
            StreamState::Streaming => self.stop_streaming(),
            StreamState::PoweredIdle | StreamState::SuspendedWhileStreaming => {}
        }
        if self.state.is_streaming() {
            self.release_flips();
        }
        if self.state == StreamState::SuspendedWhileStreaming {
            self.resume_streaming = true;
        }

        if let Err(err) = self.power.set_reset(false) {
            warn!("Failed to assert reset: {err}");
        }
        self.power.disable_supplies();
        self.power.disable_clock();

        self.common_regs_written = false;
        self.stream_holds_power = false;
        self.state = StreamState::Off;
        debug!("Powered off");
    }

    fn start_streaming(&mut self) -> Result<()> {
        if !self.common_regs_written {
            self.regs.write_list(&COMMON_REGS).inspect_err(|err| {
                error!("Failed to set common settings: {err}");
            })?;
            self.common_regs_written = true;
        }

        self.regs.write_list(self.mode.regs).inspect_err(|err| {
            error!("Failed to set mode: {err}");
        })?;

        let writable: Vec<ControlId> = self.controls.writable().collect();
        for id in writable {
            self.write_control(id)?;
        }

        self.regs
            .write(REG_MODE_SELECT, RegWidth::U8, MODE_STREAMING)?;
        debug!(width = self.mode.width, height = self.mode.height, "Streaming started");
        Ok(())
    }

    fn stop_streaming(&mut self) {
        if let Err(err) = self.regs.write(REG_MODE_SELECT, RegWidth::U8, MODE_STANDBY) {
            warn!("Failed to stop streaming: {err}");
        }
    }

    fn set_stream(&mut self, enable: bool) -> Result<()> {
        self.resume_streaming = false;
        if self.state.is_streaming() == enable {
            return Ok(());
        }

        if enable {
            let powered_here = !self.state.is_powered();
            self.power_on()?;

            if let Err(err) = self.start_streaming() {
                if powered_here {
                    self.power_off();
                }
                return Err(err);
            }

            self.stream_holds_power = powered_here;
            self.state = StreamState::Streaming;
            self.lock_flips();
        } else {
            if self.state == StreamState::Streaming {
                self.stop_streaming();
            }
            self.release_flips();
            self.state = StreamState::PoweredIdle;
            if self.stream_holds_power {
                self.power_off();
            }
            debug!("Streaming stopped");
        }
        Ok(())
    }

    fn lock_flips(&mut self) {
        self.controls.grab(ControlId::HorizontalFlip, true);
        self.controls.grab(ControlId::VerticalFlip, true);
    }

    fn release_flips(&mut self) {
        self.controls.grab(ControlId::HorizontalFlip, false);
        self.controls.grab(ControlId::VerticalFlip, false);
    }

    fn suspend(&mut self) {
        if self.state == StreamState::Streaming {
            self.stop_streaming();
            self.state = StreamState::SuspendedWhileStreaming;
            debug!("Stream suspended");
        }
    }

    fn resume(&mut self) -> Result<()> {
        if std::mem::take(&mut self.resume_streaming) {
            let powered_here = !self.state.is_powered();
            self.power_on()?;
            self.stream_holds_power = powered_here;
            self.state = StreamState::SuspendedWhileStreaming;
            self.lock_flips();
            debug!("Restarting stream after power loss");
        }
        if self.state != StreamState::SuspendedWhileStreaming {
            return Ok(());
        }

        match self.start_streaming() {
            Ok(()) => {
                self.state = StreamState::Streaming;
                debug!("Stream resumed");
                Ok(())
            }
            Err(err) => {
                self.stop_streaming();
                self.release_flips();
                self.state = StreamState::PoweredIdle;
                if self.stream_holds_power {
                    self.power_off();
                }
                Err(err)
            }
        }
    }

    fn code(&self) -> PixelCode {
        bayer_code(
            self.controls.value(ControlId::HorizontalFlip) != 0,
            self.controls.value(ControlId::VerticalFlip) != 0,
        )
    }

    /// Whether control writes reach the sensor now. Otherwise they wait for
    /// the replay in the next stream start.
    fn registers_live(&self) -> bool {
        self.common_regs_written && self.state.is_streaming()
    }

    /// Store `value` and push it to the sensor if a stream is running.
    fn commit(&mut self, id: ControlId, value: i64) -> Result<()> {
        self.controls.store(id, value);
        let exposure_clamped = id == ControlId::VerticalBlank && self.adjust_exposure_range();

        if !self.registers_live() {
            return Ok(());
        }

        let shift = self.long_exp_shift;
        self.write_control(id)?;
        if id == ControlId::VerticalBlank && (exposure_clamped || shift != self.long_exp_shift) {
            self.write_control(ControlId::Exposure)?;
        }
        Ok(())
    }

    /// Bound exposure by the frame length. Returns whether exposure changed.
    fn adjust_exposure_range(&mut self) -> bool {
        let vblank = self.controls.value(ControlId::VerticalBlank);
        let maximum = i64::from(self.mode.height) + vblank - i64::from(EXPOSURE_OFFSET);
        let exposure = self.controls.get(ControlId::Exposure);
        let (minimum, step) = (exposure.minimum, exposure.step);
        let default = maximum.min(exposure.value);
        self.controls
            .modify_range(ControlId::Exposure, minimum, maximum, step, default)
    }

    fn write_control(&mut self, id: ControlId) -> Result<()> {
        let value = register_value(id, self.controls.value(id))?;
        match id {
            ControlId::VerticalBlank => {
                apply_vertical_blank(&mut self.regs, self.mode, value, &mut self.long_exp_shift)
            }
            ControlId::Exposure => apply_exposure(&mut self.regs, value, self.long_exp_shift),
            ControlId::AnalogueGain => self.regs.write(REG_ANALOG_GAIN, RegWidth::U16, value),
            ControlId::DigitalGain => self.regs.write(REG_DIGITAL_GAIN, RegWidth::U16, value),
            ControlId::HorizontalFlip | ControlId::VerticalFlip => {
                let hflip = u32::from(self.controls.value(ControlId::HorizontalFlip) != 0);
                let vflip = u32::from(self.controls.value(ControlId::VerticalFlip) != 0);
                self.regs
                    .write(REG_ORIENTATION, RegWidth::U8, hflip | (vflip << 1))
            }
            ControlId::TestPattern => {
                let pattern = usize::try_from(value)
                    .ok()
                    .and_then(|index| TEST_PATTERN_VALUES.get(index))
                    .copied()
                    .ok_or_else(|| {
                        SensorError::InvalidArgument(format!("test pattern {value} not supported"))
                    })?;
                self.regs.write(REG_TEST_PATTERN, RegWidth::U16, pattern)
            }
            ControlId::TestPatternRed => self.regs.write(REG_TEST_PATTERN_R, RegWidth::U16, value),
            ControlId::TestPatternGreenRed => {
                self.regs.write(REG_TEST_PATTERN_GR, RegWidth::U16, value)
            }
            ControlId::TestPatternBlue => self.regs.write(REG_TEST_PATTERN_B, RegWidth::U16, value),
            ControlId::TestPatternGreenBlue => {
                self.regs.write(REG_TEST_PATTERN_GB, RegWidth::U16, value)
            }
            ControlId::PixelRate | ControlId::LinkFrequency | ControlId::HorizontalBlank => Ok(()),
        }
    }

    /// Reset blanking and exposure limits for the active mode.
    fn set_framing_limits(&mut self) -> Result<()> {
        let limits = FramingLimits::for_mode(self.mode);
        self.long_exp_shift = 0;

        let vblank_default = i64::from(limits.vblank_default);
        self.controls.modify_range(
            ControlId::VerticalBlank,
            i64::from(limits.vblank_min),
            i64::from(limits.vblank_max),
            1,
            vblank_default,
        );
        self.commit(ControlId::VerticalBlank, vblank_default)?;

        let hblank = i64::from(limits.hblank);
        self.controls
            .modify_range(ControlId::HorizontalBlank, hblank, hblank, 1, hblank);
        Ok(())
    }
}

fn register_value(id: ControlId, value: i64) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| SensorError::InvalidArgument(format!("{id} value {value} out of range")))
}

impl<I2C: I2c, P: PowerControl> SensorSubdev for Arducam64mp<I2C, P> {
    fn init_pad_config(&self) -> PadConfig {
        let inner = self.inner.lock();
        let first = inner.modes.first().unwrap_or(inner.mode);
        default_pad_config(first, inner.code())
    }

    fn enum_mbus_code(&self, pad: Pad, index: u32) -> Result<PixelCode> {
        let inner = self.inner.lock();
        if index > 0 {
            return Err(SensorError::InvalidArgument(format!(
                "mbus code index {index} out of range"
            )));
        }
        Ok(match pad {
            Pad::Image => inner.code(),
            Pad::Metadata => PixelCode::SensorData,
        })
    }

    fn enum_frame_size(&self, pad: Pad, code: PixelCode, index: u32) -> Result<FrameSizeRange> {
        let inner = self.inner.lock();
        let out_of_range =
            || SensorError::InvalidArgument(format!("frame size index {index} out of range"));

        match pad {
            Pad::Image => {
                if code != inner.code() {
                    return Err(SensorError::InvalidArgument(format!(
                        "{code:?} is not the current image code"
                    )));
                }
                let mode = usize::try_from(index)
                    .ok()
                    .and_then(|index| inner.modes.get(index))
                    .ok_or_else(out_of_range)?;
                Ok(FrameSizeRange::discrete(mode.width, mode.height))
            }
            Pad::Metadata => {
                if code != PixelCode::SensorData {
                    return Err(SensorError::InvalidArgument(format!(
                        "{code:?} is not a metadata code"
                    )));
                }
                if index > 0 {
                    return Err(out_of_range());
                }
                Ok(FrameSizeRange::discrete(EMBEDDED_LINE_WIDTH, NUM_EMBEDDED_LINES))
            }
        }
    }

    fn format(&self, pad: Pad, which: Which<'_>) -> Result<MbusFormat> {
        let inner = self.inner.lock();
        Ok(match which {
            Which::Try(config) => {
                if pad == Pad::Image {
                    config.image.code = inner.code();
                }
                config.format(pad).clone()
            }
            Which::Active => match pad {
                Pad::Image => image_format(inner.mode, inner.code()),
                Pad::Metadata => metadata_format(),
            },
        })
    }

    fn set_format(&self, pad: Pad, which: Which<'_>, request: &MbusFormat) -> Result<MbusFormat> {
        let mut inner = self.inner.lock();

        if pad == Pad::Metadata {
            let format = metadata_format();
            if let Which::Try(config) = which {
                *config.format_mut(pad) = format.clone();
            }
            return Ok(format);
        }

        let mode = nearest_mode(inner.modes, request.width, request.height).ok_or_else(|| {
            SensorError::UnsupportedConfiguration("mode catalog is empty".to_owned())
        })?;
        let format = image_format(mode, inner.code());

        match which {
            Which::Try(config) => *config.format_mut(pad) = format.clone(),
            Which::Active => {
                if inner.state.is_streaming() {
                    return Err(SensorError::Busy("image format".to_owned()));
                }
                inner.mode = mode;
                inner.set_framing_limits()?;
                debug!(width = mode.width, height = mode.height, "Mode selected");
            }
        }
        Ok(format)
    }

    fn selection(&self, pad: Pad, target: SelectionTarget, which: Which<'_>) -> Result<Rect> {
        let inner = self.inner.lock();
        if pad != Pad::Image {
            return Err(SensorError::InvalidArgument(
                "selection is only available on the image pad".to_owned(),
            ));
        }
        if let Some(rect) = fixed_selection(target) {
            return Ok(rect);
        }
        Ok(match which {
            Which::Try(config) => config.crop,
            Which::Active => inner.mode.crop,
        })
    }

    fn set_selection(
        &self,
        pad: Pad,
        target: SelectionTarget,
        which: Which<'_>,
        request: Rect,
    ) -> Result<Rect> {
        if target != SelectionTarget::Crop {
            return Err(SensorError::InvalidArgument(format!(
                "{target:?} selection is read-only"
            )));
        }
        let crop = self.selection(pad, target, which)?;
        if crop != request {
            debug!(?request, ?crop, "Crop adjusted to mode");
        }
        Ok(crop)
    }

    fn set_stream(&self, enable: bool) -> Result<()> {
        self.inner.lock().set_stream(enable)
    }

    fn control(&self, id: ControlId) -> ControlDescriptor {
        self.inner.lock().controls.get(id).clone()
    }

    fn controls(&self) -> Vec<ControlDescriptor> {
        self.inner.lock().controls.iter().cloned().collect()
    }

    fn set_control(&self, id: ControlId, value: i64) -> Result<i64> {
        let mut inner = self.inner.lock();
        let value = inner.controls.check_write(id, value)?;
        inner.commit(id, value)?;
        Ok(value)
    }
}

impl<I2C: I2c, P: PowerControl> PowerManaged for Arducam64mp<I2C, P> {
    fn power_on(&self) -> Result<()> {
        self.inner.lock().power_on()
    }

    fn power_off(&self) -> Result<()> {
        self.inner.lock().power_off();
        Ok(())
    }

    fn suspend(&self) -> Result<()> {
        self.inner.lock().suspend();
        Ok(())
    }

    fn resume(&self) -> Result<()> {
        self.inner.lock().resume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBus, MockPower, PowerEvent};
    use crate::modes::{REG_EXPOSURE, REG_FRAME_LENGTH, REG_LONG_EXP_SHIFT};

    fn attach() -> (Arducam64mp<MockBus, MockPower>, MockBus, MockPower) {
        let bus = MockBus::new();
        let power = MockPower::new();
        let sensor = Arducam64mp::new(bus.clone(), power.clone(), &SensorConfig::default())
            .expect("attach should succeed");
        bus.clear_writes();
        power.clear_events();
        (sensor, bus, power)
    }

    #[test]
    fn test_attach_leaves_sensor_off() {
        let (sensor, bus, power) = attach();
        assert_eq!(sensor.state(), StreamState::Off);
        assert!(!power.is_powered());
        assert!(bus.writes().is_empty());
        assert_eq!(sensor.mode().width, 9152);
    }

    #[test]
    fn test_attach_powers_up_in_order() {
        let bus = MockBus::new();
        let power = MockPower::new();
        let _sensor = Arducam64mp::new(bus, power.clone(), &SensorConfig::default())
            .expect("attach should succeed");

        assert_eq!(
            power.events(),
            vec![
                PowerEvent::SuppliesOn,
                PowerEvent::ClockOn,
                PowerEvent::Reset(true),
                PowerEvent::Settle(SETTLE_WINDOW),
                PowerEvent::Reset(false),
                PowerEvent::SuppliesOff,
                PowerEvent::ClockOff,
            ]
        );
    }

    #[test]
    fn test_attach_rejects_bad_config() {
        let config = SensorConfig {
            data_lanes: 4,
            ..SensorConfig::default()
        };
        let power = MockPower::new();
        let err = Arducam64mp::new(MockBus::new(), power.clone(), &config)
            .expect_err("four lanes should be rejected");
        assert!(matches!(err, SensorError::UnsupportedConfiguration(_)));
        assert!(power.events().is_empty());
    }

    #[test]
    fn test_attach_rejects_empty_catalog() {
        static EMPTY: [Mode; 0] = [];
        let err = Arducam64mp::with_modes(
            MockBus::new(),
            MockPower::new(),
            &SensorConfig::default(),
            &EMPTY,
        )
        .expect_err("empty catalog should be rejected");
        assert!(matches!(err, SensorError::UnsupportedConfiguration(_)));
    }

    #[test]
    fn test_attach_rejects_malformed_catalog() {
        static MALFORMED: [Mode; 1] = [Mode {
            width: 640,
            height: 480,
            line_length_pix: 600,
            crop: Rect::new(0, 0, 640, 480),
            default_interval: crate::traits::Fraction::new(1, 30),
            regs: &[],
        }];
        let power = MockPower::new();
        let err = Arducam64mp::with_modes(
            MockBus::new(),
            power.clone(),
            &SensorConfig::default(),
            &MALFORMED,
        )
        .expect_err("mode without blanking should be rejected");
        assert!(matches!(err, SensorError::UnsupportedConfiguration(_)));
        assert!(power.events().is_empty());
    }

    #[test]
    fn test_initial_controls_follow_default_mode() {
        let (sensor, _bus, _power) = attach();
        let mode = sensor.mode();
        let limits = FramingLimits::for_mode(mode);

        let vblank = sensor.control(ControlId::VerticalBlank);
        assert_eq!(vblank.value, i64::from(limits.vblank_default));
        assert_eq!(vblank.minimum, i64::from(limits.vblank_min));

        let exposure = sensor.control(ControlId::Exposure);
        assert_eq!(
            exposure.maximum,
            i64::from(mode.height) + vblank.value - i64::from(EXPOSURE_OFFSET)
        );
        assert_eq!(exposure.value, 1000);

        let hblank = sensor.control(ControlId::HorizontalBlank);
        assert_eq!(hblank.value, i64::from(mode.line_length_pix - mode.width));
    }

    #[test]
    fn test_controls_are_not_written_while_off() {
        let (sensor, bus, _power) = attach();
        let stored = sensor
            .set_control(ControlId::AnalogueGain, 300)
            .expect("set should succeed");
        assert_eq!(stored, 300);
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn test_controls_wait_for_stream_start() {
        let (sensor, bus, _power) = attach();
        sensor.power_on().expect("power on should succeed");

        sensor
            .set_control(ControlId::DigitalGain, 0x200)
            .expect("set should succeed");
        sensor
            .set_control(ControlId::VerticalFlip, 1)
            .expect("set should succeed");
        assert!(!sensor.common_regs_written());
        assert!(bus.writes().is_empty());

        sensor.set_stream(true).expect("stream on should succeed");
        assert_eq!(bus.last_value(REG_DIGITAL_GAIN), Some(0x200));
        assert_eq!(bus.last_value(REG_ORIENTATION), Some(0b10));
        bus.clear_writes();

        sensor
            .set_control(ControlId::TestPattern, 1)
            .expect("set should succeed");
        sensor
            .set_control(ControlId::AnalogueGain, 300)
            .expect("set should succeed");
        assert_eq!(bus.last_value(REG_TEST_PATTERN), Some(2));
        assert_eq!(bus.last_value(REG_ANALOG_GAIN), Some(300));
    }

    #[test]
    fn test_idle_mode_change_writes_nothing() {
        let (sensor, bus, _power) = attach();
        sensor.power_on().expect("power on should succeed");

        let request = MbusFormat::new(1920, 1080, PixelCode::Srggb10);
        sensor
            .set_format(Pad::Image, Which::Active, &request)
            .expect("mode change should succeed");

        assert_eq!(sensor.mode().width, 1920);
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn test_long_vblank_sets_shift_and_rescales_exposure() {
        let (sensor, bus, _power) = attach();
        sensor.set_stream(true).expect("stream on should succeed");
        sensor
            .set_control(ControlId::Exposure, 4000)
            .expect("set should succeed");

        let height = i64::from(sensor.mode().height);
        sensor
            .set_control(ControlId::VerticalBlank, 200_000 - height)
            .expect("set should succeed");

        assert_eq!(sensor.long_exposure_shift(), 2);
        assert_eq!(bus.last_value(REG_FRAME_LENGTH), Some(50_000));
        assert_eq!(bus.last_value(REG_LONG_EXP_SHIFT), Some(2));
        assert_eq!(bus.last_value(REG_EXPOSURE), Some(1000));
    }

    #[test]
    fn test_shrinking_vblank_clamps_exposure() {
        let (sensor, _bus, _power) = attach();
        let limits = FramingLimits::for_mode(sensor.mode());
        sensor
            .set_control(ControlId::VerticalBlank, i64::from(limits.vblank_max))
            .expect("set should succeed");
        sensor
            .set_control(ControlId::Exposure, 100_000)
            .expect("set should succeed");

        sensor
            .set_control(ControlId::VerticalBlank, i64::from(limits.vblank_min))
            .expect("set should succeed");

        let exposure = sensor.control(ControlId::Exposure);
        assert_eq!(exposure.value, exposure.maximum);
        assert!(exposure.value <= i64::from(sensor.mode().height) + i64::from(limits.vblank_min));
    }

    #[test]
    fn test_read_only_control_write_is_rejected() {
        let (sensor, bus, _power) = attach();
        sensor.power_on().expect("power on should succeed");
        bus.clear_writes();

        let err = sensor
            .set_control(ControlId::PixelRate, 1)
            .expect_err("pixel rate is read-only");
        assert!(matches!(err, SensorError::InvalidArgument(_)));
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn test_flips_locked_while_streaming() {
        let (sensor, _bus, _power) = attach();
        sensor.set_stream(true).expect("stream on should succeed");

        let err = sensor
            .set_control(ControlId::HorizontalFlip, 1)
            .expect_err("flip is locked while streaming");
        assert!(matches!(err, SensorError::Busy(_)));

        sensor.set_stream(false).expect("stream off should succeed");
        sensor
            .set_control(ControlId::HorizontalFlip, 1)
            .expect("flip is writable again");
        assert_eq!(
            sensor
                .enum_mbus_code(Pad::Image, 0)
                .expect("index 0 exists"),
            PixelCode::Sgrbg10
        );
    }

    #[test]
    fn test_stream_on_powers_and_stream_off_releases() {
        let (sensor, bus, power) = attach();
        sensor.set_stream(true).expect("stream on should succeed");
        assert_eq!(sensor.state(), StreamState::Streaming);
        assert!(power.is_powered());
        assert!(sensor.common_regs_written());
        assert_eq!(bus.last_value(REG_MODE_SELECT), Some(MODE_STREAMING));

        sensor.set_stream(false).expect("stream off should succeed");
        assert_eq!(sensor.state(), StreamState::Off);
        assert!(!power.is_powered());
        assert!(!sensor.common_regs_written());
        assert_eq!(bus.last_value(REG_MODE_SELECT), Some(MODE_STANDBY));
    }

    #[test]
    fn test_stream_off_keeps_explicit_power() {
        let (sensor, _bus, power) = attach();
        sensor.power_on().expect("power on should succeed");
        sensor.set_stream(true).expect("stream on should succeed");
        sensor.set_stream(false).expect("stream off should succeed");

        assert_eq!(sensor.state(), StreamState::PoweredIdle);
        assert!(power.is_powered());
    }

    #[test]
    fn test_common_regs_written_once_per_power_cycle() {
        let (sensor, bus, _power) = attach();
        sensor.power_on().expect("power on should succeed");
        sensor.set_stream(true).expect("stream on should succeed");
        sensor.set_stream(false).expect("stream off should succeed");
        bus.clear_writes();

        sensor.set_stream(true).expect("stream on should succeed");
        let first = bus.writes().first().map(|write| write.address);
        assert_eq!(first, sensor.mode().regs.first().map(|reg| reg.address));
    }

    #[test]
    fn test_stop_streaming_failure_is_swallowed() {
        let (sensor, bus, _power) = attach();
        sensor.set_stream(true).expect("stream on should succeed");
        bus.fail_writes_to(REG_MODE_SELECT);

        sensor
            .set_stream(false)
            .expect("stream off always succeeds");
        assert_eq!(sensor.state(), StreamState::Off);
    }

    #[test]
    fn test_active_format_change_rejected_while_streaming() {
        let (sensor, _bus, _power) = attach();
        sensor.set_stream(true).expect("stream on should succeed");

        let request = MbusFormat::new(1920, 1080, PixelCode::Srggb10);
        let err = sensor
            .set_format(Pad::Image, Which::Active, &request)
            .expect_err("mode change while streaming");
        assert!(matches!(err, SensorError::Busy(_)));
        assert_eq!(sensor.mode().width, 9152);
    }

    #[test]
    fn test_try_format_leaves_device_untouched() {
        let (sensor, bus, _power) = attach();
        let mut config = sensor.init_pad_config();
        let request = MbusFormat::new(1280, 720, PixelCode::Sbggr10);

        let format = sensor
            .set_format(Pad::Image, Which::Try(&mut config), &request)
            .expect("try format should succeed");

        assert_eq!((format.width, format.height), (1280, 720));
        assert_eq!(format.code, PixelCode::Srggb10);
        assert_eq!(config.image, format);
        assert_eq!(sensor.mode().width, 9152);
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn test_set_selection_reports_mode_crop() {
        let (sensor, _bus, _power) = attach();
        let crop = sensor
            .set_selection(
                Pad::Image,
                SelectionTarget::Crop,
                Which::Active,
                Rect::new(0, 0, 64, 64),
            )
            .expect("crop request should be adjusted");
        assert_eq!(crop, sensor.mode().crop);

        let err = sensor
            .set_selection(
                Pad::Image,
                SelectionTarget::NativeSize,
                Which::Active,
                Rect::default(),
            )
            .expect_err("native size is read-only");
        assert!(matches!(err, SensorError::InvalidArgument(_)));
    }

    #[test]
    fn test_remove_returns_collaborators_powered_off() {
        let (sensor, _bus, power) = attach();
        sensor.set_stream(true).expect("stream on should succeed");

        let (_bus, power_back) = sensor.remove();
        assert!(!power_back.is_powered());
        assert!(!power.is_powered());
    }
}
