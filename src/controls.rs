//! Named, ranged sensor controls.
//!
//! The control set only stores and validates values. Applying them to the
//! device is done by the driver, which knows whether the sensor is powered.

use crate::error::{Result, SensorError};
use crate::timing::{EXPOSURE_DEFAULT, EXPOSURE_MAX, EXPOSURE_MIN, EXPOSURE_STEP, PIXEL_RATE};

/// Analog gain limits.
pub const ANA_GAIN_MIN: i64 = 0;
/// Analog gain upper bound.
pub const ANA_GAIN_MAX: i64 = 1008;
/// Analog gain at attach.
pub const ANA_GAIN_DEFAULT: i64 = 0;

/// Digital gain lower bound (unity).
pub const DGTL_GAIN_MIN: i64 = 0x0100;
/// Digital gain upper bound.
pub const DGTL_GAIN_MAX: i64 = 0x0fff;
/// Digital gain at attach.
pub const DGTL_GAIN_DEFAULT: i64 = 0x0100;

/// Test pattern colour component upper bound.
pub const TEST_PATTERN_COLOUR_MAX: i64 = 0x0fff;

/// CSI-2 link frequencies the sensor supports.
pub const LINK_FREQUENCIES: &[i64] = &[456_000_000];

/// Test pattern menu entries.
pub const TEST_PATTERN_MENU: &[&str] = &[
    "Disabled",
    "Color Bars",
    "Solid Color",
    "Grey Color Bars",
    "PN9",
];

/// Register value for each [`TEST_PATTERN_MENU`] entry.
pub const TEST_PATTERN_VALUES: [u32; 5] = [0, 2, 1, 3, 4];

/// Control identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// Pixel rate in Hz (read-only).
    PixelRate,
    /// CSI-2 link frequency menu (read-only).
    LinkFrequency,
    /// Vertical blanking in lines.
    VerticalBlank,
    /// Horizontal blanking in pixels (read-only, follows the mode).
    HorizontalBlank,
    /// Exposure in lines.
    Exposure,
    /// Analog gain code.
    AnalogueGain,
    /// Digital gain, 8.8 fixed point.
    DigitalGain,
    /// Horizontal mirror.
    HorizontalFlip,
    /// Vertical flip.
    VerticalFlip,
    /// Test pattern selection.
    TestPattern,
    /// Solid colour test pattern red.
    TestPatternRed,
    /// Solid colour test pattern green (red rows).
    TestPatternGreenRed,
    /// Solid colour test pattern blue.
    TestPatternBlue,
    /// Solid colour test pattern green (blue rows).
    TestPatternGreenBlue,
}

impl ControlId {
    /// Number of controls.
    pub const COUNT: usize = 14;

    /// All controls in registration order. Replay follows this order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::PixelRate,
        Self::LinkFrequency,
        Self::VerticalBlank,
        Self::HorizontalBlank,
        Self::Exposure,
        Self::AnalogueGain,
        Self::DigitalGain,
        Self::HorizontalFlip,
        Self::VerticalFlip,
        Self::TestPattern,
        Self::TestPatternRed,
        Self::TestPatternGreenRed,
        Self::TestPatternBlue,
        Self::TestPatternGreenBlue,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PixelRate => "Pixel Rate",
            Self::LinkFrequency => "Link Frequency",
            Self::VerticalBlank => "Vertical Blanking",
            Self::HorizontalBlank => "Horizontal Blanking",
            Self::Exposure => "Exposure",
            Self::AnalogueGain => "Analogue Gain",
            Self::DigitalGain => "Digital Gain",
            Self::HorizontalFlip => "Horizontal Flip",
            Self::VerticalFlip => "Vertical Flip",
            Self::TestPattern => "Test Pattern",
            Self::TestPatternRed => "Red Pixel Value",
            Self::TestPatternGreenRed => "Green (Red) Pixel Value",
            Self::TestPatternBlue => "Blue Pixel Value",
            Self::TestPatternGreenBlue => "Green (Blue) Pixel Value",
        }
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Value type of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Integer; out of range values are rounded to step and clamped.
    Integer,
    /// 0 or 1.
    Boolean,
    /// Index into named entries.
    Menu(&'static [&'static str]),
    /// Index into integer entries.
    IntegerMenu(&'static [i64]),
}

/// Range, value and state of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    /// Identity.
    pub id: ControlId,
    /// Value type.
    pub kind: ControlKind,
    /// Smallest legal value.
    pub minimum: i64,
    /// Largest legal value.
    pub maximum: i64,
    /// Step between legal values.
    pub step: i64,
    /// Default value.
    pub default: i64,
    /// Current value.
    pub value: i64,
    /// Rejects all writes.
    pub read_only: bool,
    /// Temporarily rejects writes, e.g. flips while streaming.
    pub grabbed: bool,
}

impl ControlDescriptor {
    fn new(
        id: ControlId,
        kind: ControlKind,
        minimum: i64,
        maximum: i64,
        step: i64,
        default: i64,
    ) -> Self {
        Self {
            id,
            kind,
            minimum,
            maximum,
            step,
            default,
            value: default,
            read_only: false,
            grabbed: false,
        }
    }

    const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Bring `value` into range. Integers are rounded to the nearest step
    /// and clamped, other kinds must already be in range.
    pub fn validate(&self, value: i64) -> Result<i64> {
        match self.kind {
            ControlKind::Integer => {
                Ok(round_to_range(value, self.minimum, self.maximum, self.step))
            }
            ControlKind::Boolean | ControlKind::Menu(_) | ControlKind::IntegerMenu(_) => {
                if value < self.minimum || value > self.maximum {
                    return Err(SensorError::InvalidArgument(format!(
                        "{} value {value} outside {}..={}",
                        self.id, self.minimum, self.maximum
                    )));
                }
                Ok(value)
            }
        }
    }
}

fn round_to_range(value: i64, minimum: i64, maximum: i64, step: i64) -> i64 {
    let clamped = value.clamp(minimum, maximum);
    if step <= 1 {
        return clamped;
    }
    let offset = clamped - minimum;
    let rounded = minimum + step * ((offset + step / 2) / step);
    if rounded > maximum {
        rounded - step
    } else {
        rounded
    }
}

/// The full control table of the sensor.
#[derive(Debug, Clone)]
pub struct ControlSet {
    entries: Vec<ControlDescriptor>,
}

impl Default for ControlSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlSet {
    /// Create every control with provisional ranges. Blanking and exposure
    /// limits are replaced once a mode is selected.
    #[must_use]
    pub fn new() -> Self {
        use ControlId as Id;
        use ControlKind::{Boolean, Integer, IntegerMenu, Menu};

        #[allow(clippy::cast_possible_wrap)]
        let pixel_rate = PIXEL_RATE as i64;
        let menu_max = |len: usize| i64::try_from(len).map_or(0, |len| len - 1);

        let entries = vec![
            ControlDescriptor::new(Id::PixelRate, Integer, pixel_rate, pixel_rate, 1, pixel_rate)
                .read_only(),
            ControlDescriptor::new(
                Id::LinkFrequency,
                IntegerMenu(LINK_FREQUENCIES),
                0,
                menu_max(LINK_FREQUENCIES.len()),
                1,
                0,
            )
            .read_only(),
            ControlDescriptor::new(Id::VerticalBlank, Integer, 0, 0xffff, 1, 0),
            ControlDescriptor::new(Id::HorizontalBlank, Integer, 0, 0xffff, 1, 0).read_only(),
            ControlDescriptor::new(
                Id::Exposure,
                Integer,
                i64::from(EXPOSURE_MIN),
                i64::from(EXPOSURE_MAX),
                i64::from(EXPOSURE_STEP),
                i64::from(EXPOSURE_DEFAULT),
            ),
            ControlDescriptor::new(
                Id::AnalogueGain,
                Integer,
                ANA_GAIN_MIN,
                ANA_GAIN_MAX,
                1,
                ANA_GAIN_DEFAULT,
            ),
            ControlDescriptor::new(
                Id::DigitalGain,
                Integer,
                DGTL_GAIN_MIN,
                DGTL_GAIN_MAX,
                1,
                DGTL_GAIN_DEFAULT,
            ),
            ControlDescriptor::new(Id::HorizontalFlip, Boolean, 0, 1, 1, 0),
            ControlDescriptor::new(Id::VerticalFlip, Boolean, 0, 1, 1, 0),
            ControlDescriptor::new(
                Id::TestPattern,
                Menu(TEST_PATTERN_MENU),
                0,
                menu_max(TEST_PATTERN_MENU.len()),
                1,
                0,
            ),
            // The solid colour pattern is white by default.
            ControlDescriptor::new(
                Id::TestPatternRed,
                Integer,
                0,
                TEST_PATTERN_COLOUR_MAX,
                1,
                TEST_PATTERN_COLOUR_MAX,
            ),
            ControlDescriptor::new(
                Id::TestPatternGreenRed,
                Integer,
                0,
                TEST_PATTERN_COLOUR_MAX,
                1,
                TEST_PATTERN_COLOUR_MAX,
            ),
            ControlDescriptor::new(
                Id::TestPatternBlue,
                Integer,
                0,
                TEST_PATTERN_COLOUR_MAX,
                1,
                TEST_PATTERN_COLOUR_MAX,
            ),
            ControlDescriptor::new(
                Id::TestPatternGreenBlue,
                Integer,
                0,
                TEST_PATTERN_COLOUR_MAX,
                1,
                TEST_PATTERN_COLOUR_MAX,
            ),
        ];

        Self { entries }
    }

    /// Descriptor of `id`.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // one entry per ControlId, in ALL order
    pub fn get(&self, id: ControlId) -> &ControlDescriptor {
        &self.entries[id.index()]
    }

    #[allow(clippy::indexing_slicing)]
    fn get_mut(&mut self, id: ControlId) -> &mut ControlDescriptor {
        &mut self.entries[id.index()]
    }

    /// Current value of `id`.
    #[must_use]
    pub fn value(&self, id: ControlId) -> i64 {
        self.get(id).value
    }

    /// All descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ControlDescriptor> {
        self.entries.iter()
    }

    /// Validate a user write to `id`, returning the value to store.
    pub fn check_write(&self, id: ControlId, value: i64) -> Result<i64> {
        let ctrl = self.get(id);
        if ctrl.read_only {
            return Err(SensorError::InvalidArgument(format!("{id} is read-only")));
        }
        if ctrl.grabbed {
            return Err(SensorError::Busy(id.to_string()));
        }
        ctrl.validate(value)
    }

    /// Store an already validated value.
    pub fn store(&mut self, id: ControlId, value: i64) {
        self.get_mut(id).value = value;
    }

    /// Replace the range of `id`. The current value is clamped into the new
    /// range. Returns whether the current value changed.
    pub fn modify_range(
        &mut self,
        id: ControlId,
        minimum: i64,
        maximum: i64,
        step: i64,
        default: i64,
    ) -> bool {
        let ctrl = self.get_mut(id);
        ctrl.minimum = minimum;
        ctrl.maximum = maximum;
        ctrl.step = step;
        ctrl.default = default;

        let value = round_to_range(ctrl.value, minimum, maximum, step);
        let changed = value != ctrl.value;
        ctrl.value = value;
        changed
    }

    /// Lock or unlock `id` against user writes.
    pub fn grab(&mut self, id: ControlId, grabbed: bool) {
        self.get_mut(id).grabbed = grabbed;
    }

    /// Writable controls in replay order.
    pub fn writable(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.entries
            .iter()
            .filter(|ctrl| !ctrl.read_only)
            .map(|ctrl| ctrl.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_follow_id_order() {
        let set = ControlSet::new();
        let ids: Vec<ControlId> = set.iter().map(|ctrl| ctrl.id).collect();
        assert_eq!(ids, ControlId::ALL.to_vec());
    }

    #[test]
    fn test_integer_values_are_clamped() {
        let set = ControlSet::new();
        assert_eq!(set.check_write(ControlId::AnalogueGain, 5000), Ok(ANA_GAIN_MAX));
        assert_eq!(set.check_write(ControlId::DigitalGain, 0), Ok(DGTL_GAIN_MIN));
        assert_eq!(set.check_write(ControlId::AnalogueGain, 512), Ok(512));
    }

    #[test]
    fn test_round_to_step() {
        assert_eq!(round_to_range(13, 0, 100, 4), 12);
        assert_eq!(round_to_range(14, 0, 100, 4), 16);
        assert_eq!(round_to_range(99, 0, 99, 4), 96);
        assert_eq!(round_to_range(-5, 10, 20, 1), 10);
    }

    #[test]
    fn test_menu_and_boolean_reject_out_of_range() {
        let set = ControlSet::new();
        assert!(matches!(
            set.check_write(ControlId::TestPattern, 5),
            Err(SensorError::InvalidArgument(_))
        ));
        assert!(matches!(
            set.check_write(ControlId::HorizontalFlip, 2),
            Err(SensorError::InvalidArgument(_))
        ));
        assert_eq!(set.check_write(ControlId::TestPattern, 4), Ok(4));
    }

    #[test]
    fn test_read_only_controls_reject_writes() {
        let set = ControlSet::new();
        for id in [ControlId::PixelRate, ControlId::LinkFrequency, ControlId::HorizontalBlank] {
            assert!(matches!(set.check_write(id, 0), Err(SensorError::InvalidArgument(_))));
        }
        assert!(set.writable().all(|id| !set.get(id).read_only));
    }

    #[test]
    fn test_grabbed_control_is_busy() {
        let mut set = ControlSet::new();
        set.grab(ControlId::VerticalFlip, true);
        assert!(matches!(
            set.check_write(ControlId::VerticalFlip, 1),
            Err(SensorError::Busy(_))
        ));

        set.grab(ControlId::VerticalFlip, false);
        assert_eq!(set.check_write(ControlId::VerticalFlip, 1), Ok(1));
    }

    #[test]
    fn test_modify_range_clamps_current_value() {
        let mut set = ControlSet::new();
        set.store(ControlId::Exposure, 5000);

        let changed = set.modify_range(ControlId::Exposure, 9, 1350, 1, 1000);
        assert!(changed);
        assert_eq!(set.value(ControlId::Exposure), 1350);

        let changed = set.modify_range(ControlId::Exposure, 9, 60000, 1, 1000);
        assert!(!changed);
        assert_eq!(set.get(ControlId::Exposure).maximum, 60000);
    }

    #[test]
    fn test_test_pattern_colours_default_to_white() {
        let set = ControlSet::new();
        assert_eq!(set.value(ControlId::TestPatternRed), TEST_PATTERN_COLOUR_MAX);
        assert_eq!(set.value(ControlId::TestPatternGreenBlue), TEST_PATTERN_COLOUR_MAX);
        assert_eq!(TEST_PATTERN_VALUES.len(), TEST_PATTERN_MENU.len());
    }
}
