//! Core traits and value types shared with the host capture pipeline.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::controls::{ControlDescriptor, ControlId};
use crate::error::{PowerError, Result};

/// Pixel format representation as seen by a V4L2 video node (e.g. `pRAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// Create a new `FourCC` from a 4-byte array.
    #[must_use]
    pub const fn new(code: &[u8; 4]) -> Self {
        Self(*code)
    }

    /// 10-bit packed Bayer RGGB.
    pub const SRGGB10P: Self = Self::new(b"pRAA");
    /// 10-bit packed Bayer GRBG.
    pub const SGRBG10P: Self = Self::new(b"pgAA");
    /// 10-bit packed Bayer GBRG.
    pub const SGBRG10P: Self = Self::new(b"pGAA");
    /// 10-bit packed Bayer BGGR.
    pub const SBGGR10P: Self = Self::new(b"pBAA");
    /// Sensor embedded data.
    pub const SENSOR_DATA: Self = Self::new(b"SENS");
}

impl From<v4l::FourCC> for FourCC {
    fn from(fourcc: v4l::FourCC) -> Self {
        Self(fourcc.repr)
    }
}

impl From<FourCC> for v4l::FourCC {
    fn from(fourcc: FourCC) -> Self {
        Self::new(&fourcc.0)
    }
}

/// Media-bus pixel code emitted on a sensor pad.
///
/// The four Bayer variants are ordered no-flip, h-flip, v-flip, both, so
/// the variant for a flip pair is `BAYER_ORDER[2 * v + h]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelCode {
    /// `MEDIA_BUS_FMT_SRGGB10_1X10`
    Srggb10,
    /// `MEDIA_BUS_FMT_SGRBG10_1X10`
    Sgrbg10,
    /// `MEDIA_BUS_FMT_SGBRG10_1X10`
    Sgbrg10,
    /// `MEDIA_BUS_FMT_SBGGR10_1X10`
    Sbggr10,
    /// `MEDIA_BUS_FMT_SENSOR_DATA`, the embedded metadata lines.
    SensorData,
}

impl PixelCode {
    /// Bayer variants indexed by `2 * vflip + hflip`.
    pub const BAYER_ORDER: [Self; 4] = [Self::Srggb10, Self::Sgrbg10, Self::Sgbrg10, Self::Sbggr10];

    /// Numeric media-bus code.
    #[must_use]
    pub const fn mbus_code(self) -> u32 {
        match self {
            Self::Srggb10 => 0x300f,
            Self::Sgrbg10 => 0x300a,
            Self::Sgbrg10 => 0x300e,
            Self::Sbggr10 => 0x3007,
            Self::SensorData => 0x7002,
        }
    }

    /// Memory format a CSI-2 receiver produces for this bus code.
    #[must_use]
    pub const fn fourcc(self) -> FourCC {
        match self {
            Self::Srggb10 => FourCC::SRGGB10P,
            Self::Sgrbg10 => FourCC::SGRBG10P,
            Self::Sgbrg10 => FourCC::SGBRG10P,
            Self::Sbggr10 => FourCC::SBGGR10P,
            Self::SensorData => FourCC::SENSOR_DATA,
        }
    }
}

/// Field order of a pad format. The sensor is progressive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// No interlacing.
    #[default]
    None,
}

/// Colorimetry of a pad format. Raw sensor data carries no colour space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Colorimetry {
    /// Colour space tag.
    pub colorspace: Colorspace,
    /// Y'CbCr encoding (default for raw).
    pub ycbcr_enc: YcbcrEncoding,
    /// Quantization range.
    pub quantization: Quantization,
    /// Transfer function.
    pub xfer_func: TransferFunction,
}

/// Colour space tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colorspace {
    /// Unprocessed sensor data.
    #[default]
    Raw,
}

/// Y'CbCr encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YcbcrEncoding {
    /// Encoding implied by the colour space.
    #[default]
    Default,
}

/// Quantization range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantization {
    /// Full 0..2^n-1 range, the default for raw Bayer data.
    #[default]
    FullRange,
}

/// Transfer function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferFunction {
    /// No transfer function applied.
    #[default]
    None,
}

/// Media-bus format on a pad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MbusFormat {
    /// Frame width in pixels (bytes per line for metadata).
    pub width: u32,
    /// Frame height in lines.
    pub height: u32,
    /// Pixel code.
    pub code: PixelCode,
    /// Field order.
    pub field: Field,
    /// Colorimetry.
    pub colorimetry: Colorimetry,
}

impl MbusFormat {
    /// Create a progressive raw format.
    #[must_use]
    pub fn new(width: u32, height: u32, code: PixelCode) -> Self {
        Self {
            width,
            height,
            code,
            field: Field::None,
            colorimetry: Colorimetry::default(),
        }
    }
}

/// Rectangle in sensor pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: u32,
    /// Top edge.
    pub top: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// A time-per-frame ratio in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    /// Numerator.
    pub numerator: u32,
    /// Denominator.
    pub denominator: u32,
}

impl Fraction {
    /// Create a fraction.
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

/// Source pads of the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    /// Bayer image data.
    Image,
    /// Embedded metadata lines.
    Metadata,
}

/// Caller-owned negotiation scratch state ("try" formats).
///
/// Created by [`SensorSubdev::init_pad_config`] and discarded by the caller;
/// the live format lives inside the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadConfig {
    /// Candidate image pad format.
    pub image: MbusFormat,
    /// Candidate metadata pad format.
    pub metadata: MbusFormat,
    /// Candidate crop rectangle.
    pub crop: Rect,
}

impl PadConfig {
    /// Candidate format for a pad.
    #[must_use]
    pub const fn format(&self, pad: Pad) -> &MbusFormat {
        match pad {
            Pad::Image => &self.image,
            Pad::Metadata => &self.metadata,
        }
    }

    /// Mutable candidate format for a pad.
    pub fn format_mut(&mut self, pad: Pad) -> &mut MbusFormat {
        match pad {
            Pad::Image => &mut self.image,
            Pad::Metadata => &mut self.metadata,
        }
    }
}

/// Which state a format or selection operation addresses.
#[derive(Debug)]
pub enum Which<'a> {
    /// Caller-owned candidate state; the device is not touched.
    Try(&'a mut PadConfig),
    /// The live device state.
    Active,
}

/// Selection rectangle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTarget {
    /// Analog crop of the selected mode.
    Crop,
    /// Default crop: the full active pixel array.
    CropDefault,
    /// Crop bounds: the full active pixel array.
    CropBounds,
    /// Full physical array including the non-active border.
    NativeSize,
}

/// Frame size advertised for one enumeration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSizeRange {
    /// Minimum width.
    pub min_width: u32,
    /// Maximum width.
    pub max_width: u32,
    /// Minimum height.
    pub min_height: u32,
    /// Maximum height.
    pub max_height: u32,
}

impl FrameSizeRange {
    /// A single discrete size.
    #[must_use]
    pub const fn discrete(width: u32, height: u32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }
}

/// Power rails, input clock and reset line of the sensor module.
pub trait PowerControl {
    /// Enable all supplies. They can be enabled in any order.
    fn enable_supplies(&mut self) -> std::result::Result<(), PowerError>;

    /// Disable all supplies.
    fn disable_supplies(&mut self);

    /// Enable the external input clock.
    fn enable_clock(&mut self) -> std::result::Result<(), PowerError>;

    /// Disable the external input clock.
    fn disable_clock(&mut self);

    /// Drive the XCLR reset line. `true` takes the sensor out of reset.
    fn set_reset(&mut self, asserted: bool) -> std::result::Result<(), PowerError>;

    /// Wait for the sensor to settle after reset.
    fn settle(&mut self, window: RangeInclusive<Duration>) {
        std::thread::sleep(*window.start());
    }
}

/// Format negotiation, control and streaming interface exposed to a host
/// pipeline adapter.
pub trait SensorSubdev {
    /// Fresh try state for a newly opened file handle.
    fn init_pad_config(&self) -> PadConfig;

    /// Pixel code at `index` on `pad`.
    fn enum_mbus_code(&self, pad: Pad, index: u32) -> Result<PixelCode>;

    /// Frame size at `index` for `code` on `pad`.
    fn enum_frame_size(&self, pad: Pad, code: PixelCode, index: u32) -> Result<FrameSizeRange>;

    /// Current format on `pad`.
    fn format(&self, pad: Pad, which: Which<'_>) -> Result<MbusFormat>;

    /// Negotiate a format on `pad`. Returns the format actually selected.
    fn set_format(&self, pad: Pad, which: Which<'_>, request: &MbusFormat) -> Result<MbusFormat>;

    /// Selection rectangle for `target` on `pad`.
    fn selection(&self, pad: Pad, target: SelectionTarget, which: Which<'_>) -> Result<Rect>;

    /// Request a selection rectangle. The crop is fixed by the mode, so the
    /// request is adjusted to the crop in effect, which is returned.
    fn set_selection(
        &self,
        pad: Pad,
        target: SelectionTarget,
        which: Which<'_>,
        request: Rect,
    ) -> Result<Rect>;

    /// Start or stop streaming.
    fn set_stream(&self, enable: bool) -> Result<()>;

    /// Descriptor of a single control.
    fn control(&self, id: ControlId) -> ControlDescriptor;

    /// Descriptors of all controls.
    fn controls(&self) -> Vec<ControlDescriptor>;

    /// Set a control. Returns the value actually stored after rounding.
    fn set_control(&self, id: ControlId, value: i64) -> Result<i64>;
}

/// Power lifecycle hooks driven by a power-management framework.
pub trait PowerManaged {
    /// Runtime resume: bring up power, clock and reset.
    fn power_on(&self) -> Result<()>;

    /// Runtime suspend: remove power.
    fn power_off(&self) -> Result<()>;

    /// System sleep entry.
    fn suspend(&self) -> Result<()>;

    /// System sleep exit.
    fn resume(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourcc_round_trips_through_v4l() {
        let v4l_fourcc: v4l::FourCC = PixelCode::Sbggr10.fourcc().into();
        assert_eq!(&v4l_fourcc.repr, b"pBAA");
        assert_eq!(FourCC::from(v4l_fourcc), FourCC::SBGGR10P);
    }

    #[test]
    fn test_bayer_order_matches_mbus_codes() {
        let codes: Vec<u32> = PixelCode::BAYER_ORDER
            .iter()
            .map(|code| code.mbus_code())
            .collect();
        assert_eq!(codes, vec![0x300f, 0x300a, 0x300e, 0x3007]);
    }

    #[test]
    fn test_raw_colorimetry_defaults() {
        let fmt = MbusFormat::new(1920, 1080, PixelCode::Srggb10);
        assert_eq!(fmt.field, Field::None);
        assert_eq!(fmt.colorimetry.colorspace, Colorspace::Raw);
        assert_eq!(fmt.colorimetry.quantization, Quantization::FullRange);
    }

    #[test]
    fn test_pad_config_format_by_pad() {
        let mut config = PadConfig {
            image: MbusFormat::new(1920, 1080, PixelCode::Srggb10),
            metadata: MbusFormat::new(34_680, 1, PixelCode::SensorData),
            crop: Rect::default(),
        };
        assert_eq!(config.format(Pad::Metadata).code, PixelCode::SensorData);

        config.format_mut(Pad::Image).width = 1280;
        assert_eq!(config.image.width, 1280);
        assert_eq!(config.format(Pad::Image), &config.image);
    }
}
