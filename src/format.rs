//! Pad formats, mode lookup and selection rectangles.

use crate::modes::{Mode, EMBEDDED_LINE_WIDTH, NATIVE_SIZE, NUM_EMBEDDED_LINES, PIXEL_ARRAY};
use crate::traits::{MbusFormat, PadConfig, PixelCode, Rect, SelectionTarget};

/// Bayer code produced with the given flips.
///
/// Flipping changes which colour the first pixel of the readout lands on.
#[must_use]
pub const fn bayer_code(hflip: bool, vflip: bool) -> PixelCode {
    match (hflip, vflip) {
        (false, false) => PixelCode::BAYER_ORDER[0],
        (true, false) => PixelCode::BAYER_ORDER[1],
        (false, true) => PixelCode::BAYER_ORDER[2],
        (true, true) => PixelCode::BAYER_ORDER[3],
    }
}

/// Catalog entry closest to `width` x `height`.
///
/// Distance is `|Δw| + |Δh|`. Ties go to the earliest entry. `None` only for
/// an empty catalog.
#[must_use]
pub fn nearest_mode(modes: &'static [Mode], width: u32, height: u32) -> Option<&'static Mode> {
    let mut best: Option<(&'static Mode, u64)> = None;
    for mode in modes {
        let distance =
            u64::from(mode.width.abs_diff(width)) + u64::from(mode.height.abs_diff(height));
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((mode, distance)),
        }
    }
    best.map(|(mode, _)| mode)
}

/// Image pad format for `mode`.
#[must_use]
pub fn image_format(mode: &Mode, code: PixelCode) -> MbusFormat {
    MbusFormat::new(mode.width, mode.height, code)
}

/// Metadata pad format. Fixed regardless of mode or request.
#[must_use]
pub fn metadata_format() -> MbusFormat {
    MbusFormat::new(EMBEDDED_LINE_WIDTH, NUM_EMBEDDED_LINES, PixelCode::SensorData)
}

/// Try state seeded from `mode`, with the crop covering the full active
/// array.
#[must_use]
pub fn default_pad_config(mode: &Mode, code: PixelCode) -> PadConfig {
    PadConfig {
        image: image_format(mode, code),
        metadata: metadata_format(),
        crop: PIXEL_ARRAY,
    }
}

/// Fixed selection rectangles. `Crop` depends on state and is resolved by
/// the caller.
#[must_use]
pub const fn fixed_selection(target: SelectionTarget) -> Option<Rect> {
    match target {
        SelectionTarget::CropDefault | SelectionTarget::CropBounds => Some(PIXEL_ARRAY),
        SelectionTarget::NativeSize => Some(NATIVE_SIZE),
        SelectionTarget::Crop => None,
    }
}
