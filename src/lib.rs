//! Arducam-64MP: control engine for the Arducam 64MP image sensor
//!
//! This library negotiates capture modes, manages sensor controls and frame
//! timing, and sequences power and streaming over an `embedded-hal` I²C bus.
//! The host pipeline talks to it through the [`SensorSubdev`] and
//! [`PowerManaged`] traits; a simulated bus and power rails in [`mock`] allow
//! running it without hardware.

pub mod config;
pub mod controls;
pub mod device;
pub mod error;
pub mod format;
pub mod mock;
pub mod modes;
pub mod regs;
pub mod timing;
pub mod traits;

pub use config::SensorConfig;
pub use controls::{ControlDescriptor, ControlId, ControlKind};
pub use device::{Arducam64mp, StreamState};
pub use error::{Result, SensorError};
pub use modes::{Mode, SUPPORTED_MODES};
pub use traits::{
    FourCC, MbusFormat, Pad, PadConfig, PixelCode, PowerControl, PowerManaged, Rect,
    SelectionTarget, SensorSubdev, Which,
};
