//! Attach-time hardware configuration.
//!
//! Describes how the sensor is wired on the board: bus addresses, input
//! clock and the CSI-2 link. Every field has a default matching the
//! reference camera module, so an empty file is a valid configuration.
//!
//! ```toml
//! i2c_address = 0x1a
//! identifier_address = 0x50
//! xclk_frequency = 24000000
//! data_lanes = 2
//! link_frequencies = [456000000]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SensorError};

/// Only supported input clock frequency in Hz.
pub const XCLK_FREQUENCY: u32 = 24_000_000;
/// Only supported CSI-2 lane count.
pub const DATA_LANES: u8 = 2;
/// Only supported CSI-2 link frequency in Hz.
pub const LINK_FREQUENCY: u64 = 456_000_000;

/// Board wiring of the sensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// 7-bit bus address of the sensor.
    pub i2c_address: u8,
    /// 7-bit bus address of the module's identifier device.
    pub identifier_address: u8,
    /// External input clock in Hz.
    pub xclk_frequency: u32,
    /// Number of CSI-2 data lanes.
    pub data_lanes: u8,
    /// CSI-2 link frequencies advertised by the board.
    pub link_frequencies: Vec<u64>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            i2c_address: 0x1a,
            identifier_address: 0x50,
            xclk_frequency: XCLK_FREQUENCY,
            data_lanes: DATA_LANES,
            link_frequencies: vec![LINK_FREQUENCY],
        }
    }
}

impl SensorConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::Config`] if the document does not parse.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| SensorError::Config(err.to_string()))
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| SensorError::Config(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Check the wiring against what the sensor supports.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::UnsupportedConfiguration`] if:
    /// - the input clock is not 24 MHz
    /// - the link does not use exactly 2 data lanes
    /// - the link frequencies are anything but a single 456 MHz entry
    pub fn validate(&self) -> Result<()> {
        if self.xclk_frequency != XCLK_FREQUENCY {
            return Err(SensorError::UnsupportedConfiguration(format!(
                "xclk frequency {} Hz not supported",
                self.xclk_frequency
            )));
        }
        if self.data_lanes != DATA_LANES {
            return Err(SensorError::UnsupportedConfiguration(format!(
                "only {DATA_LANES} data lanes are supported, got {}",
                self.data_lanes
            )));
        }
        if self.link_frequencies.as_slice() != [LINK_FREQUENCY] {
            return Err(SensorError::UnsupportedConfiguration(format!(
                "link frequencies {:?} not supported",
                self.link_frequencies
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SensorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.i2c_address, 0x1a);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SensorConfig::from_toml_str("").expect("empty document should parse");
        assert_eq!(config, SensorConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = SensorConfig::from_toml_str("i2c_address = 0x10\n")
            .expect("document should parse");
        assert_eq!(config.i2c_address, 0x10);
        assert_eq!(config.identifier_address, 0x50);
    }

    #[test]
    fn test_malformed_document_is_config_error() {
        let err = SensorConfig::from_toml_str("data_lanes = \"two\"")
            .expect_err("wrong type should fail");
        assert!(matches!(err, SensorError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_unsupported_link() {
        let lanes = SensorConfig {
            data_lanes: 4,
            ..SensorConfig::default()
        };
        assert!(matches!(
            lanes.validate(),
            Err(SensorError::UnsupportedConfiguration(_))
        ));

        let clock = SensorConfig {
            xclk_frequency: 19_200_000,
            ..SensorConfig::default()
        };
        assert!(clock.validate().is_err());

        let freqs = SensorConfig {
            link_frequencies: vec![LINK_FREQUENCY, 300_000_000],
            ..SensorConfig::default()
        };
        assert!(freqs.validate().is_err());

        let none = SensorConfig {
            link_frequencies: Vec::new(),
            ..SensorConfig::default()
        };
        assert!(none.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err =
            SensorConfig::load(Path::new("/nonexistent/arducam.toml")).expect_err("missing file");
        assert!(matches!(err, SensorError::Config(_)));
    }
}
