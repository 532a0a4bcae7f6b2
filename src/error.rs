//! Error type for sensor control operations.

use embedded_hal::i2c::ErrorKind;
use thiserror::Error;

/// Stage of the power-up sequence that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStage {
    /// Enabling the VANA/VDIG/VDDL supplies.
    Supplies,
    /// Enabling the external input clock.
    Clock,
    /// Driving the XCLR reset line.
    Reset,
}

impl std::fmt::Display for PowerStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Supplies => "supplies",
            Self::Clock => "clock",
            Self::Reset => "reset line",
        };
        f.write_str(label)
    }
}

/// Failure reported by a power rail, clock or reset line collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PowerError(pub String);

/// Error type for sensor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    /// A register read or write failed on the bus.
    #[error("register 0x{address:04x} access failed: {kind}")]
    Bus {
        /// Register address of the failed access.
        address: u16,
        /// Transport failure reported by the bus.
        kind: ErrorKind,
    },

    /// Requested control, value, pad or index is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Hardware configuration the driver cannot operate with.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// The chip identity register did not hold the expected value.
    #[error("chip id mismatch: expected 0x{expected:04x}, {}", describe_found(.found))]
    IdentityMismatch {
        /// Expected chip id.
        expected: u32,
        /// Value read back, `None` when the device did not answer.
        found: Option<u32>,
    },

    /// The target is locked by an active stream.
    #[error("{0} is busy while streaming")]
    Busy(String),

    /// A power-up step failed; everything enabled before it was rolled back.
    #[error("power-up failed at {stage}: {source}")]
    Power {
        /// Step that failed.
        stage: PowerStage,
        /// Collaborator failure.
        #[source]
        source: PowerError,
    },

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

fn describe_found(found: &Option<u32>) -> String {
    found.map_or_else(
        || "no answer from device".to_owned(),
        |value| format!("found 0x{value:04x}"),
    )
}

/// Result type for sensor operations.
pub type Result<T> = std::result::Result<T, SensorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::NoAcknowledgeSource;

    #[test]
    fn test_bus_error_names_register() {
        let err = SensorError::Bus {
            address: 0x0340,
            kind: ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data),
        };
        assert!(err.to_string().starts_with("register 0x0340"));
    }

    #[test]
    fn test_identity_mismatch_message() {
        let wrong = SensorError::IdentityMismatch {
            expected: 0x4136,
            found: Some(0x0477),
        };
        assert_eq!(
            wrong.to_string(),
            "chip id mismatch: expected 0x4136, found 0x0477"
        );

        let absent = SensorError::IdentityMismatch {
            expected: 0x4136,
            found: None,
        };
        assert!(absent.to_string().ends_with("no answer from device"));
    }
}
