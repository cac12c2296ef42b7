//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Configuration the engine cannot run with
    #[error("invalid layout configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The spiral walk hit its step limit without finding free space
    #[error("no free position found for '{text}' after {steps} spiral steps")]
    Unplaceable { text: String, steps: u64 },
}

impl LayoutError {
    /// Create an invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an unplaceable word error
    pub fn unplaceable(text: impl Into<String>, steps: u64) -> Self {
        Self::Unplaceable {
            text: text.into(),
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = LayoutError::invalid_config("canvas must be positive");
        assert!(err.to_string().contains("canvas must be positive"));
    }

    #[test]
    fn test_unplaceable_display() {
        let err = LayoutError::unplaceable("Alice", 10);
        assert!(err.to_string().contains("'Alice'"));
        assert!(err.to_string().contains("10"));
    }
}
