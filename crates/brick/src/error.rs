//! Error types for the renderer
//!
//! Every fallible operation in the crate returns [`BrickResult`].

/// Errors that can occur while building or driving entities
#[derive(Debug, Clone, PartialEq)]
pub enum BrickError {
    /// `use_animation` was called with a name that was never registered
    AnimationNotFound(String),

    /// A size, coordinate, scale or angle was rejected
    InvalidDimension {
        /// The property being set
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Frame rate was zero, negative or not finite
    InvalidFrameRate(f64),

    /// An animation was registered with no frames
    EmptyAnimation(String),

    /// The backing surface (DOM) refused an operation
    SurfaceError(String),
}

impl std::fmt::Display for BrickError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnimationNotFound(name) => write!(f, "unknown animation: {}", name),
            Self::InvalidDimension { field, value } => {
                write!(f, "invalid {}: {}", field, value)
            }
            Self::InvalidFrameRate(rate) => {
                write!(f, "invalid frame rate: {} (must be finite and > 0)", rate)
            }
            Self::EmptyAnimation(name) => write!(f, "animation '{}' has no frames", name),
            Self::SurfaceError(msg) => write!(f, "surface error: {}", msg),
        }
    }
}

impl std::error::Error for BrickError {}

/// Result type alias for renderer operations
pub type BrickResult<T> = Result<T, BrickError>;

/// Reject sizes that layout cannot use (negative or non-finite)
pub(crate) fn check_size(field: &'static str, value: f64) -> BrickResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        tracing::warn!(field, value, "rejected size");
        Err(BrickError::InvalidDimension { field, value })
    }
}

/// Reject non-finite values; negatives are fine (offsets, angles)
pub(crate) fn check_finite(field: &'static str, value: f64) -> BrickResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::warn!(field, value, "rejected non-finite value");
        Err(BrickError::InvalidDimension { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BrickError::AnimationNotFound("walk".to_string());
        assert_eq!(err.to_string(), "unknown animation: walk");

        let err = BrickError::InvalidDimension {
            field: "width",
            value: -4.0,
        };
        assert_eq!(err.to_string(), "invalid width: -4");

        let err = BrickError::InvalidFrameRate(0.0);
        assert_eq!(
            err.to_string(),
            "invalid frame rate: 0 (must be finite and > 0)"
        );

        let err = BrickError::EmptyAnimation("idle".to_string());
        assert_eq!(err.to_string(), "animation 'idle' has no frames");
    }

    #[test]
    fn test_check_size() {
        assert_eq!(check_size("width", 0.0), Ok(0.0));
        assert_eq!(check_size("width", 12.5), Ok(12.5));
        assert!(check_size("width", -1.0).is_err());
        assert!(check_size("height", f64::NAN).is_err());
        assert!(check_size("height", f64::INFINITY).is_err());
    }

    #[test]
    fn test_check_finite_allows_negative() {
        assert_eq!(check_finite("x", -50.0), Ok(-50.0));
        assert_eq!(
            check_finite("y", f64::NEG_INFINITY),
            Err(BrickError::InvalidDimension {
                field: "y",
                value: f64::NEG_INFINITY
            })
        );
    }
}
