//! Hypercube error types

use thiserror::Error;

/// Errors raised while building or transforming a hypercube
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HypercubeError {
    /// Fewer dimensions than the 3 kept after projection
    #[error("dimension must be at least {minimum}, got {dimension}")]
    DimensionTooSmall {
        /// Requested dimension
        dimension: usize,
        /// Smallest supported dimension
        minimum: usize,
    },

    /// More dimensions than the vertex index space can hold
    #[error("dimension must be at most {maximum}, got {dimension}")]
    DimensionTooLarge {
        /// Requested dimension
        dimension: usize,
        /// Largest supported dimension
        maximum: usize,
    },

    /// Rotation plane axes coincide or fall outside the hypercube
    #[error("invalid rotation plane ({first}, {second}) for a {dimension}-dimensional hypercube")]
    InvalidRotationPlane {
        /// First axis of the plane
        first: usize,
        /// Second axis of the plane
        second: usize,
        /// Dimension the plane was checked against
        dimension: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_too_small_display() {
        let err = HypercubeError::DimensionTooSmall { dimension: 2, minimum: 3 };
        let msg = err.to_string();
        assert!(msg.contains("at least 3"));
        assert!(msg.contains("got 2"));
    }

    #[test]
    fn test_dimension_too_large_display() {
        let err = HypercubeError::DimensionTooLarge { dimension: 40, maximum: 16 };
        assert_eq!(err.to_string(), "dimension must be at most 16, got 40");
    }

    #[test]
    fn test_invalid_plane_display() {
        let err = HypercubeError::InvalidRotationPlane { first: 2, second: 5, dimension: 4 };
        let msg = err.to_string();
        assert!(msg.contains("(2, 5)"));
        assert!(msg.contains("4-dimensional"));
    }
}
