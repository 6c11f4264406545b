//! Errors returned by sketch construction, merging, rollup, bias registration
//! and bias generation.

/// Broad category of a [`SketchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid construction parameters, detected before any work is done.
    Configuration,
    /// Sketches produced by incompatible versions or precisions.
    Compatibility,
    /// Absent or corrupted persisted sketch data.
    Malformed,
}

/// Sketch error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SketchError {
    #[error("bias key must not be empty")]
    EmptyBiasKey,
    #[error("biases must contain at least one tick")]
    EmptyBiases,
    #[error("biases '{0}' were not found, they may not have been registered")]
    UnknownBiases(String),
    #[error("invalid generation options: {0}")]
    InvalidOptions(&'static str),
    #[error("rollup requires at least one sketch")]
    EmptyRollup,
    #[error("sketch version mismatch: expected '{expected}', found '{found}'")]
    VersionMismatch { expected: String, found: String },
    #[error("sketch precision mismatch: expected {expected} registers, found {found}")]
    PrecisionMismatch { expected: usize, found: usize },
    #[error("malformed sketch: {0}")]
    Malformed(String),
}

impl SketchError {
    /// Return the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SketchError::EmptyBiasKey
            | SketchError::EmptyBiases
            | SketchError::UnknownBiases(_)
            | SketchError::InvalidOptions(_)
            | SketchError::EmptyRollup => ErrorKind::Configuration,
            SketchError::VersionMismatch { .. } | SketchError::PrecisionMismatch { .. } => {
                ErrorKind::Compatibility
            }
            SketchError::Malformed(_) => ErrorKind::Malformed,
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(SketchError::EmptyBiasKey => ErrorKind::Configuration)]
    #[test_case(SketchError::EmptyBiases => ErrorKind::Configuration)]
    #[test_case(SketchError::UnknownBiases("x".into()) => ErrorKind::Configuration)]
    #[test_case(SketchError::InvalidOptions("repeats") => ErrorKind::Configuration)]
    #[test_case(SketchError::EmptyRollup => ErrorKind::Configuration)]
    #[test_case(SketchError::VersionMismatch { expected: "1".into(), found: "2".into() } => ErrorKind::Compatibility)]
    #[test_case(SketchError::PrecisionMismatch { expected: 16384, found: 1 } => ErrorKind::Compatibility)]
    #[test_case(SketchError::Malformed("garbage".into()) => ErrorKind::Malformed)]
    fn test_kind(err: SketchError) -> ErrorKind {
        err.kind()
    }

    #[test]
    fn test_display() {
        let err = SketchError::PrecisionMismatch {
            expected: 16384,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "sketch precision mismatch: expected 16384 registers, found 1"
        );
    }
}
