use thiserror::Error;

/// Fatal layout failures. Degraded placements (a label that loses its leader
/// line, or a search that runs out of radial rings) are not errors; they are
/// reported per label on the result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("bubble {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },
    #[error("label {index} has invalid size {width}x{height}")]
    InvalidLabelSize {
        index: usize,
        width: f32,
        height: f32,
    },
}
