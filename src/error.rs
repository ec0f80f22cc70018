use std::io;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Failure taxonomy
// ---------------------------------------------------------------------------

/// Errors surfaced by the simulation engine and its exporters.
///
/// The run is one-shot and deterministic: any of these aborts it. Domain
/// violations are reported explicitly instead of degrading to a default
/// value or a NaN.
#[derive(Debug, Error)]
pub enum SimError {
    /// Configuration rejected before integration starts.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A horizontal position left the surveyed hill profile.
    #[error("position x = {x:.3} m is outside the modeled hill (0 to {max:.2} m)")]
    OutsideHill { x: f64, max: f64 },

    /// The flight-path angle is undefined for purely vertical motion under
    /// the quadrant-naive direction convention.
    #[error("flight direction undefined: horizontal velocity is zero")]
    VerticalVelocity,

    #[error(transparent)]
    Io(#[from] io::Error),
}
