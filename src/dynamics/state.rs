use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Kinematic state: one recorded integration step
// ---------------------------------------------------------------------------

/// Which stepping scheme the skier is under.
///
/// The takeoff jump between the two is a momentary velocity change, not a
/// phase of its own, and landing ends the run, so neither is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sliding down the in-run; scalar speed advances along the slope.
    OnTrack,
    /// Flying; velocity components advance under gravity, lift, and drag.
    Airborne,
}

/// Kinematic snapshot recorded once per integration step.
///
/// Positive x points toward the base of the hill, positive y is up.
/// `speed` and `accel` are the magnitudes of `vel` and `acc`. `vel_angle`
/// is the direction the step was computed with — the slope-table angle on
/// the in-run, the pre-update flight-path angle in the air — which is how
/// the reference model samples it. `slope_dist` freezes at its final
/// in-run value once airborne.
///
/// Samples are immutable once recorded; the run advances working copies
/// and never rewrites history.
#[derive(Debug, Clone)]
pub struct KinematicState {
    pub time: f64,              // s
    pub pos: Vector2<f64>,      // m
    pub vel: Vector2<f64>,      // m/s
    pub speed: f64,             // m/s, |vel|
    pub vel_angle: f64,         // rad from the +x axis
    pub acc: Vector2<f64>,      // m/s^2
    pub accel: f64,             // m/s^2, |acc|
    pub slope_dist: f64,        // m along the in-run surface
    pub phase: Phase,
}
