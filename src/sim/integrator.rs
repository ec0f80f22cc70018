use nalgebra::Vector2;

use crate::error::SimError;
use crate::physics::hill;
use crate::physics::Aerodynamics;
use crate::skier::SkierParameters;

// ---------------------------------------------------------------------------
// Explicit Euler stepping, one scheme per phase
// ---------------------------------------------------------------------------
//
// Both schemes refresh velocity first-order and then advance position with
// the half-acceleration term using the refreshed velocity. They differ in
// what is stepped: the in-run integrates scalar speed along the slope
// surface, flight integrates the velocity components. The asymmetry is
// part of the reference model; each scheme is a named function here so it
// stays visible instead of being buried in loop arithmetic.

/// Height of the skier's standing jump off the takeoff table, m.
pub const JUMP_RAISE: f64 = 0.4;

/// Result of one in-run step.
#[derive(Debug, Clone, Copy)]
pub struct TrackStep {
    pub slope_dist: f64,
    pub speed: f64,
    pub slope_angle: f64,
    pub accel: f64,
}

/// Advance the skier one step along the in-run surface.
///
/// Gravity accelerates along the slope, friction opposes motion, and the
/// crouched posture contributes a lumped quadratic air-resistance term
/// (the full lift/drag pair only applies in flight).
pub fn track_step(slope_dist: f64, speed: f64, p: &SkierParameters) -> TrackStep {
    let angle = hill::slope_angle(slope_dist);
    let accel = p.gravity * ((-angle).sin() - p.friction_coeff * (-angle).cos())
        - 0.5 * p.air_density * p.frontal_area_takeoff * 0.5 * speed * speed / p.total_mass;
    let speed = speed + accel * p.dt;
    let slope_dist = slope_dist + speed * p.dt + 0.5 * accel * p.dt * p.dt;
    TrackStep { slope_dist, speed, slope_angle: angle, accel }
}

/// Airborne velocity right after the takeoff jump.
///
/// The in-run exit speed is carried over the lip and the push of a 0.4 m
/// standing jump is added normal to the surface at `lip_angle`.
pub fn takeoff_impulse(speed: f64, lip_angle: f64, p: &SkierParameters) -> Vector2<f64> {
    let push = (2.0 * p.gravity * JUMP_RAISE).sqrt();
    Vector2::new(
        speed * lip_angle.cos() + push * lip_angle.sin(),
        speed * -lip_angle.sin() + push * lip_angle.cos(),
    )
}

/// Result of one flight step.
#[derive(Debug, Clone, Copy)]
pub struct FlightStep {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    /// Speed after the velocity update.
    pub speed: f64,
    pub acc: Vector2<f64>,
    /// Flight-path angle the forces were evaluated at (pre-update).
    pub vel_angle: f64,
}

/// Advance the skier one step of free flight.
///
/// Lift acts normal to the flight path, drag along it, gravity straight
/// down. Forces are evaluated at the pre-update state.
pub fn flight_step(
    pos: Vector2<f64>,
    vel: Vector2<f64>,
    t_air: f64,
    aero: &Aerodynamics,
    p: &SkierParameters,
) -> Result<FlightStep, SimError> {
    let speed = vel.norm();
    let vel_angle = p.direction_mode.flight_direction(&vel)?;
    let lift = aero.lift_force(speed, vel_angle, t_air);
    let drag = aero.drag_force(speed, vel_angle, t_air);

    let acc = Vector2::new(
        (lift * -vel_angle.sin() + drag * -vel_angle.cos()) / p.total_mass,
        -p.gravity + (lift * vel_angle.cos() + drag * -vel_angle.sin()) / p.total_mass,
    );

    let vel = vel + acc * p.dt;
    let speed = vel.norm();
    let pos = pos + vel * p.dt + acc * (0.5 * p.dt * p.dt);

    Ok(FlightStep { pos, vel, speed, acc, vel_angle })
}

// ---------------------------------------------------------------------------
// Flight-path angle convention
// ---------------------------------------------------------------------------

/// How the flight-path angle is computed from the velocity vector.
///
/// The posture schedule was fitted against a first/fourth-quadrant
/// direction (plain arctangent of vy/vx), so that is the default.
/// `FullQuadrant` swaps in the four-quadrant arctangent for comparing the
/// corrected geometry against the fit without touching the integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectionMode {
    #[default]
    QuadrantNaive,
    FullQuadrant,
}

impl DirectionMode {
    /// Flight-path angle of `vel`, rad.
    ///
    /// Under `QuadrantNaive`, purely vertical motion has no defined
    /// direction and is rejected instead of propagating a NaN.
    pub fn flight_direction(self, vel: &Vector2<f64>) -> Result<f64, SimError> {
        match self {
            DirectionMode::QuadrantNaive => {
                if vel.x == 0.0 {
                    return Err(SimError::VerticalVelocity);
                }
                Ok((vel.y / vel.x).atan())
            }
            DirectionMode::FullQuadrant => Ok(vel.y.atan2(vel.x)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
