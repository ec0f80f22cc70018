use crate::skier::SkierParameters;

// ---------------------------------------------------------------------------
// Empirical in-flight aerodynamics
// ---------------------------------------------------------------------------

/// Degrees-per-radian factor baked into the fitted coefficient polynomials.
/// The regression used the rounded 180/3.14 conversion, so the constant is
/// part of the fit and must not be replaced with the exact value.
const DEG_PER_RAD_FIT: f64 = 180.0 / 3.14;

/// Flight-posture schedule: `(window_end, ski_offset, body_extra)` keyed by
/// time since takeoff, s. The offsets are angular corrections applied to
/// the flight-path angle; values were read off telemetry of the reference
/// jump. Beyond the last window the posture settles to `SETTLED_POSTURE`.
const POSTURE_SCHEDULE: [(f64, f64, f64); 9] = [
    (0.04, 0.209, 1.187),
    (0.21, 0.087, -1.047),
    (0.63, -0.209, -0.349),
    (1.05, -0.122, -0.349),
    (1.43, -0.105, -0.349),
    (2.04, -0.035, -0.349),
    (2.26, -0.017, -0.349),
    (2.71, -0.017, -0.349),
    (3.26, -0.017, -0.349),
];

/// `(ski_offset, body_extra)` once the in-flight posture has settled.
const SETTLED_POSTURE: (f64, f64) = (-0.035, -0.349);

/// Attack angles of skis and body against the velocity vector, rad, at
/// `t_air` seconds after takeoff.
///
/// The ski angle is the magnitude of the flight-path angle shifted by the
/// scheduled ski offset; the body angle additionally carries the torso
/// lean relative to the skis.
pub fn attack_angles(vel_angle: f64, t_air: f64) -> (f64, f64) {
    let (ski_off, body_extra) = POSTURE_SCHEDULE
        .iter()
        .find(|(end, _, _)| t_air <= *end)
        .map(|(_, ski, body)| (*ski, *body))
        .unwrap_or(SETTLED_POSTURE);
    let ski = (vel_angle + ski_off).abs();
    let body = (vel_angle + body_extra + ski_off).abs();
    (ski, body)
}

/// Lift and drag for the flight phase.
///
/// Pure functions of speed, flight-path angle, and time since takeoff; the
/// posture schedule and coefficient fits come from published jump data.
/// Captures the ambient density and frontal areas once so force queries
/// carry no other context.
#[derive(Debug, Clone, Copy)]
pub struct Aerodynamics {
    air_density: f64,
    area_skis: f64,
    area_body: f64,
}

impl Aerodynamics {
    pub fn new(params: &SkierParameters) -> Self {
        Self {
            air_density: params.air_density,
            area_skis: params.frontal_area_skis,
            area_body: params.frontal_area_body,
        }
    }

    /// Drag force magnitude, N. Always non-negative.
    ///
    /// The drag coefficient grows linearly with the ski attack angle (in
    /// degrees); the projected area is the sine-weighted blend of ski and
    /// body frontal areas.
    pub fn drag_force(&self, speed: f64, vel_angle: f64, t_air: f64) -> f64 {
        let (ski, body) = attack_angles(vel_angle, t_air);
        let cd = 0.0103 * ski * DEG_PER_RAD_FIT;
        let area = self.area_skis * ski.sin() + self.area_body * body.sin();
        (0.5 * self.air_density * area * cd * speed * speed).abs()
    }

    /// Lift force magnitude, N. Always non-negative.
    ///
    /// Quadratic empirical fit in the ski attack angle (degrees); cosine
    /// area projection.
    pub fn lift_force(&self, speed: f64, vel_angle: f64, t_air: f64) -> f64 {
        let (ski, body) = attack_angles(vel_angle, t_air);
        let alpha_deg = ski * DEG_PER_RAD_FIT;
        let cl = (-0.00025 * alpha_deg * alpha_deg + 0.0228 * alpha_deg - 0.092).abs();
        let area = self.area_skis * ski.cos() + self.area_body * body.cos();
        (0.5 * self.air_density * area * cl * speed * speed).abs()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skier::presets;

    fn aero() -> Aerodynamics {
        Aerodynamics::new(&presets::loitzl_whistler())
    }

    #[test]
    fn forces_non_negative_over_grid() {
        let a = aero();
        for v in [0.0, 5.0, 26.0, 40.0] {
            for angle in [-0.8, -0.3, 0.0, 0.1, 0.6] {
                for t in [0.0, 0.05, 0.5, 1.2, 2.5, 4.0] {
                    assert!(a.drag_force(v, angle, t) >= 0.0);
                    assert!(a.lift_force(v, angle, t) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn forces_scale_with_speed_squared() {
        let a = aero();
        let f1 = a.drag_force(10.0, -0.2, 1.0);
        let f2 = a.drag_force(20.0, -0.2, 1.0);
        assert!((f2 / f1 - 4.0).abs() < 1e-9);
        let l1 = a.lift_force(10.0, -0.2, 1.0);
        let l2 = a.lift_force(20.0, -0.2, 1.0);
        assert!((l2 / l1 - 4.0).abs() < 1e-9);
    }

    #[test]
    fn no_force_at_rest() {
        let a = aero();
        assert_eq!(a.drag_force(0.0, -0.2, 1.0), 0.0);
        assert_eq!(a.lift_force(0.0, -0.2, 1.0), 0.0);
    }

    #[test]
    fn schedule_window_boundaries_inclusive() {
        // Exactly at a window end the earlier posture still applies.
        let (ski_at, _) = attack_angles(0.0, 0.04);
        assert!((ski_at - 0.209).abs() < 1e-12);
        let (ski_after, _) = attack_angles(0.0, 0.04 + 1e-9);
        assert!((ski_after - 0.087).abs() < 1e-12);
    }

    #[test]
    fn settled_posture_past_last_window() {
        let (ski, body) = attack_angles(-0.5, 10.0);
        assert!((ski - (-0.5f64 - 0.035).abs()).abs() < 1e-12);
        assert!((body - (-0.5f64 - 0.349 - 0.035).abs()).abs() < 1e-12);
    }

    #[test]
    fn early_flight_body_angle_reflects_upright_torso() {
        // First 0.04 s: torso still nearly upright from the jump, body
        // attack angle far above the ski angle.
        let (ski, body) = attack_angles(-0.1, 0.02);
        assert!(body > ski);
        assert!((body - (-0.1f64 + 1.187 + 0.209).abs()).abs() < 1e-12);
    }

    #[test]
    fn attack_angles_are_magnitudes() {
        let (ski, body) = attack_angles(-1.0, 0.5);
        assert!(ski >= 0.0 && body >= 0.0);
    }
}
