use crate::error::SimError;

// ---------------------------------------------------------------------------
// Whistler Olympic Park HS140 — certified hill geometry
// ---------------------------------------------------------------------------

/// Horizontal extent of the surveyed profile, m.
pub const HILL_RANGE_END: f64 = 270.46;

/// Slope distance at which the in-run ramp ends (the takeoff lip), m.
pub const RAMP_END: f64 = 102.15;

/// End of the upper straight of the in-run, m along the slope.
const UPPER_STRAIGHT_END: f64 = 54.1;

/// End of the transition curve between the straight and the table, m.
const TRANSITION_END: f64 = 95.55;

/// Inclination of the upper straight, rad.
const UPPER_ANGLE: f64 = 0.611;

/// Inclination of the takeoff table, rad.
const TABLE_ANGLE: f64 = 0.196;

/// Radius of the in-run transition curve, m.
const TRANSITION_RADIUS: f64 = 100.0;

/// Hill altitude above datum at horizontal position `x`.
///
/// Seven analytic segments (linear and circular-arc) digitized from the
/// certified profile: in-run, takeoff table, landing slope, transition
/// curves, outrun. The profile genuinely drops ~3.6 m at the takeoff lip
/// (x = 88.642) where the table ends above the landing slope. Positions
/// outside the surveyed range have no defined altitude and are rejected.
pub fn altitude(x: f64) -> Result<f64, SimError> {
    if !(0.0..=HILL_RANGE_END).contains(&x) {
        return Err(SimError::OutsideHill { x, max: HILL_RANGE_END });
    }
    let y = if x <= 44.32 {
        136.63 - 0.7 * x
    } else if x <= 82.17 {
        -(10_000.0 - (x - 101.68).powi(2)).sqrt() + 187.52
    } else if x <= 88.642 {
        105.87 - 0.2 * x
    } else if x <= 142.55 {
        (8_047.18 - (x - 88.64).powi(2)).sqrt() - 5.14
    } else if x <= 186.96 {
        174.04 - 0.754 * x
    } else if x <= 208.67 {
        -(113_232.25 - (x - 389.47).powi(2)).sqrt() + 301.81
    } else {
        -(13_225.0 - (x - 270.46).powi(2)).sqrt() + 115.0
    };
    Ok(y)
}

/// Horizontal position reached after travelling `d` metres along the in-run
/// surface.
///
/// Cosine projection per sub-interval: the upper straight, the transition
/// curve, the takeoff table. Past the ramp's extent the position pins to
/// the takeoff point abscissa instead of extrapolating.
pub fn position_for_slope_distance(d: f64) -> f64 {
    if d <= UPPER_STRAIGHT_END {
        UPPER_ANGLE.cos() * d
    } else if d <= TRANSITION_END {
        // Arc projection; 0.96 rad is the arc parameter where the curve
        // picks up from the straight.
        44.32 + 57.36 - (0.96 + (d - UPPER_STRAIGHT_END) / TRANSITION_RADIUS).cos() * TRANSITION_RADIUS
    } else if d <= RAMP_END {
        82.17 + TABLE_ANGLE.cos() * (d - TRANSITION_END)
    } else {
        88.642
    }
}

/// Inclination of the in-run surface at slope distance `d`, rad relative to
/// the +x axis. Downhill is negative.
///
/// Constant on the upper straight and the takeoff table, linear through the
/// transition curve. Past the lip the table is exhausted and the angle
/// reads level; the takeoff impulse inherits that value.
pub fn slope_angle(d: f64) -> f64 {
    if d <= UPPER_STRAIGHT_END {
        -UPPER_ANGLE
    } else if d <= TRANSITION_END {
        -UPPER_ANGLE + (d - UPPER_STRAIGHT_END) / TRANSITION_RADIUS
    } else if d <= RAMP_END {
        -TABLE_ANGLE
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
