use crate::error::SimError;
use crate::sim::integrator::DirectionMode;

// ---------------------------------------------------------------------------
// Skier configuration (one athlete, one run setup)
// ---------------------------------------------------------------------------

/// Extra carried mass: boots, bindings, suit. kg
const GEAR_MASS: f64 = 2.0;

/// Physical description of one athlete and run setup, fixed for a whole run.
///
/// Equipment quantities follow FIS regulations scaled by athlete height:
/// ski length is 145 % of height, ski width 10 cm. Construct through
/// [`SkierBuilder`] so the derivations and validity checks run once; the
/// struct itself is read-only configuration after that.
#[derive(Debug, Clone)]
pub struct SkierParameters {
    pub body_mass: f64,             // kg
    pub ski_mass: f64,              // kg, derived from height
    pub total_mass: f64,            // kg, body + skis + gear
    pub height: f64,                // m
    pub frontal_area_body: f64,     // m^2, standing
    pub frontal_area_takeoff: f64,  // m^2, crouched in-run posture
    pub frontal_area_skis: f64,     // m^2
    pub friction_coeff: f64,        // snow on waxed skis
    pub air_density: f64,           // kg/m^3
    pub gravity: f64,               // m/s^2
    pub dt: f64,                    // s, integration step
    pub start_position: f64,        // m along the in-run slope
    pub direction_mode: DirectionMode,
}

impl SkierParameters {
    /// Reject configurations the model cannot integrate.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.body_mass <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "body mass must be positive, got {}",
                self.body_mass
            )));
        }
        if self.height <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if self.dt <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "time step must be positive, got {}",
                self.dt
            )));
        }
        if self.air_density <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "air density must be positive, got {}",
                self.air_density
            )));
        }
        if self.gravity <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if self.friction_coeff < 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "friction coefficient must be non-negative, got {}",
                self.friction_coeff
            )));
        }
        if self.start_position < 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "start position must be non-negative, got {}",
                self.start_position
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Chainable builder for [`SkierParameters`]. Defaults are the reference
/// scenario; `build()` derives the regulation quantities and validates.
pub struct SkierBuilder {
    body_mass: f64,
    height: f64,
    friction_coeff: f64,
    air_density: f64,
    gravity: f64,
    dt: f64,
    start_position: f64,
    direction_mode: DirectionMode,
}

impl SkierBuilder {
    pub fn new() -> Self {
        Self {
            body_mass: 63.0,
            height: 1.8,
            friction_coeff: 0.05,
            air_density: 1.13,
            gravity: 9.81,
            dt: 0.001,
            start_position: 6.25,
            direction_mode: DirectionMode::QuadrantNaive,
        }
    }

    pub fn body_mass(mut self, v: f64) -> Self { self.body_mass = v; self }
    pub fn height(mut self, v: f64) -> Self { self.height = v; self }
    pub fn friction_coeff(mut self, v: f64) -> Self { self.friction_coeff = v; self }
    pub fn air_density(mut self, v: f64) -> Self { self.air_density = v; self }
    pub fn gravity(mut self, v: f64) -> Self { self.gravity = v; self }
    pub fn dt(mut self, v: f64) -> Self { self.dt = v; self }
    pub fn start_position(mut self, v: f64) -> Self { self.start_position = v; self }
    pub fn direction_mode(mut self, v: DirectionMode) -> Self { self.direction_mode = v; self }

    pub fn build(self) -> Result<SkierParameters, SimError> {
        // Regulation ski length is 145 % of athlete height; two skis.
        let ski_mass = 2.0 * (self.height * 1.45);
        let frontal_area_body = self.height * 0.3;
        let params = SkierParameters {
            body_mass: self.body_mass,
            ski_mass,
            total_mass: ski_mass + self.body_mass + GEAR_MASS,
            height: self.height,
            frontal_area_body,
            frontal_area_takeoff: frontal_area_body * 0.5,
            frontal_area_skis: 2.0 * (self.height * 1.45 * 0.1),
            friction_coeff: self.friction_coeff,
            air_density: self.air_density,
            gravity: self.gravity,
            dt: self.dt,
            start_position: self.start_position,
            direction_mode: self.direction_mode,
        };
        params.validate()?;
        Ok(params)
    }
}

impl Default for SkierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Preset scenarios
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Wolfgang Loitzl at the Whistler HS140, 2011-02-22 — the run the
    /// posture schedule and hill geometry were fitted against.
    pub fn loitzl_whistler() -> SkierParameters {
        SkierBuilder::new()
            .build()
            .expect("reference configuration is valid")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
