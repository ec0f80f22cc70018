pub mod aerodynamics;
pub mod hill;

pub use aerodynamics::{attack_angles, Aerodynamics};
