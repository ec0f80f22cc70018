pub mod state;

pub use state::{KinematicState, Phase};
