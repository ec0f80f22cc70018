use std::io::Write;

use crate::dynamics::state::KinematicState;
use crate::error::SimError;
use crate::physics::hill;

/// Write trajectory data to CSV format.
///
/// Columns: time, slope_dist, hill_alt, pos_x, pos_y, speed, vel_x, vel_y,
///          accel, acc_x, acc_y, vel_angle
///
/// `hill_alt` is the profile altitude under the sample's x position — it
/// equals `pos_y` on the in-run and tracks the ground below the skier in
/// flight.
pub fn write_trajectory<W: Write>(
    writer: &mut W,
    trajectory: &[KinematicState],
) -> Result<(), SimError> {
    writeln!(
        writer,
        "time,slope_dist,hill_alt,pos_x,pos_y,speed,vel_x,vel_y,\
         accel,acc_x,acc_y,vel_angle"
    )?;

    for s in trajectory {
        let hill_alt = hill::altitude(s.pos.x)?;
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},\
             {:.4},{:.4},{:.4},{:.6}",
            s.time,
            s.slope_dist,
            hill_alt,
            s.pos.x, s.pos.y,
            s.speed,
            s.vel.x, s.vel.y,
            s.accel,
            s.acc.x, s.acc.y,
            s.vel_angle,
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &[KinematicState]) -> Result<(), SimError> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}
