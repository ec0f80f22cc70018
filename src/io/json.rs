use std::io::{self, Write};

use crate::sim::runner::SimulationResult;

/// Write the run summary as JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, result: &SimulationResult) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"total_mass_kg\": {:.2},", result.total_mass)?;
    writeln!(writer, "  \"height_m\": {:.2},", result.height)?;
    writeln!(writer, "  \"start_position_m\": {:.2},", result.start_position)?;
    writeln!(writer, "  \"takeoff_speed_ms\": {:.3},", result.takeoff_speed)?;
    writeln!(writer, "  \"jump_distance_m\": {:.3}", result.jump_distance)?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write the run summary JSON to a file.
pub fn write_summary_file(path: &str, result: &SimulationResult) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_has_all_fields() {
        let result = SimulationResult {
            total_mass: 70.22,
            height: 1.8,
            start_position: 6.25,
            takeoff_speed: 26.615,
            jump_distance: 134.385,
        };

        let mut buf = Vec::new();
        write_summary(&mut buf, &result).unwrap();
        let json = String::from_utf8(buf).unwrap();
        assert!(json.contains("\"total_mass_kg\""));
        assert!(json.contains("\"takeoff_speed_ms\""));
        assert!(json.contains("\"jump_distance_m\": 134.385"));
    }
}
