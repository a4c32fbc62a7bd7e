//! Trajectory export — CSV for spreadsheets, JSON for analysis tooling.

use crate::TraceBuffer;
use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;

/// CSV column header. Kept stable: downstream tooling parses it by name.
pub const CSV_HEADER: &str = "t(s),theta(rad),omega(rad/s),alpha(rad/s^2)";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

impl TraceBuffer {
    /// Render the retained window as CSV.
    ///
    /// Time carries 6 decimal places and the remaining columns 10; consumers
    /// rely on this exact layout, so the formatting is part of the contract.
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(64 * (self.len() + 1));
        out.push_str(CSV_HEADER);
        for s in self.iter() {
            let _ = write!(
                out,
                "\n{:.6},{:.10},{:.10},{:.10}",
                s.time, s.angle, s.angular_velocity, s.angular_acceleration
            );
        }
        out
    }

    /// Write the CSV rendering to a file.
    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_csv())?;
        Ok(())
    }

    /// Serialize the retained window as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.samples)?)
    }

    /// Write the JSON rendering to a file.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
