//src/history.rs

use std::io::{self, Write};

use crate::config::ScalingConfig;
use crate::types::{HistoryPoint, ReferenceScale, SectionStart};

/// Decimals printed for every value, as with C's `%f`.
pub const DEFAULT_PRECISION: usize = 6;

/// The final population-size history read from one psmc report.
///
/// Everything is kept as structured data; the text is generated on demand.
#[derive(Debug, Clone)]
pub struct PsmcHistory {
    /// Input identifier echoed in the first comment line
    pub source: String,
    pub config: ScalingConfig,
    pub section: SectionStart,
    pub scale: ReferenceScale,
    /// Oldest-last, in the order psmc printed them
    pub points: Vec<HistoryPoint>,
}

impl PsmcHistory {
    /// Write the two comment lines, the `t\tNe` header and one row per point.
    pub fn write_history<W: Write>(&self, out: &mut W, precision: usize) -> io::Result<()> {
        writeln!(
            out,
            "# mutrate = {} gentime={:.6} inputfile={}",
            format_scientific(self.config.mutation_rate(), 6),
            self.config.generation_time(),
            self.source
        )?;
        writeln!(out, "# theta0={:.6} N0={:.6}", self.scale.theta0, self.scale.n0)?;
        writeln!(out, "t\tNe")?;
        for point in &self.points {
            writeln!(out, "{:.*}\t{:.*}", precision, point.time, precision, point.size)?;
        }
        Ok(())
    }

    /// Same as [`write_history`](Self::write_history), into a `String`.
    pub fn get_history_text(&self, precision: usize) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_history(&mut buf, precision);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// C-style `%e`: fixed mantissa digits and an exponent with sign and at
/// least two digits (`2.500000e-08`).
pub fn format_scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}
