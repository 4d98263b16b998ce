//src/types.rs

/// The `TR` line of a section: `TR <theta0> <rho0>`.
///
/// psmc does not document the field order; theta0 is taken to be the first
/// value because that is the order its own writer uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRecord {
    pub theta0: f64,
    pub rho0: Option<f64>,
}

/// One `RS` line: `RS <k> <t_k> <lambda_k> ...`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    /// t_k, time in units of 2*N0 generations
    pub time_units: f64,
    /// lambda_k = N_k / N0
    pub size_ratio: f64,
}

/// theta0 together with the reference population size derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceScale {
    pub theta0: f64,
    pub rho0: Option<f64>,
    /// N0 = theta0 / (4 * mu * bin_size)
    pub n0: f64,
}

/// Where the last result section starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStart {
    /// Byte offset just after the `RD` line.
    pub offset: u64,
    /// 1-based line number of the `RD` line.
    pub line: usize,
    /// Iteration number printed on the `RD` line, if any.
    pub iteration: Option<u64>,
}

/// One output row: years before present and effective population size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryPoint {
    pub time: f64,
    pub size: f64,
}
