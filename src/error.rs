use thiserror::Error;

/// Which side of the transit a degenerate sample set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSet {
    InTransit,
    OutOfTransit,
}

impl std::fmt::Display for SampleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleSet::InTransit => write!(f, "in-transit"),
            SampleSet::OutOfTransit => write!(f, "out-of-transit"),
        }
    }
}

/// Errors a generation run can report. All are terminal for that request;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Target name was empty; the seed would be degenerate.
    #[error("target name must not be empty")]
    EmptyTarget,

    /// A transmission-spectrum sample set came out empty, so the in/out flux
    /// ratio is undefined. Indicates a broken grid/margin configuration.
    #[error("no {set} samples for transmission spectrum (phase grid/margin misconfigured)")]
    DegenerateStatistics { set: SampleSet },
}
