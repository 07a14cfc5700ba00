use std::{fmt, str::FromStr};

/// The result of running a file system checker, independent of which checker ran.
///
/// Variants are ordered from best to worst, so outcomes may be compared
/// directly and the most severe of several runs is simply the maximum.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum FsckOutcome {
    /// No issues were found.
    Clean,
    /// Issues were found and automatically repaired.
    Fixed,
    /// Issues were found, but the checker did not repair them.
    CheckUnfixed,
    /// The checker requires manual attention: it was aborted, misused, or
    /// found errors that it could not describe more precisely.
    Check,
    /// The exit status matched nothing that the checker documents.
    Other,
}

/// Returned when a report label does not name an outcome.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error(display = "'{}' is not a valid fsck outcome", label)]
pub struct InvalidOutcome {
    pub label: String,
}

impl FsckOutcome {
    /// Label used when correlating logs and writing reports.
    pub fn as_str(self) -> &'static str {
        match self {
            FsckOutcome::Clean => "clean",
            FsckOutcome::Fixed => "fixed",
            FsckOutcome::CheckUnfixed => "check-unfixed",
            FsckOutcome::Check => "check",
            FsckOutcome::Other => "other",
        }
    }

    /// Whether the harness should fail the test that produced this outcome.
    pub fn is_failure(self) -> bool { self >= FsckOutcome::CheckUnfixed }

    /// Folds a series of outcomes into the most severe one, if there were any.
    pub fn worst<I: IntoIterator<Item = FsckOutcome>>(outcomes: I) -> Option<FsckOutcome> {
        outcomes.into_iter().max()
    }
}

impl FromStr for FsckOutcome {
    type Err = InvalidOutcome;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let outcome = match label {
            "clean" => FsckOutcome::Clean,
            "fixed" => FsckOutcome::Fixed,
            "check-unfixed" => FsckOutcome::CheckUnfixed,
            "check" => FsckOutcome::Check,
            "other" => FsckOutcome::Other,
            _ => return Err(InvalidOutcome { label: label.into() }),
        };
        Ok(outcome)
    }
}

impl fmt::Display for FsckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> { f.write_str(self.as_str()) }
}
