use std::fmt::{self, Display, Formatter};

/// How serious a diagnostic message is.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Severity {
    Error,
    Warning,
    Debug,
}

impl Severity {
    /// The lowest verbosity threshold at which messages of this severity
    /// are emitted.
    pub fn level(self) -> usize {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Debug => 3,
        }
    }

    pub fn str(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Debug => "Debug",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.str())
    }
}

pub mod reporter;

pub use reporter::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_levels() {
        assert_eq!(Severity::Error.level(), 1);
        assert_eq!(Severity::Warning.level(), 2);
        assert_eq!(Severity::Debug.level(), 3);
        assert_eq!(Severity::Warning.to_string(), "Warning");
    }
}
