use std::fmt;

#[derive(Debug)]
pub enum RosterError {
    /// CSV read/parse error.
    Csv(String),
    /// A roster row with fewer columns than the export format carries.
    ShortRow { line: u64, expected: usize, found: usize },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::ShortRow { line, expected, found } => {
                write!(f, "row {line}: expected {expected} columns, found {found}")
            }
        }
    }
}

impl std::error::Error for RosterError {}
