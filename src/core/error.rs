use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabError {
    NotAnInteger(String),
    NotPositive(String),
    Negative(i32),
    NotACharacter(String),
    EmptyInput,
    GridNotCleared,
    SizeTooLarge(usize),
    TooManyMines { requested: usize, cells: usize },
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger(s) => write!(f, "not an integer: '{}'", s),
            Self::NotPositive(s) => write!(f, "not a positive integer: '{}'", s),
            Self::Negative(n) => write!(f, "must be zero or more, got {}", n),
            Self::NotACharacter(s) => write!(f, "not a single character: '{}'", s),
            Self::EmptyInput => write!(f, "empty input"),
            Self::GridNotCleared => write!(f, "the array is not cleared"),
            Self::SizeTooLarge(n) => write!(f, "array size {} is too large for this action", n),
            Self::TooManyMines { requested, cells } => {
                write!(f, "{} mines do not fit into {} cells", requested, cells)
            }
        }
    }
}

impl std::error::Error for LabError {}

pub type Result<T> = std::result::Result<T, LabError>;
