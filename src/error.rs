use std::error::Error;
use std::fmt::{Debug, Formatter, Result, Display};

pub enum IdentError {
    UnrecognizedName(String),
}

impl Error for IdentError {}

impl Debug for IdentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self)
    }
}

impl Display for IdentError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match *self {
            IdentError::UnrecognizedName(ref name) =>
                write!(f, "Unrecognized hypervisor name {name:?}"),
        }
    }
}
