//! Recognized chaincode functions.

use core::fmt;
use core::str::FromStr;

use crate::error::ChaincodeError;

/// A function the chaincode can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `put <key> <value>`
    Put,
    /// `get <key>`
    Get,
}

impl Function {
    /// Name the function is invoked by.
    pub fn name(self) -> &'static str {
        match self {
            Self::Put => "put",
            Self::Get => "get",
        }
    }

    /// Exact number of parameters the function takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Put => 2,
            Self::Get => 1,
        }
    }

    /// Error for a call with `got` parameters.
    pub fn arity_error(self, got: usize) -> ChaincodeError {
        ChaincodeError::IncorrectArgCount {
            function: self,
            expected: self.arity(),
            got,
        }
    }
}

impl FromStr for Function {
    type Err = ChaincodeError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "put" => Ok(Self::Put),
            "get" => Ok(Self::Get),
            other => Err(ChaincodeError::UnknownFunction {
                function: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
