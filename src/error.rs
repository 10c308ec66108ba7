//! When a big-integer operation or conversion goes wrong.

use crate::lib::fmt::{self, Debug, Display};
use crate::lib::{result, Box};
#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur when operating
/// on or parsing a [`BigInt`](crate::BigInt).
pub struct Error {
    /// This `Box` keeps `Result<BigInt, Error>` no larger than it needs to be.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigint_cow::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::InvalidArgument` - an operand outside an operation's domain
    /// - `Category::Syntax` - text that is not a decimal integer
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::DivisionByZero | ErrorCode::NegativeShift(_) => Category::InvalidArgument,
            ErrorCode::EmptyInput | ErrorCode::InvalidDigit(_, _) => Category::Syntax,
        }
    }

    /// Returns true if this error was caused by an operand outside the
    /// operation's domain, such as a zero divisor or a negative shift count.
    pub fn is_invalid_argument(&self) -> bool {
        self.classify() == Category::InvalidArgument
    }

    /// Returns true if this error was caused by input that was not a
    /// decimal integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }
}

/// Categorizes the cause of a `bigint_cow::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by an argument the operation is not defined for.
    InvalidArgument,

    /// The error was caused by input that was not syntactically a decimal
    /// integer.
    Syntax,
}

struct ErrorImpl {
    code: ErrorCode,
}

/// This type describes all possible errors that can occur in this crate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// Divisor of a division or remainder was zero.
    DivisionByZero,

    /// Shift count was negative.
    NegativeShift(i64),

    /// Input had no digits, either empty or a lone sign.
    EmptyInput,

    /// Input contained a character other than an ASCII digit, at the given
    /// byte offset.
    InvalidDigit(char, usize),
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code }),
        }
    }

    #[cold]
    pub(crate) fn division_by_zero() -> Self {
        Error::new(ErrorCode::DivisionByZero)
    }

    #[cold]
    pub(crate) fn negative_shift(count: i64) -> Self {
        Error::new(ErrorCode::NegativeShift(count))
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::NegativeShift(count) => write!(f, "negative shift count {}", count),
            ErrorCode::EmptyInput => f.write_str("cannot parse integer from empty string"),
            ErrorCode::InvalidDigit(ch, pos) => {
                write!(f, "invalid digit {:?} at position {}", ch, pos)
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.err.code, f)
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.err.code)
    }
}

impl Clone for Error {
    fn clone(&self) -> Self {
        Error::new(self.err.code.clone())
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.err.code == other.err.code
    }
}

impl Eq for Error {}
