// SPDX: CC0-1.0

use crate::Number;
use core::fmt;
use std::io;

/// Operation that produced an [`IntervalErr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Deval,
    Remap,
    Snap,
    Divide,
    Subintervals,
    Random,
    Encompass,
}

impl Op {
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Deval => "de-evaluate",
            Self::Remap => "remap",
            Self::Snap => "snap",
            Self::Divide => "divide",
            Self::Subintervals => "create subintervals",
            Self::Random => "generate random values",
            Self::Encompass => "encompass",
        }
    }
}

#[derive(Debug)]
pub enum IntervalErrTyp {
    NonFinite { val: Number },
    Degenerate { a: Number, b: Number },
    InvalidSteps { steps: i64 },
    InvalidCount { count: i64 },
    TooLarge { len: usize },
    NoData,
    Read(io::Error),
}

#[derive(Debug)]
pub struct IntervalErr {
    pub typ: IntervalErrTyp,
    pub op: Op,
}

impl IntervalErr {
    #[inline]
    pub const fn new(op: Op, typ: IntervalErrTyp) -> Self {
        Self { typ, op }
    }
}

impl fmt::Display for IntervalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = self.op.verb();
        match &self.typ {
            IntervalErrTyp::NonFinite { val } => {
                write!(f, "cannot {verb}: non-finite value {val} is not supported")
            }

            IntervalErrTyp::Degenerate { a, b } => write!(
                f,
                "cannot {verb}: interval [{a}, {b}] has near-zero width"
            ),

            IntervalErrTyp::InvalidSteps { steps } => write!(
                f,
                "cannot {verb}: step count must be positive, found {steps}"
            ),

            IntervalErrTyp::InvalidCount { count } => write!(
                f,
                "cannot {verb}: count cannot be negative, found {count}"
            ),

            IntervalErrTyp::TooLarge { len } => {
                write!(f, "cannot {verb}: {len} values do not fit in memory")
            }

            IntervalErrTyp::NoData => write!(f, "cannot {verb}: no numbers found in input"),

            IntervalErrTyp::Read(err) => write!(f, "cannot {verb}: error reading input: {err}"),
        }
    }
}

impl std::error::Error for IntervalErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.typ {
            IntervalErrTyp::Read(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn message_names_operation() {
        let err = IntervalErr::new(Op::Remap, IntervalErrTyp::Degenerate { a: 10.0, b: 10.0 });
        assert_eq!(
            err.to_string(),
            "cannot remap: interval [10, 10] has near-zero width"
        );
    }

    #[test]
    fn too_large_reports_length() {
        let err = IntervalErr::new(Op::Divide, IntervalErrTyp::TooLarge { len: 12 });
        assert_eq!(err.to_string(), "cannot divide: 12 values do not fit in memory");
    }

    #[test]
    fn read_error_has_source() {
        let err = IntervalErr::new(
            Op::Encompass,
            IntervalErrTyp::Read(io::Error::new(io::ErrorKind::Other, "boom")),
        );
        assert!(err.source().is_some());
        assert!(err.to_string().ends_with("boom"));

        let err = IntervalErr::new(Op::Encompass, IntervalErrTyp::NoData);
        assert!(err.source().is_none());
    }
}
