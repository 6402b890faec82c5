// SPDX: CC0-1.0

//! printf-style formatting for a single number, e.g. `%g`, `%.3f` or
//! `t=%8.2e%%`.

use crate::Number;
use core::{
    fmt,
    iter::Peekable,
    str::{Chars, FromStr},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `%g`: shortest of fixed and exponent notation
    General,
    /// `%f`
    Fixed,
    /// `%e`
    Exp,
}

impl Verb {
    const fn from_char(chr: char) -> Option<Self> {
        match chr {
            'g' | 'v' => Some(Self::General),
            'f' => Some(Self::Fixed),
            'e' => Some(Self::Exp),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumFmt {
    prefix: String,
    verb: Verb,
    width: Option<usize>,
    precision: Option<usize>,
    suffix: String,
}

impl Default for NumFmt {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            verb: Verb::General,
            width: None,
            precision: None,
            suffix: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatErrTyp {
    MissingVerb,
    ExtraVerb,
    UnknownVerb(char),
    Truncated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatErr {
    pub typ: FormatErrTyp,
    pub src: String,
}

impl fmt::Display for FormatErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let src = &self.src;
        match self.typ {
            FormatErrTyp::MissingVerb => write!(f, "format '{src}' has no number verb"),
            FormatErrTyp::ExtraVerb => {
                write!(f, "format '{src}' has more than one number verb")
            }
            FormatErrTyp::UnknownVerb(chr) => write!(
                f,
                "format '{src}' uses unknown verb '%{chr}' (expected one of %g, %f, %e)"
            ),
            FormatErrTyp::Truncated => write!(f, "format '{src}' ends in the middle of a verb"),
        }
    }
}

impl std::error::Error for FormatErr {}

impl FromStr for NumFmt {
    type Err = FormatErr;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let err = |typ| FormatErr {
            typ,
            src: src.to_string(),
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut spec: Option<(Verb, Option<usize>, Option<usize>)> = None;
        let mut chars = src.chars().peekable();

        while let Some(chr) = chars.next() {
            let lit = if spec.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            if chr != '%' {
                lit.push(chr);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                lit.push('%');
                continue;
            }
            if spec.is_some() {
                return Err(err(FormatErrTyp::ExtraVerb));
            }

            let width = digits(&mut chars);
            let precision = if chars.peek() == Some(&'.') {
                chars.next();
                // "%.f" means precision 0, like printf
                Some(digits(&mut chars).unwrap_or(0))
            } else {
                None
            };

            let verb = match chars.next() {
                Some(chr) => Verb::from_char(chr).ok_or(err(FormatErrTyp::UnknownVerb(chr)))?,
                None => return Err(err(FormatErrTyp::Truncated)),
            };
            spec = Some((verb, width, precision));
        }

        let (verb, width, precision) = spec.ok_or(err(FormatErrTyp::MissingVerb))?;
        Ok(Self {
            prefix,
            verb,
            width,
            precision,
            suffix,
        })
    }
}

impl NumFmt {
    pub const fn verb(&self) -> Verb {
        self.verb
    }

    pub fn display(&self, val: Number) -> Formatted<'_> {
        Formatted { fmt: self, val }
    }

    fn body(&self, val: Number) -> String {
        if val.is_nan() {
            return String::from("NaN");
        }
        if val.is_infinite() {
            return String::from(if val > 0.0 { "+Inf" } else { "-Inf" });
        }

        match self.verb {
            Verb::Fixed => format!("{:.*}", self.precision.unwrap_or(6), val),
            Verb::Exp => {
                let s = format!("{:.*e}", self.precision.unwrap_or(6), val);
                let (mantissa, exp) = split_exp(&s);
                with_exp(mantissa, exp)
            }
            Verb::General => general(val, self.precision),
        }
    }
}

pub struct Formatted<'a> {
    fmt: &'a NumFmt,
    val: Number,
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.fmt.body(self.val);
        f.write_str(&self.fmt.prefix)?;
        match self.fmt.width {
            Some(width) => write!(f, "{body:>width$}")?,
            None => f.write_str(&body)?,
        }
        f.write_str(&self.fmt.suffix)
    }
}

fn digits(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut n: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        n = Some(n.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
    }
    n
}

// "1.5e2" -> ("1.5", 2)
fn split_exp(s: &str) -> (&str, i32) {
    s.split_once('e')
        .and_then(|(m, e)| Some((m, e.parse().ok()?)))
        .unwrap_or((s, 0))
}

// signed exponent with at least two digits, like C
fn with_exp(mantissa: &str, exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn general(val: Number, precision: Option<usize>) -> String {
    match precision {
        // shortest digits that round-trip, exponent form outside 1e-4..1e6
        None => {
            let s = format!("{val:e}");
            let (mantissa, exp) = split_exp(&s);
            if !(-4..6).contains(&exp) {
                with_exp(mantissa, exp)
            } else {
                format!("{val}")
            }
        }

        Some(precision) => {
            let precision = precision.max(1);
            let s = format!("{:.*e}", precision - 1, val);
            let (mantissa, exp) = split_exp(&s);
            if exp < -4 || exp >= precision as i32 {
                with_exp(trim_zeros(mantissa), exp)
            } else {
                let decimals = (precision as i32 - 1 - exp).max(0) as usize;
                trim_zeros(&format!("{val:.decimals$}")).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(fmt: &str, val: Number) -> String {
        fmt.parse::<NumFmt>().unwrap().display(val).to_string()
    }

    #[test]
    fn general_shortest() {
        assert_eq!(show("%g", 150.0), "150");
        assert_eq!(show("%g", 0.1), "0.1");
        assert_eq!(show("%g", 2.5), "2.5");
        assert_eq!(show("%g", -3.0), "-3");
        assert_eq!(show("%g", 123456.0), "123456");
        assert_eq!(show("%g", 1e6), "1e+06");
        assert_eq!(show("%g", 1234567.0), "1.234567e+06");
        assert_eq!(show("%g", 0.0001), "0.0001");
        assert_eq!(show("%g", 0.00001), "1e-05");
        assert_eq!(show("%g", 1e100), "1e+100");
    }

    #[test]
    fn general_precision() {
        assert_eq!(show("%.3g", 3.14159), "3.14");
        assert_eq!(show("%.3g", 1.0), "1");
        assert_eq!(show("%.2g", 1234.0), "1.2e+03");
        assert_eq!(show("%.4g", 0.000012341), "1.234e-05");
    }

    #[test]
    fn fixed_and_exp() {
        assert_eq!(show("%f", 1.5), "1.500000");
        assert_eq!(show("%.3f", 2.0 / 3.0), "0.667");
        assert_eq!(show("%.0f", 7.4), "7");
        assert_eq!(show("%.f", 7.4), "7");
        assert_eq!(show("%e", 150.0), "1.500000e+02");
        assert_eq!(show("%.2e", 0.00123), "1.23e-03");
    }

    #[test]
    fn literals_and_width() {
        assert_eq!(show("t=%g%%", 50.0), "t=50%");
        assert_eq!(show("[%6.2f]", 3.14159), "[  3.14]");
    }

    #[test]
    fn non_finite() {
        assert_eq!(show("%g", Number::NAN), "NaN");
        assert_eq!(show("%.2f", Number::INFINITY), "+Inf");
        assert_eq!(show("%e", Number::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn default_is_general() {
        assert_eq!(NumFmt::default(), "%g".parse().unwrap());
        assert_eq!(NumFmt::default().verb(), Verb::General);
    }

    #[test]
    fn rejects_bad_formats() {
        for (src, typ) in [
            ("value", FormatErrTyp::MissingVerb),
            ("100%%", FormatErrTyp::MissingVerb),
            ("%g %g", FormatErrTyp::ExtraVerb),
            ("%d", FormatErrTyp::UnknownVerb('d')),
            ("%.3", FormatErrTyp::Truncated),
        ] {
            let err = src.parse::<NumFmt>().unwrap_err();
            assert_eq!(err.typ, typ, "{src}");
        }
    }
}
