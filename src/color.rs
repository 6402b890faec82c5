// SPDX: CC0-1.0

use core::{fmt, str::FromStr};

pub const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    pub const fn exhaustive() -> &'static [Color] {
        &[
            Self::Red,
            Self::Green,
            Self::Yellow,
            Self::Blue,
            Self::Magenta,
            Self::Cyan,
        ]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
        }
    }

    pub const fn escape(&self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownColor {
    pub text: String,
    pub similar: Option<Color>,
}

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color '{}'", self.text)?;
        if let Some(similar) = self.similar {
            write!(f, " (did you mean '{similar}'?)")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        for c in Self::exhaustive() {
            if lower == c.name() {
                return Ok(*c);
            }
        }

        let similar = Self::exhaustive()
            .iter()
            .map(|c| (strsim::normalized_damerau_levenshtein(&lower, c.name()), *c))
            .reduce(|acc, elem| if elem.0 > acc.0 { elem } else { acc })
            .and_then(|(sim, c)| (sim > 0.3).then_some(c));

        Err(UnknownColor {
            text: s.to_string(),
            similar,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("red".parse(), Ok(Color::Red));
        assert_eq!("GREEN".parse(), Ok(Color::Green));
        assert_eq!("Cyan".parse(), Ok(Color::Cyan));
    }

    #[test]
    fn every_name_round_trips() {
        for c in Color::exhaustive() {
            assert_eq!(c.name().parse(), Ok(*c));
            assert!(c.escape().starts_with("\x1b["));
        }
    }

    #[test]
    fn unknown_suggests_similar() {
        let err = "grean".parse::<Color>().unwrap_err();
        assert_eq!(err.similar, Some(Color::Green));
        assert_eq!(
            err.to_string(),
            "unknown color 'grean' (did you mean 'green'?)"
        );

        let err = "orange".parse::<Color>().unwrap_err();
        assert_eq!(err.text, "orange");
    }

    #[test]
    fn unrelated_name_has_no_suggestion() {
        let err = "zzzzzzzzzzzz".parse::<Color>().unwrap_err();
        assert_eq!(err.similar, None);
        assert_eq!(err.to_string(), "unknown color 'zzzzzzzzzzzz'");
    }
}
