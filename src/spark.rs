// SPDX: CC0-1.0

//! Character sparklines over a stream of numbers.
//!
//! The rendering strategy follows from the configuration, see [`Mode`].

use crate::{
    color::{self, Color},
    interval,
    ring::Ring,
    shell::Numbers,
    Number,
};
use core::ops::Range;
use std::io::{self, BufRead, Write};

/// Glyphs from lowest to highest intensity.
pub const RAMP: [char; 8] = [' ', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SparkConfig {
    pub min: Option<Number>,
    pub max: Option<Number>,
    /// Sliding window size. `None` draws one growing line.
    pub width: Option<usize>,
    pub color: Option<Color>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Read everything, then scale to what was seen.
    Buffered,
    /// Both bounds are fixed, so every sample is drawn as it arrives.
    Growing,
    /// Redraw the last `width` samples in place on every sample.
    Sliding { width: usize },
}

impl SparkConfig {
    pub fn mode(&self) -> Mode {
        match (self.width, self.min, self.max) {
            (Some(width), _, _) => Mode::Sliding { width },
            (None, Some(_), Some(_)) => Mode::Growing,
            _ => Mode::Buffered,
        }
    }

    /// Fixed bounds take precedence over the observed ones.
    pub fn scale(&self, observed: Option<Range<Number>>) -> Option<Range<Number>> {
        let (seen_min, seen_max) = match observed {
            Some(Range { start, end }) => (Some(start), Some(end)),
            None => (None, None),
        };
        Some(self.min.or(seen_min)?..self.max.or(seen_max)?)
    }

    fn paint(&self, glyphs: &str) -> String {
        match self.color {
            Some(c) => format!("{}{glyphs}{}", c.escape(), color::RESET),
            None => glyphs.to_string(),
        }
    }
}

/// Glyph for `sample` on `scale`. A zero-width scale maps everything to the
/// lowest glyph.
pub fn glyph(sample: Number, scale: &Range<Number>) -> char {
    let top = (RAMP.len() - 1) as Number;
    match interval::remap(sample, scale.start, scale.end, 0.0, top) {
        Ok(idx) => RAMP[interval::limit(idx.round(), 0.0, top) as usize],
        Err(_) => RAMP[0],
    }
}

pub fn line<I: IntoIterator<Item = Number>>(samples: I, scale: &Range<Number>) -> String {
    samples.into_iter().map(|s| glyph(s, scale)).collect()
}

/// Read numbers from `input` and draw them to `out`.
///
/// Nothing is written for an input without numbers. No trailing newline is
/// written in any mode.
pub fn render<R, W, D>(input: R, mut out: W, diag: D, config: &SparkConfig) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    D: Write,
{
    let samples = Numbers::new(input, diag).finite();

    match config.mode() {
        Mode::Buffered => {
            let samples = samples.collect::<io::Result<Vec<Number>>>()?;
            let observed = samples.iter().fold(None, |acc: Option<Range<Number>>, &s| {
                Some(match acc {
                    Some(r) => r.start.min(s)..r.end.max(s),
                    None => s..s,
                })
            });
            if let Some(scale) = config.scale(observed) {
                write!(out, "{}", config.paint(&line(samples, &scale)))?;
            }
        }

        Mode::Growing => {
            // both bounds are set in this mode
            let scale = config.scale(None);
            let mut started = false;
            for sample in samples {
                let sample = sample?;
                if !started {
                    started = true;
                    if let Some(c) = config.color {
                        out.write_all(c.escape().as_bytes())?;
                    }
                }
                let chr = scale.as_ref().map_or(RAMP[0], |scale| glyph(sample, scale));
                write!(out, "{chr}")?;
                out.flush()?;
            }
            if started && config.color.is_some() {
                out.write_all(color::RESET.as_bytes())?;
            }
        }

        Mode::Sliding { width } => {
            let mut window = Ring::new(width);
            for sample in samples {
                window.push(sample?);
                if let Some(scale) = config.scale(window.bounds()) {
                    write!(out, "\r{}", config.paint(&line(window.iter(), &scale)))?;
                    out.flush()?;
                }
            }
        }
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(min: Number, max: Number) -> SparkConfig {
        SparkConfig {
            min: Some(min),
            max: Some(max),
            ..SparkConfig::default()
        }
    }

    #[test]
    fn mode_selection() {
        assert_eq!(SparkConfig::default().mode(), Mode::Buffered);
        assert_eq!(fixed(0.0, 1.0).mode(), Mode::Growing);

        let half = SparkConfig {
            min: Some(0.0),
            ..SparkConfig::default()
        };
        assert_eq!(half.mode(), Mode::Buffered);

        let sliding = SparkConfig {
            width: Some(5),
            ..fixed(0.0, 1.0)
        };
        assert_eq!(sliding.mode(), Mode::Sliding { width: 5 });
    }

    #[test]
    fn scale_prefers_fixed_bounds() {
        let half = SparkConfig {
            min: Some(0.0),
            ..SparkConfig::default()
        };
        assert_eq!(half.scale(Some(3.0..9.0)), Some(0.0..9.0));
        assert_eq!(half.scale(None), None);
        assert_eq!(fixed(-1.0, 1.0).scale(None), Some(-1.0..1.0));
        assert_eq!(SparkConfig::default().scale(Some(2.0..4.0)), Some(2.0..4.0));
    }

    #[test]
    fn glyph_extremes_and_clamping() {
        let scale = 0.0..100.0;
        assert_eq!(glyph(0.0, &scale), RAMP[0]);
        assert_eq!(glyph(100.0, &scale), RAMP[7]);
        assert_eq!(glyph(-50.0, &scale), RAMP[0]);
        assert_eq!(glyph(500.0, &scale), RAMP[7]);
        // 3.5 rounds up
        assert_eq!(glyph(50.0, &scale), RAMP[4]);
    }

    #[test]
    fn glyph_zero_width_scale() {
        assert_eq!(glyph(5.0, &(5.0..5.0)), RAMP[0]);
        assert_eq!(glyph(9.0, &(5.0..5.0)), RAMP[0]);
    }

    #[test]
    fn glyph_inverted_scale() {
        let scale = 100.0..0.0;
        assert_eq!(glyph(100.0, &scale), RAMP[0]);
        assert_eq!(glyph(0.0, &scale), RAMP[7]);
    }

    #[test]
    fn line_maps_every_sample() {
        let got = line([10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0], &(10.0..80.0));
        assert_eq!(got, " ▂▃▄▅▆▇█");
    }

    #[test]
    fn paint_wraps_with_reset() {
        let config = SparkConfig {
            color: Some(Color::Blue),
            ..SparkConfig::default()
        };
        assert_eq!(config.paint(" █"), "\x1b[34m █\x1b[0m");
        assert_eq!(SparkConfig::default().paint(" █"), " █");
    }
}
