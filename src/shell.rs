// SPDX: CC0-1.0

use crate::{err::IntervalErr, format::NumFmt, Number};
use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
    ops::Range,
};

/// Pulls whitespace separated numbers out of a text stream.
///
/// Tokens that don't parse, and lines that aren't UTF-8, are reported to the
/// diagnostic writer and skipped. The iterator stops after the first read
/// error.
#[derive(Debug)]
pub struct Numbers<R, D> {
    input: R,
    diag: D,
    line: Vec<u8>,
    line_no: usize,
    pending: VecDeque<String>,
    finite: bool,
    done: bool,
}

impl<R: BufRead, D: Write> Numbers<R, D> {
    pub fn new(input: R, diag: D) -> Self {
        Self {
            input,
            diag,
            line: Vec::new(),
            line_no: 0,
            pending: VecDeque::new(),
            finite: false,
            done: false,
        }
    }

    pub fn diag(&mut self) -> &mut D {
        &mut self.diag
    }

    /// Also skip NaN and infinities, with a warning.
    pub fn finite(mut self) -> Self {
        self.finite = true;
        self
    }

    fn refill(&mut self) -> io::Result<bool> {
        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        match core::str::from_utf8(&self.line) {
            Ok(line) => self
                .pending
                .extend(line.split_whitespace().map(String::from)),
            Err(_) => writeln!(
                self.diag,
                "warning: line {line} is not valid UTF-8, skipping",
                line = self.line_no
            )?,
        }
        Ok(true)
    }

    fn next_number(&mut self) -> io::Result<Option<Number>> {
        loop {
            let tok = match self.pending.pop_front() {
                Some(tok) => tok,
                None => {
                    if self.refill()? {
                        continue;
                    }
                    return Ok(None);
                }
            };

            match tok.parse::<Number>() {
                Ok(val) if self.finite && !val.is_finite() => writeln!(
                    self.diag,
                    "warning: skipping non-finite value '{tok}' on line {line}",
                    line = self.line_no
                )?,
                Ok(val) => return Ok(Some(val)),
                Err(err) => writeln!(
                    self.diag,
                    "warning: could not parse '{tok}' on line {line}, skipping: {err}",
                    line = self.line_no
                )?,
            }
        }
    }
}

impl<R: BufRead, D: Write> Iterator for Numbers<R, D> {
    type Item = io::Result<Number>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_number() {
            Ok(Some(val)) => Some(Ok(val)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Apply `f` to every number in `input`, writing one formatted result per
/// line.
///
/// A value that `f` rejects is reported to `diag` and skipped; only I/O
/// failures end the stream early.
pub fn process<R, W, D, F>(input: R, mut out: W, diag: D, fmt: &NumFmt, mut f: F) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    D: Write,
    F: FnMut(Number) -> Result<Number, IntervalErr>,
{
    let mut nums = Numbers::new(input, diag);
    while let Some(val) = nums.next() {
        let val = val?;
        match f(val) {
            Ok(res) => writeln!(out, "{}", fmt.display(res))?,
            Err(err) => writeln!(
                nums.diag(),
                "warning: could not process value {val}, skipping: {err}"
            )?,
        }
    }
    out.flush()
}

pub fn write_values<W: Write>(mut out: W, fmt: &NumFmt, vals: &[Number]) -> io::Result<()> {
    for &val in vals {
        writeln!(out, "{}", fmt.display(val))?;
    }
    out.flush()
}

pub fn write_pairs<W: Write>(mut out: W, fmt: &NumFmt, pairs: &[Range<Number>]) -> io::Result<()> {
    for pair in pairs {
        writeln!(
            out,
            "{} {}",
            fmt.display(pair.start),
            fmt.display(pair.end)
        )?;
    }
    out.flush()
}
