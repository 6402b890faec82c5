// SPDX: CC0-1.0

//! Operations on a directional interval `a -> b`.
//!
//! [`eval`] and [`limit`] never fail and let NaN flow through, because they
//! sit in per-sample rendering loops. Everything else rejects non-finite
//! input with [`IntervalErrTyp::NonFinite`].

use crate::{
    err::{IntervalErr, IntervalErrTyp, Op},
    shell::Numbers,
    Number, EPSILON,
};
use core::ops::Range;
use rand::Rng;
use std::io::{BufRead, Write};

fn expect_finite<const N: usize>(op: Op, vals: [Number; N]) -> Result<(), IntervalErr> {
    match vals.into_iter().find(|val| !val.is_finite()) {
        Some(val) => Err(IntervalErr::new(op, IntervalErrTyp::NonFinite { val })),
        None => Ok(()),
    }
}

fn expect_steps(op: Op, steps: i64) -> Result<usize, IntervalErr> {
    usize::try_from(steps).map_err(|_| IntervalErr::new(op, IntervalErrTyp::InvalidSteps { steps }))
}

// reserve up front so an absurd length is an error rather than an abort
fn alloc<T>(op: Op, len: usize) -> Result<Vec<T>, IntervalErr> {
    let mut vals = Vec::new();
    vals.try_reserve_exact(len)
        .map_err(|_| IntervalErr::new(op, IntervalErrTyp::TooLarge { len }))?;
    Ok(vals)
}

#[inline]
fn ordered(a: Number, b: Number) -> (Number, Number) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Evaluate parameter `t` in the interval, so `0 -> a` and `1 -> b`.
///
/// `t` outside of `0..=1` extrapolates.
#[inline]
pub fn eval(t: Number, a: Number, b: Number) -> Number {
    a + (b - a) * t
}

/// Inverse of [`eval`]: the parameter of `val` relative to the interval.
///
/// A zero-width interval is only accepted when `val` sits on it, in which
/// case the parameter is 0.
pub fn deval(val: Number, a: Number, b: Number) -> Result<Number, IntervalErr> {
    deval_as(Op::Deval, val, a, b)
}

fn deval_as(op: Op, val: Number, a: Number, b: Number) -> Result<Number, IntervalErr> {
    expect_finite(op, [val, a, b])?;

    let delta = b - a;
    if delta.abs() < EPSILON {
        if (val - a).abs() < EPSILON {
            return Ok(0.0);
        }
        return Err(IntervalErr::new(op, IntervalErrTyp::Degenerate { a, b }));
    }

    Ok((val - a) / delta)
}

/// Translate `val` from the source interval to the destination interval.
///
/// Only the source interval can be degenerate; a zero-width destination
/// collapses everything onto its single point.
pub fn remap(
    val: Number,
    src_a: Number,
    src_b: Number,
    dst_a: Number,
    dst_b: Number,
) -> Result<Number, IntervalErr> {
    expect_finite(Op::Remap, [val, src_a, src_b, dst_a, dst_b])?;
    let t = deval_as(Op::Remap, val, src_a, src_b)?;
    Ok(eval(t, dst_a, dst_b))
}

/// Restrict `val` to the interval, whichever order the bounds come in.
///
/// NaN in any position yields NaN.
pub fn limit(val: Number, a: Number, b: Number) -> Number {
    if val.is_nan() || a.is_nan() || b.is_nan() {
        return Number::NAN;
    }

    let (min, max) = ordered(a, b);
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Snap `val` to the nearest of the `steps + 1` evenly spaced grid points
/// from `a` to `b`.
///
/// Ties round half up in parameter space, so a value exactly between two
/// grid points goes to the one closer to `b`.
pub fn snap(val: Number, steps: i64, a: Number, b: Number) -> Result<Number, IntervalErr> {
    expect_finite(Op::Snap, [val, a, b])?;
    if steps <= 0 {
        return Err(IntervalErr::new(Op::Snap, IntervalErrTyp::InvalidSteps { steps }));
    }

    let val = limit(val, a, b);
    if (b - a).abs() < EPSILON {
        return Ok(a);
    }

    let steps = steps as Number;
    let t = deval_as(Op::Snap, val, a, b)?;
    let snapped = (t * steps).round() / steps;
    Ok(eval(snapped, a, b))
}

// grid points `0..=steps`, with the last one pinned to `b` exactly
fn grid(steps: usize, a: Number, b: Number) -> impl Iterator<Item = Number> {
    (0..=steps).map(move |i| {
        if i == steps {
            b
        } else {
            eval(i as Number / steps as Number, a, b)
        }
    })
}

/// Start points of `steps` equal segments of the interval. `b` itself is not
/// included.
pub fn divide(steps: i64, a: Number, b: Number) -> Result<Vec<Number>, IntervalErr> {
    expect_finite(Op::Divide, [a, b])?;
    let steps = expect_steps(Op::Divide, steps)?;
    let mut vals = alloc(Op::Divide, steps)?;
    vals.extend(grid(steps, a, b).take(steps));
    Ok(vals)
}

/// `steps` contiguous segments covering the interval.
///
/// Each segment ends exactly where the next one starts, and the last one
/// ends on `b`.
pub fn subintervals(steps: i64, a: Number, b: Number) -> Result<Vec<Range<Number>>, IntervalErr> {
    expect_finite(Op::Subintervals, [a, b])?;
    let steps = expect_steps(Op::Subintervals, steps)?;
    let mut parts = alloc(Op::Subintervals, steps)?;
    let ends = grid(steps, a, b).skip(1);
    parts.extend(grid(steps, a, b).zip(ends).map(|(start, end)| start..end));
    Ok(parts)
}

/// Draw `count` values uniformly from the interval, bounds in either order.
pub fn random<R: Rng + ?Sized>(
    rng: &mut R,
    count: i64,
    a: Number,
    b: Number,
) -> Result<Vec<Number>, IntervalErr> {
    expect_finite(Op::Random, [a, b])?;
    let count = usize::try_from(count)
        .map_err(|_| IntervalErr::new(Op::Random, IntervalErrTyp::InvalidCount { count }))?;

    let (min, max) = ordered(a, b);
    let mut vals = alloc(Op::Random, count)?;
    vals.extend((0..count).map(|_| eval(rng.gen::<Number>(), min, max)));
    Ok(vals)
}

/// Smallest and largest number in a text stream.
///
/// Tokens that aren't numbers, or aren't finite, are reported to `diag` and
/// skipped.
pub fn encompass<R: BufRead, D: Write>(input: R, diag: D) -> Result<Range<Number>, IntervalErr> {
    let mut bounds: Option<Range<Number>> = None;

    for val in Numbers::new(input, diag).finite() {
        let val = val.map_err(|err| IntervalErr::new(Op::Encompass, IntervalErrTyp::Read(err)))?;
        bounds = Some(match bounds {
            Some(Range { start, end }) => start.min(val)..end.max(val),
            None => val..val,
        });
    }

    bounds.ok_or(IntervalErr::new(Op::Encompass, IntervalErrTyp::NoData))
}
