// SPDX: CC0-1.0

pub mod color;
pub mod err;
pub mod format;
pub mod interval;
pub mod ring;
pub mod shell;
pub mod spark;

pub type Number = f64;

/// Widths and distances below this are treated as zero.
pub const EPSILON: Number = 1e-15;
