// SPDX: CC0-1.0

use anyhow::Context;
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use span::{
    color::Color,
    format::NumFmt,
    interval, shell,
    spark::{self, SparkConfig},
    Number,
};
use std::{
    io::{stderr, stdin, stdout, BufWriter, IsTerminal, Write},
    process::ExitCode,
};

/// Interval arithmetic and sparklines for streams of numbers.
///
/// Per-value commands read numbers from standard input and write one
/// result per line. With no command and piped input, draws a sparkline.
#[derive(Debug, Parser)]
#[command(name = "span", version)]
struct Cli {
    /// printf-style format for every number written, e.g. "%.3f"
    #[arg(short, long, global = true, default_value = "%g")]
    format: NumFmt,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate each input parameter t within the interval [a, b]
    #[command(visible_alias = "e", allow_negative_numbers = true)]
    Eval { a: Number, b: Number },

    /// Map each input value back to its parameter t within [a, b]
    #[command(visible_alias = "d", allow_negative_numbers = true)]
    Deval { a: Number, b: Number },

    /// Translate each input value from one interval to another
    #[command(visible_alias = "r", allow_negative_numbers = true)]
    Remap {
        src_a: Number,
        src_b: Number,
        dst_a: Number,
        dst_b: Number,
    },

    /// Restrict each input value to the interval
    #[command(visible_alias = "l", allow_negative_numbers = true)]
    Limit { min: Number, max: Number },

    /// Snap each input value to the nearest of steps + 1 grid points
    #[command(visible_alias = "S", allow_negative_numbers = true)]
    Snap { steps: i64, a: Number, b: Number },

    /// Print the start of each of steps equal segments of [a, b]
    #[command(visible_alias = "n", allow_negative_numbers = true)]
    Divide { steps: i64, a: Number, b: Number },

    /// Print the bounds of each of steps equal segments of [a, b]
    #[command(visible_alias = "s", allow_negative_numbers = true)]
    Subintervals { steps: i64, a: Number, b: Number },

    /// Print count uniformly random values from [a, b]
    #[command(visible_alias = "R", allow_negative_numbers = true)]
    Random {
        count: i64,
        a: Number,
        b: Number,
        /// Seed for reproducible output (default: the clock)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the smallest and largest input value
    #[command(visible_alias = "E")]
    Encompass,

    /// Draw a sparkline, scaled to the input unless min and max are given
    #[command(allow_negative_numbers = true)]
    Spark {
        #[arg(requires = "max")]
        min: Option<Number>,
        max: Option<Number>,
        /// Redraw a sliding window of this many samples in place
        #[arg(long)]
        width: Option<i64>,
        /// red, green, yellow, blue, magenta or cyan
        #[arg(long)]
        color: Option<Color>,
    },
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let chain = err.chain();
            if chain.len() > 1 {
                eprintln!();
                eprintln!("context:");
                for it in chain.skip(1) {
                    eprintln!("  {it}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn clock_seed() -> u64 {
    let now = Local::now();
    now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp()) as u64
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cmd = match cli.cmd {
        Some(cmd) => cmd,
        None if !stdin().is_terminal() => Command::Spark {
            min: None,
            max: None,
            width: None,
            color: None,
        },
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    let fmt = &cli.format;
    let input = stdin().lock();
    let diag = stderr().lock();
    let mut out = BufWriter::new(stdout().lock());

    match cmd {
        Command::Eval { a, b } => {
            shell::process(input, &mut out, diag, fmt, |t| Ok(interval::eval(t, a, b)))
                .context("failed to evaluate input stream")?;
        }

        Command::Deval { a, b } => {
            shell::process(input, &mut out, diag, fmt, |val| interval::deval(val, a, b))
                .context("failed to de-evaluate input stream")?;
        }

        Command::Remap {
            src_a,
            src_b,
            dst_a,
            dst_b,
        } => {
            shell::process(input, &mut out, diag, fmt, |val| {
                interval::remap(val, src_a, src_b, dst_a, dst_b)
            })
            .context("failed to remap input stream")?;
        }

        Command::Limit { min, max } => {
            shell::process(input, &mut out, diag, fmt, |val| {
                Ok(interval::limit(val, min, max))
            })
            .context("failed to limit input stream")?;
        }

        Command::Snap { steps, a, b } => {
            // a bad step count fails every value, so reject it up front
            interval::snap(a, steps, a, b).context("invalid snap arguments")?;
            shell::process(input, &mut out, diag, fmt, |val| {
                interval::snap(val, steps, a, b)
            })
            .context("failed to snap input stream")?;
        }

        Command::Divide { steps, a, b } => {
            let vals = interval::divide(steps, a, b)?;
            shell::write_values(&mut out, fmt, &vals)?;
        }

        Command::Subintervals { steps, a, b } => {
            let pairs = interval::subintervals(steps, a, b)?;
            shell::write_pairs(&mut out, fmt, &pairs)?;
        }

        Command::Random {
            count,
            a,
            b,
            seed,
        } => {
            let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(clock_seed));
            let vals = interval::random(&mut rng, count, a, b)?;
            shell::write_values(&mut out, fmt, &vals)?;
        }

        Command::Encompass => {
            let bounds = interval::encompass(input, diag)?;
            shell::write_pairs(&mut out, fmt, &[bounds])?;
        }

        Command::Spark {
            min,
            max,
            width,
            color,
        } => {
            let config = SparkConfig {
                min,
                max,
                width: width.map(|w| usize::try_from(w).unwrap_or(0)),
                color,
            };
            spark::render(input, &mut out, diag, &config).context("failed to draw sparkline")?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
