use std::io::{self, Write};
use std::ops::ControlFlow;

use alphametix::utils::{DEFAULT_RADIX, parse_radix_arg};
use alphametix::{Puzzle, PuzzleSolver, SolverError};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Alphametix - Solve alphametic puzzles
///
/// Finds all ways to replace letters by digits to satisfy the given equation.
/// The equation has the form expr=expr, where an expr is a number in the given
/// radix ([0-9]+), a word of uppercase letters ([A-Z]+), or a composite
/// expr+expr, expr-expr, expr*expr, expr/expr. Different letters get different
/// digits and leading letters may not be 0. Arithmetic is exact on 64-bit
/// integers without overflow checks.
#[derive(Parser, Debug)]
#[command(name = "alphametix")]
#[command(about = "Find every digit assignment that solves an alphametic equation")]
#[command(version)]
pub struct CliArgs {
    /// Optional radix followed by the equation, e.g. `16 A+B=10` or `SEND+MORE=MONEY`
    #[arg(value_name = "[RADIX] EQUATION", num_args = 1..=2, required = true)]
    pub args: Vec<String>,

    /// Stop after this many solutions
    #[arg(short = 'n', long)]
    pub max_solutions: Option<usize>,

    /// Also print each solution as the equation with digits substituted
    #[arg(short, long)]
    pub substitute: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub equation: String,
    pub radix: u32,
    pub max_solutions: Option<usize>,
    pub substitute: bool,
    pub log_level: LogLevel,
}

impl CliConfig {
    /// The last positional value is the equation; a preceding one is the radix.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let equation = args
            .args
            .last()
            .cloned()
            .context("Missing equation argument")?;
        let radix = if args.args.len() >= 2 {
            args.args.first().map_or(DEFAULT_RADIX, |r| parse_radix_arg(r))
        } else {
            DEFAULT_RADIX
        };

        Ok(Self {
            equation,
            radix,
            max_solutions: args.max_solutions,
            substitute: args.substitute,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn write_solution<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    assignment: &[usize],
    substitute: bool,
) -> io::Result<()> {
    let digits: Vec<String> = assignment.iter().map(usize::to_string).collect();
    writeln!(out, "{}", digits.join(" "))?;
    if substitute {
        writeln!(out, "  {}", puzzle.substitute(assignment))?;
    }
    Ok(())
}

/// Print the letter header and every solution; return how many were printed.
pub fn print_solutions<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    max_solutions: Option<usize>,
    substitute: bool,
) -> Result<usize> {
    let letters: Vec<String> = puzzle.letters().iter().map(char::to_string).collect();
    let header = letters.join(" ");

    if max_solutions == Some(0) {
        writeln!(out, "{}", header)?;
        return Ok(0);
    }

    let mut printed_header = false;
    let mut printed = 0;
    let mut write_error = None;

    let result = PuzzleSolver::new(puzzle).for_each_solution(|assignment| {
        let mut written = Ok(());
        if !printed_header {
            printed_header = true;
            written = writeln!(out, "{}", header);
        }
        let written = written.and_then(|()| write_solution(out, puzzle, assignment, substitute));

        match written {
            Ok(()) => {
                printed += 1;
                if max_solutions.is_some_and(|max| printed >= max) {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            }
            Err(e) => {
                write_error = Some(e);
                ControlFlow::Break(())
            }
        }
    });

    if let Some(e) = write_error {
        return Err(e).context("Failed to write solution");
    }

    match result {
        Ok(_) => {
            if !printed_header {
                writeln!(out, "{}", header)?;
            }
            Ok(printed)
        }
        Err(SolverError::TooManyLetters { .. }) => {
            writeln!(out, "This alphametic has too many letters.\n")?;
            Ok(0)
        }
        Err(e) => Err(e).context("Solver failed"),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let puzzle = Puzzle::new(&config.equation, config.radix)
        .with_context(|| format!("Invalid puzzle '{}'", config.equation))?;

    info!("Solving '{}' in radix {}", config.equation, config.radix);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "There are {} different letters.\n", puzzle.num_letters())?;

    let found = print_solutions(&mut out, &puzzle, config.max_solutions, config.substitute)?;
    if found == 0 {
        warn!("No solutions found");
    }
    writeln!(out, "{} solutions found.", found)?;
    Ok(())
}
