//! Command-line surface of the lessons binary.
//!
//! Every lesson writes exactly its expected output to `out`; diagnostics go
//! through `tracing` so they never mix with it.

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use lambda_lessons::challenge;
use lambda_lessons::closures::{make_adder, make_logger_with, run as run_once};
use lambda_lessons::coders::Variant;
use lambda_lessons::config::LessonsConfig;
use lambda_lessons::fetch::DirectorySource;
use lambda_lessons::numeric::sum_of_plus;
use lambda_lessons::predicates::{even_numbers, odd_sum};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "lambda-lessons")]
#[command(about = "Functional programming lessons: closures, composition and point-free pipelines")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Lesson,
}

#[derive(Subcommand, Debug)]
pub enum Lesson {
    /// Closures returning closures: make_adder(2)(3) and make_adder(5)(5)
    Adder,
    /// A logger factory whose result is run once
    Logger {
        /// Message the logger prints
        #[arg(default_value = "hello")]
        message: String,
    },
    /// odd composed after add, applied to (4, 5) and (4, 4)
    OddSum,
    /// Even numbers of 1..=6 through compose!(not, odd)
    Composition,
    /// Add 2 to every value, then sum
    SumOfPlus2 {
        /// Values to transform
        #[arg(
            default_values_t = [1, 2, 3, 4, 5],
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32)
        )]
        values: Vec<i32>,
    },
    /// Total age of the coders document
    Challenge(ChallengeArgs),
    /// Every lesson in order
    All(SourceArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory JSON paths are resolved against (overrides LESSONS_DATA_ROOT)
    #[arg(long)]
    pub data_root: Option<PathBuf>,
    /// Path of the coders document (overrides LESSONS_CODERS_PATH)
    #[arg(long)]
    pub path: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ChallengeArgs {
    /// Variant to run, v1..v11 (default: v11)
    #[arg(long, conflicts_with = "all")]
    pub variant: Option<Variant>,
    /// Run every variant and print one total per line
    #[arg(long)]
    pub all: bool,
    #[command(flatten)]
    pub source: SourceArgs,
}

pub async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    info!(lesson = ?cli.command, "running lesson");

    match cli.command {
        Lesson::Adder => adder(out)?,
        Lesson::Logger { message } => logger(&message, out)?,
        Lesson::OddSum => odd_sums(out)?,
        Lesson::Composition => composition(out)?,
        Lesson::SumOfPlus2 { values } => sum_of_plus2(values, out)?,
        Lesson::Challenge(arguments) => coders_challenge(&arguments, out).await?,
        Lesson::All(source) => {
            writeln!(out, "== adder")?;
            adder(out)?;
            writeln!(out, "== logger")?;
            logger("hello", out)?;
            writeln!(out, "== odd-sum")?;
            odd_sums(out)?;
            writeln!(out, "== composition")?;
            composition(out)?;
            writeln!(out, "== sum-of-plus2")?;
            sum_of_plus2(vec![1, 2, 3, 4, 5], out)?;
            writeln!(out, "== challenge")?;
            let arguments = ChallengeArgs {
                variant: None,
                all: true,
                source,
            };
            coders_challenge(&arguments, out).await?;
        }
    }

    Ok(())
}

fn adder<W: Write>(out: &mut W) -> io::Result<()> {
    let add2 = make_adder(2);
    let add5 = make_adder(5);

    writeln!(out, "{}", add2(3))?;
    writeln!(out, "{}", add5(5))
}

fn logger<W: Write>(message: &str, out: &mut W) -> io::Result<()> {
    let out = RefCell::new(out);
    let written = RefCell::new(Ok(()));

    let hello = make_logger_with(message, |line| {
        if let Err(error) = writeln!(out.borrow_mut(), "{line}") {
            *written.borrow_mut() = Err(error);
        }
    });
    run_once(hello);

    written.into_inner()
}

fn odd_sums<W: Write>(out: &mut W) -> io::Result<()> {
    let odd_sum = odd_sum();

    writeln!(out, "{}", odd_sum(4, 5))?;
    writeln!(out, "{}", odd_sum(4, 4))
}

fn composition<W: Write>(out: &mut W) -> io::Result<()> {
    let numbers = [1, 2, 3, 4, 5, 6];
    writeln!(out, "{:?}", even_numbers(&numbers))
}

fn sum_of_plus2<W: Write>(values: Vec<i32>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", sum_of_plus(2)(values))
}

async fn coders_challenge<W: Write>(arguments: &ChallengeArgs, out: &mut W) -> anyhow::Result<()> {
    let config = LessonsConfig::from_env()?
        .with_data_root(arguments.source.data_root.clone())
        .with_coders_path(arguments.source.path.clone());
    let source = DirectorySource::new(&config.data_root);
    let context = || {
        format!(
            "summing ages from {} under {}",
            config.coders_path,
            config.data_root.display()
        )
    };

    if arguments.all {
        let totals = challenge::total_ages_all(&source, &config.coders_path)
            .await
            .with_context(context)?;
        if !challenge::totals_agree(&totals) {
            tracing::warn!(?totals, "variants disagree");
        }
        for (variant, total) in totals {
            writeln!(out, "{variant}: {total}")?;
        }
    } else {
        let variant = arguments.variant.unwrap_or(Variant::V11);
        let total = challenge::total_ages(&source, &config.coders_path, variant)
            .await
            .with_context(context)?;
        writeln!(out, "{total}")?;
    }

    Ok(())
}
