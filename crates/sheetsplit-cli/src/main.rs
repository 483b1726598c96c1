use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use regex::Regex;
use sheetsplit_core::{KeyPattern, SplitOptions, default_patterns, split_by_column};
use sheetsplit_io::{read_xlsx, write_xlsx};

/// Split a single-sheet xlsx file into one sheet per distinct value of a
/// chosen column.
#[derive(Debug, Parser)]
#[command(name = "sheetsplit", version)]
struct Cli {
    /// Input xlsx file (must contain exactly one sheet).
    #[arg(long = "in", value_name = "FILE")]
    input: PathBuf,

    /// Output xlsx file.
    #[arg(long = "out", value_name = "FILE")]
    output: PathBuf,

    /// Zero-based column index to group rows by.
    #[arg(long = "col", default_value_t = 0)]
    column: usize,

    /// Abort on rows too short to reach the group column instead of
    /// skipping them.
    #[arg(long)]
    short_row_error: bool,

    /// Trim surrounding whitespace from group keys before naming sheets.
    #[arg(long)]
    trim: bool,

    /// Regex suppressing rows whose key text it matches; repeatable.
    /// Overrides the built-in "table N" / "county" header patterns.
    #[arg(long = "ignore", value_name = "REGEX")]
    ignore: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let patterns = if cli.ignore.is_empty() {
        default_patterns()
    } else {
        cli.ignore
            .iter()
            .map(|p| {
                Regex::new(p)
                    .map(|r| Box::new(r) as Box<dyn KeyPattern>)
                    .with_context(|| format!("invalid --ignore pattern {p:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let source = read_xlsx(&cli.input)
        .with_context(|| format!("opening {}", cli.input.display()))?;

    let opts = SplitOptions {
        short_row_is_error: cli.short_row_error,
        trim_keys: cli.trim,
        patterns,
    };
    let out = split_by_column(&source, cli.column, &opts)
        .context("splitting sheet by column")?;

    write_xlsx(&out, &cli.output)
        .with_context(|| format!("saving {}", cli.output.display()))?;
    Ok(())
}
