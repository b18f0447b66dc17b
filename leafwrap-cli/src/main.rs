//! leafwrap CLI - Wrap JSON leaf values with content/type records
//!
//! `leafwrap <INPUT> <DEPTH> <OUTPUT>` reads one JSON document, replaces every
//! non-object value inside the first `DEPTH` object levels with
//! `{"content": <value>, "type": <label>}`, and writes the result indented by
//! four spaces. `DEPTH` may be `unbounded` (or `inf`) to rewrite every level.

use clap::{ArgAction, Parser, ValueEnum};
use leafwrap_io::{
    execute_substitute, DepthBudget, InputSource, OutputLayout, OutputSink, SubstituteOptions,
    SubstituteRequest, SubstituteSummary, TransformLimits, WrapperKeys, DEFAULT_CONTENT_KEY,
    DEFAULT_INDENT, DEFAULT_TYPE_KEY,
};
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, level_filters::LevelFilter};

#[derive(Parser)]
#[command(name = "leafwrap")]
#[command(about = "Wrap JSON leaf values with content/type records down to a depth")]
#[command(version)]
struct Cli {
    /// Input file containing one JSON document
    input: PathBuf,
    /// Object levels to rewrite: a non-negative integer, or `unbounded`
    #[arg(allow_negative_numbers = true)]
    depth: DepthBudget,
    /// Output file (created or overwritten)
    output: PathBuf,
    /// Field name holding the original value
    #[arg(long, default_value = DEFAULT_CONTENT_KEY)]
    content_key: String,
    /// Field name holding the type label
    #[arg(long, default_value = DEFAULT_TYPE_KEY)]
    type_key: String,
    /// Spaces of indentation in the output
    #[arg(long, default_value_t = DEFAULT_INDENT, conflicts_with = "compact")]
    indent: usize,
    /// Write the output on a single line
    #[arg(long)]
    compact: bool,
    /// Maximum object nesting the transformer will descend through
    #[arg(long, default_value_t = TransformLimits::default().max_nesting)]
    max_nesting: usize,
    /// Summary written to stderr after a successful run
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    summary: SummaryFormat,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Suppress all log output
    #[arg(long, short = 'q')]
    quiet: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
    None,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        eprintln!("leafwrap: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::OFF
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let options = SubstituteOptions {
        depth: cli.depth,
        keys: WrapperKeys {
            content: cli.content_key,
            type_key: cli.type_key,
        },
        limits: TransformLimits {
            max_nesting: cli.max_nesting,
        },
        layout: if cli.compact {
            OutputLayout::Compact
        } else {
            OutputLayout::Indented(cli.indent)
        },
    };

    info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        depth = %cli.depth,
        "substituting"
    );

    let request = SubstituteRequest {
        input: InputSource::Path(cli.input.clone()),
        output: OutputSink::Path(cli.output.clone()),
        options,
    };
    let summary = execute_substitute(request)?;
    let elapsed = start.elapsed();

    report_summary(&summary, &cli.output, elapsed, cli.summary)?;
    Ok(())
}

fn report_summary(
    summary: &SubstituteSummary,
    output: &Path,
    elapsed: Duration,
    format: SummaryFormat,
) -> Result<(), Box<dyn Error>> {
    let mut stderr = std::io::stderr().lock();
    match format {
        SummaryFormat::None => {}
        SummaryFormat::Text => {
            writeln!(
                &mut stderr,
                "Wrote {} (depth: {}, leaves wrapped: {}, objects rewritten: {}, objects at boundary: {}, bytes: {} -> {}, elapsed: {:.2?})",
                output.display(),
                summary.depth,
                summary.stats.leaves_wrapped,
                summary.stats.objects_visited,
                summary.stats.boundary_objects,
                summary.input_bytes,
                summary.output_bytes,
                elapsed
            )?;
        }
        SummaryFormat::Json => {
            serde_json::to_writer(&mut stderr, summary)?;
            writeln!(&mut stderr)?;
        }
    }
    Ok(())
}
