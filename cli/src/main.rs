//! contentsheet CLI - build content.json from content.xlsx
//!
//! Reads the first worksheet of the content spreadsheet and writes the JSON
//! document consumed by the static site build.

use clap::Parser;
use colored::*;
use contentsheet::render::{JsonFormat, RenderOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Convert content.xlsx into content.json for the static site
#[derive(Parser, Debug)]
#[command(
    name = "contentsheet",
    version,
    about = "Convert content.xlsx into content.json for the static site",
    long_about = "contentsheet - build the site's content document from a spreadsheet.\n\n\
                  The first worksheet needs a header row with Section, Key, Value\n\
                  and Link columns; each later row becomes one content entry."
)]
struct Cli {
    /// Path to the Excel source file
    #[arg(long, default_value = "content.xlsx")]
    input: PathBuf,

    /// Where to write the generated JSON
    #[arg(long, default_value = "content.json")]
    output: PathBuf,

    /// Output compact JSON (no indentation)
    #[arg(long)]
    compact: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2, conflicts_with = "compact")]
    indent: usize,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        let format = if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        RenderOptions::new()
            .with_format(format)
            .with_indent(self.indent)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "warn,contentsheet=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> contentsheet::Result<()> {
    contentsheet::build(&cli.input, &cli.output, &cli.render_options())?;
    println!(
        "{} Wrote {} from {}",
        "✓".green().bold(),
        cli.output.display(),
        cli.input.display()
    );
    Ok(())
}
