// ABOUTME: CLI for exporting selected HTML table columns with tabex-core.
// ABOUTME: Loads a page from file/stdin/URL, answers prompts from flags or the terminal, prints JSON or writes CSV.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use tabex_core::{
    source, ColumnMode, DefaultsPrompter, DirectorySink, Outcome, Pipeline, PresetPrompter,
    PromptKey, Prompter, TerminalPrompter,
};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Export selected columns of an HTML table as JSON (stdout) or CSV (file).
#[derive(Parser, Debug)]
#[command(name = "tabex")]
#[command(about = "Export selected columns of an HTML table as JSON or CSV", long_about = None)]
struct Args {
    /// HTML file path, http(s) URL, or "-" to read the page from stdin.
    source: String,

    /// Table selector (answers the table prompt).
    #[arg(long)]
    table: Option<String>,

    /// Row-container selector, searched across the whole page.
    #[arg(long)]
    container: Option<String>,

    /// Container index to use when several containers match.
    #[arg(long)]
    choice: Option<String>,

    /// Comma-separated column names (or indices with --by-index).
    #[arg(long)]
    columns: Option<String>,

    /// Export format: json or csv. Ignored with --by-index.
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Select columns by zero-based index instead of header name (JSON only).
    #[arg(long, default_value_t = false)]
    by_index: bool,

    /// Directory for CSV files.
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    out_dir: PathBuf,

    /// Date used in the CSV file name (YYYY-MM-DD). Defaults to today (UTC).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Never read answers from the terminal: unanswered prompts take their
    /// default, or cancel when they have none.
    #[arg(long, default_value_t = false)]
    no_prompt: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    if args.by_index && args.format.is_some() {
        warn!("--format is ignored with --by-index; output is JSON");
    }
    if args.source == "-" && !args.no_prompt {
        warn!("page read from stdin; prompts without a flag will be cancelled");
    }

    let html = match source::load(&args.source) {
        Ok(html) => html,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(1);
        }
    };

    let mut builder = Pipeline::builder().column_mode(if args.by_index {
        ColumnMode::Indices
    } else {
        ColumnMode::Names
    });
    if let Some(date) = args.date {
        builder = builder.export_date(date);
    }
    let pipeline = builder.build();

    let inner: Box<dyn Prompter> = if args.no_prompt {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(TerminalPrompter::new(io::stdin().lock(), io::stderr()))
    };
    let mut prompter = PresetPrompter::new(inner)
        .preset(PromptKey::TableSelector, args.table)
        .preset(PromptKey::ContainerSelector, args.container)
        .preset(PromptKey::ContainerChoice, args.choice)
        .preset(PromptKey::Columns, args.columns)
        .preset(PromptKey::Format, args.format);
    let mut sink = DirectorySink::new(args.out_dir);

    match pipeline.run_html(&html, &mut prompter, &mut sink) {
        Ok(Outcome::Json { rendered, .. }) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Csv { .. }) => ExitCode::SUCCESS,
        Err(e) if e.is_cancelled() => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(1),
    }
}
