//! # qettables
//!
//! Export the terminal blocks of a QElectroTech project as HTML tables.
//!
//! ## Overview
//!
//! qettables is built on top of qettableslib. It reads the element
//! nomenclature from a QElectroTech SQLite export and writes one
//! `terminals_<block>.html` file per terminal block, listing every terminal
//! number with its mention count and folio positions.
//!
//! ## Usage
//!
//! ```bash
//! # Read qet.sqlite from the current directory
//! qettables
//!
//! # Include styles.css in every table file
//! qettables project.sqlite --styles
//!
//! # Complete HTML documents with a custom stylesheet
//! qettables project.sqlite --styles print.css --wrap
//!
//! # Machine-readable summary
//! qettables project.sqlite --format json
//! ```

mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use qettableslib::{extract_tables, load_stylesheet, Database, Document, ExtractOptions};

use render::{render_summary, SummaryFormat};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("qettables")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export QElectroTech terminal block connections as HTML tables")
        .arg(
            Arg::new("dbfile")
                .value_name("FILE")
                .help("Read database from the given FILE")
                .default_value("qet.sqlite"),
        )
        .arg(
            Arg::new("styles")
                .short('s')
                .long("styles")
                .value_name("FILE")
                .num_args(0..=1)
                .default_missing_value("styles.css")
                .help("Include CSS stylesheet (default \"styles.css\")"),
        )
        .arg(
            Arg::new("wrap")
                .short('w')
                .long("wrap")
                .action(ArgAction::SetTrue)
                .help("Output a complete HTML document with framing"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Write table files into DIR (defaults to current directory)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Format of the per-block summary"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v, -vv)"),
        )
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Assemble the document framing from the styles and wrap options
fn build_document(matches: &ArgMatches) -> anyhow::Result<Document> {
    let css = match matches.get_one::<String>("styles") {
        Some(path) => load_stylesheet(path)?,
        None => String::new(),
    };
    Ok(Document::new(matches.get_flag("wrap"), &css))
}

fn run(matches: &ArgMatches, dbfile: &Path) -> anyhow::Result<()> {
    let document = build_document(matches)?;
    let mut options = ExtractOptions::new().document(document);
    if let Some(dir) = matches.get_one::<String>("output-dir") {
        options = options.output_dir(dir);
    }
    let format = matches
        .get_one::<String>("format")
        .map(|s| SummaryFormat::from_name(s))
        .unwrap_or(SummaryFormat::Text);

    let db = Database::open(dbfile)?;
    let reports = extract_tables(&db, &options)
        .with_context(|| format!("failed to export tables from '{}'", dbfile.display()))?;
    db.close()?;
    log::info!("{} terminal blocks exported", reports.len());

    print!("{}", render_summary(&reports, format)?);
    Ok(())
}

fn main() -> ExitCode {
    let mut cmd = build_command();
    let matches = cmd.clone().get_matches();
    init_logging(matches.get_count("verbose"));

    let dbfile = matches
        .get_one::<String>("dbfile")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("qet.sqlite"));

    // Checked up front so that no output file is touched
    if !dbfile.exists() {
        eprintln!("Error: database file '{}' not found", dbfile.display());
        eprintln!("{}", cmd.render_usage());
        return ExitCode::FAILURE;
    }

    match run(&matches, &dbfile) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
