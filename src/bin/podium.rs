//! Podium CLI - Command-line interface for Podium Report
//!
//! Commands:
//! - report: Generate report JSON from an observation file
//! - summary: Print the narrative feedback as plain text
//! - validate: Validate an observation file record by record

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use podium_report::adapter::validate;
use podium_report::pipeline::generate_report;
use podium_report::types::Observation;
use podium_report::{ReportError, ENGINE_VERSION};

/// Podium - Report engine for presenter behavior observations
#[derive(Parser)]
#[command(name = "podium")]
#[command(author = "Podium Labs")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Turn behavioral observations into a presentation report", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate report JSON from an observation file
    Report {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Pretty-print the report JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the narrative feedback as plain text
    Summary {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Validate an observation file record by record
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PodiumCliError> {
    match cli.command {
        Commands::Report {
            input,
            output,
            pretty,
        } => cmd_report(&input, &output, pretty),
        Commands::Summary { input } => cmd_summary(&input),
        Commands::Validate { input, json } => cmd_validate(&input, json),
    }
}

fn cmd_report(input: &Path, output: &Path, pretty: bool) -> Result<(), PodiumCliError> {
    let observations = read_observations(input)?;
    let report = generate_report(&observations)?;

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    if output.to_string_lossy() == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", json)?;
    } else {
        fs::write(output, json)?;
    }

    Ok(())
}

fn cmd_summary(input: &Path) -> Result<(), PodiumCliError> {
    let observations = read_observations(input)?;
    let report = generate_report(&observations)?;

    println!(
        "Session length: {}m {}s over {} observations\n",
        report.time.minute,
        report.time.second,
        observations.len()
    );
    println!("{}\n", report.summary.eye);
    println!("{}\n", report.summary.emotion);
    println!("{}", report.summary.gesture);

    Ok(())
}

fn cmd_validate(input: &Path, json: bool) -> Result<(), PodiumCliError> {
    let input_data = read_input(input)?;

    let records: Vec<serde_json::Value> = serde_json::from_str(&input_data)?;
    let mut report = ValidationReport {
        total: records.len(),
        valid: 0,
        invalid: 0,
        errors: Vec::new(),
    };

    for (index, record) in records.iter().enumerate() {
        match check_record(record) {
            Ok(()) => report.valid += 1,
            Err(message) => {
                report.invalid += 1;
                report.errors.push(RecordError { index, message });
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} records: {} valid, {} invalid", report.total, report.valid, report.invalid);
        for error in &report.errors {
            println!("  record {}: {}", error.index, error.message);
        }
    }

    if report.invalid > 0 {
        Err(PodiumCliError::ValidationFailed(report.invalid))
    } else {
        Ok(())
    }
}

fn check_record(record: &serde_json::Value) -> Result<(), String> {
    let observation: Observation =
        serde_json::from_value(record.clone()).map_err(|e| e.to_string())?;
    validate(&observation).map_err(|e| e.to_string())
}

// Helper functions

fn read_observations(input: &Path) -> Result<Vec<Observation>, PodiumCliError> {
    let input_data = read_input(input)?;
    let observations = podium_report::adapter::parse_observations(&input_data)?;
    if observations.is_empty() {
        return Err(PodiumCliError::NoObservations);
    }
    Ok(observations)
}

fn read_input(input: &Path) -> Result<String, PodiumCliError> {
    if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            return Err(PodiumCliError::NoStdin);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

#[derive(serde::Serialize)]
struct ValidationReport {
    total: usize,
    valid: usize,
    invalid: usize,
    errors: Vec<RecordError>,
}

#[derive(serde::Serialize)]
struct RecordError {
    index: usize,
    message: String,
}

// Error types

#[derive(Debug)]
enum PodiumCliError {
    Io(io::Error),
    Engine(ReportError),
    Json(serde_json::Error),
    NoObservations,
    NoStdin,
    ValidationFailed(usize),
}

impl From<io::Error> for PodiumCliError {
    fn from(e: io::Error) -> Self {
        PodiumCliError::Io(e)
    }
}

impl From<ReportError> for PodiumCliError {
    fn from(e: ReportError) -> Self {
        PodiumCliError::Engine(e)
    }
}

impl From<serde_json::Error> for PodiumCliError {
    fn from(e: serde_json::Error) -> Self {
        PodiumCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<PodiumCliError> for CliError {
    fn from(e: PodiumCliError) -> Self {
        match e {
            PodiumCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            PodiumCliError::Engine(e) => CliError {
                code: "REPORT_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'podium validate' for per-record details".to_string()),
            },
            PodiumCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            PodiumCliError::NoObservations => CliError {
                code: "NO_OBSERVATIONS".to_string(),
                message: "No observations found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            PodiumCliError::NoStdin => CliError {
                code: "NO_STDIN".to_string(),
                message: "stdin is a terminal, nothing to read".to_string(),
                hint: Some("Pipe an observation file or pass --input <path>".to_string()),
            },
            PodiumCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} records failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
        }
    }
}
