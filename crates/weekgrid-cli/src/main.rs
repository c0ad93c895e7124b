//! `weekgrid` CLI — check, normalize, and edit weekly schedule documents.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a week document (stdin → report on stdout)
//! cat week.json | weekgrid check
//!
//! # Validate from a file, machine-readable validity map
//! weekgrid check -i week.json --json
//!
//! # Fail the invocation when any row is invalid
//! weekgrid check -i week.json --strict
//!
//! # Emit the canonical "HH:MM" submission payload
//! weekgrid normalize -i week.json -o payload.json
//!
//! # Apply an edit script, print the resulting week plus its validity
//! weekgrid apply -i week.json --ops edits.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use weekgrid_core::validate::{validate_week, RowValidity, WeekValidity};
use weekgrid_core::{apply_all, submit, EditOp, WeekSchedule, Weekday};

#[derive(Parser)]
#[command(name = "weekgrid", version, about = "Weekly schedule validator and editor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a week document and report per-row verdicts
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the validity map as JSON instead of a text report
        #[arg(long)]
        json: bool,
        /// Exit non-zero when any row is invalid
        #[arg(long)]
        strict: bool,
    },
    /// Emit the canonical "HH:MM" submission payload
    Normalize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Apply a JSON edit script to a week document
    Apply {
        /// Input week document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// JSON file holding an array of edit ops
        #[arg(long)]
        ops: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            json,
            strict,
        } => {
            let week = read_week(input.as_deref())?;
            let validity = validate_week(&week);

            if json {
                println!("{}", serde_json::to_string_pretty(&validity)?);
            } else {
                print!("{}", render_report(&week, &validity));
            }

            if strict && !validity.is_clean() {
                anyhow::bail!("schedule has invalid rows");
            }
        }
        Commands::Normalize { input, output } => {
            let week = read_week(input.as_deref())?;
            let submission = submit(&week);
            let pretty = serde_json::to_string_pretty(&submission.payload)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Apply { input, output, ops } => {
            let mut week = read_week(input.as_deref())?;
            let script = std::fs::read_to_string(&ops)
                .with_context(|| format!("Failed to read ops file: {}", ops))?;
            let ops: Vec<EditOp> =
                serde_json::from_str(&script).context("Failed to parse edit ops")?;

            let validity = apply_all(&mut week, &ops)
                .map_err(|e| anyhow::anyhow!("edit script failed: {e}"))?;

            let result = serde_json::json!({
                "week": week,
                "validity": validity,
            });
            write_output(output.as_deref(), &serde_json::to_string_pretty(&result)?)?;
        }
    }

    Ok(())
}

/// Render the human-readable per-day report.
///
/// Empty days are skipped; each row shows its bounds and either `ok` or the
/// invalidity wording per field.
fn render_report(week: &WeekSchedule, validity: &WeekValidity) -> String {
    let mut out = String::new();
    let mut any = false;

    for (day, intervals) in week.days() {
        if intervals.is_empty() {
            continue;
        }
        any = true;
        out.push_str(day.name());
        out.push_str(":\n");
        for (i, (interval, verdict)) in intervals.iter().zip(validity.day(day)).enumerate() {
            let start = interval
                .start
                .map_or_else(|| "--:--".to_string(), |t| t.to_hhmm());
            let end = interval
                .end
                .map_or_else(|| "--:--".to_string(), |t| t.to_hhmm());
            out.push_str(&format!(
                "  [{i}] {start}-{end}  {}\n",
                describe_row(verdict)
            ));
        }
    }

    if !any {
        out.push_str("(empty week)\n");
    }
    out.push_str(&summary_line(week, validity));
    out
}

fn describe_row(verdict: &RowValidity) -> String {
    match (verdict.start, verdict.end) {
        (None, None) => "ok".to_string(),
        (Some(v), Some(_)) | (Some(v), None) | (None, Some(v)) => format!("invalid: {v}"),
    }
}

fn summary_line(week: &WeekSchedule, validity: &WeekValidity) -> String {
    let total: usize = Weekday::ALL.iter().map(|&d| week.day(d).len()).sum();
    let bad: usize = Weekday::ALL
        .iter()
        .map(|&d| {
            validity
                .day(d)
                .iter()
                .filter(|row| !row.is_valid())
                .count()
        })
        .sum();
    if bad == 0 {
        format!("{total} interval(s), all valid\n")
    } else {
        format!("{total} interval(s), {bad} invalid\n")
    }
}

fn read_week(path: Option<&str>) -> Result<WeekSchedule> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse week document")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
