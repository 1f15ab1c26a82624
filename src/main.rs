//! # workflow-validator CLI
//!
//! Validates one workflow document and maps the outcome to an exit code:
//! 0 valid, 1 invalid, 2 the schema could not be loaded.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use workflow_validator::{DEFAULT_SCHEMA_PATH, ValidationResult, WorkflowValidator};

/// Check a workflow document against the structural schema and the
/// connection, trigger, layout and expression rules.
#[derive(Parser, Debug)]
#[command(name = "workflow-validator", version, about)]
struct Cli {
    /// Workflow JSON file to validate.
    workflow: PathBuf,

    /// Structural schema to validate against.
    #[arg(long, env = "WORKFLOW_SCHEMA", default_value = DEFAULT_SCHEMA_PATH)]
    schema: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ Validation failed: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let validator = WorkflowValidator::from_path(&cli.schema)
        .with_context(|| format!("cannot build validator from '{}'", cli.schema.display()))?;

    let result = validator.validate_file(&cli.workflow);
    match cli.format {
        OutputFormat::Text => print_text(&cli.workflow, &result),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).context("cannot serialize result")?;
            println!("{json}");
        }
    }

    Ok(result.is_valid)
}

fn print_text(workflow: &std::path::Path, result: &ValidationResult) {
    if result.is_valid {
        println!("✅ Workflow '{}' is valid!", workflow.display());
        return;
    }

    println!("❌ Workflow '{}' has validation errors:", workflow.display());
    for error in &result.errors {
        println!("  • {error}");
    }
}
