//! Branchflow CLI
//!
//! ## Commands
//!
//! - `grade`: average a list of scores and print the letter grade
//! - `run`: run the conditional workflow against an artifact file
//! - `demo`: run the three reference workflow scenarios

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;

use branchflow::config::WorkflowConfig;
use branchflow::demo;
use branchflow::events::LoggingEventSink;
use branchflow::grading::{parse_scores, ScoreSet};
use branchflow::observability::init_tracing;
use branchflow::utils::FixedClock;
use branchflow::workflow::ConditionalWorkflowRunner;

#[derive(Parser)]
#[command(name = "branchflow")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Grade evaluation and conditional workflow runner", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average scores and map the result to a letter grade
    Grade {
        /// Scores to evaluate; prompts on stdin when omitted
        scores: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the conditional workflow
    Run {
        /// Condition to evaluate (true or false)
        #[arg(long, action = ArgAction::Set)]
        condition: bool,

        /// Context appended to the condition message
        #[arg(long)]
        context: Option<String>,

        /// JSON payload handed to the connectivity tasks
        #[arg(long)]
        payload: Option<String>,

        /// Artifact file (overrides the config file)
        #[arg(short, long, env = "BRANCHFLOW_ARTIFACT")]
        artifact: Option<PathBuf>,

        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pin every timestamp to this instant (YYYY-MM-DD HH:MM:SS)
        #[arg(long)]
        at: Option<String>,
    },

    /// Run the reference workflow scenarios
    Demo {
        /// Directory receiving the demo artifacts
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.log_json, level);

    match cli.command {
        Commands::Grade { scores, json } => cmd_grade(&scores, json),
        Commands::Run {
            condition,
            context,
            payload,
            artifact,
            config,
            at,
        } => cmd_run(
            condition,
            context.as_deref(),
            payload.as_deref(),
            artifact,
            config.as_deref(),
            at.as_deref(),
        ),
        Commands::Demo { dir } => cmd_demo(&dir),
    }
}

fn cmd_grade(scores: &[String], json: bool) -> Result<()> {
    let set: ScoreSet = if scores.is_empty() {
        let line = prompt("Enter scores separated by commas or spaces: ")?;
        parse_scores(&line)?
    } else {
        parse_scores(&scores.join(" "))?
    };

    let result = set.evaluate()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Average: {:.2}", result.average);
        println!("Grade: {}", result.grade);
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read scores from stdin")?;
    Ok(line)
}

fn cmd_run(
    condition: bool,
    context: Option<&str>,
    payload: Option<&str>,
    artifact: Option<PathBuf>,
    config_path: Option<&Path>,
    at: Option<&str>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => WorkflowConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => WorkflowConfig::new(),
    };
    if let Some(path) = artifact {
        config = config.with_artifact_path(path);
    }

    let payload: Option<serde_json::Value> = payload
        .map(serde_json::from_str)
        .transpose()
        .context("--payload must be valid JSON")?;

    let mut runner = ConditionalWorkflowRunner::new(config);
    if let Some(at) = at {
        let clock = FixedClock::parse(at).with_context(|| format!("Invalid --at value '{at}'"))?;
        runner = runner.with_clock(Arc::new(clock));
    }

    let Some(outcome) = runner.run(condition, context, payload.as_ref()) else {
        bail!(
            "Workflow aborted: could not create artifact {}",
            runner.artifact_path().display()
        );
    };

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn cmd_demo(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create demo directory {}", dir.display()))?;

    println!("=== Detailed If-Else Handler Demo ===\n");
    let results = demo::run_all(dir, &WorkflowConfig::new(), Arc::new(LoggingEventSink::info()));

    let mut failed = 0;
    for (i, (scenario, outcome)) in results.iter().enumerate() {
        println!("Example {}: {}", i + 1, scenario.title);
        match outcome {
            Some(outcome) => println!(
                "  {} -> {} ({} tasks)",
                outcome.condition.evaluation,
                outcome.overall_status,
                outcome.tasks.len()
            ),
            None => {
                failed += 1;
                println!("  aborted: artifact unavailable");
            }
        }
    }

    println!("\nDemo completed! Check the output files for detailed logs.");
    for (scenario, _) in &results {
        println!("- {}", dir.join(scenario.file_name).display());
    }

    if failed > 0 {
        bail!("{failed} demo scenario(s) aborted");
    }
    Ok(())
}
