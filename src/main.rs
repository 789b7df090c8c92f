use clap::{Parser, Subcommand};

use slip::analysis::{analyze, summarize, AnalysisOptions, TaskAssessment};
use slip::config::Config;
use slip::decision::available_scenarios;
use slip::pipeline::{build_tables, TableParams};
use slip::risk::RiskLevel;
use slip::{slog, Result};

/// Slip - project delay risk simulator and decision support
#[derive(Parser, Debug)]
#[command(name = "slip")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    SLIP_DEBUG=1    Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.slip/slip.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Simulate a project and assess every task's delay risk
    Analyze {
        /// Number of tasks to generate (overrides config)
        #[arg(long)]
        num_tasks: Option<usize>,

        /// Number of resources to generate (overrides config)
        #[arg(long)]
        num_resources: Option<usize>,

        /// Simulation seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Stop the simulation after this many days (overrides config)
        #[arg(long)]
        max_days: Option<u32>,

        /// Estimate a what-if scenario on top of the assessment
        #[arg(long)]
        what_if: Option<String>,

        /// Show scoring detail (weights, thresholds, rule scores) and enable debug logging
        #[arg(short = 'v', long)]
        verbose: bool,

        /// Emit JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Simulate a project and print the resulting tables
    Simulate {
        /// Number of tasks to generate (overrides config)
        #[arg(long)]
        num_tasks: Option<usize>,

        /// Number of resources to generate (overrides config)
        #[arg(long)]
        num_resources: Option<usize>,

        /// Simulation seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Stop the simulation after this many days (overrides config)
        #[arg(long)]
        max_days: Option<u32>,

        /// Emit JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },

    /// List available what-if scenarios
    Scenarios,
}

/// Debug logging comes from the global flag, or from analyze --verbose.
fn debug_enabled(cli: &Cli) -> bool {
    cli.debug || matches!(cli.command, Command::Analyze { verbose: true, .. })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let debug = debug_enabled(&cli);
    slip::log::init_with_debug(debug);
    if debug {
        slog!("Slip starting (debug mode enabled)");
    } else {
        slog!("Slip starting");
    }

    match cli.command {
        Command::Analyze {
            num_tasks,
            num_resources,
            seed,
            max_days,
            what_if,
            verbose,
            json,
        } => run_analyze(num_tasks, num_resources, seed, max_days, what_if, verbose, json),
        Command::Simulate {
            num_tasks,
            num_resources,
            seed,
            max_days,
            json,
        } => run_simulate(num_tasks, num_resources, seed, max_days, json),
        Command::Scenarios => run_scenarios(),
    }
}

/// Config values overridden by whichever CLI flags were given.
fn merged_params(
    config: &Config,
    num_tasks: Option<usize>,
    num_resources: Option<usize>,
    seed: Option<u64>,
    max_days: Option<u32>,
) -> TableParams {
    let mut params = config.table_params();
    if let Some(n) = num_tasks {
        params.num_tasks = n;
    }
    if let Some(n) = num_resources {
        params.num_resources = n;
    }
    if let Some(s) = seed {
        params.seed = s;
    }
    if let Some(d) = max_days {
        params.max_days = d;
    }
    params
}

fn run_analyze(
    num_tasks: Option<usize>,
    num_resources: Option<usize>,
    seed: Option<u64>,
    max_days: Option<u32>,
    what_if: Option<String>,
    verbose: bool,
    json: bool,
) -> Result<()> {
    slog!(
        "Analyze command: num_tasks={:?}, seed={:?}, what_if={:?}, json={}",
        num_tasks,
        seed,
        what_if,
        json
    );

    let config = Config::load()?;
    let options = AnalysisOptions {
        tables: merged_params(&config, num_tasks, num_resources, seed, max_days),
        what_if,
        weights: config.risk_weights,
        thresholds: config.risk_thresholds,
    };
    let assessments = analyze(&options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessments)?);
        return Ok(());
    }

    let summary = summarize(&assessments);
    println!();
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║                    Delay Risk Analysis                     ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Tasks analyzed:   {}", summary.total_tasks);
    println!("  High risk:        \x1b[31m{}\x1b[0m", summary.high_risk);
    println!("  Medium risk:      \x1b[33m{}\x1b[0m", summary.medium_risk);
    println!("  Low risk:         \x1b[32m{}\x1b[0m", summary.low_risk);
    println!("  Mean p(delay):    {:.3}", summary.mean_delay_probability);
    if verbose {
        println!(
            "  Weights:          rule {} / ml {}",
            options.weights.rule_weight, options.weights.ml_weight
        );
        println!(
            "  Thresholds:       high {} / medium {}",
            options.thresholds.high, options.thresholds.medium
        );
    }
    println!();

    for assessment in &assessments {
        print_assessment(assessment, verbose);
    }

    Ok(())
}

fn print_assessment(assessment: &TaskAssessment, verbose: bool) {
    println!("─────────────────────────────────────────────────────────────");
    println!(
        "  {:<6} {}  score {:>3}  p(delay) {:.3}",
        assessment.task_id,
        format_level(assessment.risk_level),
        assessment.risk_score,
        assessment.delay_probability
    );
    if verbose {
        println!("    rule score {:>3}", assessment.rule_score);
    }
    for reason in &assessment.reasons {
        println!("    - {}", reason);
    }
    for action in &assessment.recommended_actions {
        println!("    > {}", action);
    }
    if let Some(impact) = &assessment.what_if_impact {
        println!(
            "    what-if {}: new p(delay) {:.3}, reduction {:.3}",
            impact.scenario, impact.new_delay_probability, impact.probability_reduction
        );
    }
    println!();
}

/// Format a risk level with color codes for terminal.
fn format_level(level: RiskLevel) -> String {
    match level {
        RiskLevel::High => format!("\x1b[31m{:<6}\x1b[0m", "HIGH"),
        RiskLevel::Medium => format!("\x1b[33m{:<6}\x1b[0m", "MEDIUM"),
        RiskLevel::Low => format!("\x1b[32m{:<6}\x1b[0m", "LOW"),
    }
}

fn run_simulate(
    num_tasks: Option<usize>,
    num_resources: Option<usize>,
    seed: Option<u64>,
    max_days: Option<u32>,
    json: bool,
) -> Result<()> {
    slog!(
        "Simulate command: num_tasks={:?}, num_resources={:?}, seed={:?}, json={}",
        num_tasks,
        num_resources,
        seed,
        json
    );

    let config = Config::load()?;
    let params = merged_params(&config, num_tasks, num_resources, seed, max_days);
    let tables = build_tables(&params)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(());
    }

    let completed = tables.tasks.iter().filter(|t| t.actual_end >= 0).count();
    let delayed = tables.tasks.iter().filter(|t| t.delay == 1).count();
    let delayed_logs = tables.events.iter().filter(|e| e.is_delayed_log).count();

    println!();
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║                     Simulation Results                     ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Seed:       {}", params.seed);
    println!("  Tasks:      {} ({} completed, {} delayed)", tables.tasks.len(), completed, delayed);
    println!("  Events:     {} visible ({} observed late)", tables.events.len(), delayed_logs);
    println!();
    println!("  ID     STATUS       PROGRESS  DELAY");
    for row in tables.tasks.iter().take(20) {
        println!(
            "  {:<6} {:<12} {:>8.2} {:>6}",
            row.task_id, row.status, row.progress, row.delay
        );
    }
    if tables.tasks.len() > 20 {
        println!("  ... and {} more", tables.tasks.len() - 20);
    }
    println!();

    Ok(())
}

fn run_scenarios() -> Result<()> {
    slog!("Scenarios command");
    println!("Available what-if scenarios:");
    for (name, description) in available_scenarios() {
        println!("  {:<22} {}", name, description);
    }
    Ok(())
}
