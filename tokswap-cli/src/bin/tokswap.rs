use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokswap_cli::{
    error::{CliError, CliResult},
    report::{OutputFormat, render_findings, render_presets, render_rewrite},
    settings::Settings,
};
use tokswap_core::{Rule, lint, preview, rewrite_to};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(
        short,
        long,
        default_value = "tokswap.json",
        env = "TOKSWAP_CONFIG",
        global = true
    )]
    config: PathBuf,

    /// Enable debug mode
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a ruleset to a file
    Rewrite(RewriteArgs),

    /// Report rules that overlap with earlier rules
    Lint(RulesetArgs),

    /// List built-in presets
    Presets,
}

#[derive(Args)]
struct RulesetArgs {
    /// Built-in preset to use
    #[arg(short, long)]
    preset: Option<String>,

    /// Inline rule in PATTERN=>REPLACEMENT form (repeatable, applied in order)
    #[arg(short, long = "rule")]
    rules: Vec<Rule>,
}

#[derive(Args)]
struct RewriteArgs {
    /// File to rewrite
    source: Option<PathBuf>,

    /// Write the result here instead of over the source
    #[arg(short, long)]
    dest: Option<PathBuf>,

    #[command(flatten)]
    ruleset: RulesetArgs,

    /// Print the rewritten text to stdout instead of writing it
    #[arg(long, conflicts_with = "dry_run")]
    stdout: bool,

    /// Show what would be replaced without writing
    #[arg(long)]
    dry_run: bool,
}

fn handle_rewrite_command(args: &RewriteArgs, cli: &Cli) -> CliResult<()> {
    let settings = Settings::initialize(
        &cli.config,
        args.source.clone(),
        args.dest.clone(),
        args.ruleset.preset.clone(),
        args.ruleset.rules.clone(),
    )?;
    let ruleset = settings.ruleset()?;
    debug!("settings: {:?}", settings);

    for finding in lint(&ruleset) {
        warn!("{}", finding);
    }

    if args.stdout || args.dry_run {
        let (output, result) = preview(settings.source(), settings.destination(), &ruleset)?;
        if args.stdout {
            print!("{}", output);
        } else {
            println!("{}", render_rewrite(&result, cli.output, true)?);
        }
        return Ok(());
    }

    let result = rewrite_to(settings.source(), settings.destination(), &ruleset)?;
    info!(
        "Applied {} rules to {}",
        result.rules_applied,
        result.source.display()
    );
    println!("{}", render_rewrite(&result, cli.output, cli.verbose)?);
    Ok(())
}

fn handle_lint_command(args: &RulesetArgs, cli: &Cli) -> CliResult<()> {
    let settings = Settings::initialize(
        &cli.config,
        None,
        None,
        args.preset.clone(),
        args.rules.clone(),
    )?;
    let findings = lint(&settings.ruleset()?);
    println!("{}", render_findings(&findings, cli.output)?);

    if findings.is_empty() {
        Ok(())
    } else {
        Err(CliError::LintFindings(findings.len()))
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Rewrite(args) => handle_rewrite_command(args, cli),
        Commands::Lint(args) => handle_lint_command(args, cli),
        Commands::Presets => {
            println!("{}", render_presets(cli.output)?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
