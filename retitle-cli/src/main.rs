use anyhow::{Context, Result};
use clap::Parser;
use retitle_core::{
    apply_operation, plan_operation, GitMover, OutputFormat, OutputFormatter, RunOptions,
    SummaryStyle,
};
use std::io::{self, IsTerminal};
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let use_color = !cli.no_color && io::stdout().is_terminal();

    match run(&cli, use_color) {
        Ok(true) => process::exit(0),
        // Some entries were skipped or failed to move
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    }
}

/// Logs go to stderr so stdout stays clean for `--output json`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Plan, and apply when asked. Returns whether every entry went through
/// without an error.
fn run(cli: &Cli, use_color: bool) -> Result<bool> {
    let root = cli
        .path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path {}", cli.path.display()))?;
    let options = RunOptions::new(root).with_apply(cli.apply);

    let (plan, plan_result) = plan_operation(&options)?;
    tracing::debug!(mapping = %plan_result.mapping_file, "mapping written");

    let format = OutputFormat::from(cli.output);
    let style = SummaryStyle {
        preview: cli.preview.into(),
        use_color,
    };

    if options.is_dry_run() || plan.is_empty() {
        emit(&plan_result.format(format, style));
        return Ok(plan_result.is_success());
    }

    if format == OutputFormat::Summary {
        emit(&plan_result.format_summary(style));
    }

    let mut mover = GitMover::new(options.root());
    let apply_result = apply_operation(&plan, &mut mover);
    emit(&apply_result.format(format, style));

    Ok(apply_result.is_success())
}

/// Print formatted output with exactly one trailing newline.
fn emit(output: &str) {
    println!("{}", output.trim_end_matches('\n'));
}
