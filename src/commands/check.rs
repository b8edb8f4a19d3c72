use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::MigrationChecker;
use crate::cli::{CheckArgs, Cli};
use crate::config::{CheckConfig, validate_config_semantics};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, ReportFormatter, ScanProgress,
    TextFormatter,
};
use crate::runner::{RunReport, ValidationRunner};
use crate::scanner::{MigrationScanner, SuffixFilter};
use crate::syntax::PhpParser;
use crate::{EXIT_FAILURE, Result, RollbackGuardError};

use super::load_config;

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_FAILURE
        }
    }
}

/// Runs the check command and returns its exit code.
///
/// # Errors
/// Returns an error for configuration problems or when the report cannot be written.
/// Migration failures are not errors; they produce a non-zero exit code.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.display(), "using configuration file");
    }

    let mut config = loaded.config;
    apply_cli_overrides(&mut config.check, args);
    validate_config_semantics(&config)?;
    let check = &config.check;

    let jobs = resolve_jobs(args.jobs, cli.color.into());
    let runner = build_runner(check, jobs)?.with_progress(ScanProgress::new(cli.quiet));
    let report = run_with_jobs(&runner, &args.paths, jobs)?;

    let color_mode = if args.output.is_some() {
        ColorMode::Never
    } else {
        cli.color.into()
    };
    let output = format_report(&report, args.format, color_mode, cli.verbose, check.show_example)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(report.exit_code())
}

fn apply_cli_overrides(check: &mut CheckConfig, args: &CheckArgs) {
    if let Some(method) = &args.method {
        check.method.clone_from(method);
    }
    if let Some(suffix) = &args.suffix {
        check.suffix.clone_from(suffix);
    }
    check.exclude.extend(args.exclude.iter().cloned());
    if args.no_example {
        check.show_example = false;
    }
}

/// `--jobs 0` falls back to the default pool.
fn resolve_jobs(jobs: Option<usize>, color: ColorMode) -> Option<usize> {
    match jobs {
        Some(0) => {
            ErrorOutput::new(color).print_warning(
                "--jobs 0 is not a thread count",
                Some("using one thread per core"),
            );
            None
        }
        other => other,
    }
}

/// Assemble a runner for the given settings.
///
/// # Errors
/// Returns an error if an exclude pattern is not a valid glob.
pub fn build_runner(
    check: &CheckConfig,
    jobs: Option<usize>,
) -> Result<ValidationRunner<PhpParser, SuffixFilter>> {
    let filter = SuffixFilter::new(&check.suffix, &check.exclude)?;
    let parallel = check.parallel && jobs != Some(1);

    Ok(ValidationRunner::new(
        MigrationScanner::new(filter),
        PhpParser::new(),
        MigrationChecker::new(&check.method),
    )
    .with_parallel(parallel))
}

fn run_with_jobs(
    runner: &ValidationRunner<PhpParser, SuffixFilter>,
    paths: &[PathBuf],
    jobs: Option<usize>,
) -> Result<RunReport> {
    match jobs {
        Some(threads) if threads > 1 => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| RollbackGuardError::Config(format!("cannot start {threads} threads: {e}")))?;
            Ok(pool.install(|| runner.run(paths)))
        }
        _ => Ok(runner.run(paths)),
    }
}

fn format_report(
    report: &RunReport,
    format: OutputFormat,
    color_mode: ColorMode,
    verbose: u8,
    show_example: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose)
            .with_example(show_example)
            .format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
