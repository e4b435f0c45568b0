use std::env;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use log::{debug, info};

use crate::core::cli::Args;
use crate::core::logging::init_logging;
use crate::core::{aggregate, buckets, events, report, runner, status};
use crate::types::config::{CliOverrides, config, init_with_overrides};
use crate::types::{AppResult, Bucket};

/// Run the whole pipeline: test run, event parsing, aggregation, status
/// resolution, bucketing, then rewriting the readme and badge files.
pub fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        config: args.config.clone(),
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
        test_cmd: args.test_cmd.clone(),
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides);

    // Initialize logging after config so level/color are applied
    init_logging();

    let cwd = env::current_dir()?;
    debug!("Current working directory: {}", cwd.display());

    // A transport failure degrades to an empty stream: every year reports
    // as not started rather than aborting the run.
    let output = runner::capture_test_output(config().test().cmd()).unwrap_or_default();
    let cases = events::parse_events(&output);
    debug!("Parsed {} case results", cases.len());

    let table = aggregate::OutcomeTable::from_cases(cases);
    let today = Local::now().date_naive();
    let year_stats = status::resolve(&table, today, config().start_year(), config().start_day());

    let stars = buckets::star_count(&year_stats);
    let grouped = buckets::bucketize(year_stats);

    for bucket in [Bucket::Completed, Bucket::InProgress, Bucket::NotStarted] {
        info!("Years {bucket}: {:?}", grouped.years(bucket));
    }
    info!("Total stars: {stars}");

    let report_text = report::render_report(&grouped);
    report::update_readme(Path::new(config().readme()), &report_text, stars)?;
    report::update_badges(&config().badges(), stars)?;

    Ok(())
}
