use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use mec_model::{ConditionDetail, EligibilityChart};
use mec_session::{MIN_QUERY_LEN, SelectionSet, filter_conditions};
use mec_standards::{SUMMARY_CHART_PDF_URL, load_chart, load_default_chart, summarize};

use mec_cli::render::{categories_table, conditions_table, detail_table};

use crate::cli::{ChartArgs, Cli, SearchArgs, ShowArgs};

/// Load the chart per CLI flags: `--chart-file`, then the environment
/// override, then the bundled asset.
pub fn load_chart_for(cli: &Cli) -> Result<EligibilityChart> {
    let (chart, source) = match &cli.chart_file {
        Some(path) => (
            load_chart(path).context("load chart file")?,
            path.display().to_string(),
        ),
        None => (
            load_default_chart().context("load bundled chart")?,
            "bundled summary chart".to_string(),
        ),
    };
    let summary = summarize(&chart, source);
    debug!(
        source = %summary.source,
        conditions = summary.condition_count,
        methods = summary.method_count,
        "chart loaded"
    );
    Ok(chart)
}

pub fn run_conditions(chart: &EligibilityChart) {
    println!("{}", conditions_table(chart));
    println!("{} conditions", chart.len());
}

pub fn run_search(chart: &EligibilityChart, args: &SearchArgs) {
    if args.query.chars().count() < MIN_QUERY_LEN {
        println!("Type at least {MIN_QUERY_LEN} characters to search");
        return;
    }
    let excluded: SelectionSet = args.exclude.iter().cloned().collect();
    let results = filter_conditions(&args.query, chart, &excluded);
    if results.is_empty() {
        println!("No conditions match \"{}\"", args.query);
        return;
    }
    for name in &results {
        println!("{name}");
    }
}

pub fn run_show(chart: &EligibilityChart, args: &ShowArgs) {
    for name in &args.conditions {
        match ConditionDetail::lookup(chart, name) {
            Some(detail) => {
                println!("{}", detail.condition);
                println!("{}", detail_table(&detail));
            }
            None => {
                warn!(condition = %name, "condition not found in chart");
                println!("\"{name}\" is not in the summary chart");
            }
        }
    }
}

pub fn run_categories() {
    println!("{}", categories_table());
    println!("source: US Medical Eligibility Criteria for Contraceptive Use");
}

/// Open the canonical summary chart PDF. Failures are logged and retried
/// with a detached open before giving up.
pub fn run_chart(args: &ChartArgs) -> Result<()> {
    let url = SUMMARY_CHART_PDF_URL;
    if args.print_only {
        println!("{url}");
        return Ok(());
    }
    info!(url, "opening summary chart");
    if let Err(error) = open::that(url) {
        warn!(%error, "failed to open summary chart, retrying detached");
        open::that_detached(url).with_context(|| format!("open summary chart: {url}"))?;
    }
    Ok(())
}
