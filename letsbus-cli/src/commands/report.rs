//! Bus report command
//!
//! With `--kind`, `--line` and `--station` the flow runs straight through.
//! Otherwise, on a terminal, the wizard walks the same flow one prompt at a time.

use anyhow::{bail, Context, Result};
use clap::Parser;
use letsbus_client::ReportClient;
use letsbus_core::{FlowEvent, LetsbusConfig, NewReport, ReportFlow, ReportKind};

use crate::ui::Spinner;
use crate::wizard;

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// What happened (e.g. bus_missing, too_full_did_not_stop, road_work)
    #[arg(long)]
    pub kind: Option<ReportKind>,

    /// Line number
    #[arg(long)]
    pub line: Option<u32>,

    /// Station number
    #[arg(long)]
    pub station: Option<u32>,

    /// Direction of travel
    #[arg(long)]
    pub direction: Option<String>,

    /// Reports endpoint (default: from config, http://localhost:5000/reports)
    #[arg(long, env = "LETSBUS_REPORTS_URL")]
    pub endpoint: Option<String>,

    /// Print the report instead of submitting it
    #[arg(long)]
    pub dry_run: bool,
}

impl ReportArgs {
    fn is_complete(&self) -> bool {
        self.kind.is_some() && self.line.is_some() && self.station.is_some()
    }
}

pub async fn run_report(args: ReportArgs, config: &LetsbusConfig) -> Result<()> {
    let client = ReportClient::new(
        args.endpoint
            .clone()
            .unwrap_or_else(|| config.reports.endpoint.clone()),
    );

    let report = if args.is_complete() {
        report_from_flags(&args)?
    } else if wizard::can_use_wizard() {
        match wizard::wizard_report(&client).await? {
            Some(report) => report,
            None => return Ok(()),
        }
    } else {
        bail!("Missing --kind, --line or --station (and no terminal for the wizard)");
    };

    if args.dry_run {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
        return Ok(());
    }

    let spinner = Spinner::start("Submitting report...");
    let result = client.submit(&report).await;
    drop(spinner);

    let stored = result.context("Failed to submit report")?;
    println!(
        "Report #{} stored: {} on line {} at station {}",
        stored.id,
        stored.kind.label(),
        stored.line,
        stored.station
    );
    Ok(())
}

/// Drive the flow with the values from the command line.
fn report_from_flags(args: &ReportArgs) -> Result<NewReport> {
    let (Some(kind), Some(line), Some(station)) = (args.kind, args.line, args.station) else {
        bail!("--kind, --line and --station are all required");
    };

    let mut flow = ReportFlow::new();
    flow.apply(FlowEvent::Begin { kind })?;
    flow.apply(FlowEvent::LineEntered {
        line,
        direction: args.direction.clone(),
    })?;
    flow.apply(FlowEvent::StationEntered { station })?;
    Ok(flow.submit()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: u32) -> ReportArgs {
        ReportArgs {
            kind: Some(ReportKind::DidNotStop),
            line: Some(line),
            station: Some(4),
            direction: None,
            endpoint: None,
            dry_run: true,
        }
    }

    #[test]
    fn flags_build_report() {
        let report = report_from_flags(&args(9)).unwrap();
        assert_eq!(report.kind, ReportKind::DidNotStop);
        assert_eq!(report.line, 9);
        assert_eq!(report.station, 4);
    }

    #[test]
    fn zero_line_rejected() {
        assert!(report_from_flags(&args(0)).is_err());
    }
}
