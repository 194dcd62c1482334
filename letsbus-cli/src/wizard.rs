//! Report wizard - interactive walk through the report flow
//!
//! Each prompt corresponds to one flow state; bad input re-prompts instead of
//! advancing.
//!
//! ```text
//! $ letsbus report
//!
//! Let's Bus
//!
//! ? What would you like to do? Add report
//! ? What happened? Bus missing
//! ? Line number: 12
//! ? Direction (optional): north
//! ? Station number: 3
//! ? Submit report? Yes
//! ```

use std::fmt;
use std::io::IsTerminal;

use anyhow::{Context, Result};
use inquire::{Confirm, CustomType, Select, Text};
use letsbus_client::views::BusHome;
use letsbus_client::ReportClient;
use chrono::Utc;
use letsbus_core::{FlowEvent, NewReport, Report, ReportFlow, ReportKind};

/// A report kind shown by its label
#[derive(Debug, Clone, Copy)]
struct KindChoice(ReportKind);

impl fmt::Display for KindChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.label())
    }
}

/// Interactive TTY on both ends
pub fn can_use_wizard() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Run the bus home screen. Returns the report to submit, or None if the
/// user only wanted information or declined to submit.
pub async fn wizard_report(client: &ReportClient) -> Result<Option<NewReport>> {
    println!("\n{}\n", BusHome::TITLE);

    let choice = Select::new("What would you like to do?", BusHome::BUTTONS.to_vec())
        .prompt()
        .context("Failed to get choice")?;

    if choice == BusHome::BUTTONS[1] {
        show_recent_reports(client).await;
        return Ok(None);
    }

    let mut flow = ReportFlow::new();

    let KindChoice(kind) = Select::new("What happened?", ReportKind::ALL.map(KindChoice).to_vec())
        .prompt()
        .context("Failed to get report kind")?;
    flow.apply(FlowEvent::Begin { kind })?;

    while flow.shows_line_input() {
        let line = CustomType::<u32>::new("Line number:")
            .with_error_message("Please enter a whole number")
            .prompt()
            .context("Failed to get line number")?;
        let direction = Text::new("Direction (optional):")
            .prompt_skippable()
            .context("Failed to get direction")?;

        if let Err(e) = flow.apply(FlowEvent::LineEntered { line, direction }) {
            println!("⚠️  {}", e);
        }
    }

    while flow.shows_station_input() {
        let station = CustomType::<u32>::new("Station number:")
            .with_error_message("Please enter a whole number")
            .prompt()
            .context("Failed to get station number")?;

        if let Err(e) = flow.apply(FlowEvent::StationEntered { station }) {
            println!("⚠️  {}", e);
        }
    }

    let confirmed = Confirm::new("Submit report?")
        .with_default(true)
        .prompt()
        .context("Failed to get confirmation")?;
    if !confirmed {
        println!("Report discarded");
        return Ok(None);
    }

    Ok(Some(flow.submit()?))
}

async fn show_recent_reports(client: &ReportClient) {
    match client.list().await {
        Ok(reports) => {
            let now = Utc::now();
            let current: Vec<&Report> = reports.iter().filter(|r| r.is_current(now)).collect();
            if current.is_empty() {
                println!("No current reports");
            }
            for report in current.into_iter().take(10) {
                println!(
                    "{}  line {:>4}  station {:>5}  {}",
                    report.reported_at.format("%Y-%m-%d %H:%M"),
                    report.line,
                    report.station,
                    report.kind.label()
                );
            }
        }
        Err(e) => tracing::error!(error = %e, "There was an error fetching reports"),
    }
}
