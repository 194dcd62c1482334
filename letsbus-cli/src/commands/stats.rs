//! Delay statistics command

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use letsbus_core::statistics::{parse_arrivals, Arrival};
use letsbus_core::{BusLine, LetsbusError, Schedule};

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// GTFS stop_times.txt
    #[arg(long, value_name = "PATH", default_value = "stop_times.txt")]
    pub stop_times: PathBuf,

    /// Line (trip) id to analyse
    #[arg(long)]
    pub line: String,

    /// Observed arrivals, one `station,HH:MM,YYYY-MM-DD` per row
    #[arg(long, value_name = "PATH")]
    pub arrivals: PathBuf,

    /// Summarise one station over --from..=--to instead of per day
    #[arg(long)]
    pub station: Option<String>,

    /// First day for --station (default: earliest arrival)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day for --station (default: latest arrival)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

pub fn run_stats(args: StatsArgs) -> Result<()> {
    let stop_times = std::fs::read_to_string(&args.stop_times)
        .with_context(|| format!("Failed to read {}", args.stop_times.display()))?;
    let schedule = Schedule::from_stop_times(&args.line, &stop_times)
        .context("Failed to parse stop times")?;
    if schedule.is_empty() {
        tracing::warn!(line = %args.line, "line has no scheduled stops");
    }

    let content = std::fs::read_to_string(&args.arrivals)
        .with_context(|| format!("Failed to read {}", args.arrivals.display()))?;
    let arrivals = parse_arrivals(&content).context("Failed to parse arrivals")?;

    let line = record_arrivals(BusLine::new(&args.line, schedule), &arrivals)?;
    let days: BTreeSet<NaiveDate> = arrivals.iter().map(|a| a.date).collect();

    match &args.station {
        Some(station) => {
            let (Some(first), Some(last)) = (days.first().copied(), days.last().copied()) else {
                println!("No arrivals recorded");
                return Ok(());
            };
            let from = args.from.unwrap_or(first);
            let to = args.to.unwrap_or(last);
            println!(
                "Line {} station {} ({} to {}): average delay {} min, std dev {} min",
                line.line_id(),
                station,
                from,
                to,
                line.average_by_station(station, from, to),
                line.std_dev_by_station(station, from, to)
            );
        }
        None => {
            println!("{:<12} {:>8} {:>8}", "day", "avg", "std");
            for day in days {
                println!(
                    "{:<12} {:>8} {:>8}",
                    day.to_string(),
                    line.average_by_day(day),
                    line.std_dev_by_day(day)
                );
            }
        }
    }
    Ok(())
}

/// Report every arrival; stations off the schedule are skipped with a warning.
fn record_arrivals(mut line: BusLine, arrivals: &[Arrival]) -> Result<BusLine> {
    for arrival in arrivals {
        match line.report(&arrival.station, arrival.time, arrival.date) {
            Ok(delay) => tracing::debug!(station = %arrival.station, delay, "arrival recorded"),
            Err(LetsbusError::UnknownStation { station, .. }) => {
                tracing::warn!(%station, "station not on schedule, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(line)
}
