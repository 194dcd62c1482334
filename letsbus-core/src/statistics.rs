//! Bus delay statistics
//!
//! A line's schedule comes from a GTFS `stop_times.txt` file. Observed
//! arrivals are reported against it and the resulting delays (in minutes,
//! negative when early) are averaged per station or per day.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::error::{LetsbusError, Result};

/// Minutes since midnight. Hours may run past 23 for trips crossing midnight.
pub fn minutes_of_day(hours: u32, minutes: u32) -> i64 {
    i64::from(minutes) + i64::from(hours) * 60
}

/// Parse `HH:MM` or `HH:MM:SS` into `(hours, minutes)`.
pub fn parse_clock(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.trim().split(':');
    let hours = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    if minutes > 59 {
        return None;
    }
    Some((hours, minutes))
}

/// Scheduled arrival time per station for one line
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    stops: HashMap<String, (u32, u32)>,
}

impl Schedule {
    /// Build a schedule from `stop_times.txt` content.
    ///
    /// Columns: `trip_id,arrival_time,departure_time,stop_id,...`. Only the
    /// first contiguous block of rows for `line_id` is read; rows are grouped
    /// by trip in GTFS exports.
    pub fn from_stop_times(line_id: &str, content: &str) -> Result<Self> {
        let mut stops = HashMap::new();
        let mut in_block = false;

        for (index, raw) in content.lines().enumerate() {
            let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
            if index == 0 && fields.first() == Some(&"trip_id") {
                continue;
            }

            if fields.first() == Some(&line_id) {
                in_block = true;
                if fields.len() < 4 {
                    return Err(LetsbusError::malformed_row(index + 1, "expected at least 4 columns"));
                }
                let time = parse_clock(fields[1]).ok_or_else(|| {
                    LetsbusError::malformed_row(index + 1, format!("bad arrival time '{}'", fields[1]))
                })?;
                stops.insert(fields[3].to_owned(), time);
            } else if in_block {
                break;
            }
        }

        tracing::debug!(line = line_id, stops = stops.len(), "schedule loaded");
        Ok(Self { stops })
    }

    pub fn insert(&mut self, station: impl Into<String>, time: (u32, u32)) {
        self.stops.insert(station.into(), time);
    }

    pub fn scheduled(&self, station: &str) -> Option<(u32, u32)> {
        self.stops.get(station).copied()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// One observed arrival, as read from an arrivals file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub station: String,
    pub time: (u32, u32),
    pub date: NaiveDate,
}

/// Parse `station,HH:MM,YYYY-MM-DD` rows. Blank lines and `#` comments are skipped.
pub fn parse_arrivals(content: &str) -> Result<Vec<Arrival>> {
    let mut arrivals = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [station, time, date] = fields.as_slice() else {
            return Err(LetsbusError::malformed_row(index + 1, "expected station,time,date"));
        };

        let time = parse_clock(time)
            .ok_or_else(|| LetsbusError::malformed_row(index + 1, format!("bad time '{}'", time)))?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| LetsbusError::malformed_row(index + 1, format!("bad date '{}': {}", date, e)))?;

        arrivals.push(Arrival {
            station: (*station).to_owned(),
            time,
            date,
        });
    }

    Ok(arrivals)
}

/// Delay history for one bus line
#[derive(Debug, Clone)]
pub struct BusLine {
    line_id: String,
    schedule: Schedule,
    delays: BTreeMap<(String, NaiveDate), i64>,
}

impl BusLine {
    pub fn new(line_id: impl Into<String>, schedule: Schedule) -> Self {
        Self {
            line_id: line_id.into(),
            schedule,
            delays: BTreeMap::new(),
        }
    }

    pub fn line_id(&self) -> &str {
        &self.line_id
    }

    /// Record an arrival and return its delay in minutes.
    ///
    /// A second report for the same station and date replaces the first.
    pub fn report(&mut self, station: &str, arrival: (u32, u32), date: NaiveDate) -> Result<i64> {
        let (hours, minutes) =
            self.schedule
                .scheduled(station)
                .ok_or_else(|| LetsbusError::UnknownStation {
                    line: self.line_id.clone(),
                    station: station.to_owned(),
                })?;

        let delay = minutes_of_day(arrival.0, arrival.1) - minutes_of_day(hours, minutes);
        self.delays.insert((station.to_owned(), date), delay);
        Ok(delay)
    }

    pub fn delay(&self, station: &str, date: NaiveDate) -> Option<i64> {
        self.delays.get(&(station.to_owned(), date)).copied()
    }

    /// Average delay at a station over `from..=to`. Days without a report are skipped.
    pub fn average_by_station(&self, station: &str, from: NaiveDate, to: NaiveDate) -> i64 {
        round_half_even(mean(&self.station_delays(station, from, to)))
    }

    /// Average delay across all stations on one day.
    pub fn average_by_day(&self, day: NaiveDate) -> i64 {
        round_half_even(mean(&self.day_delays(day)))
    }

    /// Population standard deviation of delay at a station over `from..=to`.
    pub fn std_dev_by_station(&self, station: &str, from: NaiveDate, to: NaiveDate) -> i64 {
        round_half_even(population_std_dev(&self.station_delays(station, from, to)))
    }

    /// Population standard deviation of delay across all stations on one day.
    pub fn std_dev_by_day(&self, day: NaiveDate) -> i64 {
        round_half_even(population_std_dev(&self.day_delays(day)))
    }

    fn station_delays(&self, station: &str, from: NaiveDate, to: NaiveDate) -> Vec<i64> {
        from.iter_days()
            .take_while(|day| *day <= to)
            .filter_map(|day| self.delay(station, day))
            .collect()
    }

    fn day_delays(&self, day: NaiveDate) -> Vec<i64> {
        self.delays
            .iter()
            .filter(|((_, date), _)| *date == day)
            .map(|(_, delay)| *delay)
            .collect()
    }
}

fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

fn population_std_dev(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|v| (*v as f64 - avg).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}
