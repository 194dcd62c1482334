//! Bus incident reports

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// What went wrong with the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Bus is not following its line
    NotFollowingLine,
    /// Bus never showed up
    BusMissing,
    /// Bus was too full and didn't stop
    TooFullDidNotStop,
    /// Bus didn't stop for other reasons
    DidNotStop,
    /// Stop is canceled
    CanceledStop,
    /// Road work somewhere on the line
    RoadWork,
}

impl ReportKind {
    pub const ALL: [ReportKind; 6] = [
        ReportKind::NotFollowingLine,
        ReportKind::BusMissing,
        ReportKind::TooFullDidNotStop,
        ReportKind::DidNotStop,
        ReportKind::CanceledStop,
        ReportKind::RoadWork,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::NotFollowingLine => "not_following_line",
            ReportKind::BusMissing => "bus_missing",
            ReportKind::TooFullDidNotStop => "too_full_did_not_stop",
            ReportKind::DidNotStop => "did_not_stop",
            ReportKind::CanceledStop => "canceled_stop",
            ReportKind::RoadWork => "road_work",
        }
    }

    /// Human-readable label for prompts
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::NotFollowingLine => "Bus not following the line",
            ReportKind::BusMissing => "Bus missing",
            ReportKind::TooFullDidNotStop => "Bus too full, didn't stop",
            ReportKind::DidNotStop => "Bus didn't stop",
            ReportKind::CanceledStop => "Stop canceled",
            ReportKind::RoadWork => "Road work on the line",
        }
    }

    /// Long-running problems, as opposed to one-off incidents
    pub fn is_long_term(&self) -> bool {
        matches!(self, ReportKind::CanceledStop | ReportKind::RoadWork)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown report kind '{}'", s))
    }
}

/// A report ready to be submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReport {
    pub kind: ReportKind,
    pub line: u32,
    pub station: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

/// A stored report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub kind: ReportKind,
    pub line: u32,
    pub station: u32,
    #[serde(default)]
    pub direction: Option<String>,
    pub reported_at: DateTime<Utc>,
}

impl Report {
    /// How long a one-off incident stays relevant
    pub fn short_term_window() -> Duration {
        Duration::hours(2)
    }

    /// Long-term problems stay current; incidents expire after the window.
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.kind.is_long_term() || now - self.reported_at <= Self::short_term_window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.as_str().parse::<ReportKind>().unwrap(), kind);
        }
        assert!("late".parse::<ReportKind>().is_err());
    }

    #[test]
    fn kind_wire_form_is_snake_case() {
        let json = serde_json::to_string(&ReportKind::TooFullDidNotStop).unwrap();
        assert_eq!(json, r#""too_full_did_not_stop""#);
    }

    #[test]
    fn long_term_kinds() {
        assert!(ReportKind::RoadWork.is_long_term());
        assert!(ReportKind::CanceledStop.is_long_term());
        assert!(!ReportKind::BusMissing.is_long_term());
    }

    fn stored(kind: ReportKind, reported_at: DateTime<Utc>) -> Report {
        Report {
            id: 1,
            kind,
            line: 12,
            station: 3,
            direction: None,
            reported_at,
        }
    }

    #[test]
    fn incidents_expire_after_two_hours() {
        let now = Utc::now();
        assert!(stored(ReportKind::BusMissing, now - Duration::minutes(119)).is_current(now));
        assert!(stored(ReportKind::BusMissing, now - Duration::hours(2)).is_current(now));
        assert!(!stored(ReportKind::BusMissing, now - Duration::minutes(121)).is_current(now));
    }

    #[test]
    fn long_term_problems_never_expire() {
        let now = Utc::now();
        let old = now - Duration::days(30);
        assert!(stored(ReportKind::RoadWork, old).is_current(now));
        assert!(stored(ReportKind::CanceledStop, old).is_current(now));
    }

    #[test]
    fn direction_is_optional_on_the_wire() {
        let report: NewReport =
            serde_json::from_str(r#"{"kind":"bus_missing","line":12,"station":3}"#).unwrap();
        assert_eq!(report.direction, None);
        assert!(!serde_json::to_string(&report).unwrap().contains("direction"));
    }
}
