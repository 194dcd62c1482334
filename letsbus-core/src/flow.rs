//! Report disclosure flow
//!
//! The report screen reveals its inputs one at a time: pick what happened,
//! then the line number, then the station number, then the submit button.
//! Each screen is a named state and moves forward only on its own event.
//!
//! ```text
//! Initial --Begin--> AwaitingLineNumber --LineEntered--> AwaitingStationNumber
//!     --StationEntered--> ReadyToSubmit --Submit--> Submitted
//! ```

use crate::error::{LetsbusError, Result};
use crate::report::{NewReport, ReportKind};

/// Where the user is in the report screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Only the "Add report" button is visible
    #[default]
    Initial,
    /// Line number input is visible
    AwaitingLineNumber { kind: ReportKind },
    /// Station number input is visible
    AwaitingStationNumber {
        kind: ReportKind,
        line: u32,
        direction: Option<String>,
    },
    /// Submit button is visible
    ReadyToSubmit(NewReport),
    /// Report handed off for submission
    Submitted(NewReport),
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Initial => "initial",
            FlowState::AwaitingLineNumber { .. } => "awaiting line number",
            FlowState::AwaitingStationNumber { .. } => "awaiting station number",
            FlowState::ReadyToSubmit(_) => "ready to submit",
            FlowState::Submitted(_) => "submitted",
        }
    }
}

/// User actions on the report screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    Begin { kind: ReportKind },
    LineEntered { line: u32, direction: Option<String> },
    StationEntered { station: u32 },
    Submit,
}

impl FlowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::Begin { .. } => "begin",
            FlowEvent::LineEntered { .. } => "line entered",
            FlowEvent::StationEntered { .. } => "station entered",
            FlowEvent::Submit => "submit",
        }
    }
}

/// State machine driving the report screen
#[derive(Debug, Clone, Default)]
pub struct ReportFlow {
    state: FlowState,
}

impl ReportFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Apply an event. Events that don't belong to the current state are
    /// rejected and leave the state untouched.
    pub fn apply(&mut self, event: FlowEvent) -> Result<&FlowState> {
        let next = match (&self.state, &event) {
            (FlowState::Initial, FlowEvent::Begin { kind }) => {
                FlowState::AwaitingLineNumber { kind: *kind }
            }
            (FlowState::AwaitingLineNumber { kind }, FlowEvent::LineEntered { line, direction }) => {
                FlowState::AwaitingStationNumber {
                    kind: *kind,
                    line: positive("line", *line)?,
                    direction: direction
                        .as_deref()
                        .map(str::trim)
                        .filter(|d| !d.is_empty())
                        .map(str::to_owned),
                }
            }
            (
                FlowState::AwaitingStationNumber {
                    kind,
                    line,
                    direction,
                },
                FlowEvent::StationEntered { station },
            ) => FlowState::ReadyToSubmit(NewReport {
                kind: *kind,
                line: *line,
                station: positive("station", *station)?,
                direction: direction.clone(),
            }),
            (FlowState::ReadyToSubmit(report), FlowEvent::Submit) => {
                FlowState::Submitted(report.clone())
            }
            (state, event) => return Err(LetsbusError::invalid_transition(state, event)),
        };

        tracing::debug!(from = self.state.name(), to = next.name(), "report flow transition");
        self.state = next;
        Ok(&self.state)
    }

    /// Submit and hand back the finished report.
    pub fn submit(&mut self) -> Result<NewReport> {
        match self.apply(FlowEvent::Submit)? {
            FlowState::Submitted(report) => Ok(report.clone()),
            // apply(Submit) only ever lands in Submitted
            other => Err(LetsbusError::InvalidTransition {
                state: other.name(),
                event: "submit",
            }),
        }
    }

    /// Back to the start screen from anywhere.
    pub fn reset(&mut self) {
        self.state = FlowState::Initial;
    }

    pub fn shows_line_input(&self) -> bool {
        matches!(self.state, FlowState::AwaitingLineNumber { .. })
    }

    pub fn shows_station_input(&self) -> bool {
        matches!(self.state, FlowState::AwaitingStationNumber { .. })
    }

    pub fn shows_submit(&self) -> bool {
        matches!(self.state, FlowState::ReadyToSubmit(_))
    }
}

fn positive(field: &'static str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(LetsbusError::InvalidNumber { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_to_ready(flow: &mut ReportFlow) {
        flow.apply(FlowEvent::Begin {
            kind: ReportKind::BusMissing,
        })
        .unwrap();
        flow.apply(FlowEvent::LineEntered {
            line: 12,
            direction: Some(" north ".into()),
        })
        .unwrap();
        flow.apply(FlowEvent::StationEntered { station: 3 }).unwrap();
    }

    #[test]
    fn full_walk_produces_report() {
        let mut flow = ReportFlow::new();
        assert_eq!(flow.state(), &FlowState::Initial);

        walk_to_ready(&mut flow);
        assert!(flow.shows_submit());

        let report = flow.submit().unwrap();
        assert_eq!(
            report,
            NewReport {
                kind: ReportKind::BusMissing,
                line: 12,
                station: 3,
                direction: Some("north".into()),
            }
        );
        assert!(matches!(flow.state(), FlowState::Submitted(_)));
    }

    #[test]
    fn inputs_reveal_one_at_a_time() {
        let mut flow = ReportFlow::new();
        assert!(!flow.shows_line_input() && !flow.shows_station_input());

        flow.apply(FlowEvent::Begin {
            kind: ReportKind::RoadWork,
        })
        .unwrap();
        assert!(flow.shows_line_input() && !flow.shows_station_input());

        flow.apply(FlowEvent::LineEntered {
            line: 5,
            direction: None,
        })
        .unwrap();
        assert!(!flow.shows_line_input() && flow.shows_station_input());
    }

    #[test]
    fn out_of_order_event_leaves_state() {
        let mut flow = ReportFlow::new();
        let err = flow
            .apply(FlowEvent::StationEntered { station: 3 })
            .unwrap_err();

        assert!(matches!(
            err,
            LetsbusError::InvalidTransition {
                state: "initial",
                event: "station entered"
            }
        ));
        assert_eq!(flow.state(), &FlowState::Initial);
    }

    #[test]
    fn no_going_back() {
        let mut flow = ReportFlow::new();
        walk_to_ready(&mut flow);

        let before = flow.state().clone();
        assert!(flow
            .apply(FlowEvent::LineEntered {
                line: 7,
                direction: None
            })
            .is_err());
        assert_eq!(flow.state(), &before);
    }

    #[test]
    fn zero_line_rejected() {
        let mut flow = ReportFlow::new();
        flow.apply(FlowEvent::Begin {
            kind: ReportKind::DidNotStop,
        })
        .unwrap();

        let err = flow
            .apply(FlowEvent::LineEntered {
                line: 0,
                direction: None,
            })
            .unwrap_err();
        assert!(matches!(err, LetsbusError::InvalidNumber { field: "line", .. }));
        assert!(flow.shows_line_input());
    }

    #[test]
    fn submit_twice_fails() {
        let mut flow = ReportFlow::new();
        walk_to_ready(&mut flow);
        flow.submit().unwrap();
        assert!(flow.submit().is_err());
    }

    #[test]
    fn reset_from_anywhere() {
        let mut flow = ReportFlow::new();
        walk_to_ready(&mut flow);
        flow.reset();
        assert_eq!(flow.state(), &FlowState::Initial);
    }
}
