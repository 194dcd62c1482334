//! Incoming report validation

use letsbus_core::NewReport;

use super::ValidationError;

const MAX_DIRECTION_LEN: usize = 50;

pub fn validate_report(mut report: NewReport) -> Result<NewReport, ValidationError> {
    if report.line == 0 {
        return Err(ValidationError::NotPositive { field: "line" });
    }
    if report.station == 0 {
        return Err(ValidationError::NotPositive { field: "station" });
    }

    report.direction = report
        .direction
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty());

    if let Some(direction) = &report.direction {
        if direction.chars().count() > MAX_DIRECTION_LEN {
            return Err(ValidationError::TooLong {
                field: "direction",
                max: MAX_DIRECTION_LEN,
            });
        }
    }

    Ok(report)
}
