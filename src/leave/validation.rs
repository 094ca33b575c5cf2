use std::ops::RangeInclusive;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::error::LeaveError;
use crate::model::leave_request::LeaveStatus;
use crate::models::{
    ApplyLeaveRequest, ChangeLeaveStatusRequest, DeleteLeaveRequest, LeavesListRequest,
    UpdateLeaveRequest,
};

/// Process-wide validator; the rules never change after start-up.
pub static VALIDATOR: Lazy<RequestValidator> = Lazy::new(RequestValidator::default);

/// A date string accepted by the `YYYY-M(M)-D(D)` pattern.
///
/// The pattern does not know about calendars, so `2022-02-30` is a valid
/// `DateParts` whose [`DateParts::to_date`] is `None`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Fields shared by `ApplyLeave` and `UpdateLeave` once they passed validation.
#[derive(Debug, Clone, Copy)]
pub struct ValidLeaveFields {
    pub leave_type_id: u8,
    pub from: DateParts,
    pub to: DateParts,
}

impl ValidLeaveFields {
    /// Both dates as calendar dates. The pattern admits dates like Feb 30,
    /// which cannot be measured or stored.
    pub fn calendar_dates(&self) -> Result<(NaiveDate, NaiveDate), LeaveError> {
        match (self.from.to_date(), self.to.to_date()) {
            (Some(from), Some(to)) => Ok((from, to)),
            _ => Err(LeaveError::InvalidInput),
        }
    }
}

pub struct RequestValidator {
    leave_types: RangeInclusive<u8>,
    years: RangeInclusive<i32>,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self {
            leave_types: 1..=6,
            years: 1900..=2099,
        }
    }
}

fn required(value: &str) -> Result<(), LeaveError> {
    if value.is_empty() {
        Err(LeaveError::InvalidInput)
    } else {
        Ok(())
    }
}

fn numeric(part: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if part.len() < min_len || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl RequestValidator {
    /// Matches the whole string against `YYYY-M(M)-D(D)`.
    pub fn parse_date(&self, value: &str) -> Option<DateParts> {
        let mut parts = value.split('-');
        let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let year = numeric(year, 4, 4)? as i32;
        let month = numeric(month, 1, 2)?;
        let day = numeric(day, 1, 2)?;

        let in_range =
            self.years.contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day);
        in_range.then_some(DateParts { year, month, day })
    }

    pub fn leave_type(&self, value: &str) -> Result<u8, LeaveError> {
        value
            .parse::<u8>()
            .ok()
            .filter(|id| self.leave_types.contains(id))
            .ok_or(LeaveError::InvalidInput)
    }

    fn leave_fields(
        &self,
        leave_type_id: &str,
        from_date: &str,
        to_date: &str,
    ) -> Result<ValidLeaveFields, LeaveError> {
        let leave_type_id = self.leave_type(leave_type_id)?;
        let from = self.parse_date(from_date).ok_or(LeaveError::InvalidInput)?;
        let to = self.parse_date(to_date).ok_or(LeaveError::InvalidInput)?;

        // only comparable when both are real calendar dates
        if let (Some(from), Some(to)) = (from.to_date(), to.to_date()) {
            if from > to {
                return Err(LeaveError::InvalidInput);
            }
        }

        Ok(ValidLeaveFields {
            leave_type_id,
            from,
            to,
        })
    }

    pub fn apply_leave(&self, req: &ApplyLeaveRequest) -> Result<ValidLeaveFields, LeaveError> {
        required(&req.employee_id)?;
        required(&req.comment)?;
        self.leave_fields(&req.leave_type_id, &req.from_date, &req.to_date)
    }

    pub fn update_leave(&self, req: &UpdateLeaveRequest) -> Result<ValidLeaveFields, LeaveError> {
        required(&req.application_id)?;
        required(&req.employee_id)?;
        required(&req.comment)?;
        self.leave_fields(&req.leave_type_id, &req.from_date, &req.to_date)
    }

    /// Returns the status filter to apply, if any. Values outside "0".."2"
    /// mean "no filter" and are not an error.
    pub fn leaves_list(&self, req: &LeavesListRequest) -> Result<Option<LeaveStatus>, LeaveError> {
        required(&req.employee_id)?;
        Ok(req.leave_status.as_deref().and_then(LeaveStatus::from_code))
    }

    pub fn change_leave_status(&self, req: &ChangeLeaveStatusRequest) -> Result<LeaveStatus, LeaveError> {
        required(&req.employee_id)?;
        required(&req.application_id)?;
        LeaveStatus::from_code(&req.leave_status).ok_or(LeaveError::InvalidInput)
    }

    pub fn delete_leave(&self, req: &DeleteLeaveRequest) -> Result<(), LeaveError> {
        required(&req.employee_id)?;
        required(&req.application_id)
    }
}
