use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};
use utoipa::ToSchema;

/// Sentinel rendered for `date_of_approval` while the leave is undecided.
pub const NOT_APPROVED: &str = "N/A";

#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumString, IntoStaticStr)]
pub enum LeaveStatus {
    #[strum(serialize = "0")]
    Pending,
    #[strum(serialize = "1")]
    Approved,
    #[strum(serialize = "2")]
    Declined,
}

impl LeaveStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    pub fn code(self) -> &'static str {
        self.into()
    }
}

/// Leave application joined with the owning employee's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "17")]
    pub application_id: String,
    #[schema(example = "EMP-1000")]
    pub employee_id: String,
    #[schema(example = "2")]
    pub leave_type_id: String,
    #[schema(example = "2022-04-18 09:12:44")]
    pub date_of_application: String,
    #[schema(example = "2022-04-20")]
    pub from_date: String,
    #[schema(example = "2022-04-21")]
    pub to_date: String,
    #[schema(example = 2)]
    pub number_of_days: i64,
    #[schema(example = 8)]
    pub leave_balance: i64,
    /// "0" pending, "1" approved, "2" declined
    #[schema(example = "0")]
    pub leave_status: String,
    #[schema(example = "family event")]
    pub comment: String,
    #[schema(example = "N/A")]
    pub date_of_approval: String,
}

/// Row written by `ApplyLeave`, with day count and balance already derived.
#[derive(Debug, Clone)]
pub struct NewLeaveApplication {
    pub employee_id: String,
    pub leave_type_id: u8,
    pub date_of_application: NaiveDateTime,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub number_of_days: i64,
    pub leave_balance: i64,
    pub comment: String,
}

/// Columns `UpdateLeave` is allowed to overwrite.
#[derive(Debug, Clone)]
pub struct LeaveUpdate {
    pub leave_type_id: u8,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub comment: String,
}
