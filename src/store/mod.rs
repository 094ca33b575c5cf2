use chrono::NaiveDateTime;
use futures::future::BoxFuture;

use crate::model::employee::Employee;
use crate::model::leave_request::{LeaveRecord, LeaveStatus, LeaveUpdate, NewLeaveApplication};

#[cfg(test)]
pub mod memory;
pub mod mysql;

pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Statements the leave service issues against `lm_employee`, `lm_leave_type`
/// and `lm_leave_application`. Each method is exactly one statement.
pub trait LeaveStore: Send + Sync {
    fn ping(&self) -> BoxFuture<'_, StoreResult<()>>;

    fn find_employee<'a>(&'a self, employee_id: &'a str) -> BoxFuture<'a, StoreResult<Option<Employee>>>;

    /// `None` when the leave type is not configured.
    fn allowed_days(&self, leave_type_id: u8) -> BoxFuture<'_, StoreResult<Option<i64>>>;

    /// Sum of `no_of_days` over all of the employee's applications of the type.
    fn days_taken<'a>(&'a self, employee_id: &'a str, leave_type_id: u8) -> BoxFuture<'a, StoreResult<i64>>;

    fn insert_application(&self, application: NewLeaveApplication) -> BoxFuture<'_, StoreResult<()>>;

    fn list_applications(&self, status: Option<LeaveStatus>) -> BoxFuture<'_, StoreResult<Vec<LeaveRecord>>>;

    fn find_application<'a>(&'a self, application_id: &'a str) -> BoxFuture<'a, StoreResult<Option<LeaveRecord>>>;

    fn application_owner<'a>(&'a self, application_id: &'a str) -> BoxFuture<'a, StoreResult<Option<String>>>;

    fn set_status<'a>(
        &'a self,
        application_id: &'a str,
        status: LeaveStatus,
        decided_at: NaiveDateTime,
    ) -> BoxFuture<'a, StoreResult<()>>;

    fn delete_application<'a>(&'a self, application_id: &'a str) -> BoxFuture<'a, StoreResult<()>>;

    /// Only touches the row while it is still owned by `owner`. Returns the
    /// number of rows matched, so `0` means the guard did not hold.
    fn update_application<'a>(
        &'a self,
        application_id: &'a str,
        owner: &'a str,
        update: LeaveUpdate,
    ) -> BoxFuture<'a, StoreResult<u64>>;
}
