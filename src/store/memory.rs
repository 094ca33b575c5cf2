//! In-process [`LeaveStore`] used by the service and handler tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::NaiveDateTime;
use futures::FutureExt;
use futures::future::BoxFuture;

use super::{LeaveStore, StoreResult};
use crate::model::employee::Employee;
use crate::model::leave_request::{
    LeaveRecord, LeaveStatus, LeaveUpdate, NOT_APPROVED, NewLeaveApplication,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
struct StoredApplication {
    employee_id: String,
    leave_type_id: u8,
    date_of_application: String,
    from_date: String,
    to_date: String,
    number_of_days: i64,
    leave_balance: i64,
    leave_status: LeaveStatus,
    comment: String,
    date_of_approval: Option<String>,
}

#[derive(Default)]
struct State {
    employees: HashMap<String, Employee>,
    leave_types: HashMap<u8, i64>,
    applications: BTreeMap<u64, StoredApplication>,
    next_id: u64,
}

#[derive(Default)]
pub struct MemoryLeaveStore {
    state: Mutex<State>,
    application_statements: AtomicUsize,
    unavailable: AtomicBool,
    reassign_after_owner_read: Mutex<Option<String>>,
}

impl MemoryLeaveStore {
    pub fn with_employee(self, employee: Employee) -> Self {
        self.lock()
            .employees
            .insert(employee.employee_id.clone(), employee);
        self
    }

    pub fn with_leave_type(self, leave_type_id: u8, allowed_days: i64) -> Self {
        self.lock().leave_types.insert(leave_type_id, allowed_days);
        self
    }

    /// Makes every following statement fail like a dropped connection.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of statements issued against the application table so far.
    pub fn application_statements(&self) -> usize {
        self.application_statements.load(Ordering::SeqCst)
    }

    pub fn application_count(&self) -> usize {
        self.lock().applications.len()
    }

    /// Hands the application to another employee, as a concurrent writer might.
    fn reassign(&self, application_id: &str, employee_id: &str) {
        let mut state = self.lock();
        if let Some(row) = row_mut(&mut state, application_id) {
            row.employee_id = employee_id.to_string();
        }
    }

    /// The next ownership read hands the application to `employee_id` right
    /// after answering, like a writer racing the update.
    pub fn reassign_after_owner_read(&self, employee_id: &str) {
        *self
            .reassign_after_owner_read
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(employee_id.to_string());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }

    fn touch_applications(&self) -> StoreResult<()> {
        self.check()?;
        self.application_statements.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn parse_id(application_id: &str) -> Option<u64> {
    application_id.parse().ok()
}

fn row_mut<'s>(state: &'s mut State, application_id: &str) -> Option<&'s mut StoredApplication> {
    state.applications.get_mut(&parse_id(application_id)?)
}

fn record(state: &State, id: u64, row: &StoredApplication) -> Option<LeaveRecord> {
    // inner join: applications of unknown employees are not listed
    let employee = state.employees.get(&row.employee_id)?;
    Some(LeaveRecord {
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        application_id: id.to_string(),
        employee_id: row.employee_id.clone(),
        leave_type_id: row.leave_type_id.to_string(),
        date_of_application: row.date_of_application.clone(),
        from_date: row.from_date.clone(),
        to_date: row.to_date.clone(),
        number_of_days: row.number_of_days,
        leave_balance: row.leave_balance,
        leave_status: row.leave_status.code().to_string(),
        comment: row.comment.clone(),
        date_of_approval: row
            .date_of_approval
            .clone()
            .unwrap_or_else(|| NOT_APPROVED.to_string()),
    })
}

impl LeaveStore for MemoryLeaveStore {
    fn ping(&self) -> BoxFuture<'_, StoreResult<()>> {
        async move { self.check() }.boxed()
    }

    fn find_employee<'a>(&'a self, employee_id: &'a str) -> BoxFuture<'a, StoreResult<Option<Employee>>> {
        async move {
            self.check()?;
            Ok(self.lock().employees.get(employee_id).cloned())
        }
        .boxed()
    }

    fn allowed_days(&self, leave_type_id: u8) -> BoxFuture<'_, StoreResult<Option<i64>>> {
        async move {
            self.check()?;
            Ok(self.lock().leave_types.get(&leave_type_id).copied())
        }
        .boxed()
    }

    fn days_taken<'a>(&'a self, employee_id: &'a str, leave_type_id: u8) -> BoxFuture<'a, StoreResult<i64>> {
        async move {
            self.touch_applications()?;
            Ok(self
                .lock()
                .applications
                .values()
                .filter(|row| row.employee_id == employee_id && row.leave_type_id == leave_type_id)
                .map(|row| row.number_of_days)
                .sum())
        }
        .boxed()
    }

    fn insert_application(&self, application: NewLeaveApplication) -> BoxFuture<'_, StoreResult<()>> {
        async move {
            self.touch_applications()?;
            let mut state = self.lock();
            state.next_id += 1;
            let id = state.next_id;
            state.applications.insert(
                id,
                StoredApplication {
                    employee_id: application.employee_id,
                    leave_type_id: application.leave_type_id,
                    date_of_application: application
                        .date_of_application
                        .format(TIMESTAMP_FORMAT)
                        .to_string(),
                    from_date: application.from_date.to_string(),
                    to_date: application.to_date.to_string(),
                    number_of_days: application.number_of_days,
                    leave_balance: application.leave_balance,
                    leave_status: LeaveStatus::Pending,
                    comment: application.comment,
                    date_of_approval: None,
                },
            );
            Ok(())
        }
        .boxed()
    }

    fn list_applications(&self, status: Option<LeaveStatus>) -> BoxFuture<'_, StoreResult<Vec<LeaveRecord>>> {
        async move {
            self.touch_applications()?;
            let state = self.lock();
            Ok(state
                .applications
                .iter()
                .filter(|(_, row)| status.is_none_or(|s| row.leave_status == s))
                .filter_map(|(id, row)| record(&state, *id, row))
                .collect())
        }
        .boxed()
    }

    fn find_application<'a>(&'a self, application_id: &'a str) -> BoxFuture<'a, StoreResult<Option<LeaveRecord>>> {
        async move {
            self.touch_applications()?;
            let state = self.lock();
            Ok(parse_id(application_id)
                .and_then(|id| state.applications.get(&id).map(|row| (id, row)))
                .and_then(|(id, row)| record(&state, id, row)))
        }
        .boxed()
    }

    fn application_owner<'a>(&'a self, application_id: &'a str) -> BoxFuture<'a, StoreResult<Option<String>>> {
        async move {
            self.touch_applications()?;
            let owner = {
                let state = self.lock();
                parse_id(application_id)
                    .and_then(|id| state.applications.get(&id))
                    .map(|row| row.employee_id.clone())
            };
            let racing = self
                .reassign_after_owner_read
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .take();
            if let Some(employee_id) = racing {
                self.reassign(application_id, &employee_id);
            }
            Ok(owner)
        }
        .boxed()
    }

    fn set_status<'a>(
        &'a self,
        application_id: &'a str,
        status: LeaveStatus,
        decided_at: NaiveDateTime,
    ) -> BoxFuture<'a, StoreResult<()>> {
        async move {
            self.touch_applications()?;
            let mut state = self.lock();
            if let Some(row) = row_mut(&mut state, application_id) {
                row.leave_status = status;
                row.date_of_approval = Some(decided_at.format(TIMESTAMP_FORMAT).to_string());
            }
            Ok(())
        }
        .boxed()
    }

    fn delete_application<'a>(&'a self, application_id: &'a str) -> BoxFuture<'a, StoreResult<()>> {
        async move {
            self.touch_applications()?;
            if let Some(id) = parse_id(application_id) {
                self.lock().applications.remove(&id);
            }
            Ok(())
        }
        .boxed()
    }

    fn update_application<'a>(
        &'a self,
        application_id: &'a str,
        owner: &'a str,
        update: LeaveUpdate,
    ) -> BoxFuture<'a, StoreResult<u64>> {
        async move {
            self.touch_applications()?;
            let mut state = self.lock();
            let row = row_mut(&mut state, application_id).filter(|row| row.employee_id == owner);
            let Some(row) = row else {
                return Ok(0);
            };
            row.leave_type_id = update.leave_type_id;
            row.from_date = update.from_date.to_string();
            row.to_date = update.to_date.to_string();
            row.comment = update.comment;
            Ok(1)
        }
        .boxed()
    }
}
