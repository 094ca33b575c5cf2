#![allow(dead_code)]
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::leave::LeaveService;
use crate::model::employee::Employee;
use crate::model::role::Designation;
use crate::models::ApplyLeaveRequest;
use crate::store::memory::MemoryLeaveStore;

pub(crate) const EMPLOYEE: &str = "E100";
pub(crate) const OTHER_EMPLOYEE: &str = "E101";
pub(crate) const HR: &str = "H200";
pub(crate) const MANAGER: &str = "M300";

/// Leave type with a quota of three days.
pub(crate) const SHORT_LEAVE: &str = "1";
/// Leave type with a quota of ten days.
pub(crate) const ANNUAL_LEAVE: &str = "2";

pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

/// Store with one employee of each designation and two leave types.
pub(crate) fn seeded_store() -> Arc<MemoryLeaveStore> {
    init_test_tracing();
    Arc::new(
        MemoryLeaveStore::default()
            .with_employee(Employee::new(EMPLOYEE, Designation::Employee, "Erin", "Staff"))
            .with_employee(Employee::new(OTHER_EMPLOYEE, Designation::Employee, "Omar", "Staff"))
            .with_employee(Employee::new(HR, Designation::Hr, "Hana", "People"))
            .with_employee(Employee::new(MANAGER, Designation::Manager, "Milo", "Lead"))
            .with_leave_type(1, 3)
            .with_leave_type(2, 10),
    )
}

pub(crate) fn service(store: &Arc<MemoryLeaveStore>) -> LeaveService {
    LeaveService::new(store.clone())
}

pub(crate) fn apply_request(employee_id: &str, leave_type_id: &str, from: &str, to: &str) -> ApplyLeaveRequest {
    ApplyLeaveRequest {
        employee_id: employee_id.to_string(),
        leave_type_id: leave_type_id.to_string(),
        from_date: from.to_string(),
        to_date: to.to_string(),
        comment: "family event".to_string(),
    }
}
