use tracing::{debug, warn};

use super::error::LeaveError;
use crate::model::role::Designation;
use crate::store::LeaveStore;

/// Roles allowed to list every employee's leave.
pub const LIST_ROLES: &[Designation] = &[Designation::Hr, Designation::Manager];
/// Roles allowed to approve or decline.
pub const STATUS_ROLES: &[Designation] = &[Designation::Manager];
/// Roles allowed to delete applications.
pub const DELETE_ROLES: &[Designation] = &[Designation::Hr];

/// Resolves the acting employee's designation and checks it against `allowed`.
///
/// A missing employee or a failing store is reported as such and never turns
/// into a denial. An unrecognised designation code grants nothing.
pub async fn require_designation(
    store: &dyn LeaveStore,
    acting_employee_id: &str,
    allowed: &[Designation],
) -> Result<Designation, LeaveError> {
    let employee = store
        .find_employee(acting_employee_id)
        .await?
        .ok_or(LeaveError::NotFound("employee"))?;

    match employee.designation() {
        Some(designation) if allowed.contains(&designation) => {
            debug!(employee_id = acting_employee_id, designation_id = designation.code(), "access granted");
            Ok(designation)
        }
        designation => {
            warn!(
                employee_id = acting_employee_id,
                designation_id = %employee.designation_id,
                known = designation.is_some(),
                "designation not permitted"
            );
            Err(LeaveError::AccessDenied)
        }
    }
}

/// Self-service check for `UpdateLeave`: only the owner may edit.
pub fn require_owner(owner_id: &str, acting_employee_id: &str) -> Result<(), LeaveError> {
    if owner_id == acting_employee_id {
        Ok(())
    } else {
        warn!(
            owner_id,
            employee_id = acting_employee_id,
            "update attempted by non-owner"
        );
        Err(LeaveError::AccessDenied)
    }
}
