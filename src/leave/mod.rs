//! Leave-application lifecycle: validation, authorization, balance and
//! persistence for the six leave operations.

pub mod access;
pub mod balance;
pub mod error;
pub mod validation;


use std::sync::Arc;

use chrono::Local;
use tracing::{info, instrument, warn};

use crate::model::leave_request::{LeaveRecord, LeaveUpdate, NewLeaveApplication};
use crate::models::{
    ApplyLeaveRequest, ChangeLeaveStatusRequest, DeleteLeaveRequest, GetLeaveByIdRequest,
    LeavesListRequest, UpdateLeaveRequest,
};
use crate::store::LeaveStore;
use access::{DELETE_ROLES, LIST_ROLES, STATUS_ROLES, require_designation, require_owner};
use error::LeaveError;
use validation::VALIDATOR;

#[derive(Clone)]
pub struct LeaveService {
    store: Arc<dyn LeaveStore>,
}

impl LeaveService {
    pub fn new(store: Arc<dyn LeaveStore>) -> Self {
        Self { store }
    }

    pub async fn ping(&self) -> Result<(), LeaveError> {
        self.store.ping().await?;
        Ok(())
    }

    /// Files a new application in `Pending` state after checking the balance.
    #[instrument(skip_all, fields(employee_id = %req.employee_id, leave_type_id = %req.leave_type_id))]
    pub async fn apply_leave(&self, req: ApplyLeaveRequest) -> Result<(), LeaveError> {
        let fields = VALIDATOR.apply_leave(&req)?;
        let (from, to) = fields.calendar_dates()?;
        let requested = balance::number_of_days(from, to);

        let allowed = self
            .store
            .allowed_days(fields.leave_type_id)
            .await?
            .ok_or(LeaveError::NotFound("leave type"))?;
        let taken = self
            .store
            .days_taken(&req.employee_id, fields.leave_type_id)
            .await?;
        let leave_balance = balance::remaining_balance(allowed, taken, requested)?;

        self.store
            .insert_application(NewLeaveApplication {
                employee_id: req.employee_id,
                leave_type_id: fields.leave_type_id,
                date_of_application: Local::now().naive_local(),
                from_date: from,
                to_date: to,
                number_of_days: requested,
                leave_balance,
                comment: req.comment,
            })
            .await?;

        info!(number_of_days = requested, leave_balance, "leave applied");
        Ok(())
    }

    /// Lists applications for HR and managers, optionally by status.
    #[instrument(skip_all, fields(employee_id = %req.employee_id))]
    pub async fn leaves_list(&self, req: LeavesListRequest) -> Result<Vec<LeaveRecord>, LeaveError> {
        let status = VALIDATOR.leaves_list(&req)?;
        require_designation(self.store.as_ref(), &req.employee_id, LIST_ROLES).await?;

        Ok(self.store.list_applications(status).await?)
    }

    #[instrument(skip_all, fields(application_id = %req.application_id))]
    pub async fn get_leave_by_id(&self, req: GetLeaveByIdRequest) -> Result<LeaveRecord, LeaveError> {
        self.store
            .find_application(&req.application_id)
            .await?
            .ok_or(LeaveError::NotFound("leave application"))
    }

    /// Approves or declines; the approval date is stamped for either outcome.
    #[instrument(skip_all, fields(employee_id = %req.employee_id, application_id = %req.application_id))]
    pub async fn change_leave_status(&self, req: ChangeLeaveStatusRequest) -> Result<(), LeaveError> {
        let status = VALIDATOR.change_leave_status(&req)?;
        require_designation(self.store.as_ref(), &req.employee_id, STATUS_ROLES).await?;

        self.store
            .set_status(&req.application_id, status, Local::now().naive_local())
            .await?;

        info!(leave_status = status.code(), "leave status changed");
        Ok(())
    }

    /// Removes the row. Deleting an unknown id is not an error.
    #[instrument(skip_all, fields(employee_id = %req.employee_id, application_id = %req.application_id))]
    pub async fn delete_leave(&self, req: DeleteLeaveRequest) -> Result<(), LeaveError> {
        VALIDATOR.delete_leave(&req)?;
        require_designation(self.store.as_ref(), &req.employee_id, DELETE_ROLES).await?;

        self.store.delete_application(&req.application_id).await?;

        info!("leave deleted");
        Ok(())
    }

    /// Owner-only edit of type, dates and comment.
    ///
    /// Day count and balance keep the values computed at submission.
    #[instrument(skip_all, fields(employee_id = %req.employee_id, application_id = %req.application_id))]
    pub async fn update_leave(&self, req: UpdateLeaveRequest) -> Result<(), LeaveError> {
        let fields = VALIDATOR.update_leave(&req)?;
        let (from, to) = fields.calendar_dates()?;

        let owner = self
            .store
            .application_owner(&req.application_id)
            .await?
            .ok_or(LeaveError::NotFound("leave application"))?;
        require_owner(&owner, &req.employee_id)?;

        let update = LeaveUpdate {
            leave_type_id: fields.leave_type_id,
            from_date: from,
            to_date: to,
            comment: req.comment,
        };
        let matched = self
            .store
            .update_application(&req.application_id, &req.employee_id, update)
            .await?;
        if matched == 0 {
            warn!(owner_id = %owner, "application changed owner before the update");
            return Err(LeaveError::AccessDenied);
        }

        info!("leave updated");
        Ok(())
    }
}
