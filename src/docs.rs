use crate::api::leave_request::{ChangeStatusBody, DeleteLeaveQuery, UpdateLeaveBody};
use crate::model::leave_request::LeaveRecord;
use crate::models::{ApplyLeaveRequest, LeavesListRequest};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Record Service API",
        version = "1.0.0",
        description = r#"
## Leave Record Service

Submit, review and maintain employee leave applications.

### Operations
- **ApplyLeave**: file a leave request; the day count and remaining balance are computed on submission
- **LeavesList**: list applications, optionally by status (HR and Managers)
- **GetLeaveById**: fetch one application
- **ChangeLeaveStatus**: approve or decline (Managers)
- **DeleteLeave**: remove an application (HR)
- **UpdateLeave**: edit type, dates and comment of one's own application

### Codes
- Leave status: `0` pending, `1` approved, `2` declined
- Designation: `1` employee, `2` HR, `3` manager

The acting employee is identified by the `employeeId` field of each request.
"#,
    ),
    paths(
        crate::api::leave_request::apply_leave,
        crate::api::leave_request::leaves_list,
        crate::api::leave_request::get_leave_by_id,
        crate::api::leave_request::change_leave_status,
        crate::api::leave_request::delete_leave,
        crate::api::leave_request::update_leave,

        crate::api::health::health
    ),
    components(
        schemas(
            ApplyLeaveRequest,
            LeavesListRequest,
            LeaveRecord,
            ChangeStatusBody,
            UpdateLeaveBody,
            DeleteLeaveQuery
        )
    ),
    tags(
        (name = "Leave", description = "Leave management APIs"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
