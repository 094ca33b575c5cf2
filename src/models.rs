use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// Request objects for the six leave operations. Fields default to empty so a
// missing field is reported as invalid input by the validator rather than as
// a JSON decoding failure.

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplyLeaveRequest {
    #[schema(example = "EMP-1000")]
    pub employee_id: String,
    #[schema(example = "2")]
    pub leave_type_id: String,
    #[schema(example = "2022-04-20")]
    pub from_date: String,
    #[schema(example = "2022-04-21")]
    pub to_date: String,
    #[schema(example = "family event")]
    pub comment: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct LeavesListRequest {
    /// acting employee, must be HR or Manager
    #[schema(example = "EMP-2000")]
    pub employee_id: String,
    /// "0", "1" or "2" to filter by status; anything else lists all
    #[schema(example = "0")]
    pub leave_status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GetLeaveByIdRequest {
    #[schema(example = "17")]
    pub application_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeLeaveStatusRequest {
    /// acting employee, must be a Manager
    #[schema(example = "EMP-3000")]
    pub employee_id: String,
    #[schema(example = "17")]
    pub application_id: String,
    #[schema(example = "1")]
    pub leave_status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteLeaveRequest {
    /// acting employee, must be HR
    #[schema(example = "EMP-2000")]
    pub employee_id: String,
    #[schema(example = "17")]
    pub application_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateLeaveRequest {
    #[schema(example = "17")]
    pub application_id: String,
    /// must own the application
    #[schema(example = "EMP-1000")]
    pub employee_id: String,
    #[schema(example = "3")]
    pub leave_type_id: String,
    #[schema(example = "2022-05-02")]
    pub from_date: String,
    #[schema(example = "2022-05-03")]
    pub to_date: String,
    #[schema(example = "moved by a week")]
    pub comment: String,
}
