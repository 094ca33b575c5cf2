use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::leave::LeaveService;
use crate::leave::error::LeaveError;
use crate::model::leave_request::LeaveRecord;
use crate::models::{
    ApplyLeaveRequest, ChangeLeaveStatusRequest, DeleteLeaveRequest, GetLeaveByIdRequest,
    LeavesListRequest, UpdateLeaveRequest,
};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeStatusBody {
    /// acting employee, must be a Manager
    #[schema(example = "EMP-3000")]
    pub employee_id: String,
    /// "0" pending, "1" approved, "2" declined
    #[schema(example = "1")]
    pub leave_status: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateLeaveBody {
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

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct DeleteLeaveQuery {
    /// acting employee, must be HR
    #[schema(example = "EMP-2000")]
    pub employee_id: String,
}

/* =========================
Apply for leave
========================= */
#[utoipa::path(
    post,
    path = "/api/v1/leave",
    request_body(
        content = ApplyLeaveRequest,
        description = "Leave application",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request submitted", body = Object, example = json!({
            "message": "Leave request submitted",
            "status": "pending"
        })),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Leave type not configured"),
        (status = 422, description = "Leaves not remaining")
    ),
    tag = "Leave"
)]
pub async fn apply_leave(
    service: web::Data<LeaveService>,
    payload: web::Json<ApplyLeaveRequest>,
) -> Result<HttpResponse, LeaveError> {
    service.apply_leave(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Leave request submitted",
        "status": "pending"
    })))
}

/* =========================
List leave (HR/Manager)
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave",
    params(LeavesListRequest),
    responses(
        (status = 200, description = "Leave applications", body = [LeaveRecord]),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Access denied"),
        (status = 404, description = "Acting employee not found")
    ),
    tag = "Leave"
)]
pub async fn leaves_list(
    service: web::Data<LeaveService>,
    query: web::Query<LeavesListRequest>,
) -> Result<HttpResponse, LeaveError> {
    let leaves = service.leaves_list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(leaves))
}

/* =========================
Get one leave application
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave/{application_id}",
    params(
        ("application_id" = String, Path, description = "ID of the leave application")
    ),
    responses(
        (status = 200, description = "Leave application found", body = LeaveRecord),
        (status = 404, description = "Leave application not found", body = Object, example = json!({
            "message": "leave application not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave_by_id(
    service: web::Data<LeaveService>,
    path: web::Path<String>,
) -> Result<HttpResponse, LeaveError> {
    let request = GetLeaveByIdRequest {
        application_id: path.into_inner(),
    };
    let leave = service.get_leave_by_id(request).await?;
    Ok(HttpResponse::Ok().json(leave))
}

/* =========================
Approve / decline (Manager)
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{application_id}/status",
    params(
        ("application_id" = String, Path, description = "ID of the leave application")
    ),
    request_body = ChangeStatusBody,
    responses(
        (status = 200, description = "Status changed", body = Object, example = json!({
            "message": "Leave status changed"
        })),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Access denied")
    ),
    tag = "Leave"
)]
pub async fn change_leave_status(
    service: web::Data<LeaveService>,
    path: web::Path<String>,
    payload: web::Json<ChangeStatusBody>,
) -> Result<HttpResponse, LeaveError> {
    let body = payload.into_inner();
    let request = ChangeLeaveStatusRequest {
        employee_id: body.employee_id,
        application_id: path.into_inner(),
        leave_status: body.leave_status,
    };
    service.change_leave_status(request).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave status changed"
    })))
}

/* =========================
Delete (HR)
========================= */
#[utoipa::path(
    delete,
    path = "/api/v1/leave/{application_id}",
    params(
        ("application_id" = String, Path, description = "ID of the leave application"),
        DeleteLeaveQuery
    ),
    responses(
        (status = 200, description = "Leave deleted", body = Object, example = json!({
            "message": "Leave deleted"
        })),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Access denied")
    ),
    tag = "Leave"
)]
pub async fn delete_leave(
    service: web::Data<LeaveService>,
    path: web::Path<String>,
    query: web::Query<DeleteLeaveQuery>,
) -> Result<HttpResponse, LeaveError> {
    let request = DeleteLeaveRequest {
        employee_id: query.into_inner().employee_id,
        application_id: path.into_inner(),
    };
    service.delete_leave(request).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave deleted"
    })))
}

/* =========================
Update own application
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{application_id}",
    params(
        ("application_id" = String, Path, description = "ID of the leave application")
    ),
    request_body = UpdateLeaveBody,
    responses(
        (status = 200, description = "Leave updated", body = Object, example = json!({
            "message": "Leave updated"
        })),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Access denied"),
        (status = 404, description = "Leave application not found")
    ),
    tag = "Leave"
)]
pub async fn update_leave(
    service: web::Data<LeaveService>,
    path: web::Path<String>,
    payload: web::Json<UpdateLeaveBody>,
) -> Result<HttpResponse, LeaveError> {
    let body = payload.into_inner();
    let request = UpdateLeaveRequest {
        application_id: path.into_inner(),
        employee_id: body.employee_id,
        leave_type_id: body.leave_type_id,
        from_date: body.from_date,
        to_date: body.to_date,
        comment: body.comment,
    };
    service.update_leave(request).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave updated"
    })))
}
