use crate::api::{health, leave_request};
use crate::leave::error::LeaveError;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    // undecodable bodies and queries get the same answer as failed validation
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "rejected json body");
        LeaveError::InvalidInput.into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "rejected query string");
        LeaveError::InvalidInput.into()
    }));

    cfg.service(health::health);

    cfg.service(
        web::scope(api_prefix).service(
            web::scope("/leave")
                // /leave
                .service(
                    web::resource("")
                        .route(web::get().to(leave_request::leaves_list))
                        .route(web::post().to(leave_request::apply_leave)),
                )
                // /leave/{application_id}
                .service(
                    web::resource("/{application_id}")
                        .route(web::get().to(leave_request::get_leave_by_id))
                        .route(web::put().to(leave_request::update_leave))
                        .route(web::delete().to(leave_request::delete_leave)),
                )
                // /leave/{application_id}/status
                .service(
                    web::resource("/{application_id}/status")
                        .route(web::put().to(leave_request::change_leave_status)),
                ),
        ),
    );
}

// ApplyLeave         POST   /leave
// LeavesList         GET    /leave?employeeId=&leaveStatus=
// GetLeaveById       GET    /leave/{application_id}
// UpdateLeave        PUT    /leave/{application_id}
// DeleteLeave        DELETE /leave/{application_id}?employeeId=
// ChangeLeaveStatus  PUT    /leave/{application_id}/status
