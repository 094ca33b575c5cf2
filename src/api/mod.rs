pub mod health;
pub mod leave_request;
