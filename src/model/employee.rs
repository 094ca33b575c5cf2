use serde::{Deserialize, Serialize};

use super::role::Designation;

/// Employee as seen by the leave service. Owned by the HR system; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub employee_id: String,
    /// raw `designation_id` code, see [`Designation`]
    pub designation_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Employee {
    #[cfg(test)]
    pub fn new(employee_id: &str, designation: Designation, first_name: &str, last_name: &str) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            designation_id: designation.code().to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn designation(&self) -> Option<Designation> {
        Designation::from_code(&self.designation_id)
    }
}
