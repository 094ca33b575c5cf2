use strum_macros::{EnumString, IntoStaticStr};

/// Employee designation as stored in `lm_employee.designation_id`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumString, IntoStaticStr)]
pub enum Designation {
    #[strum(serialize = "1")]
    Employee,
    #[strum(serialize = "2")]
    Hr,
    #[strum(serialize = "3")]
    Manager,
}

impl Designation {
    pub fn from_code(code: &str) -> Option<Self> {
        code.trim().parse().ok()
    }

    pub fn code(self) -> &'static str {
        self.into()
    }
}
