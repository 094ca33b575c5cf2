use chrono::NaiveDateTime;
use futures::FutureExt;
use futures::future::BoxFuture;
use sqlx::MySqlPool;

use super::{LeaveStore, StoreResult};
use crate::model::employee::Employee;
use crate::model::leave_request::{LeaveRecord, LeaveStatus, LeaveUpdate, NewLeaveApplication};

// Identifiers, codes and dates are read back as text so the wire format does
// not depend on the exact column types of a given installation.
const SELECT_LEAVE_RECORD: &str = r#"
    SELECT
        e.first_name,
        e.last_name,
        CAST(a.application_id AS CHAR) AS application_id,
        CAST(a.employee_id AS CHAR) AS employee_id,
        CAST(a.leave_type_id AS CHAR) AS leave_type_id,
        CAST(a.date_of_application AS CHAR) AS date_of_application,
        CAST(a.from_date AS CHAR) AS from_date,
        CAST(a.to_date AS CHAR) AS to_date,
        CAST(a.no_of_days AS SIGNED) AS number_of_days,
        CAST(a.leave_balance AS SIGNED) AS leave_balance,
        CAST(a.leave_status AS CHAR) AS leave_status,
        a.comment,
        IFNULL(CAST(a.date_of_approval AS CHAR), 'N/A') AS date_of_approval
    FROM lm_leave_application a
    INNER JOIN lm_employee e ON e.employee_id = a.employee_id
"#;

#[derive(Clone)]
pub struct MySqlLeaveStore {
    pool: MySqlPool,
}

impl MySqlLeaveStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl LeaveStore for MySqlLeaveStore {
    fn ping(&self) -> BoxFuture<'_, StoreResult<()>> {
        async move {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        }
        .boxed()
    }

    fn find_employee<'a>(&'a self, employee_id: &'a str) -> BoxFuture<'a, StoreResult<Option<Employee>>> {
        async move {
            sqlx::query_as::<_, Employee>(
                r#"
                SELECT
                    CAST(employee_id AS CHAR) AS employee_id,
                    CAST(designation_id AS CHAR) AS designation_id,
                    first_name,
                    last_name
                FROM lm_employee
                WHERE employee_id = ?
                "#,
            )
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await
        }
        .boxed()
    }

    fn allowed_days(&self, leave_type_id: u8) -> BoxFuture<'_, StoreResult<Option<i64>>> {
        async move {
            sqlx::query_scalar::<_, i64>(
                "SELECT CAST(number_of_days_allowed AS SIGNED) FROM lm_leave_type WHERE leave_type_id = ?",
            )
            .bind(leave_type_id)
            .fetch_optional(&self.pool)
            .await
        }
        .boxed()
    }

    fn days_taken<'a>(&'a self, employee_id: &'a str, leave_type_id: u8) -> BoxFuture<'a, StoreResult<i64>> {
        async move {
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT CAST(IFNULL(SUM(no_of_days), 0) AS SIGNED)
                FROM lm_leave_application
                WHERE employee_id = ?
                AND leave_type_id = ?
                "#,
            )
            .bind(employee_id)
            .bind(leave_type_id)
            .fetch_one(&self.pool)
            .await
        }
        .boxed()
    }

    fn insert_application(&self, application: NewLeaveApplication) -> BoxFuture<'_, StoreResult<()>> {
        async move {
            sqlx::query(
                r#"
                INSERT INTO lm_leave_application
                    (employee_id, leave_type_id, date_of_application, from_date, to_date,
                     no_of_days, leave_balance, leave_status, comment)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&application.employee_id)
            .bind(application.leave_type_id)
            .bind(application.date_of_application)
            .bind(application.from_date)
            .bind(application.to_date)
            .bind(application.number_of_days)
            .bind(application.leave_balance)
            .bind(LeaveStatus::Pending.code())
            .bind(&application.comment)
            .execute(&self.pool)
            .await?;
            Ok(())
        }
        .boxed()
    }

    fn list_applications(&self, status: Option<LeaveStatus>) -> BoxFuture<'_, StoreResult<Vec<LeaveRecord>>> {
        async move {
            match status {
                Some(status) => {
                    let sql = format!("{SELECT_LEAVE_RECORD} WHERE a.leave_status = ?");
                    sqlx::query_as::<_, LeaveRecord>(&sql)
                        .bind(status.code())
                        .fetch_all(&self.pool)
                        .await
                }
                None => {
                    sqlx::query_as::<_, LeaveRecord>(SELECT_LEAVE_RECORD)
                        .fetch_all(&self.pool)
                        .await
                }
            }
        }
        .boxed()
    }

    fn find_application<'a>(&'a self, application_id: &'a str) -> BoxFuture<'a, StoreResult<Option<LeaveRecord>>> {
        async move {
            let sql = format!("{SELECT_LEAVE_RECORD} WHERE a.application_id = ?");
            sqlx::query_as::<_, LeaveRecord>(&sql)
                .bind(application_id)
                .fetch_optional(&self.pool)
                .await
        }
        .boxed()
    }

    fn application_owner<'a>(&'a self, application_id: &'a str) -> BoxFuture<'a, StoreResult<Option<String>>> {
        async move {
            sqlx::query_scalar::<_, String>(
                "SELECT CAST(employee_id AS CHAR) FROM lm_leave_application WHERE application_id = ?",
            )
            .bind(application_id)
            .fetch_optional(&self.pool)
            .await
        }
        .boxed()
    }

    fn set_status<'a>(
        &'a self,
        application_id: &'a str,
        status: LeaveStatus,
        decided_at: NaiveDateTime,
    ) -> BoxFuture<'a, StoreResult<()>> {
        async move {
            sqlx::query(
                r#"
                UPDATE lm_leave_application
                SET leave_status = ?, date_of_approval = ?
                WHERE application_id = ?
                "#,
            )
            .bind(status.code())
            .bind(decided_at)
            .bind(application_id)
            .execute(&self.pool)
            .await?;
            Ok(())
        }
        .boxed()
    }

    fn delete_application<'a>(&'a self, application_id: &'a str) -> BoxFuture<'a, StoreResult<()>> {
        async move {
            sqlx::query("DELETE FROM lm_leave_application WHERE application_id = ?")
                .bind(application_id)
                .execute(&self.pool)
                .await?;
            Ok(())
        }
        .boxed()
    }

    fn update_application<'a>(
        &'a self,
        application_id: &'a str,
        owner: &'a str,
        update: LeaveUpdate,
    ) -> BoxFuture<'a, StoreResult<u64>> {
        // sqlx negotiates CLIENT_FOUND_ROWS, so an update that rewrites the
        // same values still counts its row
        async move {
            let result = sqlx::query(
                r#"
                UPDATE lm_leave_application
                SET leave_type_id = ?, comment = ?, from_date = ?, to_date = ?
                WHERE application_id = ?
                AND employee_id = ?
                "#,
            )
            .bind(update.leave_type_id)
            .bind(&update.comment)
            .bind(update.from_date)
            .bind(update.to_date)
            .bind(application_id)
            .bind(owner)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected())
        }
        .boxed()
    }
}
