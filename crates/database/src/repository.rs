use crate::{DbError, Storage};
use async_trait::async_trait;
use core_types::{
    DemoRequest, EarlyAccessSignup, InvestorRequest, NewDemoRequest, NewEarlyAccessSignup,
    NewInvestorRequest,
};
use sqlx::postgres::PgPool;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for DbRepository {
    async fn create_early_access_signup(
        &self,
        signup: &NewEarlyAccessSignup,
    ) -> Result<EarlyAccessSignup, DbError> {
        // The unique index on `email` catches a concurrent insert that slipped
        // past the API's existence check.
        sqlx::query_as::<_, EarlyAccessSignup>(
            "INSERT INTO early_access_signups (email) VALUES ($1) RETURNING id, email, created_at",
        )
        .bind(&signup.email)
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from_insert)
    }

    async fn find_early_access_by_email(
        &self,
        email: &str,
    ) -> Result<Option<EarlyAccessSignup>, DbError> {
        let signup = sqlx::query_as::<_, EarlyAccessSignup>(
            "SELECT id, email, created_at FROM early_access_signups WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(signup)
    }

    async fn create_demo_request(&self, request: &NewDemoRequest) -> Result<DemoRequest, DbError> {
        sqlx::query_as::<_, DemoRequest>(
            r#"
            INSERT INTO demo_requests (org_name, full_name, work_email, role, org_type, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, org_name, full_name, work_email, role, org_type, phone, created_at
            "#,
        )
        .bind(&request.org_name)
        .bind(&request.full_name)
        .bind(&request.work_email)
        .bind(&request.role)
        .bind(&request.org_type)
        .bind(&request.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from_insert)
    }

    async fn create_investor_request(
        &self,
        request: &NewInvestorRequest,
    ) -> Result<InvestorRequest, DbError> {
        sqlx::query_as::<_, InvestorRequest>(
            r#"
            INSERT INTO investor_requests (
                first_name, last_name, email, firm_name, role,
                investor_types, check_size, stage_focus
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id, first_name, last_name, email, firm_name, role,
                investor_types, check_size, stage_focus, created_at
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.firm_name)
        .bind(&request.role)
        .bind(&request.investor_types)
        .bind(request.check_size.as_deref())
        .bind(request.stage_focus.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::from_insert)
    }
}
