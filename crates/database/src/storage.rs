use crate::DbError;
use async_trait::async_trait;
use core_types::{
    DemoRequest, EarlyAccessSignup, InvestorRequest, NewDemoRequest, NewEarlyAccessSignup,
    NewInvestorRequest,
};

/// The persistence contract used by the API layer.
///
/// Every `create_*` call assigns the id and creation timestamp and returns the
/// stored row. There are no update or delete operations.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Inserts a signup. Returns [`DbError::Duplicate`] if the email is already present.
    async fn create_early_access_signup(
        &self,
        signup: &NewEarlyAccessSignup,
    ) -> Result<EarlyAccessSignup, DbError>;

    /// Looks up a signup by its (normalised) email.
    async fn find_early_access_by_email(
        &self,
        email: &str,
    ) -> Result<Option<EarlyAccessSignup>, DbError>;

    async fn create_demo_request(&self, request: &NewDemoRequest) -> Result<DemoRequest, DbError>;

    async fn create_investor_request(
        &self,
        request: &NewInvestorRequest,
    ) -> Result<InvestorRequest, DbError>;
}
