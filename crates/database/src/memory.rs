//! An in-process [`Storage`] for tests and local runs without PostgreSQL.

use crate::{DbError, Storage};
use async_trait::async_trait;
use chrono::Utc;
use core_types::{
    DemoRequest, EarlyAccessSignup, InvestorRequest, NewDemoRequest, NewEarlyAccessSignup,
    NewInvestorRequest,
};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Tables {
    early_access_signups: Vec<EarlyAccessSignup>,
    demo_requests: Vec<DemoRequest>,
    investor_requests: Vec<InvestorRequest>,
}

/// Keeps every table in a `Vec` behind one lock.
///
/// Ids are assigned per table starting at 1, like a `SERIAL` column. The
/// duplicate check and the insert of an early access signup happen under the
/// same lock, mirroring the unique index of the real table.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: Mutex<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn early_access_signups(&self) -> Vec<EarlyAccessSignup> {
        self.tables.lock().await.early_access_signups.clone()
    }

    pub async fn demo_requests(&self) -> Vec<DemoRequest> {
        self.tables.lock().await.demo_requests.clone()
    }

    pub async fn investor_requests(&self) -> Vec<InvestorRequest> {
        self.tables.lock().await.investor_requests.clone()
    }
}

fn next_id(len: usize) -> i32 {
    i32::try_from(len).map_or(i32::MAX, |n| n.saturating_add(1))
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_early_access_signup(
        &self,
        signup: &NewEarlyAccessSignup,
    ) -> Result<EarlyAccessSignup, DbError> {
        let mut tables = self.tables.lock().await;
        if tables
            .early_access_signups
            .iter()
            .any(|existing| existing.email == signup.email)
        {
            return Err(DbError::Duplicate);
        }
        let row = EarlyAccessSignup {
            id: next_id(tables.early_access_signups.len()),
            email: signup.email.clone(),
            created_at: Utc::now(),
        };
        tables.early_access_signups.push(row.clone());
        Ok(row)
    }

    async fn find_early_access_by_email(
        &self,
        email: &str,
    ) -> Result<Option<EarlyAccessSignup>, DbError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .early_access_signups
            .iter()
            .find(|signup| signup.email == email)
            .cloned())
    }

    async fn create_demo_request(&self, request: &NewDemoRequest) -> Result<DemoRequest, DbError> {
        let mut tables = self.tables.lock().await;
        let row = DemoRequest::from_new(next_id(tables.demo_requests.len()), Utc::now(), request);
        tables.demo_requests.push(row.clone());
        Ok(row)
    }

    async fn create_investor_request(
        &self,
        request: &NewInvestorRequest,
    ) -> Result<InvestorRequest, DbError> {
        let mut tables = self.tables.lock().await;
        let row =
            InvestorRequest::from_new(next_id(tables.investor_requests.len()), Utc::now(), request);
        tables.investor_requests.push(row.clone());
        Ok(row)
    }
}
