use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `early_access_signups` table. One row per email.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyAccessSignup {
    pub id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A validated early access signup, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEarlyAccessSignup {
    /// Trimmed and lower-cased.
    pub email: String,
}

/// A row from the `demo_requests` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequest {
    pub id: i32,
    pub org_name: String,
    pub full_name: String,
    pub work_email: String,
    pub role: String,
    pub org_type: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// A validated demo request, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDemoRequest {
    pub org_name: String,
    pub full_name: String,
    pub work_email: String,
    pub role: String,
    pub org_type: String,
    pub phone: String,
}

impl DemoRequest {
    /// Builds the persisted row from a validated request plus the storage-assigned columns.
    pub fn from_new(id: i32, created_at: DateTime<Utc>, new: &NewDemoRequest) -> Self {
        Self {
            id,
            org_name: new.org_name.clone(),
            full_name: new.full_name.clone(),
            work_email: new.work_email.clone(),
            role: new.role.clone(),
            org_type: new.org_type.clone(),
            phone: new.phone.clone(),
            created_at,
        }
    }
}

/// A row from the `investor_requests` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorRequest {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub firm_name: String,
    pub role: String,
    pub investor_types: Vec<String>,
    pub check_size: Option<String>,
    pub stage_focus: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated investor deck request, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvestorRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub firm_name: String,
    pub role: String,
    pub investor_types: Vec<String>,
    pub check_size: Option<String>,
    pub stage_focus: Option<String>,
}

impl InvestorRequest {
    /// Builds the persisted row from a validated request plus the storage-assigned columns.
    pub fn from_new(id: i32, created_at: DateTime<Utc>, new: &NewInvestorRequest) -> Self {
        Self {
            id,
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            email: new.email.clone(),
            firm_name: new.firm_name.clone(),
            role: new.role.clone(),
            investor_types: new.investor_types.clone(),
            check_size: new.check_size.clone(),
            stage_focus: new.stage_focus.clone(),
            created_at,
        }
    }
}
