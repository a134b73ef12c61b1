//! Raw request bodies as the browser sends them.
//!
//! Every field is optional so that a missing field is reported by the
//! validation rules (with a field name) rather than by the JSON decoder.

use crate::enums::{CHECK_SIZES, INVESTOR_TYPES, STAGE_FOCUS};
use crate::error::ValidationError;
use crate::records::{NewDemoRequest, NewEarlyAccessSignup, NewInvestorRequest};
use crate::validation::{Checks, MAX_SHORT_LEN, MAX_TEXT_LEN};
use serde::Deserialize;

/// `POST /api/early-access`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EarlyAccessPayload {
    pub email: Option<String>,
}

impl EarlyAccessPayload {
    pub fn validate(self) -> Result<NewEarlyAccessSignup, ValidationError> {
        let mut checks = Checks::new();
        let email = checks.email("email", "Email", self.email);
        checks.finish()?;

        // One signup per address, whatever the capitalisation.
        Ok(NewEarlyAccessSignup {
            email: email.to_lowercase(),
        })
    }
}

/// `POST /api/demo-request`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequestPayload {
    pub org_name: Option<String>,
    pub full_name: Option<String>,
    pub work_email: Option<String>,
    pub role: Option<String>,
    pub org_type: Option<String>,
    pub phone: Option<String>,
}

impl DemoRequestPayload {
    pub fn validate(self) -> Result<NewDemoRequest, ValidationError> {
        let mut checks = Checks::new();
        let request = NewDemoRequest {
            org_name: checks.text("orgName", "Organization name", self.org_name, MAX_TEXT_LEN),
            full_name: checks.text("fullName", "Full name", self.full_name, MAX_TEXT_LEN),
            work_email: checks.email("workEmail", "Work email", self.work_email),
            role: checks.text("role", "Role", self.role, MAX_TEXT_LEN),
            org_type: checks.text("orgType", "Organization type", self.org_type, MAX_SHORT_LEN),
            phone: checks.phone("phone", "Phone number", self.phone),
        };
        checks.finish_preferring("phone")?;
        Ok(request)
    }
}

/// `POST /api/investor-request`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorRequestPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub firm_name: Option<String>,
    pub role: Option<String>,
    pub investor_types: Option<Vec<String>>,
    pub check_size: Option<String>,
    pub stage_focus: Option<String>,
}

impl InvestorRequestPayload {
    pub fn validate(self) -> Result<NewInvestorRequest, ValidationError> {
        let mut checks = Checks::new();
        let request = NewInvestorRequest {
            first_name: checks.text("firstName", "First name", self.first_name, MAX_SHORT_LEN),
            last_name: checks.text("lastName", "Last name", self.last_name, MAX_SHORT_LEN),
            email: checks.email("email", "Email", self.email),
            firm_name: checks.text("firmName", "Firm name", self.firm_name, MAX_TEXT_LEN),
            role: checks.text("role", "Role", self.role, MAX_TEXT_LEN),
            investor_types: checks.choices(
                "investorTypes",
                "Investor type",
                self.investor_types,
                INVESTOR_TYPES,
            ),
            check_size: checks.choice("checkSize", "Check size", self.check_size, CHECK_SIZES),
            stage_focus: checks.choice("stageFocus", "Stage focus", self.stage_focus, STAGE_FOCUS),
        };
        checks.finish()?;
        Ok(request)
    }
}
