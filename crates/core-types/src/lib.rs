//! # Talking Pills Core Types
//!
//! The shared schema of the site: the three record shapes that the API
//! persists, the raw payloads the API receives, and the field-level rules
//! that turn one into the other.
//!
//! Every other crate in the workspace speaks in these types.

pub mod enums;
pub mod error;
pub mod payloads;
pub mod records;
pub mod validation;

// Re-export the core types to provide a clean public API.
pub use enums::{CHECK_SIZES, INVESTOR_TYPES, ORG_TYPES, STAGE_FOCUS};
pub use error::{ValidationError, ValidationErrorKind};
pub use payloads::{DemoRequestPayload, EarlyAccessPayload, InvestorRequestPayload};
pub use records::{
    DemoRequest, EarlyAccessSignup, InvestorRequest, NewDemoRequest, NewEarlyAccessSignup,
    NewInvestorRequest,
};
