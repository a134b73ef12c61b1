//! The fixed option lists offered by the site's forms.

/// Organization types offered on the demo request form.
///
/// The list is a suggestion for the form; the API stores whatever text is sent.
pub const ORG_TYPES: &[&str] = &[
    "Pharmacy",
    "Clinic",
    "Health system",
    "Senior care",
    "Home health",
    "Insurance",
    "Employer",
    "Other",
];

/// Investor categories an investor can tick on the deck request form.
pub const INVESTOR_TYPES: &[&str] = &[
    "VC",
    "Angel",
    "Family office",
    "Accelerator",
    "Strategic",
    "Other",
];

/// Typical check size buckets.
pub const CHECK_SIZES: &[&str] = &["<$50k", "$50k to $250k", "$250k to $1M", "$1M+"];

/// Stage focus buckets.
pub const STAGE_FOCUS: &[&str] = &["Pre seed", "Seed", "Series A", "Other"];
