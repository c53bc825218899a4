use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to compute recommendations for an applicant profile
///
/// When `limit` is omitted the service falls back to its configured
/// default (the fixed top-5 policy).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    pub education: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
