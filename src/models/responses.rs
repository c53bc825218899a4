use crate::models::domain::ScoredListing;
use serde::{Deserialize, Serialize};

/// Response for the find recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub matches: Vec<ScoredListing>,
    #[serde(rename = "totalListings")]
    pub total_listings: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// One category of selectable skills, as rendered by the profile form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategoryView {
    pub category: String,
    pub skills: Vec<String>,
}

/// Fixed option lists the profile form is built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogOptionsResponse {
    #[serde(rename = "educationLevels")]
    pub education_levels: Vec<String>,
    #[serde(rename = "skillCategories")]
    pub skill_categories: Vec<SkillCategoryView>,
}
