// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ApplicantProfile, Listing, ScoredListing};
pub use requests::RecommendRequest;
pub use responses::{
    CatalogOptionsResponse, ErrorResponse, HealthResponse, RecommendResponse, SkillCategoryView,
};
