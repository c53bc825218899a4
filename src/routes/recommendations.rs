use crate::catalog::{Catalog, EDUCATION_LEVELS, SKILL_CATEGORIES};
use crate::core::{MatchError, Matcher};
use crate::models::{
    ApplicantProfile, CatalogOptionsResponse, ErrorResponse, HealthResponse, RecommendRequest,
    RecommendResponse, SkillCategoryView,
};
use crate::report::RecommendationReport;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub max_limit: usize,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations/find", web::post().to(find_recommendations))
        .route("/recommendations/report", web::post().to(export_report))
        .route("/catalog/options", web::get().to(catalog_options));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find recommendations endpoint
///
/// POST /api/v1/recommendations/find
///
/// Request body:
/// ```json
/// {
///   "education": "BCA",
///   "skills": ["Python", "SQL"],
///   "limit": 5
/// }
/// ```
async fn find_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    let (profile, limit) = match validate_request(&req, &state) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match state.matcher.rank(&profile, state.catalog.listings(), limit) {
        Ok(outcome) => {
            tracing::info!(
                "Returning {} matches for education {} ({} listings scanned)",
                outcome.matches.len(),
                profile.education,
                outcome.total_listings
            );

            HttpResponse::Ok().json(RecommendResponse {
                matches: outcome.matches,
                total_listings: outcome.total_listings,
            })
        }
        Err(e) => incomplete_selection(e),
    }
}

/// Export report endpoint
///
/// POST /api/v1/recommendations/report
///
/// Same body as the find endpoint; responds with the paginated text report.
async fn export_report(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    let (profile, limit) = match validate_request(&req, &state) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match state.matcher.rank(&profile, state.catalog.listings(), limit) {
        Ok(outcome) => {
            tracing::info!(
                "Rendering report with {} matches for education {}",
                outcome.matches.len(),
                profile.education
            );

            let report = RecommendationReport::new(&profile, &outcome.matches).render();

            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(report)
        }
        Err(e) => incomplete_selection(e),
    }
}

/// Catalog options endpoint
///
/// GET /api/v1/catalog/options
///
/// Returns the fixed education and skill option lists the profile form offers.
async fn catalog_options() -> impl Responder {
    HttpResponse::Ok().json(CatalogOptionsResponse {
        education_levels: EDUCATION_LEVELS.iter().map(|s| s.to_string()).collect(),
        skill_categories: SKILL_CATEGORIES
            .iter()
            .map(|(category, skills)| SkillCategoryView {
                category: category.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect(),
    })
}

fn validate_request(
    req: &RecommendRequest,
    state: &AppState,
) -> Result<(ApplicantProfile, usize), HttpResponse> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return Err(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        }));
    }

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or_else(|| state.matcher.default_limit())
        .min(state.max_limit);
    let profile = ApplicantProfile::new(req.education.clone(), req.skills.clone());

    Ok((profile, limit))
}

fn incomplete_selection(error: MatchError) -> HttpResponse {
    tracing::info!("Match run rejected: {}", error);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Selection incomplete".to_string(),
        message: error.to_string(),
        status_code: 400,
    })
}
