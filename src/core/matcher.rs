use crate::core::scoring::score_listing;
use crate::models::{ApplicantProfile, Listing, ScoredListing};
use thiserror::Error;

/// Fixed policy: how many recommendations a default run returns
pub const DEFAULT_TOP_N: usize = 5;

/// Profile problems that reject a match run before any scoring happens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("no education level selected")]
    MissingEducation,

    #[error("no skills selected")]
    NoSkillsSelected,
}

/// Result of a match run
#[derive(Debug, Clone)]
pub struct RankOutcome {
    pub matches: Vec<ScoredListing>,
    pub total_listings: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Profile validation gate
/// 2. Per-listing scoring (skills + education)
/// 3. Zero-score filtering
/// 4. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    default_limit: usize,
}

impl Matcher {
    pub fn new(default_limit: usize) -> Self {
        Self { default_limit }
    }

    pub fn with_default_limit() -> Self {
        Self {
            default_limit: DEFAULT_TOP_N,
        }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank catalog listings against an applicant profile
    ///
    /// Listings are scored independently, listings with no overlap at all are
    /// dropped, and the survivors are sorted by score descending. The sort is
    /// stable, so equal scores keep their catalog order.
    ///
    /// # Arguments
    /// * `profile` - The applicant's education and skill selections
    /// * `listings` - The full catalog, read-only
    /// * `limit` - Maximum number of recommendations to return
    ///
    /// # Returns
    /// RankOutcome with the scored matches, or MatchError when the profile is
    /// incomplete (nothing is computed in that case).
    pub fn rank(
        &self,
        profile: &ApplicantProfile,
        listings: &[Listing],
        limit: usize,
    ) -> Result<RankOutcome, MatchError> {
        if profile.education.trim().is_empty() {
            return Err(MatchError::MissingEducation);
        }
        if profile.skills.is_empty() {
            return Err(MatchError::NoSkillsSelected);
        }

        let skill_set = profile.skill_set();

        let mut matches: Vec<ScoredListing> = listings
            .iter()
            .filter_map(|listing| {
                let scored = score_listing(listing, &profile.education, &skill_set);

                // Listings with zero overlap are dropped, not ranked low
                if scored.score == 0 {
                    return None;
                }

                Some(ScoredListing {
                    id: listing.id.clone(),
                    title: listing.title.clone(),
                    company: listing.company.clone(),
                    city: listing.city.clone(),
                    state: listing.state.clone(),
                    stipend: listing.stipend.clone(),
                    duration: listing.duration.clone(),
                    openings: listing.openings.clone(),
                    apply_by: listing.apply_by.clone(),
                    description: listing.description.clone(),
                    application_tips: listing.application_tips.clone(),
                    matched_skills: scored.matched_skills,
                    education_satisfied: scored.education_satisfied,
                    score: scored.score,
                    max_possible_score: scored.max_possible_score,
                })
            })
            .collect();

        // Stable sort: equal scores keep catalog order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(limit);

        Ok(RankOutcome {
            matches,
            total_listings: listings.len(),
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limit()
    }
}
