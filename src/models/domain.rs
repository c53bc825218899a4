use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One internship/placement listing from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    #[serde(rename = "acceptableEducation", default)]
    pub acceptable_education: Vec<String>,
    #[serde(rename = "jobType", default)]
    pub job_type: String,
    #[serde(default)]
    pub company: String,
    #[serde(rename = "postedDate", default)]
    pub posted_date: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub stipend: String,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub openings: String,
    #[serde(rename = "applyBy", default)]
    pub apply_by: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "applicationTips", default)]
    pub application_tips: String,
}

/// Applicant profile submitted with a recommendation request
///
/// Skills keep submission order for display; matching treats them as a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub education: String,
    pub skills: Vec<String>,
}

impl ApplicantProfile {
    pub fn new(education: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            education: education.into(),
            skills,
        }
    }

    /// Skill set view used for membership tests during scoring
    pub fn skill_set(&self) -> HashSet<&str> {
        self.skills.iter().map(String::as_str).collect()
    }
}

/// Scored listing produced by a match run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub city: String,
    pub state: String,
    pub stipend: String,
    pub duration: String,
    pub openings: String,
    #[serde(rename = "applyBy")]
    pub apply_by: String,
    pub description: String,
    #[serde(rename = "applicationTips")]
    pub application_tips: String,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "educationSatisfied")]
    pub education_satisfied: bool,
    pub score: u32,
    #[serde(rename = "maxPossibleScore")]
    pub max_possible_score: u32,
}

impl ScoredListing {
    /// Match quality as a rounded percentage of the listing's possible points
    pub fn match_percentage(&self) -> u32 {
        ((self.score as f64 / self.max_possible_score as f64) * 100.0).round() as u32
    }
}
