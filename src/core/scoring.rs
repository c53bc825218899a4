use crate::models::Listing;
use std::collections::HashSet;

/// Raw scoring outcome for a single listing
///
/// Scoring formula:
/// score = |required skills the applicant has| + (education accepted ? 1 : 0)
/// max_possible_score = |required skills| + 1
///
/// The education slot is always part of the denominator, even for listings
/// that accept no education level. A full skill match on such a listing
/// therefore caps below 100%.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingScore {
    pub matched_skills: Vec<String>,
    pub education_satisfied: bool,
    pub score: u32,
    pub max_possible_score: u32,
}

/// Score one listing against an applicant's education and skill set
///
/// Matched skills come back in the listing's original skill ordering, with
/// duplicates skipped so the result stays a proper subset.
pub fn score_listing(listing: &Listing, education: &str, skills: &HashSet<&str>) -> ListingScore {
    let mut score = 0u32;
    let mut matched_skills = Vec::new();

    for skill in &listing.required_skills {
        if skills.contains(skill.as_str()) && !matched_skills.contains(skill) {
            matched_skills.push(skill.clone());
            score += 1;
        }
    }

    let education_satisfied = listing
        .acceptable_education
        .iter()
        .any(|level| level == education);
    if education_satisfied {
        score += 1;
    }

    let max_possible_score = listing.required_skills.len() as u32 + 1;

    ListingScore {
        matched_skills,
        education_satisfied,
        score,
        max_possible_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_listing(required_skills: &[&str], acceptable_education: &[&str]) -> Listing {
        Listing {
            id: "1".to_string(),
            title: "Test Internship".to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            acceptable_education: acceptable_education.iter().map(|s| s.to_string()).collect(),
            job_type: "Internship".to_string(),
            company: "Test Corp".to_string(),
            posted_date: String::new(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            stipend: String::new(),
            start_date: String::new(),
            duration: String::new(),
            openings: String::new(),
            apply_by: String::new(),
            description: String::new(),
            application_tips: String::new(),
        }
    }

    fn skill_set<'a>(skills: &[&'a str]) -> HashSet<&'a str> {
        skills.iter().copied().collect()
    }

    #[test]
    fn test_skill_and_education_match() {
        let listing = create_listing(&["Python", "SQL"], &["BCA"]);

        let result = score_listing(&listing, "BCA", &skill_set(&["Python"]));

        assert_eq!(result.matched_skills, vec!["Python"]);
        assert!(result.education_satisfied);
        assert_eq!(result.score, 2);
        assert_eq!(result.max_possible_score, 3);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let listing = create_listing(&["Python", "SQL"], &["BCA"]);

        let result = score_listing(&listing, "MBA", &skill_set(&["Excel"]));

        assert!(result.matched_skills.is_empty());
        assert!(!result.education_satisfied);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_matched_skills_keep_listing_order() {
        let listing = create_listing(&["HTML", "CSS", "JavaScript", "React"], &[]);

        let result = score_listing(&listing, "BCA", &skill_set(&["React", "HTML", "JavaScript"]));

        assert_eq!(result.matched_skills, vec!["HTML", "JavaScript", "React"]);
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_education_slot_counted_when_unsatisfiable() {
        // A listing with no acceptable education still carries the +1 slot,
        // so a full skill match stays below its maximum.
        let listing = create_listing(&["Python", "SQL"], &[]);

        let result = score_listing(&listing, "BCA", &skill_set(&["Python", "SQL"]));

        assert_eq!(result.score, 2);
        assert_eq!(result.max_possible_score, 3);
        assert!(!result.education_satisfied);
    }

    #[test]
    fn test_empty_required_skills_education_only() {
        let listing = create_listing(&[], &["BCA", "MCA"]);

        let result = score_listing(&listing, "MCA", &skill_set(&["Python"]));

        assert!(result.matched_skills.is_empty());
        assert_eq!(result.score, 1);
        assert_eq!(result.max_possible_score, 1);
    }

    #[test]
    fn test_duplicate_required_skill_counted_once() {
        let listing = create_listing(&["Python", "Python"], &[]);

        let result = score_listing(&listing, "BCA", &skill_set(&["Python"]));

        assert_eq!(result.matched_skills, vec!["Python"]);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_score_within_bounds() {
        let listing = create_listing(&["Python", "SQL", "Excel"], &["B.Com"]);

        let result = score_listing(&listing, "B.Com", &skill_set(&["Python", "SQL", "Excel"]));

        assert!(result.score <= result.max_possible_score);
        assert_eq!(result.score, 4);
        assert_eq!(result.max_possible_score, 4);
    }
}
