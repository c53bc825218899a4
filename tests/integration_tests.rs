// Integration tests for Placement Algo

use placement_algo::catalog::parse_listings;
use placement_algo::models::{ApplicantProfile, Listing};
use placement_algo::{MatchError, Matcher, RecommendationReport};
use std::io::Cursor;

const CATALOG_CSV: &str = "\
id,job_title,job_type,company,posted_date,city,state,stipend,start_date,duration,openings,last_date_to_apply
INT001,IT Support Internship,Internship,Nexile Systems,2024-04-18,Pune,Maharashtra,10000,2024-06-03,3 Months,2,2024-05-20
INT002,Website Development Internship,Internship,BrightWeb Studio,2024-04-20,Bengaluru,Karnataka,12000,2024-06-10,6 Months,3,2024-05-25
INT003,Data Analysis Internship,Internship,Quantix Analytics,2024-04-22,Hyderabad,Telangana,15000,2024-06-01,6 Months,2,2024-05-28
INT004,Finance Internship,Internship,Ledger & Sons,2024-04-25,Mumbai,Maharashtra,12500,2024-06-15,3 Months,1,2024-05-30
INT005,Civil Engineering Internship,Internship,Meridian Infra,2024-05-02,Ahmedabad,Gujarat,9000,2024-06-20,6 Months,2,2024-06-05
INT006,Social Outreach Internship,Internship,Samarth Foundation,2024-05-05,Jaipur,Rajasthan,6000,2024-06-12,3 Months,5,2024-06-02
";

fn load_catalog() -> Vec<Listing> {
    parse_listings(Cursor::new(CATALOG_CSV)).unwrap()
}

fn create_profile(education: &str, skills: &[&str]) -> ApplicantProfile {
    ApplicantProfile::new(education, skills.iter().map(|s| s.to_string()).collect())
}

fn create_listing(id: &str, required_skills: &[&str], acceptable_education: &[&str]) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Role {}", id),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        acceptable_education: acceptable_education.iter().map(|s| s.to_string()).collect(),
        job_type: "Internship".to_string(),
        company: format!("Company {}", id),
        posted_date: String::new(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        stipend: "10000".to_string(),
        start_date: String::new(),
        duration: "3 Months".to_string(),
        openings: "1".to_string(),
        apply_by: "2024-06-01".to_string(),
        description: String::new(),
        application_tips: String::new(),
    }
}

#[test]
fn test_end_to_end_recommendation() {
    let catalog = load_catalog();
    let matcher = Matcher::with_default_limit();
    let profile = create_profile("B.Tech CS", &["Python", "SQL", "HTML", "Excel"]);

    let result = matcher.rank(&profile, &catalog, 5).unwrap();

    assert!(!result.matches.is_empty());
    assert!(result.matches.len() <= 5);
    assert_eq!(result.total_listings, 6);

    // Every returned listing shares something with the profile
    for m in &result.matches {
        assert!(m.score > 0);
        assert!(m.score <= m.max_possible_score);
    }

    // Sorted by score descending
    for pair in result.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // The data-analysis listing matches Python, SQL, Excel plus education
    let data_match = result
        .matches
        .iter()
        .find(|m| m.id == "INT003")
        .expect("data analysis listing should match");
    assert_eq!(data_match.matched_skills, vec!["Python", "Excel", "SQL"]);
}

#[test]
fn test_unmatched_catalog_yields_empty_result() {
    let catalog = load_catalog();
    let matcher = Matcher::with_default_limit();
    // No listing requires these skills or accepts this education
    let profile = create_profile("M.Tech CS", &["Ethical Hacking"]);

    let result = matcher.rank(&profile, &catalog, 5).unwrap();

    assert!(result.matches.is_empty());
    assert_eq!(result.total_listings, 6);
}

#[test]
fn test_validation_gate_blocks_incomplete_profiles() {
    let catalog = load_catalog();
    let matcher = Matcher::with_default_limit();

    let no_education = create_profile("", &["Python"]);
    let no_skills = create_profile("BCA", &[]);

    assert_eq!(
        matcher.rank(&no_education, &catalog, 5).unwrap_err(),
        MatchError::MissingEducation
    );
    assert_eq!(
        matcher.rank(&no_skills, &catalog, 5).unwrap_err(),
        MatchError::NoSkillsSelected
    );
}

#[test]
fn test_top_five_from_seven_distinct_scores() {
    // Seven listings with distinct nonzero scores 1..=7
    let all_skills = [
        "Python", "SQL", "Excel", "HTML", "CSS", "React", "Figma",
    ];
    let listings: Vec<Listing> = (1..=7usize)
        .map(|n| create_listing(&n.to_string(), &all_skills[..n], &[]))
        .collect();
    let matcher = Matcher::with_default_limit();
    let profile = create_profile("BCA", &all_skills);

    let result = matcher.rank(&profile, &listings, 5).unwrap();

    assert_eq!(result.matches.len(), 5);
    let scores: Vec<u32> = result.matches.iter().map(|m| m.score).collect();
    assert_eq!(scores, vec![7, 6, 5, 4, 3]);
    let ids: Vec<&str> = result.matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["7", "6", "5", "4", "3"]);
}

#[test]
fn test_truncation_length_is_min_of_limit_and_survivors() {
    let matcher = Matcher::with_default_limit();
    let profile = create_profile("BCA", &["Python"]);

    let listings: Vec<Listing> = (0..3)
        .map(|i| create_listing(&i.to_string(), &["Python"], &[]))
        .collect();

    let result = matcher.rank(&profile, &listings, 5).unwrap();
    assert_eq!(result.matches.len(), 3);

    let result = matcher.rank(&profile, &listings, 2).unwrap();
    assert_eq!(result.matches.len(), 2);
}

#[test]
fn test_repeated_runs_are_identical() {
    let catalog = load_catalog();
    let matcher = Matcher::with_default_limit();
    let profile = create_profile("BCA", &["HTML", "CSS", "Communication"]);

    let first = matcher.rank(&profile, &catalog, 5).unwrap();
    let second = matcher.rank(&profile, &catalog, 5).unwrap();

    assert_eq!(first.matches, second.matches);
}

#[test]
fn test_inputs_not_mutated_by_rank() {
    let catalog = load_catalog();
    let matcher = Matcher::with_default_limit();
    let profile = create_profile("BCA", &["Python", "SQL"]);

    let skills_before = catalog[2].required_skills.clone();
    let _ = matcher.rank(&profile, &catalog, 5).unwrap();

    assert_eq!(catalog[2].required_skills, skills_before);
    assert_eq!(profile.skills, vec!["Python", "SQL"]);
}

#[test]
fn test_report_over_match_run() {
    let catalog = load_catalog();
    let matcher = Matcher::with_default_limit();
    let profile = create_profile("B.Tech CS", &["Python", "SQL", "HTML"]);

    let outcome = matcher.rank(&profile, &catalog, 5).unwrap();
    let report = RecommendationReport::new(&profile, &outcome.matches).render();

    assert!(report.contains("Education: B.Tech CS"));
    assert!(report.contains("Skills: Python, SQL, HTML"));
    assert!(report.contains(&format!("Top {} Matching Roles", outcome.matches.len())));
    for m in &outcome.matches {
        assert!(report.contains(&m.title));
    }
}
