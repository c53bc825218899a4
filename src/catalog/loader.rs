use crate::catalog::inference::{
    generate_application_tips, generate_description, infer_education, infer_skills,
};
use crate::catalog::CatalogError;
use crate::models::Listing;
use std::io::Read;
use std::path::Path;

/// Column layout of the internship CSV export:
/// id, job title, job type, company, posted date, city, state, stipend,
/// start date, duration, openings, last date to apply
const MIN_FIELDS: usize = 11;

/// Parse internship listings from CSV text
///
/// The header row is skipped, quoted fields are honored, blank lines are
/// ignored, and rows with fewer than eleven fields are dropped. Skill and
/// education requirements are inferred from the job title, and the free-text
/// description and application tips are generated per listing.
pub fn parse_listings<R: Read>(reader: R) -> Result<Vec<Listing>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut listings = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() < MIN_FIELDS {
            tracing::debug!(
                row = index + 1,
                fields = record.len(),
                "Skipping short catalog row"
            );
            continue;
        }

        let field = |i: usize| record.get(i).unwrap_or("").to_string();

        let mut title = field(1);
        if title.is_empty() {
            title = "Internship Position".to_string();
        }
        let mut id = field(0);
        if id.is_empty() {
            id = (index + 1).to_string();
        }

        let mut listing = Listing {
            id,
            required_skills: infer_skills(&title),
            acceptable_education: infer_education(&title),
            job_type: field(2),
            company: field(3),
            posted_date: field(4),
            city: field(5),
            state: field(6),
            stipend: field(7),
            start_date: field(8),
            duration: field(9),
            openings: field(10),
            apply_by: field(11),
            description: String::new(),
            application_tips: String::new(),
            title,
        };

        listing.description = generate_description(&listing);
        listing.application_tips = generate_application_tips(&listing.title);
        listings.push(listing);
    }

    Ok(listings)
}

/// Load internship listings from a CSV file on disk
pub fn load_listings(path: &Path) -> Result<Vec<Listing>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_listings(file)
}
