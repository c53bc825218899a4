// Catalog provider: CSV ingestion, inference tables, read-only catalog handle
pub mod inference;
pub mod loader;

use crate::models::Listing;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use inference::{
    generate_application_tips, generate_description, infer_education, infer_skills,
    EDUCATION_LEVELS, SKILL_CATEGORIES,
};
pub use loader::{load_listings, parse_listings};

/// Errors that can occur while loading the listing catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog contains no listings")]
    Empty,
}

/// The listing catalog, loaded once at startup and held read-only
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load the catalog from a CSV file, refusing an empty result
    ///
    /// Startup treats "no catalog" as fatal so the matcher can never run
    /// against a catalog that failed to load.
    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        let listings = load_listings(path)?;
        if listings.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { listings })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
