// Core algorithm exports
pub mod matcher;
pub mod scoring;

pub use matcher::{MatchError, Matcher, RankOutcome, DEFAULT_TOP_N};
pub use scoring::{score_listing, ListingScore};
