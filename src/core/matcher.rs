use crate::models::{IntakeSession, MatchQuery, UniversityRecord};
use crate::services::Dataset;
use thiserror::Error;

/// Default number of universities returned per lookup
pub const DEFAULT_MATCH_LIMIT: usize = 5;

/// Errors that abort a lookup
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Grade 12 GPA is not a number: {0:?}")]
    InvalidGpa(String),

    #[error("Session is missing the {0} answer")]
    Incomplete(&'static str),
}

/// Result of the matching process
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub matches: Vec<UniversityRecord>,
    /// Records that passed both filters, before the limit was applied
    pub total_candidates: usize,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Finds universities for a finished intake
///
/// # Pipeline Stages
/// 1. Major substring filter
/// 2. GPA threshold filter (wildcard always passes)
/// 3. First `limit` survivors in dataset order
#[derive(Debug, Clone)]
pub struct Matcher {
    limit: usize,
}

impl Matcher {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Find matches for a query
    ///
    /// No ranking is applied: the result keeps dataset row order.
    pub fn find_matches(&self, dataset: &Dataset, query: &MatchQuery) -> MatchResult {
        let candidates: Vec<&UniversityRecord> = dataset
            .query_by_major_and_gpa(&query.major, query.grade_12_gpa)
            .collect();
        let total_candidates = candidates.len();

        let matches = candidates
            .into_iter()
            .take(self.limit)
            .cloned()
            .collect();

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_LIMIT)
    }
}

/// Build the lookup query from a completed session
pub fn build_query(session: &IntakeSession) -> Result<MatchQuery, MatchError> {
    let raw_gpa = session
        .grade_12
        .as_deref()
        .ok_or(MatchError::Incomplete("grade 12"))?;
    let major = session
        .major
        .clone()
        .ok_or(MatchError::Incomplete("major"))?;

    let grade_12_gpa = raw_gpa
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|gpa| gpa.is_finite())
        .ok_or_else(|| MatchError::InvalidGpa(raw_gpa.to_string()))?;

    Ok(MatchQuery { major, grade_12_gpa })
}
